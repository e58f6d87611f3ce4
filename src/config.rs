//! Page-level configuration constants.

// Mount points for the estimator widgets
pub const INCOME_MOUNT_ID: &str = "income-estimator";
pub const TUITION_MOUNT_ID: &str = "tuition-estimator";
pub const OVERRIDES_ATTRIBUTE: &str = "data-estimator";

// Element ids rendered by each widget, matching the site stylesheet
pub const INCOME_INPUT_ID: &str = "yearlyIncome";
pub const INCOME_RANGE_ID: &str = "incomeRange";
pub const INCOME_DISPLAY_ID: &str = "estimatedSavings";
pub const TUITION_INPUT_ID: &str = "tuitionFees";
pub const TUITION_RANGE_ID: &str = "tuitionRange";
pub const TUITION_DISPLAY_ID: &str = "estimatedCredit";

// Sticky header
pub const HEADER_SELECTOR: &str = "header";
pub const HEADER_SCROLLED_CLASS: &str = "scrolled";

// Reveal-on-scroll animations
pub const REVEAL_SELECTOR: &str = ".animate-fade-up, .animate-slide-left, .animate-slide-right, \
                                   .animate-zoom-in, .animate-pop-in, .stagger-container";
pub const REVEAL_VISIBLE_CLASS: &str = "visible";
pub const REVEAL_ANIMATE_CLASS: &str = "show-animate";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
