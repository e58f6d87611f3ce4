use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::fmt;
use std::num::IntErrorKind;

pub mod tween;

pub use tween::{CounterTween, TweenFrame};

/// Default widget parameters
pub mod defaults {
    pub const ANIMATION_DURATION_MS: f64 = 500.0;

    pub const INCOME: u64 = 85_000;
    pub const INCOME_MIN: u64 = 0;
    pub const INCOME_MAX: u64 = 250_000;
    pub const INCOME_STEP: u64 = 1_000;

    pub const TUITION: u64 = 8_000;
    pub const TUITION_MIN: u64 = 0;
    pub const TUITION_MAX: u64 = 30_000;
    pub const TUITION_STEP: u64 = 100;

    pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 20.0;
}

/// Estimate rates in basis points, kept integral so the formulas floor exactly.
pub mod rates {
    pub const BASIS_POINTS: u64 = 10_000;
    /// Average share of income that ends up as missed deductible expenses.
    pub const RECOVERABLE_EXPENSE_BPS: u64 = 1_200;
    /// Average marginal tax rate applied to the recovered expenses.
    pub const MARGINAL_TAX_BPS: u64 = 2_500;
    /// Federal tuition credit rate.
    pub const TUITION_CREDIT_BPS: u64 = 1_500;
}

// Leading integer the way a browser's parseInt reads it: whitespace, sign,
// ASCII digits. Other scripts' digits are not numbers to parseInt.
static LEADING_INTEGER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?)([0-9]+)").expect("leading integer pattern is valid"));

/// Potential tax savings for a yearly income: `floor(income * 0.12 * 0.25)`.
pub fn formula_income(income: u64) -> u64 {
    let scaled = u128::from(income)
        * u128::from(rates::RECOVERABLE_EXPENSE_BPS)
        * u128::from(rates::MARGINAL_TAX_BPS)
        / u128::from(rates::BASIS_POINTS * rates::BASIS_POINTS);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

/// Tuition tax credit: `floor(tuition * 0.15)`.
pub fn formula_tuition(tuition: u64) -> u64 {
    let scaled = u128::from(tuition) * u128::from(rates::TUITION_CREDIT_BPS)
        / u128::from(rates::BASIS_POINTS);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

/// Amount parsing error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    NoDigits(String),
    Negative(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::Empty => write!(f, "Amount cannot be empty"),
            AmountParseError::NoDigits(input) => {
                write!(f, "Amount '{}' does not start with a number", input)
            }
            AmountParseError::Negative(input) => {
                write!(f, "Amount '{}' must not be negative", input)
            }
        }
    }
}

impl std::error::Error for AmountParseError {}

/// Parse the leading integer of a user-typed amount.
///
/// Mirrors how browsers read a number field: surrounding whitespace is
/// ignored, anything after the leading digits is dropped (`"12.9"` → 12,
/// `"400abc"` → 400) and values past `u64::MAX` saturate.
///
/// # Examples
/// ```
/// use deduction_widgets::parse_amount;
/// assert_eq!(parse_amount("85000"), Ok(85_000));
/// assert_eq!(parse_amount("  12.9"), Ok(12));
/// assert!(parse_amount("abc").is_err());
/// ```
pub fn parse_amount(input: &str) -> Result<u64, AmountParseError> {
    if input.trim().is_empty() {
        return Err(AmountParseError::Empty);
    }

    let captures = LEADING_INTEGER_REGEX
        .captures(input)
        .ok_or_else(|| AmountParseError::NoDigits(input.to_string()))?;
    let digits = &captures[2];
    let negative = &captures[1] == "-";

    if negative && digits.bytes().any(|b| b != b'0') {
        return Err(AmountParseError::Negative(input.to_string()));
    }

    match digits.parse::<u64>() {
        Ok(value) => Ok(value),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(u64::MAX),
        Err(_) => Err(AmountParseError::NoDigits(input.to_string())),
    }
}

/// Coerce arbitrary input to an amount, falling back to 0.
pub fn coerce_amount(input: &str) -> u64 {
    match parse_amount(input) {
        Ok(value) => value,
        Err(e) => {
            debug!("Coercing amount to 0: {}", e);
            0
        }
    }
}

/// Format a whole-dollar amount with en-US digit grouping, e.g. `$2,550`.
pub fn format_currency(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whether the page header should switch to its compact "scrolled" style.
pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > defaults::HEADER_SCROLL_THRESHOLD_PX
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EstimatorKind {
    /// Yearly income → potential tax savings.
    IncomeSavings,
    /// Tuition fees → tuition tax credit.
    TuitionCredit,
}

impl EstimatorKind {
    pub fn estimate(self, value: u64) -> u64 {
        match self {
            EstimatorKind::IncomeSavings => formula_income(value),
            EstimatorKind::TuitionCredit => formula_tuition(value),
        }
    }
}

impl fmt::Display for EstimatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimatorKind::IncomeSavings => write!(f, "income savings"),
            EstimatorKind::TuitionCredit => write!(f, "tuition credit"),
        }
    }
}

/// Per-mount overrides read from a widget's `data-estimator` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EstimatorOverrides {
    pub min: Option<u64>,
    pub max: Option<u64>,
    pub step: Option<u64>,
    pub default_value: Option<u64>,
}

impl EstimatorOverrides {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Configuration for one estimator widget
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorConfig {
    pub kind: EstimatorKind,
    /// Slider bounds. Typed values outside them are still accepted.
    pub min: u64,
    pub max: u64,
    pub step: u64,
    /// Value applied once when the widget mounts.
    pub default_value: u64,
    pub duration_ms: f64,
}

impl EstimatorConfig {
    pub fn income_savings() -> Self {
        Self {
            kind: EstimatorKind::IncomeSavings,
            min: defaults::INCOME_MIN,
            max: defaults::INCOME_MAX,
            step: defaults::INCOME_STEP,
            default_value: defaults::INCOME,
            duration_ms: defaults::ANIMATION_DURATION_MS,
        }
    }

    pub fn tuition_credit() -> Self {
        Self {
            kind: EstimatorKind::TuitionCredit,
            min: defaults::TUITION_MIN,
            max: defaults::TUITION_MAX,
            step: defaults::TUITION_STEP,
            default_value: defaults::TUITION,
            duration_ms: defaults::ANIMATION_DURATION_MS,
        }
    }

    pub fn for_kind(kind: EstimatorKind) -> Self {
        match kind {
            EstimatorKind::IncomeSavings => Self::income_savings(),
            EstimatorKind::TuitionCredit => Self::tuition_credit(),
        }
    }

    /// Apply mount-point overrides. Inconsistent bounds or a zero step are
    /// rejected with a warning and the built-in values are kept.
    pub fn with_overrides(mut self, overrides: &EstimatorOverrides) -> Self {
        let min = overrides.min.unwrap_or(self.min);
        let max = overrides.max.unwrap_or(self.max);
        if min <= max {
            self.min = min;
            self.max = max;
        } else {
            warn!(
                "Ignoring {} slider bounds: min {} is above max {}",
                self.kind, min, max
            );
        }

        match overrides.step {
            Some(0) => warn!("Ignoring zero slider step for {}", self.kind),
            Some(step) => self.step = step,
            None => {}
        }

        if let Some(value) = overrides.default_value {
            self.default_value = value;
        }
        self
    }

    pub fn estimate(&self, value: u64) -> u64 {
        self.kind.estimate(value)
    }
}

/// State of one estimator widget: the synced input pair, the derived
/// estimate and the counter animation showing it.
///
/// The text field and the slider are written together by every update, and
/// each new value supersedes any running animation. The next animation
/// starts from whatever was last shown, never from re-parsed display text.
#[derive(Debug, Clone)]
pub struct Estimator {
    config: EstimatorConfig,
    text_value: String,
    range_value: u64,
    estimate: u64,
    displayed: u64,
    tween: Option<CounterTween>,
}

impl Estimator {
    pub fn new(config: EstimatorConfig) -> Self {
        Self {
            config,
            text_value: "0".to_string(),
            range_value: 0,
            estimate: 0,
            displayed: 0,
            tween: None,
        }
    }

    /// Set the source value, sync both inputs and start animating the
    /// display toward the new estimate. Returns the estimate.
    pub fn set_value(&mut self, value: u64) -> u64 {
        let estimate = self.config.estimate(value);
        debug!(
            "{}: value {} -> estimate {} (animating from {})",
            self.config.kind, value, estimate, self.displayed
        );

        self.tween = Some(CounterTween::new(
            self.displayed,
            estimate,
            self.config.duration_ms,
        ));
        self.estimate = estimate;
        self.text_value = value.to_string();
        self.range_value = value;
        estimate
    }

    /// Set the source value from raw field text; malformed text counts as 0.
    pub fn set_from_text(&mut self, text: &str) -> u64 {
        self.set_value(coerce_amount(text))
    }

    /// Advance the running animation to `now` (milliseconds, frame clock).
    ///
    /// Returns `None` once there is nothing left to animate.
    pub fn tick(&mut self, now: f64) -> Option<TweenFrame> {
        let tween = self.tween.as_mut()?;
        let frame = tween.sample(now);
        self.displayed = frame.value;
        if frame.finished {
            self.tween = None;
        }
        Some(frame)
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    pub fn text_value(&self) -> &str {
        &self.text_value
    }

    pub fn range_value(&self) -> u64 {
        self.range_value
    }

    pub fn estimate(&self) -> u64 {
        self.estimate
    }

    pub fn displayed(&self) -> u64 {
        self.displayed
    }

    pub fn displayed_text(&self) -> String {
        format_currency(self.displayed)
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }
}
