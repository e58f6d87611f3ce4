//! End-to-end behaviour of the estimator widgets, driven by a simulated
//! 60 fps frame clock.

use deduction_widgets::{
    defaults, formula_income, formula_tuition, Estimator, EstimatorConfig, EstimatorKind,
};
use pretty_assertions::assert_eq;

const FRAME_MS: f64 = 1000.0 / 60.0;

/// Tick until the animation finishes, returning every displayed value and
/// the time of the final frame.
fn run_animation(estimator: &mut Estimator, start: f64) -> (Vec<u64>, f64) {
    let mut now = start;
    let mut shown = Vec::new();
    while let Some(frame) = estimator.tick(now) {
        shown.push(frame.value);
        if frame.finished {
            break;
        }
        now += FRAME_MS;
    }
    (shown, now)
}

#[test]
fn income_widget_initial_value_shows_2550() {
    let config = EstimatorConfig::income_savings();
    let mut estimator = Estimator::new(config.clone());

    assert_eq!(estimator.set_value(config.default_value), 2_550);
    let (shown, _) = run_animation(&mut estimator, 0.0);

    assert_eq!(shown.first().copied(), Some(0));
    assert!(shown.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(estimator.displayed_text(), "$2,550");
    assert_eq!(estimator.text_value(), "85000");
    assert_eq!(estimator.range_value(), 85_000);
}

#[test]
fn tuition_widget_initial_value_shows_1200() {
    let mut estimator = Estimator::new(EstimatorConfig::tuition_credit());

    estimator.set_value(defaults::TUITION);
    run_animation(&mut estimator, 5_000.0);

    assert_eq!(estimator.displayed_text(), "$1,200");
    assert!(!estimator.is_animating());
}

#[test]
fn animation_completes_within_its_duration() {
    let mut estimator = Estimator::new(EstimatorConfig::income_savings());
    estimator.set_value(200_000);

    let (_, finished_at) = run_animation(&mut estimator, 100.0);
    assert!(finished_at - 100.0 < defaults::ANIMATION_DURATION_MS + 2.0 * FRAME_MS);
    assert_eq!(estimator.displayed(), formula_income(200_000));
}

#[test]
fn rapid_updates_converge_to_latest_target() {
    let mut estimator = Estimator::new(EstimatorConfig::income_savings());

    estimator.set_value(85_000);
    estimator.tick(0.0);
    estimator.tick(FRAME_MS);
    estimator.tick(2.0 * FRAME_MS);
    let interrupted_at = estimator.displayed();
    assert!(interrupted_at > 0 && interrupted_at < 2_550);

    // Second change lands before the first animation is done.
    estimator.set_value(150_000);
    let second_start = 3.0 * FRAME_MS;
    let (shown, finished_at) = run_animation(&mut estimator, second_start);

    assert_eq!(shown.first().copied(), Some(interrupted_at));
    assert!(shown.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(estimator.displayed(), formula_income(150_000));
    assert!(finished_at - second_start < defaults::ANIMATION_DURATION_MS + 2.0 * FRAME_MS);
    assert_eq!(estimator.tick(finished_at + FRAME_MS), None);
}

#[test]
fn garbage_text_resets_to_zero() {
    let mut estimator = Estimator::new(EstimatorConfig::tuition_credit());
    estimator.set_value(8_000);
    run_animation(&mut estimator, 0.0);

    assert_eq!(estimator.set_from_text("abc"), 0);
    assert_eq!(estimator.text_value(), "0");
    assert_eq!(estimator.range_value(), 0);

    let (shown, _) = run_animation(&mut estimator, 1_000.0);
    assert!(shown.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(estimator.displayed_text(), "$0");
}

#[test]
fn inputs_stay_in_sync_across_many_updates() {
    let mut estimator = Estimator::new(EstimatorConfig::income_savings());
    for text in ["1", "", "42000", "  7 ", "12.75", "-3", "x9", "250000"] {
        let estimate = estimator.set_from_text(text);
        assert_eq!(estimator.text_value(), estimator.range_value().to_string());
        assert_eq!(estimate, EstimatorKind::IncomeSavings.estimate(estimator.range_value()));
    }
}

#[test]
fn widgets_are_independent() {
    let mut income = Estimator::new(EstimatorConfig::income_savings());
    let mut tuition = Estimator::new(EstimatorConfig::tuition_credit());

    income.set_value(100_000);
    tuition.set_value(20_000);
    run_animation(&mut income, 0.0);

    assert_eq!(income.displayed(), formula_income(100_000));
    assert_eq!(tuition.displayed(), 0);
    assert!(tuition.is_animating());

    run_animation(&mut tuition, 0.0);
    assert_eq!(tuition.displayed(), formula_tuition(20_000));
}
