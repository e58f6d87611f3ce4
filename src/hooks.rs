use crate::frame::FrameLoop;
use deduction_widgets::{coerce_amount, Estimator, EstimatorConfig};
use log::warn;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Render snapshot and callbacks for one estimator widget.
#[derive(Clone)]
pub struct EstimatorHandle {
    /// Current text of the amount field.
    pub text: String,
    /// Current slider position; always the same number as `text`.
    pub range_value: u64,
    /// Formatted, possibly mid-animation, estimate.
    pub display: String,
    pub animating: bool,
    /// Callback for the amount field's `oninput`. Malformed text counts as 0
    /// and the field is rewritten with the coerced number.
    pub on_text_input: Callback<InputEvent>,
    /// Callback for the slider's `oninput`.
    pub on_range_input: Callback<InputEvent>,
}

/// Coerce the field's text to an amount and write the number back into it.
pub(crate) fn commit_amount_field(input: &HtmlInputElement) -> u64 {
    let value = coerce_amount(&input.value());
    input.set_value(&value.to_string());
    value
}

/// Custom hook owning an [`Estimator`] and its counter animation.
///
/// Every new value replaces the running [`FrameLoop`], which
/// cancels the previous animation's pending frame. The widget's default
/// value is applied once on mount.
#[hook]
pub fn use_estimator(config: EstimatorConfig) -> EstimatorHandle {
    let default_value = config.default_value;
    let estimator = use_mut_ref(move || Estimator::new(config));
    let frame_loop = use_mut_ref(|| None::<FrameLoop>);
    let redraw = use_force_update();

    let set_value = {
        let estimator = estimator.clone();
        let frame_loop = frame_loop.clone();
        Callback::from(move |value: u64| {
            estimator.borrow_mut().set_value(value);
            frame_loop.borrow_mut().take();

            let stepper = estimator.clone();
            let redraw_frame = redraw.clone();
            let started = FrameLoop::start(move |timestamp| {
                let frame = stepper.borrow_mut().tick(timestamp);
                redraw_frame.force_update();
                matches!(frame, Some(f) if !f.finished)
            });
            match started {
                Ok(handle) => *frame_loop.borrow_mut() = Some(handle),
                Err(e) => warn!("Could not animate estimate: {}", e),
            }
            redraw.force_update();
        })
    };

    let on_text_input = {
        let set_value = set_value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_value.emit(commit_amount_field(&input));
        })
    };

    let on_range_input = {
        let set_value = set_value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_value.emit(coerce_amount(&input.value()));
        })
    };

    // Populate the display on mount; stop animating on unmount.
    {
        let set_value = set_value.clone();
        let frame_loop = frame_loop.clone();
        use_effect_with((), move |_| {
            set_value.emit(default_value);
            move || {
                frame_loop.borrow_mut().take();
            }
        });
    }

    let snapshot = estimator.borrow();
    EstimatorHandle {
        text: snapshot.text_value().to_string(),
        range_value: snapshot.range_value(),
        display: snapshot.displayed_text(),
        animating: snapshot.is_animating(),
        on_text_input,
        on_range_input,
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::utils::document;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    fn amount_field(text: &str) -> HtmlInputElement {
        let input: HtmlInputElement = document()
            .expect("document")
            .create_element("input")
            .expect("input created")
            .dyn_into()
            .expect("input element");
        input.set_value(text);
        input
    }

    #[wasm_bindgen_test]
    fn garbage_field_text_is_rewritten_as_zero() {
        let input = amount_field("abc");
        assert_eq!(commit_amount_field(&input), 0);
        assert_eq!(input.value(), "0");
    }

    #[wasm_bindgen_test]
    fn non_ascii_digits_in_field_become_zero() {
        let input = amount_field("\u{0663}");
        assert_eq!(commit_amount_field(&input), 0);
        assert_eq!(input.value(), "0");
    }

    #[wasm_bindgen_test]
    fn fractional_field_text_keeps_integer_part() {
        let input = amount_field("1200.5");
        assert_eq!(commit_amount_field(&input), 1_200);
        assert_eq!(input.value(), "1200");
    }
}
