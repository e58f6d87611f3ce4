//! Yew view components for the estimator widgets.
//!
//! The leaf components are stateless and render from props; the
//! [`EstimatorWidget`] wires them to [`use_estimator`].

use crate::config::*;
use crate::hooks::use_estimator;
use deduction_widgets::{EstimatorConfig, EstimatorKind};
use yew::prelude::*;

/// Element ids and copy for one widget kind.
struct WidgetCopy {
    input_id: &'static str,
    range_id: &'static str,
    display_id: &'static str,
    input_label: &'static str,
    result_label: &'static str,
}

fn widget_copy(kind: EstimatorKind) -> WidgetCopy {
    match kind {
        EstimatorKind::IncomeSavings => WidgetCopy {
            input_id: INCOME_INPUT_ID,
            range_id: INCOME_RANGE_ID,
            display_id: INCOME_DISPLAY_ID,
            input_label: "Yearly income",
            result_label: "Estimated tax savings",
        },
        EstimatorKind::TuitionCredit => WidgetCopy {
            input_id: TUITION_INPUT_ID,
            range_id: TUITION_RANGE_ID,
            display_id: TUITION_DISPLAY_ID,
            input_label: "Tuition fees",
            result_label: "Estimated tuition credit",
        },
    }
}

/// Numeric amount field with a dollar prefix.
#[derive(Properties, PartialEq)]
pub struct AmountFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub text: AttrValue,
    pub min: u64,
    pub oninput: Callback<InputEvent>,
}

#[function_component(AmountField)]
pub fn amount_field(props: &AmountFieldProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <div class="input-with-prefix">
                <span class="input-prefix">{ "$" }</span>
                <input type="number"
                    id={props.id.clone()}
                    inputmode="numeric"
                    min={props.min.to_string()}
                    value={props.text.clone()}
                    oninput={props.oninput.clone()}
                />
            </div>
        </div>
    }
}

/// Range slider bound to the same value as the amount field.
#[derive(Properties, PartialEq)]
pub struct AmountSliderProps {
    pub id: AttrValue,
    pub min: u64,
    pub max: u64,
    pub step: u64,
    pub value: u64,
    pub oninput: Callback<InputEvent>,
}

#[function_component(AmountSlider)]
pub fn amount_slider(props: &AmountSliderProps) -> Html {
    html! {
        <input type="range"
            id={props.id.clone()}
            class="range-slider"
            min={props.min.to_string()}
            max={props.max.to_string()}
            step={props.step.to_string()}
            value={props.value.to_string()}
            oninput={props.oninput.clone()}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct EstimateDisplayProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub text: AttrValue,
    pub animating: bool,
}

#[function_component(EstimateDisplay)]
pub fn estimate_display(props: &EstimateDisplayProps) -> Html {
    html! {
        <div class="estimate-result">
            <span class="estimate-label">{ props.label.clone() }</span>
            <span id={props.id.clone()}
                class={classes!("estimate-value", props.animating.then_some("counting"))}
                aria-live="polite">
                { props.text.clone() }
            </span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EstimatorWidgetProps {
    pub config: EstimatorConfig,
}

/// Amount field, slider and animated estimate for one estimator kind.
#[function_component(EstimatorWidget)]
pub fn estimator_widget(props: &EstimatorWidgetProps) -> Html {
    let config = &props.config;
    let copy = widget_copy(config.kind);
    let estimator = use_estimator(config.clone());

    html! {
        <div class="estimator-widget">
            <AmountField
                id={copy.input_id}
                label={copy.input_label}
                text={estimator.text.clone()}
                min={config.min}
                oninput={estimator.on_text_input.clone()}
            />
            <AmountSlider
                id={copy.range_id}
                min={config.min}
                max={config.max}
                step={config.step}
                value={estimator.range_value}
                oninput={estimator.on_range_input.clone()}
            />
            <EstimateDisplay
                id={copy.display_id}
                label={copy.result_label}
                text={estimator.display.clone()}
                animating={estimator.animating}
            />
        </div>
    }
}
