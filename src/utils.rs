use crate::config::OVERRIDES_ATTRIBUTE;
use deduction_widgets::{EstimatorConfig, EstimatorKind, EstimatorOverrides};
use log::{debug, warn};
use std::fmt;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

/// DOM wiring error types
#[derive(Debug)]
pub enum WidgetError {
    NoWindow,
    NoDocument,
    MissingElement(String),
    Js(String),
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetError::NoWindow => write!(f, "No global window available"),
            WidgetError::NoDocument => write!(f, "Window has no document"),
            WidgetError::MissingElement(what) => write!(f, "Element '{}' not found", what),
            WidgetError::Js(msg) => write!(f, "JavaScript error: {}", msg),
        }
    }
}

impl std::error::Error for WidgetError {}

impl From<JsValue> for WidgetError {
    fn from(value: JsValue) -> Self {
        WidgetError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, WidgetError> {
    web_sys::window().ok_or(WidgetError::NoWindow)
}

pub fn document() -> Result<Document, WidgetError> {
    window()?.document().ok_or(WidgetError::NoDocument)
}

pub fn element_by_id(document: &Document, id: &str) -> Result<Element, WidgetError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| WidgetError::MissingElement(format!("#{}", id)))
}

pub fn query_selector(document: &Document, selector: &str) -> Result<Element, WidgetError> {
    document
        .query_selector(selector)?
        .ok_or_else(|| WidgetError::MissingElement(selector.to_string()))
}

/// Build the widget config for a mount point, applying its `data-estimator`
/// JSON overrides when present. Malformed JSON falls back to the defaults.
pub fn config_for_mount(mount: &Element, kind: EstimatorKind) -> EstimatorConfig {
    let config = EstimatorConfig::for_kind(kind);
    let Some(raw) = mount.get_attribute(OVERRIDES_ATTRIBUTE) else {
        return config;
    };

    match EstimatorOverrides::from_json(&raw) {
        Ok(overrides) => {
            debug!("Applying {} overrides: {:?}", kind, overrides);
            config.with_overrides(&overrides)
        }
        Err(e) => {
            warn!("Invalid {} attribute for {}: {}", OVERRIDES_ATTRIBUTE, kind, e);
            config
        }
    }
}
