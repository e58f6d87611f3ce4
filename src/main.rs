//! Entry point for the site widgets.
//! Mounts each estimator on its mount point and installs the page effects.
//! Anything missing from the current page is skipped.

use components::{EstimatorWidget, EstimatorWidgetProps};
use deduction_widgets::EstimatorKind;
use log::{debug, info, warn};
use web_sys::Document;

mod components;
mod config;
mod frame;
mod hooks;
mod page;
mod utils;

use config::{INCOME_MOUNT_ID, TUITION_MOUNT_ID};
use utils::{config_for_mount, element_by_id, WidgetError};

const ESTIMATORS: [(&str, EstimatorKind); 2] = [
    (INCOME_MOUNT_ID, EstimatorKind::IncomeSavings),
    (TUITION_MOUNT_ID, EstimatorKind::TuitionCredit),
];

/// Render one estimator into its mount point, if the page has one.
fn mount_estimator(
    document: &Document,
    mount_id: &str,
    kind: EstimatorKind,
) -> Result<(), WidgetError> {
    let mount = element_by_id(document, mount_id)?;
    let config = config_for_mount(&mount, kind);
    yew::Renderer::<EstimatorWidget>::with_root_and_props(mount, EstimatorWidgetProps { config })
        .render();
    info!("Mounted {} estimator on #{}", kind, mount_id);
    Ok(())
}

fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();

    let document = match utils::document() {
        Ok(document) => document,
        Err(e) => {
            warn!("Widgets not started: {}", e);
            return;
        }
    };

    for (mount_id, kind) in ESTIMATORS {
        if let Err(e) = mount_estimator(&document, mount_id, kind) {
            debug!("Skipping {} estimator: {}", kind, e);
        }
    }

    if let Err(e) = page::install_header_scroll(&document) {
        debug!("Header scroll effect not installed: {}", e);
    }

    match page::observe_reveals(&document) {
        Ok(0) => debug!("No reveal elements on this page"),
        Ok(count) => info!("Reveal animations armed for {} elements", count),
        Err(e) => warn!("Reveal animations not installed: {}", e),
    }
}
