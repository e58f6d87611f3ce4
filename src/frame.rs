//! Cancellable `requestAnimationFrame` loop.
//!
//! A [`FrameLoop`] keeps requesting frames for as long as its step function
//! returns `true`. Dropping the handle cancels the pending frame, so a
//! widget holding one handle never has two animations writing its display.

use crate::utils::{window, WidgetError};
use log::warn;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

type FrameCallback = Closure<dyn FnMut(f64)>;

pub struct FrameLoop {
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
    /// Start the loop. `step` receives the frame timestamp in milliseconds.
    pub fn start<F>(mut step: F) -> Result<Self, WidgetError>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let pending_inner = pending.clone();
        let callback_inner = callback.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            pending_inner.set(None);
            if !step(timestamp) {
                return;
            }
            // Re-arm with the same closure for the next frame.
            if let Some(cb) = callback_inner.borrow().as_ref() {
                match request_frame(cb) {
                    Ok(id) => pending_inner.set(Some(id)),
                    Err(e) => warn!("Animation stopped: {}", e),
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let requested = match callback.borrow().as_ref() {
            Some(cb) => request_frame(cb),
            None => Err(WidgetError::Js("frame callback missing".to_string())),
        };
        match requested {
            Ok(id) => pending.set(Some(id)),
            Err(e) => {
                callback.borrow_mut().take();
                return Err(e);
            }
        }

        Ok(Self { pending, callback })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Ok(window) = window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // Break the closure's reference to itself.
        self.callback.borrow_mut().take();
    }
}

fn request_frame(callback: &FrameCallback) -> Result<i32, WidgetError> {
    Ok(window()?.request_animation_frame(callback.as_ref().unchecked_ref())?)
}
