//! Browser APIs used by the forms. Outside the browser they only log.

#[cfg(any(feature = "hydrate", test))]
use std::{cell::Cell, rc::Rc};

use crate::models::Coordinates;

/// Blocking alert with `message`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
            return;
        }
    }
    log::warn!("alert: {message}");
}

/// Error callback shared between the browser's failure callback and the
/// synchronous rejection path. Whichever reports first consumes it.
#[cfg(any(feature = "hydrate", test))]
type ErrorSlot = Rc<Cell<Option<Box<dyn FnOnce(String)>>>>;

#[cfg(any(feature = "hydrate", test))]
fn report(slot: &ErrorSlot, message: String) {
    if let Some(on_error) = slot.take() {
        on_error(message);
    }
}

/// Runs `request`; if it fails before the browser takes over, the failure
/// goes to `on_error` like any other position error.
#[cfg(any(feature = "hydrate", test))]
fn request_position(
    on_error: impl FnOnce(String) + 'static,
    request: impl FnOnce(ErrorSlot) -> Result<(), String>,
) {
    let slot: ErrorSlot = Rc::new(Cell::new(Some(Box::new(on_error))));
    if let Err(message) = request(Rc::clone(&slot)) {
        log::error!("getCurrentPosition was rejected: {message}");
        report(&slot, message);
    }
}

/// Asks the browser for the device position. Exactly one of the callbacks
/// runs.
#[cfg(feature = "hydrate")]
pub fn current_position(
    on_success: impl FnOnce(Coordinates) + 'static,
    on_error: impl FnOnce(String) + 'static,
) {
    use wasm_bindgen::{closure::Closure, JsCast};

    let Some(geolocation) = web_sys::window().and_then(|w| w.navigator().geolocation().ok())
    else {
        on_error("Geolocation is not supported by this browser".to_string());
        return;
    };

    request_position(on_error, |slot| {
        let success = Closure::once_into_js(move |position: web_sys::GeolocationPosition| {
            let coords = position.coords();
            on_success(Coordinates {
                latitude: coords.latitude(),
                longitude: coords.longitude(),
            });
        });
        let failure = Closure::once_into_js(move |error: web_sys::GeolocationPositionError| {
            report(&slot, error.message());
        });
        geolocation
            .get_current_position_with_error_callback(
                success.unchecked_ref(),
                Some(failure.unchecked_ref()),
            )
            .map_err(|e| {
                e.as_string()
                    .unwrap_or_else(|| "Could not request the current position".to_string())
            })
    });
}

#[cfg(not(feature = "hydrate"))]
pub fn current_position(
    _on_success: impl FnOnce(Coordinates) + 'static,
    on_error: impl FnOnce(String) + 'static,
) {
    on_error("Geolocation is only available in the browser".to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<Cell<Vec<String>>>, impl FnOnce(String) + 'static) {
        let seen = Rc::new(Cell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |message: String| {
            let mut all = sink.take();
            all.push(message);
            sink.set(all);
        })
    }

    #[test]
    fn rejected_request_reaches_error_callback() {
        let (seen, on_error) = recorder();
        request_position(on_error, |_| Err("SecurityError".to_string()));
        assert_eq!(seen.take(), vec!["SecurityError".to_string()]);
    }

    #[test]
    fn error_callback_runs_at_most_once() {
        let (seen, on_error) = recorder();
        request_position(on_error, |slot| {
            report(&slot, "User denied Geolocation".to_string());
            Err("late rejection".to_string())
        });
        assert_eq!(seen.take(), vec!["User denied Geolocation".to_string()]);
    }

    #[test]
    fn accepted_request_leaves_error_callback_unused() {
        let (seen, on_error) = recorder();
        request_position(on_error, |_| Ok(()));
        assert!(seen.take().is_empty());
    }
}
