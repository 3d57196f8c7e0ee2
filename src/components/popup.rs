//! Transient feedback overlay for contact form submissions.
//!
//! At most one overlay exists in the document; showing a new one removes any
//! existing overlay first. Each popup auto-dismisses after five seconds
//! unless the user dismisses it earlier.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{window, Document, Element};

const AUTO_DISMISS_MS: u32 = 5_000;
/// Grace period for the fade-out transition before the element is removed.
const REMOVAL_GRACE_MS: u32 = 300;

const SUCCESS_TITLE: &str = "NACHRICHT GESENDET";
const SUCCESS_MESSAGE: &str = "Vielen Dank für deine Nachricht an CYBORG. Deine Nachricht wurde erfolgreich gesendet. Wir melden uns innerhalb von 24 Stunden bei dir.";
const SUCCESS_BUTTON: &str = "BESTÄTIGEN";

const ERROR_TITLE: &str = "SENDEN FEHLGESCHLAGEN";
const ERROR_BUTTON: &str = "ERNEUT VERSUCHEN";
pub const ERROR_FALLBACK: &str = "Entschuldigung, deine Nachricht konnte nicht gesendet werden. Bitte versuche es erneut oder kontaktiere uns direkt unter contact@cyborg-collective.com";

pub fn show_success() {
    show("success", "✓", SUCCESS_TITLE, SUCCESS_MESSAGE, SUCCESS_BUTTON);
}

/// Shows the error popup with the server-supplied message when present,
/// otherwise the fixed fallback text.
pub fn show_error(message: Option<String>) {
    let text = message.unwrap_or_else(|| ERROR_FALLBACK.to_string());
    show("error", "✗", ERROR_TITLE, &text, ERROR_BUTTON);
}

/// Starts the fade-out and removes the overlay once the transition has had
/// time to finish. A no-op when no popup exists.
pub fn dismiss() {
    let document = match window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    if let Ok(Some(popup)) = document.query_selector(".popup-overlay") {
        let _ = popup.class_list().remove_1("active");
        Timeout::new(REMOVAL_GRACE_MS, move || popup.remove()).forget();
    }
}

fn show(icon_class: &str, icon: &str, title: &str, message: &str, button_label: &str) {
    let document = match window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };

    // Singleton overlay: remove before create.
    if let Ok(Some(existing)) = document.query_selector(".popup-overlay") {
        existing.remove();
    }

    let overlay = match build_overlay(&document, icon_class, icon, title, message, button_label) {
        Ok(overlay) => overlay,
        Err(err) => {
            gloo_console::error!("Failed to build popup overlay:", err);
            return;
        }
    };
    if let Some(body) = document.body() {
        let _ = body.append_child(&overlay);
    }

    Timeout::new(AUTO_DISMISS_MS, dismiss).forget();
}

fn build_overlay(
    document: &Document,
    icon_class: &str,
    icon: &str,
    title: &str,
    message: &str,
    button_label: &str,
) -> Result<Element, JsValue> {
    let overlay = document.create_element("div")?;
    overlay.set_class_name("popup-overlay active");

    let container = document.create_element("div")?;
    container.set_class_name("popup-container");

    let icon_element = document.create_element("div")?;
    icon_element.set_class_name(&format!("popup-icon {}", icon_class));
    icon_element.set_text_content(Some(icon));

    let title_element = document.create_element("h3")?;
    title_element.set_class_name("popup-title");
    title_element.set_text_content(Some(title));

    let message_element = document.create_element("p")?;
    message_element.set_class_name("popup-message");
    message_element.set_text_content(Some(message));

    let button = document.create_element("button")?;
    button.set_class_name("popup-button");
    let label = document.create_element("span")?;
    label.set_text_content(Some(button_label));
    let glow = document.create_element("div")?;
    glow.set_class_name("button-glow");
    button.append_child(&label)?;
    button.append_child(&glow)?;

    let on_dismiss = Closure::<dyn FnMut()>::new(dismiss);
    button
        .dyn_ref::<web_sys::HtmlElement>()
        .ok_or_else(|| JsValue::from_str("popup button is not an HtmlElement"))?
        .set_onclick(Some(on_dismiss.as_ref().unchecked_ref()));
    on_dismiss.forget();

    container.append_child(&icon_element)?;
    container.append_child(&title_element)?;
    container.append_child(&message_element)?;
    container.append_child(&button)?;
    overlay.append_child(&container)?;

    Ok(overlay)
}

// Run with `wasm-pack test --headless --firefox` (or --chrome).
#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        window().unwrap().document().unwrap()
    }

    fn clear_overlays() {
        while let Ok(Some(overlay)) = document().query_selector(".popup-overlay") {
            overlay.remove();
        }
    }

    #[wasm_bindgen_test]
    fn back_to_back_popups_leave_a_single_overlay() {
        clear_overlays();
        show_success();
        show_error(None);
        let overlays = document().query_selector_all(".popup-overlay").unwrap();
        assert_eq!(overlays.length(), 1);
        // The survivor is the most recent popup.
        let title = document().query_selector(".popup-title").unwrap().unwrap();
        assert_eq!(title.text_content().as_deref(), Some(ERROR_TITLE));
        let message = document().query_selector(".popup-message").unwrap().unwrap();
        assert_eq!(message.text_content().as_deref(), Some(ERROR_FALLBACK));
        clear_overlays();
    }

    #[wasm_bindgen_test]
    fn error_popup_carries_the_server_message() {
        clear_overlays();
        show_error(Some("quota exceeded".to_string()));
        let message = document().query_selector(".popup-message").unwrap().unwrap();
        assert_eq!(message.text_content().as_deref(), Some("quota exceeded"));
        clear_overlays();
    }

    #[wasm_bindgen_test]
    fn dismiss_without_a_popup_is_a_noop() {
        clear_overlays();
        dismiss();
        assert!(document().query_selector(".popup-overlay").unwrap().is_none());
    }
}
