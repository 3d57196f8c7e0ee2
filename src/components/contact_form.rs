//! Contact form: serializes the fields, posts them to the backend and drives
//! the result popup. Validation is the backend's job; the form sends whatever
//! the user typed.

use gloo_console::log;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::popup;
use crate::config;

#[derive(Serialize, Debug, PartialEq)]
pub struct ContactPayload {
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub plan: Option<String>,
    pub message: Option<String>,
}

#[derive(Deserialize, Debug, PartialEq)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

async fn send_message(payload: &ContactPayload) -> Result<ContactResponse, gloo_net::Error> {
    Request::post(&format!("{}/contact", config::get_backend_url()))
        .json(payload)?
        .send()
        .await?
        .json::<ContactResponse>()
        .await
}

/// Builds the next plan selection. Every pick carries a fresh sequence
/// number, so choosing the same plan twice is still a new selection and
/// re-applies to the select even if the user changed it in between.
pub fn next_preset(previous: Option<&(usize, String)>, plan: &str) -> (usize, String) {
    let serial = previous.map_or(0, |(serial, _)| serial + 1);
    (serial, plan.to_string())
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    /// Plan preselected from a plan card; `None` leaves the select untouched.
    #[prop_or_default]
    pub preset_plan: Option<(usize, String)>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let company = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let plan = use_state(String::new);
    let message = use_state(String::new);
    let is_sending = use_state(|| false);

    // A plan card click lands here through the preset prop.
    {
        let plan = plan.clone();
        use_effect_with_deps(
            move |preset: &Option<(usize, String)>| {
                if let Some((_, preset)) = preset {
                    plan.set(preset.clone());
                }
                || ()
            },
            props.preset_plan.clone(),
        );
    }

    let on_company = {
        let company = company.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            company.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_phone = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(input.value());
        })
    };
    let on_plan = {
        let plan = plan.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            plan.set(select.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(textarea.value());
        })
    };

    let onsubmit = {
        let company = company.clone();
        let email = email.clone();
        let phone = phone.clone();
        let plan = plan.clone();
        let message = message.clone();
        let is_sending = is_sending.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_sending {
                return;
            }
            is_sending.set(true);

            let payload = ContactPayload {
                company: Some((*company).clone()),
                email: Some((*email).clone()),
                phone: Some((*phone).clone()),
                plan: Some((*plan).clone()),
                message: Some((*message).clone()),
            };

            let company = company.clone();
            let email = email.clone();
            let phone = phone.clone();
            let plan = plan.clone();
            let message = message.clone();
            let is_sending = is_sending.clone();

            spawn_local(async move {
                match send_message(&payload).await {
                    Ok(response) if response.success => {
                        popup::show_success();
                        company.set(String::new());
                        email.set(String::new());
                        phone.set(String::new());
                        plan.set(String::new());
                        message.set(String::new());
                    }
                    Ok(response) => {
                        popup::show_error(response.message);
                    }
                    Err(err) => {
                        log!("Contact request failed:", err.to_string());
                        popup::show_error(None);
                    }
                }
                // Every path above falls through here, so the submit control
                // is always restored.
                is_sending.set(false);
            });
        })
    };

    let button_style = if *is_sending { "opacity: 0.7;" } else { "" };

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <div class="form-group">
                <label for="company">{"FIRMA"}</label>
                <input
                    id="company"
                    name="company"
                    type="text"
                    value={(*company).clone()}
                    oninput={on_company}
                />
            </div>
            <div class="form-group">
                <label for="email">{"E-MAIL"}</label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    value={(*email).clone()}
                    oninput={on_email}
                />
            </div>
            <div class="form-group">
                <label for="phone">{"TELEFON"}</label>
                <input
                    id="phone"
                    name="phone"
                    type="tel"
                    value={(*phone).clone()}
                    oninput={on_phone}
                />
            </div>
            <div class="form-group">
                <label for="planSelect">{"PLAN"}</label>
                <select id="planSelect" name="plan" onchange={on_plan}>
                    <option value="" selected={plan.is_empty()}>{"-- BITTE WÄHLEN --"}</option>
                    <option value="light" selected={*plan == "light"}>{"LIGHT"}</option>
                    <option value="basic" selected={*plan == "basic"}>{"BASIC"}</option>
                    <option value="premium" selected={*plan == "premium"}>{"PREMIUM"}</option>
                </select>
            </div>
            <div class="form-group">
                <label for="message">{"NACHRICHT"}</label>
                <textarea
                    id="message"
                    name="message"
                    rows="5"
                    value={(*message).clone()}
                    oninput={on_message}
                />
            </div>
            <button type="submit" class="submit-button" disabled={*is_sending} style={button_style}>
                <span>{ if *is_sending { "SENDING..." } else { "NACHRICHT SENDEN" } }</span>
                <div class="button-glow"></div>
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_serializes_to_the_wire_shape() {
        let payload = ContactPayload {
            company: Some("Acme".to_string()),
            email: Some("a@b.com".to_string()),
            phone: Some("".to_string()),
            plan: Some("pro".to_string()),
            message: Some("hi".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "company": "Acme",
                "email": "a@b.com",
                "phone": "",
                "plan": "pro",
                "message": "hi",
            })
        );
    }

    #[test]
    fn absent_fields_serialize_as_null() {
        let payload = ContactPayload {
            company: None,
            email: None,
            phone: None,
            plan: None,
            message: None,
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "company": null,
                "email": null,
                "phone": null,
                "plan": null,
                "message": null,
            })
        );
    }

    #[test]
    fn repeated_plan_picks_are_distinct_selections() {
        let first = next_preset(None, "light");
        assert_eq!(first, (0, "light".to_string()));
        // Picking the same plan again still registers as a new selection.
        let second = next_preset(Some(&first), "light");
        assert_eq!(second.1, "light");
        assert_ne!(first, second);
        let third = next_preset(Some(&second), "premium");
        assert_eq!(third, (2, "premium".to_string()));
    }

    #[test]
    fn response_decodes_with_and_without_message() {
        let rejected: ContactResponse =
            serde_json::from_str(r#"{"success": false, "message": "quota exceeded"}"#).unwrap();
        assert!(!rejected.success);
        assert_eq!(rejected.message.as_deref(), Some("quota exceeded"));

        let accepted: ContactResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(accepted.success);
        assert_eq!(accepted.message, None);
    }
}
