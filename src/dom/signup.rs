//! Newsletter signup form and the fetch transport behind it.

use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlInputElement, RequestMode, ResponseType,
    UrlSearchParams,
};

use super::{first, first_in, listen, set_class, set_hidden};
use crate::config::SiteConfig;
use crate::config::selectors::*;
use crate::error::{SiteResult, js_err};
use crate::signup::{
    Delivery, Encoding, FAILURE_MESSAGE, PENDING_LABEL, SUCCESS_MESSAGE, SignupOutcome,
    SignupPayload, SignupTransport, submit, validate_email,
};

/// `fetch` in `no-cors` mode; cross-origin replies come back opaque.
pub struct FetchTransport;

impl SignupTransport for FetchTransport {
    async fn post(
        &self,
        endpoint: &str,
        payload: &SignupPayload,
        encoding: Encoding,
    ) -> anyhow::Result<Delivery> {
        let builder = Request::post(endpoint)
            .mode(RequestMode::NoCors)
            .header("Content-Type", encoding.content_type());
        let request = match encoding {
            Encoding::Json => builder.body(payload.to_json()?),
            Encoding::FormUrlEncoded => {
                let params = UrlSearchParams::new().map_err(|e| anyhow::anyhow!(js_err(e)))?;
                for (name, value) in payload.form_fields() {
                    params.append(name, value);
                }
                builder.body(params)
            }
        }
        .map_err(|e| anyhow::anyhow!("building request: {e}"))?;

        let response = request
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("sending request: {e}"))?;
        if response.type_() == ResponseType::Opaque {
            Ok(Delivery::Opaque)
        } else {
            Ok(Delivery::Status(response.status()))
        }
    }
}

struct SignupForm {
    form: Element,
    email: HtmlInputElement,
    submit_button: HtmlButtonElement,
    message: Option<Element>,
}

pub fn mount(document: &Document, config: &Rc<SiteConfig>) -> SiteResult<()> {
    let Some(form) = first(document, SIGNUP_FORM) else {
        debug!("no signup form on page");
        return Ok(());
    };
    let email = first_in(&form, SIGNUP_EMAIL).and_then(|e| e.dyn_into::<HtmlInputElement>().ok());
    let button = first_in(&form, SIGNUP_SUBMIT).and_then(|e| e.dyn_into::<HtmlButtonElement>().ok());
    let (Some(email), Some(submit_button)) = (email, button) else {
        debug!("signup form lacks an email field or submit button");
        return Ok(());
    };
    let parts = Rc::new(SignupForm {
        message: first_in(&form, SIGNUP_MESSAGE),
        form: form.clone(),
        email,
        submit_button,
    });

    let config = Rc::clone(config);
    listen(&form, "submit", move |event| {
        event.prevent_default();
        handle_submit(Rc::clone(&parts), Rc::clone(&config));
    });
    Ok(())
}

fn handle_submit(parts: Rc<SignupForm>, config: Rc<SiteConfig>) {
    if parts.submit_button.disabled() {
        return;
    }
    let email = match validate_email(&parts.email.value()) {
        Ok(email) => email,
        Err(err) => {
            parts.show_message(&err.to_string(), false);
            parts.submit_button.set_disabled(false);
            return;
        }
    };

    let endpoint =
        config.signup_endpoint_for(parts.form.get_attribute(DATA_ENDPOINT).as_deref());
    let label = parts.submit_button.text_content().unwrap_or_default();
    parts.submit_button.set_disabled(true);
    parts.submit_button.set_text_content(Some(PENDING_LABEL));
    parts.clear_message();

    let timestamp = String::from(js_sys::Date::new_0().to_iso_string());
    let payload = SignupPayload::new(email, timestamp);

    wasm_bindgen_futures::spawn_local(async move {
        let outcome = match endpoint {
            Some(endpoint) => submit(&FetchTransport, &endpoint, &payload).await,
            None => {
                warn!("signup form has no endpoint configured");
                SignupOutcome::Failed
            }
        };
        match outcome {
            SignupOutcome::Delivered(_) => {
                parts.show_message(SUCCESS_MESSAGE, true);
                parts.email.set_value("");
            }
            SignupOutcome::Failed => parts.show_message(FAILURE_MESSAGE, false),
        }

        TimeoutFuture::new(config.signup_cooldown_ms).await;
        parts.submit_button.set_disabled(false);
        parts.submit_button.set_text_content(Some(&label));
    });
}

impl SignupForm {
    fn show_message(&self, text: &str, success: bool) {
        let Some(message) = &self.message else {
            return;
        };
        message.set_text_content(Some(text));
        set_class(message, SIGNUP_MESSAGE_SUCCESS, success);
        set_class(message, SIGNUP_MESSAGE_ERROR, !success);
        set_hidden(message, false);
    }

    fn clear_message(&self) {
        if let Some(message) = &self.message {
            message.set_text_content(None);
            set_class(message, SIGNUP_MESSAGE_SUCCESS, false);
            set_class(message, SIGNUP_MESSAGE_ERROR, false);
        }
    }
}
