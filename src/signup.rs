//! Newsletter signup: address check and the two-attempt delivery sequence.
//!
//! Delivery first posts JSON. If that attempt fails it posts the same two
//! fields once more as a url-encoded form, which some form backends accept
//! when they refuse JSON. There is no third attempt.

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const PENDING_LABEL: &str = "Signing up...";
pub const SUCCESS_MESSAGE: &str = "Thanks for signing up! We'll be in touch.";
pub const FAILURE_MESSAGE: &str =
    "Sorry, we couldn't sign you up right now. Please contact us by email instead.";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Please enter a valid email address.")]
    Empty,
    #[error("Please enter a valid email address.")]
    Malformed,
}

/// Trims the raw field value and checks it against the simple
/// `local@domain.tld` shape.
pub fn validate_email(raw: &str) -> Result<String, EmailError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(EmailError::Empty);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(EmailError::Malformed);
    }
    Ok(email.to_string())
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupPayload {
    pub email: String,
    /// ISO-8601, taken from the browser clock at submit time.
    pub timestamp: String,
}

impl SignupPayload {
    pub fn new(email: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            timestamp: timestamp.into(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn form_fields(&self) -> [(&'static str, &str); 2] {
        [("email", self.email.as_str()), ("timestamp", self.timestamp.as_str())]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Json,
    FormUrlEncoded,
}

impl Encoding {
    pub fn content_type(self) -> &'static str {
        match self {
            Encoding::Json => "application/json",
            Encoding::FormUrlEncoded => "application/x-www-form-urlencoded",
        }
    }
}

/// What a single POST came back with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// Inspectable response with the given status.
    Status(u16),
    /// Cross-origin response whose status cannot be read.
    Opaque,
}

impl Delivery {
    pub fn is_success(self) -> bool {
        match self {
            Delivery::Status(code) => (200..300).contains(&code),
            Delivery::Opaque => true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupOutcome {
    Delivered(Encoding),
    Failed,
}

/// One POST of the payload in the given encoding. `Err` means the request
/// never produced a response.
#[allow(async_fn_in_trait)]
pub trait SignupTransport {
    async fn post(
        &self,
        endpoint: &str,
        payload: &SignupPayload,
        encoding: Encoding,
    ) -> anyhow::Result<Delivery>;
}

async fn attempt<T: SignupTransport>(
    transport: &T,
    endpoint: &str,
    payload: &SignupPayload,
    encoding: Encoding,
) -> anyhow::Result<()> {
    let delivery = transport.post(endpoint, payload, encoding).await?;
    if delivery.is_success() {
        debug!("signup delivered as {} ({delivery:?})", encoding.content_type());
        Ok(())
    } else {
        Err(anyhow::anyhow!("signup endpoint answered {delivery:?}"))
    }
}

pub async fn submit<T: SignupTransport>(
    transport: &T,
    endpoint: &str,
    payload: &SignupPayload,
) -> SignupOutcome {
    match attempt(transport, endpoint, payload, Encoding::Json).await {
        Ok(()) => return SignupOutcome::Delivered(Encoding::Json),
        Err(err) => warn!("json signup failed, retrying as form: {err:#}"),
    }
    match attempt(transport, endpoint, payload, Encoding::FormUrlEncoded).await {
        Ok(()) => SignupOutcome::Delivered(Encoding::FormUrlEncoded),
        Err(err) => {
            warn!("form signup failed: {err:#}");
            SignupOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays canned results and records every attempt.
    struct ScriptedTransport {
        replies: RefCell<VecDeque<anyhow::Result<Delivery>>>,
        calls: RefCell<Vec<(String, Encoding)>>,
    }

    impl ScriptedTransport {
        fn new(replies: Vec<anyhow::Result<Delivery>>) -> Self {
            Self {
                replies: RefCell::new(replies.into()),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn encodings(&self) -> Vec<Encoding> {
            self.calls.borrow().iter().map(|(_, e)| *e).collect()
        }
    }

    impl SignupTransport for ScriptedTransport {
        async fn post(
            &self,
            endpoint: &str,
            _payload: &SignupPayload,
            encoding: Encoding,
        ) -> anyhow::Result<Delivery> {
            self.calls.borrow_mut().push((endpoint.to_string(), encoding));
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(anyhow::anyhow!("no scripted reply")))
        }
    }

    fn payload() -> SignupPayload {
        SignupPayload::new("user@example.com", "2024-05-01T12:00:00.000Z")
    }

    #[test]
    fn email_validation() {
        assert_eq!(validate_email("  user@example.com "), Ok("user@example.com".to_string()));
        assert_eq!(validate_email("a.b@mail.example.co"), Ok("a.b@mail.example.co".to_string()));
        assert_eq!(validate_email("not-an-email"), Err(EmailError::Malformed));
        assert_eq!(validate_email("user@example"), Err(EmailError::Malformed));
        assert_eq!(validate_email("us er@example.com"), Err(EmailError::Malformed));
        assert_eq!(validate_email("a@b@c.com"), Err(EmailError::Malformed));
        assert_eq!(validate_email("   "), Err(EmailError::Empty));
        assert_eq!(EmailError::Malformed.to_string(), INVALID_EMAIL_MESSAGE);
    }

    #[test]
    fn payload_encodings_carry_both_fields() {
        let payload = payload();
        assert_eq!(
            payload.to_json().unwrap(),
            r#"{"email":"user@example.com","timestamp":"2024-05-01T12:00:00.000Z"}"#
        );
        assert_eq!(
            payload.form_fields(),
            [("email", "user@example.com"), ("timestamp", "2024-05-01T12:00:00.000Z")]
        );
    }

    #[test]
    fn json_success_makes_one_attempt() {
        let transport = ScriptedTransport::new(vec![Ok(Delivery::Status(200))]);
        let outcome = block_on(submit(&transport, "https://hooks.example/signup", &payload()));
        assert_eq!(outcome, SignupOutcome::Delivered(Encoding::Json));
        assert_eq!(transport.encodings(), vec![Encoding::Json]);
        assert_eq!(transport.calls.borrow()[0].0, "https://hooks.example/signup");
    }

    #[test]
    fn opaque_response_counts_as_success() {
        let transport = ScriptedTransport::new(vec![Ok(Delivery::Opaque)]);
        let outcome = block_on(submit(&transport, "https://hooks.example/signup", &payload()));
        assert_eq!(outcome, SignupOutcome::Delivered(Encoding::Json));
        assert_eq!(transport.encodings().len(), 1);
    }

    #[test]
    fn network_failure_falls_back_to_form_encoding() {
        let transport = ScriptedTransport::new(vec![
            Err(anyhow::anyhow!("network down")),
            Ok(Delivery::Opaque),
        ]);
        let outcome = block_on(submit(&transport, "https://hooks.example/signup", &payload()));
        assert_eq!(outcome, SignupOutcome::Delivered(Encoding::FormUrlEncoded));
        assert_eq!(
            transport.encodings(),
            vec![Encoding::Json, Encoding::FormUrlEncoded]
        );
    }

    #[test]
    fn error_status_falls_back_too() {
        let transport = ScriptedTransport::new(vec![
            Ok(Delivery::Status(415)),
            Ok(Delivery::Status(201)),
        ]);
        let outcome = block_on(submit(&transport, "https://hooks.example/signup", &payload()));
        assert_eq!(outcome, SignupOutcome::Delivered(Encoding::FormUrlEncoded));
    }

    #[test]
    fn two_failures_give_up_without_a_third_attempt() {
        let transport = ScriptedTransport::new(vec![
            Err(anyhow::anyhow!("network down")),
            Err(anyhow::anyhow!("still down")),
            Ok(Delivery::Status(200)),
        ]);
        let outcome = block_on(submit(&transport, "https://hooks.example/signup", &payload()));
        assert_eq!(outcome, SignupOutcome::Failed);
        assert_eq!(transport.calls.borrow().len(), 2);
    }
}
