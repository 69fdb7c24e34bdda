//! Estimate-request relay.
//!
//! Validates a quote request from the site form, drops honeypot spam without
//! telling the sender, and forwards everything else as a plain-text email.

use serde::{Deserialize, Deserializer};

use super::mailer::{Mailer, OutboundEmail};

const SENDER_NAME: &str = "Magic Glove Estimates";
const NOT_PROVIDED: &str = "(not provided)";
const NOT_SELECTED: &str = "(not selected)";
const NONE_GIVEN: &str = "(none)";

#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    #[error("missing required fields")]
    MissingFields,
    #[error("mail transport not configured")]
    NotConfigured,
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

/// Form payload as posted by the site. Field names follow the form inputs;
/// unknown fields are ignored and every field may be absent or `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EstimateRequest {
    #[serde(deserialize_with = "null_as_empty")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub service: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub property_type: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub preferred_contact: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub best_time: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub referral_source: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub comments: String,
    /// Hidden field real visitors leave blank.
    pub hp: Option<serde_json::Value>,
}

impl EstimateRequest {
    #[must_use]
    pub fn has_required_fields(&self) -> bool {
        [&self.full_name, &self.phone, &self.city]
            .iter()
            .all(|v| !v.trim().is_empty())
    }

    /// True when the honeypot is truthy and its string form is not blank.
    ///
    /// Arrays read as their comma-joined elements, so `[]` and `[" "]` pass;
    /// objects read as `[object Object]` and always trip it.
    #[must_use]
    pub fn is_spam(&self) -> bool {
        self.hp
            .as_ref()
            .is_some_and(|hp| is_truthy(hp) && !loose_string(hp).trim().is_empty())
    }
}

fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::Bool(true) | Value::Array(_) | Value::Object(_) => true,
    }
}

/// String form of a form value as a browser would coerce it.
fn loose_string(value: &serde_json::Value) -> String {
    use serde_json::Value;
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(loose_string).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Where accepted estimates are delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateRouting {
    pub to: String,
    pub from: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Delivered,
    /// Honeypot tripped; reported to the sender as a success.
    Discarded,
}

/// Validate, filter, and relay one estimate request.
///
/// Checks run in order: required fields, honeypot, transport.
///
/// # Errors
///
/// Returns an error for incomplete forms, a missing transport, or a failed
/// delivery attempt.
pub async fn submit(
    mailer: Option<&dyn Mailer>,
    routing: &EstimateRouting,
    request: &EstimateRequest,
) -> Result<Submission, EstimateError> {
    if !request.has_required_fields() {
        return Err(EstimateError::MissingFields);
    }
    if request.is_spam() {
        tracing::debug!("honeypot tripped; discarding estimate");
        return Ok(Submission::Discarded);
    }
    let mailer = mailer.ok_or(EstimateError::NotConfigured)?;

    let email = compose_email(routing, request);
    mailer
        .send(&email)
        .await
        .map_err(|e| EstimateError::Delivery(e.to_string()))?;
    Ok(Submission::Delivered)
}

#[must_use]
pub fn compose_email(routing: &EstimateRouting, request: &EstimateRequest) -> OutboundEmail {
    let full_name = request.full_name.trim();
    let city = request.city.trim();
    let email = request.email.trim();

    OutboundEmail {
        from: format!("{SENDER_NAME} <{}>", routing.from),
        to: vec![routing.to.clone()],
        subject: format!("New Estimate Request — {full_name} ({city})"),
        text: render_estimate_text(request),
        reply_to: (!email.is_empty()).then(|| email.to_owned()),
    }
}

#[must_use]
pub fn render_estimate_text(request: &EstimateRequest) -> String {
    let email = or_placeholder(request.email.trim(), NOT_PROVIDED);
    let referral = or_placeholder(&request.referral_source, NOT_SELECTED);
    let comments = or_placeholder(&request.comments, NONE_GIVEN);

    let text = format!(
        "New Estimate Request

Name: {name}
Phone: {phone}
Email: {email}
City: {city}

Service: {service}
Property Type: {property_type}
Preferred Contact: {preferred_contact}
Best Time: {best_time}
How they heard about you: {referral}

Comments:
{comments}",
        name = request.full_name.trim(),
        phone = request.phone.trim(),
        city = request.city.trim(),
        service = request.service,
        property_type = request.property_type,
        preferred_contact = request.preferred_contact,
        best_time = request.best_time,
    );
    text.trim().to_owned()
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}

#[cfg(test)]
#[path = "estimate_test.rs"]
mod tests;
