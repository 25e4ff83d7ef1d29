//! Contact request payload and field validation

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LeadError;

/// Raw contact form body
///
/// Fields are kept as loose JSON values so that a string "500000" and a number
/// 500000 are treated alike. Presence is judged by JSON truthiness: missing,
/// null, empty string, zero and false all count as absent. Text fields coerce
/// other truthy values the way a browser's `String(x)` would before they are
/// format-checked.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRequest {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub phone: Option<Value>,
    pub property_value: Option<Value>,
    pub monthly_salary: Option<Value>,
}

/// A contact lead that passed validation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property_value: f64,
    pub monthly_salary: f64,
}

impl ContactRequest {
    /// Parse a request body
    ///
    /// A JSON `null` is unreadable. Any other non-object JSON value (number,
    /// string, array) carries no fields and later fails the presence check.
    pub fn from_slice(body: &[u8]) -> Result<Self, LeadError> {
        let value: Value = serde_json::from_slice(body)?;
        match value {
            Value::Object(_) | Value::Null => Ok(serde_json::from_value(value)?),
            _ => Ok(Self::default()),
        }
    }

    /// Check presence, then email format, then phone format
    pub fn validate(&self) -> Result<Lead, LeadError> {
        let name = present_text(&self.name);
        let email = present_text(&self.email);
        let phone = present_text(&self.phone);
        let property_value = present_number(&self.property_value);
        let monthly_salary = present_number(&self.monthly_salary);

        let (Some(name), Some(email), Some(phone), Some(property_value), Some(monthly_salary)) =
            (name, email, phone, property_value, monthly_salary)
        else {
            return Err(LeadError::MissingFields);
        };

        if !is_valid_email(&email) {
            return Err(LeadError::InvalidEmail);
        }
        if !is_valid_phone(&phone) {
            return Err(LeadError::InvalidPhone);
        }

        Ok(Lead {
            name,
            email,
            phone,
            property_value,
            monthly_salary,
        })
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// String form of a JSON value as JavaScript's `String(x)` renders it
fn coerce_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        // Array elements that are null render empty
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => coerce_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn present_text(value: &Option<Value>) -> Option<String> {
    value.as_ref().filter(|v| is_truthy(v)).map(coerce_text)
}

fn present_number(value: &Option<Value>) -> Option<f64> {
    let number = match value.as_ref().filter(|v| is_truthy(v))? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    Some(number).filter(|v| v.is_finite() && *v != 0.0)
}

/// Whitespace as matched by `\s` in browser regular expressions
///
/// Differs from `char::is_whitespace`: U+FEFF is included, U+0085 is not.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r' | ' '
            | '\u{00A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// `local@domain.tld`: one `@`, no whitespace, and a dot inside the domain
/// with at least one character on each side
///
/// Same acceptance as `^[^\s@]+@[^\s@]+\.[^\s@]+$` with the browser's
/// definition of `\s` (see `is_js_whitespace`).
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_js_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// 10 to 15 ASCII digits, nothing else
pub fn is_valid_phone(phone: &str) -> bool {
    (10..=15).contains(&phone.len()) && phone.bytes().all(|b| b.is_ascii_digit())
}
