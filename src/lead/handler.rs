//! Contact submission handling: body in, status code and JSON reply out

use chrono::{DateTime, SecondsFormat, Utc};
use log::{error, warn};
use serde::Serialize;

use super::{ContactRequest, LeadSink};
use crate::error::LeadError;

/// JSON reply body, tagged by `status`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LeadReply {
    Success { message: String, data: LeadReceipt },
    Error { message: String },
}

/// Echo of the accepted lead returned to the visitor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadReceipt {
    pub name: String,
    pub email: String,
    /// ISO-8601 UTC with milliseconds, e.g. `2024-05-01T10:00:00.000Z`
    pub timestamp: String,
}

/// HTTP status code plus reply body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadOutcome {
    pub status_code: u16,
    pub reply: LeadReply,
}

impl LeadOutcome {
    fn error(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            reply: LeadReply::Error {
                message: message.into(),
            },
        }
    }
}

const INTERNAL_ERROR: &str = "Internal server error";

/// Validate a contact body and hand the lead to `sink`
///
/// * 400 for missing fields, bad email or bad phone
/// * 500 for an unreadable body or a failing sink
/// * 200 with a receipt otherwise
pub fn submit_lead(body: &[u8], sink: &dyn LeadSink, now: DateTime<Utc>) -> LeadOutcome {
    match accept(body, sink, now) {
        Ok(receipt) => LeadOutcome {
            status_code: 200,
            reply: LeadReply::Success {
                message: "Lead received".to_string(),
                data: receipt,
            },
        },
        Err(e) if e.is_validation() => {
            warn!("Rejected contact request: {}", e);
            LeadOutcome::error(400, e.to_string())
        }
        Err(e) => {
            error!("Error processing contact request: {}", e);
            LeadOutcome::error(500, INTERNAL_ERROR)
        }
    }
}

fn accept(body: &[u8], sink: &dyn LeadSink, now: DateTime<Utc>) -> Result<LeadReceipt, LeadError> {
    let lead = ContactRequest::from_slice(body)?.validate()?;
    sink.record(&lead, now)?;

    Ok(LeadReceipt {
        name: lead.name,
        email: lead.email,
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::{Lead, MemoryLeadSink};
    use chrono::TimeZone;
    use serde_json::json;

    struct FailingSink;

    impl LeadSink for FailingSink {
        fn record(&self, _lead: &Lead, _at: DateTime<Utc>) -> Result<(), LeadError> {
            Err(LeadError::Sink("queue unavailable".to_string()))
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
    }

    fn body() -> serde_json::Value {
        json!({
            "name": "Asha Rao",
            "email": "asha@example.com",
            "phone": "9876543210",
            "propertyValue": 7500000,
            "monthlySalary": 120000
        })
    }

    #[test]
    fn test_success_reply() {
        let sink = MemoryLeadSink::new();
        let outcome = submit_lead(body().to_string().as_bytes(), &sink, now());

        assert_eq!(outcome.status_code, 200);
        let reply = serde_json::to_value(&outcome.reply).unwrap();
        assert_eq!(
            reply,
            json!({
                "status": "success",
                "message": "Lead received",
                "data": {
                    "name": "Asha Rao",
                    "email": "asha@example.com",
                    "timestamp": "2024-05-01T10:00:00.000Z"
                }
            })
        );
        assert_eq!(sink.leads().len(), 1);
    }

    #[test]
    fn test_validation_failures_are_400() {
        let sink = MemoryLeadSink::new();

        let mut missing = body();
        missing.as_object_mut().unwrap().remove("phone");
        let outcome = submit_lead(missing.to_string().as_bytes(), &sink, now());
        assert_eq!(outcome.status_code, 400);
        assert_eq!(
            serde_json::to_value(&outcome.reply).unwrap(),
            json!({"status": "error", "message": "All fields are required"})
        );

        let mut bad_email = body();
        bad_email["email"] = json!("asha.example.com");
        let outcome = submit_lead(bad_email.to_string().as_bytes(), &sink, now());
        assert_eq!(outcome.status_code, 400);
        assert_eq!(
            outcome.reply,
            LeadReply::Error { message: "Invalid email format".to_string() }
        );

        let mut bad_phone = body();
        bad_phone["phone"] = json!("98765-43210");
        let outcome = submit_lead(bad_phone.to_string().as_bytes(), &sink, now());
        assert_eq!(outcome.status_code, 400);
        assert_eq!(
            outcome.reply,
            LeadReply::Error { message: "Invalid phone number".to_string() }
        );

        // Nothing reaches the sink on rejection
        assert!(sink.leads().is_empty());
    }

    #[test]
    fn test_unreadable_body_is_500() {
        let sink = MemoryLeadSink::new();
        let outcome = submit_lead(b"{not json", &sink, now());
        assert_eq!(outcome.status_code, 500);
        assert_eq!(
            outcome.reply,
            LeadReply::Error { message: INTERNAL_ERROR.to_string() }
        );
    }

    #[test]
    fn test_non_object_body_is_400() {
        let sink = MemoryLeadSink::new();
        for body in [&b"5"[..], b"\"x\""] {
            let outcome = submit_lead(body, &sink, now());
            assert_eq!(outcome.status_code, 400);
            assert_eq!(
                outcome.reply,
                LeadReply::Error { message: "All fields are required".to_string() }
            );
        }
        assert!(sink.leads().is_empty());

        assert_eq!(submit_lead(b"null", &sink, now()).status_code, 500);
    }

    #[test]
    fn test_sink_failure_is_500() {
        let outcome = submit_lead(body().to_string().as_bytes(), &FailingSink, now());
        assert_eq!(outcome.status_code, 500);
        assert_eq!(
            outcome.reply,
            LeadReply::Error { message: INTERNAL_ERROR.to_string() }
        );
    }
}
