//! Contact-lead submission boundary
//!
//! Independent of the amortization engine: it only validates contact fields
//! and forwards accepted leads to an injected sink.

mod request;
mod sink;
mod handler;

pub use request::{is_valid_email, is_valid_phone, ContactRequest, Lead};
pub use sink::{LeadSink, LogLeadSink, MemoryLeadSink};
pub use handler::{submit_lead, LeadOutcome, LeadReceipt, LeadReply};
