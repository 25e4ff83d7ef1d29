//! Destinations for accepted leads
//!
//! The handler is given a sink rather than logging directly, so deployments
//! can swap the log line for a queue or CRM without touching validation.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use log::info;

use super::Lead;
use crate::error::LeadError;

/// Receives each lead that passed validation
pub trait LeadSink: Send + Sync {
    fn record(&self, lead: &Lead, received_at: DateTime<Utc>) -> Result<(), LeadError>;
}

/// Writes each lead as a single `info` record on the `lead` target
#[derive(Debug, Default, Clone, Copy)]
pub struct LogLeadSink;

impl LeadSink for LogLeadSink {
    fn record(&self, lead: &Lead, received_at: DateTime<Utc>) -> Result<(), LeadError> {
        let payload = serde_json::to_string(lead).map_err(|e| LeadError::Sink(e.to_string()))?;
        info!(target: "lead", "New lead received at {}: {}", received_at.to_rfc3339(), payload);
        Ok(())
    }
}

/// Keeps leads in memory, for embedding and tests
#[derive(Debug, Default)]
pub struct MemoryLeadSink {
    leads: Mutex<Vec<(Lead, DateTime<Utc>)>>,
}

impl MemoryLeadSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn leads(&self) -> Vec<(Lead, DateTime<Utc>)> {
        match self.leads.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl LeadSink for MemoryLeadSink {
    fn record(&self, lead: &Lead, received_at: DateTime<Utc>) -> Result<(), LeadError> {
        let mut guard = self
            .leads
            .lock()
            .map_err(|_| LeadError::Sink("lead store lock poisoned".to_string()))?;
        guard.push((lead.clone(), received_at));
        Ok(())
    }
}
