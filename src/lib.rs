//! Mortgage calculator backend
//!
//! - `calculator` - EMI, totals, eligibility and repayment schedule
//! - `lead` - contact form validation and lead hand-off
//! - `product` - showcased catalog product and its display state
//! - `api` - HTTP routing used by the Lambda entry point

pub mod api;
pub mod calculator;
pub mod config;
pub mod error;
pub mod format;
pub mod lead;
pub mod product;

pub use calculator::{
    amortization_schedule, check_eligibility, compute_amortization, AmortizationResult,
    CalculatorInputs, EligibilityResult, LoanInput, ScheduleRow,
};
pub use config::SiteConfig;
pub use error::{CalculatorError, ConfigError, LeadError, ProductError};
pub use format::format_currency;
