//! Loan amortization and eligibility engine
//!
//! Stateless, synchronous functions: identical inputs always give identical
//! results, so callers may invoke them concurrently and memoize freely.

mod emi;
mod eligibility;
mod schedule;
pub mod inputs;

pub use emi::{compute_amortization, AmortizationResult, LoanInput};
pub use eligibility::{check_eligibility, EligibilityResult, ELIGIBLE_MESSAGE, INELIGIBLE_MESSAGE};
pub use schedule::{amortization_schedule, ScheduleRow};
pub use inputs::{parse_amount, CalculatorInputs, CalculatorView, InputField};

/// Monthly periods per year of tenure
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Longest repayment schedule produced, in months (100 years)
pub const MAX_SCHEDULE_PERIODS: u32 = 1200;

/// Highest installment-to-income ratio (percent) that is still eligible
pub const ELIGIBILITY_THRESHOLD_PERCENT: f64 = 40.0;
