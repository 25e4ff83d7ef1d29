//! Month-by-month amortization schedule
//!
//! Each period splits the (rounded) installment into interest on the opening
//! balance and principal repaid. The final period absorbs the rounding residue
//! so the loan closes at exactly zero.

use serde::{Deserialize, Serialize};

use super::{LoanInput, MAX_SCHEDULE_PERIODS};
use crate::error::CalculatorError;

/// One month of the repayment schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRow {
    /// 1-based month number
    pub period: u32,
    pub opening_balance: f64,
    pub interest: f64,
    pub principal: f64,
    pub payment: f64,
    pub closing_balance: f64,
}

/// Build the full repayment schedule for a loan
///
/// Fractional terms are rounded up to a whole number of months, and terms
/// longer than `MAX_SCHEDULE_PERIODS` months are rejected.
///
/// When the rounded installment does not cover a period's interest (tiny
/// loans whose installment rounds to 0), that period's principal is negative
/// and the unpaid interest is added to the balance. The final period still
/// clears whatever is owed.
pub fn amortization_schedule(input: &LoanInput) -> Result<Vec<ScheduleRow>, CalculatorError> {
    let result = input.amortize()?;
    if input.principal == 0.0 {
        return Ok(Vec::new());
    }

    let months = input.periods().ceil();
    if months > MAX_SCHEDULE_PERIODS as f64 {
        return Err(CalculatorError::invalid(
            "tenureYears",
            input.tenure_years,
            "too many periods for a schedule",
        ));
    }
    let months = months as u32;
    let r = input.monthly_rate();

    let mut rows = Vec::with_capacity(months as usize);
    let mut balance = input.principal;

    for period in 1..=months {
        let opening_balance = balance;
        let interest = opening_balance * r;

        let (principal, payment) = if period == months {
            (opening_balance, opening_balance + interest)
        } else {
            // Capped at the balance; negative when the installment is below the interest
            let principal = (result.installment - interest).min(opening_balance);
            (principal, principal + interest)
        };

        balance = opening_balance - principal;

        rows.push(ScheduleRow {
            period,
            opening_balance,
            interest,
            principal,
            payment,
            closing_balance: balance,
        });
    }

    Ok(rows)
}
