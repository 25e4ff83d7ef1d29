//! Fixed-rate amortizing loan installment (EMI)
//!
//! Standard formula with r = monthly rate, n = number of months:
//!   EMI = P × r × (1 + r)^n / ((1 + r)^n - 1)
//!
//! Evaluated as P × r / (1 - (1 + r)^-n), which stays finite when (1 + r)^n
//! overflows. The zero-rate and zero-principal cases are handled explicitly.

use serde::{Deserialize, Serialize};

use super::MONTHS_PER_YEAR;
use crate::error::CalculatorError;

/// Loan terms supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanInput {
    /// Loan amount (>= 0)
    pub principal: f64,
    /// Annual rate in percent, e.g. 8.5 for 8.5% (>= 0)
    pub annual_rate_percent: f64,
    /// Loan term in years (> 0)
    pub tenure_years: f64,
}

/// Installment and totals, all rounded to whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationResult {
    pub installment: f64,
    pub total_interest: f64,
    pub total_payment: f64,
}

impl AmortizationResult {
    /// Result for a loan with nothing to repay
    pub fn zero() -> Self {
        Self {
            installment: 0.0,
            total_interest: 0.0,
            total_payment: 0.0,
        }
    }
}

impl LoanInput {
    pub fn new(principal: f64, annual_rate_percent: f64, tenure_years: f64) -> Self {
        Self {
            principal,
            annual_rate_percent,
            tenure_years,
        }
    }

    /// Reject anything outside the engine's domain
    pub fn validate(&self) -> Result<(), CalculatorError> {
        if !self.principal.is_finite() {
            return Err(CalculatorError::invalid("principal", self.principal, "must be finite"));
        }
        if self.principal < 0.0 {
            return Err(CalculatorError::invalid("principal", self.principal, "must not be negative"));
        }
        if !self.annual_rate_percent.is_finite() {
            return Err(CalculatorError::invalid(
                "annualRatePercent",
                self.annual_rate_percent,
                "must be finite",
            ));
        }
        if self.annual_rate_percent < 0.0 {
            return Err(CalculatorError::invalid(
                "annualRatePercent",
                self.annual_rate_percent,
                "must not be negative",
            ));
        }
        if !self.tenure_years.is_finite() {
            return Err(CalculatorError::invalid("tenureYears", self.tenure_years, "must be finite"));
        }
        // Also catches tenures so small that no whole month survives the multiplication
        if self.tenure_years <= 0.0 || self.periods() <= 0.0 {
            return Err(CalculatorError::invalid("tenureYears", self.tenure_years, "must be positive"));
        }
        Ok(())
    }

    /// Monthly fractional rate: annual% / 12 / 100
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / MONTHS_PER_YEAR / 100.0
    }

    /// Number of monthly periods
    pub fn periods(&self) -> f64 {
        self.tenure_years * MONTHS_PER_YEAR
    }

    /// Unrounded installment. Caller must have validated the input.
    pub(crate) fn exact_installment(&self) -> f64 {
        let principal = self.principal;
        let n = self.periods();
        let r = self.monthly_rate();

        if principal == 0.0 {
            return 0.0;
        }
        if r == 0.0 {
            return principal / n;
        }

        let denominator = 1.0 - (1.0 + r).powf(-n);

        // r below f64 resolution makes (1 + r) == 1; the zero-rate limit applies
        if denominator > 0.0 {
            principal * r / denominator
        } else {
            principal / n
        }
    }

    /// Installment rounded half away from zero, with totals derived from it
    pub fn amortize(&self) -> Result<AmortizationResult, CalculatorError> {
        self.validate()?;

        if self.principal == 0.0 {
            return Ok(AmortizationResult::zero());
        }

        let installment = self.exact_installment().round();
        let total_payment = (installment * self.periods()).round();
        let total_interest = (total_payment - self.principal).round();

        if !installment.is_finite() || !total_payment.is_finite() || !total_interest.is_finite() {
            return Err(CalculatorError::invalid(
                "principal",
                self.principal,
                "repayment amount is not representable",
            ));
        }

        Ok(AmortizationResult {
            installment,
            total_interest,
            total_payment,
        })
    }
}

/// Compute the rounded monthly installment, total interest and total payment
///
/// # Arguments
/// * `principal` - Loan amount
/// * `annual_rate_percent` - Annual interest rate in percent (8.5 = 8.5%)
/// * `tenure_years` - Loan term in years
///
/// # Errors
/// `CalculatorError::InvalidInput` for negative principal or rate,
/// non-positive tenure, or any non-finite argument.
pub fn compute_amortization(
    principal: f64,
    annual_rate_percent: f64,
    tenure_years: f64,
) -> Result<AmortizationResult, CalculatorError> {
    LoanInput::new(principal, annual_rate_percent, tenure_years).amortize()
}
