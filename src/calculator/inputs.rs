//! Calculator form model
//!
//! Holds the five figures a visitor types in, derives the loan principal, and
//! re-runs the engine on every change. Raw text is cleaned here; the engine
//! only ever sees numbers.

use serde::{Deserialize, Serialize};

use super::{check_eligibility, compute_amortization, AmortizationResult, EligibilityResult};
use crate::error::CalculatorError;
use crate::format::format_currency;

/// Parse a typed amount such as `"12,50,000"`
///
/// Thousand separators and surrounding whitespace are ignored and empty text
/// reads as 0. Returns `None` for anything else that is not a finite number, in
/// which case the form keeps its previous value.
pub fn parse_amount(text: &str) -> Option<f64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Some(0.0);
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Editable calculator fields
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatorInputs {
    pub property_price: f64,
    pub down_payment: f64,
    /// Annual rate in percent
    pub interest_rate: f64,
    pub tenure_years: f64,
    pub monthly_income: f64,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            property_price: 0.0,
            down_payment: 0.0,
            interest_rate: 0.0,
            tenure_years: 1.0,
            monthly_income: 0.0,
        }
    }
}

/// Which form field a keystroke targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    PropertyPrice,
    DownPayment,
    InterestRate,
    TenureYears,
    MonthlyIncome,
}

/// Everything the calculator panel shows for the current inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorView {
    pub principal: f64,
    pub down_payment_percentage: f64,
    pub amortization: AmortizationResult,
    pub eligibility: EligibilityResult,
    pub installment_display: String,
    pub total_interest_display: String,
    pub total_payment_display: String,
}

impl CalculatorInputs {
    /// Loan amount: property price less down payment
    pub fn principal(&self) -> f64 {
        self.property_price - self.down_payment
    }

    /// Down payment as a whole percent of the price, 0 without a price
    pub fn down_payment_percentage(&self) -> f64 {
        if self.property_price > 0.0 {
            (self.down_payment / self.property_price * 100.0).round()
        } else {
            0.0
        }
    }

    /// Apply raw text typed into a field
    ///
    /// Returns false and leaves the inputs untouched if the text is not a number.
    pub fn apply_text(&mut self, field: InputField, text: &str) -> bool {
        let Some(value) = parse_amount(text) else {
            return false;
        };
        match field {
            InputField::PropertyPrice => self.property_price = value,
            InputField::DownPayment => self.down_payment = value,
            InputField::InterestRate => self.interest_rate = value,
            InputField::TenureYears => self.tenure_years = value,
            InputField::MonthlyIncome => self.monthly_income = value,
        }
        true
    }

    /// Run the engine for the current inputs
    pub fn evaluate(&self, currency: &str) -> Result<CalculatorView, CalculatorError> {
        let principal = self.principal();
        let amortization = compute_amortization(principal, self.interest_rate, self.tenure_years)?;
        let eligibility = check_eligibility(amortization.installment, self.monthly_income)?;

        Ok(CalculatorView {
            principal,
            down_payment_percentage: self.down_payment_percentage(),
            installment_display: format_currency(amortization.installment, currency),
            total_interest_display: format_currency(amortization.total_interest, currency),
            total_payment_display: format_currency(amortization.total_payment, currency),
            amortization,
            eligibility,
        })
    }
}
