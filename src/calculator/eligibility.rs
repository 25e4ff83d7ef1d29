//! Affordability check of an installment against monthly income
//!
//! The decision uses the unrounded ratio; only the displayed percentage is rounded.
//! So 40.01% shows as 40% but is still ineligible.

use serde::{Deserialize, Serialize};

use super::ELIGIBILITY_THRESHOLD_PERCENT;
use crate::error::CalculatorError;

pub const ELIGIBLE_MESSAGE: &str = "✅ You are eligible for this loan";
pub const INELIGIBLE_MESSAGE: &str = "❌ EMI exceeds 40% of your monthly income";

/// Verdict of the installment-to-income check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    pub is_eligible: bool,
    /// Installment / income as a whole percent; `None` when income <= 0
    pub ratio_percent: Option<f64>,
    pub message: String,
}

impl EligibilityResult {
    fn new(is_eligible: bool, ratio_percent: Option<f64>) -> Self {
        let message = if is_eligible { ELIGIBLE_MESSAGE } else { INELIGIBLE_MESSAGE };
        Self {
            is_eligible,
            ratio_percent,
            message: message.to_string(),
        }
    }
}

/// Compare a monthly installment with monthly income
///
/// Income of zero or below has no meaningful ratio: the result is ineligible
/// with `ratio_percent == None` rather than an infinite or NaN percentage.
///
/// # Errors
/// `CalculatorError::InvalidInput` for a negative or non-finite installment, or
/// a non-finite income.
pub fn check_eligibility(
    installment: f64,
    monthly_income: f64,
) -> Result<EligibilityResult, CalculatorError> {
    if !installment.is_finite() {
        return Err(CalculatorError::invalid("installment", installment, "must be finite"));
    }
    if installment < 0.0 {
        return Err(CalculatorError::invalid("installment", installment, "must not be negative"));
    }
    if !monthly_income.is_finite() {
        return Err(CalculatorError::invalid("monthlyIncome", monthly_income, "must be finite"));
    }

    if monthly_income <= 0.0 {
        return Ok(EligibilityResult::new(false, None));
    }

    let ratio = installment / monthly_income * 100.0;
    let is_eligible = ratio <= ELIGIBILITY_THRESHOLD_PERCENT;

    Ok(EligibilityResult::new(is_eligible, Some(ratio.round())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_at_threshold_is_eligible() {
        let result = check_eligibility(4000.0, 10_000.0).unwrap();
        assert!(result.is_eligible);
        assert_eq!(result.ratio_percent, Some(40.0));
        assert_eq!(result.message, ELIGIBLE_MESSAGE);
    }

    #[test]
    fn test_decision_uses_unrounded_ratio() {
        // 40.01% displays as 40 but exceeds the threshold
        let result = check_eligibility(4001.0, 10_000.0).unwrap();
        assert!(!result.is_eligible);
        assert_eq!(result.ratio_percent, Some(40.0));
        assert_eq!(result.message, INELIGIBLE_MESSAGE);
    }

    #[test]
    fn test_well_below_threshold() {
        let result = check_eligibility(8678.0, 50_000.0).unwrap();
        assert!(result.is_eligible);
        // 17.356% rounds to 17
        assert_eq!(result.ratio_percent, Some(17.0));
    }

    #[test]
    fn test_ratio_rounds_half_up() {
        let result = check_eligibility(125.0, 1000.0).unwrap();
        assert_eq!(result.ratio_percent, Some(13.0));
    }

    #[test]
    fn test_zero_income_is_defined_and_ineligible() {
        let result = check_eligibility(1000.0, 0.0).unwrap();
        assert!(!result.is_eligible);
        assert_eq!(result.ratio_percent, None);
        assert_eq!(result.message, INELIGIBLE_MESSAGE);

        // No installment and no income is still not an affordable loan
        let result = check_eligibility(0.0, 0.0).unwrap();
        assert!(!result.is_eligible);
        assert_eq!(result.ratio_percent, None);
    }

    #[test]
    fn test_negative_income_is_ineligible() {
        let result = check_eligibility(1000.0, -5000.0).unwrap();
        assert!(!result.is_eligible);
        assert_eq!(result.ratio_percent, None);
    }

    #[test]
    fn test_zero_installment_is_eligible() {
        let result = check_eligibility(0.0, 30_000.0).unwrap();
        assert!(result.is_eligible);
        assert_eq!(result.ratio_percent, Some(0.0));
    }

    #[test]
    fn test_invalid_arguments_rejected() {
        assert!(check_eligibility(-1.0, 10_000.0).is_err());
        assert!(check_eligibility(f64::NAN, 10_000.0).is_err());
        assert!(check_eligibility(1000.0, f64::INFINITY).is_err());
        assert!(check_eligibility(1000.0, f64::NAN).is_err());
    }

    #[test]
    fn test_idempotent() {
        let first = check_eligibility(4321.0, 12_345.0).unwrap();
        let second = check_eligibility(4321.0, 12_345.0).unwrap();
        assert_eq!(first, second);
    }
}
