//! Cross-checks for caller-supplied totals.
//!
//! The assembler never computes totals; these checks only compare the
//! figures a caller put into [`MonetaryTotal`] and [`TaxTotal`]. They run
//! inside the assembler when `AssemblyOptions::verify_totals` is set and
//! can be called standalone at any time.

use rust_decimal::Decimal;

use super::error::ValidationError;
use super::finance::{MonetaryTotal, TaxTotal};

/// Check the relationships between the amounts of a `LegalMonetaryTotal`.
///
/// - TR-M01: TaxExclusiveAmount = LineExtensionAmount - AllowanceTotalAmount + ChargeTotalAmount
/// - TR-M02: TaxInclusiveAmount >= TaxExclusiveAmount
/// - TR-M03: PayableAmount = TaxInclusiveAmount - PrepaidAmount + PayableRoundingAmount
pub fn check_monetary_total(total: &MonetaryTotal) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let (Some(line_extension), Some(tax_exclusive), Some(tax_inclusive), Some(payable)) = (
        total.line_extension_amount,
        total.tax_exclusive_amount,
        total.tax_inclusive_amount,
        total.payable_amount,
    ) else {
        errors.push(ValidationError::with_rule(
            "legal_monetary_total",
            "line extension, tax exclusive, tax inclusive and payable amounts are all required",
            "TR-M00",
        ));
        return errors;
    };

    let allowances = total.allowance_total_amount.unwrap_or(Decimal::ZERO);
    let charges = total.charge_total_amount.unwrap_or(Decimal::ZERO);
    let expected_exclusive = line_extension - allowances + charges;
    if tax_exclusive != expected_exclusive {
        errors.push(ValidationError::with_rule(
            "legal_monetary_total.tax_exclusive_amount",
            format!(
                "tax exclusive amount {tax_exclusive} does not match line extension {line_extension} - allowances {allowances} + charges {charges}"
            ),
            "TR-M01",
        ));
    }

    if tax_inclusive < tax_exclusive {
        errors.push(ValidationError::with_rule(
            "legal_monetary_total.tax_inclusive_amount",
            format!("tax inclusive amount {tax_inclusive} is below tax exclusive amount {tax_exclusive}"),
            "TR-M02",
        ));
    }

    let prepaid = total.prepaid_amount.unwrap_or(Decimal::ZERO);
    let rounding = total.payable_rounding_amount.unwrap_or(Decimal::ZERO);
    let expected_payable = tax_inclusive - prepaid + rounding;
    if payable != expected_payable {
        errors.push(ValidationError::with_rule(
            "legal_monetary_total.payable_amount",
            format!(
                "payable amount {payable} does not match tax inclusive {tax_inclusive} - prepaid {prepaid} + rounding {rounding}"
            ),
            "TR-M03",
        ));
    }

    errors
}

/// TR-M04: a tax total's TaxAmount equals the sum of its subtotals' TaxAmount.
pub fn check_tax_total(total: &TaxTotal) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let Some(tax_amount) = total.tax_amount else {
        return errors;
    };

    let sum: Decimal = total
        .tax_subtotals
        .iter()
        .filter_map(|s| s.tax_amount)
        .sum();
    if tax_amount != sum {
        errors.push(ValidationError::with_rule(
            "tax_total.tax_amount",
            format!("tax amount {tax_amount} does not match sum of subtotals {sum}"),
            "TR-M04",
        ));
    }

    errors
}
