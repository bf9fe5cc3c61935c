use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::party::TaxScheme;
use super::types::Measure;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialInstitution {
    pub name: Option<String>,
}

/// `cac:FinancialInstitutionBranch`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Branch {
    pub name: Option<String>,
    pub financial_institution: Option<FinancialInstitution>,
}

/// `cac:PayeeFinancialAccount`, `cac:PayerFinancialAccount`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialAccount {
    /// Required. IBAN or account number.
    pub id: Option<String>,
    pub currency_code: Option<String>,
    pub payment_note: Option<String>,
    pub financial_institution_branch: Option<Branch>,
}

impl FinancialAccount {
    pub fn iban(iban: impl Into<String>) -> Self {
        Self {
            id: Some(iban.into()),
            ..Self::default()
        }
    }
}

/// `cac:InvoicePeriod`, `cac:SettlementPeriod`, `cac:ValidityPeriod`, ...
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Period {
    pub start_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_date: Option<NaiveDate>,
    pub end_time: Option<NaiveTime>,
    /// Unit is one of ANN, MON, DAY, HUR.
    pub duration_measure: Option<Measure>,
    pub description: Option<String>,
}

impl Period {
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start_date: Some(start),
            end_date: Some(end),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaymentMeans {
    /// Required. UN/EDIFACT 4461, e.g. "42" (payment to bank account).
    pub payment_means_code: Option<String>,
    pub payment_due_date: Option<NaiveDate>,
    pub payment_channel_code: Option<String>,
    pub instruction_note: Option<String>,
    pub payer_financial_account: Option<FinancialAccount>,
    pub payee_financial_account: Option<FinancialAccount>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaymentTerms {
    pub note: Option<String>,
    pub penalty_surcharge_percent: Option<Decimal>,
    pub amount: Option<Decimal>,
    pub penalty_amount: Option<Decimal>,
    pub payment_due_date: Option<NaiveDate>,
    pub settlement_period: Option<Period>,
    pub currency_id: Option<String>,
}

/// Document or line level allowance (discount) or charge.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AllowanceCharge {
    /// Required. `true` for a charge, `false` for an allowance.
    pub charge_indicator: Option<bool>,
    pub allowance_charge_reason: Option<String>,
    pub multiplier_factor_numeric: Option<Decimal>,
    pub sequence_numeric: Option<Decimal>,
    /// Required.
    pub amount: Option<Decimal>,
    pub base_amount: Option<Decimal>,
    pub per_unit_amount: Option<Decimal>,
    pub currency_id: Option<String>,
}

impl AllowanceCharge {
    pub fn allowance(amount: Decimal) -> Self {
        Self {
            charge_indicator: Some(false),
            amount: Some(amount),
            ..Self::default()
        }
    }

    pub fn charge(amount: Decimal) -> Self {
        Self {
            charge_indicator: Some(true),
            amount: Some(amount),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaxCategory {
    pub name: Option<String>,
    /// Mandatory for zero-rated KDV; see rule TR-T02.
    pub tax_exemption_reason_code: Option<String>,
    pub tax_exemption_reason: Option<String>,
    /// Required.
    pub tax_scheme: Option<TaxScheme>,
}

impl TaxCategory {
    pub fn new(tax_scheme: TaxScheme) -> Self {
        Self {
            tax_scheme: Some(tax_scheme),
            ..Self::default()
        }
    }

    pub fn tax_type_code(&self) -> Option<&str> {
        self.tax_scheme
            .as_ref()
            .and_then(|ts| ts.tax_type_code.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaxSubtotal {
    pub taxable_amount: Option<Decimal>,
    /// Required.
    pub tax_amount: Option<Decimal>,
    pub calculation_sequence_numeric: Option<Decimal>,
    pub transaction_currency_tax_amount: Option<Decimal>,
    pub percent: Option<Decimal>,
    pub base_unit_measure: Option<Measure>,
    pub per_unit_amount: Option<Decimal>,
    /// Required.
    pub tax_category: Option<TaxCategory>,
}

impl TaxSubtotal {
    pub fn new(
        taxable_amount: Decimal,
        tax_amount: Decimal,
        percent: Decimal,
        tax_category: TaxCategory,
    ) -> Self {
        Self {
            taxable_amount: Some(taxable_amount),
            tax_amount: Some(tax_amount),
            percent: Some(percent),
            tax_category: Some(tax_category),
            ..Self::default()
        }
    }
}

/// `cac:TaxTotal` and `cac:WithholdingTaxTotal`. The currency covers the
/// total and every subtotal beneath it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaxTotal {
    /// Required.
    pub tax_amount: Option<Decimal>,
    /// Required (1..n).
    pub tax_subtotals: Vec<TaxSubtotal>,
    pub currency_id: Option<String>,
}

impl TaxTotal {
    pub fn new(tax_amount: Decimal, tax_subtotals: Vec<TaxSubtotal>) -> Self {
        Self {
            tax_amount: Some(tax_amount),
            tax_subtotals,
            currency_id: None,
        }
    }
}

/// `cac:LegalMonetaryTotal`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MonetaryTotal {
    /// Required. Sum of line extension amounts.
    pub line_extension_amount: Option<Decimal>,
    /// Required.
    pub tax_exclusive_amount: Option<Decimal>,
    /// Required.
    pub tax_inclusive_amount: Option<Decimal>,
    pub allowance_total_amount: Option<Decimal>,
    pub charge_total_amount: Option<Decimal>,
    pub prepaid_amount: Option<Decimal>,
    pub payable_rounding_amount: Option<Decimal>,
    /// Required.
    pub payable_amount: Option<Decimal>,
    pub currency_id: Option<String>,
}

/// `cac:TaxExchangeRate`, `cac:PricingExchangeRate`, `cac:PaymentExchangeRate`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Required.
    pub source_currency_code: Option<String>,
    /// Required.
    pub target_currency_code: Option<String>,
    /// Required. Units of target currency per unit of source.
    pub calculation_rate: Option<Decimal>,
    pub date: Option<NaiveDate>,
}

impl ExchangeRate {
    pub fn new(source: impl Into<String>, target: impl Into<String>, rate: Decimal) -> Self {
        Self {
            source_currency_code: Some(source.into()),
            target_currency_code: Some(target.into()),
            calculation_rate: Some(rate),
            date: None,
        }
    }
}
