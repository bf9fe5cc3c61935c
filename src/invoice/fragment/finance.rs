use crate::core::codes::{CURRENCY_CODES, PAYMENT_MEANS_CODES};
use crate::core::{
    AllowanceCharge, Branch, ExchangeRate, FinancialAccount, FinancialInstitution, MonetaryTotal,
    PaymentMeans, PaymentTerms, Period, TaxCategory, TaxSubtotal, TaxTotal, UblError,
};
use crate::invoice::rules::{TAX_CATEGORY_RULES, TAX_SUBTOTAL_RULES};

use super::{Fragment, Scope};

impl Fragment for FinancialInstitution {
    const ENTITY: &'static str = "FinancialInstitution";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.text("cbc:Name", self.name.as_deref());
        Ok(())
    }
}

impl Fragment for Branch {
    const ENTITY: &'static str = "Branch";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.text("cbc:Name", self.name.as_deref());
        s.child(
            "cac:FinancialInstitution",
            self.financial_institution.as_ref(),
        )
    }
}

impl Fragment for FinancialAccount {
    const ENTITY: &'static str = "FinancialAccount";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.req_text("cbc:ID", self.id.as_deref())?;
        if let Some(code) = self.currency_code.as_deref() {
            s.check(&CURRENCY_CODES, code)?;
        }
        s.text("cbc:CurrencyCode", self.currency_code.as_deref());
        s.text("cbc:PaymentNote", self.payment_note.as_deref());
        s.child(
            "cac:FinancialInstitutionBranch",
            self.financial_institution_branch.as_ref(),
        )
    }
}

impl Fragment for Period {
    const ENTITY: &'static str = "Period";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.date("cbc:StartDate", self.start_date);
        s.time("cbc:StartTime", self.start_time);
        s.date("cbc:EndDate", self.end_date);
        s.time("cbc:EndTime", self.end_time);
        s.measure("cbc:DurationMeasure", self.duration_measure.as_ref())?;
        s.text("cbc:Description", self.description.as_deref());
        Ok(())
    }
}

impl Fragment for PaymentMeans {
    const ENTITY: &'static str = "PaymentMeans";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        if let Some(code) = self.payment_means_code.as_deref() {
            s.check(&PAYMENT_MEANS_CODES, code)?;
        }
        s.req_text("cbc:PaymentMeansCode", self.payment_means_code.as_deref())?;
        s.date("cbc:PaymentDueDate", self.payment_due_date);
        s.text(
            "cbc:PaymentChannelCode",
            self.payment_channel_code.as_deref(),
        );
        s.text("cbc:InstructionNote", self.instruction_note.as_deref());
        s.child(
            "cac:PayerFinancialAccount",
            self.payer_financial_account.as_ref(),
        )?;
        s.child(
            "cac:PayeeFinancialAccount",
            self.payee_financial_account.as_ref(),
        )
    }
}

impl Fragment for PaymentTerms {
    const ENTITY: &'static str = "PaymentTerms";

    fn currency(&self) -> Option<&str> {
        self.currency_id.as_deref()
    }

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.text("cbc:Note", self.note.as_deref());
        s.numeric("cbc:PenaltySurchargePercent", self.penalty_surcharge_percent);
        s.amount("cbc:Amount", self.amount);
        s.amount("cbc:PenaltyAmount", self.penalty_amount);
        s.date("cbc:PaymentDueDate", self.payment_due_date);
        s.child("cac:SettlementPeriod", self.settlement_period.as_ref())
    }
}

impl Fragment for AllowanceCharge {
    const ENTITY: &'static str = "AllowanceCharge";

    fn currency(&self) -> Option<&str> {
        self.currency_id.as_deref()
    }

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.req_indicator("cbc:ChargeIndicator", self.charge_indicator)?;
        s.text(
            "cbc:AllowanceChargeReason",
            self.allowance_charge_reason.as_deref(),
        );
        s.numeric(
            "cbc:MultiplierFactorNumeric",
            self.multiplier_factor_numeric,
        );
        s.numeric("cbc:SequenceNumeric", self.sequence_numeric);
        s.req_amount("cbc:Amount", self.amount)?;
        s.amount("cbc:BaseAmount", self.base_amount);
        s.amount("cbc:PerUnitAmount", self.per_unit_amount);
        Ok(())
    }
}

impl Fragment for TaxCategory {
    const ENTITY: &'static str = "TaxCategory";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.text("cbc:Name", self.name.as_deref());
        s.text(
            "cbc:TaxExemptionReasonCode",
            self.tax_exemption_reason_code.as_deref(),
        );
        s.text(
            "cbc:TaxExemptionReason",
            self.tax_exemption_reason.as_deref(),
        );
        s.req_child("cac:TaxScheme", self.tax_scheme.as_ref())?;
        s.enforce(TAX_CATEGORY_RULES, self)
    }
}

impl Fragment for TaxSubtotal {
    const ENTITY: &'static str = "TaxSubtotal";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.amount("cbc:TaxableAmount", self.taxable_amount);
        s.req_amount("cbc:TaxAmount", self.tax_amount)?;
        s.numeric(
            "cbc:CalculationSequenceNumeric",
            self.calculation_sequence_numeric,
        );
        s.amount(
            "cbc:TransactionCurrencyTaxAmount",
            self.transaction_currency_tax_amount,
        );
        s.numeric("cbc:Percent", self.percent);
        s.measure("cbc:BaseUnitMeasure", self.base_unit_measure.as_ref())?;
        s.amount("cbc:PerUnitAmount", self.per_unit_amount);
        s.req_child("cac:TaxCategory", self.tax_category.as_ref())?;
        s.enforce(TAX_SUBTOTAL_RULES, self)
    }
}

/// Used for `cac:TaxTotal` and `cac:WithholdingTaxTotal` alike.
impl Fragment for TaxTotal {
    const ENTITY: &'static str = "TaxTotal";

    fn currency(&self) -> Option<&str> {
        self.currency_id.as_deref()
    }

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.req_amount("cbc:TaxAmount", self.tax_amount)?;
        s.req_children("cac:TaxSubtotal", &self.tax_subtotals)
    }
}

impl Fragment for MonetaryTotal {
    const ENTITY: &'static str = "MonetaryTotal";

    fn currency(&self) -> Option<&str> {
        self.currency_id.as_deref()
    }

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.req_amount("cbc:LineExtensionAmount", self.line_extension_amount)?;
        s.req_amount("cbc:TaxExclusiveAmount", self.tax_exclusive_amount)?;
        s.req_amount("cbc:TaxInclusiveAmount", self.tax_inclusive_amount)?;
        s.amount("cbc:AllowanceTotalAmount", self.allowance_total_amount);
        s.amount("cbc:ChargeTotalAmount", self.charge_total_amount);
        s.amount("cbc:PrepaidAmount", self.prepaid_amount);
        s.amount("cbc:PayableRoundingAmount", self.payable_rounding_amount);
        s.req_amount("cbc:PayableAmount", self.payable_amount)
    }
}

impl Fragment for ExchangeRate {
    const ENTITY: &'static str = "ExchangeRate";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        for code in [&self.source_currency_code, &self.target_currency_code]
            .into_iter()
            .flatten()
        {
            s.check(&CURRENCY_CODES, code)?;
        }
        s.req_text("cbc:SourceCurrencyCode", self.source_currency_code.as_deref())?;
        s.req_text("cbc:TargetCurrencyCode", self.target_currency_code.as_deref())?;
        s.req_numeric("cbc:CalculationRate", self.calculation_rate)?;
        s.date("cbc:Date", self.date);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::Context;
    use crate::core::{AssemblyOptions, TaxCategory, TaxScheme, TaxSubtotal, TaxTotal, UblError};
    use rust_decimal_macros::dec;

    fn kdv_total() -> TaxTotal {
        let kdv = TaxCategory::new(TaxScheme::tax("Katma Değer Vergisi", "0015"));
        TaxTotal::new(
            dec!(123.93),
            vec![TaxSubtotal::new(dec!(688.50), dec!(123.93), dec!(18.0), kdv)],
        )
    }

    #[test]
    fn tax_subtotal_amounts_carry_currency() {
        let mut cx = Context::new(AssemblyOptions::default(), "Invoice");
        let el = cx.render("cac:TaxTotal", &kdv_total()).unwrap();
        let sub = el.child("cac:TaxSubtotal").unwrap();
        let taxable = sub.child("cbc:TaxableAmount").unwrap();
        assert_eq!(taxable.text(), Some("688.50"));
        assert_eq!(taxable.attribute("currencyID"), Some("TRY"));
        let tax = sub.child("cbc:TaxAmount").unwrap();
        assert_eq!(tax.text(), Some("123.93"));
        assert_eq!(tax.attribute("currencyID"), Some("TRY"));
        assert_eq!(sub.find_text("cbc:Percent"), Some("18"));
    }

    #[test]
    fn tax_total_currency_reaches_subtotals() {
        let mut total = kdv_total();
        total.currency_id = Some("EUR".into());
        let mut cx = Context::new(AssemblyOptions::default(), "Invoice");
        let el = cx.render("cac:TaxTotal", &total).unwrap();
        assert_eq!(
            el.find("cac:TaxSubtotal/cbc:TaxableAmount")
                .and_then(|e| e.attribute("currencyID")),
            Some("EUR")
        );
    }

    #[test]
    fn tax_total_requires_a_subtotal() {
        let total = TaxTotal::new(dec!(0), Vec::new());
        let mut cx = Context::new(AssemblyOptions::default(), "Invoice");
        match cx.render("cac:TaxTotal", &total).unwrap_err() {
            UblError::Structural(e) => {
                assert_eq!(e.entity, "TaxTotal");
                assert_eq!(e.field, "TaxSubtotal");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn tax_category_without_name_or_code_breaks_rule() {
        let category = TaxCategory::new(TaxScheme::default());
        let mut cx = Context::new(AssemblyOptions::default(), "Invoice");
        match cx.render("cac:TaxCategory", &category).unwrap_err() {
            UblError::Structural(e) => assert_eq!(e.rule, Some("TR-T01")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
