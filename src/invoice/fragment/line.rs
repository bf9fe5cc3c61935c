use crate::core::{
    CommodityClassification, InvoiceLine, Item, ItemIdentification, ItemInstance, Price,
    UblError,
};

use super::{Fragment, Scope};

impl Fragment for ItemIdentification {
    const ENTITY: &'static str = "ItemIdentification";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.req_text("cbc:ID", self.id.as_deref())
    }
}

impl Fragment for CommodityClassification {
    const ENTITY: &'static str = "CommodityClassification";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.req_code(
            "cbc:ItemClassificationCode",
            self.item_classification_code.as_ref(),
        )
    }
}

impl Fragment for ItemInstance {
    const ENTITY: &'static str = "ItemInstance";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.text("cbc:ProductTraceID", self.product_trace_id.as_deref());
        s.date("cbc:ManufactureDate", self.manufacture_date);
        s.date("cbc:BestBeforeDate", self.best_before_date);
        s.text("cbc:RegistrationID", self.registration_id.as_deref());
        s.text("cbc:SerialID", self.serial_id.as_deref());
        Ok(())
    }
}

impl Fragment for Item {
    const ENTITY: &'static str = "Item";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.text("cbc:Description", self.description.as_deref());
        s.req_text("cbc:Name", self.name.as_deref())?;
        s.text("cbc:Keyword", self.keyword.as_deref());
        s.text("cbc:BrandName", self.brand_name.as_deref());
        s.text("cbc:ModelName", self.model_name.as_deref());
        s.child(
            "cac:BuyersItemIdentification",
            self.buyers_item_identification.as_ref(),
        )?;
        s.child(
            "cac:SellersItemIdentification",
            self.sellers_item_identification.as_ref(),
        )?;
        s.child(
            "cac:ManufacturersItemIdentification",
            self.manufacturers_item_identification.as_ref(),
        )?;
        s.children(
            "cac:AdditionalItemIdentification",
            &self.additional_item_identifications,
        )?;
        s.child("cac:OriginCountry", self.origin_country.as_ref())?;
        s.children(
            "cac:CommodityClassification",
            &self.commodity_classifications,
        )?;
        s.children("cac:ItemInstance", &self.item_instances)
    }
}

impl Fragment for Price {
    const ENTITY: &'static str = "Price";

    fn currency(&self) -> Option<&str> {
        self.currency_id.as_deref()
    }

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.req_amount("cbc:PriceAmount", self.price_amount)
    }
}

/// Top-level lines and `cac:SubInvoiceLine` share this layout.
impl Fragment for InvoiceLine {
    const ENTITY: &'static str = "InvoiceLine";
    const RECURSIVE: bool = true;

    fn currency(&self) -> Option<&str> {
        self.currency_id.as_deref()
    }

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.req_text("cbc:ID", self.id.as_deref())?;
        s.texts("cbc:Note", &self.notes);
        s.req_quantity("cbc:InvoicedQuantity", self.invoiced_quantity.as_ref())?;
        s.req_amount("cbc:LineExtensionAmount", self.line_extension_amount)?;
        s.children("cac:OrderLineReference", &self.order_line_references)?;
        s.children("cac:DespatchLineReference", &self.despatch_line_references)?;
        s.children("cac:ReceiptLineReference", &self.receipt_line_references)?;
        s.children("cac:Delivery", &self.deliveries)?;
        s.children("cac:AllowanceCharge", &self.allowance_charges)?;
        s.child("cac:TaxTotal", self.tax_total.as_ref())?;
        s.children("cac:WithholdingTaxTotal", &self.withholding_tax_totals)?;
        s.req_child("cac:Item", self.item.as_ref())?;
        s.req_child("cac:Price", self.price.as_ref())?;
        s.children("cac:SubInvoiceLine", &self.sub_invoice_lines)
    }
}
