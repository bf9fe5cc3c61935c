use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// UBL version emitted in `cbc:UBLVersionID`.
pub const UBL_VERSION_ID: &str = "2.1";
/// UBL-TR customization emitted in `cbc:CustomizationID`.
pub const CUSTOMIZATION_ID: &str = "TR1.2";
/// Currency used when neither the entity nor the document names one.
pub const DEFAULT_CURRENCY: &str = "TRY";

/// An identifier with an optional `schemeID` qualifier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Identifier {
    pub value: String,
    pub scheme_id: Option<String>,
}

impl Identifier {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            scheme_id: None,
        }
    }

    pub fn with_scheme(value: impl Into<String>, scheme_id: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            scheme_id: Some(scheme_id.into()),
        }
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::new(value)
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Identifier::new(value)
    }
}

/// A numeric quantity with its `unitCode` (UN/ECE Rec 20 or the UBL-TR unit list).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Quantity {
    pub value: Decimal,
    pub unit_code: Option<String>,
}

impl Quantity {
    pub fn new(value: Decimal, unit_code: impl Into<String>) -> Self {
        Self {
            value,
            unit_code: Some(unit_code.into()),
        }
    }

    /// A bare count without a unit (e.g. `TotalPackageQuantity`).
    pub fn count(value: Decimal) -> Self {
        Self {
            value,
            unit_code: None,
        }
    }
}

/// A physical measure. Unlike [`Quantity`], the schema always requires `unitCode`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Measure {
    pub value: Decimal,
    pub unit_code: Option<String>,
}

impl Measure {
    pub fn new(value: Decimal, unit_code: impl Into<String>) -> Self {
        Self {
            value,
            unit_code: Some(unit_code.into()),
        }
    }
}

/// A classification code with its list qualifiers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Code {
    pub value: String,
    pub list_id: Option<String>,
    pub list_agency_id: Option<String>,
}

impl Code {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            list_id: None,
            list_agency_id: None,
        }
    }
}

/// `cbc:ProfileID` values defined by the UBL-TR guide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileId {
    /// Basic invoice, no response from the buyer.
    TemelFatura,
    /// Commercial invoice; the buyer may accept or reject.
    TicariFatura,
    /// Tax-free sale to a traveller.
    YolcuBeraberFatura,
    /// e-Archive invoice.
    EArsivFatura,
    /// Export invoice.
    Ihracat,
    /// Any profile not listed above, passed through verbatim.
    Other(String),
}

impl ProfileId {
    pub fn code(&self) -> &str {
        match self {
            Self::TemelFatura => "TEMELFATURA",
            Self::TicariFatura => "TICARIFATURA",
            Self::YolcuBeraberFatura => "YOLCUBERABERFATURA",
            Self::EArsivFatura => "EARSIVFATURA",
            Self::Ihracat => "IHRACAT",
            Self::Other(code) => code,
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "TEMELFATURA" => Self::TemelFatura,
            "TICARIFATURA" => Self::TicariFatura,
            "YOLCUBERABERFATURA" => Self::YolcuBeraberFatura,
            "EARSIVFATURA" => Self::EArsivFatura,
            "IHRACAT" => Self::Ihracat,
            other => Self::Other(other.to_string()),
        }
    }
}

/// `cbc:InvoiceTypeCode` values defined by the UBL-TR guide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceTypeCode {
    /// SATIS: sale.
    Satis,
    /// IADE: return; requires a billing reference to the original invoice.
    Iade,
    /// TEVKIFAT: invoice with VAT withholding.
    Tevkifat,
    /// ISTISNA: VAT-exempt sale.
    Istisna,
    /// OZELMATRAH: special tax base.
    OzelMatrah,
    /// IHRACKAYITLI: sale registered for export.
    IhracKayitli,
    Other(String),
}

impl InvoiceTypeCode {
    pub fn code(&self) -> &str {
        match self {
            Self::Satis => "SATIS",
            Self::Iade => "IADE",
            Self::Tevkifat => "TEVKIFAT",
            Self::Istisna => "ISTISNA",
            Self::OzelMatrah => "OZELMATRAH",
            Self::IhracKayitli => "IHRACKAYITLI",
            Self::Other(code) => code,
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "SATIS" => Self::Satis,
            "IADE" => Self::Iade,
            "TEVKIFAT" => Self::Tevkifat,
            "ISTISNA" => Self::Istisna,
            "OZELMATRAH" => Self::OzelMatrah,
            "IHRACKAYITLI" => Self::IhracKayitli,
            other => Self::Other(other.to_string()),
        }
    }
}
