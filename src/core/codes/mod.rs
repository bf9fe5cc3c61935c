//! Reference data: the closed code lists a UBL-TR invoice draws its coded
//! values from.
//!
//! Lists are static and sorted so lookups are a binary search. Unknown codes
//! are never rewritten: the assembler passes them through and records a
//! [`ReferenceDataMiss`](super::ReferenceDataMiss), or rejects them when
//! strict code-list enforcement is enabled.

mod iso;
mod tax;
mod units;

pub use iso::{COUNTRY_CODES, CURRENCY_CODES};
pub use tax::{TAX_TYPE_CODES, WITHHOLDING_TAX_TYPE_CODES};
pub use units::UNIT_CODES;

/// Anything a coded value can be checked against.
pub trait CodeTable {
    /// Name reported in reference data misses (e.g. "UnitCode").
    fn name(&self) -> &'static str;

    fn contains(&self, code: &str) -> bool;
}

/// One entry of a described code list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub short_name: Option<&'static str>,
}

impl CodeEntry {
    pub const fn new(code: &'static str, name: &'static str) -> Self {
        Self {
            code,
            name,
            short_name: None,
        }
    }

    pub const fn with_short(code: &'static str, name: &'static str, short: &'static str) -> Self {
        Self {
            code,
            name,
            short_name: Some(short),
        }
    }
}

/// A code list whose entries carry a description. Entries are sorted by code.
#[derive(Debug)]
pub struct CodeList {
    name: &'static str,
    entries: &'static [CodeEntry],
}

impl CodeList {
    pub const fn new(name: &'static str, entries: &'static [CodeEntry]) -> Self {
        Self { name, entries }
    }

    /// Resolve a code to its entry.
    pub fn lookup(&self, code: &str) -> Option<&'static CodeEntry> {
        self.entries
            .binary_search_by(|e| e.code.cmp(code))
            .ok()
            .map(|i| &self.entries[i])
    }

    pub fn entries(&self) -> &'static [CodeEntry] {
        self.entries
    }
}

impl CodeTable for CodeList {
    fn name(&self) -> &'static str {
        self.name
    }

    fn contains(&self, code: &str) -> bool {
        self.lookup(code).is_some()
    }
}

/// A bare set of codes without descriptions. Codes are sorted.
#[derive(Debug)]
pub struct CodeSet {
    name: &'static str,
    codes: &'static [&'static str],
}

impl CodeSet {
    pub const fn new(name: &'static str, codes: &'static [&'static str]) -> Self {
        Self { name, codes }
    }

    pub fn codes(&self) -> &'static [&'static str] {
        self.codes
    }
}

impl CodeTable for CodeSet {
    fn name(&self) -> &'static str {
        self.name
    }

    fn contains(&self, code: &str) -> bool {
        self.codes.binary_search(&code).is_ok()
    }
}

/// `schemeID` values accepted on `PartyIdentification/ID`.
pub static PARTY_ID_SCHEMES: CodeSet = CodeSet::new(
    "PartyIdentificationSchemeID",
    &[
        "ABONENO",
        "ARACIKURUMETIKET",
        "ARACIKURUMVKN",
        "BAYINO",
        "DAGITICINO",
        "DISTRIBUTORNO",
        "HIZMETNO",
        "IMALATCINO",
        "MERSISNO",
        "MUSTERINO",
        "PASAPORTNO",
        "SATICINO",
        "SUBENO",
        "TAPDKNO",
        "TCKN",
        "TESISATNO",
        "TICARETSICILNO",
        "TOPTANCINO",
        "URETICINO",
        "VKN",
    ],
);

/// UN/EDIFACT 4461 payment means codes in common UBL-TR use.
pub static PAYMENT_MEANS_CODES: CodeList = CodeList::new(
    "PaymentMeansCode",
    &[
        CodeEntry::new("1", "Instrument not defined"),
        CodeEntry::new("10", "In cash"),
        CodeEntry::new("20", "Cheque"),
        CodeEntry::new("21", "Banker's draft"),
        CodeEntry::new("23", "Bank cheque"),
        CodeEntry::new("30", "Credit transfer"),
        CodeEntry::new("31", "Debit transfer"),
        CodeEntry::new("42", "Payment to bank account"),
        CodeEntry::new("48", "Bank card"),
        CodeEntry::new("49", "Direct debit"),
        CodeEntry::new("58", "SEPA credit transfer"),
        CodeEntry::new("59", "SEPA direct debit"),
        CodeEntry::new("60", "Promissory note"),
        CodeEntry::new("97", "Clearing between partners"),
        CodeEntry::new("ZZZ", "Mutually defined"),
    ],
);
