//! Unit codes for `unitCode` attributes.
//!
//! The UBL-TR list is preferred; codes missing from it fall back to
//! UN/ECE Recommendation 20. This table carries the whole UBL-TR list plus
//! the Rec 20 time, length and temperature units invoices use most.

use super::{CodeEntry, CodeList};

pub static UNIT_CODES: CodeList = CodeList::new(
    "UnitCode",
    &[
        CodeEntry::new("3I", "KİLOGRAM-ADET"),
        CodeEntry::new("ANN", "YIL"),
        CodeEntry::new("B32", "KG-METRE KARE"),
        CodeEntry::new("BX", "KUTU"),
        CodeEntry::new("C62", "ADET"),
        CodeEntry::new("CCT", "TON BAŞINA TAŞIMA KAPASİTESİ"),
        CodeEntry::new("CEL", "SANTİGRAT DERECE"),
        CodeEntry::new("CEN", "YÜZ ADET"),
        CodeEntry::new("CMT", "SANTİMETRE"),
        CodeEntry::new("CTM", "KARAT"),
        CodeEntry::new("D30", "BRÜT KALORİ DEĞERİ"),
        CodeEntry::new("D32", "TERAWATT SAAT"),
        CodeEntry::new("D40", "BİN LİTRE"),
        CodeEntry::new("DAY", "GÜN"),
        CodeEntry::new("DMK", "DESİMETRE KARE"),
        CodeEntry::new("GFI", "FISSILE İZOTOP GRAMI"),
        CodeEntry::new("GRM", "GRAM"),
        CodeEntry::new("GT", "GROSS TON"),
        CodeEntry::new("GWH", "GİGAWATT SAAT"),
        CodeEntry::new("HUR", "SAAT"),
        CodeEntry::new("KFO", "DİFOSFOR PENTAOKSİT KİLOGRAMI"),
        CodeEntry::new("KGM", "KİLOGRAM"),
        CodeEntry::new("KHY", "HİDROJEN PEROKSİT KİLOGRAMI"),
        CodeEntry::new("KMA", "METİL AMİNLERİN KİLOGRAMI"),
        CodeEntry::new("KMT", "KİLOMETRE"),
        CodeEntry::new("KNI", "AZOTUN KİLOGRAMI"),
        CodeEntry::new("KPH", "KİLOGRAM POTASYUM HİDROKSİT"),
        CodeEntry::new("KPO", "KİLOGRAM POTASYUM OKSİT"),
        CodeEntry::new("KSD", "%90 KURU ÜRÜN KİLOGRAMI"),
        CodeEntry::new("KSH", "SODYUM HİDROKSİT KİLOGRAMI"),
        CodeEntry::new("KUR", "URANYUM KİLOGRAMI"),
        CodeEntry::new("KWH", "KİLOWATT SAAT"),
        CodeEntry::new("KWT", "KİLOWATT"),
        CodeEntry::new("LPA", "SAF ALKOL LİTRESİ"),
        CodeEntry::new("LTR", "LİTRE"),
        CodeEntry::new("MIN", "DAKİKA"),
        CodeEntry::new("MLT", "MİLİLİTRE"),
        CodeEntry::new("MMT", "MİLİMETRE"),
        CodeEntry::new("MND", "KURUTULMUŞ NET AĞIRLIKLI KİLOGRAMI"),
        CodeEntry::new("MON", "AY"),
        CodeEntry::new("MTK", "METRE KARE"),
        CodeEntry::new("MTQ", "METRE KÜP"),
        CodeEntry::new("MTR", "METRE"),
        CodeEntry::new("MWH", "MEGAWATT SAAT"),
        CodeEntry::new("NCL", "HÜCRE ADEDİ"),
        CodeEntry::new("PA", "PAKET"),
        CodeEntry::new("PR", "ÇİFT"),
        CodeEntry::new("R9", "BİN METRE KÜP"),
        CodeEntry::new("SEC", "SANİYE"),
        CodeEntry::new("SET", "SET"),
        CodeEntry::new("SM3", "STANDART METREKÜP"),
        CodeEntry::new("T3", "BİN ADET"),
        CodeEntry::new("TNE", "TON"),
        CodeEntry::new("WEE", "HAFTA"),
    ],
);
