use super::{CodeEntry, CodeList};

/// UBL-TR tax type codes (`TaxScheme/TaxTypeCode` under `TaxTotal`), with
/// their long and short names.
pub static TAX_TYPE_CODES: CodeList = CodeList::new(
    "TaxTypeCode",
    &[
        CodeEntry::with_short("0003", "GELİR VERGİSİ STOPAJI", "GV STOPAJI"),
        CodeEntry::with_short("0011", "KURUMLAR VERGİSİ STOPAJI", "KV STOPAJI"),
        CodeEntry::with_short("0015", "GERÇEK USULDE KATMA DEĞER VERGİSİ", "KDV GERCEK"),
        CodeEntry::with_short("0021", "BANKA MUAMELELERİ VERGİSİ", "BMV"),
        CodeEntry::with_short("0022", "SİGORTA MUAMELELERİ VERGİSİ", "SMV"),
        CodeEntry::with_short("0059", "KONAKLAMA VERGİSİ", "KONAKLAMA VERGİSİ"),
        CodeEntry::with_short("0061", "KAYNAK KULLANIMI DESTEKLEME FONU KESİNTİSİ", "KKDF KESİNTİ"),
        CodeEntry::with_short(
            "0071",
            "PETROL VE DOĞALGAZ ÜRÜNLERİNE İLİŞKİN ÖZEL TÜKETİM VERGİSİ",
            "ÖTV 1.LİSTE",
        ),
        CodeEntry::with_short(
            "0073",
            "KOLALI GAZOZ, ALKOLLÜ İÇEÇEKLER VE TÜTÜN MAMÜLLERİNE İLİŞKİN ÖZEL TÜKETİM VERGİSİ",
            "ÖTV 3.LİSTE",
        ),
        CodeEntry::with_short(
            "0074",
            "DAYANIKLI TÜKETİM VE DİĞER MALLARA İLİŞKİN ÖZEL TÜKETİM VERGİSİ",
            "ÖTV 4.LİSTE",
        ),
        CodeEntry::with_short(
            "0075",
            "ALKOLLÜ İÇEÇEKLERE İLİŞKİN ÖZEL TÜKETİM VERGİSİ",
            "ÖTV 3A LİSTE",
        ),
        CodeEntry::with_short(
            "0076",
            "TÜTÜN MAMÜLLERİNE İLİŞKİN ÖZEL TÜKETİM VERGİSİ",
            "ÖTV 3B LİSTE",
        ),
        CodeEntry::with_short(
            "0077",
            "KOLALI GAZOZLARA İLİŞKİN ÖZEL TÜKETİM VERGİSİ",
            "ÖTV 3C LİSTE",
        ),
        CodeEntry::with_short("1047", "DAMGA VERGİSİ", "DAMGA V"),
        CodeEntry::with_short("1048", "5035 SAYILI KANUNA GÖRE DAMGA VERGİSİ", "5035SKDAMGAV"),
        CodeEntry::with_short(
            "4071",
            "ELEKTRİK VE HAVAGAZI TÜKETİM VERGİSİ",
            "ELK.HAVAGAZ.TÜK.VER.",
        ),
        CodeEntry::with_short("4080", "ÖZEL İLETİŞİM VERGİSİ", "Ö.İLETİŞİM V"),
        CodeEntry::with_short(
            "4081",
            "5035 SAYILI KANUNA GÖRE ÖZEL İLETİŞİM VERGİSİ",
            "5035ÖZİLETV.",
        ),
        CodeEntry::with_short(
            "4171",
            "PETROL VE DOĞALGAZ ÜRÜNLERİNE İLİŞKİN ÖTV TEVKİFATI",
            "PTR-DGZ ÖTV TEVKİFAT",
        ),
        CodeEntry::with_short("8001", "BORSA TESCİL ÜCRETİ", "BORSA TES.ÜC."),
        CodeEntry::with_short("8002", "ENERJİ FONU", "ENERJİ FONU"),
        CodeEntry::with_short("8004", "TRT PAYI", "TRT PAYI"),
        CodeEntry::with_short("8005", "ELEKTRİK TÜKETİM VERGİSİ", "ELK.TÜK.VER."),
        CodeEntry::with_short("8006", "TELSİZ KULLANIM ÜCRETİ", "TK KULLANIM"),
        CodeEntry::with_short("8007", "TELSİZ RUHSAT ÜCRETİ", "TK RUHSAT"),
        CodeEntry::with_short("8008", "ÇEVRE TEMİZLİK VERGİSİ", "ÇEV. TEM .VER."),
        CodeEntry::with_short(
            "9021",
            "4961 BANKA SİGORTA MUAMELELERİ VERGİSİ",
            "4961BANKASMV",
        ),
        CodeEntry::with_short("9040", "MERA FONU", "MERA FONU"),
        CodeEntry::with_short(
            "9077",
            "MOTORLU TAŞIT ARAÇLARINA İLİŞKİN ÖZEL TÜKETİM VERGİSİ (TESCİLE TABİ OLANLAR)",
            "ÖTV 2.LİSTE",
        ),
        CodeEntry::with_short("9944", "BELEDİYELERE ÖDENEN HAL RÜSUMU", "BEL.ÖD.HAL RÜSUM"),
    ],
);

/// KDV withholding (tevkifat) codes used under `WithholdingTaxTotal`.
pub static WITHHOLDING_TAX_TYPE_CODES: CodeList = CodeList::new(
    "WithholdingTaxTypeCode",
    &[
        CodeEntry::new("601", "YAPIM İŞLERİ İLE BU İŞLERLE BİRLİKTE İFA EDİLEN MÜHENDİSLİK-MİMARLIK VE ETÜT-PROJE HİZMETLERİ"),
        CodeEntry::new("602", "ETÜT, PLAN-PROJE, DANIŞMANLIK, DENETİM VE BENZERİ HİZMETLER"),
        CodeEntry::new("603", "MAKİNE, TEÇHİZAT, DEMİRBAŞ VE TAŞITLARA AİT TADİL, BAKIM VE ONARIM HİZMETLERİ"),
        CodeEntry::new("604", "YEMEK SERVİS HİZMETİ"),
        CodeEntry::new("605", "ORGANİZASYON HİZMETİ"),
        CodeEntry::new("606", "İŞGÜCÜ TEMİN HİZMETLERİ"),
        CodeEntry::new("607", "ÖZEL GÜVENLİK HİZMETİ"),
        CodeEntry::new("608", "YAPI DENETİM HİZMETLERİ"),
        CodeEntry::new("609", "FASON OLARAK YAPTIRILAN TEKSTİL VE KONFEKSİYON İŞLERİ"),
        CodeEntry::new("610", "TURİSTİK MAĞAZALARA VERİLEN MÜŞTERİ BULMA / GÖTÜRME HİZMETLERİ"),
        CodeEntry::new("611", "SPOR KULÜPLERİNİN YAYIN, REKLÂM VE İSİM HAKKI GELİRLERİNE KONU İŞLEMLERİ"),
        CodeEntry::new("612", "TEMİZLİK HİZMETİ"),
        CodeEntry::new("613", "ÇEVRE VE BAHÇE BAKIM HİZMETLERİ"),
        CodeEntry::new("614", "SERVİS TAŞIMACILIĞI"),
        CodeEntry::new("615", "HER TÜRLÜ BASKI VE BASIM HİZMETLERİ"),
        CodeEntry::new("616", "DİĞER HİZMETLER"),
        CodeEntry::new("617", "HURDA METALDEN ELDE EDİLEN KÜLÇE TESLİMLERİ"),
        CodeEntry::new("619", "BAKIR, ÇİNKO VE ALÜMİNYUM ÜRÜNLERİNİN TESLİMİ"),
        CodeEntry::new("620", "İSTİSNADAN VAZGEÇENLERİN HURDA VE ATIK TESLİMİ"),
        CodeEntry::new("621", "METAL, PLASTİK, LASTİK, KAUÇUK, KÂĞIT, CAM HURDA VE ATIKLARIN TESLİMİ"),
        CodeEntry::new("622", "PAMUK, TİFTİK, YÜN VE YAPAĞI İLE HAM POST VE DERİ TESLİMLERİ"),
        CodeEntry::new("623", "AĞAÇ VE ORMAN ÜRÜNLERİ TESLİMİ"),
        CodeEntry::new("624", "YÜK TAŞIMACILIĞI HİZMETİ"),
        CodeEntry::new("625", "TİCARİ REKLAM HİZMETLERİ"),
        CodeEntry::new("626", "DİĞER TESLİMLER"),
        CodeEntry::new("627", "DEMİR-ÇELİK ÜRÜNLERİNİN TESLİMİ"),
    ],
);
