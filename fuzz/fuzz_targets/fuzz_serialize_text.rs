#![no_main]

use efatura::core::SerializeOptions;
use efatura::invoice::{Element, element_to_xml};
use efatura::validate::{EnvelopeValidator, SchemaValidator};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Escaped free text must keep the output well-formed: the envelope
        // check may reject the root, but never as malformed XML.
        let mut note = Element::new("Invoice");
        note.set_attribute("xmlns", "urn:oasis:names:specification:ubl:schema:xsd:Invoice-2");
        note.set_attribute(
            "xmlns:cbc",
            "urn:oasis:names:specification:ubl:schema:xsd:CommonBasicComponents-2",
        );
        note.push(Element::with_text("cbc:Note", s));
        let options = SerializeOptions {
            indent: 0,
            declaration: true,
        };
        if let Ok(xml) = element_to_xml(&note, &options) {
            let verdict = EnvelopeValidator::new().validate(&xml).unwrap();
            if let Some(v) = verdict.violation() {
                assert!(!v.message.starts_with("not well-formed"), "{v}");
            }
        }
    }
});
