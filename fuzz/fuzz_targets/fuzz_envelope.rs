#![no_main]

use efatura::validate::{EnvelopeValidator, SchemaValidator};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Arbitrary input must yield a verdict, never a panic or an Err.
        let verdict = EnvelopeValidator::new().validate(s);
        assert!(verdict.is_ok());
    }
});
