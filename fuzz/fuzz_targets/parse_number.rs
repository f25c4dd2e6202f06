#![no_main]

use json_number::{parse_f64, parse_number, ParsedValue};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(ParsedValue::Float(f)) = parse_number(data, false) {
        assert!(f.is_finite());
    }
    if let (Ok(actual), Some(expected)) = (
        parse_f64(data),
        std::str::from_utf8(data).ok().and_then(|s| s.parse::<f64>().ok()),
    ) {
        assert_eq!(actual.to_bits(), expected.to_bits());
    }
});
