#![no_main]

use json_number::parse_f32;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let (Ok(actual), Some(expected)) = (
        parse_f32(data),
        std::str::from_utf8(data).ok().and_then(|s| s.parse::<f32>().ok()),
    ) {
        assert_eq!(actual.to_bits(), expected.to_bits());
    }
});
