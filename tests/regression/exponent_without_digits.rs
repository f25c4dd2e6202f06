use json_number::{parse_f32, parse_f64, parse_i64, parse_number, parse_u64};

// An exponent marker must be followed by at least one digit. These used to
// read as the bare significand.
#[test]
fn test() {
    for s in &["1e", "1E", "1e+", "1e-", "-2.5e", "0e+"] {
        let bytes = s.as_bytes();
        assert!(parse_number(bytes, false).unwrap_err().is_syntax(), "{}", s);
        assert!(parse_f64(bytes).unwrap_err().is_syntax(), "{}", s);
        assert!(parse_f32(bytes).unwrap_err().is_syntax(), "{}", s);
        assert!(parse_u64(bytes).unwrap_err().is_syntax(), "{}", s);
        assert!(parse_i64(bytes).unwrap_err().is_syntax(), "{}", s);
    }
}
