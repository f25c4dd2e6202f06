use json_number::parse_f64;

// Exponents with three or more digits always go to the general parser, even
// when the value would be exact. The result must not change.
#[test]
fn test() {
    for s in &["1e100", "1e-100", "1e+100", "1e005", "1e-005", "25e0000000000000000000000001"] {
        let expected: f64 = s.parse().unwrap();
        assert_eq!(parse_f64(s.as_bytes()).unwrap().to_bits(), expected.to_bits(), "{}", s);
    }
}
