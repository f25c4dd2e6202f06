use json_number::{parse_number, ParsedValue};

// A literal ending in `.` must classify the same whether it is short enough
// for the fast path or long enough to need the general parser.
#[test]
fn test() {
    let short = parse_number(b"1.", false).unwrap();
    assert_eq!(short, ParsedValue::Float(1.0));

    let long = parse_number(b"18446744073709551615.", false).unwrap();
    assert_eq!(long, ParsedValue::Float(1.8446744073709552e19));

    let long = parse_number(b"18446744073709551616.", false).unwrap();
    assert_eq!(long, ParsedValue::Float(1.8446744073709552e19));
}
