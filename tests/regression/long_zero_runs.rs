use json_number::{parse_f64, parse_u64};

// Runs of zeros longer than any exponent the fast path handles must not wrap
// the scanner's position counters.
#[test]
fn test() {
    let zeros = "0".repeat(300);

    let small = format!("0.{}1", zeros);
    assert_eq!(parse_f64(small.as_bytes()).unwrap(), 1e-301);

    let large = format!("1{}", zeros);
    assert_eq!(parse_f64(large.as_bytes()).unwrap(), 1e300);

    let padded = format!("{}1", zeros);
    assert_eq!(parse_u64(padded.as_bytes()).unwrap(), 1);
    assert_eq!(parse_f64(padded.as_bytes()).unwrap(), 1.0);

    let padded_fraction = format!("{}1.{}5", zeros, zeros);
    let expected: f64 = padded_fraction.parse().unwrap();
    assert_eq!(parse_f64(padded_fraction.as_bytes()).unwrap(), expected);
}
