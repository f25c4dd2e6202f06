#![allow(clippy::float_cmp, clippy::unreadable_literal)]

use json_number::error::{Category, ErrorCode, Target};
use json_number::{
    parse_f32, parse_f64, parse_i64, parse_number, parse_u64, NumberParser, ParsedValue,
};

macro_rules! test_number {
    ($($s:expr => $value:expr,)*) => {
        $(
            assert_eq!(parse_number($s.as_bytes(), false).unwrap(), $value, "{:?}", $s);
        )*
    };
}

macro_rules! test_number_err {
    ($($s:expr => $code:expr,)*) => {
        $(
            let err = parse_number($s.as_bytes(), false).unwrap_err();
            assert_eq!(*err.code(), $code, "{:?}", $s);
            assert_eq!(err.input(), $s.as_bytes());
        )*
    };
}

#[test]
fn test_parse_u64() {
    test_number! {
        "0" => ParsedValue::Uint(0),
        "3" => ParsedValue::Uint(3),
        "123" => ParsedValue::Uint(123),
        "007" => ParsedValue::Uint(7),
        "18446744073709551615" => ParsedValue::Uint(u64::MAX),
    }
}

#[test]
fn test_parse_i64() {
    test_number! {
        "-0" => ParsedValue::Int(0),
        "-2" => ParsedValue::Int(-2),
        "-123" => ParsedValue::Int(-123),
        "-9223372036854775807" => ParsedValue::Int(-9223372036854775807),
        "-9223372036854775808" => ParsedValue::Int(i64::MIN),
    }
}

#[test]
fn test_parse_f64() {
    test_number! {
        "0.0" => ParsedValue::Float(0.0),
        "3.0" => ParsedValue::Float(3.0),
        "123.0" => ParsedValue::Float(123.0),
        "0.070" => ParsedValue::Float(0.07),
        "3.1" => ParsedValue::Float(3.1),
        "-1.2" => ParsedValue::Float(-1.2),
        "0.4" => ParsedValue::Float(0.4),
        "3e5" => ParsedValue::Float(3e5),
        "3E5" => ParsedValue::Float(3e5),
        "1e+2" => ParsedValue::Float(100.0),
        "-1.25e-3" => ParsedValue::Float(-0.00125),
        "0.00e00" => ParsedValue::Float(0.0),
        "1.7976931348623157e308" => ParsedValue::Float(f64::MAX),
        "2.2250738585072014e-308" => ParsedValue::Float(f64::MIN_POSITIVE),
        "18446744073709551616" => ParsedValue::Float(1.8446744073709552e19),
        "-18446744073709551616" => ParsedValue::Float(-1.8446744073709552e19),
        "100000000000000000000000000000" => ParsedValue::Float(1e29),
        "0.1000000000000000055511151231257827021181583404541015625" => ParsedValue::Float(0.1),
    }
}

#[test]
fn test_integral_float_stays_float() {
    let value = parse_number(b"123.0", false).unwrap();
    assert!(value.is_f64());
    assert_eq!(value.as_i64(), None);
    assert_eq!(value.as_f64(), 123.0);

    let value = parse_number(b"1e2", true).unwrap();
    assert_eq!(value, ParsedValue::Float(100.0));
}

#[test]
fn test_prefer_signed_int() {
    let parser = NumberParser::new().prefer_signed_int(true);
    assert_eq!(parser.parse(b"123").unwrap(), ParsedValue::Int(123));
    assert_eq!(parser.parse(b"-123").unwrap(), ParsedValue::Int(-123));
    assert_eq!(
        parser.parse(b"9223372036854775807").unwrap(),
        ParsedValue::Int(i64::MAX)
    );
    let err = parser.parse(b"9223372036854775808").unwrap_err();
    assert_eq!(err.classify(), Category::Range);
    assert_eq!(err.target(), Target::Number);
}

#[test]
fn test_integer_overflow() {
    test_number_err! {
        "-9223372036854775809" => ErrorCode::NumberOutOfRange,
        "-18446744073709551615" => ErrorCode::NumberOutOfRange,
    }
}

#[test]
fn test_malformed() {
    test_number_err! {
        "1.2.3" => ErrorCode::InvalidNumber,
        "1e" => ErrorCode::InvalidNumber,
        "1e+" => ErrorCode::InvalidNumber,
        "1E-" => ErrorCode::InvalidNumber,
        "--1" => ErrorCode::InvalidNumber,
        "1x" => ErrorCode::InvalidNumber,
        "-" => ErrorCode::InvalidNumber,
        "." => ErrorCode::InvalidNumber,
        "+1" => ErrorCode::InvalidNumber,
        "0x10" => ErrorCode::InvalidNumber,
        "1_000" => ErrorCode::InvalidNumber,
        "inf" => ErrorCode::InvalidNumber,
        "NaN" => ErrorCode::InvalidNumber,
        "1 " => ErrorCode::InvalidNumber,
        "1e5000x" => ErrorCode::InvalidNumber,
        "123456789012345678901234x" => ErrorCode::InvalidNumber,
    }
}

#[test]
fn test_out_of_range_float() {
    test_number_err! {
        "1e400" => ErrorCode::NumberOutOfRange,
        "-1e400" => ErrorCode::NumberOutOfRange,
    }
    assert_eq!(parse_number(b"1e-400", false).unwrap(), ParsedValue::Float(0.0));
}

#[test]
fn test_empty() {
    assert_eq!(parse_number(b"", false).unwrap(), ParsedValue::Float(0.0));
    assert_eq!(parse_f64(b"").unwrap(), 0.0);
    assert_eq!(parse_f32(b"").unwrap(), 0.0);
}

#[test]
fn test_negative_zero() {
    let value = parse_f64(b"-0.0").unwrap();
    assert!(value == 0.0 && value.is_sign_negative());
    let value = parse_f64(b"-0e10").unwrap();
    assert!(value.is_sign_negative());
}

#[test]
fn test_typed_entry_points() {
    assert_eq!(parse_f32(b"3.25").unwrap(), 3.25f32);
    assert_eq!(parse_f32(b"1e-45").unwrap(), 1e-45f32);
    assert_eq!(parse_u64(b"1e2").unwrap(), 100);
    assert_eq!(parse_u64(b"100.000").unwrap(), 100);
    assert_eq!(parse_i64(b"-1.50e1").unwrap(), -15);
    assert_eq!(parse_i64(b"92233720368547758.07e2").unwrap(), i64::MAX);

    let err = parse_u64(b"0.5").unwrap_err();
    assert!(err.is_syntax());
    assert_eq!(err.target(), Target::U64);
    let err = parse_i64(b"1e19").unwrap_err();
    assert!(err.is_range());
    assert_eq!(err.target(), Target::I64);
}

#[test]
fn test_error_display() {
    let err = parse_f64(b"1.2.3").unwrap_err();
    assert_eq!(err.to_string(), "invalid number `1.2.3` while parsing f64");
    let err = parse_number(b"-9223372036854775809", false).unwrap_err();
    assert_eq!(
        err.to_string(),
        "number out of range `-9223372036854775809` while parsing number"
    );
}

#[test]
fn test_error_into_io() {
    let err = parse_u64(b"x").unwrap_err();
    let io_err = std::io::Error::from(err);
    assert_eq!(io_err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn test_idempotence() {
    for s in &[
        "0", "7", "-7", "18446744073709551615", "-9223372036854775808", "0.07", "1.5",
        "-3.25e-7", "1e22", "123.0", "1.8446744073709552e19", "5e-324", "0.1",
    ] {
        let value = parse_number(s.as_bytes(), false).unwrap();
        let printed = value.to_string();
        let reparsed: ParsedValue = printed.parse().unwrap();
        assert_eq!(reparsed, value, "{} printed as {}", s, printed);
    }
}

#[test]
fn test_results_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ParsedValue>();
    assert_send_sync::<json_number::Error>();
    assert_send_sync::<NumberParser>();
}

#[test]
fn test_concurrent_callers() {
    let handles: Vec<_> = (0..4u64)
        .map(|t| {
            std::thread::spawn(move || {
                for i in 0..1000u64 {
                    let n = t * 1000 + i;
                    let s = format!("{}.5", n);
                    assert_eq!(parse_f64(s.as_bytes()).unwrap(), n as f64 + 0.5);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
