#![cfg(feature = "asia")]

use idnum::core::ValidationError;
use idnum::{id, in_, th, tw};

// ---------------------------------------------------------------------------
// Thailand
// ---------------------------------------------------------------------------

#[test]
fn pin_seed_cases() {
    assert!(th::pin::is_valid("3100600445635"));
    assert_eq!(
        th::pin::validate("1234545678789"),
        Err(ValidationError::InvalidChecksum)
    );
    assert_eq!(th::pin::format("7100600445635"), "7-1006-00445-63-5");
}

#[test]
fn pin_reserved_leading_digits() {
    assert_eq!(
        th::pin::validate("0100600445635"),
        Err(ValidationError::InvalidComponent)
    );
    assert_eq!(
        th::pin::validate("9100600445635"),
        Err(ValidationError::InvalidComponent)
    );
}

#[test]
fn thai_tin_dispatch() {
    use th::tin::TinType;

    assert_eq!(th::tin::tin_type("3100600445635"), Some(TinType::Pin));
    assert_eq!(th::tin::tin_type("0993000133978"), Some(TinType::Moa));
    assert_eq!(
        th::tin::validate("1234545678789"),
        Err(ValidationError::InvalidFormat)
    );
}

// ---------------------------------------------------------------------------
// Taiwan
// ---------------------------------------------------------------------------

#[test]
fn ubn_seed_cases() {
    assert_eq!(tw::ubn::validate("00501503").unwrap(), "00501503");
    assert_eq!(
        tw::ubn::validate("00501502"),
        Err(ValidationError::InvalidChecksum)
    );
    assert_eq!(
        tw::ubn::validate("005015031"),
        Err(ValidationError::InvalidLength)
    );
}

#[test]
fn ubn_seventh_digit_seven_rule() {
    assert!(tw::ubn::is_valid("10458575"));
    assert!(tw::ubn::is_valid("10458574"));
    assert!(!tw::ubn::is_valid("10458573"));
}

// ---------------------------------------------------------------------------
// Indonesia, India
// ---------------------------------------------------------------------------

#[test]
fn npwp_fifteen_and_sixteen_digits() {
    assert_eq!(
        id::npwp::format("013000666091000"),
        "01.300.066.6-091.000"
    );
    assert_eq!(
        id::npwp::validate("01.300.066.7-091.000"),
        Err(ValidationError::InvalidChecksum)
    );
    assert!(id::npwp::is_valid("3171011512800001"));
    assert_eq!(
        id::npwp::validate("0130006660910"),
        Err(ValidationError::InvalidLength)
    );
}

#[test]
fn epic_number() {
    assert!(in_::epic::is_valid("WKH1186253"));
    assert_eq!(
        in_::epic::validate("WKH1186254"),
        Err(ValidationError::InvalidChecksum)
    );
    assert_eq!(
        in_::epic::validate("WK11186253"),
        Err(ValidationError::InvalidFormat)
    );
}
