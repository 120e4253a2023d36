#![cfg(feature = "americas")]

use idnum::core::ValidationError;
use idnum::{ar, br, cl, co, pe, py, us, ve};

// ---------------------------------------------------------------------------
// Brazil
// ---------------------------------------------------------------------------

#[test]
fn cnpj_round_trip() {
    let compact = br::cnpj::validate("16.727.230/0001-97").unwrap();
    assert_eq!(compact, "16727230000197");
    assert_eq!(br::cnpj::format(&compact), "16.727.230/0001-97");
}

#[test]
fn cnpj_wrong_check_digit() {
    assert_eq!(
        br::cnpj::validate("16.727.230/0001-98"),
        Err(ValidationError::InvalidChecksum)
    );
}

#[test]
fn cnpj_check_digits_reconstruct() {
    assert_eq!(br::cnpj::calc_check_digits("167272300001"), "97");
}

#[test]
fn cpf_valid_and_invalid() {
    assert!(br::cpf::is_valid("390.533.447-05"));
    assert_eq!(
        br::cpf::validate("390.533.447-06"),
        Err(ValidationError::InvalidChecksum)
    );
    assert_eq!(br::cpf::validate("3905334470"), Err(ValidationError::InvalidLength));
}

// ---------------------------------------------------------------------------
// Argentina, Chile, Colombia
// ---------------------------------------------------------------------------

#[test]
fn cuit_type_and_checksum() {
    assert!(ar::cuit::is_valid("20-26756539-3"));
    assert_eq!(
        ar::cuit::validate("20-26756539-4"),
        Err(ValidationError::InvalidChecksum)
    );
    assert_eq!(
        ar::cuit::validate("99-26756539-3"),
        Err(ValidationError::InvalidComponent)
    );
}

#[test]
fn rut_accepts_country_prefix_and_k() {
    assert_eq!(cl::rut::validate("CL 12531909-2").unwrap(), "125319092");
    assert_eq!(cl::rut::validate("10.000.013-k").unwrap(), "10000013K");
    assert_eq!(cl::rut::calc_check_digit("10000013"), 'K');
}

#[test]
fn nit_grouping() {
    assert_eq!(co::nit::format("2131234321"), "213.123.432-1");
    assert_eq!(co::nit::validate("1234567"), Err(ValidationError::InvalidLength));
}

// ---------------------------------------------------------------------------
// Peru, Paraguay, Venezuela
// ---------------------------------------------------------------------------

#[test]
fn peru_conversions() {
    assert_eq!(pe::cui::to_ruc("10117410").unwrap(), "10101174102");
    assert!(pe::ruc::is_valid("10101174102"));
    assert_eq!(pe::ruc::to_dni("10447004777").unwrap(), "44700477");
    assert_eq!(
        pe::ruc::to_dni("20512333797"),
        Err(ValidationError::InvalidComponent)
    );
}

#[test]
fn paraguay_ruc() {
    assert_eq!(py::ruc::validate("80028061-0").unwrap(), "800280610");
    assert_eq!(py::ruc::calc_check_digit("80028061"), '0');
}

#[test]
fn venezuela_rif() {
    assert_eq!(ve::rif::format("V114702834"), "V-11470283-4");
    assert_eq!(
        ve::rif::validate("X-11470283-4"),
        Err(ValidationError::InvalidComponent)
    );
}

// ---------------------------------------------------------------------------
// United States
// ---------------------------------------------------------------------------

#[test]
fn tin_guess_and_format() {
    use us::tin::TinType;

    assert_eq!(
        us::tin::guess_type("042103594"),
        vec![TinType::Ssn, TinType::Ein, TinType::Atin]
    );
    assert_eq!(us::tin::format("042103594"), "042-10-3594");
    assert_eq!(us::tin::format("123-456"), "123-456");
    assert_eq!(us::tin::validate("123-456"), Err(ValidationError::InvalidFormat));
}

#[test]
fn separators_only_in_fixed_positions() {
    assert!(us::ssn::is_valid("536-90-4399"));
    assert!(!us::ssn::is_valid("53-690-4399"));
    assert!(us::ein::is_valid("04-2103594"));
    assert!(!us::ein::is_valid("042-103594"));
}

#[test]
fn ein_campus() {
    assert_eq!(us::ein::get_campus("04-2103594"), Ok("Brookhaven"));
    assert_eq!(
        us::ein::get_campus("07-2103594"),
        Err(ValidationError::InvalidComponent)
    );
}
