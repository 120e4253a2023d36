use idnum::core::{IdentifierKind, ValidationError};
use idnum::{ad, br, mu, nl};

fn describe(error: ValidationError) -> &'static str {
    match error {
        ValidationError::InvalidFormat => "check for stray characters or misplaced separators",
        ValidationError::InvalidLength => "a digit is missing or one too many",
        ValidationError::InvalidChecksum => "probably a typo in one of the digits",
        ValidationError::InvalidComponent => "the number is well-formed but refers to nothing",
    }
}

fn main() {
    // ── 1. One error per failure class ────────────────────────────────
    println!("=== Error kinds ===");
    let cases = [
        ("nl.bsn 1112223334", nl::bsn::validate("1112223334")),
        ("nl.bsn 111252333", nl::bsn::validate("111252333")),
        ("br.cnpj 16.727.230/0001-9X", br::cnpj::validate("16.727.230/0001-9X")),
        ("ad.nrt I 706193 G", ad::nrt::validate("I 706193 G")),
    ];
    for (label, result) in cases {
        match result {
            Ok(compact) => println!("  {label}: ok ({compact})"),
            Err(e) => println!("  {label}: {e}; {}", describe(e)),
        }
    }

    // ── 2. Shape errors vs content errors ─────────────────────────────
    println!("\n=== Classifying ===");
    for number in ["J2906201304089", "J310220130408D", "J29062013040"] {
        match mu::nid::validate(number) {
            Ok(_) => println!("  {number}: valid"),
            Err(e) if e.is_shape() => println!("  {number}: malformed ({e})"),
            Err(e) => println!("  {number}: rejected ({e})"),
        }
    }

    // ── 3. Unknown kind names ───────────────────────────────────────────
    println!("\n=== Unknown kinds ===");
    match "de.steuernummer".parse::<IdentifierKind>() {
        Ok(kind) => println!("  parsed {kind}"),
        Err(e) => println!("  {e}"),
    }
}
