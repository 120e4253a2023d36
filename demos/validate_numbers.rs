use idnum::core::{IdentifierKind, guess_kinds};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Validation by kind ===\n");

    let samples = [
        ("br.cnpj", "16.727.230/0001-97"),
        ("br.cnpj", "16.727.230/0001-98"), // wrong check digit
        ("nl.bsn", "111222333"),
        ("ad.nrt", "I 706193 G"), // unknown holder letter
        ("ro.cui", "RO 185 472 90"),
        ("figi", "BBG000BLNQ16"),
    ];

    for (name, number) in &samples {
        let Ok(kind) = name.parse::<IdentifierKind>() else {
            println!("  {name}: unknown kind");
            continue;
        };
        match kind.validate(number) {
            Ok(compact) => println!(
                "  {kind} {number} => valid (compact={compact}, formatted={})",
                kind.format(number)
            ),
            Err(e) => println!("  {kind} {number} => INVALID: {e}"),
        }
    }

    println!("\n=== Guessing the kind ===\n");

    for number in ["042103594", "3100600445635", "00501503"] {
        let kinds: Vec<String> = guess_kinds(number, None)
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("  {number} => [{}]", kinds.join(", "));
    }
}
