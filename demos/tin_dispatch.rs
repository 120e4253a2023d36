use idnum::{th, us};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== U.S. TIN ===\n");

    for number in ["042103594", "04-2103594", "912-90-3456", "P-00634642", "123-456"] {
        let kinds: Vec<&str> = us::tin::guess_type(number)
            .iter()
            .map(|k| k.as_str())
            .collect();
        println!(
            "  {number} => {:?}, formatted {}",
            kinds,
            us::tin::format(number)
        );
    }

    if let Ok(campus) = us::ein::get_campus("04-2103594") {
        println!("\n  EIN 04-2103594 was assigned by {campus}");
    }

    println!("\n=== Thai TIN ===\n");

    for number in ["3100600445635", "0993000133978", "1234545678789"] {
        match th::tin::tin_type(number) {
            Some(kind) => println!("  {number} => {kind}, formatted {}", th::tin::format(number)),
            None => println!("  {number} => not a Thai TIN"),
        }
    }
}
