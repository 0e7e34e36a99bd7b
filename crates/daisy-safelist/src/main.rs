use std::env;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut json = false;
    let mut dump_meta = false;
    for arg in &args {
        match arg.as_str() {
            "--json" => json = true,
            "--meta" => dump_meta = true,
            "--help" | "-h" => {
                print_help();
                return;
            }
            other => {
                eprintln!("Unknown flag: {other}");
                print_help();
                std::process::exit(1);
            }
        }
    }

    if dump_meta {
        // the whole design space as one JSON document
        let dump = serde_json::to_string_pretty(daisy_meta::meta()).expect("serialize metadata");
        println!("{dump}");
        return;
    }

    let classes = daisy_safelist::safelist();
    if json {
        let dump = serde_json::to_string_pretty(&classes).expect("serialize safelist");
        println!("{dump}");
    } else {
        for class in &classes {
            println!("{class}");
        }
    }
}

fn print_help() {
    eprintln!("Usage: daisy-safelist [--json | --meta]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --json   Emit the safelist as a JSON array instead of one class per line");
    eprintln!("  --meta   Dump the full design-system metadata as JSON");
    eprintln!("  --help   Show this message");
}
