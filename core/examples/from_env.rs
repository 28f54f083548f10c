//! Reads flags from the real process arguments.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p argv-extract-core --example from_env -- --name bob --count=3 -v --tag "\"a,b\""
//! ```

use argv_extract_core::{ArgList, Requirement};

fn main() {
    let args = ArgList::from_env();

    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: &ArgList) -> argv_extract_core::Result<()> {
    let name = args.require_string(["--name", "-n"], Some("Who to greet"))?;
    let count = args
        .number(["--count", "-c"], Requirement::Optional, None)?
        .unwrap_or(1.0);
    let verbose = args.flag(["--verbose", "-v"])?;
    let style = args
        .choice("--style", &["plain", "loud"], Requirement::Optional, None)?
        .copied()
        .unwrap_or("plain");
    let tags = args
        .array("--tag", Requirement::Optional, None)?
        .unwrap_or_default();

    if verbose {
        println!("tokens: {:?}", args.tokens());
    }

    for _ in 0..count.max(0.0) as usize {
        match style {
            "loud" => println!("HELLO, {}!", name.to_uppercase()),
            _ => println!("hello, {name}"),
        }
    }

    if !tags.is_empty() {
        println!("tags: {}", tags.join(", "));
    }

    Ok(())
}
