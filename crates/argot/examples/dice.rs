//! Builds a `/roll` command pipeline and parses a few sample lines.
//!
//! Run with tracing enabled to watch the steps consume tokens:
//!
//! ```sh
//! RUST_LOG=trace cargo run --example dice
//! ```

use argot::prelude::*;

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let parser = CommandParser::builder()
        .number(
            NumberConfig::new()
                .min(1.0)
                .max(20.0)
                .default_value(1.0)
                .reject_floats(true),
        )
        .one_of(OneOfConfig::new(["d4", "d6", "d8", "d12", "d20"]).case_sensitive(false))
        .rest()
        .build()?;

    let lines = [
        "/roll 2 D6 with advantage",
        "/roll d20",
        "/roll 3 d7",
        "/roll 2.5 d6",
    ];

    for line in lines {
        let cmd = parser.parse(line);
        println!("{line:?}");
        if cmd.has_errors() {
            for (index, error) in cmd.errors() {
                let raw = cmd.arg(index).and_then(ParsedArgument::raw).unwrap_or("");
                println!("  arg {index}: {error} (input: {raw:?})");
            }
        } else {
            for (index, arg) in cmd.args().iter().enumerate() {
                println!("  arg {index}: {}", arg.value().unwrap());
            }
        }
    }

    Ok(())
}
