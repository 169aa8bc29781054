//! Diff command - finds the single move behind a desired order.

use reorder::detect_move;

use crate::cli::DiffArgs;
use crate::input::read_items;
use crate::output::{OutputFormat, print_json};

/// Run the diff command
pub fn run(args: &DiffArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let items = read_items(&args.input.input)?;
    let mv = detect_move(&items, &args.order)?;

    match (format, &mv) {
        (OutputFormat::Human, Some(mv)) => {
            println!("Move {} to index {}", mv.id, mv.target_index);
        }
        (OutputFormat::Human, None) => println!("Already in the requested order"),
        (OutputFormat::Json, _) => print_json(&mv)?,
    }

    Ok(())
}
