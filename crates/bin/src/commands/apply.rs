//! Apply command - applies change records in memory and prints the result.

use reorder::apply_changes;

use crate::cli::ApplyArgs;
use crate::input::{read_changes, read_items};
use crate::output::{OutputFormat, item_rows, print_json, print_table};

/// Run the apply command
pub fn run(args: &ApplyArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let items = read_items(&args.input.input)?;
    let changes = read_changes(&args.changes)?;
    let applied = apply_changes(&items, &changes)?;

    match format {
        OutputFormat::Human => print_table(&["INDEX", "ID", "POSITION"], &item_rows(&applied)),
        OutputFormat::Json => print_json(&applied)?,
    }

    Ok(())
}
