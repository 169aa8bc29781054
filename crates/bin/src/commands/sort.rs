//! Sort command - prints the collection in its current order.

use reorder::sort_by_position;

use crate::cli::InputArgs;
use crate::input::read_items;
use crate::output::{OutputFormat, item_rows, print_json, print_table};

/// Run the sort command
pub fn run(args: &InputArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let items = read_items(&args.input)?;
    let sorted = sort_by_position(&items);

    match format {
        OutputFormat::Human => print_table(&["INDEX", "ID", "POSITION"], &item_rows(&sorted)),
        OutputFormat::Json => print_json(&sorted)?,
    }

    Ok(())
}
