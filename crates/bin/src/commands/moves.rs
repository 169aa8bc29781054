//! Move and check commands - run the engine for a single move.

use reorder::{Item, ReorderConfig, ReorderOutcome, ReorderResult, Violation, compute_reorder};

use crate::cli::MoveArgs;
use crate::input::read_items;
use crate::output::{OutputFormat, format_position, item_rows, print_json, print_table};

/// Run the move command
pub fn run(
    args: &MoveArgs,
    config: &ReorderConfig,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = compute(args, config)?;

    match format {
        OutputFormat::Human => {
            print_outcome(&result.outcome);
            println!();
            println!("Changes ({}):", result.changes.len());
            let rows: Vec<Vec<String>> = result
                .changes
                .iter()
                .map(|c| vec![c.id.clone(), format_position(Some(c.position))])
                .collect();
            print_table(&["ID", "POSITION"], &rows);
            println!();
            println!("Final order:");
            print_table(
                &["INDEX", "ID", "POSITION"],
                &item_rows(&result.ordered_entities),
            );
        }
        OutputFormat::Json => print_json(&result)?,
    }

    Ok(())
}

/// Run the check command
pub fn check(
    args: &MoveArgs,
    config: &ReorderConfig,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = compute(args, config)?;

    match format {
        OutputFormat::Human => print_outcome(&result.outcome),
        OutputFormat::Json => print_json(&result.outcome)?,
    }

    Ok(())
}

fn compute(
    args: &MoveArgs,
    config: &ReorderConfig,
) -> Result<ReorderResult<Item>, Box<dyn std::error::Error>> {
    let items = read_items(&args.input.input)?;
    let result = compute_reorder(&items, &args.id, args.index, config)?;
    tracing::info!(
        id = %args.id,
        index = args.index,
        changes = result.changes.len(),
        renumbered = result.is_renumbered(),
        "Computed reorder"
    );
    Ok(result)
}

fn print_outcome(outcome: &ReorderOutcome) {
    match outcome {
        ReorderOutcome::Moved => println!("Outcome:     moved (single update)"),
        ReorderOutcome::Renumbered { violations } => {
            println!("Outcome:     renumbered");
            for violation in violations {
                println!("  - {}", describe(violation));
            }
        }
    }
}

fn describe(violation: &Violation) -> String {
    match violation {
        Violation::CandidateBelowMinimum { candidate } => {
            format!("computed position {candidate} is below the minimum")
        }
        Violation::InvalidPosition { id, position } => {
            format!("{id} has invalid position {position}")
        }
        Violation::DuplicatePosition { position, ids } => {
            format!("position {position} shared by {}", ids.join(", "))
        }
        Violation::TooCloseToPrevious { id, distance } => {
            format!("only {distance} away from previous neighbour {id}")
        }
        Violation::TooCloseToNext { id, distance } => {
            format!("only {distance} away from next neighbour {id}")
        }
        Violation::UnpositionedPrevious { id } => {
            format!("previous neighbour {id} has no position")
        }
    }
}
