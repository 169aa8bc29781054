//! compute_reorder integration tests
//!
//! Covers the minimal-update path, every renumber trigger, unpositioned
//! entities, custom thresholds, and the caller-input error surface.

use reorder::{
    ChangeRecord, ConfigError, Item, ReorderConfig, ReorderError, ReorderOutcome, Violation,
    apply_changes, compute_reorder, sort_by_position,
};

use crate::helpers::*;

fn change(id: &str, position: f64) -> ChangeRecord {
    ChangeRecord {
        id: id.to_string(),
        position,
    }
}

// ===== MINIMAL UPDATE =====

#[test]
fn test_move_last_to_front() {
    let input = positioned(&[("A", 100.0), ("B", 200.0), ("C", 300.0)]);
    let result = compute_reorder(&input, "C", 0, &default_config()).unwrap();

    assert_eq!(result.changes, vec![change("C", 99.0)]);
    assert_eq!(ids(&result.ordered_entities), ["C", "A", "B"]);
    assert_eq!(
        positions(&result.ordered_entities),
        [Some(99.0), Some(100.0), Some(200.0)]
    );
    assert_eq!(result.outcome, ReorderOutcome::Moved);
    assert_result_invariants(&input, &result, &default_config());
}

#[test]
fn test_move_into_middle_takes_midpoint() {
    let input = positioned(&[("A", 100.0), ("B", 200.0), ("C", 300.0)]);
    let result = compute_reorder(&input, "C", 1, &default_config()).unwrap();

    assert_eq!(result.changes, vec![change("C", 150.0)]);
    assert_eq!(ids(&result.ordered_entities), ["A", "C", "B"]);
    assert!(!result.is_renumbered());
}

#[test]
fn test_move_first_to_end() {
    let input = positioned(&[("A", 100.0), ("B", 200.0), ("C", 300.0)]);
    let result = compute_reorder(&input, "A", 2, &default_config()).unwrap();

    assert_eq!(result.changes, vec![change("A", 301.0)]);
    assert_eq!(ids(&result.ordered_entities), ["B", "C", "A"]);
}

#[test]
fn test_unsorted_input_is_sorted_first() {
    let input = positioned(&[("C", 300.0), ("A", 100.0), ("B", 200.0)]);
    let result = compute_reorder(&input, "C", 1, &default_config()).unwrap();

    assert_eq!(result.changes, vec![change("C", 150.0)]);
    assert_eq!(ids(&result.ordered_entities), ["A", "C", "B"]);
}

#[test]
fn test_other_fields_pass_through() {
    let input = vec![
        Item::at("A", 100.0).with_field("title", "first"),
        Item::at("B", 200.0).with_field("title", "second"),
    ];
    let result = compute_reorder(&input, "B", 0, &default_config()).unwrap();

    assert_eq!(result.ordered_entities[0].fields["title"], "second");
    assert_eq!(result.ordered_entities[1].fields["title"], "first");
    // Input untouched.
    assert_eq!(input[1].position, Some(200.0));
}

#[test]
fn test_changes_applied_reproduce_ordered_entities() {
    let input = positioned(&[("A", 10.0), ("B", 20.0), ("C", 30.0), ("D", 40.0)]);
    let result = compute_reorder(&input, "D", 1, &default_config()).unwrap();

    let applied = apply_changes(&input, &result.changes).unwrap();
    assert_eq!(applied, result.ordered_entities);
}

// ===== RENUMBERING =====

#[test]
fn test_corrupt_collection_is_renumbered() {
    let input = positioned(&[("A", 1.0), ("B", 1.0), ("C", 1.0), ("D", 0.0), ("E", 0.0)]);
    let result = compute_reorder(&input, "D", 0, &default_config()).unwrap();

    assert_eq!(
        result.changes,
        vec![
            change("D", 10.0),
            change("E", 20.0),
            change("A", 30.0),
            change("B", 40.0),
            change("C", 50.0),
        ]
    );
    assert_eq!(ids(&result.ordered_entities), ["D", "E", "A", "B", "C"]);

    let ReorderOutcome::Renumbered { violations } = &result.outcome else {
        panic!("expected renumber, got {:?}", result.outcome);
    };
    assert!(violations.iter().any(|v| matches!(
        v,
        Violation::InvalidPosition { id, .. } if id == "D"
    )));
    assert!(violations.iter().any(|v| matches!(
        v,
        Violation::DuplicatePosition { position, .. } if *position == 1.0
    )));
    assert_result_invariants(&input, &result, &default_config());
}

#[test]
fn test_exhausted_gap_is_renumbered() {
    let input = positioned(&[("A", 1.0), ("B", 1.05), ("C", 1.1)]);
    let result = compute_reorder(&input, "C", 1, &default_config()).unwrap();

    assert!(result.is_renumbered());
    assert_eq!(
        result.changes,
        vec![change("A", 10.0), change("C", 20.0), change("B", 30.0)]
    );
    assert_result_invariants(&input, &result, &default_config());
}

#[test]
fn test_corruption_elsewhere_forces_repair() {
    // The move is trivially valid, but B and C share a position.
    let input = positioned(&[("A", 100.0), ("B", 500.0), ("C", 500.0), ("D", 900.0)]);
    let result = compute_reorder(&input, "D", 0, &default_config()).unwrap();

    assert!(result.is_renumbered());
    assert_eq!(result.changes.len(), 4);
    assert_eq!(ids(&result.ordered_entities), ["D", "A", "B", "C"]);
}

#[test]
fn test_clamped_candidate_collides_and_renumbers() {
    // Only-next case clamps 1.5 - 1 up to the floor, 0.5 away from B.
    let input = positioned(&[("A", 1.5), ("B", 5.0)]);
    let ok = compute_reorder(&input, "B", 0, &default_config()).unwrap();
    assert_eq!(ok.changes, vec![change("B", 1.0)]);

    let tight = positioned(&[("A", 1.05), ("B", 5.0)]);
    let result = compute_reorder(&tight, "B", 0, &default_config()).unwrap();
    assert!(result.is_renumbered());
    assert_eq!(ids(&result.ordered_entities), ["B", "A"]);
}

#[test]
fn test_precision_exhaustion_at_large_values() {
    let big = 2f64.powi(60);
    let input = positioned(&[("A", big), ("B", big * 2.0)]);
    let result = compute_reorder(&input, "A", 1, &default_config()).unwrap();

    // big*2 + 1 rounds back to big*2, so the gap check fires.
    assert!(result.is_renumbered());
    assert_eq!(ids(&result.ordered_entities), ["B", "A"]);
    assert_result_invariants(&input, &result, &default_config());
}

#[test]
fn test_renumbered_result_is_stable() {
    let input = positioned(&[("A", 1.0), ("B", 1.0), ("C", 2.0)]);
    let config = default_config();
    let first = compute_reorder(&input, "C", 0, &config).unwrap();
    assert!(first.is_renumbered());

    // Moving the middle entity to where it already is keeps its value.
    let again = compute_reorder(&first.ordered_entities, "A", 1, &config).unwrap();
    assert!(!again.is_renumbered());
    assert_eq!(again.changes, vec![change("A", 20.0)]);
    assert_eq!(
        positions(&again.ordered_entities),
        positions(&first.ordered_entities)
    );
}

// ===== UNPOSITIONED ENTITIES =====

#[test]
fn test_unpositioned_entity_receives_position() {
    let input = items(&[("A", Some(100.0)), ("B", Some(200.0)), ("X", None)]);
    let result = compute_reorder(&input, "X", 1, &default_config()).unwrap();

    assert_eq!(result.changes, vec![change("X", 150.0)]);
    assert_eq!(ids(&result.ordered_entities), ["A", "X", "B"]);
}

#[test]
fn test_move_ahead_of_unpositioned_tail() {
    let input = items(&[("A", Some(100.0)), ("X", None), ("Y", None)]);
    let result = compute_reorder(&input, "X", 1, &default_config()).unwrap();

    assert_eq!(result.changes, vec![change("X", 101.0)]);
    assert_eq!(ids(&result.ordered_entities), ["A", "X", "Y"]);
    assert_eq!(result.ordered_entities[2].position, None);
}

#[test]
fn test_move_behind_unpositioned_entity_renumbers() {
    let input = items(&[("A", Some(100.0)), ("X", None), ("Y", None)]);
    let result = compute_reorder(&input, "A", 2, &default_config()).unwrap();

    assert!(result.is_renumbered());
    assert_eq!(
        result.changes,
        vec![change("X", 10.0), change("Y", 20.0), change("A", 30.0)]
    );
    assert_result_invariants(&input, &result, &default_config());
}

#[test]
fn test_all_unpositioned_first_slot_gets_floor() {
    let input = items(&[("X", None), ("Y", None)]);
    let result = compute_reorder(&input, "Y", 0, &default_config()).unwrap();

    assert_eq!(result.changes, vec![change("Y", 1.0)]);
    assert_eq!(ids(&result.ordered_entities), ["Y", "X"]);
}

// ===== SINGLE ENTITY =====

#[test]
fn test_single_entity_never_renumbers() {
    for stored in [None, Some(0.0), Some(-7.0), Some(1.0), Some(500.0)] {
        let input = items(&[("A", stored)]);
        let result = compute_reorder(&input, "A", 0, &default_config()).unwrap();
        assert!(!result.is_renumbered(), "renumbered for {stored:?}");
        assert_eq!(result.changes, vec![change("A", 1.0)]);
    }
}

// ===== CONFIGURATION =====

#[test]
fn test_custom_thresholds() {
    let config = ReorderConfig::default()
        .with_min_position_gap(5.0)
        .with_renumber_spacing(100.0)
        .with_min_position_value(10.0);

    // Midpoint 15 is only 5 from each neighbour: allowed.
    let input = positioned(&[("A", 10.0), ("B", 20.0), ("C", 30.0)]);
    let result = compute_reorder(&input, "C", 1, &config).unwrap();
    assert_eq!(result.changes, vec![change("C", 15.0)]);

    // Midpoint 12 is too close with a gap of 5.
    let input = positioned(&[("A", 10.0), ("B", 14.0), ("C", 30.0)]);
    let result = compute_reorder(&input, "C", 1, &config).unwrap();
    assert!(result.is_renumbered());
    assert_eq!(
        positions(&result.ordered_entities),
        [Some(100.0), Some(200.0), Some(300.0)]
    );
}

#[test]
fn test_spacing_that_overflows_on_renumber_is_rejected() {
    // 1e308 passes on its own, but 3 * 1e308 is infinite.
    let config = ReorderConfig::default().with_renumber_spacing(1e308);
    let input = positioned(&[("A", 5.0), ("B", 5.0), ("C", 5.0)]);
    let err = compute_reorder(&input, "A", 0, &config).unwrap_err();

    assert!(err.is_config_error());
    assert!(matches!(
        err,
        ReorderError::InvalidConfig(ConfigError::InvalidValue {
            field: "renumberSpacing",
            ..
        })
    ));

    // The same spacing is fine for a collection it can renumber.
    let single = positioned(&[("A", 5.0)]);
    let result = compute_reorder(&single, "A", 0, &config).unwrap();
    assert!(result.changes.iter().all(|c| c.position.is_finite()));
}

#[test]
fn test_floor_change_makes_existing_values_invalid() {
    let config = ReorderConfig::default().with_min_position_value(5.0);
    let input = positioned(&[("A", 3.0), ("B", 50.0)]);
    let result = compute_reorder(&input, "B", 1, &config).unwrap();
    assert!(result.is_renumbered());
}

// ===== ERRORS =====

#[test]
fn test_empty_collection() {
    let input: Vec<Item> = Vec::new();
    let err = compute_reorder(&input, "A", 0, &default_config()).unwrap_err();
    assert!(err.is_empty_collection());
}

#[test]
fn test_index_out_of_range_cites_index_and_len() {
    let input = positioned(&[("A", 1.0)]);
    let err = compute_reorder(&input, "A", 5, &default_config()).unwrap_err();
    assert_eq!(err, ReorderError::IndexOutOfRange { index: 5, len: 1 });
    let msg = err.to_string();
    assert!(msg.contains('5') && msg.contains('1'), "{msg}");
}

#[test]
fn test_missing_and_unknown_ids() {
    let input = positioned(&[("A", 1.0), ("B", 2.0)]);
    assert_eq!(
        compute_reorder(&input, "", 0, &default_config()).unwrap_err(),
        ReorderError::MissingMoveId
    );
    let err = compute_reorder(&input, "Q", 0, &default_config()).unwrap_err();
    assert_eq!(err.id(), Some("Q"));
}

#[test]
fn test_errors_leave_no_output() {
    // A Result carries either the full output or the error, never both.
    let input = positioned(&[("A", 1.0), ("A", 2.0)]);
    let result = compute_reorder(&input, "A", 1, &default_config());
    assert!(matches!(result, Err(ReorderError::DuplicateId { .. })));
}

#[test]
fn test_sort_by_position_matches_engine_baseline() {
    let input = items(&[("B", Some(2.0)), ("X", None), ("A", Some(1.0))]);
    let sorted = sort_by_position(&input);
    assert_eq!(ids(&sorted), ["A", "B", "X"]);
}
