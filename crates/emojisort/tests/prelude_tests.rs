//! Tests for the prelude surface.
//!
//! These tests verify that everything a front end needs is reachable through
//! `emojisort::prelude` alone: building, sorting, stepping through a log, and
//! repairing slot indices.

use emojisort::prelude::*;

/// Test a front end can drive a replay step by step from the prelude.
#[test]
fn test_prelude_step_by_step() {
    let emoji = vec![
        Emoji::new("🐌", "snail").with_trait(Popularity, 3),
        Emoji::new("🐎", "horse").with_trait(Popularity, 9),
        Emoji::new("🐇", "rabbit").with_trait(Popularity, 6),
    ];

    let output: SortOutput<Emoji> = Sorter::new()
        .trait_key(Popularity)
        .algorithm(Quick)
        .build()
        .unwrap()
        .sort(&emoji)
        .unwrap();

    let mut replayer = Replayer::new(&emoji);
    for step in &output.steps {
        replayer.apply(step).unwrap();
    }
    assert_eq!(replayer.finish().unwrap(), output.sorted);
}

/// Test prelude re-exports of step and slot helpers.
#[test]
fn test_prelude_helpers() {
    let step = Step::highlight(0, HighlightIntensity::Large);
    assert_eq!(step.kind(), StepKind::Highlight);

    let mut slots: SlotMap<char> = SlotMap::new();
    slots.insert(3, 'q');
    slots.insert(8, 'r');
    let repaired = repair_indices(&slots);
    assert_eq!(repaired.keys().copied().collect::<Vec<_>>(), vec![0, 1]);

    let sorter: StepSorter = Sorter::new().trait_key(Sarcastic).build().unwrap();
    assert_eq!(sorter.config().trait_key, TraitKey::Sarcastic);
    assert_eq!(Algorithm::default(), Bubble);
    assert!(Merge.is_recursive() && Quick.is_recursive());
    assert!(!Stupid.converges() && Insertion.converges());
}
