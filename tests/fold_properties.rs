//! Property-based tests for the fold arithmetic.
//!
//! Uses proptest to fuzz-verify:
//!   - weights stay non-negative and finite under any fold sequence
//!   - a reaction followed by its cancellation restores the record
//!   - questionnaire replacement never changes the signal mass

use proptest::prelude::*;

use interest_aggregator::domain::foundation::UserId;
use interest_aggregator::domain::interest::{
    FoldWeights, InterestRecord, ReactionAction, ReactionKind,
};

#[derive(Debug, Clone)]
enum Fold {
    Questionnaire(Vec<String>),
    Reaction(Vec<String>, ReactionKind, ReactionAction),
}

fn tag() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["music", "sport", "art", "food", "tech", "film"])
        .prop_map(str::to_string)
}

fn tags() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(tag(), 0..5)
}

fn kind() -> impl Strategy<Value = ReactionKind> {
    prop_oneof![Just(ReactionKind::Like), Just(ReactionKind::Favorite)]
}

fn action() -> impl Strategy<Value = ReactionAction> {
    prop_oneof![Just(ReactionAction::Add), Just(ReactionAction::Cancel)]
}

fn fold() -> impl Strategy<Value = Fold> {
    prop_oneof![
        1 => tags().prop_map(Fold::Questionnaire),
        4 => (tags(), kind(), action()).prop_map(|(t, k, a)| Fold::Reaction(t, k, a)),
    ]
}

fn new_record(initial: Vec<String>) -> InterestRecord {
    InterestRecord::from_first_questionnaire(
        UserId::new("prop-user").unwrap(),
        initial,
        &FoldWeights::default(),
    )
}

fn apply(record: &mut InterestRecord, fold: &Fold, weights: &FoldWeights) {
    match fold {
        Fold::Questionnaire(tags) => record.replace_questionnaire(tags.clone(), weights),
        Fold::Reaction(tags, kind, action) => record.apply_reaction(tags, *kind, *action, weights),
    }
}

proptest! {
    /// Every weight is >= 0 and finite after any sequence of folds.
    #[test]
    fn prop_weights_never_negative(
        initial in tags(),
        folds in prop::collection::vec(fold(), 0..60),
    ) {
        let weights = FoldWeights::default();
        let mut record = new_record(initial);

        for f in &folds {
            apply(&mut record, f, &weights);
            for (tag, value) in record.tags() {
                prop_assert!(value.is_finite(), "{} is not finite after {:?}", tag, f);
                prop_assert!(*value >= 0.0, "{} = {} after {:?}", tag, value, f);
            }
            prop_assert!(record.count_changes() > 0.0);
        }
    }

    /// Adding a reaction and cancelling it restores weights and mass.
    #[test]
    fn prop_add_then_cancel_round_trips(
        initial in tags(),
        history in prop::collection::vec((tags(), kind()), 0..20),
        event_tags in tags(),
        reaction in kind(),
    ) {
        let weights = FoldWeights::default();
        let mut record = new_record(initial);
        for (t, k) in &history {
            record.apply_reaction(t, *k, ReactionAction::Add, &weights);
        }
        let before = record.clone();

        record.apply_reaction(&event_tags, reaction, ReactionAction::Add, &weights);
        record.apply_reaction(&event_tags, reaction, ReactionAction::Cancel, &weights);

        prop_assert!((record.count_changes() - before.count_changes()).abs() < 1e-9);
        for (tag, value) in before.tags() {
            prop_assert!(
                (record.weight_of(tag) - value).abs() < 1e-9,
                "{}: {} vs {}", tag, record.weight_of(tag), value
            );
        }
        for tag in &event_tags {
            prop_assert!((record.weight_of(tag) - before.weight_of(tag)).abs() < 1e-9);
        }
    }

    /// Questionnaire replacement moves weight between tags but keeps the mass.
    #[test]
    fn prop_questionnaire_keeps_mass(
        initial in tags(),
        likes in prop::collection::vec(tags(), 0..20),
        replacement in tags(),
    ) {
        let weights = FoldWeights::default();
        let mut record = new_record(initial);
        for t in &likes {
            record.add_reaction(t, weights.like());
        }
        let mass = record.count_changes();

        record.replace_questionnaire(replacement.clone(), &weights);

        prop_assert_eq!(record.count_changes(), mass);
        prop_assert_eq!(record.questionnaire_tags(), &replacement[..]);
    }
}

#[test]
fn like_example_matches_hand_computation() {
    let mut record = new_record(vec!["y".to_string()]);
    record.add_reaction(&["x".to_string()], 1.0);

    assert!((record.weight_of("x") - 1.0 / 51.0).abs() < 1e-12);
    assert!((record.weight_of("y") - 50.0 / 51.0).abs() < 1e-12);
    assert_eq!(record.count_changes(), 51.0);
}
