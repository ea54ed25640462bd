//! InterestRecord aggregate - the per-user weight vector and its fold rules.
//!
//! Each tag weight is a running weighted average approximating the
//! probability that the tag appears on an event the user engaged with.
//! `count_changes` is the total signal mass behind those averages, so every
//! reaction rescales *all* tags against the new mass, not only the tags of the
//! reacted-to event.

use std::collections::BTreeSet;

use crate::domain::foundation::UserId;

use super::weights::{FoldWeights, ReactionAction, ReactionKind, TagWeights};

/// Result of looking a record up in the store.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordLookup {
    Found(InterestRecord),
    NotFound,
}

impl RecordLookup {
    pub fn into_option(self) -> Option<InterestRecord> {
        match self {
            RecordLookup::Found(record) => Some(record),
            RecordLookup::NotFound => None,
        }
    }
}

/// Interest profile of one user.
///
/// `version` is 0 until the record is first persisted; the store bumps it on
/// every successful write and rejects writes made against a stale version.
#[derive(Debug, Clone, PartialEq)]
pub struct InterestRecord {
    user_id: UserId,
    tags: TagWeights,
    count_changes: f64,
    questionnaire_tags: Vec<String>,
    version: u64,
}

impl InterestRecord {
    /// Creates the record from a user's first questionnaire.
    ///
    /// Every listed tag gets weight 1.0 (duplicates collapse) and the signal
    /// mass is seeded with the questionnaire weight.
    pub fn from_first_questionnaire(
        user_id: UserId,
        tags: Vec<String>,
        weights: &FoldWeights,
    ) -> Self {
        let weighted = tags.iter().map(|tag| (tag.clone(), 1.0)).collect();
        Self {
            user_id,
            tags: weighted,
            count_changes: weights.questionnaire(),
            questionnaire_tags: tags,
            version: 0,
        }
    }

    /// Rebuilds a record loaded from storage.
    pub fn reconstitute(
        user_id: UserId,
        tags: TagWeights,
        count_changes: f64,
        questionnaire_tags: Vec<String>,
        version: u64,
    ) -> Self {
        Self {
            user_id,
            tags,
            count_changes,
            questionnaire_tags,
            version,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn tags(&self) -> &TagWeights {
        &self.tags
    }

    pub fn into_tags(self) -> TagWeights {
        self.tags
    }

    pub fn count_changes(&self) -> f64 {
        self.count_changes
    }

    pub fn questionnaire_tags(&self) -> &[String] {
        &self.questionnaire_tags
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// True once the record has been written to the store at least once.
    pub fn is_persisted(&self) -> bool {
        self.version > 0
    }

    /// Weight of a tag, 0.0 when the tag was never contributed.
    pub fn weight_of(&self, tag: &str) -> f64 {
        self.tags.get(tag).copied().unwrap_or(0.0)
    }

    /// Swaps the previous questionnaire's share of the mass for a new one.
    ///
    /// The previous questionnaire tags lose `Q / count_changes` (clamped at
    /// zero), the new ones gain it. The mass itself does not change.
    /// A tag listed more than once in either list moves the share once.
    pub fn replace_questionnaire(&mut self, new_tags: Vec<String>, weights: &FoldWeights) {
        let share = weights.questionnaire() / self.count_changes;

        for tag in distinct(&self.questionnaire_tags) {
            let weight = self.tags.entry(tag.to_string()).or_insert(0.0);
            *weight = (*weight - share).max(0.0);
        }

        for tag in distinct(&new_tags) {
            *self.tags.entry(tag.to_string()).or_insert(0.0) += share;
        }

        self.questionnaire_tags = new_tags;
    }

    /// Applies or reverses a reaction of the given kind.
    pub fn apply_reaction(
        &mut self,
        event_tags: &[String],
        kind: ReactionKind,
        action: ReactionAction,
        weights: &FoldWeights,
    ) {
        let weight = weights.for_reaction(kind);
        match action {
            ReactionAction::Add => self.add_reaction(event_tags, weight),
            ReactionAction::Cancel => {
                self.cancel_reaction(event_tags, weight, weights.questionnaire())
            }
        }
    }

    /// Folds a reaction of `weight` on an event carrying `event_tags`.
    pub fn add_reaction(&mut self, event_tags: &[String], weight: f64) {
        let count = self.count_changes;
        let total = count + weight;
        let touched = distinct(event_tags);

        for (tag, value) in self.tags.iter_mut() {
            if !touched.contains(tag.as_str()) {
                *value = *value * count / total;
            }
        }

        for tag in touched {
            let value = self.tags.entry(tag.to_string()).or_insert(0.0);
            *value = (*value * count + weight) / total;
        }

        self.count_changes = total;
    }

    /// Reverses a reaction previously folded with the same tags and weight.
    ///
    /// When the mass is not larger than `weight` the inverse is undefined:
    /// the event tags drop to 0.0, other tags are left as they are and the
    /// mass resets to `floor`. Otherwise any event tag whose restored weight
    /// would be negative is set to 0.0.
    pub fn cancel_reaction(&mut self, event_tags: &[String], weight: f64, floor: f64) {
        let count = self.count_changes;
        let touched = distinct(event_tags);

        if count.is_nan() || count <= weight {
            for tag in touched {
                self.tags.insert(tag.to_string(), 0.0);
            }
            self.count_changes = floor;
            return;
        }

        let remaining = count - weight;

        for (tag, value) in self.tags.iter_mut() {
            if !touched.contains(tag.as_str()) {
                *value = *value * count / remaining;
            }
        }

        for tag in touched {
            let value = self.tags.entry(tag.to_string()).or_insert(0.0);
            let restored = (*value * count - weight) / remaining;
            *value = if restored.is_finite() && restored >= 0.0 {
                restored
            } else {
                0.0
            };
        }

        self.count_changes = remaining;
    }
}

fn distinct(tags: &[String]) -> BTreeSet<&str> {
    tags.iter().map(String::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn record_with(weights: &[(&str, f64)], count: f64, q_tags: &[&str]) -> InterestRecord {
        InterestRecord::reconstitute(
            user(),
            weights.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            count,
            tags(q_tags),
            1,
        )
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    // ════════════════════════════════════════════════════════════════════════
    // First questionnaire
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn first_questionnaire_sets_unit_weights_and_seeds_mass() {
        let record = InterestRecord::from_first_questionnaire(
            user(),
            tags(&["music", "sport"]),
            &FoldWeights::default(),
        );

        assert_eq!(record.weight_of("music"), 1.0);
        assert_eq!(record.weight_of("sport"), 1.0);
        assert_eq!(record.tags().len(), 2);
        assert_eq!(record.count_changes(), 50.0);
        assert_eq!(record.questionnaire_tags(), &tags(&["music", "sport"])[..]);
        assert!(!record.is_persisted());
    }

    #[test]
    fn first_questionnaire_duplicates_are_not_additive() {
        let record = InterestRecord::from_first_questionnaire(
            user(),
            tags(&["music", "music", "art"]),
            &FoldWeights::default(),
        );

        assert_eq!(record.weight_of("music"), 1.0);
        assert_eq!(record.tags().len(), 2);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Questionnaire replacement
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn replacing_questionnaire_moves_share_between_tags() {
        let mut record = InterestRecord::from_first_questionnaire(
            user(),
            tags(&["a", "b"]),
            &FoldWeights::default(),
        );

        record.replace_questionnaire(tags(&["b", "c"]), &FoldWeights::default());

        assert_close(record.weight_of("a"), 0.0);
        assert_close(record.weight_of("b"), 1.0);
        assert_close(record.weight_of("c"), 1.0);
        assert_eq!(record.questionnaire_tags(), &tags(&["b", "c"])[..]);
        assert_eq!(record.count_changes(), 50.0);
    }

    #[test]
    fn replacing_questionnaire_uses_current_mass() {
        let mut record = record_with(&[("a", 0.8), ("b", 0.6), ("c", 0.3)], 100.0, &["a", "b"]);

        record.replace_questionnaire(tags(&["b", "c"]), &FoldWeights::default());

        assert_close(record.weight_of("a"), 0.3);
        assert_close(record.weight_of("b"), 0.6);
        assert_close(record.weight_of("c"), 0.8);
        assert_eq!(record.count_changes(), 100.0);
    }

    #[test]
    fn replacing_questionnaire_clamps_at_zero() {
        let mut record = record_with(&[("a", 0.1)], 100.0, &["a"]);

        record.replace_questionnaire(tags(&["z"]), &FoldWeights::default());

        assert_eq!(record.weight_of("a"), 0.0);
        assert_close(record.weight_of("z"), 0.5);
    }

    #[test]
    fn repeated_questionnaire_tag_moves_share_once() {
        let mut record = record_with(&[("a", 0.9), ("b", 0.2)], 100.0, &["a", "a"]);

        record.replace_questionnaire(tags(&["b", "b", "b"]), &FoldWeights::default());

        assert_close(record.weight_of("a"), 0.4);
        assert_close(record.weight_of("b"), 0.7);
        assert_eq!(record.questionnaire_tags(), tags(&["b", "b", "b"]).as_slice());
    }

    // ════════════════════════════════════════════════════════════════════════
    // Reactions
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn adding_like_renormalizes_all_tags() {
        let mut record = record_with(&[("x", 0.0), ("y", 1.0)], 50.0, &["y"]);

        record.add_reaction(&tags(&["x"]), 1.0);

        assert_close(record.weight_of("x"), 1.0 / 51.0);
        assert_close(record.weight_of("y"), 50.0 / 51.0);
        assert_eq!(record.count_changes(), 51.0);
    }

    #[test]
    fn adding_reaction_creates_unseen_tags() {
        let mut record = record_with(&[("y", 1.0)], 50.0, &["y"]);

        record.add_reaction(&tags(&["new"]), 5.0);

        assert_close(record.weight_of("new"), 5.0 / 55.0);
        assert_eq!(record.count_changes(), 55.0);
    }

    #[test]
    fn duplicate_event_tags_count_once() {
        let mut once = record_with(&[("y", 1.0)], 50.0, &["y"]);
        let mut twice = once.clone();

        once.add_reaction(&tags(&["x"]), 1.0);
        twice.add_reaction(&tags(&["x", "x"]), 1.0);

        assert_eq!(once.tags(), twice.tags());
    }

    #[test]
    fn cancel_reverses_add() {
        let mut record = record_with(&[("x", 0.2), ("y", 1.0)], 60.0, &["y"]);
        let before = record.clone();

        record.add_reaction(&tags(&["x", "z"]), 5.0);
        record.cancel_reaction(&tags(&["x", "z"]), 5.0, 50.0);

        assert_close(record.count_changes(), before.count_changes());
        for tag in ["x", "y", "z"] {
            assert_close(record.weight_of(tag), before.weight_of(tag));
        }
    }

    #[test]
    fn cancel_of_uncredited_tag_clamps_to_zero() {
        let mut record = record_with(&[("x", 0.0), ("y", 1.0)], 50.0, &["y"]);

        record.cancel_reaction(&tags(&["x", "never"]), 1.0, 50.0);

        assert_eq!(record.weight_of("x"), 0.0);
        assert_eq!(record.weight_of("never"), 0.0);
        assert!(record.tags().contains_key("never"));
        assert_close(record.weight_of("y"), 50.0 / 49.0);
        assert_eq!(record.count_changes(), 49.0);
    }

    #[test]
    fn degenerate_cancel_resets_to_floor() {
        let mut record = record_with(&[("x", 0.5), ("y", 0.7)], 5.0, &["y"]);

        record.cancel_reaction(&tags(&["x"]), 5.0, 50.0);

        assert_eq!(record.weight_of("x"), 0.0);
        assert_eq!(record.weight_of("y"), 0.7);
        assert_eq!(record.count_changes(), 50.0);
    }

    #[test]
    fn apply_reaction_uses_kind_weight() {
        let weights = FoldWeights::default();
        let mut record = record_with(&[("y", 1.0)], 50.0, &["y"]);

        record.apply_reaction(&tags(&["x"]), ReactionKind::Favorite, ReactionAction::Add, &weights);
        assert_eq!(record.count_changes(), 55.0);

        record.apply_reaction(
            &tags(&["x"]),
            ReactionKind::Favorite,
            ReactionAction::Cancel,
            &weights,
        );
        assert_close(record.count_changes(), 50.0);
        assert_close(record.weight_of("x"), 0.0);
        assert_close(record.weight_of("y"), 1.0);
    }

    #[test]
    fn lookup_into_option() {
        let record = record_with(&[], 50.0, &[]);
        assert!(RecordLookup::Found(record).into_option().is_some());
        assert!(RecordLookup::NotFound.into_option().is_none());
    }
}
