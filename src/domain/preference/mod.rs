//! Preference domain - per-user boolean flags, independent of the weight arithmetic.

mod record;

pub use record::BoolPreferenceRecord;
