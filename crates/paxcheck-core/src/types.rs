use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// PaxType
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize,
)]
#[remain::sorted]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaxType {
    Group,
    Person,
}

///
/// AgeRange
///
/// Closed integer interval `[from, to]`. Construction does not enforce
/// ordering or bounds; the shape validator reports those as issues.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Hash, Serialize)]
#[display("{from}-{to}")]
pub struct AgeRange {
    pub from: u8,
    pub to: u8,
}

impl AgeRange {
    #[must_use]
    pub const fn new(from: u8, to: u8) -> Self {
        Self { from, to }
    }

    #[must_use]
    pub const fn contains(self, age: u8) -> bool {
        self.from <= age && age <= self.to
    }

    /// Superset check: every age in `other` is also in `self`.
    #[must_use]
    pub const fn encloses(self, other: Self) -> bool {
        self.from <= other.from && self.to >= other.to
    }

    /// Closed-interval overlap: the two ranges share at least one age.
    #[must_use]
    pub const fn overlaps(self, other: Self) -> bool {
        other.contains(self.from) || other.contains(self.to) || self.encloses(other)
    }
}

///
/// AgeBand
///
/// Validated age restriction. The bounded variant carries both ages by
/// construction, so "bounded implies both ages present" holds structurally.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum AgeBand {
    AllAges,
    Bounded(AgeRange),
}

impl AgeBand {
    #[must_use]
    pub const fn bounded(self) -> Option<AgeRange> {
        match self {
            Self::AllAges => None,
            Self::Bounded(range) => Some(range),
        }
    }

    #[must_use]
    pub const fn is_all_ages(self) -> bool {
        matches!(self, Self::AllAges)
    }
}

///
/// PaxEntry
///
/// Raw form/wire shape of one pax definition. `age_from`/`age_to` are only
/// meaningful when `all_ages` is false; the shape validator turns a raw
/// entry into a [`Pax`].
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PaxEntry {
    pub pax_code: String,
    pub pax_type: PaxType,
    pub free_of_charge: bool,
    pub all_ages: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_from: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_to: Option<u8>,
}

impl PaxEntry {
    /// An entry with no age restriction.
    #[must_use]
    pub fn all_ages(pax_code: impl Into<String>, pax_type: PaxType) -> Self {
        Self {
            pax_code: pax_code.into(),
            pax_type,
            free_of_charge: false,
            all_ages: true,
            age_from: None,
            age_to: None,
        }
    }

    /// An entry restricted to the closed range `[from, to]`.
    #[must_use]
    pub fn bounded(pax_code: impl Into<String>, pax_type: PaxType, from: u8, to: u8) -> Self {
        Self {
            pax_code: pax_code.into(),
            pax_type,
            free_of_charge: false,
            all_ages: false,
            age_from: Some(from),
            age_to: Some(to),
        }
    }
}

///
/// Pax
///
/// A pax definition that passed shape validation.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Pax {
    pub pax_code: String,
    pub pax_type: PaxType,
    pub free_of_charge: bool,
    pub band: AgeBand,
}

///
/// ExperiencePax
///
/// Input envelope produced by the form layer: the experience being edited
/// plus its full pax list.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ExperiencePax {
    pub experience_id: String,
    pub pax_list: Vec<PaxEntry>,
}

///
/// TESTS
///
