use crate::{
    issue::Issues,
    types::{AgeRange, Pax},
};

/// Pax codes whose regulatory categories may legitimately overlap ordinary
/// age bands. Excluded from overlap detection, never from shape checks.
pub const EXEMPT_PAX_CODES: [&str; 8] = [
    "eu-citizen",
    "military",
    "disabled",
    "eu-teacher",
    "student",
    "participant",
    "caregiver",
    "journalist",
];

#[must_use]
pub fn is_exempt_code(code: &str) -> bool {
    EXEMPT_PAX_CODES.contains(&code)
}

///
/// detect_overlaps
///
/// Pairwise scan over the bounded, non-exempt entries of a shape-validated
/// list. Pairs are scanned in `(i, j)` order with `i < j`; issue paths use
/// each entry's index in the original, unfiltered list. Once a pair
/// overlaps, all six predicates below are evaluated and each emits its own
/// issue, so one pair can produce anything from two issues (a boundary
/// touch) to six (identical ranges). If any pair overlapped, exactly one
/// list-level `overlap` issue is appended after all pair issues.
///
/// O(n^2) over the filtered set; pax lists are bounded by a handful of
/// categories.
///

pub fn detect_overlaps(validated: &[(usize, Pax)], issues: &mut Issues) {
    let comparable: Vec<(usize, &str, AgeRange)> = validated
        .iter()
        .filter(|(_, pax)| !is_exempt_code(&pax.pax_code))
        .filter_map(|(index, pax)| {
            pax.band
                .bounded()
                .map(|range| (*index, pax.pax_code.as_str(), range))
        })
        .collect();

    let mut found = false;

    for (pos, &(index_a, code_a, a)) in comparable.iter().enumerate() {
        for &(index_b, code_b, b) in &comparable[pos + 1..] {
            if !a.overlaps(b) {
                continue;
            }
            found = true;

            if a.encloses(b) {
                issues.add_at(index_a, "age_from", format!("contains \"{code_b}\" range"));
            }
            if b.encloses(a) {
                issues.add_at(index_b, "age_from", format!("contains \"{code_a}\" range"));
            }
            if b.contains(a.from) {
                issues.add_at(index_a, "age_from", format!("overlaps with \"{code_b}\""));
            }
            if b.contains(a.to) {
                issues.add_at(index_a, "age_to", format!("overlaps with \"{code_b}\""));
            }
            if a.contains(b.from) {
                issues.add_at(index_b, "age_from", format!("overlaps with \"{code_a}\""));
            }
            if a.contains(b.to) {
                issues.add_at(index_b, "age_to", format!("overlaps with \"{code_a}\""));
            }
        }
    }

    if found {
        issues.add_root("overlap");
    }
}

///
/// TESTS
///
