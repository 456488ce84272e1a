use crate::{
    MAX_PAX_AGE,
    issue::Issues,
    types::{AgeBand, AgeRange, Pax, PaxEntry},
    validator::{Range, Validator},
};

/// Message for a bounded entry whose ages arrive in the wrong order.
pub const AGE_ORDER_MESSAGE: &str = "Starting age must be less than or equal to ending age";

///
/// validate_entry
///
/// Classify one raw entry over the `all_ages` discriminator and check range
/// well-formedness. The all-ages variant never has its age fields
/// evaluated. Returns the validated pax only when the entry produced no
/// issues; a rejected entry never reaches overlap detection.
///

pub fn validate_entry(index: usize, entry: &PaxEntry, issues: &mut Issues) -> Option<Pax> {
    if entry.all_ages {
        return Some(pax_with_band(entry, AgeBand::AllAges));
    }

    let before = issues.len();
    let bounds = Range::new(0, MAX_PAX_AGE);

    let from = check_age(index, "age_from", entry.age_from, &bounds, issues);
    let to = check_age(index, "age_to", entry.age_to, &bounds, issues);

    let (Some(from), Some(to)) = (from, to) else {
        return None;
    };

    // Refinement after shape acceptance: both ages present and in bounds.
    if from > to {
        issues.add_at(index, "age_from", AGE_ORDER_MESSAGE);
    }

    (issues.len() == before).then(|| pax_with_band(entry, AgeBand::Bounded(AgeRange::new(from, to))))
}

fn check_age(
    index: usize,
    field: &'static str,
    value: Option<u8>,
    bounds: &Range<u8>,
    issues: &mut Issues,
) -> Option<u8> {
    let Some(age) = value else {
        issues.add_at(index, field, "required");
        return None;
    };

    if let Err(message) = bounds.validate(&age) {
        issues.add_at(index, field, message);
        return None;
    }

    Some(age)
}

fn pax_with_band(entry: &PaxEntry, band: AgeBand) -> Pax {
    Pax {
        pax_code: entry.pax_code.clone(),
        pax_type: entry.pax_type,
        free_of_charge: entry.free_of_charge,
        band,
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{issue::Issue, types::PaxType};

    fn run(entry: &PaxEntry) -> (Option<Pax>, Vec<Issue>) {
        let mut issues = Issues::new();
        let pax = validate_entry(0, entry, &mut issues);
        (pax, issues.into_vec())
    }

    #[test]
    fn all_ages_entry_ignores_age_fields() {
        let mut entry = PaxEntry::all_ages("group", PaxType::Group);
        entry.age_from = Some(200);
        entry.age_to = Some(1);

        let (pax, issues) = run(&entry);
        assert!(issues.is_empty());
        assert_eq!(pax.unwrap().band, AgeBand::AllAges);
    }

    #[test]
    fn bounded_entry_produces_structural_range() {
        let entry = PaxEntry::bounded("adult", PaxType::Person, 18, 65);

        let (pax, issues) = run(&entry);
        assert!(issues.is_empty());
        assert_eq!(pax.unwrap().band, AgeBand::Bounded(AgeRange::new(18, 65)));
    }

    #[test]
    fn missing_ages_are_required() {
        let mut entry = PaxEntry::all_ages("adult", PaxType::Person);
        entry.all_ages = false;

        let (pax, issues) = run(&entry);
        assert_eq!(pax, None);
        assert_eq!(
            issues,
            vec![
                Issue::at(0, "age_from", "required"),
                Issue::at(0, "age_to", "required"),
            ]
        );
    }

    #[test]
    fn out_of_bounds_age_reports_limits() {
        let entry = PaxEntry::bounded("adult", PaxType::Person, 18, 120);

        let (pax, issues) = run(&entry);
        assert_eq!(pax, None);
        assert_eq!(
            issues,
            vec![Issue::at(0, "age_to", "120 must be between 0 and 99")]
        );
    }

    #[test]
    fn inverted_range_reports_order_on_age_from() {
        let entry = PaxEntry::bounded("adult", PaxType::Person, 65, 18);

        let (pax, issues) = run(&entry);
        assert_eq!(pax, None);
        assert_eq!(issues, vec![Issue::at(0, "age_from", AGE_ORDER_MESSAGE)]);
    }

    #[test]
    fn equal_ages_are_well_formed() {
        let entry = PaxEntry::bounded("infant", PaxType::Person, 0, 0);

        let (pax, issues) = run(&entry);
        assert!(issues.is_empty());
        assert_eq!(pax.unwrap().band, AgeBand::Bounded(AgeRange::new(0, 0)));
    }

    #[test]
    fn issue_paths_use_the_given_index() {
        let entry = PaxEntry::bounded("adult", PaxType::Person, 65, 18);
        let mut issues = Issues::new();

        assert_eq!(validate_entry(4, &entry, &mut issues), None);
        assert_eq!(
            issues.into_vec(),
            vec![Issue::at(4, "age_from", AGE_ORDER_MESSAGE)]
        );
    }
}
