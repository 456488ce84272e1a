use crate::{issue::Issue, types::PaxEntry};
use std::collections::BTreeMap;

/// Reserved report key for issues that address the list as a whole.
pub const PAX_LIST_KEY: &str = "pax_list";

/// Field bucket used under [`PAX_LIST_KEY`] for whole-list messages.
const ROOT_ERRORS_FIELD: &str = "errors";

/// Messages per field name, in emission order.
pub type FieldIssues = BTreeMap<String, Vec<String>>;

///
/// CodeReport
///
/// Issues re-keyed by `pax_code` instead of array position, for UI rows
/// that attach error state by business code. BTreeMap keeps iteration
/// deterministic, so identical input renders identical reports.
///

pub type CodeReport = BTreeMap<String, FieldIssues>;

///
/// map_issues_to_codes
///
/// Two-pass transform: whole-list issues collect under the reserved
/// `pax_list` key first, then index-scoped issues are walked against the
/// original list and re-keyed by the `pax_code` of the entry at that
/// index. Returns `None` when there are no issues at all, which is
/// distinct from "validated but nothing to report".
///

#[must_use]
pub fn map_issues_to_codes(issues: &[Issue], list: &[PaxEntry]) -> Option<CodeReport> {
    if issues.is_empty() {
        return None;
    }

    let mut report = CodeReport::new();

    for issue in issues.iter().filter(|issue| issue.is_root()) {
        report
            .entry(PAX_LIST_KEY.to_string())
            .or_default()
            .entry(ROOT_ERRORS_FIELD.to_string())
            .or_default()
            .push(issue.message.clone());
    }

    for issue in issues.iter().filter(|issue| !issue.is_root()) {
        let (Some(index), Some(field)) = (issue.index(), issue.field()) else {
            continue;
        };
        let Some(entry) = list.get(index) else {
            continue;
        };

        report
            .entry(entry.pax_code.clone())
            .or_default()
            .entry(field.to_string())
            .or_default()
            .push(issue.message.clone());
    }

    Some(report)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaxType;

    fn list() -> Vec<PaxEntry> {
        vec![
            PaxEntry::bounded("adult", PaxType::Person, 18, 65),
            PaxEntry::bounded("child", PaxType::Person, 16, 25),
        ]
    }

    #[test]
    fn no_issues_is_none_not_empty() {
        assert_eq!(map_issues_to_codes(&[], &list()), None);
    }

    #[test]
    fn root_issues_collect_under_reserved_key() {
        let report = map_issues_to_codes(&[Issue::root("required")], &[]).unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(report["pax_list"]["errors"], vec!["required"]);
    }

    #[test]
    fn indexed_issues_re_key_by_pax_code() {
        let issues = vec![
            Issue::at(0, "age_from", "overlaps with \"child\""),
            Issue::at(1, "age_to", "overlaps with \"adult\""),
            Issue::root("overlap"),
        ];

        let report = map_issues_to_codes(&issues, &list()).unwrap();

        assert_eq!(report["adult"]["age_from"], vec!["overlaps with \"child\""]);
        assert_eq!(report["child"]["age_to"], vec!["overlaps with \"adult\""]);
        assert_eq!(report["pax_list"]["errors"], vec!["overlap"]);
    }

    #[test]
    fn messages_for_one_field_keep_emission_order() {
        let issues = vec![
            Issue::at(0, "age_from", "contains \"child\" range"),
            Issue::at(0, "age_from", "overlaps with \"child\""),
        ];

        let report = map_issues_to_codes(&issues, &list()).unwrap();

        assert_eq!(
            report["adult"]["age_from"],
            vec!["contains \"child\" range", "overlaps with \"child\""]
        );
    }

    #[test]
    fn issue_beyond_the_list_is_skipped() {
        let issues = vec![Issue::at(9, "age_from", "dangling")];

        let report = map_issues_to_codes(&issues, &list()).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn report_serializes_for_the_ui() {
        let issues = vec![
            Issue::at(1, "age_to", "overlaps with \"adult\""),
            Issue::root("overlap"),
        ];

        let report = map_issues_to_codes(&issues, &list()).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "child": { "age_to": ["overlaps with \"adult\""] },
                "pax_list": { "errors": ["overlap"] },
            })
        );
    }
}
