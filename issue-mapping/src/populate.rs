//! Checkbox population engine.
//!
//! Projects one intake record onto the document form's target fields. Pure
//! and deterministic: the caller may invoke it on every re-render and must
//! get an identical [`PopulationResult`] back. Data-shape problems never
//! fail the projection; they degrade to [`UnmappedReference`] warnings so
//! one malformed category cannot blank out a form a paralegal is actively
//! using.

use std::collections::{BTreeMap, BTreeSet};

use crate::registry::CategoryRegistry;
use crate::resolver;
use crate::types::{IntakeRecord, IssueReport, PopulationResult, UnmappedReference};

/// Whether a report marks its category as present on the intake.
///
/// The logical OR of three independent signals: the explicit flag, a
/// non-empty selected-item set, or non-whitespace details text. Intake data
/// is entered inconsistently (some clients only fill free text, some only
/// check boxes), so any single signal is sufficient.
///
/// This is the one shared definition of "reported"; both population and the
/// metadata summary builder call it.
pub fn is_reported(report: &IssueReport) -> bool {
    if report.flag == Some(true) {
        return true;
    }
    if !report.selected.is_empty() {
        return true;
    }
    report
        .details
        .as_deref()
        .is_some_and(|details| !details.trim().is_empty())
}

/// Resolve record entries to canonical category codes.
///
/// A record may carry the same category under several field names (the
/// canonical code and an alias); all resolved entries are kept so that any
/// one of them can supply a signal. Unresolvable field names are returned
/// as warnings.
pub(crate) fn group_by_category<'a>(
    registry: &'a CategoryRegistry,
    record: &'a IntakeRecord,
) -> (
    BTreeMap<&'a str, Vec<&'a IssueReport>>,
    Vec<UnmappedReference>,
) {
    let mut grouped: BTreeMap<&str, Vec<&IssueReport>> = BTreeMap::new();
    let mut warnings = Vec::new();

    for (field, report) in &record.issues {
        match registry.resolve_field(field) {
            Some(code) => grouped.entry(code).or_default().push(report),
            None => {
                tracing::warn!(
                    field = %field,
                    "intake field does not match any registered category"
                );
                warnings.push(UnmappedReference::Category {
                    field: field.clone(),
                });
            }
        }
    }

    (grouped, warnings)
}

/// Project an intake record onto the document form for one plaintiff
/// instance.
///
/// Every category in the registry gets a master checkbox entry, and every
/// item-bearing category gets an entry per sub-issue; the consumer applies
/// the whole map, which also clears state left over from a previous record.
/// Selected item codes absent from the registry are skipped with a warning,
/// one per unknown code.
pub fn populate(
    registry: &CategoryRegistry,
    record: &IntakeRecord,
    instance: usize,
) -> PopulationResult {
    let (grouped, warnings) = group_by_category(registry, record);
    let mut result = PopulationResult {
        warnings,
        ..Default::default()
    };

    for definition in registry.categories() {
        let reports = grouped.get(definition.code.as_str());
        let enabled = reports.is_some_and(|reports| reports.iter().any(|r| is_reported(r)));

        result
            .checkboxes
            .insert(resolver::master_identifier(definition, instance), enabled);

        if definition.has_items() {
            for item in &definition.items {
                result.checkboxes.insert(
                    resolver::item_identifier(definition, &item.code, instance),
                    false,
                );
            }

            if let Some(reports) = reports {
                let mut seen: BTreeSet<&str> = BTreeSet::new();
                for report in reports {
                    for code in &report.selected {
                        if !seen.insert(code.as_str()) {
                            continue;
                        }
                        if definition.items.iter().any(|item| item.code == *code) {
                            result.checkboxes.insert(
                                resolver::item_identifier(definition, code, instance),
                                true,
                            );
                        } else {
                            tracing::warn!(
                                category = %definition.code,
                                item = %code,
                                "selected item code is not registered"
                            );
                            result.warnings.push(UnmappedReference::Item {
                                category: definition.code.clone(),
                                item: code.clone(),
                            });
                        }
                    }
                }
            }
        }

        // Details pass through verbatim when the category is reported.
        // Whitespace-only text is "no details" here for the same reason it
        // is no signal in is_reported; the summary builder skips it too.
        if enabled {
            if let Some(reports) = reports {
                if let Some(details) = reports
                    .iter()
                    .filter_map(|report| report.details.as_deref())
                    .find(|details| !details.trim().is_empty())
                {
                    result
                        .details
                        .insert(definition.code.clone(), details.to_string());
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CategoryDefinition, CategoryItem, CategoryKind};

    fn test_registry() -> CategoryRegistry {
        CategoryRegistry::new(vec![
            CategoryDefinition::new("plumbing", "Plumbing", CategoryKind::Itemized)
                .with_alias("hasPlumbingIssues")
                .with_items(vec![
                    CategoryItem::new("Leaks", "Leaks"),
                    CategoryItem::new("CloggedDrains", "Clogged drains"),
                ])
                .with_full_metadata(),
            CategoryDefinition::new("structure", "Structural", CategoryKind::Itemized)
                .with_prefix("structural")
                .with_alias("hasStructureIssues")
                .with_items(vec![CategoryItem::new("WallCracks", "Wall cracks")])
                .with_full_metadata(),
            CategoryDefinition::new("harassment", "Harassment", CategoryKind::DirectYesNo)
                .with_alias("hasHarassmentIssues")
                .with_details(),
            CategoryDefinition::new("notices", "Legal Notices", CategoryKind::NoticeList)
                .with_alias("receivedNotices")
                .with_items(vec![
                    CategoryItem::new("3day", "3-Day Notice"),
                    CategoryItem::new("24hour", "24-Hour Notice"),
                ])
                .with_details(),
        ])
        .unwrap()
    }

    #[test]
    fn test_three_signal_or() {
        let registry = test_registry();

        // Details text alone is a sufficient signal.
        let record = IntakeRecord::new().with_issue(
            "plumbing",
            IssueReport {
                details: Some("leak".to_string()),
                ..Default::default()
            },
        );
        assert!(populate(&registry, &record, 0).is_checked("plumbing-0"));

        // No flag, no items, no details text: not reported.
        let record = IntakeRecord::new().with_issue("plumbing", IssueReport::default());
        assert!(!populate(&registry, &record, 0).is_checked("plumbing-0"));

        // Whitespace-only details do not report the category.
        let record = IntakeRecord::new().with_issue(
            "plumbing",
            IssueReport {
                details: Some("   ".to_string()),
                ..Default::default()
            },
        );
        assert!(!populate(&registry, &record, 0).is_checked("plumbing-0"));
    }

    #[test]
    fn test_explicit_false_flag_with_other_signals() {
        // The flag saying "no" does not veto the other signals.
        let registry = test_registry();
        let record = IntakeRecord::new().with_issue(
            "plumbing",
            IssueReport {
                flag: Some(false),
                selected: vec!["Leaks".to_string()],
                details: Some("leak under sink".to_string()),
                ..Default::default()
            },
        );

        let result = populate(&registry, &record, 0);
        assert!(result.is_checked("plumbing-0"));
        assert!(result.is_checked("plumbing-Leaks-0"));
        assert_eq!(result.details.get("plumbing").map(String::as_str), Some("leak under sink"));
    }

    #[test]
    fn test_alias_equivalence() {
        let registry = test_registry();
        let flagged = IssueReport {
            flag: Some(true),
            ..Default::default()
        };

        let canonical = IntakeRecord::new().with_issue("plumbing", flagged.clone());
        let aliased = IntakeRecord::new().with_issue("hasPlumbingIssues", flagged);

        assert_eq!(
            populate(&registry, &canonical, 0),
            populate(&registry, &aliased, 0)
        );
    }

    #[test]
    fn test_idempotence() {
        let registry = test_registry();
        let record = IntakeRecord::new()
            .with_issue(
                "plumbing",
                IssueReport {
                    selected: vec!["Leaks".to_string(), "Fountains".to_string()],
                    ..Default::default()
                },
            )
            .with_issue(
                "hasHarassmentIssues",
                IssueReport {
                    flag: Some(true),
                    ..Default::default()
                },
            );

        let first = populate(&registry, &record, 0);
        for _ in 0..3 {
            assert_eq!(first, populate(&registry, &record, 0));
        }
    }

    #[test]
    fn test_direct_yes_no_produces_master_only() {
        let registry = test_registry();
        let record = IntakeRecord::new().with_issue(
            "harassment",
            IssueReport {
                flag: Some(true),
                ..Default::default()
            },
        );

        let result = populate(&registry, &record, 0);
        assert!(result.is_checked("harassment-0"));
        assert!(!result
            .checkboxes
            .keys()
            .any(|id| id.starts_with("harassment-") && id != "harassment-0"));
    }

    #[test]
    fn test_irregular_prefix_in_identifiers() {
        let registry = test_registry();
        let record = IntakeRecord::new().with_issue(
            "hasStructureIssues",
            IssueReport {
                selected: vec!["WallCracks".to_string()],
                ..Default::default()
            },
        );

        let result = populate(&registry, &record, 1);
        assert!(result.is_checked("structural-1"));
        assert!(result.is_checked("structural-WallCracks-1"));
        assert!(!result.checkboxes.contains_key("structure-1"));
    }

    #[test]
    fn test_numeric_leading_notice_identifiers() {
        let registry = test_registry();
        let record = IntakeRecord::new().with_issue(
            "receivedNotices",
            IssueReport {
                selected: vec!["3day".to_string(), "24hour".to_string()],
                ..Default::default()
            },
        );

        let result = populate(&registry, &record, 4);
        assert!(result.is_checked("notices-3day-4"));
        assert!(result.is_checked("notices-24hour-4"));
    }

    #[test]
    fn test_unknown_code_isolation() {
        let registry = test_registry();
        let record = IntakeRecord::new()
            .with_issue(
                "plumbing",
                IssueReport {
                    selected: vec![
                        "Leaks".to_string(),
                        "Geysers".to_string(),
                        "CloggedDrains".to_string(),
                        "Geysers".to_string(),
                    ],
                    ..Default::default()
                },
            )
            .with_issue(
                "harassment",
                IssueReport {
                    flag: Some(true),
                    ..Default::default()
                },
            );

        let result = populate(&registry, &record, 0);

        // Valid codes in the same category still land.
        assert!(result.is_checked("plumbing-Leaks-0"));
        assert!(result.is_checked("plumbing-CloggedDrains-0"));
        // Other categories are untouched.
        assert!(result.is_checked("harassment-0"));
        // Exactly one warning for the unknown code, despite the duplicate.
        assert_eq!(
            result.warnings,
            vec![UnmappedReference::Item {
                category: "plumbing".to_string(),
                item: "Geysers".to_string(),
            }]
        );
        // No identifier was fabricated for it.
        assert!(!result.checkboxes.contains_key("plumbing-Geysers-0"));
    }

    #[test]
    fn test_unknown_field_warning() {
        let registry = test_registry();
        let record = IntakeRecord::new().with_issue(
            "hasTelepathyIssues",
            IssueReport {
                flag: Some(true),
                ..Default::default()
            },
        );

        let result = populate(&registry, &record, 0);
        assert_eq!(
            result.warnings,
            vec![UnmappedReference::Category {
                field: "hasTelepathyIssues".to_string(),
            }]
        );
        assert_eq!(result.checked_count(), 0);
    }

    #[test]
    fn test_absent_categories_emit_unchecked_entries() {
        let registry = test_registry();
        let result = populate(&registry, &IntakeRecord::new(), 0);

        // Master and item identifiers all exist, all unchecked.
        assert!(result.checkboxes.contains_key("plumbing-0"));
        assert!(result.checkboxes.contains_key("plumbing-Leaks-0"));
        assert!(result.checkboxes.contains_key("harassment-0"));
        assert_eq!(result.checked_count(), 0);
        assert!(result.details.is_empty());
    }

    #[test]
    fn test_details_copied_verbatim() {
        let registry = test_registry();
        let details = "  Leak under sink!\n\tPipe burst TWICE.  ";
        let record = IntakeRecord::new().with_issue(
            "plumbing",
            IssueReport {
                details: Some(details.to_string()),
                ..Default::default()
            },
        );

        let result = populate(&registry, &record, 0);
        assert_eq!(result.details.get("plumbing").map(String::as_str), Some(details));
    }

    #[test]
    fn test_signals_merge_across_alias_entries() {
        // Canonical and alias entries for the same category both count.
        let registry = test_registry();
        let record = IntakeRecord::new()
            .with_issue(
                "plumbing",
                IssueReport {
                    selected: vec!["Leaks".to_string()],
                    ..Default::default()
                },
            )
            .with_issue(
                "hasPlumbingIssues",
                IssueReport {
                    details: Some("leak under sink".to_string()),
                    ..Default::default()
                },
            );

        let result = populate(&registry, &record, 0);
        assert!(result.is_checked("plumbing-0"));
        assert!(result.is_checked("plumbing-Leaks-0"));
        assert_eq!(result.details.get("plumbing").map(String::as_str), Some("leak under sink"));
    }

    #[test]
    fn test_whitespace_details_skipped_in_favor_of_real_text() {
        // A whitespace-only details entry never wins over real text from
        // another entry of the same category, and the details map agrees
        // with what the summary builder shows.
        let registry = test_registry();
        let record = IntakeRecord::new()
            .with_issue(
                "hasPlumbingIssues",
                IssueReport {
                    flag: Some(true),
                    details: Some("   ".to_string()),
                    ..Default::default()
                },
            )
            .with_issue(
                "plumbing",
                IssueReport {
                    details: Some("real leak text".to_string()),
                    ..Default::default()
                },
            );

        let result = populate(&registry, &record, 0);
        assert_eq!(
            result.details.get("plumbing").map(String::as_str),
            Some("real leak text")
        );

        let summaries = crate::summary::build_summaries(&registry, &record);
        assert_eq!(summaries[0].additional_details, "real leak text");
    }

    #[test]
    fn test_whitespace_only_details_omitted_from_details_map() {
        // Flag-enabled category whose only details text is whitespace: the
        // category is reported, but nothing lands in the details map.
        let registry = test_registry();
        let record = IntakeRecord::new().with_issue(
            "plumbing",
            IssueReport {
                flag: Some(true),
                details: Some("   ".to_string()),
                ..Default::default()
            },
        );

        let result = populate(&registry, &record, 0);
        assert!(result.is_checked("plumbing-0"));
        assert!(!result.details.contains_key("plumbing"));
    }

    #[test]
    fn test_end_to_end_plumbing_scenario() {
        let registry = CategoryRegistry::with_defaults().unwrap();
        let record = IntakeRecord::new().with_issue(
            "hasPlumbingIssues",
            IssueReport {
                flag: Some(false),
                selected: vec!["Leaks".to_string()],
                details: Some("leak under sink".to_string()),
                ..Default::default()
            },
        );

        let result = populate(&registry, &record, 0);
        assert!(result.is_checked("plumbing-0"));
        assert!(result.is_checked("plumbing-Leaks-0"));
        assert_eq!(result.details.get("plumbing").map(String::as_str), Some("leak under sink"));
        assert!(!result.has_warnings());
    }
}
