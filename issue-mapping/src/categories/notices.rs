//! Legal notice list.
//!
//! Several notice codes lead with digits (`3day`, `24hour`). Those codes
//! are data, not symbol names: they flow into target-field identifiers
//! byte-for-byte, exactly as the consuming form expects them.

use super::item;
use crate::types::{CategoryDefinition, CategoryKind};

/// The legal notices category.
pub fn definitions() -> Vec<CategoryDefinition> {
    vec![CategoryDefinition::new(
        "notices",
        "Legal Notices",
        CategoryKind::NoticeList,
    )
    .with_alias("hasNoticeIssues")
    .with_alias("receivedNotices")
    .with_items(vec![
        item("3day", "3-Day Notice to Pay or Quit"),
        item("24hour", "24-Hour Notice of Entry"),
        item("30day", "30-Day Notice to Vacate"),
        item("60day", "60-Day Notice to Vacate"),
        item("90day", "90-Day Notice to Vacate"),
        item("NoticeToQuit", "Notice to Quit"),
        item("RentIncrease", "Rent Increase Notice"),
        item("UnlawfulDetainer", "Unlawful Detainer"),
    ])
    .with_details()
    .with_date_fields()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_group() {
        let definitions = definitions();
        assert_eq!(definitions.len(), 1);

        let notices = &definitions[0];
        assert_eq!(notices.kind, CategoryKind::NoticeList);
        assert_eq!(notices.items.len(), 8);
    }

    #[test]
    fn test_numeric_leading_codes_preserved() {
        let notices = definitions().pop().unwrap();
        let codes: Vec<&str> = notices.items.iter().map(|i| i.code.as_str()).collect();
        assert!(codes.contains(&"3day"));
        assert!(codes.contains(&"24hour"));
    }
}
