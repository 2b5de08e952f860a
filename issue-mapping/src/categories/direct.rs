//! Direct yes/no categories.
//!
//! These expose a single master checkbox with no sub-issues. Most support
//! free-text details only; injury additionally supports photos.

use crate::types::{CategoryDefinition, CategoryKind};

/// All direct yes/no categories, in form layout order.
pub fn definitions() -> Vec<CategoryDefinition> {
    vec![
        CategoryDefinition::new(
            "directInjuryIssues",
            "Physical Injury",
            CategoryKind::DirectYesNo,
        )
        .with_prefix("injury")
        .with_alias("hasInjury")
        .with_alias("hasInjuryIssues")
        .with_details()
        .with_photos(),
        CategoryDefinition::new("harassment", "Landlord Harassment", CategoryKind::DirectYesNo)
            .with_alias("hasHarassmentIssues")
            .with_details(),
        CategoryDefinition::new("retaliation", "Retaliation", CategoryKind::DirectYesNo)
            .with_alias("hasRetaliationIssues")
            .with_details(),
        CategoryDefinition::new("discrimination", "Discrimination", CategoryKind::DirectYesNo)
            .with_alias("hasDiscriminationIssues")
            .with_details(),
        CategoryDefinition::new("illegalEntry", "Illegal Entry", CategoryKind::DirectYesNo)
            .with_prefix("entry")
            .with_alias("hasIllegalEntryIssues")
            .with_details(),
        CategoryDefinition::new("lockout", "Unlawful Lockout", CategoryKind::DirectYesNo)
            .with_alias("hasLockoutIssues")
            .with_details(),
        CategoryDefinition::new(
            "securityDeposit",
            "Security Deposit Dispute",
            CategoryKind::DirectYesNo,
        )
        .with_prefix("deposit")
        .with_alias("hasSecurityDepositIssues")
        .with_alias("hasDepositIssues")
        .with_details(),
        CategoryDefinition::new("rentOvercharge", "Rent Overcharge", CategoryKind::DirectYesNo)
            .with_prefix("overcharge")
            .with_alias("hasRentOverchargeIssues")
            .with_details(),
        CategoryDefinition::new(
            "utilityShutoff",
            "Landlord Utility Shutoff",
            CategoryKind::DirectYesNo,
        )
        .with_prefix("shutoff")
        .with_alias("hasUtilityShutoffIssues")
        .with_details(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_group() {
        let definitions = definitions();
        assert_eq!(definitions.len(), 9);

        for def in &definitions {
            assert_eq!(def.kind, CategoryKind::DirectYesNo, "category {}", def.code);
            assert!(def.items.is_empty(), "category {}", def.code);
            assert!(def.supports_details, "category {}", def.code);
            assert!(!def.supports_severity, "category {}", def.code);
        }
    }

    #[test]
    fn test_injury_aliases() {
        let injury = definitions()
            .into_iter()
            .find(|d| d.code == "directInjuryIssues")
            .unwrap();
        assert_eq!(injury.dom_prefix.as_deref(), Some("injury"));
        assert!(injury.aliases.contains(&"hasInjury".to_string()));
        assert!(injury.aliases.contains(&"hasInjuryIssues".to_string()));
        assert!(injury.supports_photos);
    }
}
