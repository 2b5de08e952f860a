//! Government entity contact list.
//!
//! A fixed enumerable list of agencies a client may have contacted about
//! their housing issues. Details and a first-contact date are meaningful;
//! severity and repair history are not.

use super::item;
use crate::types::{CategoryDefinition, CategoryKind};

/// The government contacts category.
pub fn definitions() -> Vec<CategoryDefinition> {
    vec![CategoryDefinition::new(
        "government",
        "Government Contacts",
        CategoryKind::EntityList,
    )
    .with_alias("hasGovernmentContacts")
    .with_alias("contactedGovernment")
    .with_items(vec![
        item("HealthDepartment", "Health Department"),
        item("CodeEnforcement", "Code Enforcement"),
        item("BuildingAndSafety", "Building and Safety"),
        item("HousingAuthority", "Housing Authority"),
        item("FireDepartment", "Fire Department"),
        item("CityCouncil", "City Council"),
        item("Hud", "HUD"),
        item("RentBoard", "Rent Board"),
    ])
    .with_details()
    .with_date_fields()]
}
