//! Itemized habitability defect categories.
//!
//! These are the checkbox-heavy categories of the document form: each has a
//! master flag plus selectable sub-issues, and supports the full metadata
//! set (details, first-noticed date, severity, repair history, photos).
//!
//! DOM prefixes that differ from the category code are explicit entries
//! here, never derived from the code by string manipulation.

use super::item;
use crate::types::{CategoryDefinition, CategoryKind};

/// All itemized habitability categories, in form layout order.
pub fn definitions() -> Vec<CategoryDefinition> {
    vec![
        CategoryDefinition::new("plumbing", "Plumbing", CategoryKind::Itemized)
            .with_alias("hasPlumbingIssues")
            .with_items(vec![
                item("Leaks", "Leaks"),
                item("CloggedDrains", "Clogged drains"),
                item("LowWaterPressure", "Low water pressure"),
                item("NoHotWater", "No hot water"),
                item("SewageBackup", "Sewage backup"),
                item("RunningToilet", "Running toilet"),
                item("BrokenFixtures", "Broken fixtures"),
                item("BurstPipes", "Burst pipes"),
                item("CorrodedPipes", "Corroded pipes"),
                item("SewerOdors", "Sewer odors"),
            ])
            .with_full_metadata(),
        CategoryDefinition::new("electrical", "Electrical", CategoryKind::Itemized)
            .with_alias("hasElectricalIssues")
            .with_items(vec![
                item("ExposedWiring", "Exposed wiring"),
                item("DeadOutlets", "Dead outlets"),
                item("FlickeringLights", "Flickering lights"),
                item("SparkingOutlets", "Sparking outlets"),
                item("BrokenSwitches", "Broken switches"),
                item("OverloadedPanel", "Overloaded panel"),
                item("PowerOutages", "Power outages"),
                item("BrokenLightFixtures", "Broken light fixtures"),
                item("MissingCoverPlates", "Missing cover plates"),
            ])
            .with_full_metadata(),
        CategoryDefinition::new("structure", "Structural", CategoryKind::Itemized)
            .with_prefix("structural")
            .with_alias("hasStructureIssues")
            .with_alias("hasStructuralIssues")
            .with_items(vec![
                item("WallCracks", "Wall cracks"),
                item("SaggingCeiling", "Sagging ceiling"),
                item("UnevenFloors", "Uneven floors"),
                item("BrokenStairs", "Broken stairs"),
                item("LooseRailings", "Loose railings"),
                item("UnsafeBalcony", "Unsafe balcony"),
                item("CrumblingWalls", "Crumbling walls"),
                item("FoundationDamage", "Foundation damage"),
            ])
            .with_full_metadata(),
        CategoryDefinition::new("roofing", "Roof", CategoryKind::Itemized)
            .with_alias("hasRoofingIssues")
            .with_alias("hasRoofIssues")
            .with_items(vec![
                item("RoofLeaks", "Roof leaks"),
                item("MissingShingles", "Missing shingles"),
                item("SaggingRoof", "Sagging roof"),
                item("DamagedGutters", "Damaged gutters"),
                item("PoorDrainage", "Poor drainage"),
                item("CeilingStains", "Ceiling stains"),
            ])
            .with_full_metadata(),
        CategoryDefinition::new("hvac", "Heating & Air Conditioning", CategoryKind::Itemized)
            .with_alias("hasHvacIssues")
            .with_alias("hasHeatingIssues")
            .with_items(vec![
                item("NoHeat", "No heat"),
                item("BrokenAirConditioning", "Broken air conditioning"),
                item("FaultyThermostat", "Faulty thermostat"),
                item("BlockedVents", "Blocked vents"),
                item("NoVentilation", "No ventilation"),
                item("LeakingRadiator", "Leaking radiator"),
                item("GasSmell", "Gas smell"),
            ])
            .with_full_metadata(),
        CategoryDefinition::new("pests", "Pest Infestation", CategoryKind::Itemized)
            .with_alias("hasPestIssues")
            .with_items(vec![
                item("Cockroaches", "Cockroaches"),
                item("Rodents", "Rodents"),
                item("Bedbugs", "Bedbugs"),
                item("Termites", "Termites"),
                item("Ants", "Ants"),
                item("Fleas", "Fleas"),
                item("Spiders", "Spiders"),
                item("Silverfish", "Silverfish"),
                item("Wasps", "Wasps"),
                item("Pigeons", "Pigeons"),
            ])
            .with_full_metadata(),
        CategoryDefinition::new("mold", "Mold & Mildew", CategoryKind::Itemized)
            .with_alias("hasMoldIssues")
            .with_items(vec![
                item("BathroomMold", "Bathroom mold"),
                item("KitchenMold", "Kitchen mold"),
                item("CeilingMold", "Ceiling mold"),
                item("WallMold", "Wall mold"),
                item("VentMold", "Vent mold"),
                item("BlackMold", "Black mold"),
                item("MustySmell", "Musty smell"),
            ])
            .with_full_metadata(),
        CategoryDefinition::new("waterDamage", "Water Damage", CategoryKind::Itemized)
            .with_prefix("water")
            .with_alias("hasWaterDamageIssues")
            .with_items(vec![
                item("FloodedUnit", "Flooded unit"),
                item("StainedCeilings", "Stained ceilings"),
                item("WarpedFlooring", "Warped flooring"),
                item("DampWalls", "Damp walls"),
                item("SoakedCarpet", "Soaked carpet"),
                item("StandingWater", "Standing water"),
            ])
            .with_full_metadata(),
        CategoryDefinition::new("appliances", "Appliances", CategoryKind::Itemized)
            .with_alias("hasApplianceIssues")
            .with_items(vec![
                item("BrokenStove", "Broken stove"),
                item("BrokenOven", "Broken oven"),
                item("BrokenRefrigerator", "Broken refrigerator"),
                item("BrokenDishwasher", "Broken dishwasher"),
                item("BrokenGarbageDisposal", "Broken garbage disposal"),
                item("BrokenMicrowave", "Broken microwave"),
                item("BrokenWasher", "Broken washer"),
                item("BrokenDryer", "Broken dryer"),
            ])
            .with_full_metadata(),
        CategoryDefinition::new("windows", "Windows", CategoryKind::Itemized)
            .with_alias("hasWindowIssues")
            .with_items(vec![
                item("BrokenGlass", "Broken glass"),
                item("BrokenLocks", "Broken locks"),
                item("DraftyFrames", "Drafty frames"),
                item("StuckWindows", "Stuck windows"),
                item("BrokenSeals", "Broken seals"),
                item("MissingScreens", "Missing screens"),
            ])
            .with_full_metadata(),
        CategoryDefinition::new("doors", "Doors", CategoryKind::Itemized)
            .with_alias("hasDoorIssues")
            .with_items(vec![
                item("BrokenEntryDoor", "Broken entry door"),
                item("BrokenDeadbolt", "Broken deadbolt"),
                item("DamagedFrame", "Damaged frame"),
                item("MissingDoor", "Missing door"),
                item("BrokenScreenDoor", "Broken screen door"),
                item("GapUnderDoor", "Gap under door"),
            ])
            .with_full_metadata(),
        CategoryDefinition::new("flooring", "Flooring", CategoryKind::Itemized)
            .with_alias("hasFlooringIssues")
            .with_items(vec![
                item("TornCarpet", "Torn carpet"),
                item("CrackedTiles", "Cracked tiles"),
                item("WarpedWood", "Warped wood"),
                item("LiftingLinoleum", "Lifting linoleum"),
                item("ExposedNails", "Exposed nails"),
                item("Holes", "Holes"),
            ])
            .with_full_metadata(),
        CategoryDefinition::new("paint", "Paint & Walls", CategoryKind::Itemized)
            .with_prefix("painting")
            .with_alias("hasPaintIssues")
            .with_items(vec![
                item("PeelingPaint", "Peeling paint"),
                item("ChippedPaint", "Chipped paint"),
                item("CrackedPlaster", "Cracked plaster"),
                item("WaterStains", "Water stains"),
                item("Graffiti", "Graffiti"),
            ])
            .with_full_metadata(),
        CategoryDefinition::new("security", "Building Security", CategoryKind::Itemized)
            .with_alias("hasSecurityIssues")
            .with_items(vec![
                item("BrokenGate", "Broken gate"),
                item("BrokenIntercom", "Broken intercom"),
                item("InadequateLighting", "Inadequate lighting"),
                item("UnsecuredEntry", "Unsecured entry"),
                item("ProppedDoors", "Propped doors"),
                item("BrokenCameras", "Broken cameras"),
            ])
            .with_full_metadata(),
        CategoryDefinition::new("fireSafety", "Fire Safety", CategoryKind::Itemized)
            .with_prefix("fire")
            .with_alias("hasFireSafetyIssues")
            .with_items(vec![
                item("MissingSmokeDetector", "Missing smoke detector"),
                item(
                    "MissingCarbonMonoxideDetector",
                    "Missing carbon monoxide detector",
                ),
                item("BlockedFireExit", "Blocked fire exit"),
                item("MissingExtinguisher", "Missing extinguisher"),
                item("ExpiredExtinguisher", "Expired extinguisher"),
                item("FaultySprinklers", "Faulty sprinklers"),
            ])
            .with_full_metadata(),
        CategoryDefinition::new("commonAreas", "Common Areas", CategoryKind::Itemized)
            .with_prefix("common")
            .with_alias("hasCommonAreaIssues")
            .with_items(vec![
                item("DirtyHallways", "Dirty hallways"),
                item("BrokenElevator", "Broken elevator"),
                item("BrokenStairwellLights", "Broken stairwell lights"),
                item("BrokenLaundryRoom", "Broken laundry room"),
                item("BrokenMailboxes", "Broken mailboxes"),
                item("BrokenGym", "Broken gym"),
                item("UnusablePool", "Unusable pool"),
                item("ParkingHazards", "Parking hazards"),
            ])
            .with_full_metadata(),
        CategoryDefinition::new("trash", "Trash & Sanitation", CategoryKind::Itemized)
            .with_alias("hasTrashIssues")
            .with_items(vec![
                item("OverflowingBins", "Overflowing bins"),
                item("MissedCollection", "Missed collection"),
                item("IllegalDumping", "Illegal dumping"),
                item("NoBinsProvided", "No bins provided"),
                item("PestAttractingWaste", "Pest-attracting waste"),
            ])
            .with_full_metadata(),
        CategoryDefinition::new("utilities", "Utility Service", CategoryKind::Itemized)
            .with_alias("hasUtilityIssues")
            .with_items(vec![
                item("WaterShutoffs", "Water shutoffs"),
                item("GasShutoffs", "Gas shutoffs"),
                item("ElectricShutoffs", "Electric shutoffs"),
                item("SharedMeterBilling", "Shared meter billing"),
                item("UnpaidLandlordBills", "Unpaid landlord bills"),
            ])
            .with_full_metadata(),
        CategoryDefinition::new("hazards", "Hazardous Materials", CategoryKind::Itemized)
            .with_prefix("hazardous")
            .with_alias("hasHazardIssues")
            .with_alias("hasHazardousMaterials")
            .with_items(vec![
                item("Asbestos", "Asbestos"),
                item("LeadPaintHazard", "Lead paint hazard"),
                item("CarbonMonoxide", "Carbon monoxide"),
                item("ChemicalFumes", "Chemical fumes"),
                item("SewageExposure", "Sewage exposure"),
                item("ContaminatedWater", "Contaminated water"),
            ])
            .with_full_metadata(),
        CategoryDefinition::new("noise", "Noise & Nuisance", CategoryKind::Itemized)
            .with_alias("hasNoiseIssues")
            .with_items(vec![
                item("ConstructionNoise", "Construction noise"),
                item("NeighborDisturbances", "Neighbor disturbances"),
                item("BarkingDogs", "Barking dogs"),
                item("NightlyDisturbances", "Nightly disturbances"),
                item("LoudMechanical", "Loud mechanical equipment"),
                item("ShortTermRentals", "Short-term rentals"),
            ])
            .with_full_metadata(),
    ]
}
