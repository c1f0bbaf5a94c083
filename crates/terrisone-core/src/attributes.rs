//! Per-region descriptive attributes used by the category templates.
//!
//! All region-keyed strings live in one table with one fallback policy:
//! a region missing from the table gets the attribute's default.

use std::collections::HashMap;
use std::sync::OnceLock;

/// A descriptive attribute looked up by region name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Groundwater,
    WaterAvailability,
    ErosionRisk,
    UrbanSustainability,
    GreenSpaceAccess,
    TransportCoverage,
    SdgProgress,
}

impl Attribute {
    pub const ALL: [Attribute; 7] = [
        Attribute::Groundwater,
        Attribute::WaterAvailability,
        Attribute::ErosionRisk,
        Attribute::UrbanSustainability,
        Attribute::GreenSpaceAccess,
        Attribute::TransportCoverage,
        Attribute::SdgProgress,
    ];

    /// Value used when a region has no entry.
    pub fn fallback(&self) -> &'static str {
        match self {
            Attribute::Groundwater => "Moderate",
            Attribute::WaterAvailability => "Adequate",
            Attribute::ErosionRisk => "Medium",
            Attribute::UrbanSustainability => "Moderate",
            Attribute::GreenSpaceAccess => "Moderate",
            Attribute::TransportCoverage => "Moderate",
            Attribute::SdgProgress => "50% Complete",
        }
    }
}

/// Attribute values for one region, in [`Attribute::ALL`] order.
type Row = [&'static str; 7];

/// Region-keyed auxiliary attribute table.
#[derive(Debug, Clone)]
pub struct RegionAttributes {
    rows: HashMap<&'static str, Row>,
}

static PERU_ATTRIBUTES: OnceLock<RegionAttributes> = OnceLock::new();

impl RegionAttributes {
    /// The built-in attribute table for the Peru catalog.
    pub fn peru() -> &'static RegionAttributes {
        PERU_ATTRIBUTES.get_or_init(|| {
            #[rustfmt::skip]
            let rows: [(&'static str, Row); 9] = [
                //               groundwater  availability erosion   urban         green        transport    sdg
                ("Lima",          ["Stable",    "Limited",  "High",   "Developing", "Limited",   "Extensive", "60% Complete"]),
                ("Arequipa",      ["High",      "Adequate", "Medium", "Good",       "Good",      "Good",      "75% Complete"]),
                ("Cusco",         ["Moderate",  "Seasonal", "High",   "Moderate",   "Moderate",  "Moderate",  "55% Complete"]),
                ("Loreto",        ["Very High", "Abundant", "Low",    "Poor",       "Excellent", "Limited",   "40% Complete"]),
                ("Madre de Dios", ["High",      "Abundant", "Low",    "Poor",       "Excellent", "Limited",   "35% Complete"]),
                ("Piura",         ["Low",       "Limited",  "High",   "Developing", "Limited",   "Moderate",  "50% Complete"]),
                ("La Libertad",   ["Moderate",  "Adequate", "Medium", "Good",       "Good",      "Good",      "70% Complete"]),
                ("Amazonas",      ["Very High", "Abundant", "Low",    "Poor",       "Excellent", "Limited",   "45% Complete"]),
                ("Puno",          ["High",      "Adequate", "Medium", "Moderate",   "Good",      "Moderate",  "65% Complete"]),
            ];
            RegionAttributes {
                rows: rows.into_iter().collect(),
            }
        })
    }

    /// Returns the attribute for a region, or the attribute's fallback.
    pub fn get(&self, region: &str, attribute: Attribute) -> &'static str {
        match self.rows.get(region) {
            Some(row) => row[attribute as usize],
            None => {
                tracing::trace!(region, ?attribute, "No attribute entry, using fallback");
                attribute.fallback()
            }
        }
    }

    pub fn contains(&self, region: &str) -> bool {
        self.rows.contains_key(region)
    }
}

pub fn get_groundwater_level(region: &str) -> &'static str {
    RegionAttributes::peru().get(region, Attribute::Groundwater)
}

pub fn get_water_availability(region: &str) -> &'static str {
    RegionAttributes::peru().get(region, Attribute::WaterAvailability)
}

pub fn get_erosion_risk(region: &str) -> &'static str {
    RegionAttributes::peru().get(region, Attribute::ErosionRisk)
}

pub fn get_urban_sustainability(region: &str) -> &'static str {
    RegionAttributes::peru().get(region, Attribute::UrbanSustainability)
}

pub fn get_green_space_access(region: &str) -> &'static str {
    RegionAttributes::peru().get(region, Attribute::GreenSpaceAccess)
}

pub fn get_transport_coverage(region: &str) -> &'static str {
    RegionAttributes::peru().get(region, Attribute::TransportCoverage)
}

pub fn get_sdg_progress(region: &str) -> &'static str {
    RegionAttributes::peru().get(region, Attribute::SdgProgress)
}

// Region-independent descriptors.
pub const TEMPERATURE_TREND: &str = "+1.2°C since 1980";
pub const PRECIPITATION_PATTERN: &str = "Decreasing trend in dry season";
pub const WEATHER_RISK: &str = "Moderate risk of extreme events";
pub const CLIMATE_IMPACT: &str = "Significant impact on agriculture";
pub const OZONE_HEALTH: &str = "Stable with seasonal variations";
pub const UV_LEVEL: &str = "High due to altitude and latitude";
pub const ATMOSPHERIC_STABILITY: &str = "Generally stable with seasonal variations";
pub const SATELLITE_COVERAGE: &str = "Excellent (multiple daily passes)";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RegionCatalog;

    #[test]
    fn test_groundwater_fallback() {
        assert_eq!(get_groundwater_level("Nonexistent"), "Moderate");
        assert_eq!(get_groundwater_level("Loreto"), "Very High");
    }

    #[test]
    fn test_every_attribute_falls_back() {
        let table = RegionAttributes::peru();
        for attribute in Attribute::ALL {
            assert_eq!(table.get("Atlantis", attribute), attribute.fallback());
        }
        assert_eq!(get_sdg_progress("Atlantis"), "50% Complete");
        assert_eq!(get_water_availability("Atlantis"), "Adequate");
    }

    #[test]
    fn test_table_covers_catalog() {
        let table = RegionAttributes::peru();
        for region in RegionCatalog::peru().iter() {
            assert!(table.contains(&region.name), "missing {}", region.name);
        }
    }

    #[test]
    fn test_row_lookup() {
        assert_eq!(get_transport_coverage("Lima"), "Extensive");
        assert_eq!(get_green_space_access("Piura"), "Limited");
        assert_eq!(get_erosion_risk("Cusco"), "High");
        assert_eq!(get_urban_sustainability("La Libertad"), "Good");
    }
}
