//! Region records and the fixed region catalog.

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Ordinal risk classification driving marker color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// All risk levels in ascending order.
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    /// Marker color for this risk level.
    ///
    /// The palette is fixed across the overview and detail maps.
    pub fn marker_color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "#27ae60",
            RiskLevel::Medium => "#f39c12",
            RiskLevel::High => "#e74c3c",
            RiskLevel::Critical => "#c0392b",
        }
    }

    /// Lowercase key, as used in CSS classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

/// Uppercase label, as shown in marker popups.
impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_uppercase())
    }
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A region with fixed coordinates and environmental indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Unique name within the catalog.
    pub name: String,
    /// Air quality index, 0-500.
    pub air_quality: u16,
    pub water_quality: String,
    /// Annual forest loss, percent.
    pub deforestation_rate: u8,
    pub health_impact: String,
    pub risk_level: RiskLevel,
    pub coordinates: Coordinates,
}

impl Region {
    fn new(
        name: &str,
        air_quality: u16,
        water_quality: &str,
        deforestation_rate: u8,
        health_impact: &str,
        risk_level: RiskLevel,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            name: name.to_string(),
            air_quality,
            water_quality: water_quality.to_string(),
            deforestation_rate,
            health_impact: health_impact.to_string(),
            risk_level,
            coordinates,
        }
    }
}

/// Immutable table of regions, keyed by name.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionCatalog {
    regions: Vec<Region>,
}

static PERU: OnceLock<RegionCatalog> = OnceLock::new();

impl RegionCatalog {
    /// Creates a catalog from a list of regions.
    ///
    /// Later duplicates of a name are dropped so lookups stay unambiguous.
    pub fn new(regions: Vec<Region>) -> Self {
        let mut unique: Vec<Region> = Vec::with_capacity(regions.len());
        for region in regions {
            if unique.iter().any(|r| r.name == region.name) {
                tracing::warn!(region = %region.name, "Duplicate region dropped from catalog");
                continue;
            }
            unique.push(region);
        }
        Self { regions: unique }
    }

    /// The built-in catalog of Peruvian departments.
    pub fn peru() -> &'static RegionCatalog {
        PERU.get_or_init(|| RegionCatalog::new(peru_departments()))
    }

    /// Looks up a region by exact name.
    pub fn get(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.regions.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

fn peru_departments() -> Vec<Region> {
    use RiskLevel::*;

    vec![
        Region::new(
            "Lima",
            85,
            "Moderate",
            12,
            "Medium - Respiratory issues common in urban areas",
            Medium,
            Coordinates::new(-12.0464, -77.0428),
        ),
        Region::new(
            "Arequipa",
            65,
            "Good - Minimal contamination",
            8,
            "Low - Few environmental health concerns",
            Low,
            Coordinates::new(-16.4090, -71.5375),
        ),
        Region::new(
            "Cusco",
            75,
            "Moderate - Some agricultural runoff",
            15,
            "Medium - Seasonal air quality issues from tourism",
            Medium,
            Coordinates::new(-13.5320, -71.9675),
        ),
        Region::new(
            "Loreto",
            45,
            "Poor - Mining contamination in rivers",
            25,
            "High - Waterborne diseases prevalent",
            High,
            Coordinates::new(-3.7491, -73.2530),
        ),
        Region::new(
            "Madre de Dios",
            40,
            "Poor - Heavy metal contamination from mining",
            35,
            "Critical - Mercury exposure affecting communities",
            Critical,
            Coordinates::new(-12.6, -70.1),
        ),
        Region::new(
            "Piura",
            70,
            "Moderate - Industrial pollution in coastal areas",
            18,
            "Medium - Water scarcity during dry seasons",
            Medium,
            Coordinates::new(-5.1945, -80.6328),
        ),
        Region::new(
            "La Libertad",
            68,
            "Good - Well maintained water infrastructure",
            10,
            "Low - Good environmental conditions",
            Low,
            Coordinates::new(-8.1092, -79.0215),
        ),
        Region::new(
            "Amazonas",
            55,
            "Moderate - Deforestation runoff affecting rivers",
            22,
            "High - Loss of biodiversity affecting traditional medicine",
            High,
            Coordinates::new(-5.0703, -78.1583),
        ),
        Region::new(
            "Puno",
            72,
            "Good - Clean mountain water sources",
            9,
            "Low - Clean high-altitude environment",
            Low,
            Coordinates::new(-15.8402, -70.0219),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peru_catalog_contents() {
        let catalog = RegionCatalog::peru();
        assert_eq!(catalog.len(), 9);
        assert!(catalog.get("Madre de Dios").is_some());
        assert!(catalog.get("lima").is_none());

        let lima = catalog.get("Lima").unwrap();
        assert_eq!(lima.air_quality, 85);
        assert_eq!(lima.risk_level, RiskLevel::Medium);
        assert_eq!(lima.coordinates, Coordinates::new(-12.0464, -77.0428));
    }

    #[test]
    fn test_names_in_catalog_order() {
        let names = RegionCatalog::peru().names();
        assert_eq!(names.len(), 9);
        assert_eq!(names[0], "Lima");
        assert_eq!(names[4], "Madre de Dios");
        assert_eq!(names[8], "Puno");
    }

    #[test]
    fn test_duplicate_names_dropped() {
        let first = RegionCatalog::peru().get("Puno").unwrap().clone();
        let mut second = first.clone();
        second.air_quality = 300;

        let catalog = RegionCatalog::new(vec![first, second]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Puno").unwrap().air_quality, 72);
    }

    #[test]
    fn test_marker_palette() {
        let colors: Vec<_> = RiskLevel::ALL.iter().map(|r| r.marker_color()).collect();
        assert_eq!(colors, vec!["#27ae60", "#f39c12", "#e74c3c", "#c0392b"]);
    }

    #[test]
    fn test_risk_level_serde() {
        let json = serde_json::to_string(&RiskLevel::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
        assert_eq!(RiskLevel::Critical.to_string(), "CRITICAL");
    }
}
