//! Category templates: pure functions turning a region into a report.
//!
//! Each template classifies numeric indicators with fixed thresholds and
//! pulls descriptive strings from [`RegionAttributes`]. Templates take the
//! region explicitly and capture nothing, so a report can be recomputed at
//! any time and always comes out the same.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::attributes::*;
use crate::error::CategoryParseError;
use crate::region::Region;

/// One analytical lens applied to a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryKey {
    Air,
    Water,
    Vegetation,
    Climate,
    Atmosphere,
    SdgCities,
}

impl CategoryKey {
    pub const ALL: [CategoryKey; 6] = [
        CategoryKey::Air,
        CategoryKey::Water,
        CategoryKey::Vegetation,
        CategoryKey::Climate,
        CategoryKey::Atmosphere,
        CategoryKey::SdgCities,
    ];

    /// Wire key for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Air => "air",
            CategoryKey::Water => "water",
            CategoryKey::Vegetation => "vegetation",
            CategoryKey::Climate => "climate",
            CategoryKey::Atmosphere => "atmosphere",
            CategoryKey::SdgCities => "sdg-cities",
        }
    }

    /// Button label shown in the region panel.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryKey::Air => "Air Quality",
            CategoryKey::Water => "Water Resources",
            CategoryKey::Vegetation => "Vegetation & Soil",
            CategoryKey::Climate => "Climate",
            CategoryKey::Atmosphere => "Atmosphere",
            CategoryKey::SdgCities => "SDG 11 Cities",
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKey {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "air" => Ok(CategoryKey::Air),
            "water" => Ok(CategoryKey::Water),
            "vegetation" => Ok(CategoryKey::Vegetation),
            "climate" => Ok(CategoryKey::Climate),
            "atmosphere" => Ok(CategoryKey::Atmosphere),
            "sdg-cities" | "ods11" => Ok(CategoryKey::SdgCities),
            other => Err(CategoryParseError(other.to_string())),
        }
    }
}

/// Three-step classification for a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }
}

/// A named metric value with its classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    pub value: String,
    pub level: Level,
}

impl Metric {
    fn new(name: &str, value: impl Into<String>, level: Level) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            level,
        }
    }
}

/// Derived category view for one region. Never stored beyond the open panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryReport {
    pub title: String,
    pub description: String,
    pub data_sources: Vec<String>,
    pub metrics: Vec<Metric>,
    pub recommendations: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Classification
// ============================================================================

/// Air quality level: `<=50` low, `<=100` medium, else high.
pub fn air_quality_level(air_quality: u16) -> Level {
    if air_quality <= 50 {
        Level::Low
    } else if air_quality <= 100 {
        Level::Medium
    } else {
        Level::High
    }
}

/// AQI descriptor for an air quality index.
pub fn aqi_label(air_quality: u16) -> &'static str {
    if air_quality <= 50 {
        "Good"
    } else if air_quality <= 100 {
        "Moderate"
    } else if air_quality <= 150 {
        "Unhealthy for Sensitive Groups"
    } else {
        "Unhealthy"
    }
}

/// SO2 concentration band for an air quality index.
pub fn so2_band(air_quality: u16) -> &'static str {
    match air_quality_level(air_quality) {
        Level::Low => "Low (0-35 ppb)",
        Level::Medium => "Moderate (36-75 ppb)",
        Level::High => "High (>75 ppb)",
    }
}

/// CO concentration band for an air quality index.
pub fn co_band(air_quality: u16) -> &'static str {
    match air_quality_level(air_quality) {
        Level::Low => "Low (0-4.4 ppm)",
        Level::Medium => "Moderate (4.5-9.4 ppm)",
        Level::High => "High (>9.4 ppm)",
    }
}

/// Classifies free-text health impact by its leading severity word.
pub fn health_impact_level(health_impact: &str) -> Level {
    if health_impact.contains("Low") {
        Level::Low
    } else if health_impact.contains("Medium") {
        Level::Medium
    } else if health_impact.contains("High") || health_impact.contains("Critical") {
        Level::High
    } else {
        Level::Medium
    }
}

pub fn contamination_risk(water_quality: &str) -> &'static str {
    if water_quality.contains("Good") {
        "Low"
    } else if water_quality.contains("Moderate") {
        "Medium"
    } else {
        "High"
    }
}

pub fn vegetation_health(deforestation_rate: u8) -> &'static str {
    match deforestation_rate {
        0..=10 => "Excellent",
        11..=20 => "Good",
        21..=30 => "Fair",
        _ => "Poor",
    }
}

pub fn carbon_storage(deforestation_rate: u8) -> &'static str {
    match deforestation_rate {
        0..=10 => "High (>100 tons/ha)",
        11..=20 => "Medium (50-100 tons/ha)",
        21..=30 => "Low (20-50 tons/ha)",
        _ => "Very Low (<20 tons/ha)",
    }
}

// ============================================================================
// Templates
// ============================================================================

/// A category template.
pub type Template = fn(&Region) -> CategoryReport;

fn air_report(region: &Region) -> CategoryReport {
    let aqi = region.air_quality;
    CategoryReport {
        title: format!("Air Quality Analysis - {}", region.name),
        description: format!(
            "Indicator scores for the selected region {} using NASA satellite data",
            region.name
        ),
        data_sources: strings(&[
            "MODIS Aerosol Optical Depth",
            "CALIPSO Lidar Measurements",
            "TEMPO Tropospheric Emissions",
            "OMI Nitrogen Dioxide Levels",
        ]),
        metrics: vec![
            Metric::new(
                "Tropospheric ozone(O3)",
                format!("{aqi} μg/m³"),
                air_quality_level(aqi),
            ),
            Metric::new("Sulfur dioxide (SO2)", aqi_label(aqi), air_quality_level(aqi)),
            Metric::new("Nitrogen dioxide (NO2)", aqi_label(aqi), air_quality_level(aqi)),
            Metric::new(
                "Health Impact",
                region.health_impact.as_str(),
                health_impact_level(&region.health_impact),
            ),
        ],
        recommendations: strings(&[
            "Implement vehicle emission controls in urban areas",
            "Promote green spaces to improve air filtration",
            "Monitor industrial emissions regularly",
            "Develop early warning systems for poor air quality days",
            "Promote public transportation and electric vehicles",
            "Implement air quality monitoring stations across the region",
        ]),
    }
}

fn water_report(region: &Region) -> CategoryReport {
    CategoryReport {
        title: "Water Resources Analysis".to_string(),
        description: format!(
            "Assessment of water quality and availability in {} using NASA GRACE, SWOT, and Landsat data.",
            region.name
        ),
        data_sources: strings(&[
            "GRACE Water Storage",
            "SWOT Surface Water",
            "Landsat Water Quality",
            "MODIS Flood Monitoring",
        ]),
        metrics: vec![
            Metric::new("Water Quality Index", region.water_quality.as_str(), Level::Medium),
            Metric::new("Groundwater Levels", get_groundwater_level(&region.name), Level::Medium),
            Metric::new(
                "Surface Water Availability",
                get_water_availability(&region.name),
                Level::Medium,
            ),
            Metric::new(
                "Contamination Risk",
                contamination_risk(&region.water_quality),
                Level::Medium,
            ),
        ],
        recommendations: strings(&[
            "Implement watershed protection programs",
            "Upgrade water treatment facilities",
            "Monitor agricultural runoff",
            "Develop drought contingency plans",
        ]),
    }
}

fn vegetation_report(region: &Region) -> CategoryReport {
    let rate = region.deforestation_rate;
    CategoryReport {
        title: "Vegetation & Soil Analysis".to_string(),
        description: format!(
            "Comprehensive analysis of forest cover, soil health, and vegetation dynamics in {}.",
            region.name
        ),
        data_sources: strings(&[
            "Landsat Vegetation Index",
            "MODIS Fire Detection",
            "GEDI Forest Structure",
            "SMAP Soil Moisture",
        ]),
        metrics: vec![
            Metric::new("Deforestation Rate", format!("{rate}% annual loss"), Level::Medium),
            Metric::new("Vegetation Health", vegetation_health(rate), Level::Medium),
            Metric::new("Soil Erosion Risk", get_erosion_risk(&region.name), Level::Medium),
            Metric::new("Carbon Storage", carbon_storage(rate), Level::Medium),
        ],
        recommendations: strings(&[
            "Implement reforestation programs",
            "Promote sustainable agriculture",
            "Protect biodiversity hotspots",
            "Monitor illegal logging activities",
        ]),
    }
}

fn climate_report(region: &Region) -> CategoryReport {
    CategoryReport {
        title: "Climate & Meteorology".to_string(),
        description: format!(
            "Climate pattern analysis and meteorological monitoring for {} using NASA satellite systems.",
            region.name
        ),
        data_sources: strings(&[
            "TRMM Precipitation",
            "CERES Radiation Budget",
            "AIRS Temperature Profiles",
            "GPM Global Precipitation",
        ]),
        metrics: vec![
            Metric::new("Temperature Trend", TEMPERATURE_TREND, Level::Medium),
            Metric::new("Precipitation Patterns", PRECIPITATION_PATTERN, Level::Medium),
            Metric::new("Extreme Weather Risk", WEATHER_RISK, Level::Medium),
            Metric::new("Climate Change Impact", CLIMATE_IMPACT, Level::Medium),
        ],
        recommendations: strings(&[
            "Develop climate adaptation strategies",
            "Implement early warning systems",
            "Promote water conservation",
            "Plan for climate-resilient infrastructure",
        ]),
    }
}

fn atmosphere_report(region: &Region) -> CategoryReport {
    CategoryReport {
        title: "Atmosphere & Sky Monitoring".to_string(),
        description: format!(
            "Upper atmosphere analysis and space-based observations for {} using advanced NASA instruments.",
            region.name
        ),
        data_sources: strings(&[
            "SAGE III Ozone",
            "CALIPSO Cloud-Aerosol",
            "TES Tropospheric Chemistry",
            "OMPS Limb Profiler",
        ]),
        metrics: vec![
            Metric::new("Ozone Layer Health", OZONE_HEALTH, Level::Medium),
            Metric::new("UV Radiation Levels", UV_LEVEL, Level::Medium),
            Metric::new("Atmospheric Stability", ATMOSPHERIC_STABILITY, Level::Medium),
            Metric::new("Satellite Coverage", SATELLITE_COVERAGE, Level::Medium),
        ],
        recommendations: strings(&[
            "Monitor stratospheric ozone levels",
            "Track atmospheric composition changes",
            "Study aerosol impacts on climate",
            "Develop air quality forecasting models",
        ]),
    }
}

fn sdg_cities_report(region: &Region) -> CategoryReport {
    CategoryReport {
        title: "ODS 11 - Sustainable Cities & Communities".to_string(),
        description: format!(
            "Analysis of {}'s progress towards UN Sustainable Development Goal 11 using NASA urban monitoring data.",
            region.name
        ),
        data_sources: strings(&[
            "Landsat Urban Growth",
            "VIIRS Nighttime Lights",
            "SMAP Urban Heat Islands",
            "GEDI Building Density",
        ]),
        metrics: vec![
            Metric::new(
                "Urban Sustainability",
                get_urban_sustainability(&region.name),
                Level::Medium,
            ),
            Metric::new("Green Space Access", get_green_space_access(&region.name), Level::Medium),
            Metric::new(
                "Public Transport Coverage",
                get_transport_coverage(&region.name),
                Level::Medium,
            ),
            Metric::new("SDG 11 Progress", get_sdg_progress(&region.name), Level::Medium),
        ],
        recommendations: strings(&[
            "Develop sustainable urban planning",
            "Increase green infrastructure",
            "Improve public transportation",
            "Promote affordable housing",
            "Enhance disaster resilience",
        ]),
    }
}

/// Closed mapping from category key to template.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryRegistry;

impl CategoryRegistry {
    /// Returns the template for a category.
    pub fn template(key: CategoryKey) -> Template {
        match key {
            CategoryKey::Air => air_report,
            CategoryKey::Water => water_report,
            CategoryKey::Vegetation => vegetation_report,
            CategoryKey::Climate => climate_report,
            CategoryKey::Atmosphere => atmosphere_report,
            CategoryKey::SdgCities => sdg_cities_report,
        }
    }

    /// Produces the report for a category and region.
    pub fn report(key: CategoryKey, region: &Region) -> CategoryReport {
        Self::template(key)(region)
    }
}
