//! Projection settings for building an index.
//!
//! The index itself has no tunables; what varies between feeds is the hub
//! the planar frame is centred on and the earth radius used to measure it.

use crate::compute::validation::validate_lat_lon;
use crate::error::{IndexError, Result};
use serde::{Deserialize, Serialize};

/// Latitude/longitude of the hub that projects to the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReferencePoint {
    pub lat: f64,
    pub lon: f64,
}

impl ReferencePoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Wisconsin State Capitol, the hub of the Madison Metro feed.
    pub const fn madison_capitol() -> Self {
        Self::new(43.074683, -89.384261)
    }
}

impl Default for ReferencePoint {
    fn default() -> Self {
        Self::madison_capitol()
    }
}

/// Index configuration
///
/// # Example
///
/// ```rust
/// use transit_index::Config;
///
/// let config = Config::from_json(r#"{
///     "reference": { "lat": 40.7128, "lon": -74.0060 }
/// }"#).unwrap();
/// assert_eq!(config.earth_radius_miles, 3956.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "Config::default_earth_radius_miles")]
    pub earth_radius_miles: f64,

    #[serde(default)]
    pub reference: ReferencePoint,
}

impl Config {
    const fn default_earth_radius_miles() -> f64 {
        3956.0
    }

    pub fn with_reference(mut self, lat: f64, lon: f64) -> Self {
        self.reference = ReferencePoint::new(lat, lon);
        self
    }

    pub fn with_earth_radius_miles(mut self, radius: f64) -> Self {
        self.earth_radius_miles = radius;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_lat_lon(self.reference.lat, self.reference.lon)
            .map_err(|e| IndexError::InvalidConfig(format!("reference point: {}", e)))?;

        if !self.earth_radius_miles.is_finite() || self.earth_radius_miles <= 0.0 {
            return Err(IndexError::InvalidConfig(format!(
                "Earth radius must be a positive number of miles, got: {}",
                self.earth_radius_miles
            )));
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            earth_radius_miles: Self::default_earth_radius_miles(),
            reference: ReferencePoint::default(),
        }
    }
}
