//! Configuration of ephemeris computations
//!
//! [`AstroConfig`] is passed explicitly to every context; there is no
//! process-wide engine or preference state. It can be read from JSON:
//!
//! ```json
//! {
//!   "engine": "Series",
//!   "default_precision": 1.0,
//!   "collect_errors": true,
//!   "frame": "Ecliptic",
//!   "expression": "Spherical",
//!   "units": ["Au", "Deg", "Deg", "AuPerDay", "DegPerDay", "DegPerDay"]
//! }
//! ```

use crate::context::engine::EphemerisEngine;
use crate::framelib::{CoordinateExpression, Frame};
use crate::units::Unit;
use crate::{Result, SolarfieldError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Which engine computes the bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EngineKind {
    /// Periodic-series theories and the built-in frame pipeline
    #[default]
    Series,
    /// An engine attached with [`AstroConfig::with_external_engine`]
    External,
}

/// Engine choice and defaults for ephemeris computations
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AstroConfig {
    pub engine: EngineKind,
    /// Precision in arcseconds used when a request gives 0
    pub default_precision: f64,
    /// Whether batch computations keep per-body computation errors
    pub collect_errors: bool,
    pub frame: Frame,
    pub expression: CoordinateExpression,
    pub units: Vec<Unit>,
    #[serde(skip)]
    external: Option<Arc<dyn EphemerisEngine>>,
}

impl Default for AstroConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::Series,
            default_precision: 0.0,
            collect_errors: false,
            frame: Frame::Ecliptic,
            expression: CoordinateExpression::Spherical,
            units: super::DEFAULT_SPHERICAL_UNITS.to_vec(),
            external: None,
        }
    }
}

impl fmt::Debug for AstroConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AstroConfig")
            .field("engine", &self.engine)
            .field("default_precision", &self.default_precision)
            .field("collect_errors", &self.collect_errors)
            .field("frame", &self.frame)
            .field("expression", &self.expression)
            .field("units", &self.units)
            .field("external", &self.external.as_ref().map(|e| e.name()))
            .finish()
    }
}

impl AstroConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Attaches an external engine and selects it
    pub fn with_external_engine(mut self, engine: Arc<dyn EphemerisEngine>) -> Self {
        self.external = Some(engine);
        self.engine = EngineKind::External;
        self
    }

    /// The external engine, required when [`EngineKind::External`] is selected
    pub fn external_engine(&self) -> Result<&Arc<dyn EphemerisEngine>> {
        self.external.as_ref().ok_or_else(|| {
            SolarfieldError::Configuration(
                "external engine selected but none is attached".to_string(),
            )
        })
    }

    /// Checks that the selected engine can run
    pub fn validate(&self) -> Result<()> {
        if !(self.default_precision >= 0.0) {
            return Err(SolarfieldError::Configuration(format!(
                "default precision must be a non-negative number, got {}",
                self.default_precision
            )));
        }
        if self.engine == EngineKind::External {
            self.external_engine()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::engine::SeriesEngine;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_is_series() {
        let config = AstroConfig::default();
        assert_eq!(config.engine, EngineKind::Series);
        assert!(config.validate().is_ok());
        assert_eq!(config.units.len(), 6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = AstroConfig::from_json_str(r#"{"default_precision": 2.5}"#).unwrap();
        assert_eq!(config.default_precision, 2.5);
        assert_eq!(config.frame, Frame::Ecliptic);
        assert!(!config.collect_errors);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"collect_errors": true, "frame": "Equatorial", "expression": "Cartesian",
                "units": ["Km", "Km", "Km"]}}"#
        )
        .unwrap();
        let config = AstroConfig::load(file.path()).unwrap();
        assert!(config.collect_errors);
        assert_eq!(config.frame, Frame::Equatorial);
        assert_eq!(config.expression, CoordinateExpression::Cartesian);
        assert_eq!(config.units, vec![Unit::Km; 3]);
    }

    #[test]
    fn test_bad_json_and_missing_file() {
        assert!(matches!(
            AstroConfig::from_json_str("{not json"),
            Err(SolarfieldError::ConfigParse(_))
        ));
        assert!(matches!(
            AstroConfig::load("/definitely/not/here.json"),
            Err(SolarfieldError::IoError(_))
        ));
    }

    #[test]
    fn test_external_without_engine_is_rejected() {
        let config = AstroConfig::from_json_str(r#"{"engine": "External"}"#).unwrap();
        assert!(matches!(
            config.validate(),
            Err(SolarfieldError::Configuration(_))
        ));

        let config = AstroConfig::default().with_external_engine(Arc::new(SeriesEngine));
        assert!(config.validate().is_ok());
        assert!(format!("{:?}", config).contains("series"));
    }

    #[test]
    fn test_json_roundtrip_skips_engine_instance() {
        let config = AstroConfig::default().with_external_engine(Arc::new(SeriesEngine));
        let json = config.to_json_string().unwrap();
        let back = AstroConfig::from_json_str(&json).unwrap();
        assert_eq!(back.engine, EngineKind::External);
        assert!(back.external_engine().is_err());
    }
}
