//! Vehicle profiles and catalog loading.
//!
//! A profile maps a vehicle kind to its average travel speed. The built-in
//! catalog covers cars, bikes and buses; alternative catalogs load from CSV
//! files with `name` and `speed_kmh` columns.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::network::{field, map_headers};

/// Built-in vehicle kinds and their average speeds (km/h).
const DEFAULT_PROFILES: &[(&str, f64)] = &[("Car", 60.0), ("Bike", 50.0), ("Bus", 40.0)];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    pub name: String,
    /// Average travel speed in km/h.
    pub speed_kmh: f64,
}

impl VehicleProfile {
    pub fn new(name: impl Into<String>, speed_kmh: f64) -> Result<Self> {
        let profile = Self {
            name: name.into().trim().to_string(),
            speed_kmh,
        };
        profile.validate()?;
        Ok(profile)
    }

    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::VehicleData {
                message: "vehicle name must not be empty".to_string(),
            });
        }
        if !self.speed_kmh.is_finite() || self.speed_kmh <= 0.0 {
            return Err(Error::VehicleData {
                message: format!(
                    "speed_kmh for '{}' must be a finite positive number",
                    self.name
                ),
            });
        }
        Ok(())
    }

    /// Hours needed to cover `distance_km` at this profile's speed.
    pub fn travel_hours(&self, distance_km: f64) -> f64 {
        distance_km / self.speed_kmh
    }
}

/// Collection of vehicle profiles, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct VehicleCatalog {
    profiles: Vec<VehicleProfile>,
    index: HashMap<String, usize>,
    source: Option<PathBuf>,
}

impl VehicleCatalog {
    /// Catalog with the built-in Car/Bike/Bus profiles.
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        for &(name, speed_kmh) in DEFAULT_PROFILES {
            catalog.index.insert(normalize_name(name), catalog.profiles.len());
            catalog.profiles.push(VehicleProfile {
                name: name.to_string(),
                speed_kmh,
            });
        }
        catalog
    }

    /// Load a vehicle catalog from a CSV file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        info!(
            path = %path.display(),
            vehicles = catalog.len(),
            "loaded vehicle catalog"
        );
        Ok(catalog)
    }

    /// Load a vehicle catalog from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| Error::VehicleData {
                message: format!("failed to read vehicle headers: {err}"),
            })?
            .clone();

        let synonyms: &[(&str, &[&str])] = &[
            ("name", &["name", "vehicle", "kind", "vehicle_kind"]),
            (
                "speed_kmh",
                &["speed_kmh", "speed", "avg_speed_kmh", "average_speed"],
            ),
        ];
        let index_map = map_headers(&headers, synonyms);

        let missing: Vec<&str> = ["name", "speed_kmh"]
            .into_iter()
            .filter(|c| !index_map.contains_key(c))
            .collect();
        if !missing.is_empty() {
            return Err(Error::VehicleData {
                message: format!(
                    "vehicle csv missing required columns: {}. Available: {}",
                    missing.join(", "),
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            });
        }

        let mut catalog = Self::default();
        for (offset, result) in csv_reader.records().enumerate() {
            let row = offset + 2;
            let record = result.map_err(|e| Error::VehicleData {
                message: e.to_string(),
            })?;

            let name = field(&record, &index_map, "name").unwrap_or_default();
            let speed_kmh: f64 = field(&record, &index_map, "speed_kmh")
                .ok_or_else(|| Error::VehicleData {
                    message: format!("missing speed_kmh for vehicle '{name}' at row {row}"),
                })?
                .parse()
                .map_err(|e| Error::VehicleData {
                    message: format!("invalid speed_kmh for vehicle '{name}' at row {row}: {e}"),
                })?;

            let profile = VehicleProfile::new(name, speed_kmh)?;
            let key = normalize_name(&profile.name);
            if catalog.index.contains_key(&key) {
                return Err(Error::DuplicateVehicle { name: key });
            }
            catalog.index.insert(key, catalog.profiles.len());
            catalog.profiles.push(profile);
        }

        if catalog.profiles.is_empty() {
            return Err(Error::VehicleData {
                message: "vehicle csv contains no profiles".to_string(),
            });
        }

        Ok(catalog)
    }

    /// Get a profile by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&VehicleProfile> {
        self.index
            .get(&normalize_name(name))
            .map(|&i| &self.profiles[i])
    }

    /// Like [`get`](Self::get), but a miss becomes [`Error::UnsupportedVehicle`].
    pub fn lookup(&self, name: &str) -> Result<&VehicleProfile> {
        self.get(name).ok_or_else(|| Error::UnsupportedVehicle {
            name: name.trim().to_string(),
            suggestions: self.fuzzy_vehicle_matches(name, 3),
        })
    }

    fn fuzzy_vehicle_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = normalize_name(name);
        let mut scored: Vec<(f64, &str)> = self
            .profiles
            .iter()
            .map(|p| (strsim::jaro_winkler(&needle, &normalize_name(&p.name)), p.name.as_str()))
            .filter(|(score, _)| *score >= 0.8)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, n)| n.to_string())
            .collect()
    }

    /// Profiles in catalog order.
    pub fn profiles(&self) -> &[VehicleProfile] {
        &self.profiles
    }

    pub fn vehicle_names(&self) -> Vec<String> {
        self.profiles.iter().map(|p| p.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Get the source path if the catalog was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Normalize a vehicle name for case-insensitive lookup.
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_matches_reference_speeds() {
        let catalog = VehicleCatalog::builtin();
        assert_eq!(catalog.vehicle_names(), vec!["Car", "Bike", "Bus"]);
        assert_eq!(catalog.get("car").unwrap().speed_kmh, 60.0);
        assert_eq!(catalog.get("BIKE").unwrap().speed_kmh, 50.0);
        assert_eq!(catalog.get(" Bus ").unwrap().speed_kmh, 40.0);
    }

    #[test]
    fn unknown_vehicle_is_unsupported() {
        let catalog = VehicleCatalog::builtin();
        match catalog.lookup("Train") {
            Err(Error::UnsupportedVehicle { name, .. }) => assert_eq!(name, "Train"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn near_miss_vehicle_gets_suggestion() {
        let catalog = VehicleCatalog::builtin();
        let err = catalog.lookup("Cars").expect_err("unsupported");
        assert!(err.to_string().contains("Did you mean 'Car'?"), "got {err}");
    }

    #[test]
    fn travel_hours_divides_by_speed() {
        let profile = VehicleProfile::new("Truck", 80.0).unwrap();
        assert_eq!(profile.travel_hours(200.0), 2.5);
    }
}
