//! Geographic locations and the gazetteer seam.

use std::collections::BTreeMap;

use kp_time::validate_utc_offset;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// An observer site. Longitude is east-positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Hours east of UTC.
    pub utc_offset: f64,
}

impl GeoLocation {
    /// Build a validated location.
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        utc_offset: f64,
    ) -> Result<Self, SearchError> {
        let loc = Self {
            name: name.into(),
            latitude,
            longitude,
            utc_offset,
        };
        loc.validate()?;
        Ok(loc)
    }

    /// Latitude in [-90, 90], longitude in [-180, 180], offset in [-14, 14].
    pub fn validate(&self) -> Result<(), SearchError> {
        if !(self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude)) {
            return Err(SearchError::InvalidInput(format!(
                "latitude {} outside [-90, 90]",
                self.latitude
            )));
        }
        if !(self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude)) {
            return Err(SearchError::InvalidInput(format!(
                "longitude {} outside [-180, 180]",
                self.longitude
            )));
        }
        validate_utc_offset(self.utc_offset)?;
        Ok(())
    }
}

/// Lookup of named locations.
pub trait LocationProvider {
    /// Location for an already normalized key.
    fn lookup(&self, key: &str) -> Option<GeoLocation>;

    /// Every key this provider answers for, sorted.
    fn keys(&self) -> Vec<String>;
}

/// Lowercase with spaces mapped to `_`.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase().replace(' ', "_")
}

/// Resolve a user-supplied key, listing the known keys on failure.
pub fn resolve_location<P: LocationProvider + ?Sized>(
    provider: &P,
    key: &str,
) -> Result<GeoLocation, SearchError> {
    provider.lookup(&normalize_key(key)).ok_or_else(|| {
        SearchError::InvalidInput(format!(
            "location `{key}` not found; available: {}",
            provider.keys().join(", ")
        ))
    })
}

const SRI_LANKA_UTC_OFFSET: f64 = 5.5;

/// Key, display name, latitude, longitude.
const SRI_LANKA: [(&str, &str, f64, f64); 25] = [
    ("colombo", "Colombo", 6.9271, 79.8612),
    ("galle", "Galle", 6.0535, 80.2210),
    ("kandy", "Kandy", 7.2906, 80.6337),
    ("jaffna", "Jaffna", 9.6615, 80.0255),
    ("trincomalee", "Trincomalee", 8.5874, 81.2152),
    ("batticaloa", "Batticaloa", 7.7310, 81.6747),
    ("negombo", "Negombo", 7.2008, 79.8358),
    ("anuradhapura", "Anuradhapura", 8.3114, 80.4037),
    ("polonnaruwa", "Polonnaruwa", 7.9403, 81.0188),
    ("matara", "Matara", 5.9549, 80.5550),
    ("kurunegala", "Kurunegala", 7.4867, 80.3647),
    ("ratnapura", "Ratnapura", 6.7056, 80.3847),
    ("badulla", "Badulla", 6.9934, 81.0550),
    ("nuwara_eliya", "Nuwara Eliya", 6.9497, 80.7891),
    ("hambantota", "Hambantota", 6.1241, 81.1185),
    ("vavuniya", "Vavuniya", 8.7542, 80.4982),
    ("ampara", "Ampara", 7.2976, 81.6720),
    ("kegalle", "Kegalle", 7.2523, 80.3456),
    ("mannar", "Mannar", 8.9810, 79.9044),
    ("kalutara", "Kalutara", 6.5854, 79.9607),
    ("puttalam", "Puttalam", 8.0362, 79.8283),
    ("chilaw", "Chilaw", 7.5758, 79.7953),
    ("matale", "Matale", 7.4675, 80.6234),
    ("kilinochchi", "Kilinochchi", 9.3803, 80.3770),
    ("mullaitivu", "Mullaitivu", 9.2671, 80.8142),
];

/// Built-in gazetteer of 25 Sri Lanka towns, all at UTC+5:30.
#[derive(Debug, Clone, Copy, Default)]
pub struct SriLankaGazetteer;

impl LocationProvider for SriLankaGazetteer {
    fn lookup(&self, key: &str) -> Option<GeoLocation> {
        SRI_LANKA
            .iter()
            .find(|(k, ..)| *k == key)
            .map(|&(_, name, latitude, longitude)| GeoLocation {
                name: name.to_string(),
                latitude,
                longitude,
                utc_offset: SRI_LANKA_UTC_OFFSET,
            })
    }

    fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = SRI_LANKA.iter().map(|(k, ..)| k.to_string()).collect();
        keys.sort();
        keys
    }
}

/// User-defined locations layered over a base provider.
///
/// Overrides win over the base for the same key.
#[derive(Debug, Clone, Default)]
pub struct LayeredGazetteer<B> {
    overrides: BTreeMap<String, GeoLocation>,
    base: B,
}

impl<B: LocationProvider> LayeredGazetteer<B> {
    pub fn new(base: B) -> Self {
        Self {
            overrides: BTreeMap::new(),
            base,
        }
    }

    /// Add or replace a location; the key is normalized.
    pub fn insert(&mut self, key: &str, location: GeoLocation) {
        self.overrides.insert(normalize_key(key), location);
    }

    pub fn with_locations<I, K>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = (K, GeoLocation)>,
        K: AsRef<str>,
    {
        for (key, loc) in locations {
            self.insert(key.as_ref(), loc);
        }
        self
    }
}

impl<B: LocationProvider> LocationProvider for LayeredGazetteer<B> {
    fn lookup(&self, key: &str) -> Option<GeoLocation> {
        self.overrides
            .get(key)
            .cloned()
            .or_else(|| self.base.lookup(key))
    }

    fn keys(&self) -> Vec<String> {
        let mut keys = self.base.keys();
        keys.extend(self.overrides.keys().cloned());
        keys.sort();
        keys.dedup();
        keys
    }
}
