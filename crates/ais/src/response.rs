//! Decoded AIS search payloads and typed accessors.

use serde::Deserialize;

use crate::client::AisError;

/// One AIS address search response.
///
/// Constructed once per query and read-only afterward. The provider signals
/// failure by replacing the feature list with a `status` object, so both
/// that and an empty list count as "no match".
#[derive(Debug, Clone, Deserialize)]
pub struct AddressLookup {
    #[serde(default)]
    pub features: Vec<Feature>,
    /// Present only on provider error payloads.
    #[serde(default)]
    pub status: Option<serde_json::Value>,
}

/// A single candidate address match.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub match_type: MatchType,
    pub geometry: Geometry,
    pub properties: FeatureProperties,
}

/// How AIS matched the candidate against the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Exact,
    /// Any non-exact provider value (unparsed, parsed, range, ...).
    #[serde(other)]
    #[default]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    /// `[longitude, latitude]`, provider order.
    pub coordinates: [f64; 2],
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureProperties {
    pub election_precinct: String,
    pub zip_code: String,
}

impl AddressLookup {
    /// Whether the lookup produced at least one usable feature.
    pub fn is_success(&self) -> bool {
        self.status.is_none() && !self.features.is_empty()
    }

    /// Index of the feature the accessors read.
    ///
    /// AIS sometimes returns a broad first match followed by an exact one;
    /// the exact second match wins when present.
    pub fn selected_index(&self) -> usize {
        match self.features.get(1) {
            Some(second) if second.match_type == MatchType::Exact => 1,
            _ => 0,
        }
    }

    /// The selected feature, or [`AisError::NoMatch`] when the lookup
    /// was not successful.
    pub fn feature(&self) -> Result<&Feature, AisError> {
        if !self.is_success() {
            return Err(AisError::NoMatch);
        }
        self.features
            .get(self.selected_index())
            .ok_or(AisError::NoMatch)
    }

    /// `(longitude, latitude)` of the selected feature.
    pub fn coordinates(&self) -> Result<(f64, f64), AisError> {
        let [lng, lat] = self.feature()?.geometry.coordinates;
        Ok((lng, lat))
    }

    /// Election precinct (ward + division) of the selected feature.
    pub fn precinct(&self) -> Result<&str, AisError> {
        Ok(&self.feature()?.properties.election_precinct)
    }

    /// ZIP code of the selected feature.
    pub fn zip_code(&self) -> Result<&str, AisError> {
        Ok(&self.feature()?.properties.zip_code)
    }
}
