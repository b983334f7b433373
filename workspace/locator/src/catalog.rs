//! Region catalog: the fixed table of states and the places offered for each.
//!
//! The table is configuration data. The built-in copy is compiled in from
//! `data/regions.yaml`; [`RegionCatalog::from_yaml`] accepts any document of the
//! same shape. Every catalog is validated on load, so the rest of the crate can
//! rely on non-empty, duplicate-free place lists.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{CatalogError, Result};

const BUILTIN_REGIONS: &str = include_str!("../data/regions.yaml");

/// A selectable state and its places, in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Region {
    pub name: String,
    pub places: Vec<String>,
}

impl Region {
    pub fn new(name: impl Into<String>, places: &[&str]) -> Self {
        Self {
            name: name.into(),
            places: places.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn contains_place(&self, place: &str) -> bool {
        self.places.iter().any(|p| p == place)
    }
}

/// Read-only lookup from region name to its ordered place list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegionCatalog {
    regions: Vec<Region>,
}

impl RegionCatalog {
    /// Build a catalog from regions, rejecting malformed tables.
    pub fn new(regions: Vec<Region>) -> Result<Self> {
        let catalog = Self { regions };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog shipped with the application.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_REGIONS)
    }

    /// Parse a catalog from a YAML document of the form
    /// `regions: [{ name: .., places: [..] }]`.
    #[instrument(skip(source), fields(bytes = source.len()))]
    pub fn from_yaml(source: &str) -> Result<Self> {
        let catalog: RegionCatalog = serde_yaml::from_str(source)?;
        catalog.validate()?;
        debug!(regions = catalog.regions.len(), "Loaded region catalog");
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        if self.regions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen_regions = HashSet::new();
        for (index, region) in self.regions.iter().enumerate() {
            if region.name.trim().is_empty() {
                return Err(CatalogError::BlankRegion(index));
            }
            if !seen_regions.insert(region.name.as_str()) {
                return Err(CatalogError::DuplicateRegion(region.name.clone()));
            }
            if region.places.is_empty() {
                return Err(CatalogError::NoPlaces(region.name.clone()));
            }

            let mut seen_places = HashSet::new();
            for place in &region.places {
                if place.trim().is_empty() {
                    return Err(CatalogError::BlankPlace(region.name.clone()));
                }
                if !seen_places.insert(place.as_str()) {
                    return Err(CatalogError::DuplicatePlace {
                        region: region.name.clone(),
                        place: place.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region_names(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|r| r.name.as_str())
    }

    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    pub fn contains_region(&self, name: &str) -> bool {
        self.region(name).is_some()
    }

    /// Places offered for the selected region. Nothing selected, or a name
    /// outside the catalog, yields an empty list.
    pub fn places_for(&self, region: Option<&str>) -> &[String] {
        region
            .and_then(|name| self.region(name))
            .map(|r| r.places.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains_place(&self, region: &str, place: &str) -> bool {
        self.region(region)
            .map(|r| r.contains_place(place))
            .unwrap_or(false)
    }
}
