//! Selection state for the location selector.
//!
//! Holds what the user has picked so far and whether the map may be shown.
//! The place list offered for the chosen region is never stored here; it is
//! derived from the catalog on demand so the two cannot drift apart.

use tracing::{debug, info, warn};

use crate::catalog::RegionCatalog;
use crate::error::SelectionError;
use crate::location::{self, Location};

/// Which view the selector is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Form shown, no error
    Selecting,
    /// Form shown with a validation message from the last submit
    SubmittedInvalid,
    /// Form hidden, map and legend shown
    MapVisible,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    region: Option<String>,
    place: Option<String>,
    map_visible: bool,
    error: Option<SelectionError>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn place(&self) -> Option<&str> {
        self.place.as_deref()
    }

    pub fn is_map_visible(&self) -> bool {
        self.map_visible
    }

    pub fn error(&self) -> Option<&SelectionError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }

    pub fn phase(&self) -> Phase {
        if self.map_visible {
            Phase::MapVisible
        } else if self.error.is_some() {
            Phase::SubmittedInvalid
        } else {
            Phase::Selecting
        }
    }

    /// Places for the current region, recomputed from the catalog.
    pub fn available_places<'a>(&self, catalog: &'a RegionCatalog) -> &'a [String] {
        catalog.places_for(self.region())
    }

    /// The supported location currently on display, if any.
    pub fn shown_location(&self) -> Option<&'static Location> {
        if !self.map_visible {
            return None;
        }
        match (self.region(), self.place()) {
            (Some(region), Some(place)) => location::find_supported(region, place),
            _ => None,
        }
    }

    /// Change the region. An empty or unknown name means "no selection".
    /// Always drops the place, the error and the map.
    pub fn select_region(&mut self, catalog: &RegionCatalog, name: &str) {
        self.region = if catalog.contains_region(name) {
            Some(name.to_string())
        } else {
            if !name.is_empty() {
                debug!(region = name, "Ignoring region outside the catalog");
            }
            None
        };
        self.place = None;
        self.error = None;
        self.map_visible = false;
        debug!(region = ?self.region, "Region selected");
    }

    /// Change the place. Returns `false` when the place was ignored because no
    /// region is selected or the place is not listed for it. The empty name
    /// clears the place. Validation against supported locations only happens on
    /// [`Selection::submit`].
    pub fn select_place(&mut self, catalog: &RegionCatalog, name: &str) -> bool {
        if name.is_empty() {
            self.place = None;
            return true;
        }

        let Some(region) = self.region.as_deref() else {
            debug!(place = name, "Ignoring place selected before a region");
            return false;
        };

        if !catalog.contains_place(region, name) {
            debug!(region, place = name, "Ignoring place outside the selected region");
            return false;
        }

        self.place = Some(name.to_string());
        debug!(region, place = name, "Place selected");
        true
    }

    /// Validate the current pair and show or hide the map accordingly.
    pub fn submit(&mut self) -> Result<&'static Location, SelectionError> {
        let outcome = match (self.region.as_deref(), self.place.as_deref()) {
            (Some(region), Some(place)) if !region.is_empty() && !place.is_empty() => {
                location::find_supported(region, place).ok_or_else(|| {
                    SelectionError::UnsupportedLocation {
                        region: region.to_string(),
                        place: place.to_string(),
                        supported: location::primary_location(),
                    }
                })
            }
            _ => Err(SelectionError::MissingSelection),
        };

        match &outcome {
            Ok(location) => {
                info!(%location, "Showing flood risk map");
                self.error = None;
                self.map_visible = true;
            }
            Err(err) => {
                warn!(%err, "Selection rejected");
                self.error = Some(err.clone());
                self.map_visible = false;
            }
        }
        outcome
    }

    /// Back to the initial, empty selection.
    pub fn reset(&mut self) {
        *self = Self::default();
        debug!("Selection reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> RegionCatalog {
        RegionCatalog::builtin().expect("Built-in catalog should load")
    }

    #[test]
    fn test_initial_state() {
        let selection = Selection::new();
        assert_eq!(selection.region(), None);
        assert_eq!(selection.place(), None);
        assert!(!selection.is_map_visible());
        assert_eq!(selection.error_message(), None);
        assert_eq!(selection.phase(), Phase::Selecting);
    }

    #[test]
    fn test_every_catalog_place_can_be_selected() {
        let catalog = catalog();
        for region in catalog.regions() {
            for place in &region.places {
                let mut selection = Selection::new();
                selection.select_region(&catalog, &region.name);
                assert!(selection.select_place(&catalog, place));
                assert_eq!(selection.place(), Some(place.as_str()));
                assert_eq!(selection.error(), None);
            }
        }
    }

    #[test]
    fn test_region_change_clears_place_error_and_map() {
        let catalog = catalog();
        let mut selection = Selection::new();
        selection.select_region(&catalog, "Bihar");
        selection.select_place(&catalog, "Patna");
        selection.submit().unwrap();
        assert!(selection.is_map_visible());

        selection.select_region(&catalog, "Jharkhand");
        assert_eq!(selection.region(), Some("Jharkhand"));
        assert_eq!(selection.place(), None);
        assert!(!selection.is_map_visible());
        assert_eq!(selection.phase(), Phase::Selecting);

        selection.select_place(&catalog, "Ranchi");
        selection.submit().unwrap_err();
        selection.select_region(&catalog, "Jharkhand");
        assert_eq!(selection.place(), None);
        assert_eq!(selection.error(), None);
    }

    #[test]
    fn test_unknown_region_means_no_selection() {
        let catalog = catalog();
        let mut selection = Selection::new();
        selection.select_region(&catalog, "Bihar");
        selection.select_region(&catalog, "Atlantis");
        assert_eq!(selection.region(), None);
        assert!(selection.available_places(&catalog).is_empty());
    }

    #[test]
    fn test_place_ignored_without_region() {
        let catalog = catalog();
        let mut selection = Selection::new();
        assert!(!selection.select_place(&catalog, "Patna"));
        assert_eq!(selection.place(), None);
    }

    #[test]
    fn test_place_from_other_region_ignored() {
        let catalog = catalog();
        let mut selection = Selection::new();
        selection.select_region(&catalog, "Uttarakhand");
        assert!(!selection.select_place(&catalog, "Patna"));
        assert_eq!(selection.place(), None);
    }

    #[test]
    fn test_empty_place_clears_without_touching_error() {
        let catalog = catalog();
        let mut selection = Selection::new();
        selection.select_region(&catalog, "Bihar");
        selection.select_place(&catalog, "Gaya");
        selection.submit().unwrap_err();

        assert!(selection.select_place(&catalog, ""));
        assert_eq!(selection.place(), None);
        assert_eq!(selection.phase(), Phase::SubmittedInvalid);
    }

    #[test]
    fn test_available_places_follow_region() {
        let catalog = catalog();
        let mut selection = Selection::new();
        assert!(selection.available_places(&catalog).is_empty());

        selection.select_region(&catalog, "West Bengal");
        assert_eq!(
            selection.available_places(&catalog),
            &["Kolkata", "Howrah", "Murshidabad", "Malda"]
        );
    }

    #[test]
    fn test_submit_missing_selection() {
        let catalog = catalog();
        let expected = "Please select both state and place.";

        let mut selection = Selection::new();
        assert_eq!(selection.submit(), Err(SelectionError::MissingSelection));
        assert_eq!(selection.error_message().as_deref(), Some(expected));
        assert!(!selection.is_map_visible());

        selection.select_region(&catalog, "Bihar");
        selection.submit().unwrap_err();
        assert_eq!(selection.error_message().as_deref(), Some(expected));
        assert!(!selection.is_map_visible());
        assert_eq!(selection.phase(), Phase::SubmittedInvalid);
    }

    #[test]
    fn test_submit_supported_location() {
        let catalog = catalog();
        let mut selection = Selection::new();
        selection.select_region(&catalog, "Bihar");
        selection.select_place(&catalog, "Patna");

        let location = selection.submit().expect("Bihar/Patna should be supported");
        assert_eq!(location.headline(), "Patna, Bihar");
        assert_eq!(selection.error(), None);
        assert!(selection.is_map_visible());
        assert_eq!(selection.phase(), Phase::MapVisible);
        assert_eq!(selection.shown_location(), Some(location));
    }

    #[test]
    fn test_submit_unsupported_location() {
        let catalog = catalog();
        let mut selection = Selection::new();
        selection.select_region(&catalog, "Uttar Pradesh");
        selection.select_place(&catalog, "Varanasi");

        let err = selection.submit().unwrap_err();
        assert!(matches!(err, SelectionError::UnsupportedLocation { .. }));

        let message = selection.error_message().unwrap();
        assert!(message.contains("Uttar Pradesh"));
        assert!(message.contains("Varanasi"));
        assert!(message.contains("Bihar (Patna)"));
        assert!(!selection.is_map_visible());
        assert_eq!(selection.shown_location(), None);
    }

    #[test]
    fn test_failed_submit_after_map_hides_map() {
        let catalog = catalog();
        let mut selection = Selection::new();
        selection.select_region(&catalog, "Bihar");
        selection.select_place(&catalog, "Patna");
        selection.submit().unwrap();

        selection.select_place(&catalog, "Gaya");
        assert!(selection.is_map_visible());
        selection.submit().unwrap_err();
        assert!(!selection.is_map_visible());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let catalog = catalog();
        let mut selection = Selection::new();
        selection.select_region(&catalog, "Bihar");
        selection.select_place(&catalog, "Patna");
        selection.submit().unwrap();

        selection.reset();
        let once = selection.clone();
        selection.reset();

        assert_eq!(once, Selection::default());
        assert_eq!(selection, once);
    }
}
