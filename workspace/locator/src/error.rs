use thiserror::Error;

use crate::location::Location;

/// Validation failures reported back to the user when a selection is submitted.
///
/// These are never fatal: the selection form is shown again with the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Submit attempted with the state and/or place still empty
    #[error("Please select both state and place.")]
    MissingSelection,

    /// A well-formed pair that has no flood risk data yet
    #[error("Currently, only {supported} is available. Data for {region} ({place}) is coming soon!")]
    UnsupportedLocation {
        region: String,
        place: String,
        supported: Location,
    },
}

/// Error types raised while loading a region catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The document is not valid YAML or does not have the expected shape
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// No regions at all
    #[error("Catalog contains no regions")]
    Empty,

    /// A region entry with a blank name
    #[error("Region at position {0} has a blank name")]
    BlankRegion(usize),

    /// The same region listed twice
    #[error("Duplicate region: {0}")]
    DuplicateRegion(String),

    /// A region without any places
    #[error("Region {0} has no places")]
    NoPlaces(String),

    /// A blank place name inside a region
    #[error("Region {0} contains a blank place name")]
    BlankPlace(String),

    /// The same place listed twice within one region
    #[error("Duplicate place {place} in region {region}")]
    DuplicatePlace { region: String, place: String },
}

/// Type alias for Result with CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;
