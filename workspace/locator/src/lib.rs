//! Domain model for the flood risk map page.
//!
//! Everything the page decides lives here: which states and places can be
//! picked, which pair has map data, what a rejected submit says, and what the
//! map panel embeds. The frontend crate only renders this state.

pub mod background;
pub mod catalog;
pub mod error;
pub mod legend;
pub mod location;
pub mod map_embed;
pub mod selection;


pub use background::{scatter_markers, Marker, MARKER_COUNT};
pub use catalog::{Region, RegionCatalog};
pub use error::{CatalogError, Result, SelectionError};
pub use legend::{RiskLevel, LEGEND};
pub use location::{Location, SUPPORTED_LOCATIONS};
pub use map_embed::MapEmbed;
pub use selection::{Phase, Selection};
