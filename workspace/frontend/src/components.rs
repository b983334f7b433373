pub mod background;
pub mod flood_map;
