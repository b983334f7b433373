mod legend;
mod map_panel;
mod page;
mod selector_form;
mod state;

pub use page::FloodRiskMapPage;
