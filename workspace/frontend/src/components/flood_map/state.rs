use std::rc::Rc;

use locator::{RegionCatalog, Selection};
use yew::prelude::*;

/// User actions on the location selector
pub enum SelectorAction {
    SelectRegion(String),
    SelectPlace(String),
    Submit,
    Reset,
}

/// Reducer state: the read-only catalog plus the user's current selection.
#[derive(Clone, PartialEq)]
pub struct SelectorState {
    pub catalog: Rc<RegionCatalog>,
    pub selection: Selection,
}

impl SelectorState {
    pub fn new(catalog: Rc<RegionCatalog>) -> Self {
        Self {
            catalog,
            selection: Selection::new(),
        }
    }
}

impl Reducible for SelectorState {
    type Action = SelectorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut selection = self.selection.clone();

        match action {
            SelectorAction::SelectRegion(region) => {
                selection.select_region(&self.catalog, &region);
            }
            SelectorAction::SelectPlace(place) => {
                if !selection.select_place(&self.catalog, &place) {
                    log::warn!("Place {:?} is not offered for the selected state", place);
                }
            }
            SelectorAction::Submit => {
                if let Ok(location) = selection.submit() {
                    log::info!("Flood risk map opened for {}", location.headline());
                }
            }
            SelectorAction::Reset => selection.reset(),
        }

        Rc::new(Self {
            catalog: self.catalog.clone(),
            selection,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce_all(actions: Vec<SelectorAction>) -> Rc<SelectorState> {
        let catalog = Rc::new(RegionCatalog::builtin().unwrap());
        actions
            .into_iter()
            .fold(Rc::new(SelectorState::new(catalog)), |state, action| {
                state.reduce(action)
            })
    }

    #[test]
    fn test_reducer_end_to_end() {
        let state = reduce_all(vec![
            SelectorAction::SelectRegion("Bihar".to_string()),
            SelectorAction::SelectPlace("Patna".to_string()),
            SelectorAction::Submit,
        ]);
        assert!(state.selection.is_map_visible());
        assert_eq!(state.selection.error_message(), None);

        let state = state.reduce(SelectorAction::Reset);
        assert_eq!(state.selection, Selection::default());
    }

    #[test]
    fn test_reducer_rejects_place_without_region() {
        let state = reduce_all(vec![
            SelectorAction::SelectPlace("Patna".to_string()),
            SelectorAction::Submit,
        ]);
        assert_eq!(state.selection.place(), None);
        assert_eq!(
            state.selection.error_message().as_deref(),
            Some("Please select both state and place.")
        );
    }
}
