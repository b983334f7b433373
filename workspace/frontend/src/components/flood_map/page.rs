use std::rc::Rc;

use locator::RegionCatalog;
use yew::prelude::*;

use super::map_panel::MapPanel;
use super::selector_form::SelectorForm;
use super::state::{SelectorAction, SelectorState};
use crate::common::error::ErrorDisplay;
use crate::components::background::AnimatedBackground;

#[derive(Properties, PartialEq)]
pub struct FloodRiskMapPageProps {
    /// Host-provided navigation back to the previous screen
    pub on_back: Callback<()>,
}

#[function_component(FloodRiskMapPage)]
pub fn flood_risk_map_page(props: &FloodRiskMapPageProps) -> Html {
    let catalog = use_memo((), |_| RegionCatalog::builtin().map(Rc::new));

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_| {
            log::debug!("Leaving flood risk map page");
            on_back.emit(());
        })
    };

    let content = match &*catalog {
        Ok(catalog) => html! { <LocationFlow catalog={catalog.clone()} /> },
        Err(e) => {
            log::error!("Failed to load region catalog: {}", e);
            html! { <ErrorDisplay message={format!("Region list unavailable: {}", e)} /> }
        }
    };

    html! {
        <div class="min-h-screen relative overflow-hidden">
            <AnimatedBackground />

            <header class="backdrop-blur-md bg-white/10 border-b border-white/20 sticky top-0 z-50">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center h-16">
                        <button class="btn btn-ghost text-white" onclick={on_back}>
                            <i class="fas fa-arrow-left"></i>
                            <span class="font-medium">{"Back to Dashboard"}</span>
                        </button>
                    </div>
                </div>
            </header>

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 relative z-10">
                <div class="glass-effect rounded-2xl p-8 shadow-2xl border border-white/20">
                    <div class="flex items-center space-x-3 mb-6">
                        <i class="fas fa-map-marker-alt text-3xl text-cyan-400"></i>
                        <div>
                            <h1 class="text-3xl font-bold text-white">{"Flood Risk Map"}</h1>
                            <p class="text-gray-300 mt-1">{"Interactive flood risk visualization for your area"}</p>
                        </div>
                    </div>

                    {content}
                </div>
            </main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct LocationFlowProps {
    catalog: Rc<RegionCatalog>,
}

/// Owns the selection state; switches between the form and the map.
#[function_component(LocationFlow)]
fn location_flow(props: &LocationFlowProps) -> Html {
    let catalog = props.catalog.clone();
    let state = use_reducer(move || SelectorState::new(catalog));

    let on_region_change = {
        let state = state.clone();
        Callback::from(move |region: String| state.dispatch(SelectorAction::SelectRegion(region)))
    };

    let on_place_change = {
        let state = state.clone();
        Callback::from(move |place: String| state.dispatch(SelectorAction::SelectPlace(place)))
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(SelectorAction::Submit))
    };

    let on_reset = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(SelectorAction::Reset))
    };

    match state.selection.shown_location() {
        Some(location) => html! {
            <MapPanel location={*location} on_change_location={on_reset} />
        },
        None => html! {
            <SelectorForm
                catalog={state.catalog.clone()}
                selection={state.selection.clone()}
                {on_region_change}
                {on_place_change}
                {on_submit}
            />
        },
    }
}
