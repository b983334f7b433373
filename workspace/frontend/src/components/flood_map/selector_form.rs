use std::rc::Rc;

use locator::{location, RegionCatalog, Selection};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SelectorFormProps {
    pub catalog: Rc<RegionCatalog>,
    pub selection: Selection,
    pub on_region_change: Callback<String>,
    pub on_place_change: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(SelectorForm)]
pub fn selector_form(props: &SelectorFormProps) -> Html {
    let region = props.selection.region();
    let place = props.selection.place();
    let places = props.selection.available_places(&props.catalog);

    let on_region_change = {
        let on_region_change = props.on_region_change.clone();
        Callback::from(move |e: Event| {
            if let Some(target) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                on_region_change.emit(target.value());
            }
        })
    };

    let on_place_change = {
        let on_place_change = props.on_place_change.clone();
        Callback::from(move |e: Event| {
            if let Some(target) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                on_place_change.emit(target.value());
            }
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let place_placeholder = if region.is_some() {
        "Select a city..."
    } else {
        "First select a state"
    };

    html! {
        <div class="space-y-6">
            <div class="glass-effect border border-cyan-400/30 rounded-lg p-4 flex items-start space-x-3">
                <i class="fas fa-exclamation-triangle text-cyan-400 mt-0.5"></i>
                <div class="text-sm text-gray-300">
                    <p class="font-medium text-white mb-1">{"Currently Available Location"}</p>
                    <p>
                        {"This service is currently available for "}
                        <span class="text-cyan-400 font-semibold">{location::primary_location().to_string()}</span>
                        {" only. More locations coming soon!"}
                    </p>
                </div>
            </div>

            <form onsubmit={on_submit} class="space-y-4">
                <div>
                    <label for="state" class="block text-sm font-medium text-gray-300 mb-2">{"Select State"}</label>
                    <select
                        id="state"
                        class="select select-bordered w-full bg-slate-800/50 text-white"
                        onchange={on_region_change}
                        required={true}
                    >
                        <option value="" selected={region.is_none()}>{"Select a state..."}</option>
                        {for props.catalog.region_names().map(|name| html! {
                            <option key={name} value={name.to_string()} selected={region == Some(name)}>
                                {name}
                            </option>
                        })}
                    </select>
                </div>

                <div>
                    <label for="place" class="block text-sm font-medium text-gray-300 mb-2">{"Select Place/City"}</label>
                    <select
                        id="place"
                        class="select select-bordered w-full bg-slate-800/50 text-white"
                        onchange={on_place_change}
                        disabled={region.is_none()}
                        required={true}
                    >
                        <option value="" selected={place.is_none()}>{place_placeholder}</option>
                        {for places.iter().map(|name| html! {
                            <option key={name.as_str()} value={name.clone()} selected={place == Some(name.as_str())}>
                                {name}
                            </option>
                        })}
                    </select>
                </div>

                {if let Some(error) = props.selection.error_message() {
                    html! {
                        <div class="alert alert-error bg-red-500/10 border border-red-400/30">
                            <i class="fas fa-exclamation-triangle text-red-400"></i>
                            <span class="text-sm text-red-300">{error}</span>
                        </div>
                    }
                } else {
                    html! {}
                }}

                <button type="submit" class="btn btn-primary w-full">
                    {"View Flood Risk Map"}
                </button>
            </form>
        </div>
    }
}
