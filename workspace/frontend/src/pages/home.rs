use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Minimal stand-in for the host dashboard the map page returns to.
#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <h1 class="text-5xl font-bold">{"Flood Watch"}</h1>
                    <p class="py-6">
                        {"Check the flood risk around you on an interactive map."}
                    </p>
                    <Link<Route> to={Route::FloodRiskMap} classes="btn btn-primary">
                        <i class="fas fa-map-marker-alt"></i>
                        {" Open Flood Risk Map"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
