use yew::prelude::*;
use yew_router::prelude::*;

mod common;
mod components;
mod pages;
pub mod settings;

use components::flood_map::FloodRiskMapPage;
use pages::home::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/flood-risk-map")]
    FloodRiskMap,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering Home page");
            html! { <Home /> }
        }
        Route::FloodRiskMap => {
            log::trace!("Rendering Flood Risk Map page");
            html! { <FloodRiskMapRoute /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <h1 class="text-3xl font-bold p-8">{"404 Not Found"}</h1> }
        }
    }
}

/// Wires the page's back action to the router.
#[function_component(FloodRiskMapRoute)]
fn flood_risk_map_route() -> Html {
    let navigator = use_navigator();

    let on_back = Callback::from(move |_| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });

    html! { <FloodRiskMapPage {on_back} /> }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Flood Risk Map Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
