use locator::{Location, MapEmbed};
use yew::prelude::*;

use super::legend::RiskLegend;

#[derive(Properties, PartialEq)]
pub struct MapPanelProps {
    pub location: Location,
    pub on_change_location: Callback<()>,
}

/// Success banner, embedded third-party map and the risk legend.
#[function_component(MapPanel)]
pub fn map_panel(props: &MapPanelProps) -> Html {
    let embed = MapEmbed::for_location(&props.location);
    let headline = props.location.headline();

    let on_change_location = {
        let on_change_location = props.on_change_location.clone();
        Callback::from(move |_| {
            log::debug!("User requested a different location");
            on_change_location.emit(());
        })
    };

    html! {
        <div class="space-y-6">
            <div class="alert alert-success bg-green-500/10 border border-green-400/30">
                <i class="fas fa-check-circle text-green-400"></i>
                <p class="flex-1 text-sm text-green-300">
                    <span class="font-semibold">{"Location Found:"}</span>
                    {format!(" {}", headline)}
                </p>
                <button class="btn btn-link btn-sm text-cyan-400" onclick={on_change_location}>
                    {"Change Location"}
                </button>
            </div>

            <div class="glass-effect border border-white/20 rounded-lg p-4">
                <h2 class="text-xl font-semibold text-white mb-4 flex items-center space-x-2">
                    <i class="fas fa-map-marker-alt text-cyan-400"></i>
                    <span>{format!("Interactive Flood Risk Map - {}", headline)}</span>
                </h2>

                <div class="relative w-full" style={embed.container_style()}>
                    <iframe
                        src={embed.src.clone()}
                        class="absolute top-0 left-0 w-full h-full rounded-lg"
                        style="border: 0"
                        allowfullscreen={embed.allow_fullscreen}
                        title={embed.title.clone()}
                    />
                </div>

                <RiskLegend />
            </div>
        </div>
    }
}
