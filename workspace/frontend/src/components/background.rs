use locator::scatter_markers;
use yew::prelude::*;

use crate::settings;

/// Layered decorative backdrop: gradients, a grid texture and floating dots.
#[function_component(AnimatedBackground)]
pub fn animated_background() -> Html {
    let count = settings::get_settings().marker_count;
    let markers = use_memo(count, |count| scatter_markers(*count, js_sys::Math::random));

    html! {
        <div class="absolute inset-0 z-0 pointer-events-none" aria-hidden="true">
            <div class="absolute inset-0 bg-gradient-to-br from-slate-900 via-blue-900 to-teal-900"></div>
            <div class="absolute inset-0 bg-gradient-to-tr from-teal-500/20 via-cyan-500/10 to-blue-500/20 animate-gradient"></div>
            <div class="absolute inset-0 opacity-20 grid-texture"></div>
            <div class="absolute inset-0 overflow-hidden">
                {for markers.iter().map(|marker| html! {
                    <div class="absolute w-1 h-1 bg-cyan-400/30 rounded-full animate-float" style={marker.style()}></div>
                })}
            </div>
        </div>
    }
}
