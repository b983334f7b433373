use locator::LEGEND;
use yew::prelude::*;

#[function_component(RiskLegend)]
pub fn risk_legend() -> Html {
    html! {
        <div class="mt-4 grid grid-cols-1 md:grid-cols-3 gap-4">
            {for LEGEND.iter().map(|level| html! {
                <div key={level.label()} class="glass-effect border border-white/20 rounded-lg p-3">
                    <div class="flex items-center space-x-2 mb-1">
                        <div class={classes!("w-3", "h-3", "rounded-full", level.swatch_class())}></div>
                        <span class="text-sm font-medium text-white">{level.label()}</span>
                    </div>
                    <p class="text-xs text-gray-300">{level.description()}</p>
                </div>
            })}
        </div>
    }
}
