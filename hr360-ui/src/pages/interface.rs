//! Interface Page
//!
//! Landing page: placeholder text plus a visitors chart showing the chart
//! container, tooltip and legend together.

use hr360::chart::{ChartConfig, HoverState, SeriesConfig, ThemeColors, TooltipOptions};
use hr360::routing::Page;
use leptos::*;

use crate::components::{ChartContainer, ChartLegendContent, ChartTooltipContent, LinePlot, PlotData};

/// Landing page component
#[component]
pub fn Interface() -> impl IntoView {
    view! {
        <section class="flex-1 p-5 space-y-6">
            <p>{Page::Interface.placeholder()}</p>
            <VisitorsChart />
        </section>
    }
}

fn visitors_config() -> ChartConfig {
    ChartConfig::new()
        .with_series("desktop", SeriesConfig::new().label("Desktop").color("#2563eb"))
        .with_series(
            "mobile",
            SeriesConfig::new()
                .label("Mobile")
                .theme(ThemeColors::new("#60a5fa", "#93c5fd")),
        )
}

fn visitors_data() -> PlotData {
    PlotData {
        keys: vec!["desktop", "mobile"],
        categories: vec!["January", "February", "March", "April", "May", "June"],
        values: vec![
            vec![186.0, 80.0],
            vec![305.0, 200.0],
            vec![237.0, 120.0],
            vec![73.0, 190.0],
            vec![209.0, 130.0],
            vec![214.0, 140.0],
        ],
    }
}

/// Monthly visitors by device
#[component]
fn VisitorsChart() -> impl IntoView {
    let hover = create_rw_signal(HoverState::default());
    let data = visitors_data();
    let legend = Signal::derive({
        let payload = data.legend_payload();
        move || payload.clone()
    });

    view! {
        <div class="rounded-xl bg-white p-5 shadow-sm">
            <h2 class="text-lg font-semibold">"Visitors"</h2>
            <p class="text-sm text-gray-500 mb-4">"January - June"</p>
            <ChartContainer
                id="visitors"
                config=visitors_config()
                class="min-h-[200px] w-full"
                render=move |ctx| {
                    let data = data.clone();
                    view! {
                        <LinePlot data=data on_hover=Callback::new(move |state| hover.set(state)) />
                        <div class="absolute top-2 right-2 pointer-events-none">
                            <ChartTooltipContent
                                ctx=ctx.clone()
                                hover=hover
                                options=TooltipOptions::default()
                            />
                        </div>
                        <ChartLegendContent ctx=ctx payload=legend />
                    }
                }
            />
        </div>
    }
}
