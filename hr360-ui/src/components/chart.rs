//! Chart Components
//!
//! Container that scopes series colors to one chart, plus tooltip and legend
//! content that read the container's configuration through [`RenderContext`].
//! Tooltip and legend content panic when handed a context without a mounted
//! chart, mirroring how missing global state is treated elsewhere.

use hr360::chart::{
    ChartConfig, ChartScope, FormatterInput, HoverState, Indicator, LegendMarker, LegendOptions,
    LegendRenderer, LegendView, PayloadItem, RenderContext, RowMarker, TooltipOptions,
    TooltipRenderer, TooltipRow, TooltipView, VerticalAlign,
};
use leptos::*;

use super::Icon;

/// Chart container
///
/// Emits the scoped style block and hands a [`RenderContext`] carrying this
/// chart to `render`, which draws the plot and any tooltip or legend.
#[component]
pub fn ChartContainer<F, IV>(
    config: ChartConfig,
    #[prop(optional, into)]
    id: Option<String>,
    #[prop(optional, into)]
    class: String,
    render: F,
) -> impl IntoView
where
    F: Fn(RenderContext) -> IV + 'static,
    IV: IntoView,
{
    let scope = ChartScope::new(id.as_deref(), config);
    let chart_id = scope.id().to_string();
    let style = scope.style();
    let ctx = RenderContext::new().with_chart(scope);

    view! {
        <div
            data-chart=chart_id
            class=format!("chart-container relative flex aspect-video justify-center text-xs {}", class)
        >
            {style.map(|css| view! { <style inner_html=css /> })}
            <ResponsiveContainer>{render(ctx)}</ResponsiveContainer>
        </div>
    }
}

#[component]
fn ResponsiveContainer(children: Children) -> impl IntoView {
    view! {
        <div class="responsive-container" style="width: 100%; height: 100%; position: relative;">
            {children()}
        </div>
    }
}

/// Tooltip content for the hovered position
#[component]
pub fn ChartTooltipContent(
    ctx: RenderContext,
    #[prop(into)]
    hover: Signal<HoverState>,
    #[prop(optional)]
    options: TooltipOptions,
    /// Replaces the heading text: `(label, payload) -> text`
    #[prop(optional)]
    label_formatter: Option<Callback<(Option<String>, Vec<PayloadItem>), String>>,
    /// Replaces a row's content: `(name, value, index) -> text`
    #[prop(optional)]
    formatter: Option<Callback<(String, String, usize), String>>,
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    move || {
        let state = hover.get();
        let label_fn = label_formatter.map(|cb| {
            move |label: Option<&str>, payload: &[PayloadItem]| {
                cb.call((label.map(str::to_string), payload.to_vec()))
            }
        });
        let row_fn = formatter.map(|cb| {
            move |input: &FormatterInput<'_>| {
                cb.call((input.name.to_string(), input.value.to_string(), input.index))
            }
        });

        let mut renderer = TooltipRenderer::new(&options);
        if let Some(f) = label_fn.as_ref() {
            renderer = renderer.label_formatter(f);
        }
        if let Some(f) = row_fn.as_ref() {
            renderer = renderer.formatter(f);
        }

        match renderer.render(&ctx, &state) {
            Ok(tooltip) => tooltip.map(|tooltip| tooltip_view(tooltip, &class)),
            Err(err) => panic!("ChartTooltipContent: {}", err),
        }
    }
}

fn tooltip_view(tooltip: TooltipView, class: &str) -> View {
    let TooltipView {
        label,
        indicator,
        nest_label,
        rows,
    } = tooltip;

    view! {
        <div class=format!(
            "grid min-w-[8rem] items-start gap-1.5 rounded-lg border border-gray-200 bg-white px-2.5 py-1.5 text-xs shadow-xl {}",
            class,
        )>
            {label.map(|label| view! { <div class="font-medium">{label}</div> })}
            <div class="grid gap-1.5">
                {rows
                    .into_iter()
                    .map(|row| tooltip_row(row, indicator, nest_label))
                    .collect_view()}
            </div>
        </div>
    }
    .into_view()
}

fn tooltip_row(row: TooltipRow, indicator: Indicator, nest_label: bool) -> View {
    match row {
        TooltipRow::Formatted { content, .. } => view! {
            <div class="flex w-full flex-wrap items-stretch gap-2">{content}</div>
        }
        .into_view(),
        TooltipRow::Series {
            marker,
            label,
            name,
            value,
            ..
        } => {
            let align = if indicator == Indicator::Dot { "items-center" } else { "items-stretch" };
            let marker = match marker {
                RowMarker::Icon { icon } => view! { <Icon icon=icon /> }.into_view(),
                RowMarker::Indicator { indicator, color } => {
                    let color = color.unwrap_or_default();
                    view! {
                        <div
                            class=indicator_class(indicator, nest_label)
                            style=format!("--color-bg: {0}; --color-border: {0};", color)
                        />
                    }
                    .into_view()
                }
                RowMarker::None => ().into_view(),
            };
            let body_align = if nest_label { "items-end" } else { "items-center" };

            view! {
                <div class=format!("flex w-full flex-wrap gap-2 {}", align)>
                    {marker}
                    <div class=format!("flex flex-1 justify-between leading-none {}", body_align)>
                        <div class="grid gap-1.5">
                            {label.map(|label| view! { <div class="font-medium">{label}</div> })}
                            <span class="text-gray-500">{name}</span>
                        </div>
                        {value.map(|value| view! {
                            <span class="font-mono font-medium tabular-nums">{value}</span>
                        })}
                    </div>
                </div>
            }
            .into_view()
        }
    }
}

/// CSS classes for a row's color marker
fn indicator_class(indicator: Indicator, nest_label: bool) -> String {
    let shape = match indicator {
        Indicator::Dot => "h-2.5 w-2.5",
        Indicator::Line => "w-1",
        Indicator::Dashed => "w-0 border-[1.5px] border-dashed bg-transparent",
    };
    let nested = if nest_label && indicator == Indicator::Dashed { " my-0.5" } else { "" };
    format!(
        "shrink-0 rounded-[2px] border-[--color-border] bg-[--color-bg] {}{}",
        shape, nested
    )
}

/// Legend content
#[component]
pub fn ChartLegendContent(
    ctx: RenderContext,
    #[prop(into)]
    payload: Signal<Vec<PayloadItem>>,
    #[prop(optional)]
    options: LegendOptions,
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    move || {
        let items = payload.get();
        match LegendRenderer::new(&options).render(&ctx, &items) {
            Ok(legend) => legend.map(|legend| legend_view(legend, &class)),
            Err(err) => panic!("ChartLegendContent: {}", err),
        }
    }
}

fn legend_view(legend: LegendView, class: &str) -> View {
    let spacing = match legend.vertical_align {
        VerticalAlign::Top => "pb-3",
        VerticalAlign::Bottom => "pt-3",
    };

    view! {
        <div class=format!("flex items-center justify-center gap-4 {} {}", spacing, class)>
            {legend
                .entries
                .into_iter()
                .map(|entry| {
                    let marker = match entry.marker {
                        LegendMarker::Icon { icon } => view! { <Icon icon=icon /> }.into_view(),
                        LegendMarker::Swatch { color } => view! {
                            <div
                                class="h-2 w-2 shrink-0 rounded-[2px]"
                                style=format!("background-color: {}", color.unwrap_or_default())
                            />
                        }
                        .into_view(),
                    };
                    view! {
                        <div class="flex items-center gap-1.5">
                            {marker}
                            {entry.label}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_class_shapes() {
        assert!(indicator_class(Indicator::Dot, false).contains("h-2.5 w-2.5"));
        assert!(indicator_class(Indicator::Line, false).contains("w-1"));
        assert!(indicator_class(Indicator::Dashed, false).contains("border-dashed"));
    }

    #[test]
    fn test_dashed_nested_margin() {
        assert!(indicator_class(Indicator::Dashed, true).ends_with("my-0.5"));
        assert!(!indicator_class(Indicator::Line, true).ends_with("my-0.5"));
    }
}
