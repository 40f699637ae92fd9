use crate::config::Config;
use shared::{register_chart_elements, ChartKind, ChartRegistry, ChartSpec, Dataset};
use std::f64::consts::PI;
use web_sys::HtmlElement;
use yew::prelude::*;

const DEFAULT_COLOR: &str = "#3B82F6";
const AXIS_MARGIN: f64 = 40.0;

/// Draws one [`ChartSpec`] as inline SVG.
#[derive(Properties, PartialEq)]
pub struct ChartRendererProps {
    pub chart: ChartSpec,
    pub chart_id: AttrValue,
    #[prop_or_default]
    pub width: Option<u32>,
    #[prop_or_default]
    pub height: Option<u32>,
}

#[function_component(ChartRenderer)]
pub fn chart_renderer(props: &ChartRendererProps) -> Html {
    let chart_container_ref = use_node_ref();
    let width = props.width.unwrap_or_else(Config::chart_width);
    let height = props.height.unwrap_or_else(Config::chart_height);

    {
        let chart_container_ref = chart_container_ref.clone();
        use_effect_with(
            (props.chart.clone(), width, height),
            move |(chart, width, height)| {
                if let Some(container) = chart_container_ref.cast::<HtmlElement>() {
                    let html =
                        generate_chart_html(chart, *width, *height, register_chart_elements());
                    container.set_inner_html(&html);
                }
                || ()
            },
        );
    }

    html! {
        <div class="chart-container" id={props.chart_id.clone()} ref={chart_container_ref}>
            <div class="chart-loading">
                {"Loading chart..."}
            </div>
        </div>
    }
}

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Prices keep their cents, counts stay whole.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Markup for a chart, or an inline error block when the chart kind is not
/// registered or there is nothing to draw.
pub fn generate_chart_html(
    chart: &ChartSpec,
    width: u32,
    height: u32,
    registry: &ChartRegistry,
) -> String {
    if !registry.supports(chart.kind) {
        return generate_error_html(&format!("Chart type '{}' is not registered", chart.kind));
    }
    if chart.labels.is_empty() || chart.datasets.iter().all(|d| d.data.is_empty()) {
        return generate_error_html(&format!("No data available for {} chart", chart.kind));
    }

    let body = match chart.kind {
        ChartKind::Bar => generate_bar_chart_svg(chart, width, height),
        ChartKind::Pie => generate_pie_chart_svg(chart, width, height),
        ChartKind::Line => generate_line_chart_svg(chart, width, height),
    };

    format!(
        r#"<div class="chart-wrapper chart-{}"><h3 class="chart-title">{}</h3><div class="chart-content">{}<div class="chart-legend">{}</div></div></div>"#,
        chart.kind,
        escape_html(&chart.title),
        body,
        generate_legend_html(chart)
    )
}

fn generate_error_html(message: &str) -> String {
    format!(
        r#"<div class="chart-error">{}</div>"#,
        escape_html(message)
    )
}

fn max_value(chart: &ChartSpec) -> f64 {
    let max = chart
        .datasets
        .iter()
        .flat_map(|d| d.data.iter().copied())
        .fold(0.0, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

fn fill_color(dataset: &Dataset, index: usize) -> &str {
    dataset.style.color_at(index).unwrap_or(DEFAULT_COLOR)
}

fn stroke_color(dataset: &Dataset) -> &str {
    dataset
        .style
        .border_color
        .as_deref()
        .or_else(|| dataset.style.color_at(0))
        .unwrap_or(DEFAULT_COLOR)
}

fn generate_bar_chart_svg(chart: &ChartSpec, width: u32, height: u32) -> String {
    let plot_width = width as f64;
    let plot_height = height as f64 - AXIS_MARGIN;
    let max = max_value(chart);
    let group_width = plot_width / chart.labels.len() as f64;
    let bar_width = group_width * 0.8 / chart.datasets.len().max(1) as f64;

    let mut bars = String::new();
    for (i, label) in chart.labels.iter().enumerate() {
        let group_x = i as f64 * group_width + group_width * 0.1;
        for (d, dataset) in chart.datasets.iter().enumerate() {
            // Labels beyond a short series have no bar.
            let Some(value) = dataset.data.get(i).copied() else {
                continue;
            };
            let bar_height = (value.max(0.0) / max) * plot_height * 0.9;
            let x = group_x + d as f64 * bar_width;
            let y = plot_height - bar_height;
            bars.push_str(&format!(
                r#"<g class="bar-group"><rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" stroke="{}" stroke-width="{}" class="bar"/><text x="{:.2}" y="{:.2}" text-anchor="middle" class="bar-value">{}</text></g>"#,
                x,
                y,
                bar_width,
                bar_height,
                fill_color(dataset, i),
                stroke_color(dataset),
                dataset.style.border_width,
                x + bar_width / 2.0,
                y - 5.0,
                format_value(value)
            ));
        }
        bars.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" class="bar-label">{}</text>"#,
            i as f64 * group_width + group_width / 2.0,
            height as f64 - AXIS_MARGIN / 2.0,
            escape_html(label)
        ));
    }

    format!(
        r#"<svg class="bar-chart" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><line x1="0" y1="{axis:.2}" x2="{w}" y2="{axis:.2}" class="axis"/>{bars}</svg>"#,
        w = width,
        h = height,
        axis = plot_height,
        bars = bars
    )
}

fn generate_pie_chart_svg(chart: &ChartSpec, width: u32, height: u32) -> String {
    let Some(dataset) = chart.first_dataset() else {
        return String::new();
    };
    let total: f64 = dataset.data.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return generate_error_html("No data available for pie chart");
    }

    let center_x = width as f64 / 2.0;
    let center_y = height as f64 / 2.0;
    let radius = (width.min(height) as f64 / 2.0) * 0.8;

    let mut current_angle = -PI / 2.0;
    let mut slices = String::new();
    for (i, value) in dataset.data.iter().enumerate() {
        let slice_angle = (value.max(0.0) / total) * 2.0 * PI;
        if slice_angle <= 0.0 {
            continue;
        }
        let color = fill_color(dataset, i);
        let label = chart.labels.get(i).map(String::as_str).unwrap_or_default();

        if slice_angle >= 2.0 * PI - f64::EPSILON {
            slices.push_str(&format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" class="pie-slice"><title>{}</title></circle>"#,
                center_x,
                center_y,
                radius,
                color,
                escape_html(label)
            ));
            continue;
        }

        let end_angle = current_angle + slice_angle;
        let large_arc_flag = if slice_angle > PI { 1 } else { 0 };
        slices.push_str(&format!(
            r#"<path d="M {cx:.2},{cy:.2} L {x1:.2},{y1:.2} A {r:.2},{r:.2} 0 {large},1 {x2:.2},{y2:.2} Z" fill="{color}" class="pie-slice"><title>{label}</title></path>"#,
            cx = center_x,
            cy = center_y,
            x1 = center_x + radius * current_angle.cos(),
            y1 = center_y + radius * current_angle.sin(),
            r = radius,
            large = large_arc_flag,
            x2 = center_x + radius * end_angle.cos(),
            y2 = center_y + radius * end_angle.sin(),
            color = color,
            label = escape_html(label)
        ));
        current_angle = end_angle;
    }

    format!(
        r#"<svg class="pie-chart" width="{w}" height="{h}" viewBox="0 0 {w} {h}">{slices}</svg>"#,
        w = width,
        h = height,
        slices = slices
    )
}

/// Path through the points of one line dataset, scaled against `max`.
pub fn generate_line_path(values: &[f64], max: f64, width: u32, plot_height: f64) -> String {
    if values.is_empty() {
        return String::new();
    }

    let step = if values.len() > 1 {
        width as f64 / (values.len() - 1) as f64
    } else {
        0.0
    };
    let offset = if values.len() > 1 { 0.0 } else { width as f64 / 2.0 };

    let points: Vec<String> = values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = offset + i as f64 * step;
            let y = plot_height - (value.max(0.0) / max) * plot_height * 0.9;
            format!("{:.2},{:.2}", x, y)
        })
        .collect();

    format!("M {}", points.join(" L "))
}

fn generate_line_chart_svg(chart: &ChartSpec, width: u32, height: u32) -> String {
    let plot_height = height as f64 - AXIS_MARGIN;
    let max = max_value(chart);

    let mut lines = String::new();
    for dataset in &chart.datasets {
        let path = generate_line_path(&dataset.data, max, width, plot_height);
        let fill = if dataset.style.fill {
            fill_color(dataset, 0)
        } else {
            "none"
        };
        lines.push_str(&format!(
            r#"<path d="{}" fill="{}" stroke="{}" stroke-width="{}" class="line"/>"#,
            path,
            fill,
            stroke_color(dataset),
            dataset.style.border_width.max(1)
        ));
    }

    let label_step = if chart.labels.len() > 1 {
        width as f64 / (chart.labels.len() - 1) as f64
    } else {
        0.0
    };
    let label_offset = if chart.labels.len() > 1 { 0.0 } else { width as f64 / 2.0 };
    let labels: String = chart
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            format!(
                r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" class="line-label">{}</text>"#,
                label_offset + i as f64 * label_step,
                height as f64 - AXIS_MARGIN / 2.0,
                escape_html(label)
            )
        })
        .collect();

    format!(
        r#"<svg class="line-chart" width="{w}" height="{h}" viewBox="0 0 {w} {h}" overflow="visible">{lines}{labels}</svg>"#,
        w = width,
        h = height,
        lines = lines,
        labels = labels
    )
}

/// Pie charts list each slice; bar and line charts list their datasets.
fn generate_legend_html(chart: &ChartSpec) -> String {
    let entries: Vec<(String, String)> = match chart.kind {
        ChartKind::Pie => match chart.first_dataset() {
            Some(dataset) => chart
                .labels
                .iter()
                .enumerate()
                .map(|(i, label)| (fill_color(dataset, i).to_string(), label.clone()))
                .collect(),
            None => Vec::new(),
        },
        ChartKind::Bar | ChartKind::Line => chart
            .datasets
            .iter()
            .filter_map(|d| {
                d.label
                    .as_ref()
                    .map(|label| (stroke_color(d).to_string(), label.clone()))
            })
            .collect(),
    };

    entries
        .iter()
        .map(|(color, label)| {
            format!(
                r#"<div class="legend-item"><span class="legend-color" style="background-color: {}"></span><span class="legend-label">{}</span></div>"#,
                color,
                escape_html(label)
            )
        })
        .collect::<Vec<String>>()
        .join("")
}
