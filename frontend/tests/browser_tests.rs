#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use insights_frontend::components::chart_renderer::generate_chart_html;
use insights_frontend::pages::analytics_dashboard::{AnalyticsDashboard, AnalyticsDashboardProps};
use shared::{
    category_price_bar, register_chart_elements, seller_share_pie, CategorySummary, PayloadSchema,
    FAILED_MESSAGE,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(html: &str) -> web_sys::Element {
    let document = gloo_utils::document();
    let container = document.create_element("div").expect("create container");
    container.set_inner_html(html);
    gloo_utils::body()
        .append_child(&container)
        .expect("attach container");
    container
}

fn categories() -> Vec<CategorySummary> {
    vec![
        CategorySummary::new("Planners", 12.5, 340),
        CategorySummary::new("Wall Art", 6.0, 120),
        CategorySummary::new("Stickers", 3.25, 95),
    ]
}

#[wasm_bindgen_test]
fn bar_chart_mounts_as_svg() {
    let html = generate_chart_html(&category_price_bar(&categories()), 640, 360, register_chart_elements());
    let container = mount(&html);

    let bars = container.query_selector_all("rect.bar").expect("query bars");
    assert_eq!(bars.length(), 3);
    assert!(container.query_selector("svg.bar-chart").expect("query svg").is_some());
}

#[wasm_bindgen_test]
fn pie_chart_mounts_one_slice_per_category() {
    let html = generate_chart_html(&seller_share_pie(&categories()), 640, 360, register_chart_elements());
    let container = mount(&html);

    let slices = container.query_selector_all(".pie-slice").expect("query slices");
    assert_eq!(slices.length(), 3);
}

fn mount_dashboard() -> (web_sys::Element, yew::AppHandle<AnalyticsDashboard>) {
    let root = mount("");
    let props = AnalyticsDashboardProps {
        schema: PayloadSchema::Analysis,
    };
    let handle = yew::Renderer::<AnalyticsDashboard>::with_root_and_props(root.clone(), props).render();
    (root, handle)
}

#[wasm_bindgen_test]
async fn dashboard_mounts_without_content_before_data() {
    let (root, handle) = mount_dashboard();
    TimeoutFuture::new(0).await;

    assert!(root.query_selector(".analytics-dashboard").expect("query view").is_some());
    assert!(root.query_selector(".chart-section").expect("query charts").is_none());
    handle.destroy();
}

#[wasm_bindgen_test]
async fn dashboard_unmount_during_fetch_is_quiet() {
    let (root, handle) = mount_dashboard();
    TimeoutFuture::new(0).await;

    handle.destroy();
    // Give the in-flight request time to settle against the unmounted view.
    TimeoutFuture::new(200).await;

    assert_eq!(root.child_element_count(), 0);
}

#[wasm_bindgen_test]
async fn dashboard_without_service_settles_on_error() {
    // The test harness serves no /api/ routes, so the request fails.
    let (root, handle) = mount_dashboard();

    let mut error = None;
    for _ in 0..50 {
        TimeoutFuture::new(100).await;
        error = root.query_selector(".error-indicator").expect("query error");
        if error.is_some() {
            break;
        }
    }

    let error = error.expect("dashboard reached the failed state");
    assert_eq!(
        error.text_content().as_deref(),
        Some(format!("Error: {}", FAILED_MESSAGE).as_str())
    );
    assert!(root.query_selector(".loading-indicator").expect("query loading").is_none());
    handle.destroy();
}
