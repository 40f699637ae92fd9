use crate::api::analysis::HttpAnalysisSource;
use crate::components::chart_renderer::ChartRenderer;
use crate::components::section_list::SectionList;
use log::debug;
use shared::{
    load_once, register_chart_elements, render_view, AnalysisPayload, FetchError, FetchGate,
    LoadOutcome, MountGuard, PayloadSchema, RenderedView, Section, ViewState,
};
use std::rc::Rc;
use yew::prelude::*;

/// Dashboard view state; terminal states ignore later results.
#[derive(Debug, Default, PartialEq)]
pub struct DashboardState(pub ViewState);

impl Reducible for DashboardState {
    type Action = Result<AnalysisPayload, FetchError>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        if next.resolve(action) {
            Rc::new(Self(next))
        } else {
            debug!("Ignoring analysis result, view already settled");
            self
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct AnalyticsDashboardProps {
    /// Which endpoint and payload shape to read.
    #[prop_or_default]
    pub schema: PayloadSchema,
}

/// Analytics view: fetches the analysis payload once per mount and draws it.
#[function_component(AnalyticsDashboard)]
pub fn analytics_dashboard(props: &AnalyticsDashboardProps) -> Html {
    register_chart_elements();

    let state = use_reducer(DashboardState::default);
    let gate = use_memo((), |_| FetchGate::new());
    let guard = use_memo((), |_| MountGuard::new());

    {
        let state = state.clone();
        let gate = gate.clone();
        let guard = guard.clone();
        let schema = props.schema;
        use_effect_with((), move |_| {
            let task_guard = (*guard).clone();
            wasm_bindgen_futures::spawn_local(async move {
                let source = HttpAnalysisSource::new(schema);
                let outcome =
                    load_once(&source, &gate, &task_guard, move |result| state.dispatch(result))
                        .await;
                if outcome != LoadOutcome::Applied {
                    debug!("Analysis load finished without applying: {:?}", outcome);
                }
            });

            move || guard.unmount()
        });
    }

    match render_view(&state.0) {
        RenderedView::Loading => html! {
            <div class="analytics-dashboard">
                <div class="loading-indicator">{"Loading..."}</div>
            </div>
        },
        RenderedView::Failed { message } => html! {
            <div class="analytics-dashboard">
                <div class="error-indicator">{ format!("Error: {}", message) }</div>
            </div>
        },
        RenderedView::Ready { sections } if sections.is_empty() => html! {
            <div class="analytics-dashboard">
                <div class="empty-indicator">{"No analysis data available"}</div>
            </div>
        },
        RenderedView::Ready { sections } => html! {
            <div class="analytics-dashboard">
                { for sections.iter().map(render_section) }
            </div>
        },
    }
}

fn render_section(section: &Section) -> Html {
    match section {
        Section::Chart { id, chart } => html! {
            <section class="dashboard-section chart-section" key={id.dom_id()}>
                <ChartRenderer chart={chart.clone()} chart_id={id.dom_id()} />
            </section>
        },
        Section::List { id, list } => html! {
            <SectionList key={id.dom_id()} list={list.clone()} section_id={id.dom_id()} />
        },
    }
}
