use log::{debug, error, info};
use shared::{register_chart_elements, PayloadSchema};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod api;
pub mod components;
pub mod config;
pub mod pages {
    pub mod analytics_dashboard;
    pub mod not_found;
}

use config::Config;
use pages::{analytics_dashboard::AnalyticsDashboard, not_found::NotFound};

// Unit test modules only
#[cfg(test)]
mod tests;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/legacy")]
    LegacyDashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <BrowserRouter>
            <div class="app-container">
                <header class="app-header">
                    <h1>{"Marketplace Insights"}</h1>
                </header>
                <main class="flex-1">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}

pub fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Dashboard => html! { <AnalyticsDashboard schema={Config::payload_schema()} /> },
        Route::LegacyDashboard => {
            html! { <AnalyticsDashboard schema={PayloadSchema::Legacy} /> }
        }
        Route::NotFound => html! { <NotFound /> },
    }
}

pub async fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();

    let registry = register_chart_elements();
    info!("Registered {} chart elements", registry.len());

    yew::Renderer::<App>::new().render();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            error!("Failed to start app: {:?}", e);
        }
    });
}
