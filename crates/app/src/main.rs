use dioxus::prelude::*;

mod shorten_form;
pub mod submit;
pub mod transport;

use shorten_form::ShortenForm;

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let service_config =
            match server::config::load_service_config(server::config::config_path()) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!(error = %e, "Invalid service config");
                    std::process::exit(1);
                }
            };

        let otlp = server::telemetry::init_telemetry().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "OTLP telemetry disabled");
            false
        });
        server::health::record_start_time();

        let state = server::state::AppState::in_memory(service_config);
        server::state::spawn_purge_task(&state);

        let mut router =
            dioxus::server::router(App).merge(server::openapi::api_router(state));

        if otlp {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        let router = router
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Link shortener" }
        ShortenForm {}
    }
}
