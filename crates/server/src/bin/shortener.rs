//! Standalone shortener service: the `/short` API without the web app.
//!
//! Binds to the `host`/`port` from the service config file.

use server::{config, health, openapi, state, telemetry};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    telemetry::init_tracing();

    let path = config::config_path();
    let service_config = match config::load_service_config(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid service config");
            std::process::exit(1);
        }
    };

    let otlp = match telemetry::init_telemetry() {
        Ok(enabled) => enabled,
        Err(e) => {
            tracing::warn!(error = %e, "OTLP telemetry disabled");
            false
        }
    };
    health::record_start_time();

    let bind_addr = service_config.bind_addr();
    let app_state = state::AppState::in_memory(service_config);
    state::spawn_purge_task(&app_state);

    let mut router = openapi::api_router(app_state);
    if otlp {
        router = router.layer(telemetry::OtelTraceLayer);
    }
    let router = router
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
        .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
            tower_http::request_id::MakeRequestUuid,
        ));

    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, addr = %bind_addr, "Failed to bind listener");
            std::process::exit(1);
        }
    };
    tracing::info!(addr = %bind_addr, "Shortener listening");

    if let Err(e) = axum::serve(listener, router).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
