use std::{net::SocketAddr, sync::Arc};

use axum::middleware::from_fn_with_state;
use dotenvy::dotenv;
use honeypot_portal::{
    capture::build_capture_router,
    config::app_config::AppConfig,
    shared::{
        infrastructure::logging::access_log_writer::AccessLogWriter,
        interfaces::rest::middleware::access_log_middleware::record_access,
    },
};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "honeypot_portal=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();

    let mut app = build_capture_router(&config)
        .await
        .expect("failed to build capture router");

    if let Some(access_log_path) = &config.access_log_path {
        let writer = AccessLogWriter::new(access_log_path.clone())
            .await
            .expect("failed to open access log");
        app = app.layer(from_fn_with_state(Arc::new(writer), record_access));
    }

    let app = app.layer(TraceLayer::new_for_http());

    let addr = config.listen_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!("Honeypot running on http://{}", addr);
    info!("Captures are appended to {}", config.log_path.display());
    if config.csv_enabled {
        info!("CSV export is appended to {}", config.csv_path.display());
    } else {
        info!("CSV export disabled");
    }
    info!("Bait pages are served from {}", config.static_dir.display());

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("failed to start axum server");
}
