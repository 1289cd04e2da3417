pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use contracts::shared::number_format::format_number_with_decimals;

use shared::config::ConfigSource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let (config, source) = shared::config::load_config()?;

    // Создаем директорию для логов
    let log_dir = shared::config::get_log_dir(&config);
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.logging.level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    match &source {
        ConfigSource::File(path) => tracing::info!("Loaded config from: {}", path.display()),
        ConfigSource::Embedded => tracing::info!("Using default embedded configuration"),
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let state = Arc::new(shared::state::AppState::new(config.calculator.clone()));
    let app = routes::configure_routes(state)
        .fallback_service(ServeDir::new(&config.server.static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr = config.server.socket_addr()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}

/// Простой middleware для логирования запросов
async fn request_logger(req: Request<Body>, next: Next) -> Response {
    use axum::body::to_bytes;

    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{} {} -> {} | {}ms | failed to read body: {}",
                method,
                uri.path(),
                parts.status.as_u16(),
                start.elapsed().as_millis(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let size = format_number_with_decimals(bytes.len() as f64, 0);
    let timestamp = chrono::Local::now().format("%H:%M:%S");
    let elapsed = start.elapsed().as_millis();

    if parts.status.is_success() {
        tracing::info!(
            "{} | {:>5}ms | {:>12} | {} {:>6} {}",
            timestamp,
            elapsed,
            size,
            parts.status.as_u16(),
            method,
            uri.path()
        );
    } else {
        tracing::warn!(
            "{} | {:>5}ms | {:>12} | {} {:>6} {}",
            timestamp,
            elapsed,
            size,
            parts.status.as_u16(),
            method,
            uri.path()
        );
    }

    Response::from_parts(parts, Body::from(bytes))
}
