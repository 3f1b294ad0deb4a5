use std::{future::IntoFuture as _, io, sync::OnceLock, time::Duration};

use application::{config, Args, Config};
use axum::{extract::MatchedPath, Router};
use axum_client_ip::InsecureClientIp;
use futures::future;
use service::{infra::Memory, Service};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

/// [`log::Level`]s written into `stderr` rather than `stdout`.
const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

/// Maximum [`log::Level`] being logged, set once the [`Config`] is loaded.
static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() {
    init_tracing();

    if start().await.is_err() {
        std::process::exit(1);
    }
}

/// Installs the global [`tracing`] subscriber, splitting the output between
/// `stdout` and `stderr` by [`STDERR_LEVELS`].
fn init_tracing() {
    fn enabled(level: log::Level, stderr: bool) -> bool {
        STDERR_LEVELS.contains(&level) == stderr
            && LOG_LEVEL.get().copied().unwrap_or(log::Level::INFO) >= level
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_thread_names(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span() || enabled(*meta.level(), false)
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_thread_names(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span() || enabled(*meta.level(), true)
                })),
        )
        .init();
}

async fn start() -> Result<(), ()> {
    let Args { config } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config {
        service,
        server,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let (service, background) = Service::new(service.into(), Memory::new());

    let app = traced(application::router(service).layer(cors(&server.cors)?));

    let addr = (server.host.clone(), server.port);
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        log::error!(
            "failed to listen on `{}:{}`: {e}",
            server.host,
            server.port,
        );
    })?;
    log::info!("listening on `{}:{}`", server.host, server.port);

    let serve = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .into_future();

    // Background tasks run forever, so they're dropped once the server stops.
    tokio::select! {
        res = serve => res.map_err(|e| log::error!("webserver failed: {e}")),
        res = background.into_future() => {
            res.map_err(|e| log::error!("background task failed: {e}"))
        }
    }?;

    log::info!("shut down gracefully");
    Ok(())
}

/// Builds a [`CorsLayer`] allowing GraphQL requests from the configured
/// origins.
///
/// A `*` origin allows any origin.
fn cors(cfg: &config::Cors) -> Result<CorsLayer, ()> {
    let origins = if cfg.origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        cfg.origins
            .iter()
            .map(|origin| {
                origin.parse::<http::header::HeaderValue>().map_err(|e| {
                    log::error!("`{origin}` is not a correct CORS origin: {e}");
                })
            })
            .collect::<Result<Vec<_>, _>>()?
            .into()
    };

    Ok(CorsLayer::new()
        .allow_methods([
            http::Method::GET,
            http::Method::OPTIONS,
            http::Method::POST,
        ])
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_origin(origins))
}

/// Wraps the provided [`Router`] into an `HTTP request` span, recording the
/// response status and duration.
fn traced(app: Router) -> Router {
    app.layer(
        TraceLayer::new_for_http()
            .make_span_with(|r: &http::Request<_>| {
                log::info_span!(
                    "HTTP request",
                    http.client_ip =
                        InsecureClientIp::from(r.headers(), r.extensions())
                            .map(|ip| ip.0.to_string())
                            .ok(),
                    http.method = r.method().as_str(),
                    http.route = r
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str),
                    http.target = r
                        .uri()
                        .path_and_query()
                        .map(http::uri::PathAndQuery::as_str),
                    http.user_agent = r
                        .headers()
                        .get(http::header::USER_AGENT)
                        .and_then(|h| h.to_str().ok()),
                    http.status_code = log::field::Empty,
                )
            })
            .on_response(
                |r: &http::Response<_>, dur: Duration, span: &log::Span| {
                    let status = r.status();
                    _ = span.record(
                        "http.status_code",
                        log::field::display(status.as_u16()),
                    );
                    let duration = format!("{}ms", dur.as_millis());
                    if status.is_server_error() {
                        log::error!(duration = %duration, "request failed");
                    } else if status.is_client_error() {
                        log::warn!(duration = %duration, "request rejected");
                    } else {
                        log::info!(duration = %duration, "request served");
                    }
                },
            ),
    )
}

/// Resolves once `Ctrl+C` is received, or never if the signal handler cannot
/// be installed.
async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => log::info!("received `Ctrl+C`, shutting down"),
        Err(e) => {
            log::warn!("failed to listen for `Ctrl+C`: {e}");
            future::pending::<()>().await;
        }
    }
}
