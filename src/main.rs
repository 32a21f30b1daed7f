use std::{sync::Arc, time::Duration};

use axum::{
    body::Body,
    extract::Request,
    http::{
        Response,
        header::{CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT},
    },
};
use time::UtcOffset;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{Span, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use call_log_server::{
    app::App,
    config::ServerConfig,
    db::{apply_migrations, connect},
    layers::call_log::CallLogRepoLayer,
    utils::{get_header, get_request_id},
};

fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .flatten_event(true)
                .with_timer(fmt::time::OffsetTime::new(
                    UtcOffset::UTC,
                    time::format_description::well_known::Rfc3339,
                ))
                .with_level(true)
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .with(EnvFilter::from_default_env())
        .try_init()?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let settings = ServerConfig::load()?;
    info!(
        msg = "Loaded configuration",
        database_path = settings.database.path,
        bind_addr = settings.server.bind_addr
    );

    let pool = Arc::new(connect(&settings.database.path).await?);
    apply_migrations(&pool).await?;
    info!(msg = "Initialized database", path = %settings.database.path);

    let app = App::new()
        .router()
        .layer(CallLogRepoLayer::sqlite(pool.clone()))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                // the query string can carry the whole payload, so only the path is logged
                .on_request(|req: &Request<Body>, _span: &Span| {
                    info!(
                        msg = "Request initiated",
                        req_id = %get_request_id(req.extensions()),
                        method = %req.method(),
                        path = %req.uri().path(),
                        content_type = %get_header(req.headers(), &CONTENT_TYPE),
                        content_length = %get_header(req.headers(), &CONTENT_LENGTH),
                        user_agent = %get_header(req.headers(), &USER_AGENT),
                    )
                })
                .on_response(|res: &Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        msg = "Request processed",
                        req_id = %get_request_id(res.extensions()),
                        status = %res.status().as_u16(),
                        latency = ?latency
                    )
                }),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid::default()));

    let listener = tokio::net::TcpListener::bind(&settings.server.bind_addr).await?;

    info!(msg = "Starting server", addr = %settings.server.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
