use std::{net::SocketAddr, sync::Arc};

use axum::{
    body::HttpBody,
    extract::{ConnectInfo, Request, State},
    http::{
        HeaderMap,
        header::{CONTENT_LENGTH, HeaderName, REFERER, USER_AGENT},
    },
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::warn;

use crate::shared::infrastructure::logging::access_log_writer::{AccessLogEntry, AccessLogWriter};

pub async fn record_access(
    State(writer): State<Arc<AccessLogWriter>>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    request: Request,
    next: Next,
) -> Response {
    let time = Utc::now();
    let remote_addr = connect_info
        .map(|ConnectInfo(peer)| peer.ip().to_canonical().to_string())
        .unwrap_or_else(|| "-".to_string());
    let method = request.method().to_string();
    let uri = request.uri().to_string();
    let http_version = format!("{:?}", request.version());
    let referer = header_value(request.headers(), REFERER);
    let user_agent = header_value(request.headers(), USER_AGENT);

    let response = next.run(request).await;

    let entry = AccessLogEntry {
        remote_addr,
        time,
        method,
        uri,
        http_version,
        status: response.status().as_u16(),
        content_length: response
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse().ok())
            .or_else(|| response.body().size_hint().exact()),
        referer,
        user_agent,
    };

    if let Err(error) = writer.write_entry(&entry).await {
        warn!(%error, path = %writer.path().display(), "failed to write access log entry");
    }

    response
}

fn header_value(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}
