use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    extract::{ConnectInfo, State},
    http::{HeaderMap, Method, StatusCode, Uri, header::LOCATION},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tracing::error;

use crate::{
    bait_pages::domain::{
        model::{enums::bait_page::BaitPage, queries::render_bait_page_query::RenderBaitPageQuery},
        services::bait_page_query_service::BaitPageQueryService,
    },
    capture::{
        domain::{
            model::{
                commands::capture_request_command::CaptureRequestCommand,
                enums::{
                    capture_domain_error::CaptureDomainError,
                    login_response_mode::LoginResponseMode,
                },
                value_objects::{captured_headers::CapturedHeaders, client_address::ClientAddress},
            },
            services::request_capture_command_service::RequestCaptureCommandService,
        },
        interfaces::rest::resources::login_request_resource::LoginRequestResource,
    },
};

pub const LOGIN_PATH: &str = "/login";
pub const BANK_PATH: &str = "/bank";
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

#[derive(Clone)]
pub struct HoneypotRestControllerState {
    pub capture_service: Arc<dyn RequestCaptureCommandService>,
    pub bait_page_service: Arc<dyn BaitPageQueryService>,
    pub login_response: LoginResponseMode,
}

pub fn router(state: HoneypotRestControllerState) -> Router {
    Router::new()
        .route(
            LOGIN_PATH,
            get(get_login_page)
                .post(submit_login)
                .fallback(capture_probe),
        )
        .route(BANK_PATH, get(get_bank_page).fallback(capture_probe))
        .fallback(capture_probe)
        .with_state(state)
}

pub async fn get_login_page(State(state): State<HoneypotRestControllerState>) -> Html<String> {
    render(&state, BaitPage::Login).await
}

pub async fn get_bank_page(State(state): State<HoneypotRestControllerState>) -> Html<String> {
    render(&state, BaitPage::Bank).await
}

pub async fn submit_login(
    State(state): State<HoneypotRestControllerState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    request: LoginRequestResource,
) -> Result<Response, (StatusCode, Html<&'static str>)> {
    let command = CaptureRequestCommand::login_attempt(
        method.as_str(),
        request_path(&uri),
        captured_headers(&headers),
        request.into_credentials(),
        client_address(&headers, connect_info),
    );

    state
        .capture_service
        .handle_capture(command)
        .await
        .map_err(map_domain_error)?;

    Ok(match state.login_response {
        LoginResponseMode::RedirectToBank => (StatusCode::FOUND, [(LOCATION, BANK_PATH)]).into_response(),
        LoginResponseMode::InvalidCredentials => {
            render(&state, BaitPage::InvalidCredentials).await.into_response()
        }
    })
}

pub async fn capture_probe(
    State(state): State<HoneypotRestControllerState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Result<(StatusCode, Html<String>), (StatusCode, Html<&'static str>)> {
    let command = CaptureRequestCommand::probe(
        method.as_str(),
        request_path(&uri),
        captured_headers(&headers),
        client_address(&headers, connect_info),
    );

    state
        .capture_service
        .handle_capture(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::NOT_FOUND, render(&state, BaitPage::NotFound).await))
}

async fn render(state: &HoneypotRestControllerState, page: BaitPage) -> Html<String> {
    let content = state
        .bait_page_service
        .handle_render(RenderBaitPageQuery::new(page))
        .await;

    Html(content.into_html())
}

fn request_path(uri: &Uri) -> String {
    uri.path_and_query()
        .map(|path_and_query| path_and_query.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}

fn captured_headers(headers: &HeaderMap) -> CapturedHeaders {
    CapturedHeaders::from_pairs(headers.iter().map(|(name, value)| {
        (
            name.as_str(),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        )
    }))
}

fn client_address(
    headers: &HeaderMap,
    connect_info: Option<ConnectInfo<SocketAddr>>,
) -> ClientAddress {
    let forwarded_for = headers
        .get(FORWARDED_FOR_HEADER)
        .map(|value| String::from_utf8_lossy(value.as_bytes()));

    ClientAddress::resolve(
        forwarded_for.as_deref(),
        connect_info.map(|ConnectInfo(peer)| peer),
    )
}

fn map_domain_error(error: CaptureDomainError) -> (StatusCode, Html<&'static str>) {
    error!(%error, "capture pipeline failed");

    match error {
        CaptureDomainError::PersistenceError(_) => (StatusCode::INTERNAL_SERVER_ERROR, Html("")),
    }
}
