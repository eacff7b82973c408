use axum::{
    extract::{Form, FromRequest, Multipart, Path as AxumPath, Query, Request, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::components::TemplateComponent;
use crate::errors::WikiError;
use crate::services::{FileService, PageService};
use crate::types::{AppState, Page, PageList, ViewModel};
use crate::utils::{encode_path_segment, ensure_valid_title};

/// Form submitted by the edit page
#[derive(Debug, Deserialize)]
pub struct SaveForm {
    pub body: Option<String>,
}

/// Handle `GET /view/{title}`: render the page, or send the user to edit it
pub async fn handle_view(
    State(state): State<AppState>,
    AxumPath(title): AxumPath<String>,
) -> Result<Response, WikiError> {
    log::info!("View request received: '{}'", title);
    ensure_valid_title(&title)?;

    let pages = PageService::new(state.pages_dir.as_ref().clone());
    let page = match pages.load(&title) {
        Ok(page) => page,
        Err(_) => {
            log::info!("Page '{}' not found, redirecting to editor", title);
            return Ok(found(&format!("/edit/{}", encode_path_segment(&title))));
        }
    };

    let templates = TemplateComponent::new(state.template_dir.as_ref().clone());
    let html = templates.render(&ViewModel::View(page))?;
    Ok(Html(html).into_response())
}

/// Handle `GET /edit/{title}`: render the edit form, empty when the page does not exist
pub async fn handle_edit(
    State(state): State<AppState>,
    AxumPath(title): AxumPath<String>,
) -> Result<Response, WikiError> {
    log::info!("Edit request received: '{}'", title);
    ensure_valid_title(&title)?;

    let pages = PageService::new(state.pages_dir.as_ref().clone());
    let page = pages.load(&title).unwrap_or_else(|_| {
        log::debug!("Page '{}' not found, editing empty page", title);
        Page::empty(title.as_str())
    });

    let templates = TemplateComponent::new(state.template_dir.as_ref().clone());
    let html = templates.render(&ViewModel::Edit(page))?;
    Ok(Html(html).into_response())
}

/// Handle `POST /save/{title}`: store the submitted body and redirect to the page
///
/// A failed write is logged but not reported; the client is always redirected.
pub async fn handle_save(
    State(state): State<AppState>,
    AxumPath(title): AxumPath<String>,
    request: Request,
) -> Result<Response, WikiError> {
    let body = body_field(request).await;
    log::info!("Save request received: '{}' ({} bytes)", title, body.len());
    ensure_valid_title(&title)?;

    let pages = PageService::new(state.pages_dir.as_ref().clone());
    let page = Page::new(title.as_str(), body);
    if let Err(e) = pages.save(&page) {
        log::warn!("Failed to save page '{}': {}", title, e);
    }

    Ok(found(&format!("/view/{}", encode_path_segment(&title))))
}

/// The `body` field from a url-encoded or multipart request body, else from the
/// query string, else empty
async fn body_field(request: Request) -> String {
    let from_query = Query::<SaveForm>::try_from_uri(request.uri())
        .ok()
        .and_then(|Query(form)| form.body);

    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"));

    let from_body = if is_multipart {
        multipart_body_field(request).await
    } else {
        match Form::<SaveForm>::from_request(request, &()).await {
            Ok(Form(form)) => form.body,
            Err(rejection) => {
                log::debug!("No form body in save request: {}", rejection);
                None
            }
        }
    };

    from_body.or(from_query).unwrap_or_default()
}

async fn multipart_body_field(request: Request) -> Option<String> {
    let mut multipart = match Multipart::from_request(request, &()).await {
        Ok(multipart) => multipart,
        Err(rejection) => {
            log::debug!("Unreadable multipart save request: {}", rejection);
            return None;
        }
    };

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("body") {
            return field.text().await.ok();
        }
    }
    None
}

/// Handle `GET /`: list every stored page
pub async fn handle_list(State(state): State<AppState>) -> Result<Response, WikiError> {
    log::info!("List request received");

    let files = FileService::new(state.pages_dir.as_ref().clone());
    let titles = files.list_titles().map_err(|e| {
        log::error!("Listing pages failed: {}", e);
        e
    })?;

    let templates = TemplateComponent::new(state.template_dir.as_ref().clone());
    let html = templates.render(&ViewModel::List(PageList { titles }))?;
    Ok(Html(html).into_response())
}

/// 302 Found to `location`
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
