//! Page rewrite endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::proxy::RewrittenPage;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct FetchRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResponse {
    pub success: bool,
    pub content: String,
    pub title: String,
    pub original_url: String,
}

impl From<RewrittenPage> for FetchResponse {
    fn from(page: RewrittenPage) -> Self {
        Self {
            success: true,
            content: page.content,
            title: page.title,
            original_url: page.original_url,
        }
    }
}

/// Fetch a page and return it with the target word replaced
///
/// A request without a JSON body is treated like `{}`.
pub async fn fetch_page(
    State(state): State<AppState>,
    payload: std::result::Result<Json<FetchRequest>, JsonRejection>,
) -> Result<Json<FetchResponse>> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(JsonRejection::MissingJsonContentType(_)) => FetchRequest::default(),
        Err(rejection) => return Err(AppError::BadRequest(rejection.body_text())),
    };

    let page = state
        .proxy()
        .handle_fetch_request(request.url.as_deref())
        .await?;

    tracing::info!(
        "Rewrote {} ({} text nodes changed)",
        page.original_url,
        page.rewritten_nodes
    );

    Ok(Json(page.into()))
}
