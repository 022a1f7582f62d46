use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use np_core::{Article, Error, GeneratedPost, PromptArticle};
use np_linkedin::oauth::{self, AUTH_FAILED};
use np_linkedin::{CallbackParams, CallbackStep};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use url::Url;

use crate::error::{ApiError, ApiResult, AtEndpoint};
use crate::logging::Logger;
use crate::AppState;

const NEWS: &str = "GET /news";
const GENERATE_POST: &str = "POST /generate-post";
const AUTH: &str = "GET /auth/linkedin";
const CALLBACK: &str = "GET /auth/linkedin/callback";
const PUBLISH: &str = "POST /linkedin/post";

#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    pub keyword: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NewsResponse {
    pub articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub articles: Vec<PromptArticle>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub post: String,
}

#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    pub token: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PublishResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

fn found(url: Url) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, url.to_string())]).into_response()
}

pub async fn news(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NewsQuery>,
) -> ApiResult<Json<NewsResponse>> {
    let keyword = query
        .keyword
        .filter(|k| !k.is_empty())
        .ok_or_else(|| Error::InvalidRequest("Keyword is required".to_string()))
        .at(NEWS)?;

    let articles = state.news.search(&keyword).await.at(NEWS)?;
    Ok(Json(NewsResponse { articles }))
}

pub async fn generate_post(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> ApiResult<Json<GenerateResponse>> {
    let articles = match payload {
        Ok(Json(request)) => request.articles,
        Err(rejection) => {
            Logger::new().with_prefix(GENERATE_POST).warn(&format!("Rejected body: {}", rejection));
            Vec::new()
        }
    };
    if articles.is_empty() {
        return Err(ApiError {
            endpoint: GENERATE_POST,
            error: Error::InvalidRequest("Articles required".to_string()),
        });
    }

    let post = state
        .inference_model
        .draft_post(&articles)
        .await
        .at(GENERATE_POST)?;
    Ok(Json(GenerateResponse {
        post: post.into_inner(),
    }))
}

pub async fn linkedin_auth(State(state): State<Arc<AppState>>) -> ApiResult<Response> {
    let url = state.linkedin.authorize_url(&state.state_signer).at(AUTH)?;
    Ok(found(url))
}

pub async fn linkedin_callback(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CallbackParams>,
) -> ApiResult<Response> {
    let log = Logger::new().with_prefix(CALLBACK);

    let (key, value) = match params.step(&state.state_signer) {
        CallbackStep::Reject(message) => {
            log.warn(&format!("Authorization rejected: {}", message));
            ("error", message)
        }
        CallbackStep::Exchange { code } => match state.linkedin.exchange_code(&code).await {
            Ok(token) => {
                log.info("🔑 Access token obtained");
                ("linkedin_token", token.secret().to_string())
            }
            Err(e) => {
                let reason = e.upstream().map(|u| u.to_string()).unwrap_or_else(|| e.to_string());
                log.error(&format!("Token exchange failed: {}", reason));
                ("error", AUTH_FAILED.to_string())
            }
        },
    };

    let url = oauth::frontend_redirect(&state.config.frontend_url, key, &value).at(CALLBACK)?;
    Ok(found(url))
}

pub async fn publish_post(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PublishRequest>, JsonRejection>,
) -> ApiResult<Json<PublishResponse>> {
    let (token, content) = match payload {
        Ok(Json(request)) => (request.token, request.content),
        Err(_) => (None, None),
    };
    let post = GeneratedPost::new(token, content).at(PUBLISH)?;

    state.linkedin.publish(&post).await.at(PUBLISH)?;
    Ok(Json(PublishResponse {
        success: true,
        message: "Post published successfully".to_string(),
    }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now().to_rfc3339(),
    })
}
