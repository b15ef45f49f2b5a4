//! Web module - single-question form and JSON API
//!
//! - `GET /` / `POST /`: HTML form, answer rendered as `Response: ...`
//! - `POST /api/ask`: ask the agent, JSON in and out
//! - `GET /api/tools`, `POST /api/tools/{name}`: list and run tools directly
//! - `GET /health`

mod page;

pub use page::{Page, PageContext, PAGE_TITLE};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::agent::Assistant;
use crate::config::ServerConfig;
use crate::error::{Error, Result};
use crate::tools::{ToolCall, ToolRegistry};

// ---- App State ----

#[derive(Clone)]
pub struct WebState {
    assistant: Arc<dyn Assistant>,
    registry: ToolRegistry,
    page: Arc<Page>,
}

impl WebState {
    pub fn new(assistant: Arc<dyn Assistant>, registry: ToolRegistry) -> Result<Self> {
        Ok(WebState {
            assistant,
            registry,
            page: Arc::new(Page::new()?),
        })
    }
}

// ---- Error Handling ----

struct AppError(Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            e if e.is_client_error() => StatusCode::BAD_REQUEST,
            Error::Provider(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        AppError(err)
    }
}

// ---- Request / Response Types ----

#[derive(Deserialize)]
pub struct AskForm {
    #[serde(default)]
    question: String,
}

#[derive(Deserialize)]
pub struct AskRequest {
    question: String,
}

#[derive(Serialize)]
struct AskResponse {
    answer: String,
    model: String,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    description: String,
}

#[derive(Deserialize)]
pub struct ToolRequest {
    input: String,
}

#[derive(Serialize)]
struct ToolResponse {
    tool: String,
    output: String,
}

// ---- Handlers ----

fn html(status: StatusCode, body: String) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        body,
    )
        .into_response()
}

async fn serve_index(State(state): State<WebState>) -> std::result::Result<Response, AppError> {
    let body = state.page.render(&PageContext {
        model: state.assistant.model(),
        ..Default::default()
    })?;
    Ok(html(StatusCode::OK, body))
}

async fn submit_form(
    State(state): State<WebState>,
    Form(form): Form<AskForm>,
) -> std::result::Result<Response, AppError> {
    let question = form.question.trim();
    let model = state.assistant.model();

    if question.is_empty() {
        let body = state.page.render(&PageContext {
            model,
            ..Default::default()
        })?;
        return Ok(html(StatusCode::OK, body));
    }

    info!(question = %question, "Form question received");
    let response = match state.assistant.ask(question).await {
        Ok(answer) => {
            let body = state.page.render(&PageContext {
                question,
                response: Some(&answer),
                error: None,
                model,
            })?;
            html(StatusCode::OK, body)
        }
        Err(e) => {
            warn!(error = %e, "Form question failed");
            let message = e.to_string();
            let body = state.page.render(&PageContext {
                question,
                response: None,
                error: Some(&message),
                model,
            })?;
            html(StatusCode::BAD_GATEWAY, body)
        }
    };
    Ok(response)
}

async fn api_ask(
    State(state): State<WebState>,
    Json(req): Json<AskRequest>,
) -> std::result::Result<Json<AskResponse>, AppError> {
    let question = req.question.trim();
    if question.is_empty() {
        return Err(Error::InvalidInput("question must not be empty".to_string()).into());
    }

    let answer = state.assistant.ask(question).await?;
    Ok(Json(AskResponse {
        answer,
        model: state.assistant.model().to_string(),
    }))
}

async fn list_tools(State(state): State<WebState>) -> Json<Vec<ToolInfo>> {
    let tools = state
        .registry
        .definitions()
        .into_iter()
        .map(|d| ToolInfo {
            name: d.name,
            description: d.description,
        })
        .collect();
    Json(tools)
}

async fn run_tool(
    State(state): State<WebState>,
    Path(name): Path<String>,
    Json(req): Json<ToolRequest>,
) -> std::result::Result<Json<ToolResponse>, AppError> {
    let call = ToolCall::new(name.as_str(), serde_json::json!({ "input": req.input }));
    let result = state.registry.execute(&call).await?;
    Ok(Json(ToolResponse {
        tool: name,
        output: result.to_output(),
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "version": crate::VERSION }))
}

// ---- Router ----

pub fn build_router(state: WebState) -> Router {
    Router::new()
        .route("/", get(serve_index).post(submit_form))
        .route("/api/ask", post(api_ask))
        .route("/api/tools", get(list_tools))
        .route("/api/tools/{name}", post(run_tool))
        .route("/health", get(health))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(state: WebState, server: &ServerConfig) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", server.bind, server.port)
        .parse()
        .map_err(|e| Error::Config(format!("Invalid bind address: {}", e)))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Question form listening on http://{}", addr);

    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
