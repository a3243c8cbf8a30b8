use actix_web::dev::Server;
use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, Responder, ResponseError, get, web};
use serde::Deserialize;
use serde_json::json;

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::state::DashboardState;

// ---------------------------------------------------------------------------
// HTTP handlers
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct ChartsQuery {
    #[serde(default)]
    year: String,
}

#[get("/")]
async fn index(state: web::Data<DashboardState>) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(state.page())
}

/// Callback behind the year input: one year in, five charts out.
#[get("/api/charts")]
async fn charts(
    state: web::Data<DashboardState>,
    query: web::Query<ChartsQuery>,
) -> Result<HttpResponse, DashboardError> {
    let rendered = state.render(&query.year)?;
    Ok(HttpResponse::Ok().json(rendered))
}

impl ResponseError for DashboardError {
    fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::Parse(_) => StatusCode::BAD_REQUEST,
            DashboardError::Load(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

// ---------------------------------------------------------------------------
// Server
// ---------------------------------------------------------------------------

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(charts);
}

/// Bind the dashboard and return the running server.
///
/// A single worker handles every request, so year changes are processed one
/// at a time against the shared dataset.
pub fn start_server(
    state: web::Data<DashboardState>,
    config: &DashboardConfig,
) -> std::io::Result<Server> {
    let server = HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .workers(1)
        .bind((config.host.as_str(), config.port))?
        .run();

    Ok(server)
}
