use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Hall, SeatLayout, SeatRow};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/halls", post(create_hall))
        .route("/halls", get(list_halls))
        .route("/halls/{id}", get(get_hall))
        .route("/halls/{id}", delete(remove_hall))
}

// POST /api/halls
#[derive(Debug, Deserialize, Validate)]
struct CreateHallRequest {
    #[validate(length(min = 1, max = 120, message = "name must be 1..=120 characters"))]
    name: String,
    rows: Vec<SeatRow>,
}

#[derive(Debug, Serialize)]
struct CreateHallResponse {
    id: Uuid,
}

async fn create_hall(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateHallRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    req.validate()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let layout = SeatLayout::new(req.rows)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    if layout.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "layout must contain at least one seat".to_string(),
        ));
    }

    let id = state.halls.insert(Hall::new(req.name, layout)).await;
    Ok((StatusCode::CREATED, Json(CreateHallResponse { id })))
}

// GET /api/halls
#[derive(Debug, Serialize)]
struct HallSummary {
    id: Uuid,
    name: String,
    rows: usize,
    seats: usize,
    created_at: DateTime<Utc>,
}

async fn list_halls(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let summaries: Vec<HallSummary> = state
        .halls
        .list()
        .await
        .into_iter()
        .map(|h| HallSummary {
            id: h.id,
            name: h.name,
            rows: h.layout.row_count(),
            seats: h.layout.seat_count(),
            created_at: h.created_at,
        })
        .collect();

    (StatusCode::OK, Json(summaries))
}

// GET /api/halls/{id}
async fn get_hall(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    match state.halls.get(&id).await {
        Some(hall) => Ok((StatusCode::OK, Json(hall))),
        None => Err((StatusCode::NOT_FOUND, format!("hall {id} not found"))),
    }
}

// DELETE /api/halls/{id}
async fn remove_hall(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if state.halls.remove(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, format!("hall {id} not found")))
    }
}
