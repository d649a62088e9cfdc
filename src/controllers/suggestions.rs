use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use crate::allocator::{suggest_block, AllocationError, Suggestion};
use crate::models::{SeatLayout, SeatRow};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/halls/{id}/suggest", post(suggest_for_hall))
        .route("/suggest", post(suggest_stateless))
}

#[derive(Debug, Deserialize)]
struct SuggestRequest {
    count: u32,
    /// Server-confirmed booked seats at the time of the call.
    #[serde(default)]
    booked: Vec<String>,
    /// Seats already chosen by the user in this session.
    #[serde(default)]
    selected: Vec<String>,
}

fn run_allocator(
    state: &AppState,
    layout: &SeatLayout,
    req: &SuggestRequest,
) -> Result<Suggestion, (StatusCode, String)> {
    if req.count > state.config.allocator.max_group {
        return Err((
            StatusCode::BAD_REQUEST,
            format!(
                "count {} exceeds the configured limit of {}",
                req.count, state.config.allocator.max_group
            ),
        ));
    }

    let excluded: HashSet<&str> = req
        .booked
        .iter()
        .chain(req.selected.iter())
        .map(String::as_str)
        .collect();

    suggest_block(layout, |id| excluded.contains(id), req.count).map_err(allocation_status)
}

fn allocation_status(err: AllocationError) -> (StatusCode, String) {
    match err {
        AllocationError::NoBlockFound { .. } => (
            StatusCode::CONFLICT,
            format!("{err}; reduce the count or pick seats manually"),
        ),
        _ => (StatusCode::BAD_REQUEST, err.to_string()),
    }
}

// POST /api/halls/{id}/suggest
async fn suggest_for_hall(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<SuggestRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let hall = state
        .halls
        .get(&id)
        .await
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("hall {id} not found")))?;

    let suggestion = run_allocator(&state, &hall.layout, &req)?;
    tracing::debug!(hall_id = %id, row = suggestion.row, count = req.count, "suggested block");
    Ok((StatusCode::OK, Json(suggestion)))
}

// POST /api/suggest
#[derive(Debug, Deserialize)]
struct StatelessSuggestRequest {
    rows: Vec<SeatRow>,
    #[serde(flatten)]
    request: SuggestRequest,
}

async fn suggest_stateless(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StatelessSuggestRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if !state.config.features.enable_stateless_suggest {
        return Err((
            StatusCode::NOT_FOUND,
            "stateless suggestions are disabled".to_string(),
        ));
    }

    let layout = SeatLayout::new(req.rows)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    let suggestion = run_allocator(&state, &layout, &req.request)?;
    Ok((StatusCode::OK, Json(suggestion)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AllocatorConfig, AppConfig, Config, FeatureFlags};
    use crate::models::{Seat, SeatCategory};

    fn test_state() -> AppState {
        AppState {
            halls: crate::registry::HallRegistry::new(),
            config: Config {
                app: AppConfig {
                    host: "127.0.0.1".to_string(),
                    port: 0,
                    environment: "test".to_string(),
                    rust_log: "seatpick=debug".to_string(),
                },
                allocator: AllocatorConfig { max_group: 4 },
                features: FeatureFlags { enable_stateless_suggest: true },
            },
        }
    }

    fn layout(ids: &[&str]) -> SeatLayout {
        SeatLayout::new(vec![ids
            .iter()
            .map(|id| {
                Some(Seat { id: id.to_string(), category: SeatCategory::Standard })
            })
            .collect()])
        .unwrap()
    }

    #[test]
    fn configured_limit_caps_requests_below_the_hard_limit() {
        let state = test_state();
        let req = SuggestRequest { count: 5, booked: vec![], selected: vec![] };
        let (status, message) = run_allocator(&state, &layout(&["A1", "A2"]), &req).unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(message.contains("configured limit"));
    }

    #[test]
    fn booked_and_selected_are_both_excluded() {
        let state = test_state();
        let req = SuggestRequest {
            count: 1,
            booked: vec!["A2".to_string()],
            selected: vec!["A3".to_string()],
        };
        let s = run_allocator(&state, &layout(&["A1", "A2", "A3"]), &req).unwrap();
        assert_eq!(s.seats, vec!["A1"]);
    }

    #[test]
    fn no_block_maps_to_conflict() {
        let state = test_state();
        let req = SuggestRequest {
            count: 2,
            booked: vec!["A2".to_string()],
            selected: vec![],
        };
        let (status, message) = run_allocator(&state, &layout(&["A1", "A2", "A3"]), &req).unwrap_err();
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(message.contains("pick seats manually"));
    }

    #[test]
    fn invalid_count_maps_to_bad_request() {
        let state = test_state();
        let req = SuggestRequest { count: 0, booked: vec![], selected: vec![] };
        let (status, _) = run_allocator(&state, &layout(&["A1"]), &req).unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
