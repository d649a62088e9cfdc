pub mod halls;
pub mod suggestions;

use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(halls::routes())
        .merge(suggestions::routes())
}
