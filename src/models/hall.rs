use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::SeatLayout;

/// A registered hall: the unit the suggestion endpoint addresses.
#[derive(Debug, Clone, Serialize)]
pub struct Hall {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub layout: SeatLayout,
}

impl Hall {
    pub fn new(name: String, layout: SeatLayout) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            created_at: Utc::now(),
            layout,
        }
    }
}
