use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::models::Hall;

/// In-memory hall store shared across handlers. Cheap to clone; all clones
/// see the same map.
#[derive(Clone, Default)]
pub struct HallRegistry {
    inner: Arc<RwLock<HashMap<Uuid, Hall>>>,
}

impl HallRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, hall: Hall) -> Uuid {
        let id = hall.id;
        info!(hall_id = %id, name = %hall.name, seats = hall.layout.seat_count(), "hall registered");
        self.inner.write().await.insert(id, hall);
        id
    }

    pub async fn get(&self, id: &Uuid) -> Option<Hall> {
        self.inner.read().await.get(id).cloned()
    }

    /// All halls, newest first.
    pub async fn list(&self) -> Vec<Hall> {
        let mut halls: Vec<Hall> = self.inner.read().await.values().cloned().collect();
        halls.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        halls
    }

    pub async fn remove(&self, id: &Uuid) -> bool {
        let removed = self.inner.write().await.remove(id).is_some();
        if removed {
            info!(hall_id = %id, "hall removed");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Hall, Seat, SeatCategory, SeatLayout};

    fn hall(name: &str) -> Hall {
        let layout = SeatLayout::new(vec![vec![Some(Seat {
            id: format!("{name}-1"),
            category: SeatCategory::Standard,
        })]])
        .unwrap();
        Hall::new(name.to_string(), layout)
    }

    #[tokio::test]
    async fn insert_get_remove() {
        let registry = HallRegistry::new();
        let id = registry.insert(hall("main")).await;
        assert_eq!(registry.len().await, 1);

        let stored = registry.get(&id).await.unwrap();
        assert_eq!(stored.name, "main");

        assert!(registry.remove(&id).await);
        assert!(!registry.remove(&id).await);
        assert!(registry.get(&id).await.is_none());
    }

    #[tokio::test]
    async fn clones_share_state() {
        let registry = HallRegistry::new();
        let other = registry.clone();
        let id = registry.insert(hall("shared")).await;
        assert!(other.get(&id).await.is_some());
    }
}
