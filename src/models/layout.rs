use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatCategory {
    Standard,
    Premium,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: String,
    pub category: SeatCategory,
}

// A slot is either a seat or an aisle (None)
pub type SeatRow = Vec<Option<Seat>>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("seat at row {row}, column {col} has an empty id")]
    EmptyId { row: usize, col: usize },
    #[error("duplicate seat id '{0}' in layout")]
    DuplicateId(String),
}

/// Rectangular hall layout: ordered rows of slots. Immutable after
/// construction; `new` enforces non-empty, unique seat ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SeatLayout {
    rows: Vec<SeatRow>,
}

impl SeatLayout {
    pub fn new(rows: Vec<SeatRow>) -> Result<Self, LayoutError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for (row_idx, row) in rows.iter().enumerate() {
            for (col_idx, slot) in row.iter().enumerate() {
                let Some(seat) = slot else { continue };
                if seat.id.trim().is_empty() {
                    return Err(LayoutError::EmptyId { row: row_idx, col: col_idx });
                }
                if !seen.insert(seat.id.as_str()) {
                    return Err(LayoutError::DuplicateId(seat.id.clone()));
                }
            }
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[SeatRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of real seats across all rows (aisles excluded).
    pub fn seat_count(&self) -> usize {
        self.rows.iter().map(|r| r.iter().flatten().count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.seat_count() == 0
    }

    pub fn contains(&self, seat_id: &str) -> bool {
        self.rows
            .iter()
            .flat_map(|r| r.iter().flatten())
            .any(|s| s.id == seat_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(id: &str) -> Option<Seat> {
        Some(Seat { id: id.to_string(), category: SeatCategory::Standard })
    }

    #[test]
    fn counts_seats_and_skips_aisles() {
        let layout = SeatLayout::new(vec![
            vec![seat("A1"), None, seat("A2")],
            vec![seat("B1")],
        ])
        .unwrap();
        assert_eq!(layout.row_count(), 2);
        assert_eq!(layout.seat_count(), 3);
        assert!(layout.contains("A2"));
        assert!(!layout.contains("C1"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = SeatLayout::new(vec![vec![seat("A1")], vec![seat("A1")]]).unwrap_err();
        assert_eq!(err, LayoutError::DuplicateId("A1".to_string()));
    }

    #[test]
    fn rejects_blank_ids() {
        let err = SeatLayout::new(vec![vec![seat("  ")]]).unwrap_err();
        assert_eq!(err, LayoutError::EmptyId { row: 0, col: 0 });
    }

    #[test]
    fn layout_with_only_aisles_is_empty() {
        let layout = SeatLayout::new(vec![vec![None, None]]).unwrap();
        assert!(layout.is_empty());
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&SeatCategory::Premium).unwrap();
        assert_eq!(json, "\"premium\"");
    }
}
