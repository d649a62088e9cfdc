//! Contiguous-block seat allocator.
//!
//! Given a hall layout and an availability predicate, suggests one contiguous
//! block of `k` seats in a single row, preferring rows near the visual center
//! and, within a row, the block closest to the row's horizontal center.
//!
//! Pure and synchronous: no I/O, no shared state, identical inputs always
//! produce identical output.

use serde::Serialize;
use thiserror::Error;

use crate::models::SeatLayout;

/// Upper bound on one suggestion request.
pub const MAX_GROUP_SIZE: u32 = 30;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllocationError {
    #[error("requested count {got} is outside the allowed range 1..={max}")]
    CountOutOfRange { got: u32, max: u32 },
    #[error("seat layout has no seats")]
    EmptyLayout,
    #[error("no contiguous block of {count} available seats in any row")]
    NoBlockFound { count: u32 },
}

impl AllocationError {
    /// True for errors the caller must fix before retrying, as opposed to
    /// `NoBlockFound`, which asks the user to lower the count or pick manually.
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            AllocationError::CountOutOfRange { .. } | AllocationError::EmptyLayout
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    /// Seat ids in left-to-right order within the row.
    pub seats: Vec<String>,
    /// Index of the row the block was found in.
    pub row: usize,
    /// Distance between the block midpoint and the row center; lower is better.
    pub score: f64,
}

/// Row scan order radiating outward from the center row: center first, then
/// alternately one row above and one below at each offset (above wins the tie).
/// For 5 rows this is `[2, 1, 3, 0, 4]`.
pub fn row_visit_order(row_count: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(row_count);
    if row_count == 0 {
        return order;
    }
    let center = row_count / 2;
    order.push(center);
    let mut offset = 1;
    while order.len() < row_count {
        if center >= offset {
            order.push(center - offset);
        }
        if center + offset < row_count {
            order.push(center + offset);
        }
        offset += 1;
    }
    order
}

/// Suggest one contiguous block of `count` available seats.
///
/// `unavailable` must return true for seats that are booked or already in the
/// user's current selection. Contiguity is measured among real seats only:
/// an aisle between two seats neither breaks nor widens a block.
///
/// Scans rows in [`row_visit_order`] and stops at the first row that holds any
/// valid window, returning that row's best-centered one (ties go to the
/// leftmost). Does not look further: a farther row might hold a better-centered
/// block, and that is accepted behavior.
pub fn suggest_block<F>(
    layout: &SeatLayout,
    unavailable: F,
    count: u32,
) -> Result<Suggestion, AllocationError>
where
    F: Fn(&str) -> bool,
{
    if count == 0 || count > MAX_GROUP_SIZE {
        return Err(AllocationError::CountOutOfRange { got: count, max: MAX_GROUP_SIZE });
    }
    if layout.is_empty() {
        return Err(AllocationError::EmptyLayout);
    }

    let k = count as usize;
    for row_idx in row_visit_order(layout.row_count()) {
        // Seats only, in column order; aisles drop out of adjacency here.
        let seats: Vec<&crate::models::Seat> =
            layout.rows()[row_idx].iter().flatten().collect();
        let m = seats.len();
        if m < k {
            continue;
        }

        let row_center = m as f64 / 2.0;
        let mut best: Option<(f64, usize)> = None;
        for start in 0..=m - k {
            let window = &seats[start..start + k];
            if window.iter().any(|s| unavailable(&s.id)) {
                continue;
            }
            let midpoint = start as f64 + (k as f64 - 1.0) / 2.0;
            let score = (midpoint - row_center).abs();
            // Strict comparison keeps the earliest window on ties.
            if best.map_or(true, |(best_score, _)| score < best_score) {
                best = Some((score, start));
            }
        }

        if let Some((score, start)) = best {
            return Ok(Suggestion {
                seats: seats[start..start + k].iter().map(|s| s.id.clone()).collect(),
                row: row_idx,
                score,
            });
        }
    }

    Err(AllocationError::NoBlockFound { count })
}
