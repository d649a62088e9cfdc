pub mod hall;
pub mod layout;

pub use hall::Hall;
pub use layout::{LayoutError, Seat, SeatCategory, SeatLayout, SeatRow};
