pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod seat;
pub mod shared;

pub use chart::SeatingChart;
pub use config::Config;
pub use error::{Result, SeatingError};
pub use export::export_seat_map_with_path;
pub use seat::{ScanMode, Seat, SeatLocation};
pub use shared::SharedChart;
