pub mod charts;
pub mod config;
pub mod error;
pub mod feedback;
pub mod field;
pub mod leaderboard;
pub mod models;
pub mod presets;
pub mod profile;
pub mod sample_data;

pub use error::{Error, Result};
