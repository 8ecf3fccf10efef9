use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeatingError {
    #[error("Invalid chart dimensions: {rows} rows x {seats_per_row} seats per row")]
    InvalidDimension { rows: usize, seats_per_row: usize },

    #[error("Seat ({row}, {seat}) is outside the chart")]
    OutOfRange { row: usize, seat: usize },

    #[error("No block of {count} adjacent seats is available")]
    NotFound { count: usize },

    #[error("Group size must be at least 1")]
    InvalidGroupSize,

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid seat specification: {0}")]
    InvalidSeatSpec(String),

    #[error("Failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create file {path}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    EnvVar(#[from] std::env::VarError),
}

pub type Result<T> = std::result::Result<T, SeatingError>;
