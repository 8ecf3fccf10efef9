use crate::error::{Result, SeatingError};
use crate::seat::ScanMode;
use std::{
    env::{self, VarError},
    path::PathBuf,
};

const ENV_ROWS: &str = "SEATING_CHART_ROWS";
const ENV_SEATS_PER_ROW: &str = "SEATING_CHART_SEATS_PER_ROW";
const ENV_RESERVED: &str = "SEATING_CHART_RESERVED";
const ENV_GROUPS: &str = "SEATING_CHART_GROUPS";
const ENV_FULL_LEFT_SCAN: &str = "SEATING_CHART_FULL_LEFT_SCAN";
const ENV_OUTPUT_DIR: &str = "SEATING_CHART_OUTPUT_DIR";

const DEFAULT_ROWS: usize = 10;
const DEFAULT_SEATS_PER_ROW: usize = 20;
const DEFAULT_OUTPUT_DIR: &str = "csv";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub rows: usize,
    pub seats_per_row: usize,
    /// Seats reserved before any group is seated, as (row, seat)
    pub reserved: Vec<(usize, usize)>,
    /// Group sizes to seat, in order
    pub groups: Vec<usize>,
    pub scan_mode: ScanMode,
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            seats_per_row: DEFAULT_SEATS_PER_ROW,
            reserved: Vec::new(),
            groups: Vec::new(),
            scan_mode: ScanMode::default(),
            output_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_source(|key| match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(e) => Err(e.into()),
        })
    }

    /// Builds a config from any key lookup. Blank values count as unset.
    pub fn from_source<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Result<Option<String>>,
    {
        let get = |key: &str| -> Result<Option<String>> {
            Ok(lookup(key)?.filter(|v| !v.trim().is_empty()))
        };

        let mut config = Self::default();

        if let Some(value) = get(ENV_ROWS)? {
            config.rows = parse_positive(ENV_ROWS, &value)?;
        }
        if let Some(value) = get(ENV_SEATS_PER_ROW)? {
            config.seats_per_row = parse_positive(ENV_SEATS_PER_ROW, &value)?;
        }
        if let Some(value) = get(ENV_RESERVED)? {
            config.reserved = parse_seat_list(&value)?;
        }
        if let Some(value) = get(ENV_GROUPS)? {
            config.groups = value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| parse_positive(ENV_GROUPS, s))
                .collect::<Result<_>>()?;
        }
        if let Some(value) = get(ENV_FULL_LEFT_SCAN)?
            && parse_bool(ENV_FULL_LEFT_SCAN, &value)?
        {
            config.scan_mode = ScanMode::Full;
        }

        if let Some(output_dir) = get(ENV_OUTPUT_DIR)? {
            let path = PathBuf::from(output_dir);

            // If the path already exists but is not a directory, reject early.
            if path.exists() && !path.is_dir() {
                return Err(SeatingError::InvalidConfiguration(format!(
                    "Output path is not a directory: {}",
                    path.display()
                )));
            }
            config.output_dir = Some(path);
        } else {
            config.output_dir = Some(PathBuf::from(DEFAULT_OUTPUT_DIR));
        }

        Ok(config)
    }
}

fn parse_positive(key: &str, value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(SeatingError::InvalidConfiguration(format!(
            "{key} must be a positive integer, got '{}'",
            value.trim()
        ))),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(SeatingError::InvalidConfiguration(format!(
            "{key} must be true or false, got '{other}'"
        ))),
    }
}

/// Parses a comma-separated list of `row:seat` pairs.
pub fn parse_seat_list(value: &str) -> Result<Vec<(usize, usize)>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|spec| -> Result<(usize, usize)> {
            let (row, seat) = spec
                .split_once(':')
                .ok_or_else(|| SeatingError::InvalidSeatSpec(spec.to_string()))?;
            let row = row
                .trim()
                .parse::<usize>()
                .map_err(|_| SeatingError::InvalidSeatSpec(spec.to_string()))?;
            let seat = seat
                .trim()
                .parse::<usize>()
                .map_err(|_| SeatingError::InvalidSeatSpec(spec.to_string()))?;
            Ok((row, seat))
        })
        .collect()
}
