/// A single seat in the chart grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Seat {
    pub reserved: bool,
    /// Manhattan distance to the ideal seat, fixed at construction
    pub distance: f64,
}

impl Seat {
    pub fn new(distance: f64) -> Self {
        Self {
            reserved: false,
            distance,
        }
    }
}

/// A seat coordinate (1-based) together with its distance from the ideal seat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeatLocation {
    pub row: usize,
    pub seat: usize,
    pub distance: f64,
}

impl SeatLocation {
    pub fn new(row: usize, seat: usize, distance: f64) -> Self {
        Self {
            row,
            seat,
            distance,
        }
    }
}

/// How far the leftward half of the adjacency scan reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Stops at seat 2; seat 1 is only reachable as an anchor or by the rightward scan.
    #[default]
    Compatible,
    /// Scans all the way to seat 1.
    Full,
}

impl ScanMode {
    /// Lowest seat index the leftward scan examines.
    pub(crate) fn left_limit(self) -> usize {
        match self {
            ScanMode::Compatible => 2,
            ScanMode::Full => 1,
        }
    }
}
