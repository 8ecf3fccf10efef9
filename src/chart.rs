use crate::error::{Result, SeatingError};
use crate::seat::{ScanMode, Seat, SeatLocation};
use log::{debug, trace};
use std::cmp::Ordering;

// The ideal seat always sits in the front row
const IDEAL_ROW: usize = 1;

/// Rectangular seating chart with reservation state and nearest-to-ideal ranking.
///
/// Coordinates are 1-based throughout: row 1 is the front row and seat 1 is
/// the leftmost seat of a row.
#[derive(Debug, Clone)]
pub struct SeatingChart {
    rows: usize,
    seats_per_row: usize,
    ideal_seat: f64,
    grid: Vec<Vec<Seat>>,
    /// Every seat ordered by distance, ties in row-major order. Never re-sorted.
    ranked: Vec<SeatLocation>,
    unreserved: usize,
    scan_mode: ScanMode,
}

impl SeatingChart {
    pub fn new(rows: usize, seats_per_row: usize) -> Result<Self> {
        Self::with_scan_mode(rows, seats_per_row, ScanMode::default())
    }

    pub fn with_scan_mode(
        rows: usize,
        seats_per_row: usize,
        scan_mode: ScanMode,
    ) -> Result<Self> {
        let capacity = rows
            .checked_mul(seats_per_row)
            .filter(|&c| c > 0)
            .ok_or(SeatingError::InvalidDimension {
                rows,
                seats_per_row,
            })?;

        let ideal_seat = (seats_per_row as f64 + 1.0) / 2.0;

        let mut grid = Vec::with_capacity(rows);
        let mut ranked = Vec::with_capacity(capacity);
        for row in 1..=rows {
            let mut seats = Vec::with_capacity(seats_per_row);
            for seat in 1..=seats_per_row {
                let distance = manhattan_distance(ideal_seat, row, seat);
                seats.push(Seat::new(distance));
                ranked.push(SeatLocation::new(row, seat, distance));
            }
            grid.push(seats);
        }

        // sort_by is stable, so equal distances keep row-major order
        ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));

        debug!(
            "Created seating chart: {rows} rows x {seats_per_row} seats, ideal seat ({IDEAL_ROW}, {ideal_seat}), scan mode {scan_mode:?}"
        );

        Ok(Self {
            rows,
            seats_per_row,
            ideal_seat,
            grid,
            ranked,
            unreserved: capacity,
            scan_mode,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn seats_per_row(&self) -> usize {
        self.seats_per_row
    }

    pub fn capacity(&self) -> usize {
        self.rows * self.seats_per_row
    }

    pub fn scan_mode(&self) -> ScanMode {
        self.scan_mode
    }

    /// Row and (possibly fractional) seat index of the ideal location.
    pub fn ideal_location(&self) -> (usize, f64) {
        (IDEAL_ROW, self.ideal_seat)
    }

    /// All seats, best first.
    pub fn ranked_seats(&self) -> &[SeatLocation] {
        &self.ranked
    }

    fn seat(&self, row: usize, seat: usize) -> Option<&Seat> {
        let row = self.grid.get(row.checked_sub(1)?)?;
        row.get(seat.checked_sub(1)?)
    }

    fn seat_mut(&mut self, row: usize, seat: usize) -> Option<&mut Seat> {
        let row = self.grid.get_mut(row.checked_sub(1)?)?;
        row.get_mut(seat.checked_sub(1)?)
    }

    /// Marks a seat as reserved. Coordinates outside the chart are ignored.
    pub fn reserve_seat(&mut self, row: usize, seat: usize) {
        let Some(entry) = self.seat_mut(row, seat) else {
            debug!("Ignoring reservation outside the chart: ({row}, {seat})");
            return;
        };
        if entry.reserved {
            return;
        }
        entry.reserved = true;
        self.unreserved -= 1;
        trace!("Reserved seat ({row}, {seat})");
    }

    pub fn reserve_block(&mut self, block: &[SeatLocation]) {
        for location in block {
            self.reserve_seat(location.row, location.seat);
        }
    }

    /// Seats outside the chart are reported as not reserved.
    pub fn is_reserved(&self, row: usize, seat: usize) -> bool {
        self.seat(row, seat).is_some_and(|s| s.reserved)
    }

    pub fn total_unreserved_seats(&self) -> usize {
        self.unreserved
    }

    pub fn distance_from_ideal(&self, row: usize, seat: usize) -> Result<f64> {
        self.seat(row, seat)
            .map(|s| s.distance)
            .ok_or(SeatingError::OutOfRange { row, seat })
    }

    /// Every seat in row-major order with its reservation flag.
    pub fn seat_map(&self) -> impl Iterator<Item = (SeatLocation, bool)> + '_ {
        self.grid.iter().enumerate().flat_map(|(r, seats)| {
            seats.iter().enumerate().map(move |(s, seat)| {
                (SeatLocation::new(r + 1, s + 1, seat.distance), seat.reserved)
            })
        })
    }

    /// Free seats contiguous with the anchor in its row.
    ///
    /// Scans right from the anchor (inclusive) to the end of the row, then left
    /// from `seat - 1` down to the scan mode's limit. Each direction stops at
    /// the first reserved seat. The result is in scan order: rightward seats
    /// first, then leftward seats. A reserved anchor yields an empty run.
    fn find_adjacent_available(&self, row: usize, seat: usize) -> Vec<SeatLocation> {
        let mut run = Vec::new();

        for i in seat..=self.seats_per_row {
            match self.seat(row, i) {
                Some(s) if !s.reserved => run.push(SeatLocation::new(row, i, s.distance)),
                _ => break,
            }
        }

        if run.is_empty() {
            return run;
        }

        for i in (self.scan_mode.left_limit()..seat).rev() {
            match self.seat(row, i) {
                Some(s) if !s.reserved => run.push(SeatLocation::new(row, i, s.distance)),
                _ => break,
            }
        }

        run
    }

    /// Finds `count` adjacent free seats in one row, as close to the ideal seat as possible.
    ///
    /// Anchors are tried in ranking order and the first run of at least
    /// `count` free seats wins. An exact-size run is returned in scan order;
    /// a longer run is sorted by distance and cut down to `count`. Returns
    /// `None` when no row has a long enough run.
    pub fn find_best_seats(&self, count: usize) -> Option<Vec<SeatLocation>> {
        for anchor in &self.ranked {
            let mut run = self.find_adjacent_available(anchor.row, anchor.seat);
            match run.len().cmp(&count) {
                Ordering::Equal => {
                    debug!("Found {count} seats anchored at ({}, {})", anchor.row, anchor.seat);
                    return Some(run);
                }
                Ordering::Greater => {
                    run.sort_by(|a, b| a.distance.total_cmp(&b.distance));
                    run.truncate(count);
                    debug!("Found {count} seats anchored at ({}, {})", anchor.row, anchor.seat);
                    return Some(run);
                }
                Ordering::Less => {}
            }
        }

        debug!("No block of {count} adjacent seats available");
        None
    }

    /// Finds the best block for a group and reserves it.
    pub fn book_best_seats(&mut self, count: usize) -> Result<Vec<SeatLocation>> {
        if count == 0 {
            return Err(SeatingError::InvalidGroupSize);
        }
        let block = self
            .find_best_seats(count)
            .ok_or(SeatingError::NotFound { count })?;
        self.reserve_block(&block);
        Ok(block)
    }
}

fn manhattan_distance(ideal_seat: f64, row: usize, seat: usize) -> f64 {
    row.abs_diff(IDEAL_ROW) as f64 + (ideal_seat - seat as f64).abs()
}
