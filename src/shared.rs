use crate::{
    chart::SeatingChart,
    error::Result,
    seat::{ScanMode, SeatLocation},
};
use std::sync::{Arc, Mutex, MutexGuard};

/// A chart shared between callers. One lock guards the whole chart.
pub type SharedChart = Arc<Mutex<SeatingChart>>;

pub fn create_shared_chart(
    rows: usize,
    seats_per_row: usize,
    scan_mode: ScanMode,
) -> Result<SharedChart> {
    let chart = SeatingChart::with_scan_mode(rows, seats_per_row, scan_mode)?;
    Ok(Arc::new(Mutex::new(chart)))
}

fn lock(chart: &SharedChart) -> MutexGuard<'_, SeatingChart> {
    chart.lock().unwrap_or_else(|p| p.into_inner())
}

pub fn reserve_many<I>(chart: &SharedChart, seats: I)
where
    I: IntoIterator<Item = (usize, usize)>,
{
    let mut guard = lock(chart);
    for (row, seat) in seats {
        guard.reserve_seat(row, seat);
    }
}

/// Finds and reserves a block while holding the lock for the whole operation.
pub fn book_best_seats(chart: &SharedChart, count: usize) -> Result<Vec<SeatLocation>> {
    lock(chart).book_best_seats(count)
}

pub fn unreserved_seats(chart: &SharedChart) -> usize {
    lock(chart).total_unreserved_seats()
}

pub fn get_chart_snapshot(chart: &SharedChart) -> SeatingChart {
    lock(chart).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeatingError;
    use std::thread;

    #[test]
    fn test_create_shared_chart() {
        let chart = create_shared_chart(3, 4, ScanMode::Compatible).unwrap();
        assert_eq!(unreserved_seats(&chart), 12);
    }

    #[test]
    fn test_create_shared_chart_invalid() {
        assert!(matches!(
            create_shared_chart(0, 4, ScanMode::Full),
            Err(SeatingError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_reserve_many() {
        let chart = create_shared_chart(2, 3, ScanMode::Compatible).unwrap();
        reserve_many(&chart, [(1, 1), (1, 1), (2, 3), (5, 5)]);

        let snapshot = get_chart_snapshot(&chart);
        assert!(snapshot.is_reserved(1, 1));
        assert!(snapshot.is_reserved(2, 3));
        assert_eq!(snapshot.total_unreserved_seats(), 4);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let chart = create_shared_chart(1, 3, ScanMode::Compatible).unwrap();
        let snapshot = get_chart_snapshot(&chart);
        reserve_many(&chart, [(1, 2)]);
        assert!(!snapshot.is_reserved(1, 2));
        assert_eq!(unreserved_seats(&chart), 2);
    }

    #[test]
    fn test_concurrent_bookings_never_overlap() {
        let chart = create_shared_chart(8, 3, ScanMode::Compatible).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let chart = Arc::clone(&chart);
                thread::spawn(move || book_best_seats(&chart, 3))
            })
            .collect();

        let mut booked: Vec<(usize, usize)> = handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .flat_map(|block| block.into_iter().map(|l| (l.row, l.seat)))
            .collect();

        assert_eq!(booked.len(), 24);
        booked.sort_unstable();
        booked.dedup();
        assert_eq!(booked.len(), 24);
        assert_eq!(unreserved_seats(&chart), 0);
    }
}
