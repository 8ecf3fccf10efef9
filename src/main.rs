use anyhow::Result;
use log::{debug, error, info, warn};
use seating_chart::{Config, SeatLocation, SeatingError, export, shared};
use std::io::Write;

fn main() -> Result<()> {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let config = Config::from_env()?;
    info!("Seating chart starting...");
    info!(
        "Chart: {} rows x {} seats per row (scan mode {:?})",
        config.rows, config.seats_per_row, config.scan_mode
    );

    match run(&config) {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Error: {e}");

            // Provide helpful hints for common errors
            use std::io::ErrorKind;
            for cause in e.chain().skip(1) {
                if let Some(ioe) = cause.downcast_ref::<std::io::Error>() {
                    match ioe.kind() {
                        ErrorKind::PermissionDenied => {
                            error!(
                                "Hint: Run in a writable directory or set SEATING_CHART_OUTPUT_DIR."
                            );
                            break;
                        }
                        ErrorKind::Other if format!("{ioe}").contains("No space left") => {
                            error!("Hint: Check available disk space.");
                            break;
                        }
                        _ => {}
                    }
                }
            }
            let _ = std::io::stderr().flush();
            std::process::exit(1);
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let chart = shared::create_shared_chart(config.rows, config.seats_per_row, config.scan_mode)?;

    for &(row, seat) in &config.reserved {
        if row == 0 || row > config.rows || seat == 0 || seat > config.seats_per_row {
            warn!("Ignoring reserved seat outside the chart: ({row}, {seat})");
        }
    }
    shared::reserve_many(&chart, config.reserved.iter().copied());
    info!(
        "Unreserved seats after pre-reservations: {}",
        shared::unreserved_seats(&chart)
    );

    for (i, &size) in config.groups.iter().enumerate() {
        match shared::book_best_seats(&chart, size) {
            Ok(block) => info!("Group {} ({size} seats): {}", i + 1, describe_block(&block)),
            Err(SeatingError::NotFound { count }) => {
                warn!("Group {} ({count} seats): no adjacent block available", i + 1);
            }
            Err(e) => return Err(e.into()),
        }
    }

    let snapshot = shared::get_chart_snapshot(&chart);
    info!("Total unreserved seats: {}", snapshot.total_unreserved_seats());

    if let Some(ref dir) = config.output_dir {
        debug!("Exporting to directory: {}", dir.display());
    }
    let path = export::export_seat_map_with_path(&snapshot, config.output_dir.as_deref())?;
    info!("Seat map saved to: {}", path.display());

    Ok(())
}

fn describe_block(block: &[SeatLocation]) -> String {
    let mut seats: Vec<usize> = block.iter().map(|l| l.seat).collect();
    seats.sort_unstable();
    let row = block.first().map_or(0, |l| l.row);
    let seats = seats
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("row {row}, seats {seats}")
}
