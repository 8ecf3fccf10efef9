use crate::{
    chart::SeatingChart,
    error::{Result, SeatingError},
};
use chrono::Local;
use csv::WriterBuilder;
use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

pub fn export_seat_map_with_path(
    chart: &SeatingChart,
    output_dir: Option<&Path>,
) -> Result<PathBuf> {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let filename = format!("seatmap_{timestamp}.csv");

    let file_path = if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir).map_err(|e| SeatingError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        dir.join(&filename)
    } else {
        filename.into()
    };

    let file = File::create(&file_path).map_err(|e| SeatingError::CreateFile {
        path: file_path.clone(),
        source: e,
    })?;

    let writer = BufWriter::new(file);
    #[allow(unused_mut)]
    let mut builder = WriterBuilder::new();
    #[cfg(windows)]
    {
        use csv::Terminator;
        builder = builder.terminator(Terminator::CRLF);
    }

    let mut wtr = builder.from_writer(writer);

    wtr.write_record(["Row", "Seat", "Distance", "Reserved"])?;
    for (location, reserved) in chart.seat_map() {
        wtr.write_record([
            location.row.to_string(),
            location.seat.to_string(),
            location.distance.to_string(),
            reserved.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_export_seat_map_basic() {
        let temp_dir = TempDir::new().unwrap();
        let chart = SeatingChart::new(2, 3).unwrap();

        let result = export_seat_map_with_path(&chart, Some(temp_dir.path()));
        assert!(result.is_ok());

        let path = result.unwrap();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("seatmap_"));
        assert!(name.ends_with(".csv"));
        assert!(path.exists());
    }

    #[test]
    fn test_export_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("reports").join("hall");
        let chart = SeatingChart::new(1, 1).unwrap();

        let path = export_seat_map_with_path(&chart, Some(nested.as_path())).unwrap();
        assert!(nested.is_dir());
        assert!(path.starts_with(&nested));
    }

    #[test]
    fn test_csv_content_format() {
        let temp_dir = TempDir::new().unwrap();
        let mut chart = SeatingChart::new(2, 2).unwrap();
        chart.reserve_seat(2, 1);

        let path = export_seat_map_with_path(&chart, Some(temp_dir.path())).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();

        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Row,Seat,Distance,Reserved",
                "1,1,0.5,false",
                "1,2,0.5,false",
                "2,1,1.5,true",
                "2,2,1.5,false",
            ]
        );
    }

    #[test]
    fn test_invalid_output_directory() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not_a_dir");
        std::fs::write(&blocker, "").unwrap();
        let chart = SeatingChart::new(1, 1).unwrap();

        let target = blocker.join("nested");
        let result = export_seat_map_with_path(&chart, Some(target.as_path()));
        match result {
            Err(SeatingError::CreateDir { path, .. }) => assert_eq!(path, target),
            other => panic!("Unexpected result: {other:?}"),
        }
    }
}
