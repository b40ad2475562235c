//! Row-grouped CSV export of sampled grids.
//!
//! Each output line holds the values of one grid row, left to right in
//! increasing x, rows top to bottom in increasing y (origin at top left).
//! Every value is followed by [`SEPARATOR`] and every row, including the last,
//! ends with a newline. No header and no coordinate columns are written.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::fields::SampledPoint;
use crate::math::Scalar;

/// File name used by the interactive tool when no path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "output.csv";
/// Written after every value.
pub const SEPARATOR: char = ',';

/// Writes `samples` grouping each contiguous run of equal `y` into one line.
///
/// `samples` must be in row-major order, as produced by the samplers; any
/// other order splits rows wherever consecutive `y` values differ.
pub fn write_rows<W: Write>(samples: &[SampledPoint], mut sink: W) -> io::Result<()> {
    for row in samples.chunk_by(|a, b| a.y == b.y) {
        write_row(&mut sink, row.iter().map(|s| s.value))?;
    }
    Ok(())
}

/// Writes bare values (e.g. from [`crate::fields::sample_potential`]) as rows of
/// `columns` entries; the last row may be shorter.
pub fn write_value_rows<W: Write>(values: &[Scalar], columns: usize, mut sink: W) -> io::Result<()> {
    if columns == 0 {
        if values.is_empty() {
            return Ok(());
        }
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "row width must be non-zero",
        ));
    }
    for row in values.chunks(columns) {
        write_row(&mut sink, row.iter().copied())?;
    }
    Ok(())
}

/// Creates (or truncates) `path` and writes `samples` with [`write_rows`].
pub fn write_grid_csv<P: AsRef<Path>>(path: P, samples: &[SampledPoint]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    write_rows(samples, &mut writer)?;
    writer.flush()?;
    log::info!(
        "wrote {} samples to {}",
        samples.len(),
        path.as_ref().display()
    );
    Ok(())
}

fn write_row<W, I>(sink: &mut W, values: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = Scalar>,
{
    for value in values {
        write!(sink, "{value}{SEPARATOR}")?;
    }
    writeln!(sink)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic(ys: &[Scalar], values: &[Scalar]) -> Vec<SampledPoint> {
        ys.iter()
            .zip(values)
            .enumerate()
            .map(|(i, (&y, &value))| SampledPoint {
                x: i as Scalar,
                y,
                value,
            })
            .collect()
    }

    fn render(samples: &[SampledPoint]) -> String {
        let mut out = Vec::new();
        write_rows(samples, &mut out).expect("in-memory write");
        String::from_utf8(out).expect("utf8 output")
    }

    #[test]
    fn groups_runs_of_equal_y_into_rows() {
        let samples = synthetic(&[0.0, 0.0, 0.0, 1.0, 1.0], &[1.0, 2.0, 3.0, 4.0, 5.0]);
        let text = render(&samples);
        assert_eq!(text, "1,2,3,\n4,5,\n");
        assert_eq!(text.lines().collect::<Vec<_>>(), vec!["1,2,3,", "4,5,"]);
    }

    #[test]
    fn single_sample_rows_are_closed() {
        let samples = synthetic(&[0.0, 1.0, 2.0], &[7.0, 8.5, -1.0]);
        assert_eq!(render(&samples), "7,\n8.5,\n-1,\n");
    }

    #[test]
    fn empty_grid_writes_nothing() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn non_finite_values_are_written_verbatim() {
        let samples = synthetic(&[0.0, 0.0], &[Scalar::INFINITY, 2.0]);
        assert_eq!(render(&samples), "inf,2,\n");
    }

    #[test]
    fn value_rows_chunk_by_column_count() {
        let mut out = Vec::new();
        write_value_rows(&[1.0, 2.0, 3.0, 4.0, 5.0], 3, &mut out).expect("in-memory write");
        assert_eq!(String::from_utf8(out).expect("utf8 output"), "1,2,3,\n4,5,\n");

        let err = write_value_rows(&[1.0], 0, Vec::<u8>::new()).expect_err("zero width");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_errors_propagate_unchanged() {
        let samples = synthetic(&[0.0], &[1.0]);
        let err = write_rows(&samples, BrokenSink).expect_err("broken sink");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn writes_csv_file_to_disk() {
        let path = std::env::temp_dir().join(format!("charge_grid_{}.csv", std::process::id()));
        let samples = synthetic(&[0.0, 0.0, 1.0], &[1.0, 2.0, 3.0]);
        write_grid_csv(&path, &samples).expect("file write");
        let text = std::fs::read_to_string(&path).expect("file read");
        std::fs::remove_file(&path).ok();
        assert_eq!(text, "1,2,\n3,\n");
    }
}
