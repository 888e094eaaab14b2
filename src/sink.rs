// sink.rs - CSV artifacts: the points file and the append-only run logs

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use csv::{Writer, WriterBuilder};
use log::{debug, info};

use crate::error::{Error, Result};
use crate::estimate::Estimate;
use crate::points::Point;

/// Significant digits for every floating value written.
pub const PRECISION: usize = 15;

pub const ERRORS_FILE: &str = "errors.csv";
pub const TIMINGS_FILE: &str = "timings.csv";

/// Format like C's `%.{digits}g`: shortest of fixed or scientific notation,
/// trailing zeros removed, exponent with a sign and at least two digits.
pub fn format_significant(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0".into() } else { "0".into() };
    }

    let digits = digits.max(1);
    // The exponent must come from the rounded value: 9.9999e-5 rounds up a decade.
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= digits as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

fn open_error(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |source| Error::Open { path: path.to_path_buf(), source }
}

pub fn points_path(dir: &Path, num_points: usize) -> PathBuf {
    dir.join(format!("points_{num_points}.csv"))
}

/// Writer for `points_<N>.csv`. The file is truncated when created.
pub struct PointsWriter {
    path: PathBuf,
    writer: Writer<File>,
}

impl PointsWriter {
    /// Create the file and write the `x,y` header.
    pub fn create(dir: &Path, num_points: usize) -> Result<Self> {
        let path = points_path(dir, num_points);
        let file = File::create(&path).map_err(open_error(&path))?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(["x", "y"])?;
        Ok(Self { path, writer })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_points(&mut self, points: &[Point]) -> Result<()> {
        for p in points {
            self.writer.write_record([
                format_significant(p.x, PRECISION),
                format_significant(p.y, PRECISION),
            ])?;
        }
        self.writer.flush()?;
        info!("wrote {} points to {}", points.len(), self.path.display());
        Ok(())
    }
}

/// A CSV file that only ever grows across runs.
///
/// The header is written only when the file did not exist before opening.
pub struct AppendLog {
    path: PathBuf,
    writer: Writer<File>,
}

impl AppendLog {
    pub fn open(path: PathBuf, header: &[&str]) -> Result<Self> {
        let write_header = !path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(open_error(&path))?;

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        if write_header {
            debug!("new log {}", path.display());
            writer.write_record(header)?;
        }
        Ok(Self { path, writer })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append<I, T>(&mut self, record: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.writer.write_record(record)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Column layout of `errors.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorSchema {
    /// `num_points,error`
    #[default]
    Basic,
    /// `num_points,pi_estimate,error`
    WithEstimate,
}

impl ErrorSchema {
    pub fn header(&self) -> &'static [&'static str] {
        match self {
            ErrorSchema::Basic => &["num_points", "error"],
            ErrorSchema::WithEstimate => &["num_points", "pi_estimate", "error"],
        }
    }

    pub fn record(&self, estimate: &Estimate) -> Vec<String> {
        let num_points = estimate.num_points.to_string();
        let error = format_significant(estimate.error(), PRECISION);
        match self {
            ErrorSchema::Basic => vec![num_points, error],
            ErrorSchema::WithEstimate => vec![
                num_points,
                format_significant(estimate.pi_estimate, PRECISION),
                error,
            ],
        }
    }
}

/// Per-run estimation error, accumulated in `errors.csv`.
pub struct ErrorLog {
    log: AppendLog,
    schema: ErrorSchema,
}

impl ErrorLog {
    pub fn open(dir: &Path, schema: ErrorSchema) -> Result<Self> {
        let log = AppendLog::open(dir.join(ERRORS_FILE), schema.header())?;
        Ok(Self { log, schema })
    }

    pub fn record(&mut self, estimate: &Estimate) -> Result<()> {
        self.log.append(self.schema.record(estimate))
    }

    pub fn path(&self) -> &Path {
        self.log.path()
    }
}

pub const TIMINGS_HEADER: [&str; 2] = ["num_points", "main_seconds"];

/// Per-run wall-clock time, accumulated in `timings.csv`.
pub struct TimingLog {
    log: AppendLog,
}

impl TimingLog {
    pub fn open(dir: &Path) -> Result<Self> {
        let log = AppendLog::open(dir.join(TIMINGS_FILE), &TIMINGS_HEADER)?;
        Ok(Self { log })
    }

    pub fn record(&mut self, num_points: usize, main_seconds: f64) -> Result<()> {
        self.log.append([
            num_points.to_string(),
            format_significant(main_seconds, PRECISION),
        ])
    }

    pub fn path(&self) -> &Path {
        self.log.path()
    }
}
