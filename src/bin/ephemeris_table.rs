//! Ephemeris tabulation tool
//!
//! Computes coordinates of solar-system bodies over a regular series of
//! instants and prints them as a tab-separated table.
//!
//! Usage:
//!   cargo run --bin ephemeris_table -- -b mercury,venus --start 2451545.0 \
//!       --step 1 --count 10 --frame ecliptic

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use log::info;
use ndarray::Axis;
use solarfield::framelib::{Coord, CoordinateExpression, Frame};
use solarfield::planetlib::Body;
use solarfield::time::{parse_instant, TimeScale};
use solarfield::units::Unit;
use solarfield::{compute_ephemeris, AstroConfig, Ephemeris, EphemerisRequest};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScaleArg {
    Utc,
    Tt,
}

impl From<ScaleArg> for TimeScale {
    fn from(arg: ScaleArg) -> Self {
        match arg {
            ScaleArg::Utc => TimeScale::Utc,
            ScaleArg::Tt => TimeScale::TtTdb,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FrameArg {
    Theory,
    Heliocentric,
    Equatorial,
    Ecliptic,
}

impl From<FrameArg> for Frame {
    fn from(arg: FrameArg) -> Self {
        match arg {
            FrameArg::Theory => Frame::Theory,
            FrameArg::Heliocentric => Frame::HeliocentricGeometric,
            FrameArg::Equatorial => Frame::Equatorial,
            FrameArg::Ecliptic => Frame::Ecliptic,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExpressionArg {
    Cartesian,
    Spherical,
}

impl From<ExpressionArg> for CoordinateExpression {
    fn from(arg: ExpressionArg) -> Self {
        match arg {
            ExpressionArg::Cartesian => CoordinateExpression::Cartesian,
            ExpressionArg::Spherical => CoordinateExpression::Spherical,
        }
    }
}

fn parse_body(text: &str) -> std::result::Result<Body, String> {
    Body::from_name(text).ok_or_else(|| format!("unknown body '{}'", text))
}

/// `x0`..`x2` for positions, `v0`..`v2` for velocities
fn parse_coord(text: &str) -> std::result::Result<Coord, String> {
    let text = text.trim().to_ascii_lowercase();
    let index = match text.as_bytes() {
        [b'x', axis @ b'0'..=b'2'] => (axis - b'0') as usize,
        [b'v', axis @ b'0'..=b'2'] => 3 + (axis - b'0') as usize,
        _ => return Err(format!("unknown coordinate '{}', expected x0..x2 or v0..v2", text)),
    };
    Coord::from_index(index).ok_or_else(|| format!("unknown coordinate '{}'", text))
}

fn parse_unit(text: &str) -> std::result::Result<Unit, String> {
    Unit::ALL
        .iter()
        .copied()
        .find(|u| u.label() == text.trim())
        .ok_or_else(|| {
            let labels: Vec<&str> = Unit::ALL.iter().map(|u| u.label()).collect();
            format!("unknown unit '{}', expected one of {}", text, labels.join(" "))
        })
}

/// Ephemeris tabulation tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Tabulates solar-system ephemerides from periodic-series theories",
    long_about = None
)]
struct Args {
    /// Bodies, comma separated (sun, moon, mercury ... pluto)
    #[arg(short, long, value_delimiter = ',', value_parser = parse_body, required = true)]
    bodies: Vec<Body>,

    /// First instant, Julian day or RFC 3339 date-time
    #[arg(short, long, default_value = "2451545.0")]
    start: String,

    /// Interval between instants, in days
    #[arg(long, default_value_t = 1.0)]
    step: f64,

    /// Number of instants
    #[arg(short = 'n', long, default_value_t = 10)]
    count: usize,

    /// Time scale of the instants
    #[arg(long, value_enum, default_value_t = ScaleArg::Tt)]
    scale: ScaleArg,

    /// Output frame (default from the configuration)
    #[arg(short, long, value_enum)]
    frame: Option<FrameArg>,

    /// Coordinate expression (default from the configuration)
    #[arg(short, long, value_enum)]
    expression: Option<ExpressionArg>,

    /// Coordinates, comma separated (x0,x1,x2,v0,v1,v2)
    #[arg(short, long, value_delimiter = ',', value_parser = parse_coord)]
    coords: Vec<Coord>,

    /// One unit per coordinate, comma separated (a.u., km, deg, rad/d ...)
    #[arg(short, long, value_delimiter = ',', value_parser = parse_unit)]
    units: Vec<Unit>,

    /// Requested precision in arcseconds
    #[arg(short, long)]
    precision: Option<f64>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// One row per coordinate and one column per instant
    #[arg(long, action = ArgAction::SetTrue)]
    columns: bool,

    /// Print the report of computation errors after the table
    #[arg(long, action = ArgAction::SetTrue)]
    errors: bool,
}

/// Header of the column holding `coord` of `body`
fn column_label(eph: &Ephemeris, frame: Frame, expression: CoordinateExpression, b: usize, c: usize) -> String {
    let label = frame.coord_group(expression).label(eph.coords[c]);
    format!("{} {} ({})", eph.bodies[b], label, eph.units[c])
}

fn print_rows(eph: &Ephemeris, frame: Frame, expression: CoordinateExpression) {
    let mut header = vec!["JD".to_string()];
    for b in 0..eph.bodies.len() {
        for c in 0..eph.coords.len() {
            header.push(column_label(eph, frame, expression, b, c));
        }
    }
    println!("{}", header.join("\t"));

    for (i, jd) in eph.instants.iter().enumerate() {
        let mut row = vec![format!("{:.6}", jd)];
        row.extend(
            eph.data
                .index_axis(Axis(0), i)
                .iter()
                .map(|v| format!("{:.10}", v)),
        );
        println!("{}", row.join("\t"));
    }
}

fn print_columns(eph: &Ephemeris, frame: Frame, expression: CoordinateExpression) {
    let mut header = vec!["JD".to_string()];
    header.extend(eph.instants.iter().map(|jd| format!("{:.6}", jd)));
    println!("{}", header.join("\t"));

    for b in 0..eph.bodies.len() {
        for c in 0..eph.coords.len() {
            let mut row = vec![column_label(eph, frame, expression, b, c)];
            row.extend((0..eph.instants.len()).map(|i| format!("{:.10}", eph.data[[i, b, c]])));
            println!("{}", row.join("\t"));
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AstroConfig::load(path)?,
        None => AstroConfig::default(),
    };

    let start = parse_instant(&args.start)?;
    let instants: Vec<f64> = (0..args.count)
        .map(|i| start + args.step * i as f64)
        .collect();

    let mut request = EphemerisRequest::from_config(args.bodies.clone(), instants, &config);
    request.time_scale = args.scale.into();
    if let Some(frame) = args.frame {
        request.frame = frame.into();
    }
    if let Some(expression) = args.expression {
        request.expression = expression.into();
    }
    if !args.coords.is_empty() {
        request.coords = args.coords.clone();
        if args.units.is_empty() {
            // units of the configuration, per coordinate index
            let defaults: Vec<Unit> = request
                .coords
                .iter()
                .map(|c| config.units.get(c.index()).copied().unwrap_or(Unit::Unspecified))
                .collect();
            request.units = defaults;
        }
    }
    if !args.units.is_empty() {
        request.units = args.units.clone();
    }
    if let Some(precision) = args.precision {
        request.precision = precision;
    }
    request.collect_errors |= args.errors;

    info!(
        "Tabulating {} bodies at {} instants from JD {} ({})",
        request.bodies.len(),
        request.instants.len(),
        start,
        request.time_scale
    );
    let eph = compute_ephemeris(&request, &config)?;

    if args.columns {
        print_columns(&eph, request.frame, request.expression);
    } else {
        print_rows(&eph, request.frame, request.expression);
    }

    for failure in &eph.failures {
        eprintln!("JD {}: {}", failure.instant, failure.message);
    }
    if args.errors && !eph.errors.is_empty() {
        println!();
        print!("{}", eph.error_report());
    }
    Ok(())
}
