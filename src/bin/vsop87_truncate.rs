//! VSOP87A table truncation tool
//!
//! Reads one planet file of the IMCCE VSOP87A distribution (for example
//! `VSOP87A.ven`) and writes the Rust table module used by
//! `solarfield::series::vsop87`. A term of time power `p` is kept when its
//! amplitude satisfies `|A| >= epsilon / T^p`, with `epsilon = 1.88e-6 * a`
//! (`a` the semi-major axis of the planet in AU) and `T` the time span, in
//! Julian millennia, over which the precision holds. Kept terms stay in file
//! order.
//!
//! Usage:
//!   cargo run --bin vsop87_truncate -- VSOP87A.ven -o src/series/vsop87/venus.rs

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Amplitude threshold, in AU, for a planet at 1 AU
const BASE_EPSILON: f64 = 1.88e-6;

lazy_static! {
    static ref HEADER: Regex = Regex::new(
        r"VSOP87\s+VERSION\s+A\d\s+(\w+)\s+VARIABLE\s+(\d)\s+\(XYZ\)\s+\*T\*\*(\d)\s+(\d+)\s+TERMS"
    )
    .expect("valid header pattern");
}

/// VSOP87A table truncation tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Truncates an IMCCE VSOP87A file into a solarfield table module",
    long_about = None
)]
struct Args {
    /// VSOP87A file of one planet
    input: PathBuf,

    /// Output .rs file (stdout when absent)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Semi-major axis in AU, overriding the planet's default
    #[arg(long)]
    semi_major_axis: Option<f64>,

    /// Time span in Julian millennia, overriding the planet's default
    #[arg(long)]
    span: Option<f64>,
}

/// Semi-major axis (AU) and time span (Julian millennia) of the tables
fn planet_defaults(planet: &str) -> Option<(f64, f64)> {
    match planet {
        "MERCURY" => Some((0.38710, 4.0)),
        "VENUS" => Some((0.72333, 4.0)),
        "EARTH" => Some((1.0, 4.0)),
        "MARS" => Some((1.52368, 4.0)),
        "JUPITER" => Some((5.20260, 2.0)),
        "SATURN" => Some((9.55491, 2.0)),
        "URANUS" => Some((19.21845, 6.0)),
        "NEPTUNE" => Some((30.11039, 6.0)),
        _ => None,
    }
}

/// One `(A, B, C)` term: `A cos(B + C t)`
type Term = (f64, f64, f64);

struct Block {
    axis: usize,
    power: usize,
    terms: Vec<Term>,
}

struct Vsop87File {
    planet: String,
    blocks: Vec<Block>,
}

impl Vsop87File {
    fn parse(text: &str) -> Result<Self> {
        let mut planet = None;
        let mut blocks: Vec<Block> = Vec::new();
        let mut expected = 0usize;

        for (number, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(caps) = HEADER.captures(line) {
                if let Some(block) = blocks.last() {
                    check_count(block, expected)?;
                }
                planet.get_or_insert_with(|| caps[1].to_string());
                let variable: usize = caps[2].parse()?;
                let power: usize = caps[3].parse()?;
                expected = caps[4].parse()?;
                if !(1..=3).contains(&variable) || power > 5 {
                    return Err(format!("line {}: unexpected block header", number + 1).into());
                }
                blocks.push(Block {
                    axis: variable - 1,
                    power,
                    terms: Vec::with_capacity(expected),
                });
                continue;
            }

            let block = blocks
                .last_mut()
                .ok_or_else(|| format!("line {}: term before any header", number + 1))?;
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 3 {
                return Err(format!("line {}: malformed term", number + 1).into());
            }
            let n = fields.len();
            block.terms.push((
                fields[n - 3].parse()?,
                fields[n - 2].parse()?,
                fields[n - 1].parse()?,
            ));
        }
        if let Some(block) = blocks.last() {
            check_count(block, expected)?;
        }

        let planet = planet.ok_or("no VSOP87A block header found")?;
        Ok(Self { planet, blocks })
    }
}

fn check_count(block: &Block, expected: usize) -> Result<()> {
    if block.terms.len() != expected {
        return Err(format!(
            "block {}{}: expected {} terms, found {}",
            ["X", "Y", "Z"][block.axis],
            block.power,
            expected,
            block.terms.len()
        )
        .into());
    }
    Ok(())
}

/// Terms kept for each axis and power, in file order
fn truncate(file: &Vsop87File, epsilon: f64, span: f64) -> [[Vec<Term>; 6]; 3] {
    let mut kept: [[Vec<Term>; 6]; 3] = Default::default();
    for block in &file.blocks {
        let threshold = epsilon / span.powi(block.power as i32);
        let terms = block.terms.iter().filter(|t| t.0.abs() >= threshold);
        kept[block.axis][block.power].extend(terms);
        debug!(
            "{}{}: kept {} of {} terms (|A| >= {:e})",
            ["X", "Y", "Z"][block.axis],
            block.power,
            kept[block.axis][block.power].len(),
            block.terms.len(),
            threshold
        );
    }
    kept
}

fn title_case(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn render(planet: &str, kept: &[[Vec<Term>; 6]; 3]) -> String {
    let count: usize = kept.iter().flatten().map(Vec::len).sum();
    let mut out = String::new();
    out.push_str(&format!(
        "//! VSOP87A terms for {}: heliocentric rectangular coordinates, ecliptic and\n",
        title_case(planet)
    ));
    out.push_str("//! equinox J2000, AU, time in Julian millennia from J2000 TDB.\n");
    out.push_str(&format!(
        "//! {} terms, truncated offline (see `vsop87_truncate`).\n\n",
        count
    ));
    out.push_str("use crate::series::Term;\n\n");

    for (axis, name) in ["X", "Y", "Z"].iter().enumerate() {
        for (power, terms) in kept[axis].iter().enumerate() {
            if terms.is_empty() {
                out.push_str(&format!("pub(super) const {}{}: &[Term] = &[];\n", name, power));
                continue;
            }
            out.push_str(&format!("pub(super) const {}{}: &[Term] = &[\n", name, power));
            for (a, b, c) in terms {
                out.push_str(&format!("    ({:?}, {:?}, {:?}),\n", a, b, c));
            }
            out.push_str("];\n");
        }
        out.push('\n');
    }

    out.push_str("pub(super) const SERIES: [[&[Term]; 6]; 3] = [\n");
    for name in ["X", "Y", "Z"] {
        let row: Vec<String> = (0..6).map(|p| format!("{}{}", name, p)).collect();
        out.push_str(&format!("    [{}],\n", row.join(", ")));
    }
    out.push_str("];\n");
    out
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = fs::read_to_string(&args.input)?;
    let file = Vsop87File::parse(&text)?;
    let defaults = planet_defaults(&file.planet);
    let semi_major_axis = args
        .semi_major_axis
        .or(defaults.map(|d| d.0))
        .ok_or_else(|| format!("no default semi-major axis for {}", file.planet))?;
    let span = args
        .span
        .or(defaults.map(|d| d.1))
        .ok_or_else(|| format!("no default time span for {}", file.planet))?;

    let kept = truncate(&file, BASE_EPSILON * semi_major_axis, span);
    let total: usize = file.blocks.iter().map(|b| b.terms.len()).sum();
    let retained: usize = kept.iter().flatten().map(Vec::len).sum();
    info!(
        "{}: kept {} of {} terms (a = {} AU, T = {} millennia)",
        file.planet, retained, total, semi_major_axis, span
    );

    let module = render(&file.planet, &kept);
    match args.output {
        Some(path) => fs::write(path, module)?,
        None => print!("{}", module),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
 VSOP87 VERSION A1    VENUS     VARIABLE 1 (XYZ)       *T**0      2 TERMS    HELIOCENTRIC DYNAMICAL ECLIPTIC AND EQUINOX J2000
 1210    1  0  0  0  0  0  0  0  0  0  0  0  0  0  0     0.72211281391 3.17575836361  10213.28554621100
 1210    2  0  0  0  0  0  0  0  0  0  0  0  0  0  0     0.00000100000 0.33147492492   2352.86615377180
 VSOP87 VERSION A1    VENUS     VARIABLE 2 (XYZ)       *T**1      1 TERMS    HELIOCENTRIC DYNAMICAL ECLIPTIC AND EQUINOX J2000
 1221    1  0  0  0  0  0  0  0  0  0  0  0  0  0  0     0.00000050000 4.05566613861  20426.57109242200
";

    #[test]
    fn test_parse_blocks() {
        let file = Vsop87File::parse(SAMPLE).unwrap();
        assert_eq!(file.planet, "VENUS");
        assert_eq!(file.blocks.len(), 2);
        assert_eq!(file.blocks[1].axis, 1);
        assert_eq!(file.blocks[1].power, 1);
        assert_eq!(file.blocks[0].terms[0], (0.72211281391, 3.17575836361, 10213.285546211));
    }

    #[test]
    fn test_term_count_checked() {
        let broken = SAMPLE.replace("      2 TERMS", "      3 TERMS");
        assert!(Vsop87File::parse(&broken).is_err());
    }

    #[test]
    fn test_threshold_scales_with_time_power() {
        let file = Vsop87File::parse(SAMPLE).unwrap();
        let (a, span) = planet_defaults("VENUS").unwrap();
        let kept = truncate(&file, BASE_EPSILON * a, span);
        // 1e-6 < 1.36e-6 drops at power 0, 5e-7 >= 3.4e-7 survives at power 1
        assert_eq!(kept[0][0].len(), 1);
        assert_eq!(kept[1][1].len(), 1);

        let module = render(&file.planet, &kept);
        assert!(module.starts_with("//! VSOP87A terms for Venus:"));
        assert!(module.contains("//! 2 terms"));
        assert!(module.contains("pub(super) const X1: &[Term] = &[];"));
        assert!(module.contains("    [Z0, Z1, Z2, Z3, Z4, Z5],"));
    }
}
