//! Read operations for positional MCSub output files
//!
//! The format carries no labels or magic marker. The first 19 non-blank
//! lines each hold one value followed by a tab and a free-text
//! description; everything after the tab is ignored. The radial
//! reflectance rows and the fluence matrix follow in fixed order.

// standard library
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::mcsub::{Beam, McSub};
use crate::parsers;

// other libraries
use log::{debug, info};
use ltools_core::units::{cm_to_mm, per_cm2_to_per_mm2, per_cm_to_per_mm};
use ltools_core::{Grid, Layer, Scanner};
use nalgebra::DMatrix;

/// Number of leading positional parameter lines
const PARAMETER_COUNT: usize = 19;

/// Sentinel substituted for exact zeroes in the fluence matrix before unit
/// conversion, so downstream logarithmic consumers stay well-defined
const ZERO_FLUENCE: f64 = 1e-10;

/// Read an MCSub output file
///
/// Returns a Result containing a [McSub] record with all the information
/// extracted from the file at `path`.
///
/// ```rust,no_run
/// # use ltools_mcsub::read_mcsub_file;
/// let record = read_mcsub_file("./data/mcsub_sample.out").unwrap();
///
/// println!("total reflectance = {}", record.results.rt);
/// ```
pub fn read_mcsub_file<P: AsRef<Path>>(path: P) -> Result<McSub> {
    info!("Reading {:?}", path.as_ref());
    parse(&mut Scanner::from_file(path)?)
}

/// Read MCSub output content already in memory
pub fn read_mcsub_text(text: &str) -> Result<McSub> {
    parse(&mut Scanner::new(text))
}

/// Walk the positional sections in file order
fn parse(scanner: &mut Scanner) -> Result<McSub> {
    let params = parse_parameters(scanner)?;

    let mut record = McSub {
        photons: params[15] as u64,
        n_above: params[4],
        beam: parse_beam(&params)?,
        // the simulated medium is a single semi-infinite layer
        layers: vec![Layer {
            name: None,
            n: params[3],
            mu_a: per_cm_to_per_mm(params[0]),
            mu_s: per_cm_to_per_mm(params[1]),
            g: params[2],
            d: f64::INFINITY,
        }],
        grid: Grid::new(
            cm_to_mm(params[14]),
            cm_to_mm(params[13]),
            params[12] as usize,
            params[11] as usize,
            0,
        ),
        ..Default::default()
    };
    debug!(
        "grid: ndz = {}, ndr = {}",
        record.grid.ndz, record.grid.ndr
    );

    record.results.ru = params[16];
    record.results.absorbed = params[17];
    record.results.rd = params[18];
    record.results.rt = record.results.ru + record.results.rd;

    parse_reflectance(scanner, &mut record)?;
    parse_fluence(scanner, &mut record)?;

    debug!("MCSub read successful");
    Ok(record)
}

/// Leading block of exactly [PARAMETER_COUNT] `value<TAB>description` lines
fn parse_parameters(scanner: &mut Scanner) -> Result<Vec<f64>> {
    let mut values = Vec::with_capacity(PARAMETER_COUNT);
    while values.len() < PARAMETER_COUNT {
        let Some(raw) = scanner.read_raw_line() else {
            return Err(Error::TruncatedParameters {
                expected: PARAMETER_COUNT,
                found: values.len(),
            });
        };
        let token = raw.split('\t').next().unwrap_or("").trim();
        if token.is_empty() {
            continue;
        }
        let (_, value) = parsers::leading_f64(token)?;
        values.push(value);
    }
    Ok(values)
}

/// Source geometry from the `mcflag` parameter and its position fields
fn parse_beam(params: &[f64]) -> Result<Beam> {
    match params[5] as i64 {
        0 => Ok(Beam::FlatTop {
            radius: cm_to_mm(params[6]),
        }),
        1 => Ok(Beam::Gaussian {
            radius: cm_to_mm(params[6]),
            waist: cm_to_mm(params[7]),
            focus_depth: cm_to_mm(params[10]),
        }),
        2 => Ok(Beam::Isotropic {
            x: cm_to_mm(params[8]),
            y: cm_to_mm(params[9]),
            z: cm_to_mm(params[10]),
        }),
        flag => Err(Error::UnknownBeamFlag(flag)),
    }
}

/// Radial bin edge row followed by the reflectance row
///
/// Both rows carry `ndr + 1` entries. The edge row duplicates what the
/// grid already derives and is consumed without being stored. The
/// reflectance row drops its leading edge value and trailing overflow bin.
fn parse_reflectance(scanner: &mut Scanner, record: &mut McSub) -> Result<()> {
    let ndr = record.grid.ndr;
    data_row(scanner, ndr + 1)?;

    let row = data_row(scanner, ndr + 1)?;
    record.results.rdr = row[1..ndr]
        .iter()
        .map(|value| per_cm2_to_per_mm2(*value))
        .collect();
    Ok(())
}

/// Fluence matrix of `ndz + 1` rows by `ndr + 2` columns
///
/// Column 0 holds the bin-centre depth, the final column and final row are
/// overflow bins; only the inner `ndz x ndr` block is stored. Exact zeroes
/// are raised to [ZERO_FLUENCE] before unit conversion.
fn parse_fluence(scanner: &mut Scanner, record: &mut McSub) -> Result<()> {
    let (ndz, ndr) = (record.grid.ndz, record.grid.ndr);

    let mut values = Vec::with_capacity(ndz * ndr);
    for _ in 0..ndz {
        let row = data_row(scanner, ndr + 2)?;
        for value in &row[1..=ndr] {
            let raw = if *value == 0.0 { ZERO_FLUENCE } else { *value };
            values.push(per_cm2_to_per_mm2(raw));
        }
    }
    // overflow row, consumed so truncation is still caught
    data_row(scanner, ndr + 2)?;

    record.results.arz = DMatrix::from_row_slice(ndz, ndr, &values);
    Ok(())
}

/// Next non-blank row as exactly `expected` values
fn data_row(scanner: &mut Scanner, expected: usize) -> Result<Vec<f64>> {
    let line = scanner.next_line()?;
    let (_, values) = parsers::vector_of_f64(&line)?;
    if values.len() != expected {
        return Err(Error::UnexpectedLength {
            expected,
            found: values.len(),
        });
    }
    Ok(values)
}
