// Crate types
use crate::error::{Error, Result};
use crate::model::Media;
use crate::reader::Reader;

// Other libraries
use log::info;
use ltools_core::{Grid, Layer, ResultSet, SimulationRecord};
use std::path::Path;

/// On-disk layout variants of the `.mco` file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// First layout, magic `A1`
    V1,
    /// Second layout, magic `mcmloA2.0`
    V2,
}

impl Format {
    /// Magic marker found in the leading bytes of the file
    pub const fn magic(&self) -> &'static str {
        match self {
            Format::V1 => "A1",
            Format::V2 => "mcmloA2.0",
        }
    }
}

/// Record parsed from a V1 `.mco` file
///
/// The V1 layout reports no separate unscattered transmittance, so
/// `results.tu` is always zero and `results.tt == results.td`; this is a
/// format difference, not a parsing artefact.
#[derive(Debug, Clone, PartialEq)]
pub struct McoV1 {
    /// Number of photon packets launched
    pub photons: u64,
    /// Refractive index of the medium above the layer stack
    pub n_above: f64,
    /// Refractive index of the medium below the layer stack
    pub n_below: f64,
    /// Grid geometry
    pub grid: Grid,
    /// Layer stack in file order
    pub layers: Vec<Layer>,
    /// Energy balance and distribution arrays
    pub results: ResultSet,
}

impl Default for McoV1 {
    fn default() -> Self {
        Self {
            photons: 0,
            n_above: 1.0,
            n_below: 1.0,
            grid: Grid::default(),
            layers: Vec::new(),
            results: ResultSet::default(),
        }
    }
}

impl McoV1 {
    /// Read a V1 `.mco` file
    ///
    /// Fails with [Error::UnrecognizedFormat] when the leading bytes do not
    /// match the V1 magic marker; nothing is parsed in that case.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Reading {:?}", path.as_ref());
        let mut reader = Reader::from_file(path)?;
        reader.expect_magic(Format::V1)?;
        reader.read_v1()
    }

    /// Read V1 `.mco` content already in memory
    pub fn from_text(text: &str) -> Result<Self> {
        let mut reader = Reader::from_text(text);
        reader.expect_magic(Format::V1)?;
        reader.read_v1()
    }
}

impl SimulationRecord for McoV1 {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn layers(&self) -> &[Layer] {
        &self.layers
    }

    fn results(&self) -> &ResultSet {
        &self.results
    }
}

/// Photon source description echoed by a V2 file
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    /// Source type token, e.g. `pencil`
    pub kind: String,
    /// Starting depth of the source (cm, as echoed)
    pub depth: f64,
}

impl Default for Source {
    fn default() -> Self {
        Self {
            kind: "pencil".to_string(),
            depth: 0.0,
        }
    }
}

/// Record parsed from a V2 `.mco` file
///
/// V2 layers resolve their optical properties through the named
/// [Media] dictionary and carry their medium name. Boundary media appear
/// in the layer list with no thickness token and are stored with
/// `d = f64::INFINITY`.
///
/// The time-resolved distribution blocks the V2 format reserves
/// (`Rd_t`, `Rd_rt`, `Rd_at`, `Rd_rat`, `Td_t`, `Td_rt`, `Td_at`,
/// `Td_rat`, `A_zt`, `A_rzt`) are not written by the simulator and are
/// not read.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct McoV2 {
    /// Named media dictionary (raw cm-based units)
    pub media: Media,
    /// Photon source description
    pub source: Source,
    /// Grid geometry, including the temporal dimension
    pub grid: Grid,
    /// Layer stack in file order, boundary media included
    pub layers: Vec<Layer>,
    /// Energy balance and distribution arrays
    pub results: ResultSet,
}

impl McoV2 {
    /// Read a V2 `.mco` file
    ///
    /// Fails with [Error::UnrecognizedFormat] when the leading bytes do not
    /// match the V2 magic marker; nothing is parsed in that case.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Reading {:?}", path.as_ref());
        let mut reader = Reader::from_file(path)?;
        reader.expect_magic(Format::V2)?;
        reader.read_v2()
    }

    /// Read V2 `.mco` content already in memory
    pub fn from_text(text: &str) -> Result<Self> {
        let mut reader = Reader::from_text(text);
        reader.expect_magic(Format::V2)?;
        reader.read_v2()
    }
}

impl SimulationRecord for McoV2 {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn layers(&self) -> &[Layer] {
        &self.layers
    }

    fn results(&self) -> &ResultSet {
        &self.results
    }
}

/// A record from either `.mco` layout, detected from the magic marker
#[derive(Debug, Clone, PartialEq)]
pub enum Mco {
    /// Record in the first layout
    V1(McoV1),
    /// Record in the second layout
    V2(McoV2),
}

impl Mco {
    /// Read an `.mco` file of either layout
    ///
    /// The variant is detected from the leading bytes. Fails with
    /// [Error::UnrecognizedFormat] when neither magic marker matches.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Reading {:?}", path.as_ref());
        Self::read(Reader::from_file(path)?)
    }

    /// Read `.mco` content of either layout already in memory
    pub fn from_text(text: &str) -> Result<Self> {
        Self::read(Reader::from_text(text))
    }

    fn read(mut reader: Reader) -> Result<Self> {
        if reader.scanner.starts_with(Format::V2.magic()) {
            Ok(Self::V2(reader.read_v2()?))
        } else if reader.scanner.starts_with(Format::V1.magic()) {
            Ok(Self::V1(reader.read_v1()?))
        } else {
            Err(Error::UnrecognizedFormat {
                expected: format!("{} or {}", Format::V1.magic(), Format::V2.magic()),
                found: reader.scanner.leading(Format::V2.magic().len()),
            })
        }
    }

    /// Layout the record was read from
    pub fn format(&self) -> Format {
        match self {
            Mco::V1(_) => Format::V1,
            Mco::V2(_) => Format::V2,
        }
    }
}

impl SimulationRecord for Mco {
    fn grid(&self) -> &Grid {
        match self {
            Mco::V1(record) => &record.grid,
            Mco::V2(record) => &record.grid,
        }
    }

    fn layers(&self) -> &[Layer] {
        match self {
            Mco::V1(record) => &record.layers,
            Mco::V2(record) => &record.layers,
        }
    }

    fn results(&self) -> &ResultSet {
        match self {
            Mco::V1(record) => &record.results,
            Mco::V2(record) => &record.results,
        }
    }
}
