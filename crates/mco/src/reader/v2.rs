use log::debug;

use ltools_core::units::{cm_to_mm, per_cm2_to_per_mm2, per_cm3_to_per_mm3, per_cm_to_per_mm};
use ltools_core::{Grid, Layer};

use crate::error::{Error, Result};
use crate::model::{McoV2, Medium, Source};
use crate::parsers;

use super::{apply_floor, Reader, ARZ_FLOOR};

// Balance labels appear once in V2 files
const ONCE: usize = 1;

// Distribution markers appear first in the echoed scored-items list and
// again as the actual block header
const SECOND: usize = 2;

// Input echo section marker
const INPUT_MARKER: &str = "mcmli2.0";

// ! V2 grammar
impl Reader {
    /// Parse the V2 `.mco` layout
    pub(crate) fn read_v2(&mut self) -> Result<McoV2> {
        debug!("------------------");
        debug!(" Parsing V2 file  ");
        debug!("------------------");

        let mut record = McoV2::default();

        if !self.scanner.skip_to_line_after(INPUT_MARKER, ONCE) {
            return Err(Error::SectionNotFound(INPUT_MARKER.to_string()));
        }

        self.read_v2_media(&mut record)?;

        // the echoed output file name separates media from layers
        self.scanner.next_line()?;

        self.read_v2_layers(&mut record)?;

        record.source = Source {
            kind: self.scanner.next_line()?,
            depth: self.next_value()?,
        };

        // step sizes arrive in cm, the time step in ps
        let steps = self.next_values(3)?;
        let counts = self.next_values(4)?;
        record.grid = Grid::new(
            cm_to_mm(steps[0]),
            cm_to_mm(steps[1]),
            counts[0] as usize,
            counts[1] as usize,
            counts[3] as usize,
        )
        .with_time(steps[2], counts[2] as usize);
        debug!(
            "grid: ndz = {}, ndr = {}, ndt = {:?}, nda = {}",
            record.grid.ndz, record.grid.ndr, record.grid.ndt, record.grid.nda
        );

        self.read_v2_balance(&mut record)?;
        self.read_v2_distributions(&mut record)?;

        debug!("V2 read successful");
        Ok(record)
    }

    /// Named media dictionary, one line per medium up to `end`
    fn read_v2_media(&mut self, record: &mut McoV2) -> Result<()> {
        loop {
            let line = self.scanner.next_line()?;
            if line == "end" {
                break;
            }
            let (_, (name, [n, mu_a, mu_s, g])) = parsers::medium_line(&line)?;
            record.media.push(Medium {
                name: name.to_string(),
                n,
                mu_a,
                mu_s,
                g,
            });
        }
        debug!("media = {}", record.media.len());
        Ok(())
    }

    /// Layer stack, one named line per layer up to `end`
    ///
    /// Each layer resolves its optical properties through the media
    /// dictionary. A line with no thickness token is a semi-infinite
    /// boundary medium.
    fn read_v2_layers(&mut self, record: &mut McoV2) -> Result<()> {
        loop {
            let line = self.scanner.next_line()?;
            if line == "end" {
                break;
            }
            let (_, (name, thickness)) = parsers::layer_line(&line)?;
            let medium = record
                .media
                .get(name)
                .ok_or_else(|| Error::UndefinedMedium(name.to_string()))?;
            record.layers.push(Layer {
                name: Some(name.to_string()),
                n: medium.n,
                mu_a: per_cm_to_per_mm(medium.mu_a),
                mu_s: per_cm_to_per_mm(medium.mu_s),
                g: medium.g,
                d: thickness.map_or(f64::INFINITY, cm_to_mm),
            });
        }
        debug!("layers = {}", record.layers.len());
        Ok(())
    }

    /// `RAT` energy balance block
    fn read_v2_balance(&mut self, record: &mut McoV2) -> Result<()> {
        if !self.scanner.skip_to_line_after("RAT", ONCE) {
            return Ok(());
        }

        let results = &mut record.results;
        results.rsp = self.next_value()?;
        results.ru = self.next_value()?;
        results.rd = self.next_value()?;
        results.rt = results.ru + results.rd;
        results.absorbed = self.next_value()?;
        results.tu = self.next_value()?;
        results.td = self.next_value()?;
        results.tt = results.tu + results.td;
        Ok(())
    }

    /// Labelled distribution blocks, each independently optional
    ///
    /// Every marker is also echoed once in the scored-items list of the
    /// input section, so block headers are the second occurrence.
    fn read_v2_distributions(&mut self, record: &mut McoV2) -> Result<()> {
        let (ndz, ndr, nda) = (record.grid.ndz, record.grid.ndr, record.grid.nda);
        let results = &mut record.results;

        if self.scanner.skip_to_line_after("A_z", SECOND) {
            results.az = self.read_trimmed(ndz, per_cm_to_per_mm)?;
        }
        if self.scanner.skip_to_line_after("Rd_r", SECOND) {
            results.rdr = self.read_trimmed(ndr, per_cm2_to_per_mm2)?;
        }
        if self.scanner.skip_to_line_after("Rd_a", SECOND) {
            results.rda = self.scanner.read_floats(nda)?;
        }
        if self.scanner.skip_to_line_after("Td_r", SECOND) {
            results.tdr = self.read_trimmed(ndr, per_cm2_to_per_mm2)?;
        }
        if self.scanner.skip_to_line_after("Td_a", SECOND) {
            results.tda = self.scanner.read_floats(nda)?;
        }
        if self.scanner.skip_to_line_after("A_rz", SECOND) {
            results.arz = self.read_matrix(ndz, ndr, per_cm3_to_per_mm3)?;
            apply_floor(&mut results.arz, ARZ_FLOOR);
        }
        if self.scanner.skip_to_line_after("Rd_ra", SECOND) {
            results.rdra = self.read_matrix(nda, ndr, per_cm2_to_per_mm2)?;
        }
        if self.scanner.skip_to_line_after("Td_ra", SECOND) {
            results.tdra = self.read_matrix(nda, ndr, per_cm2_to_per_mm2)?;
        }
        Ok(())
    }
}
