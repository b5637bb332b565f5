use log::debug;

use ltools_core::units::{cm_to_mm, per_cm2_to_per_mm2, per_cm3_to_per_mm3, per_cm_to_per_mm};
use ltools_core::{Grid, Layer};

use crate::error::Result;
use crate::model::McoV1;

use super::{apply_floor, Reader, ARZ_FLOOR};

// Every V1 section marker appears exactly once
const ONCE: usize = 1;

// Physical header lines preceding the photon count
const PHOTON_LINE_OFFSET: usize = 13;

// ! V1 grammar
impl Reader {
    /// Parse the V1 `.mco` layout
    pub(crate) fn read_v1(&mut self) -> Result<McoV1> {
        debug!("------------------");
        debug!(" Parsing V1 file  ");
        debug!("------------------");

        let mut record = McoV1::default();

        // the photon count sits at a fixed physical line offset
        self.scanner.rewind();
        self.scanner.skip_raw_lines(PHOTON_LINE_OFFSET);
        record.photons = self.next_value()? as u64;
        debug!("photons = {}", record.photons);

        // grid steps arrive in cm
        let steps = self.next_values(2)?;
        let counts = self.next_values(3)?;
        record.grid = Grid::new(
            cm_to_mm(steps[0]),
            cm_to_mm(steps[1]),
            counts[0] as usize,
            counts[1] as usize,
            counts[2] as usize,
        );
        debug!(
            "grid: ndz = {}, ndr = {}, nda = {}",
            record.grid.ndz, record.grid.ndr, record.grid.nda
        );

        self.read_v1_layers(&mut record)?;
        self.read_v1_balance(&mut record)?;
        self.read_v1_distributions(&mut record)?;

        debug!("V1 read successful");
        Ok(record)
    }

    /// Explicit-count layer table: count, medium above, one line per
    /// layer, medium below
    fn read_v1_layers(&mut self, record: &mut McoV1) -> Result<()> {
        let num_layers = self.next_value()? as usize;
        record.n_above = self.next_value()?;

        for _ in 0..num_layers {
            let values = self.next_values(5)?;
            record.layers.push(Layer {
                name: None,
                n: values[0],
                mu_a: per_cm_to_per_mm(values[1]),
                mu_s: per_cm_to_per_mm(values[2]),
                g: values[3],
                d: cm_to_mm(values[4]),
            });
        }

        record.n_below = self.next_value()?;
        debug!("layers = {}", record.layers.len());
        Ok(())
    }

    /// `RAT` energy balance block
    fn read_v1_balance(&mut self, record: &mut McoV1) -> Result<()> {
        if !self.scanner.skip_to_line_after("RAT", ONCE) {
            return Ok(());
        }

        let results = &mut record.results;
        results.rsp = self.next_value()?;
        // V1 reports no separate unscattered reflectance
        results.ru = results.rsp;
        results.rd = self.next_value()?;
        results.rt = results.rd + results.ru;
        results.absorbed = self.next_value()?;
        results.td = self.next_value()?;
        // V1 has no unscattered transmittance field
        results.tt = results.td;
        results.tu = 0.0;
        Ok(())
    }

    /// Labelled distribution blocks, each independently optional
    fn read_v1_distributions(&mut self, record: &mut McoV1) -> Result<()> {
        let (ndz, ndr, nda) = (record.grid.ndz, record.grid.ndr, record.grid.nda);
        let results = &mut record.results;

        if self.scanner.skip_to_line_after("A_z", ONCE) {
            results.az = self.read_trimmed(ndz, per_cm_to_per_mm)?;
        }
        if self.scanner.skip_to_line_after("Rd_r", ONCE) {
            results.rdr = self.read_trimmed(ndr, per_cm2_to_per_mm2)?;
        }
        if self.scanner.skip_to_line_after("Rd_a", ONCE) {
            results.rda = self.scanner.read_floats(nda)?;
        }
        if self.scanner.skip_to_line_after("Tt_r", ONCE) {
            results.tdr = self.read_trimmed(ndr, per_cm2_to_per_mm2)?;
        }
        if self.scanner.skip_to_line_after("Tt_a", ONCE) {
            results.tda = self.scanner.read_floats(nda)?;
        }
        if self.scanner.skip_to_line_after("A_rz", ONCE) {
            results.arz = self.read_matrix(ndz, ndr, per_cm3_to_per_mm3)?;
            apply_floor(&mut results.arz, ARZ_FLOOR);
        }
        if self.scanner.skip_to_line_after("Rd_ra", ONCE) {
            results.rdra = self.read_matrix(nda, ndr, per_cm2_to_per_mm2)?;
        }
        if self.scanner.skip_to_line_after("Tt_ra", ONCE) {
            results.tdra = self.read_matrix(nda, ndr, per_cm2_to_per_mm2)?;
        }
        Ok(())
    }
}
