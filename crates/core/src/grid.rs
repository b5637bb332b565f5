/// Simulation grid geometry with derived coordinate sequences
///
/// Step sizes are mm (time in ps), bin counts dimensionless. The radial
/// positions `r` are the left edges of each retained radial bin (length
/// `ndr - 1`, the last bin being the overflow bin), and the axial positions
/// `z` are the top edges of each depth bin (length `ndz`). Both are linear
/// ramps starting at zero.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Grid {
    /// Axial step (mm)
    pub dz: f64,
    /// Radial step (mm)
    pub dr: f64,
    /// Temporal step (ps), for formats that resolve time
    pub dt: Option<f64>,
    /// Number of depth bins
    pub ndz: usize,
    /// Number of radial bins
    pub ndr: usize,
    /// Number of angular bins
    pub nda: usize,
    /// Number of temporal bins, for formats that resolve time
    pub ndt: Option<usize>,
    /// Radial positions (mm), left bin edges
    pub r: Vec<f64>,
    /// Axial positions (mm), top bin edges
    pub z: Vec<f64>,
}

impl Grid {
    /// Grid with coordinate ramps derived from the steps and bin counts
    pub fn new(dz: f64, dr: f64, ndz: usize, ndr: usize, nda: usize) -> Self {
        let r = (0..ndr.saturating_sub(1)).map(|i| i as f64 * dr).collect();
        let z = (0..ndz).map(|i| i as f64 * dz).collect();
        Self {
            dz,
            dr,
            dt: None,
            ndz,
            ndr,
            nda,
            ndt: None,
            r,
            z,
        }
    }

    /// Attach the temporal dimension used by time-resolving formats
    pub fn with_time(mut self, dt: f64, ndt: usize) -> Self {
        self.dt = Some(dt);
        self.ndt = Some(ndt);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_ramps() {
        let grid = Grid::new(0.1, 0.5, 4, 3, 2);
        assert_eq!(grid.z, vec![0.0, 0.1, 0.2, 0.30000000000000004]);
        assert_eq!(grid.r, vec![0.0, 0.5]);
        assert_eq!(grid.dt, None);
    }

    #[test]
    fn time_dimension_is_optional() {
        let grid = Grid::new(0.1, 0.5, 4, 3, 2).with_time(1.0, 10);
        assert_eq!(grid.dt, Some(1.0));
        assert_eq!(grid.ndt, Some(10));
    }
}
