// Other libraries
use ltools_core::{Grid, Layer, ResultSet, SimulationRecord};

/// Photon source geometry, selected by the `mcflag` parameter
///
/// All lengths are mm.
#[derive(Debug, Clone, PartialEq)]
pub enum Beam {
    /// Flat-top collimated beam of the given radius (`mcflag = 0`)
    FlatTop {
        /// Beam radius
        radius: f64,
    },
    /// Focused Gaussian beam (`mcflag = 1`)
    Gaussian {
        /// 1/e² radius at the surface
        radius: f64,
        /// 1/e² radius at the focus
        waist: f64,
        /// Depth of the focus below the surface
        focus_depth: f64,
    },
    /// Isotropic point source (`mcflag = 2`)
    Isotropic {
        /// Source x position
        x: f64,
        /// Source y position
        y: f64,
        /// Source z position
        z: f64,
    },
}

impl Default for Beam {
    fn default() -> Self {
        Self::FlatTop { radius: 0.0 }
    }
}

/// Record parsed from an MCSub output file
///
/// MCSub simulates a single semi-infinite layer, so the stack always holds
/// exactly one layer with `d = f64::INFINITY`, and the grid has no angular
/// or temporal dimension. The file reports no specular/diffuse
/// transmittance split; only the reflectance side of the energy balance is
/// populated.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct McSub {
    /// Number of photon packets launched
    pub photons: u64,
    /// Refractive index of the medium above the layer
    pub n_above: f64,
    /// Photon source geometry
    pub beam: Beam,
    /// The single semi-infinite layer
    pub layers: Vec<Layer>,
    /// Grid geometry
    pub grid: Grid,
    /// Energy balance, radial reflectance, and fluence
    pub results: ResultSet,
}

impl SimulationRecord for McSub {
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
