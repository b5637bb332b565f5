/// A planar slab of the simulated medium with fixed optical properties
///
/// All values are stored mm-based regardless of the units used by the
/// source file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Layer {
    /// Medium name, for formats that name their media
    pub name: Option<String>,
    /// Refractive index
    pub n: f64,
    /// Absorption coefficient (mm⁻¹)
    pub mu_a: f64,
    /// Scattering coefficient (mm⁻¹)
    pub mu_s: f64,
    /// Scattering anisotropy
    pub g: f64,
    /// Thickness (mm); infinite for a semi-infinite boundary medium
    pub d: f64,
}

impl Layer {
    /// True for boundary media with unbounded thickness
    pub fn is_semi_infinite(&self) -> bool {
        self.d.is_infinite()
    }
}
