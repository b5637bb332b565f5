use nalgebra::DMatrix;

/// Energy balance scalars and distribution arrays of one simulation run
///
/// Scalars are fractions of the incident energy. Distribution arrays are
/// unit-normalized to mm-based units with their trailing overflow bin
/// dropped where the source format writes one. Arrays whose section marker
/// was absent from the file are simply left empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    /// Specular reflectance
    pub rsp: f64,
    /// Unscattered reflectance
    pub ru: f64,
    /// Diffuse reflectance
    pub rd: f64,
    /// Total reflectance
    pub rt: f64,
    /// Unscattered transmittance
    pub tu: f64,
    /// Diffuse transmittance
    pub td: f64,
    /// Total transmittance
    pub tt: f64,
    /// Absorbed fraction
    pub absorbed: f64,
    /// Absorbance per depth bin (mm⁻¹)
    pub az: Vec<f64>,
    /// Diffuse reflectance per radial bin (mm⁻²)
    pub rdr: Vec<f64>,
    /// Diffuse reflectance per angular bin (sr⁻¹)
    pub rda: Vec<f64>,
    /// Transmittance per radial bin (mm⁻²)
    pub tdr: Vec<f64>,
    /// Transmittance per angular bin (sr⁻¹)
    pub tda: Vec<f64>,
    /// Absorbance per depth and radius (mm⁻³), indexed `(depth, radius)`
    pub arz: DMatrix<f64>,
    /// Diffuse reflectance per angle and radius (mm⁻² sr⁻¹), indexed
    /// `(angle, radius)`
    pub rdra: DMatrix<f64>,
    /// Transmittance per angle and radius (mm⁻² sr⁻¹), indexed
    /// `(angle, radius)`
    pub tdra: DMatrix<f64>,
}

impl ResultSet {
    /// Sum of all escaping and absorbed fractions
    ///
    /// Close to 1.0 for a converged run.
    pub fn total(&self) -> f64 {
        self.ru + self.rd + self.tu + self.td + self.absorbed
    }
}

impl Default for ResultSet {
    fn default() -> Self {
        Self {
            rsp: 0.0,
            ru: 0.0,
            rd: 0.0,
            rt: 0.0,
            tu: 0.0,
            td: 0.0,
            tt: 0.0,
            absorbed: 0.0,
            az: Vec::new(),
            rdr: Vec::new(),
            rda: Vec::new(),
            tdr: Vec::new(),
            tda: Vec::new(),
            arz: DMatrix::zeros(0, 0),
            rdra: DMatrix::zeros(0, 0),
            tdra: DMatrix::zeros(0, 0),
        }
    }
}
