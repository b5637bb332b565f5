//! Conversions from the cm-based file units to the mm-based record units
//!
//! Each reader applies these exactly once per field, in the file-to-record
//! direction only. There is no writer, so no reverse set exists.

/// Length, cm to mm
#[inline]
pub fn cm_to_mm(value: f64) -> f64 {
    value * 10.0
}

/// Linear coefficient, cm⁻¹ to mm⁻¹
#[inline]
pub fn per_cm_to_per_mm(value: f64) -> f64 {
    value / 10.0
}

/// Area density, cm⁻² to mm⁻²
#[inline]
pub fn per_cm2_to_per_mm2(value: f64) -> f64 {
    value / 100.0
}

/// Volume density, cm⁻³ to mm⁻³
#[inline]
pub fn per_cm3_to_per_mm3(value: f64) -> f64 {
    value / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_are_single_step() {
        assert_eq!(cm_to_mm(0.1), 1.0);
        assert_eq!(per_cm_to_per_mm(1.0), 0.1);
        assert_eq!(per_cm2_to_per_mm2(100.0), 1.0);
        assert_eq!(per_cm3_to_per_mm3(1000.0), 1.0);
    }
}
