use std::fmt::Display;

/// An f64 wrapper that formats whole numbers with a decimal point.
///
/// Keeps `20.0` rendering as `20.0` rather than `20`, so a double never
/// reads like an integer.
pub struct ObviousFloat(pub f64);

impl Display for ObviousFloat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let val = self.0;
        // This serialises these as 'NaN', 'inf' and '-inf', respectively.
        if val.round() == val && val.is_finite() {
            write!(f, "{}.0", val)
        } else {
            write!(f, "{}", val)
        }
    }
}

/// The f32 counterpart of [`ObviousFloat`]. Formatting the f32 directly
/// avoids widening artifacts (`0.1f32 as f64` is not `0.1`).
pub struct ObviousFloat32(pub f32);

impl Display for ObviousFloat32 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let val = self.0;
        if val.round() == val && val.is_finite() {
            write!(f, "{}.0", val)
        } else {
            write!(f, "{}", val)
        }
    }
}
