// Math utilities and helper functions

/// Combine two opposing digital inputs into a raw axis value.
///
/// Holding both (or neither) yields 0.0, matching raw-axis semantics.
pub fn raw_axis(negative: bool, positive: bool) -> f32 {
    match (negative, positive) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

/// Clamp an analog axis value into [-1, 1]. NaN collapses to 0.0.
pub fn clamp_axis(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_axis() {
        assert_eq!(raw_axis(false, false), 0.0);
        assert_eq!(raw_axis(true, false), -1.0);
        assert_eq!(raw_axis(false, true), 1.0);
        assert_eq!(raw_axis(true, true), 0.0);
    }

    #[test]
    fn test_clamp_axis() {
        assert_eq!(clamp_axis(0.5), 0.5);
        assert_eq!(clamp_axis(-3.0), -1.0);
        assert_eq!(clamp_axis(2.0), 1.0);
        assert_eq!(clamp_axis(f32::NAN), 0.0);
    }
}
