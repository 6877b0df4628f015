use super::error::EngineError;
use tracing::instrument;

/// Returns `num` evenly spaced values over the closed interval `[start, end]`.
///
/// Both endpoints are included exactly. A single point yields `[start]`.
#[instrument(level = "trace")]
pub fn linspace(start: f64, end: f64, num: usize) -> Result<Vec<f64>, EngineError> {
    if num == 0 {
        return Err(EngineError::EmptySampling(num));
    }
    if !start.is_finite() || !end.is_finite() || end < start {
        return Err(EngineError::InvalidRange { start, end });
    }
    if num == 1 {
        return Ok(vec![start]);
    }

    let step = (end - start) / (num - 1) as f64;
    let mut values: Vec<f64> = (0..num).map(|i| start + step * i as f64).collect();
    // Pin the last point so accumulated rounding never misses the endpoint.
    values[num - 1] = end;
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_endpoints() {
        let values = linspace(380.0, 750.0, 100).unwrap();
        assert_eq!(values.len(), 100);
        assert_eq!(values[0], 380.0);
        assert_eq!(values[99], 750.0);
    }

    #[test]
    fn linspace_produces_even_steps() {
        let values = linspace(0.0, 1.0, 5).unwrap();
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn linspace_is_strictly_increasing() {
        let values = linspace(380.0, 750.0, 100).unwrap();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn linspace_single_point_returns_start() {
        assert_eq!(linspace(2.0, 9.0, 1).unwrap(), vec![2.0]);
    }

    #[test]
    fn linspace_rejects_zero_points() {
        assert_eq!(linspace(0.0, 1.0, 0), Err(EngineError::EmptySampling(0)));
    }

    #[test]
    fn linspace_rejects_inverted_or_non_finite_ranges() {
        assert!(matches!(
            linspace(2.0, 1.0, 3),
            Err(EngineError::InvalidRange { .. })
        ));
        assert!(matches!(
            linspace(f64::NAN, 1.0, 3),
            Err(EngineError::InvalidRange { .. })
        ));
    }
}
