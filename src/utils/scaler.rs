use num::{Float, NumCast};

/// Round to `places` decimals, ties to even.
///
/// Scales by 10^places, rounds the scaled value half-to-even and scales back,
/// which is how NumPy's `round` treats float64 values. `round2(0.125)` is
/// `0.12`, `round2(0.375)` is `0.38`. NaN stays NaN.
#[inline]
pub fn round_half_even<F: Float>(value: F, places: i32) -> F {
    let factor = <F as NumCast>::from(10.0_f64.powi(places)).unwrap_or_else(F::one);
    let scaled = value * factor;
    let floor = scaled.floor();
    let diff = scaled - floor;
    let half = <F as NumCast>::from(0.5).unwrap_or_else(F::zero);
    let two = F::one() + F::one();
    let rounded = if diff > half {
        floor + F::one()
    } else if diff < half {
        floor
    } else if (floor / two).floor() * two == floor {
        // 偶数側へ
        floor
    } else {
        floor + F::one()
    };
    rounded / factor
}

/// Round to two decimals, ties to even
#[inline]
pub fn round2(value: f64) -> f64 {
    round_half_even(value, 2)
}

/// Map a cosine in `[0, 1]` to a percentage score with two decimals.
/// Values drifting outside the unit interval through float error are clamped,
/// NaN becomes 0.
#[inline]
pub fn unit_to_percent(cosine: f64) -> f64 {
    if cosine.is_nan() {
        return 0.0;
    }
    round2(cosine.clamp(0.0, 1.0) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_go_to_even() {
        assert_eq!(round_half_even(2.5_f64, 0), 2.0);
        assert_eq!(round_half_even(3.5_f64, 0), 4.0);
        assert_eq!(round_half_even(-2.5_f64, 0), -2.0);
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
    }

    #[test]
    fn ordinary_values_round_to_nearest() {
        assert_eq!(round2(70.0), 70.0);
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(33.333_333), 33.33);
        assert_eq!(round_half_even(1.234_f32, 1), 1.2_f32);
    }

    #[test]
    fn percent_is_clamped() {
        assert_eq!(unit_to_percent(1.000_000_000_2), 100.0);
        assert_eq!(unit_to_percent(-1e-12), 0.0);
        assert_eq!(unit_to_percent(f64::NAN), 0.0);
        assert_eq!(unit_to_percent(0.5), 50.0);
    }
}
