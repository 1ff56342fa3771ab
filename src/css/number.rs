/// A number that can be written into generated CSS.
///
/// Floats print their shortest round-trip form in their own width, so
/// `1.1_f32` is `1.1` rather than the widened `1.100000023841858`.
pub trait CssNumber: Copy {
    fn css_string(self) -> String;
}

macro_rules! float_css_number {
    ($($ty:ty),*) => {$(
        impl CssNumber for $ty {
            fn css_string(self) -> String {
                if !self.is_finite() {
                    return "0".to_owned();
                }
                // -0.0 == 0.0, this folds the sign away
                let value = if self == 0.0 { 0.0 } else { self };
                format!("{value}")
            }
        }
    )*};
}

macro_rules! int_css_number {
    ($($ty:ty),*) => {$(
        impl CssNumber for $ty {
            fn css_string(self) -> String {
                self.to_string()
            }
        }
    )*};
}

float_css_number!(f32, f64);
int_css_number!(i32, u32, i64, u64, usize);

/// Formats a number the way it should appear inside generated CSS.
///
/// The value is written as given, with no rounding: `1.0` becomes `1`,
/// `0.125` stays `0.125`. Negative zero is printed as `0`. Non-finite
/// input prints as `0` so the emitters stay total.
pub fn fmt_number(value: impl CssNumber) -> String {
    value.css_string()
}

/// `fmt_number` with a `px` suffix.
pub fn px(value: impl CssNumber) -> String {
    format!("{}px", fmt_number(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_have_no_fraction() {
        assert_eq!(fmt_number(10.0), "10");
        assert_eq!(fmt_number(-45), "-45");
        assert_eq!(fmt_number(9999.0_f32), "9999");
    }

    #[test]
    fn test_fractions_keep_their_precision() {
        assert_eq!(fmt_number(0.2), "0.2");
        assert_eq!(fmt_number(0.1_f32), "0.1");
        assert_eq!(fmt_number(1.1_f32), "1.1");
        assert_eq!(fmt_number(1.5_f32), "1.5");
        assert_eq!(fmt_number(0.125_f32), "0.125");
        assert_eq!(fmt_number(1.005_f32), "1.005");
        assert_eq!(fmt_number(0.004_f32), "0.004");
        assert_eq!(px(-0.001_f32), "-0.001px");
    }

    #[test]
    fn test_negative_zero_and_nan() {
        assert_eq!(fmt_number(-0.0), "0");
        assert_eq!(fmt_number(-0.0_f32), "0");
        assert_eq!(fmt_number(f64::NAN), "0");
        assert_eq!(px(f32::INFINITY), "0px");
    }
}
