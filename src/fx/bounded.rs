//! Macro for range-constrained style values.
//!
//! Generated types validate in const contexts, so style constants that
//! drift out of range fail at compile time rather than rendering as
//! broken CSS.

/// Creates a bounded f32 newtype with min/max constraints.
///
/// # Example
/// ```ignore
/// bounded_f32!(Opacity, 0.0, 1.0);
/// const FULL: Opacity = Opacity::new(1.0);
/// ```
macro_rules! bounded_f32 {
    ($name:ident, $min:expr, $max:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(f32);

        impl $name {
            pub const MIN: f32 = $min;
            pub const MAX: f32 = $max;

            #[track_caller]
            pub const fn new(value: f32) -> Self {
                if value < Self::MIN || value > Self::MAX {
                    panic!(concat!(
                        stringify!($name),
                        " value out of bounds [",
                        stringify!($min),
                        ", ",
                        stringify!($max),
                        "]"
                    ));
                }
                Self(value)
            }

            pub fn clamped(value: f32) -> Self {
                Self(value.clamp(Self::MIN, Self::MAX))
            }

            pub const fn value(&self) -> f32 {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(Self::MIN)
            }
        }
    };
}

pub(crate) use bounded_f32;

#[cfg(test)]
mod tests {
    use super::*;

    bounded_f32!(TestNorm, 0.0, 1.0);

    const HALF: TestNorm = TestNorm::new(0.5);

    #[test]
    fn const_values_pass_validation() {
        assert_eq!(HALF.value(), 0.5);
    }

    #[test]
    fn clamped_pins_to_bounds() {
        assert_eq!(TestNorm::clamped(3.0).value(), 1.0);
        assert_eq!(TestNorm::clamped(-0.2).value(), 0.0);
    }

    #[test]
    fn default_is_the_minimum() {
        assert_eq!(TestNorm::default().value(), 0.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn out_of_range_rejected() {
        let _ = TestNorm::new(1.01);
    }
}
