/// Check for equality between two components, allowing for the error of
/// storing a value as a [`Component`](crate::Component). The tolerance is a
/// tenth of the step of 5 decimal places, so a value rounded to the wrong
/// neighbour still fails.
#[macro_export]
macro_rules! assert_component_eq {
    ($actual:expr,$expected:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = 1e-6 as $crate::Component);
    }};
}
