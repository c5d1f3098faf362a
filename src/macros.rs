/// Construct a polynomial function from its coefficients, ordered from the
/// highest degree to the constant term. At least one coefficient is
/// required, and this is checked at compile time.
///
/// ```
/// use symfunc::poly;
/// let f = poly![1, 0, -4]; // x^2 - 4
/// assert_eq!(f.eval(&3.).unwrap(), 5.);
/// ```
#[macro_export]
macro_rules! poly {
    ($($coeff:expr),+ $(,)?) => {
        $crate::Func::from($crate::Polynomial::from_array([$(($coeff) as f64),+]))
    };
}

/// Assert that the floating point numbers are equal within the given epsilon.
#[macro_export]
macro_rules! assert_float_eq {
    ($a:expr, $b:expr, $eps:expr, $debug:expr) => {{
        // Make variables to avoid evaluating experssions multiple times.
        let a = $a;
        let b = $b;
        let eps = $eps;
        let error = f64::abs(a - b);
        if error > eps {
            eprintln!("{:?}", $debug);
        }
        assert!(
            error <= eps,
            "Assertion failed: |({}) - ({})| = {:e} <= {:e}",
            a,
            b,
            error,
            eps
        );
    }};
    ($a:expr, $b:expr, $eps:expr) => {
        $crate::assert_float_eq!($a, $b, $eps, "")
    };
    ($a:expr, $b:expr) => {
        $crate::assert_float_eq!($a, $b, f64::EPSILON)
    };
}
