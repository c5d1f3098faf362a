use crate::error::Error;

/// Dense polynomial c_n x^n + ... + c_1 x + c_0. The coefficients are stored
/// highest degree first, and there is always at least one coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Create a polynomial from coefficients ordered from the highest degree to
    /// the constant term.
    pub fn new(coeffs: Vec<f64>) -> Result<Polynomial, Error> {
        if coeffs.is_empty() {
            return Err(Error::EmptyPolynomial);
        }
        if coeffs.iter().any(|c| c.is_nan()) {
            return Err(Error::ContainsNaN);
        }
        return Ok(Polynomial { coeffs });
    }

    /// Same as `new`, but the number of coefficients is checked at compile
    /// time. This is what the `poly!` macro uses. The coefficients are not
    /// checked for NaN, which then propagates through evaluation.
    pub fn from_array<const N: usize>(coeffs: [f64; N]) -> Polynomial {
        const { assert!(N > 0, "A polynomial needs at least one coefficient.") };
        Polynomial {
            coeffs: coeffs.to_vec(),
        }
    }

    /// The constant polynomial `c`. Not checked for NaN.
    pub fn constant(c: f64) -> Polynomial {
        Polynomial { coeffs: vec![c] }
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Coefficients, highest degree first.
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// The coefficient of the `x^power` term. Zero if `power` exceeds the
    /// degree.
    pub fn coeff(&self, power: usize) -> f64 {
        match self.degree().checked_sub(power) {
            Some(i) => self.coeffs[i],
            None => 0.,
        }
    }

    /// Evaluate with Horner's scheme.
    pub fn horner(&self, x: f64) -> f64 {
        self.coeffs.iter().fold(0., |acc, c| acc * x + c)
    }

    pub fn derivative(&self) -> Polynomial {
        let deg = self.degree();
        if deg == 0 {
            return Polynomial::constant(0.);
        }
        Polynomial {
            coeffs: self.coeffs[..deg]
                .iter()
                .zip((1..=deg).rev())
                .map(|(c, k)| c * k as f64)
                .collect(),
        }
    }

    /// Sum of two polynomials. The shorter coefficient vector is added into
    /// the low order end of a copy of the longer one.
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let (long, short) = if self.coeffs.len() >= other.coeffs.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut coeffs = long.coeffs.clone();
        let offset = coeffs.len() - short.coeffs.len();
        for (dst, src) in coeffs[offset..].iter_mut().zip(short.coeffs.iter()) {
            *dst += src;
        }
        Polynomial { coeffs }
    }

    /// Product of two polynomials, i.e. the convolution of the coefficients.
    /// Infinite coefficients follow IEEE arithmetic, so `inf * 0` yields NaN.
    pub fn mul(&self, other: &Polynomial) -> Polynomial {
        let mut coeffs = vec![0.; self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Polynomial { coeffs }
    }

    /// Render the polynomial with `arg` as the indeterminate. Zero terms are
    /// skipped, unit coefficients are not printed, and the constant term is
    /// printed bare.
    pub fn render(&self, arg: &str) -> String {
        let deg = self.degree();
        let mut terms: Vec<String> = Vec::with_capacity(self.coeffs.len());
        for (i, &c) in self.coeffs.iter().enumerate() {
            let power = deg - i;
            let term = match power {
                0 => {
                    if c == 0. && !terms.is_empty() {
                        continue;
                    }
                    format!("{c}")
                }
                1 => {
                    if c == 0. {
                        continue;
                    } else if c == 1. {
                        arg.to_string()
                    } else if c == -1. {
                        format!("-({arg})")
                    } else {
                        format!("{c}({arg})")
                    }
                }
                _ => {
                    if c == 0. {
                        continue;
                    } else if c == 1. {
                        format!("({arg})^{power}")
                    } else if c == -1. {
                        format!("-({arg})^{power}")
                    } else {
                        format!("{c}({arg})^{power}")
                    }
                }
            };
            terms.push(term);
        }
        // The constant term is always written when nothing precedes it, so
        // `terms` is never empty here.
        return terms.join(" + ");
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_float_eq;

    #[test]
    fn t_invalid_coeffs() {
        assert_eq!(Polynomial::new(vec![]), Err(Error::EmptyPolynomial));
        assert_eq!(
            Polynomial::new(vec![1., f64::NAN]),
            Err(Error::ContainsNaN)
        );
        assert_eq!(
            Polynomial::new(vec![2., 3.]).unwrap(),
            Polynomial::from_array([2., 3.])
        );
        assert_eq!(Polynomial::new(vec![f64::INFINITY, 0.]).unwrap().degree(), 1);
    }

    #[test]
    fn t_unchecked_nan() {
        // Only `new` validates. The infallible constructors and arithmetic
        // carry NaN through to evaluation.
        assert!(Polynomial::constant(f64::NAN).horner(1.).is_nan());
        assert!(Polynomial::from_array([f64::NAN, 1.]).horner(2.).is_nan());
        let p = Polynomial::constant(f64::INFINITY).mul(&Polynomial::constant(0.));
        assert!(p.coeffs()[0].is_nan());
        assert_eq!(Polynomial::new(p.coeffs().to_vec()), Err(Error::ContainsNaN));
    }

    #[test]
    fn t_degree() {
        assert_eq!(Polynomial::constant(5.).degree(), 0);
        let p = Polynomial::from_array([1., 0., -4.]);
        assert_eq!(p.degree(), 2);
        assert_eq!(p.degree(), p.coeffs().len() - 1);
        assert_eq!(p.coeff(0), -4.);
        assert_eq!(p.coeff(2), 1.);
        assert_eq!(p.coeff(7), 0.);
    }

    #[test]
    fn t_horner() {
        let p = Polynomial::from_array([1.5, -2., 0.25, 3.]);
        for x in [-3., -1.2, 0., 0.7, 2., 10.] {
            let expected = 1.5 * f64::powi(x, 3) - 2. * x * x + 0.25 * x + 3.;
            assert_float_eq!(p.horner(x), expected, 1e-12);
        }
    }

    #[test]
    fn t_derivative() {
        assert_eq!(
            Polynomial::from_array([1., 0.]).derivative(),
            Polynomial::constant(1.)
        );
        assert_eq!(
            Polynomial::constant(0.).derivative(),
            Polynomial::constant(0.)
        );
        assert_eq!(
            Polynomial::constant(7.).derivative(),
            Polynomial::constant(0.)
        );
        assert_eq!(
            Polynomial::from_array([2., -3., 5., 1.]).derivative(),
            Polynomial::from_array([6., -6., 5.])
        );
    }

    #[test]
    fn t_add_does_not_alias() {
        let a = Polynomial::from_array([1., 2., 3.]);
        let b = Polynomial::from_array([10., 20.]);
        let sum = a.add(&b);
        assert_eq!(sum, Polynomial::from_array([1., 12., 23.]));
        assert_eq!(b.add(&a), sum);
        // Operands must be untouched.
        assert_eq!(a, Polynomial::from_array([1., 2., 3.]));
        assert_eq!(b, Polynomial::from_array([10., 20.]));
        // Same degree.
        assert_eq!(
            a.add(&Polynomial::from_array([-1., 0., 1.])),
            Polynomial::from_array([0., 2., 4.])
        );
    }

    #[test]
    fn t_mul() {
        // (x + 1)(x - 1) = x^2 - 1
        assert_eq!(
            Polynomial::from_array([1., 1.]).mul(&Polynomial::from_array([1., -1.])),
            Polynomial::from_array([1., 0., -1.])
        );
        assert_eq!(
            Polynomial::constant(3.).mul(&Polynomial::from_array([2., 0., 1.])),
            Polynomial::from_array([6., 0., 3.])
        );
    }

    #[test]
    fn t_render() {
        assert_eq!(Polynomial::from_array([1., 2., 0.]).render("x"), "(x)^2 + 2(x)");
        assert_eq!(Polynomial::from_array([1., 0., -4.]).render("x"), "(x)^2 + -4");
        assert_eq!(Polynomial::from_array([1., 0.]).render("t"), "t");
        assert_eq!(Polynomial::from_array([-1., 0.]).render("t"), "-(t)");
        assert_eq!(
            Polynomial::from_array([-1., 0., 0., 2.5]).render("y"),
            "-(y)^3 + 2.5"
        );
        assert_eq!(Polynomial::from_array([3., 1.]).render("x"), "3(x) + 1");
        assert_eq!(Polynomial::constant(0.).render("x"), "0");
        assert_eq!(Polynomial::from_array([0., 0.]).render("x"), "0");
        assert_eq!(Polynomial::constant(-2.).render("x"), "-2");
    }
}
