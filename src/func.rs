use crate::{
    error::Error,
    eval::Value,
    poly::Polynomial as Poly,
};
use ndarray::Array1;

/// A function of a single variable, represented as a tree of nodes.
///
/// Every node is immutable once constructed. Operations such as `+`, `*`,
/// `compose` and `derivative` always produce new nodes, leaving their
/// operands untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Func {
    /// A dense polynomial. Affine, scaling and constant functions are
    /// polynomials with a fixed coefficient shape.
    Polynomial(Poly),
    /// f(x) + g(x)
    Sum(Box<Func>, Box<Func>),
    /// f(x) * g(x)
    Product(Box<Func>, Box<Func>),
    /// f(g(x))
    Compose(Box<Func>, Box<Func>),
    /// x^n
    Power(f64),
    /// Natural logarithm.
    Log,
    /// e^x
    Exponential,
    Sin,
    Cos,
    /// A named placeholder function, only meant for display. It has no
    /// numeric value.
    Symbolic(String),
}

use Func::*;

/// Default number of points in the grid used by `Func::plot_data`.
pub const PLOT_SAMPLES: usize = 100;
/// Default interval of the grid used by `Func::plot_data`.
pub const PLOT_RANGE: (f64, f64) = (-1., 1.);

impl Func {
    pub fn sum(f: Func, g: Func) -> Func {
        Sum(Box::new(f), Box::new(g))
    }

    pub fn product(f: Func, g: Func) -> Func {
        Product(Box::new(f), Box::new(g))
    }

    /// The composition `self(inner(x))`.
    pub fn compose(self, inner: Func) -> Func {
        Compose(Box::new(self), Box::new(inner))
    }

    /// `self` raised to the power `n`, i.e. `Power(n)` composed with `self`.
    pub fn pow(self, n: f64) -> Func {
        power(n).compose(self)
    }

    /// Check if this is a display only symbolic node.
    pub fn is_symbolic(&self) -> bool {
        matches!(self, Symbolic(_))
    }

    /// Get the polynomial if this node is one.
    pub fn as_polynomial(&self) -> Option<&Poly> {
        match self {
            Polynomial(p) => Some(p),
            _ => None,
        }
    }

    /**
    Apply the function to `arg`. This dispatches on the kind of argument:

    - Another function produces the composition `self(arg)`.
    - A name produces a display string with that name as the indeterminate.
    - A numeric value is evaluated, and the result has the same shape as the
    input.
    */
    pub fn call(&self, arg: impl Into<Arg>) -> Result<Output, Error> {
        Ok(match arg.into() {
            Arg::Func(inner) => Output::Func(self.clone().compose(inner)),
            Arg::Name(name) => Output::Text(self.render(&name)),
            Arg::Value(value) => Output::Value(self.eval_value(&value)?),
        })
    }

    /// Evaluate the function on `xs`, returning the grid and the values. This
    /// is all a plotting library needs to draw the function.
    pub fn sample(&self, xs: &Array1<f64>) -> Result<(Array1<f64>, Array1<f64>), Error> {
        let ys = self.eval(xs)?;
        return Ok((xs.clone(), ys));
    }

    /// Same as `sample`, on `PLOT_SAMPLES` evenly spaced points spanning
    /// `PLOT_RANGE`.
    pub fn plot_data(&self) -> Result<(Array1<f64>, Array1<f64>), Error> {
        self.sample(&linspace(PLOT_RANGE.0, PLOT_RANGE.1, PLOT_SAMPLES))
    }
}

/// `n` evenly spaced points from `start` to `stop`, both inclusive.
pub fn linspace(start: f64, stop: f64, n: usize) -> Array1<f64> {
    Array1::linspace(start, stop, n)
}

/// The argument of `Func::call`.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Func(Func),
    Name(String),
    Value(Value),
}

/// The result of `Func::call`, one variant per kind of `Arg`.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Func(Func),
    Text(String),
    Value(Value),
}

impl Output {
    pub fn func(self) -> Option<Func> {
        match self {
            Output::Func(f) => Some(f),
            Output::Text(_) | Output::Value(_) => None,
        }
    }

    pub fn text(self) -> Option<String> {
        match self {
            Output::Text(s) => Some(s),
            Output::Func(_) | Output::Value(_) => None,
        }
    }

    pub fn value(self) -> Option<Value> {
        match self {
            Output::Value(v) => Some(v),
            Output::Func(_) | Output::Text(_) => None,
        }
    }
}

impl From<Func> for Arg {
    fn from(value: Func) -> Self {
        Arg::Func(value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Name(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Name(value)
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Arg::Value(value)
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Value(value.into())
    }
}

impl From<Array1<f64>> for Arg {
    fn from(value: Array1<f64>) -> Self {
        Arg::Value(value.into())
    }
}

impl From<Vec<f64>> for Arg {
    fn from(value: Vec<f64>) -> Self {
        Arg::Value(value.into())
    }
}

impl From<Poly> for Func {
    fn from(value: Poly) -> Self {
        Polynomial(value)
    }
}

/// Polynomial `a * x + b`. Like `scale` and `constant`, this does not check
/// for NaN, use `polynomial` for validated coefficients.
pub fn affine(a: f64, b: f64) -> Func {
    Polynomial(Poly::from_array([a, b]))
}

/// Polynomial `a * x`.
pub fn scale(a: f64) -> Func {
    Polynomial(Poly::from_array([a, 0.]))
}

/// The constant polynomial `c`.
pub fn constant(c: f64) -> Func {
    Polynomial(Poly::constant(c))
}

/// Polynomial from coefficients ordered from the highest degree to the
/// constant term.
pub fn polynomial(coeffs: Vec<f64>) -> Result<Func, Error> {
    Ok(Polynomial(Poly::new(coeffs)?))
}

pub fn power(n: f64) -> Func {
    Power(n)
}

pub fn log() -> Func {
    Log
}

pub fn exp() -> Func {
    Exponential
}

pub fn sin() -> Func {
    Sin
}

pub fn cos() -> Func {
    Cos
}

/// A display only function with the given name.
pub fn symbolic(name: impl Into<String>) -> Func {
    Symbolic(name.into())
}

impl std::ops::Add for Func {
    type Output = Func;

    /// Polynomials are closed under addition, so the sum of two polynomials
    /// is a polynomial. Everything else produces a `Sum` node.
    fn add(self, rhs: Func) -> Func {
        match (&self, &rhs) {
            (Polynomial(a), Polynomial(b)) => Polynomial(a.add(b)),
            _ => Func::sum(self, rhs),
        }
    }
}

impl std::ops::Mul for Func {
    type Output = Func;

    /// Polynomials are closed under multiplication, so the product of two
    /// polynomials is a polynomial. Everything else produces a `Product` node.
    fn mul(self, rhs: Func) -> Func {
        match (&self, &rhs) {
            (Polynomial(a), Polynomial(b)) => Polynomial(a.mul(b)),
            _ => Func::product(self, rhs),
        }
    }
}

impl std::ops::Neg for Func {
    type Output = Func;

    fn neg(self) -> Func {
        scale(-1.).compose(self)
    }
}

impl std::ops::Sub for Func {
    type Output = Func;

    fn sub(self, rhs: Func) -> Func {
        self + (-rhs)
    }
}

impl std::ops::Div for Func {
    type Output = Func;

    fn div(self, rhs: Func) -> Func {
        self * rhs.pow(-1.)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{assert_float_eq, poly, test::util::compare_funcs};
    use ndarray::array;

    #[test]
    fn t_constructors() {
        assert_eq!(affine(2., 3.), poly![2., 3.]);
        assert_eq!(scale(4.), poly![4., 0.]);
        assert_eq!(constant(1.5), poly![1.5]);
        assert_eq!(polynomial(vec![1., 0., -4.]).unwrap(), poly![1., 0., -4.]);
        assert_eq!(polynomial(vec![]), Err(Error::EmptyPolynomial));
        assert_eq!(power(3.), Power(3.));
        assert_eq!(exp(), Exponential);
        assert_eq!(symbolic("f"), Symbolic("f".to_string()));
        assert!(symbolic("g").is_symbolic());
        assert!(!sin().is_symbolic());
    }

    #[test]
    fn t_polynomial_closure() {
        let sum = poly![1., 2., 3.] + poly![1., 1.];
        assert_eq!(sum, poly![1., 3., 4.]);
        let product = poly![1., 1.] * poly![1., -1.];
        assert_eq!(product, poly![1., 0., -1.]);
        assert_eq!(product.as_polynomial().map(|p| p.degree()), Some(2));
    }

    #[test]
    fn t_generic_fallback() {
        assert_eq!(
            poly![1., 0.] + sin(),
            Sum(Box::new(poly![1., 0.]), Box::new(Sin))
        );
        assert_eq!(
            cos() * poly![2.],
            Product(Box::new(Cos), Box::new(poly![2.]))
        );
        assert_eq!(sin() + cos(), Func::sum(sin(), cos()));
    }

    #[test]
    fn t_negate() {
        let f = -sin();
        assert_eq!(f, Func::compose(scale(-1.), sin()));
        compare_funcs(&f, &(constant(-1.) * sin()), (-5., 5.), 100, 0.);
    }

    #[test]
    fn t_subtract() {
        let f = exp() - sin();
        compare_funcs(
            &f,
            &Func::sum(exp(), Func::product(constant(-1.), sin())),
            (-5., 5.),
            100,
            1e-15,
        );
    }

    #[test]
    fn t_divide() {
        let f = sin() / cos();
        assert_eq!(
            f,
            Func::product(sin(), Func::compose(power(-1.), cos()))
        );
        for x in [-1.2, -0.3, 0.4, 1.1] {
            assert_float_eq!(f.eval(&x).unwrap(), f64::tan(x), 1e-14);
        }
    }

    #[test]
    fn t_pow() {
        let f = sin().pow(2.);
        assert_eq!(f, Func::compose(power(2.), sin()));
        assert_float_eq!(f.eval(&0.5).unwrap(), f64::powi(f64::sin(0.5), 2), 1e-15);
    }

    #[test]
    fn t_call_dispatch() {
        let f = poly![1., 0., -4.];
        // Function argument composes.
        assert_eq!(
            f.call(sin()).unwrap(),
            Output::Func(Func::compose(f.clone(), sin()))
        );
        // Name argument renders.
        assert_eq!(f.call("t").unwrap().text().unwrap(), "(t)^2 + -4");
        assert_eq!(
            f.call(String::from("z")).unwrap(),
            Output::Text("(z)^2 + -4".to_string())
        );
        // Numbers evaluate, keeping the shape.
        assert_eq!(f.call(3.).unwrap().value(), Some(Value::Scalar(5.)));
        assert_eq!(
            f.call(vec![0., 2.]).unwrap(),
            Output::Value(Value::Vector(array![-4., 0.]))
        );
        assert_eq!(
            f.call(array![1.]).unwrap().value().and_then(|v| v.vector().cloned()),
            Some(array![-3.])
        );
    }

    #[test]
    fn t_call_symbolic() {
        let f = symbolic("f");
        assert_eq!(f.call("x").unwrap().text().unwrap(), "f(x)");
        assert_eq!(
            f.call(sin()).unwrap().func().unwrap(),
            Func::compose(symbolic("f"), sin())
        );
        assert_eq!(
            f.call(2.),
            Err(Error::SymbolicEvaluation("f".to_string()))
        );
    }

    #[test]
    fn t_plot_data() {
        let (xs, ys) = poly![1., 0., 0.].plot_data().unwrap();
        assert_eq!(xs.len(), PLOT_SAMPLES);
        assert_eq!(ys.len(), PLOT_SAMPLES);
        assert_eq!(xs[0], -1.);
        assert_eq!(xs[PLOT_SAMPLES - 1], 1.);
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_float_eq!(*y, x * x, 1e-15);
        }
        assert!(symbolic("f").plot_data().is_err());
    }

    #[test]
    fn t_linspace() {
        let xs = linspace(0., 1., 5);
        assert_eq!(xs, array![0., 0.25, 0.5, 0.75, 1.]);
    }
}
