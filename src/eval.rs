use crate::{
    error::Error,
    func::Func::{self, *},
    poly,
};
use ndarray::{Array1, Array2};

/// The types a function can be evaluated on. A scalar `f64`, or a vector of
/// samples that are evaluated elementwise. The result of evaluating a
/// function always has the same shape as the input.
pub trait Sample: Clone {
    /// Apply `op` to every element.
    fn map(&self, op: impl Fn(f64) -> f64) -> Self;

    /// Elementwise sum.
    fn add(self, other: Self) -> Self;

    /// Elementwise product.
    fn mul(self, other: Self) -> Self;

    /// Evaluate the polynomial at every element.
    fn polyval(&self, poly: &poly::Polynomial) -> Self;
}

impl Sample for f64 {
    fn map(&self, op: impl Fn(f64) -> f64) -> Self {
        op(*self)
    }

    fn add(self, other: Self) -> Self {
        self + other
    }

    fn mul(self, other: Self) -> Self {
        self * other
    }

    fn polyval(&self, poly: &poly::Polynomial) -> Self {
        poly.horner(*self)
    }
}

impl Sample for Array1<f64> {
    fn map(&self, op: impl Fn(f64) -> f64) -> Self {
        self.mapv(op)
    }

    fn add(self, other: Self) -> Self {
        self + other
    }

    fn mul(self, other: Self) -> Self {
        self * other
    }

    fn polyval(&self, poly: &poly::Polynomial) -> Self {
        let coeffs = Array1::from(poly.coeffs().to_vec());
        let mut powers = vandermonde(self, poly.degree());
        // A zero coefficient contributes nothing, even where its power
        // overflows. Otherwise `inf * 0` poisons the dot product with NaN.
        for (mut col, &c) in powers.columns_mut().into_iter().zip(coeffs.iter()) {
            if c == 0. {
                col.fill(0.);
            }
        }
        return powers.dot(&coeffs);
    }
}

/// Vandermonde matrix of `xs` with decreasing powers, i.e. row `i` is `[x_i^n,
/// ..., x_i, 1]`.
pub fn vandermonde(xs: &Array1<f64>, degree: usize) -> Array2<f64> {
    let mut mat = Array2::<f64>::ones((xs.len(), degree + 1));
    for (mut row, &x) in mat.rows_mut().into_iter().zip(xs.iter()) {
        // Fill right to left, so each power is one multiplication away from
        // the previous one.
        for j in (0..degree).rev() {
            row[j] = row[j + 1] * x;
        }
    }
    return mat;
}

impl Func {
    /// Evaluate the function at `x`. If `x` is a vector, the function is
    /// evaluated elementwise. Domain errors are not caught here, they show up
    /// as NaN or infinity in the output, as per IEEE floating point
    /// arithmetic.
    pub fn eval<T: Sample>(&self, x: &T) -> Result<T, Error> {
        Ok(match self {
            Polynomial(p) => x.polyval(p),
            Sum(f, g) => f.eval(x)?.add(g.eval(x)?),
            Product(f, g) => f.eval(x)?.mul(g.eval(x)?),
            Compose(f, g) => f.eval(&g.eval(x)?)?,
            Power(n) => {
                let n = *n;
                x.map(|v| f64::powf(v, n))
            }
            Log => x.map(f64::ln),
            Exponential => x.map(f64::exp),
            Sin => x.map(f64::sin),
            Cos => x.map(f64::cos),
            Symbolic(name) => return Err(Error::SymbolicEvaluation(name.clone())),
        })
    }
}

/// A dynamically shaped numeric value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(f64),
    Vector(Array1<f64>),
}

impl Value {
    pub fn scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(v) => Some(*v),
            Value::Vector(_) => None,
        }
    }

    pub fn vector(&self) -> Option<&Array1<f64>> {
        match self {
            Value::Scalar(_) => None,
            Value::Vector(v) => Some(v),
        }
    }
}

impl Func {
    /// Evaluate at a value whose shape is only known at runtime.
    pub fn eval_value(&self, x: &Value) -> Result<Value, Error> {
        Ok(match x {
            Value::Scalar(v) => Value::Scalar(self.eval(v)?),
            Value::Vector(v) => Value::Vector(self.eval(v)?),
        })
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Scalar(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Scalar(value as f64)
    }
}

impl From<Array1<f64>> for Value {
    fn from(value: Array1<f64>) -> Self {
        Value::Vector(value)
    }
}

impl From<Vec<f64>> for Value {
    fn from(value: Vec<f64>) -> Self {
        Value::Vector(Array1::from(value))
    }
}

impl From<&[f64]> for Value {
    fn from(value: &[f64]) -> Self {
        Value::Vector(Array1::from(value.to_vec()))
    }
}
