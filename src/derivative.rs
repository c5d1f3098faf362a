use crate::func::{
    Func::{self, *},
    constant, power,
};

impl Func {
    /// Compute the exact symbolic derivative of this function. The returned
    /// tree is not simplified in any way, so it can be considerably larger
    /// than the input.
    ///
    /// The derivative of a symbolic function is purely syntactic: `f` becomes
    /// `f'`.
    pub fn derivative(&self) -> Func {
        match self {
            Polynomial(p) => Polynomial(p.derivative()),
            Sum(f, g) => Func::sum(f.derivative(), g.derivative()),
            Product(f, g) => Func::sum(
                Func::product(f.derivative(), g.as_ref().clone()),
                Func::product(f.as_ref().clone(), g.derivative()),
            ),
            // Chain rule.
            Compose(f, g) => Func::product(
                Func::compose(f.derivative(), g.as_ref().clone()),
                g.derivative(),
            ),
            Power(n) => Func::product(constant(*n), power(n - 1.)),
            Log => power(-1.),
            Exponential => Exponential,
            Sin => Cos,
            Cos => Func::product(constant(-1.), Sin),
            Symbolic(name) => Symbolic(format!("{name}'")),
        }
    }

    /// Derivative of order `n`. The zeroth derivative is the function itself.
    pub fn nth_derivative(&self, n: usize) -> Func {
        let mut out = self.clone();
        for _ in 0..n {
            out = out.derivative();
        }
        return out;
    }
}
