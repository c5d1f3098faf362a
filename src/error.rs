use thiserror::Error;

/// Errors that can occur when validating a `NewtonConfig`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and positive")]
    Tolerance,
    #[error("max_iters must be at least one")]
    MaxIters,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A polynomial needs at least one coefficient.
    #[error("a polynomial must have at least one coefficient")]
    EmptyPolynomial,
    /// A polynomial coefficient is NaN.
    #[error("polynomial coefficients must not be NaN")]
    ContainsNaN,

    // Evaluation.
    /// A symbolic function is only meant for display, and cannot be evaluated
    /// numerically.
    #[error("symbolic function '{0}' cannot be evaluated numerically")]
    SymbolicEvaluation(String),

    // Newton's method.
    /// The function handed to Newton's method cannot be evaluated
    /// numerically, e.g. it is symbolic.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The iterate or the residual became NaN or infinite. Usually this means
    /// the derivative vanished, or the function was evaluated outside its
    /// domain.
    #[error("newton iteration {iter} produced a non-finite value at x = {x}")]
    NonFinite { iter: usize, x: f64 },
    /// The iteration limit was reached before the residual fell below the
    /// tolerance.
    #[error("no convergence after {iters} iterations: x = {x}, residual = {residual:e}")]
    NoConvergence { iters: usize, x: f64, residual: f64 },
    /// The Newton configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),
}
