use crate::{
    error::{ConfigError, Error},
    func::Func,
};
use tracing::{debug, trace, warn};

/// Default absolute tolerance on the residual.
pub const DEFAULT_TOL: f64 = 1e-8;
/// Default bound on the number of Newton steps.
pub const DEFAULT_MAX_ITERS: usize = 100;

/// Configuration for Newton's method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonConfig {
    tol: f64,
    max_iters: usize,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            tol: DEFAULT_TOL,
            max_iters: DEFAULT_MAX_ITERS,
        }
    }
}

impl NewtonConfig {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is not finite and positive, or if `max_iters`
    /// is zero.
    pub fn new(tol: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol <= 0. {
            return Err(ConfigError::Tolerance);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        Ok(Self { tol, max_iters })
    }

    /// Same as the default config, with the given tolerance.
    pub fn with_tol(tol: f64) -> Result<Self, ConfigError> {
        Self::new(tol, DEFAULT_MAX_ITERS)
    }

    /// Absolute tolerance on the residual.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Maximum number of Newton steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

/// The outcome of a converged Newton iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonSolution {
    /// The point where the residual is within the tolerance.
    pub x: f64,
    /// The value of the function whose root was found, at `x`.
    pub residual: f64,
    /// Number of Newton steps taken.
    pub iters: usize,
}

fn check_not_symbolic(f: &Func) -> Result<(), Error> {
    if f.is_symbolic() {
        return Err(Error::InvalidArgument(
            "newton's method cannot be applied to a symbolic function",
        ));
    }
    Ok(())
}

/**
Find `x` such that `|f(x)| < config.tol()` with Newton's method, starting at
`x0`.

The derivative of `f` is computed symbolically once, and evaluated at every
step. The starting point must be in the basin of convergence of a root. If
the derivative vanishes, or the iterate leaves the domain of `f`, an
`Error::NonFinite` is returned. If the residual is still above the tolerance
after `config.max_iters()` steps, `Error::NoConvergence` is returned.
*/
pub fn solve_root(f: &Func, x0: f64, config: &NewtonConfig) -> Result<NewtonSolution, Error> {
    check_not_symbolic(f)?;
    let deriv = f.derivative();
    let mut x = x0;
    let mut fx = f.eval(&x)?;
    let mut iters = 0;
    loop {
        if !fx.is_finite() {
            warn!(iters, x, "newton residual is not finite");
            return Err(Error::NonFinite { iter: iters, x });
        }
        if fx.abs() < config.tol() {
            debug!(iters, x, residual = fx, "newton converged");
            return Ok(NewtonSolution {
                x,
                residual: fx,
                iters,
            });
        }
        if iters >= config.max_iters() {
            warn!(iters, x, residual = fx, "newton did not converge");
            return Err(Error::NoConvergence {
                iters,
                x,
                residual: fx,
            });
        }
        let dfx = deriv.eval(&x)?;
        x -= fx / dfx;
        iters += 1;
        if !x.is_finite() {
            warn!(iters, derivative = dfx, "newton step is not finite");
            return Err(Error::NonFinite { iter: iters, x });
        }
        fx = f.eval(&x)?;
        trace!(iters, x, residual = fx, "newton step");
    }
}

/// Find a stationary point of `f`, i.e. `x` such that `|f'(x)| <
/// config.tol()`, by applying Newton's method to `f'`. The residual of the
/// returned solution is the value of `f'`.
pub fn solve_extremum(
    f: &Func,
    x0: f64,
    config: &NewtonConfig,
) -> Result<NewtonSolution, Error> {
    check_not_symbolic(f)?;
    solve_root(&f.derivative(), x0, config)
}

/// Find `x` close to a root of `f`, measured by `|f(x)| < tol`, starting at
/// `x0`. This uses `DEFAULT_MAX_ITERS` as the bound on the number of steps.
/// See `solve_root` for details.
pub fn newton_root(f: &Func, x0: f64, tol: f64) -> Result<f64, Error> {
    let config = NewtonConfig::with_tol(tol)?;
    Ok(solve_root(f, x0, &config)?.x)
}

/// Find `x` close to a local extremum of `f`, measured by `|f'(x)| < tol`,
/// starting at `x0`.
pub fn newton_extremum(f: &Func, x0: f64, tol: f64) -> Result<f64, Error> {
    let config = NewtonConfig::with_tol(tol)?;
    Ok(solve_extremum(f, x0, &config)?.x)
}
