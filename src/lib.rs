mod derivative;
pub mod error;
pub mod eval;
pub mod func;
pub mod newton;
pub mod poly;

mod macros;
mod render;


pub use error::{ConfigError, Error};
pub use eval::{Sample, Value, vandermonde};
pub use func::{
    Arg, Func, Output, PLOT_RANGE, PLOT_SAMPLES, affine, constant, cos, exp, linspace, log,
    polynomial, power, scale, sin, symbolic,
};
pub use newton::{
    DEFAULT_MAX_ITERS, DEFAULT_TOL, NewtonConfig, NewtonSolution, newton_extremum, newton_root,
    solve_extremum, solve_root,
};
pub use poly::Polynomial;
