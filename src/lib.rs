//! Pointwise evaluation of polynomial bases on polygonal cells and faces,
//! and of analytic level-set functions for cut-cell discretizations.

pub mod disc;
pub mod error;
pub mod io;

pub use error::{EvalError, EvalResult, ParamError, ParamResult};
