//! The reactive view updater: a pure transformation from the loaded
//! observations table and the user's selection (store index + series
//! names) to a chart description. No I/O, no shared state; the hosting
//! handlers stay thin and the transformation is unit-testable on its own.

pub mod chart;
pub mod error;

pub use chart::{build_chart, Y_AXIS_PADDING};
pub use error::{ComputeError, Result};
