//! Local search operators for improving tours.
//!
//! - [`two_opt_improve`] — Open-path 2-opt edge reversal with a fixed start

mod two_opt;

pub use two_opt::two_opt_improve;
