//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_checkpoint, print_evaluation_report, print_solve_result, print_training_report,
};
