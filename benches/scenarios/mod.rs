//! Real-world scenario benchmarks.
//!
//! These model what the terminal front end does: re-run the pipeline on
//! an edit, then tick the simulator every frame.

mod animation;
mod edit;

pub use animation::bench_animation;
pub use edit::bench_edit;
