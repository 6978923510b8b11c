// Scoring core: static weight tables + the pure aggregation functions the
// report compiler and the UI score endpoints consume.

pub mod aggregate;
pub mod handlers;
pub mod weights;

// Re-export the public API consumed by the report compiler.
pub use aggregate::{final_balanced_score, select_categories};
pub use weights::Category;
