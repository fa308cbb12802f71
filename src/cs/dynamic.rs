pub mod edit_distance;

// Re-export the engine entry points
pub use edit_distance::{
    compute, compute_checked, edit_distance, levenshtein_distance, EditDistanceResult,
};
