pub mod cs;
pub mod error;

pub use cs::dynamic;
pub use cs::dynamic::edit_distance::{
    apply_operations, compute, compute_checked, edit_distance, levenshtein_distance, CostMatrix,
    EditDistanceResult, InputLimits, InputSide, Operation, OperationKind, OperationSummary,
    DEFAULT_MAX_LEN,
};
pub use error::{Error, Result};
