pub mod edit_distance;

// Re-export dynamic programming algorithms with descriptive names
pub use edit_distance::{
    char_distance, edit_distance, edit_distance_with, CostParameters, DistanceTable,
    DEFAULT_DELETE_COST, DEFAULT_INSERT_COST,
};
