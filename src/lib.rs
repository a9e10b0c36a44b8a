pub mod cs;
pub mod error;
pub mod game;

pub use cs::dynamic;
pub use cs::dynamic::{
    char_distance, edit_distance, edit_distance_with, CostParameters, DistanceTable,
};
pub use error::{Error, Result};
