pub mod distance;
pub mod engine;
pub mod graph;
pub mod matrix;
pub mod newick;
pub mod outlier;

pub use distance::DistanceTable;
pub use engine::{neighbor_joining, neighbor_joining_with};
pub use graph::{Edge, Neighbor, NodeGraph};
pub use matrix::write_matrix_csv;
pub use newick::to_newick;
pub use outlier::{select_by_max_distance, select_by_name, select_outlier};
