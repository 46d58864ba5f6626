pub mod csv;

pub use csv::read_distance_csv;
