//! Statistics over directional data

pub mod circular;

pub use circular::{
    average_direction, average_direction_weighted, circular_mean, circular_std_dev,
    direction_std_dev, direction_std_dev_weighted,
};
