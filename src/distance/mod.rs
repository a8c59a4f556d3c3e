//! Travel-time representation between attractions.

mod matrix;

pub use matrix::TravelMatrix;
