// Core utilities

pub mod math;
