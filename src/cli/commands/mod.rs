pub mod chart;
pub mod token;
