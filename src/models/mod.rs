pub mod breakdown;
pub mod catalog;
pub mod comparison;
