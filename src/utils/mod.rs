pub mod price;
pub mod unit;
