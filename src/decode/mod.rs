pub mod money;
pub mod numbers;

pub use numbers::ParsedNumbers;
