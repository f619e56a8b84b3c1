pub mod drawing;
pub mod winner;

pub use winner::DetailRow;
