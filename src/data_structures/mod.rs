mod bit_field;
mod signature;

pub use bit_field::*;
pub use signature::*;
