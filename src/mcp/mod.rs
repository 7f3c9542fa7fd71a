pub mod contracts;
pub mod errors;
