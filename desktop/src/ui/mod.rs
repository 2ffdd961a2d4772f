pub mod register;
pub mod style;
pub mod success;
