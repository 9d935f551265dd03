pub mod literal;
pub mod validation;
