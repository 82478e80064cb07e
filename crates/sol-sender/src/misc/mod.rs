pub mod helpers;
pub mod validation;
