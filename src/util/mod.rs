pub mod adf;
pub mod date;
