pub mod date;
pub mod num;
