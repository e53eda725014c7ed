pub mod add;
pub mod del;
pub mod edit;
pub mod favorite;
pub mod filter;
pub mod import;
