pub mod catalog;
pub mod filter;
pub mod product;
