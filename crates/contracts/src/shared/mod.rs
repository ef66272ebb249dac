pub mod decimal;
pub mod pagination;
