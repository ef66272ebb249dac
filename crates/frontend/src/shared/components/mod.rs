pub mod filter_select;
pub mod pagination_controls;
