pub mod footer;
pub mod header;
pub mod idle;
pub mod modals;
pub mod product_detail;
pub mod suggestion_list;
