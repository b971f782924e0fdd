pub mod details;
pub mod list;
pub mod load_csv;
