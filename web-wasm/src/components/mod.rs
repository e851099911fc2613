pub mod header;
pub mod upload_area;
pub mod field_table;
pub mod page_viewer;
pub mod export_buttons;
