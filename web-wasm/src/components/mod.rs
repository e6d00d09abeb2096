pub mod header;
pub mod selection_summary;
pub mod bulk_select;
pub mod artworks_table;
pub mod paginator;
