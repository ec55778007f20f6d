mod csv_writer;
mod error_log;
mod html_writer;
mod naming;

pub use csv_writer::{export_csv, write_rows};
pub use error_log::write_error_log;
pub use html_writer::save_modified_html;
pub use naming::{modified_file_name, report_file_name};
