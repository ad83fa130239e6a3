pub mod reader;
pub mod writer;

pub use reader::{list_csv_files, CsvStreamReader};
pub use writer::{ensure_parent_dir, CsvStreamWriter};
