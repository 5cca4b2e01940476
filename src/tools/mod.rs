mod diagnostics;
mod download_scanner;
mod filename_sanitizer;
mod number_set;
mod path_validator;

pub use diagnostics::{DiagnosticSink, LogSink, RecordingSink};
pub use download_scanner::{is_directory_empty, list_files, scan_download_dirs};
pub use filename_sanitizer::sanitize_file_name;
pub use number_set::NumberSet;
pub use path_validator::{ensure_directory_exists, validate_directory_exists};
