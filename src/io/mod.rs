pub(crate) mod reader;
pub(crate) mod writer;

pub use reader::{parse_record, ProfileReader};
pub use writer::{write_results, OutputFormat};
