mod loader;

pub use loader::{DEFAULT_INPUT_PATH, load_document, read_source, write_artifact};
