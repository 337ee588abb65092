pub mod normalizer;
pub mod reader;

// Re-export main types for convenient access
pub use normalizer::{normalize, NewlineStyle, Normalizer, Options};

// Re-export the reader convenience entry point used by the CLI and tests
pub use reader::read_file_async;
