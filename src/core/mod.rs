pub mod document;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod matcher;
pub mod record;
pub mod reporter;
