//! JSON graph descriptions.

pub mod reader;
pub mod writer;

pub use reader::GraphReader;
pub use writer::GraphWriter;
