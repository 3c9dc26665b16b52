pub mod document;
pub mod resume;
