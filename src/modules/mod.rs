pub mod probe;
pub mod rendition;
