pub mod command;
pub mod encoder;
