pub mod model;
pub mod progress;
pub mod service;
