pub mod args;
pub mod config;
pub mod grayscale;
pub mod pipeline;
pub mod threshold;
