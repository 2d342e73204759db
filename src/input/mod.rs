//! Input module
//! Handles fixture loading, job normalization and upload file detection

pub mod file_detector;
pub mod loader;
pub mod normalize;

pub use loader::FixtureLoader;
