// exif-mirror - Library Entry Point

pub mod constants;
pub mod error;
pub mod tools;
pub mod geo;
pub mod metadata;
pub mod writer;
pub mod pipeline;
