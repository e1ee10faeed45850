pub mod assets;
pub mod download;
