pub mod audio;
pub mod config;
pub mod logging;
pub mod picker;
pub mod repositories;
