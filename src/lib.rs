pub mod app;
pub mod audio;
pub mod config;
pub mod event;
pub mod tray;
pub mod util;
