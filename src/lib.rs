pub mod app;
pub mod components;
pub mod logging;
pub mod ui;
