//! `Taskboard`: terminal task board library.

pub mod app;
pub mod config;
pub mod service;
pub mod ui;
