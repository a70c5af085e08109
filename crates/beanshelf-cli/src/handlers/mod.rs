pub mod browse;
pub mod config;
pub mod gallery;
pub mod list;
pub mod show;
