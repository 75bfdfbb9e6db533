pub mod app;
pub mod category;
pub mod chart;
pub mod components;
pub mod config;
pub mod controllers;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod pages;
pub mod router;

pub use app::App;
