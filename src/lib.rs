pub mod app;
pub mod domain;
pub mod error;
pub mod infra;
pub mod services;
