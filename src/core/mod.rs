//! Core domain: models and the services that evaluate workflow files
//!
//! Nothing in here prints; rendering lives in `output`.

pub mod models;
pub mod services;
