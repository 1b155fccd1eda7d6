//! Diesel row types and their mapping to domain entities.

pub mod category;
pub mod config;
pub mod template;
