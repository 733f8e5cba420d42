// Library exports for integration tests and external use

pub mod adapter;
pub mod app_data;
pub mod auth;
pub mod cli;
pub mod config;
pub mod errors;
pub mod gateway;
pub mod stats;
pub mod stores;
pub mod types;

#[cfg(test)]
pub mod test;
