pub mod config;
pub mod controller;
pub mod error;
pub mod fixture;
pub mod health;
pub mod middleware;

pub use fixture::FixtureStore;

// Unit test modules only
#[cfg(test)]
mod config_tests;
