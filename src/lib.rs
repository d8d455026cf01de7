//! # Customer Manager Library
//!
//! This library provides the core functionality for the Customer Manager
//! service: the customer entity, its repository and service, server-rendered
//! views and the HTTP server.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;
pub mod telemetry;
pub mod views;
pub use migration;
