//! # Service Layer
//!
//! Services sit between the HTTP handlers and the repositories.

pub mod customer;

pub use customer::CustomerService;
