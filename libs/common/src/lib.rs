//! Common library for the ShareIt services
//!
//! This crate provides the functionality shared by the gateway and server
//! services: PostgreSQL connectivity and the database error types.

pub mod database;
pub mod error;
