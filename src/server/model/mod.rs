//! Server application models and type definitions.
//!
//! This module contains data models for the server application: the shared application
//! state handed to handlers and type aliases for the database entity models.

pub mod app;
pub mod db;
