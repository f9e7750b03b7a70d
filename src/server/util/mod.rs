//! Utility functions and helpers for server operations.
//!
//! This module provides reusable helpers used across services and controllers: email
//! normalization and format checks, bcrypt password hashing off the async runtime, and
//! generation of opaque authentication token keys.

pub mod email;
pub mod password;
pub mod token;
