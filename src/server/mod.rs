//! Server application core modules.
//!
//! This module contains the backend of the recipe API: HTTP routing, token authentication,
//! database access, and the services that register users, issue tokens, and manage each
//! user's ingredients.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
