//! Tests for user controller endpoints.
//!
//! This module contains integration tests for registration, token issuance, and the
//! authenticated user's profile endpoints.

mod me;

use super::*;
