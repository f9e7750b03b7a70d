//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP controllers,
//! verifying request handling, response formatting, token authentication, and error
//! handling for all API endpoints.

mod user;

use recipe_test_utils::prelude::*;

use crate::util::TestContextExt;
