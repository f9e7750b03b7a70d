//! Test configuration constants.

/// bcrypt work factor used by fixtures and test application state.
///
/// The lowest cost bcrypt accepts, keeping password hashing fast across the test suite.
pub const TEST_BCRYPT_COST: u32 = 4;
