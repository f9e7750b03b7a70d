mod test_utils;

pub use test_utils::{form_request, read_json, request, TestContextExt};
