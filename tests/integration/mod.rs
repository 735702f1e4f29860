//! Integration tests driving the release-gate binary

mod helpers;
mod test_validate;
