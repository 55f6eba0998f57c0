// Cucumber Integration Test Support Library
//
// Mock directory server and canned directory documents for the
// cosmos-directory integration tests.

pub mod fixtures;
pub mod mock_directory;

pub use mock_directory::{MockDirectory, RecordedRequest};
