// Common Step Definitions
//
// The world, mock directory lifecycle and assertions on the outcome of the
// last client call.

use cosmos_directory::http::{ClientOptions, DirectoryClient, FetchOptions, HttpError};
use cucumber::{World, given, then};
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

use super::support::MockDirectory;

#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct DirectoryWorld {
    pub directory: Option<MockDirectory>,
    pub fetch_options: FetchOptions,
    pub validate: bool,
    pub outcome: Option<Result<Value, HttpError>>,
    pub temp_dir: Option<TempDir>,
    pub config_file: Option<PathBuf>,
    pub last_command_output: Option<String>,
    pub last_command_error: Option<String>,
    pub last_command_exit_code: Option<i32>,
}

impl DirectoryWorld {
    pub fn new() -> Self {
        Self {
            directory: None,
            fetch_options: FetchOptions::default(),
            validate: true,
            outcome: None,
            temp_dir: None,
            config_file: None,
            last_command_output: None,
            last_command_error: None,
            last_command_exit_code: None,
        }
    }

    pub fn directory(&self) -> &MockDirectory {
        self.directory.as_ref().expect("Mock directory not started")
    }

    /// A client whose three endpoints all point at the mock directory.
    pub fn client(&self) -> DirectoryClient {
        let directory = self.directory();
        let options = ClientOptions {
            chains_endpoint: Some(directory.chains_endpoint()),
            status_endpoint: Some(directory.status_endpoint()),
            validators_endpoint: Some(directory.validators_endpoint()),
            fetch_options: self.fetch_options.clone(),
            validate: self.validate,
            ..ClientOptions::default()
        };
        DirectoryClient::with_options(options).expect("Failed to create directory client")
    }

    pub fn record<T: Serialize>(&mut self, result: Result<T, HttpError>) {
        self.outcome = Some(result.map(|payload| serde_json::to_value(payload).expect("Payload is not serializable")));
    }

    pub fn result(&self) -> &Value {
        match self.outcome.as_ref().expect("No request was made") {
            Ok(value) => value,
            Err(e) => panic!("Request failed: {e}"),
        }
    }

    pub fn error(&self) -> &HttpError {
        match self.outcome.as_ref().expect("No request was made") {
            Ok(value) => panic!("Request unexpectedly succeeded with {value}"),
            Err(e) => e,
        }
    }

    pub fn setup_temp_dir(&mut self) {
        if self.temp_dir.is_none() {
            self.temp_dir = Some(TempDir::new().expect("Failed to create temp directory"));
        }
    }

    pub fn get_temp_path(&self, filename: &str) -> PathBuf {
        self.temp_dir
            .as_ref()
            .expect("Temp directory not set up")
            .path()
            .join(filename)
    }
}

// =============================
// Mock Directory Steps
// =============================

#[given("a mock directory")]
async fn start_directory(world: &mut DirectoryWorld) {
    let directory = MockDirectory::start().await.expect("Failed to start mock directory");
    world.directory = Some(directory);
}

#[given(expr = "the directory requires the API key {string}")]
async fn require_api_key(world: &mut DirectoryWorld, key: String) {
    world.directory().require_api_key(&key);
}

#[given(expr = "I send the API key {string}")]
async fn send_api_key(world: &mut DirectoryWorld, key: String) {
    world.fetch_options = std::mem::take(&mut world.fetch_options).with_header("X-Api-Key", key);
}

#[given("response validation is turned off")]
async fn disable_validation(world: &mut DirectoryWorld) {
    world.validate = false;
}

// =============================
// Outcome Steps
// =============================

#[then("the request should succeed")]
async fn request_succeeds(world: &mut DirectoryWorld) {
    world.result();
}

#[then(expr = "the request should fail with status {int}")]
async fn request_fails_with_status(world: &mut DirectoryWorld, expected: u16) {
    match world.error() {
        HttpError::ServerError { status, .. } => assert_eq!(status.as_u16(), expected),
        other => panic!("Expected a server error, got {other}"),
    }
}

#[then(expr = "the request should fail with a cast error at {string}")]
async fn request_fails_with_cast_error(world: &mut DirectoryWorld, path: String) {
    match world.error() {
        HttpError::CastError(e) => {
            let actual = e.path().map(ToString::to_string).unwrap_or_default();
            assert_eq!(actual, path, "Unexpected error: {e}");
        },
        other => panic!("Expected a cast error, got {other}"),
    }
}

#[then("the request should fail with a JSON error")]
async fn request_fails_with_json_error(world: &mut DirectoryWorld) {
    let error = world.error();
    assert!(matches!(error, HttpError::JsonError(_)), "Expected a JSON error, got {error}");
}

#[then(expr = "the directory should have received {int} request(s) to {string}")]
async fn directory_received(world: &mut DirectoryWorld, count: usize, path: String) {
    let directory = world.directory();
    assert_eq!(
        directory.requests_to(&path),
        count,
        "Requests seen: {:?}",
        directory.requests()
    );
}

#[then(expr = "every request should have carried the API key {string}")]
async fn requests_carried_key(world: &mut DirectoryWorld, key: String) {
    let requests = world.directory().requests();
    assert!(!requests.is_empty(), "No requests were made");
    for request in requests {
        assert_eq!(request.api_key.as_deref(), Some(key.as_str()), "Request to {}", request.path);
    }
}
