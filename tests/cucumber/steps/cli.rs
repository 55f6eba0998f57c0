// Command Line Step Definitions
//
// These steps run the compiled `cosmos-directory` binary inside a temporary
// directory.

use clap::ValueEnum;
use cosmos_directory::config::get_default_config;
use cosmos_directory::convert;
use cosmos_directory::payloads::PayloadKind;
use cucumber::{given, then, when};
use serde_json::{Value, json};
use std::fs;
use tokio::process::Command;

use super::common::DirectoryWorld;
use super::support::fixtures;

fn parse_kind(kind: &str) -> PayloadKind {
    PayloadKind::from_str(kind, true).unwrap_or_else(|e| panic!("Unknown payload kind {kind}: {e}"))
}

fn fixture(kind: PayloadKind) -> Value {
    match kind {
        PayloadKind::Chains => fixtures::chains_document(),
        PayloadKind::Chain => fixtures::chain_document("cosmoshub"),
        PayloadKind::Status => fixtures::status_document(),
        PayloadKind::Validators => fixtures::validators_document(),
        PayloadKind::Validator => fixtures::validator_document("ecostake"),
        PayloadKind::ChainValidators => fixtures::chain_validators_document("juno"),
    }
}

// =============================
// Setup Steps
// =============================

#[given("a configuration file pointing at the mock directory")]
async fn config_for_mock(world: &mut DirectoryWorld) {
    world.setup_temp_dir();
    let directory = world.directory();
    let config = format!(
        "chains_endpoint = \"{}\"\nstatus_endpoint = \"{}\"\nvalidators_endpoint = \"{}\"\ntimeout_secs = 10\n",
        directory.chains_endpoint(),
        directory.status_endpoint(),
        directory.validators_endpoint()
    );
    let path = world.get_temp_path("config.toml");
    fs::write(&path, config).expect("Failed to write config file");
    world.config_file = Some(path);
}

#[given(expr = "a saved {word} document in {string}")]
async fn saved_document(world: &mut DirectoryWorld, kind: String, filename: String) {
    world.setup_temp_dir();
    let document = fixture(parse_kind(&kind));
    fs::write(world.get_temp_path(&filename), document.to_string()).expect("Failed to write document");
}

#[given(expr = "a saved chain list in {string} where chain {string} has status {string}")]
async fn saved_broken_chains(world: &mut DirectoryWorld, filename: String, name: String, status: String) {
    world.setup_temp_dir();
    let mut document = fixtures::chains_document();
    for chain in document["chains"].as_array_mut().expect("chains is not an array") {
        if chain["name"] == json!(name) {
            chain["status"] = json!(status);
        }
    }
    fs::write(world.get_temp_path(&filename), document.to_string()).expect("Failed to write document");
}

#[given(expr = "an existing file {string}")]
async fn existing_file(world: &mut DirectoryWorld, filename: String) {
    world.setup_temp_dir();
    fs::write(world.get_temp_path(&filename), "# keep me\n").expect("Failed to write file");
}

// =============================
// Command Steps
// =============================

#[when(expr = "I run cosmos-directory {string}")]
async fn run_command(world: &mut DirectoryWorld, args: String) {
    world.setup_temp_dir();
    let mut command = Command::new(env!("CARGO_BIN_EXE_cosmos-directory"));
    command
        .args(args.split_whitespace())
        .current_dir(world.get_temp_path(""));
    if let Some(config) = &world.config_file {
        command.arg("--config").arg(config);
    }

    let output = command.output().await.expect("Failed to execute command");

    world.last_command_exit_code = Some(output.status.code().unwrap_or(-1));
    world.last_command_output = Some(String::from_utf8_lossy(&output.stdout).to_string());
    world.last_command_error = Some(String::from_utf8_lossy(&output.stderr).to_string());
}

// =============================
// Assertion Steps
// =============================

#[then("the command should succeed")]
async fn command_succeeds(world: &mut DirectoryWorld) {
    assert_eq!(
        world.last_command_exit_code,
        Some(0),
        "Command failed: {}",
        world.last_command_error.as_deref().unwrap_or("")
    );
}

#[then("the command should fail")]
async fn command_fails(world: &mut DirectoryWorld) {
    assert_ne!(world.last_command_exit_code, Some(0), "Command unexpectedly succeeded");
}

#[then(expr = "the output should contain {string}")]
async fn output_contains(world: &mut DirectoryWorld, expected: String) {
    let output = world.last_command_output.as_deref().expect("No command output");
    assert!(output.contains(&expected), "{expected:?} not found in {output}");
}

#[then(expr = "the error output should contain {string}")]
async fn error_output_contains(world: &mut DirectoryWorld, expected: String) {
    let output = world.last_command_error.as_deref().expect("No command output");
    assert!(output.contains(&expected), "{expected:?} not found in {output}");
}

#[then(expr = "the output should be a valid {word} document")]
async fn output_is_document(world: &mut DirectoryWorld, kind: String) {
    let output = world.last_command_output.as_deref().expect("No command output");
    let value: Value = serde_json::from_str(output).expect("Output is not JSON");
    convert::validate(parse_kind(&kind), &value).expect("Output does not match the schema");
    assert!(output.starts_with("{\n  \""), "Output is not pretty-printed");
}

#[then(expr = "the file {string} should hold the default configuration")]
async fn file_holds_default_config(world: &mut DirectoryWorld, filename: String) {
    let content = fs::read_to_string(world.get_temp_path(&filename)).expect("Failed to read file");
    assert_eq!(content, format!("{}\n", get_default_config()));
}

#[then(expr = "the file {string} should be unchanged")]
async fn file_unchanged(world: &mut DirectoryWorld, filename: String) {
    let content = fs::read_to_string(world.get_temp_path(&filename)).expect("Failed to read file");
    assert_eq!(content, "# keep me\n");
}

#[then(expr = "the output should not contain {string}")]
async fn output_does_not_contain(world: &mut DirectoryWorld, unexpected: String) {
    let output = world.last_command_output.as_deref().expect("No command output");
    assert!(!output.contains(&unexpected), "{unexpected:?} found in {output}");
}
