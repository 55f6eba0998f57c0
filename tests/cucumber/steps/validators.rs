// Validator Registry Step Definitions

use cosmos_directory::payloads::ChainValidators;
use cucumber::{given, then, when};
use serde_json::{Value, json};

use super::common::DirectoryWorld;
use super::support::fixtures::{chain_validators_document, validator_document, validators_document};

#[given("the directory serves the validator list")]
async fn serve_validators(world: &mut DirectoryWorld) {
    world.directory().serve_json("/validators", &validators_document());
}

#[given(expr = "the directory serves validator {string}")]
async fn serve_validator(world: &mut DirectoryWorld, path: String) {
    world
        .directory()
        .serve_json(&format!("/validators/{path}"), &validator_document(&path));
}

#[given(expr = "the directory serves the validators of chain {string}")]
async fn serve_chain_validators(world: &mut DirectoryWorld, chain: String) {
    world
        .directory()
        .serve_json(&format!("/validators/chains/{chain}"), &chain_validators_document(&chain));
}

#[given(expr = "the directory serves the validators of chain {string} with an unset commission update time")]
async fn serve_chain_validators_without_update_time(world: &mut DirectoryWorld, chain: String) {
    let mut document = chain_validators_document(&chain);
    document["validators"][0]["commission"]["update_time"] = Value::Null;
    document["validators"][0]["operator_notes"] = json!("migrating keys");
    world
        .directory()
        .serve_json(&format!("/validators/chains/{chain}"), &document);
}

#[given(expr = "validator {string} is served from commit {string}")]
async fn validator_from_commit(world: &mut DirectoryWorld, path: String, commit: String) {
    let mut document = validator_document(&path);
    document["repository"]["commit"] = json!(commit);
    world.directory().serve_json(&format!("/validators/{path}"), &document);
}

#[when("I fetch the validator list")]
async fn fetch_validators(world: &mut DirectoryWorld) {
    let result = world.client().fetch_validators().await;
    world.record(result);
}

#[when(expr = "I fetch validator {string}")]
async fn fetch_validator(world: &mut DirectoryWorld, path: String) {
    let result = world.client().fetch_validator(&path).await;
    world.record(result);
}

#[when(expr = "I fetch the validators of chain {string}")]
async fn fetch_chain_validators(world: &mut DirectoryWorld, chain: String) {
    let result = world.client().fetch_chain_validators(&chain).await;
    world.record(result);
}

#[then(expr = "the result should list validator {string}")]
async fn result_lists_validator(world: &mut DirectoryWorld, path: String) {
    let validators = world.result()["validators"].as_array().expect("validators is not an array");
    assert!(
        validators.iter().any(|validator| validator["path"] == json!(path)),
        "{path} not listed"
    );
}

#[then(expr = "the result should be validator {string} on chain {string}")]
async fn result_is_validator(world: &mut DirectoryWorld, path: String, chain: String) {
    let validator = &world.result()["validator"];
    assert_eq!(validator["path"], json!(path));
    let chains = validator["chains"].as_array().expect("chains is not an array");
    assert!(chains.iter().any(|entry| entry["name"] == json!(chain)), "{chain} not listed");
}

#[then(expr = "the active validators should be {string}")]
async fn active_validators(world: &mut DirectoryWorld, expected: String) {
    let validators: ChainValidators =
        serde_json::from_value(world.result().clone()).expect("Not a chain validators document");
    let monikers: Vec<&str> = validators
        .active()
        .into_iter()
        .map(|validator| validator.moniker.as_str())
        .collect();
    assert_eq!(monikers.join(", "), expected);
}
