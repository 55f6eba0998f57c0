// API Status Step Definitions

use cosmos_directory::payloads::DirectoryStatus;
use cucumber::{given, then, when};

use super::common::DirectoryWorld;
use super::support::fixtures::status_document;

#[given("the directory serves the API status")]
async fn serve_status(world: &mut DirectoryWorld) {
    world.directory().serve_json("/status", &status_document());
}

#[when("I fetch the API status")]
async fn fetch_status(world: &mut DirectoryWorld) {
    let result = world.client().fetch_status().await;
    world.record(result);
}

#[then(expr = "the available chains should be {string}")]
async fn available_chains(world: &mut DirectoryWorld, expected: String) {
    let status: DirectoryStatus = serde_json::from_value(world.result().clone()).expect("Not a status document");
    let names: Vec<&str> = status.available().map(|chain| chain.name.as_str()).collect();
    assert_eq!(names.join(", "), expected);
}

#[then(expr = "chain {string} should report no height")]
async fn chain_has_no_height(world: &mut DirectoryWorld, name: String) {
    let status: DirectoryStatus = serde_json::from_value(world.result().clone()).expect("Not a status document");
    let chain = status
        .chains
        .iter()
        .find(|chain| chain.name == name)
        .expect("Chain not in status");
    assert_eq!(chain.height, None);
    assert_eq!(chain.rpc.height, None);
}
