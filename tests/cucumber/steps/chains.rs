// Chain Directory Step Definitions

use cucumber::{given, then, when};
use serde_json::json;

use super::common::DirectoryWorld;
use super::support::fixtures::{chain_document, chains_document};

/// Raw request path of a chain, as the client encodes it.
fn chain_path(path: &str) -> String {
    format!("/chains/{}", path.replace('/', "%2F"))
}

#[given("the directory serves the chain list")]
async fn serve_chains(world: &mut DirectoryWorld) {
    world.directory().serve_json("/chains", &chains_document());
}

#[given(expr = "the directory serves chain {string}")]
async fn serve_chain(world: &mut DirectoryWorld, path: String) {
    world.directory().serve_json(&chain_path(&path), &chain_document(&path));
}

#[given(expr = "chain {string} is listed with status {string}")]
async fn chain_listed_with_status(world: &mut DirectoryWorld, name: String, status: String) {
    let directory = world.directory();
    let mut document = directory.document("/chains").expect("Chain list not served");
    let chains = document["chains"].as_array_mut().expect("chains is not an array");
    let chain = chains
        .iter_mut()
        .find(|chain| chain["name"] == json!(name))
        .expect("Chain not listed");
    chain["status"] = json!(status);
    directory.serve_json("/chains", &document);
}

#[given(expr = "chain {string} is served without a genesis")]
async fn chain_without_genesis(world: &mut DirectoryWorld, path: String) {
    let directory = world.directory();
    let mut document = chain_document(&path);
    document["chain"]
        .as_object_mut()
        .expect("chain is not an object")
        .remove("genesis");
    directory.serve_json(&chain_path(&path), &document);
}

#[given("the directory answers the chain list with an HTML page")]
async fn serve_html(world: &mut DirectoryWorld) {
    world
        .directory()
        .serve_raw("/chains", "<html><body>Service temporarily unavailable</body></html>");
}

#[when("I fetch the chain list")]
async fn fetch_chains(world: &mut DirectoryWorld) {
    let result = world.client().fetch_chains().await;
    world.record(result);
}

#[when(expr = "I fetch chain {string}")]
async fn fetch_chain(world: &mut DirectoryWorld, path: String) {
    let result = world.client().fetch_chain(&path).await;
    world.record(result);
}

#[then(expr = "the result should list chains {string}")]
async fn result_lists_chains(world: &mut DirectoryWorld, expected: String) {
    let names: Vec<&str> = world.result()["chains"]
        .as_array()
        .expect("chains is not an array")
        .iter()
        .filter_map(|chain| chain["name"].as_str())
        .collect();
    assert_eq!(names.join(", "), expected);
}

#[then(expr = "the result should be chain {string} with chain ID {string}")]
async fn result_is_chain(world: &mut DirectoryWorld, path: String, chain_id: String) {
    let chain = &world.result()["chain"];
    assert_eq!(chain["path"], json!(path));
    assert_eq!(chain["chain_id"], json!(chain_id));
}
