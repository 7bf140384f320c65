mod common;
use common::FixtureServer;
use predicates::prelude::*;

#[test]
fn test_products_json_lists_whole_catalog() {
    let fixture = FixtureServer::start();

    let output = fixture
        .command()
        .args(["--format", "json", "products"])
        .output()
        .expect("Failed to run products");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Parse failed");

    assert_eq!(result["total"], 4);
    let products = result["products"].as_array().expect("Expected products array");
    assert_eq!(products.len(), 4);
    assert_eq!(products[0]["title"], "Red Shirt");
}

#[test]
fn test_products_query_matches_title_or_description() {
    let fixture = FixtureServer::start();

    let output = fixture
        .command()
        .args(["--format", "json", "products", "--query", "shirt"])
        .output()
        .expect("Failed to run products with query");

    assert!(output.status.success());
    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).expect("Parse failed");

    let ids: Vec<u64> = result["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    // Title hit (Red Shirt) plus description hit (USB Drive).
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_products_category_and_query_are_anded() {
    let fixture = FixtureServer::start();

    let output = fixture
        .command()
        .args([
            "--format",
            "json",
            "products",
            "--query",
            "shirt",
            "--category",
            "clothing",
        ])
        .output()
        .expect("Failed to run products with filters");

    assert!(output.status.success());
    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).expect("Parse failed");

    let products = result["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["id"], 1);
}

#[test]
fn test_products_plain_table_and_empty_state() {
    let fixture = FixtureServer::start();

    fixture
        .command()
        .arg("products")
        .assert()
        .success()
        .stdout(predicate::str::contains("Red Shirt"))
        .stdout(predicate::str::contains("4 products"));

    fixture
        .command()
        .args(["products", "--query", "no-such-thing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products match your query"));
}

#[test]
fn test_products_surfaces_http_status_errors() {
    let fixture = FixtureServer::start();

    let mut cmd = assert_cmd::Command::cargo_bin("storelens").expect("Failed to find binary");
    cmd.args(["--base-url", &fixture.broken_base_url(), "products"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP 500"));
}
