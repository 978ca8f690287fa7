use httpmock::prelude::*;
use std::time::Duration;
use valghenter::domain::ports::Harvest;
use valghenter::{ApiClient, ElectionType, Harvester};

/// Mounts a minimal one-fylke, one-kommune tree for the given election and
/// returns (root, fylke, kommune) mocks for hit counting.
fn mount_tree<'a>(
    server: &'a MockServer,
    year: &str,
    code: &str,
) -> (httpmock::Mock<'a>, httpmock::Mock<'a>, httpmock::Mock<'a>) {
    let root_path = format!("/{}/{}", year, code);
    let fylke_path = format!("/{}/{}/11", year, code);
    let kommune_path = format!("/{}/{}/11/1103", year, code);

    let root = server.mock(|when, then| {
        when.method(GET).path(&root_path);
        then.status(200).json_body(serde_json::json!({
            "underliggende": [{"href": fylke_path.clone()}]
        }));
    });

    let fylke = server.mock(|when, then| {
        when.method(GET).path(&fylke_path);
        then.status(200)
            .json_body(serde_json::json!([{"href": kommune_path.clone()}]));
    });

    let kommune = server.mock(|when, then| {
        when.method(GET).path(&kommune_path);
        then.status(200).json_body(serde_json::json!({
            "navn": "Stavanger",
            "partier": [
                {"partikode": "A", "stemmer": {"totalt": 100}, "prosent": {"totalt": 50.0}},
                {"partikode": "H", "stemmer": {"totalt": 100}, "prosent": {"totalt": 50.0}},
            ]
        }));
    });

    (root, fylke, kommune)
}

#[tokio::test]
async fn test_repeat_call_within_ttl_issues_no_requests() {
    let server = MockServer::start();
    let (root, fylke, kommune) = mount_tree(&server, "2021", "st");

    let harvester = Harvester::new(ApiClient::new(&server.base_url()).unwrap());

    let first = harvester
        .fetch_results("2021", ElectionType::St)
        .await
        .unwrap();
    let second = harvester
        .fetch_results("2021", ElectionType::St)
        .await
        .unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
    assert_eq!(root.hits(), 1);
    assert_eq!(fylke.hits(), 1);
    assert_eq!(kommune.hits(), 1);
}

#[tokio::test]
async fn test_different_election_type_fetches_fresh() {
    let server = MockServer::start();
    let (st_root, _, _) = mount_tree(&server, "2021", "st");
    let (kv_root, _, kv_kommune) = mount_tree(&server, "2021", "kv");

    let harvester = Harvester::new(ApiClient::new(&server.base_url()).unwrap());

    harvester
        .fetch_results("2021", ElectionType::St)
        .await
        .unwrap();
    let kv_rows = harvester
        .fetch_results("2021", ElectionType::Kv)
        .await
        .unwrap();

    assert_eq!(kv_rows.len(), 2);
    assert_eq!(kv_rows[0].valtype, ElectionType::Kv);
    assert_eq!(st_root.hits(), 1);
    assert_eq!(kv_root.hits(), 1);
    assert_eq!(kv_kommune.hits(), 1);
}

#[tokio::test]
async fn test_expired_ttl_refetches() {
    let server = MockServer::start();
    let (root, _, _) = mount_tree(&server, "2021", "st");

    let harvester = Harvester::new_with_ttl(
        ApiClient::new(&server.base_url()).unwrap(),
        Duration::from_millis(50),
    );

    harvester
        .fetch_results("2021", ElectionType::St)
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(80)).await;
    harvester
        .fetch_results("2021", ElectionType::St)
        .await
        .unwrap();

    assert_eq!(root.hits(), 2);
}

#[tokio::test]
async fn test_failed_harvest_is_not_cached() {
    let server = MockServer::start();

    let root = server.mock(|when, then| {
        when.method(GET).path("/2021/st");
        then.status(200).json_body(serde_json::json!({
            "underliggende": [{"href": "/2021/st/11"}]
        }));
    });

    let fylke = server.mock(|when, then| {
        when.method(GET).path("/2021/st/11");
        then.status(200)
            .json_body(serde_json::json!([{"href": "/2021/st/11/1103"}]));
    });

    let mut broken_kommune = server.mock(|when, then| {
        when.method(GET).path("/2021/st/11/1103");
        then.status(500);
    });

    let harvester = Harvester::new(ApiClient::new(&server.base_url()).unwrap());
    assert!(harvester
        .fetch_results("2021", ElectionType::St)
        .await
        .is_err());

    // Upstream recovers; the failure must not have been memoized.
    broken_kommune.delete();
    server.mock(|when, then| {
        when.method(GET).path("/2021/st/11/1103");
        then.status(200).json_body(serde_json::json!({
            "navn": "Stavanger",
            "partier": [{"partikode": "A"}]
        }));
    });

    let rows = harvester
        .fetch_results("2021", ElectionType::St)
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(root.hits(), 2);
    assert_eq!(fylke.hits(), 2);
}

#[tokio::test]
async fn test_concurrent_identical_calls_share_one_sweep() {
    let server = MockServer::start();
    let (root, fylke, kommune) = mount_tree(&server, "2021", "st");

    let harvester = Harvester::new(ApiClient::new(&server.base_url()).unwrap());

    let (a, b) = tokio::join!(
        harvester.fetch_results("2021", ElectionType::St),
        harvester.fetch_results("2021", ElectionType::St),
    );

    assert_eq!(a.unwrap().len(), 2);
    assert_eq!(b.unwrap().len(), 2);
    assert_eq!(root.hits(), 1);
    assert_eq!(fylke.hits(), 1);
    assert_eq!(kommune.hits(), 1);
}
