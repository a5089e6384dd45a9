//! DynamoDB store tests against a mock HTTP endpoint

use dynamojo::adapters::dynamodb::DynamoDbStore;
use dynamojo::adapters::store::TableStore;
use dynamojo::config::AwsSettings;
use dynamojo::domain::{DumpError, TableName};
use mockito::{Matcher, Server};
use serde_json::json;

const JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.0";

async fn store_for(server: &Server) -> DynamoDbStore {
    let endpoint = server.url();
    let settings = AwsSettings::from_lookup(|name| match name {
        "AWS_ACCESS_KEY_ID" => Some("AKIDEXAMPLE".to_string()),
        "AWS_SECRET_ACCESS_KEY" => Some("secret".to_string()),
        "AWS_REGION" => Some("us-east-1".to_string()),
        "AWS_ENDPOINT_URL_DYNAMODB" => Some(endpoint.clone()),
        _ => None,
    })
    .unwrap();

    DynamoDbStore::connect(&settings).await
}

fn table(name: &str) -> TableName {
    TableName::new(name).unwrap()
}

#[tokio::test]
async fn test_scan_returns_items_in_wire_form() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("x-amz-target", "DynamoDB_20120810.Scan")
        .match_body(Matcher::PartialJson(json!({"TableName": "orders"})))
        .with_status(200)
        .with_header("content-type", JSON_CONTENT_TYPE)
        .with_body(
            json!({
                "Count": 2,
                "ScannedCount": 2,
                "Items": [
                    {"id": {"S": "2"}, "total": {"N": "10.5"}, "paid": {"BOOL": true}},
                    {"id": {"S": "1"}, "note": {"NULL": true}, "raw": {"B": "AAEC"}}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let store = store_for(&server).await;
    let output = store.scan(&table("orders")).await.unwrap();

    mock.assert_async().await;
    assert!(!output.truncated);
    assert_eq!(
        output.records,
        vec![
            json!({"id": {"S": "2"}, "paid": {"BOOL": true}, "total": {"N": "10.5"}}),
            json!({"id": {"S": "1"}, "note": {"NULL": true}, "raw": {"B": "AAEC"}}),
        ]
    );
}

#[tokio::test]
async fn test_scan_flags_truncated_response() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", JSON_CONTENT_TYPE)
        .with_body(
            json!({
                "Count": 1,
                "ScannedCount": 1,
                "Items": [{"id": {"S": "1"}}],
                "LastEvaluatedKey": {"id": {"S": "1"}}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let store = store_for(&server).await;
    let output = store.scan(&table("big")).await.unwrap();

    assert!(output.truncated);
    assert_eq!(output.len(), 1);
}

#[tokio::test]
async fn test_resource_not_found_maps_to_table_not_found() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(400)
        .with_header("content-type", JSON_CONTENT_TYPE)
        .with_body(
            json!({
                "__type": "com.amazonaws.dynamodb.v20120810#ResourceNotFoundException",
                "message": "Requested resource not found"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let store = store_for(&server).await;
    let err = store.scan(&table("ghost")).await.unwrap_err();

    assert!(matches!(err, DumpError::TableNotFound(ref name) if name == "ghost"));
}

#[tokio::test]
async fn test_other_service_errors_keep_their_code() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(400)
        .with_header("content-type", JSON_CONTENT_TYPE)
        .with_body(
            json!({
                "__type": "com.amazon.coral.service#AccessDeniedException",
                "message": "User is not authorized to perform: dynamodb:Scan"
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let store = store_for(&server).await;
    let err = store.scan(&table("orders")).await.unwrap_err();

    // Retries are disabled, so exactly one request is made
    mock.assert_async().await;
    match err {
        DumpError::Remote { code, details } => {
            assert_eq!(code, "AccessDeniedException");
            assert!(!details.is_empty());
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}
