//! End-to-end test: raw host item JSON through parsing, dispatch, and a
//! scripted transport into tagged results.
mod common;

use common::MockTransport;
use daicho::prelude::*;
use std::sync::Arc;

#[tokio::test]
async fn test_host_items_end_to_end() {
    let raw = r#"[
        {
            "action": "create",
            "table": "orders",
            "data": [{"field": "name", "value": " First "}],
            "staticData": "{\"source\": \"cli\"}"
        },
        {
            "action": "getByFilter",
            "table": "orders",
            "filters": {
                "type": "conjunction",
                "operator": "and",
                "conditions": [
                    {"type": "condition", "field": "status", "comparator": "eq", "value": "open"}
                ]
            },
            "fields": ["id", "name"],
            "limit": 2
        },
        {
            "action": "getById",
            "table": "orders",
            "recordId": "9"
        }
    ]"#;
    let items = ActionParams::parse_batch(raw).expect("host items should parse");
    assert_eq!(items.len(), 3);

    let transport = Arc::new(MockTransport::replying(vec![
        Ok(json!({"id": 1, "name": "First", "source": "cli"})),
        Ok(json!([{"id": 1}, {"id": 2}])),
        Ok(json!({"id": 9, "name": "Ninth"})),
    ]));
    let runner = BatchRunner::new(transport.clone());
    let results = runner
        .run(&items, &common::test_credentials())
        .await
        .expect("batch should succeed");

    // The search payload fans out into one entry per row, all tagged item 1.
    assert_eq!(results.len(), 4);
    assert_eq!(results[0].item, 0);
    assert_eq!(results[1].item, 1);
    assert_eq!(results[2].item, 1);
    assert_eq!(results[3].item, 2);
    assert_eq!(results[1].to_json(), json!({"id": 1}));
    assert_eq!(results[3].to_json(), json!({"id": 9, "name": "Ninth"}));

    let seen = transport.seen();
    assert_eq!(seen.len(), 3);

    assert_eq!(seen[0].method, HttpMethod::Post);
    assert_eq!(seen[0].url, "https://backend.test/api/instance/orders/");
    assert_eq!(seen[0].body, Some(json!({"name": "First", "source": "cli"})));

    assert_eq!(seen[1].url, "https://backend.test/api/instances/search/orders");
    let search_body = seen[1].body.clone().expect("search carries a body");
    assert_eq!(search_body["limit"], json!(2));
    assert_eq!(search_body["offset"], json!(0));
    assert_eq!(search_body["fields"], json!({"id": {}, "name": {}}));
    assert_eq!(
        search_body["filter"]["conditions"][0]["comparator"],
        json!("=")
    );

    assert_eq!(seen[2].method, HttpMethod::Get);
    assert_eq!(seen[2].url, "https://backend.test/api/instance/orders/9");
    assert!(seen[2].body.is_none());
}

#[tokio::test]
async fn test_custom_handler_rides_the_batch() {
    struct CountHandler;

    impl ActionHandler for CountHandler {
        fn verb(&self) -> &str {
            "count"
        }

        fn build(
            &self,
            params: &ActionParams,
            credentials: &Credentials,
        ) -> std::result::Result<ActionRequest, DispatchError> {
            let table = params.require_table()?;
            Ok(ActionRequest::bare(
                HttpMethod::Get,
                credentials.url_for(&format!("count/{table}")),
                credentials,
            ))
        }
    }

    let transport = Arc::new(MockTransport::replying(vec![Ok(json!({"count": 12}))]));
    let dispatcher = Dispatcher::builder()
        .with_custom_handler(Box::new(CountHandler))
        .build();
    let runner = BatchRunner::new(transport.clone()).with_dispatcher(dispatcher);

    let items = vec![ActionParams {
        action: "count".to_string(),
        table: "orders".to_string(),
        ..Default::default()
    }];
    let results = runner
        .run(&items, &common::test_credentials())
        .await
        .expect("batch should succeed");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].to_json(), json!({"count": 12}));
    assert_eq!(
        transport.seen()[0].url,
        "https://backend.test/api/count/orders"
    );
}
