//! McpFinder batch execution tests against a wiremock registry.

use mcpscout_core::{ApiKey, BatchStatus, McpFinder, QueryOutcome, RegistryClient};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tests::{details, server_list, summary, tool, unreachable_base_url};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn finder_for(server: &MockServer) -> McpFinder {
    McpFinder::new(
        RegistryClient::new(Some(ApiKey::new("test-key"))).with_base_url(server.uri()),
    )
}

#[tokio::test]
async fn no_match_reports_original_query_and_trips_failure_check() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/servers"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(server_list(vec![summary("exa", "Exa Search")])),
        )
        .mount(&mock_server)
        .await;

    let report = finder_for(&mock_server)
        .execute(&["stockmarket".to_string()], false)
        .await;

    assert_eq!(
        report,
        "Error: No MCP server found for query 'stockmarket'"
    );
    assert!(McpFinder::execution_failure_check(&report));
}

#[tokio::test]
async fn matched_servers_render_blocks_and_skip_null_tools() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/servers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(server_list(vec![
            summary("exa-search", "Exa Search"),
            summary("@smithery-ai/brave-search", "Brave Search"),
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/servers/exa-search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(details(
            "exa-search",
            "Exa Search",
            json!([tool("web_search", "Search the web")]),
        )))
        .mount(&mock_server)
        .await;

    // Matched by name, but tools are null: omitted from the report.
    Mock::given(method("GET"))
        .and(path("/servers/@smithery-ai/brave-search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(details(
            "@smithery-ai/brave-search",
            "Brave Search",
            Value::Null,
        )))
        .mount(&mock_server)
        .await;

    let report = finder_for(&mock_server)
        .execute(&["Search".to_string()], false)
        .await;

    assert_eq!(
        report,
        "Name: Exa Search\n\
         Usage name: exa-search\n\
         Tools: [web_search: Search the web]\n\
         -------"
    );
    assert!(!McpFinder::execution_failure_check(&report));
}

#[tokio::test]
async fn http_failure_becomes_error_line_and_batch_continues() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/servers"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let finder = finder_for(&mock_server);
    let queries = vec!["stock".to_string(), "weather".to_string()];
    let structured = finder.run_queries(&queries).await;

    // Both queries ran despite the first failing.
    assert_eq!(structured.outcomes.len(), 2);
    assert!(structured
        .outcomes
        .iter()
        .all(|o| matches!(o, QueryOutcome::Failed { .. })));
    assert_eq!(structured.status(), BatchStatus::Failure);

    let report = structured.render();
    assert_eq!(report.matches("Error: ").count(), 2);
    assert!(report.contains("401"));
}

#[tokio::test]
async fn transport_failure_yields_fixed_connection_line() {
    let finder = McpFinder::new(
        RegistryClient::new(Some(ApiKey::new("test-key")))
            .with_base_url(unreachable_base_url()),
    );

    let report = finder.execute(&["stock".to_string()], false).await;

    assert_eq!(report, "Connection failed. Is the API key in environement?");
    assert!(McpFinder::execution_failure_check(&report));
}

#[tokio::test]
async fn detail_failure_surfaces_as_error_line() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/servers"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(server_list(vec![summary("exa", "Exa Search")])),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/servers/exa"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let report = finder_for(&mock_server)
        .execute(&["exa".to_string()], false)
        .await;

    assert!(report.starts_with("Error: "));
    assert!(report.contains("500"));
}

#[tokio::test]
async fn mixed_batch_classifies_as_partial() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/servers"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(server_list(vec![summary("exa", "Exa Search")])),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/servers/exa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(details(
            "exa",
            "Exa Search",
            json!([tool("web_search", "Search the web")]),
        )))
        .mount(&mock_server)
        .await;

    let finder = finder_for(&mock_server);
    let structured = finder
        .run_queries(&["exa".to_string(), "nothing-matches-this".to_string()])
        .await;

    assert_eq!(structured.status(), BatchStatus::Partial);
    assert!(matches!(structured.outcomes[0], QueryOutcome::Matched { .. }));
    assert!(matches!(structured.outcomes[1], QueryOutcome::NoMatch { .. }));

    // The rendered report carries both the match block and the error line.
    let report = structured.render();
    assert!(report.contains("Usage name: exa"));
    assert!(report.contains("Error: No MCP server found for query 'nothing-matches-this'"));
}

#[tokio::test]
async fn queries_are_normalized_before_matching() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/servers"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(server_list(vec![summary("exa", "Exa Search")])),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/servers/exa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(details(
            "exa",
            "Exa Search",
            json!([tool("web_search", "Search the web")]),
        )))
        .mount(&mock_server)
        .await;

    // Free-text block with surrounding whitespace and an internal newline.
    let report = finder_for(&mock_server)
        .execute(&["\n  EXA  \n".to_string()], false)
        .await;

    assert!(report.contains("Usage name: exa"));
}
