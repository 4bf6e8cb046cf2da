//! Integration tests for the analyser
//!
//! These tests use wiremock to create mock HTTP servers and run the full
//! analysis pipeline end-to-end over real HTTP.

use sumi_lens::analysis::{MarkupVersion, PageOutcome};
use sumi_lens::config::{AnalyserConfig, Config};
use sumi_lens::{Analyser, FetchError, LensError};
use wiremock::matchers::{header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = r##"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">
<html>
<head><title>Account</title></head>
<body>
    <h1>Account</h1>
    <h3>Sign in</h3>
    <h3>Recent</h3>
    <form action="/session" method="post">
        <input type="email" name="user" />
        <input type="password" name="pass" />
    </form>
    <a href="#top">Top</a>
    <a href="/ok">Fine</a>
    <a href="/ok">Fine again</a>
    <a href="/missing">Gone</a>
    <a href="/choice">Pick one</a>
    <a href="about.html">About</a>
    <a>No target</a>
</body>
</html>"##;

/// Creates a test configuration with a small worker pool
fn create_test_config() -> Config {
    Config {
        analyser: AnalyserConfig {
            worker_count: 4,
            max_concurrent_pages: 2,
        },
        ..Config::default()
    }
}

async fn mount_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_analysis_over_http() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, "/", PAGE).await;

    // Duplicates must be probed once
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    // 300 without a Location header is not followed and counts as reachable
    Mock::given(method("GET"))
        .and(path("/choice"))
        .respond_with(ResponseTemplate::new(300))
        .expect(1)
        .mount(&mock_server)
        .await;

    let analyser = Analyser::from_config(&create_test_config()).unwrap();
    let target = format!("{}/", mock_server.uri());
    let result = analyser.analyse(&target).await.unwrap();

    assert_eq!(result.html_version, MarkupVersion::Html401);
    assert_eq!(result.title, "Account");
    assert_eq!(result.headings["h1"], 1);
    assert_eq!(result.headings["h2"], 0);
    assert_eq!(result.headings["h3"], 2);
    assert!(result.has_login_form);

    // /ok, /missing, /choice, about.html
    assert_eq!(result.link.internal_links, 4);
    assert_eq!(result.link.external_links, 0);
    assert_eq!(result.link.inaccessible_link_count, 2);

    let mut inaccessible = result.link.inaccessible_link.clone();
    inaccessible.sort();
    assert_eq!(
        inaccessible,
        vec![
            format!("{}/about.html", mock_server.uri()),
            format!("{}/missing", mock_server.uri()),
        ]
    );
}

#[tokio::test]
async fn test_page_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let analyser = Analyser::from_config(&create_test_config()).unwrap();
    let result = analyser.analyse(&format!("{}/", mock_server.uri())).await;

    assert!(matches!(
        result,
        Err(LensError::Fetch(FetchError::Status { status: 404, .. }))
    ));
}

#[tokio::test]
async fn test_probes_carry_user_agent() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, "/", r#"<html><a href="/ping">ping</a></html>"#).await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header_regex("user-agent", "^SumiLens/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let analyser = Analyser::from_config(&create_test_config()).unwrap();
    let result = analyser
        .analyse(&format!("{}/", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(result.html_version, MarkupVersion::Unknown);
    assert_eq!(result.title, "");
    assert_eq!(result.link.internal_links, 1);
    assert_eq!(result.link.inaccessible_link_count, 0);
}

#[tokio::test]
async fn test_batch_analysis() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;

    mount_page(&first, "/", "<!DOCTYPE html><title>First</title>").await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&second)
        .await;

    let urls = vec![
        format!("{}/", first.uri()),
        format!("{}/", second.uri()),
        "htpp//nowhere".to_string(),
    ];

    let analyser = Analyser::from_config(&create_test_config()).unwrap();
    let reports = analyser.analyse_all(&urls).await;

    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].url, urls[0]);
    assert!(matches!(
        &reports[0].outcome,
        PageOutcome::Analysed { result }
            if result.title == "First" && result.html_version == MarkupVersion::Html5
    ));
    assert!(!reports[1].is_success());
    assert!(!reports[2].is_success());
}
