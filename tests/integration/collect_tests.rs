//! Integration tests for the collector
//!
//! These tests use wiremock to stand in for the search engine and the
//! result pages and run the full search, fetch, extract and save cycle.

use mailsweep::config::{Config, DelayRange, SearchConfig};
use mailsweep::crawler::{collect, Collector};
use mailsweep::output::{save_results, summarize};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a configuration pointing the search provider at the mock server
fn create_test_config(search_server: &MockServer) -> Config {
    Config {
        search: SearchConfig {
            endpoint: format!("{}/html/", search_server.uri()),
            ..SearchConfig::default()
        },
        ..Config::default()
    }
}

fn no_delay() -> DelayRange {
    DelayRange::new(0.0, 0.0).expect("zero delay is valid")
}

/// Renders a results page with one organic result anchor per URL
fn results_page(urls: &[String]) -> String {
    let results: String = urls
        .iter()
        .map(|url| {
            format!(
                r#"<div class="result results_links"><h2><a class="result__a" href="//duckduckgo.com/l/?uddg={url}">Title</a></h2>
                <a class="result__url" href="{url}">{url}</a></div>"#
            )
        })
        .collect();
    format!("<html><body><div id=\"links\">{}</div></body></html>", results)
}

async fn mount_search(server: &MockServer, query: &str, urls: &[String]) {
    Mock::given(method("GET"))
        .and(path("/html/"))
        .and(query_param("q", query))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(results_page(urls))
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_end_to_end_collect_save_and_summarize() {
    let search_server = MockServer::start().await;
    let site_a = MockServer::start().await;
    let site_b = MockServer::start().await;

    let url_a = format!("{}/contact", site_a.uri());
    let url_b = format!("{}/about", site_b.uri());
    mount_search(&search_server, "test", &[url_a.clone(), url_b.clone()]).await;

    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(
                    r#"<html><head><title>Contact</title><script>var spam = "bot@trap.com";</script></head>
                    <body><p>Write to <a href="mailto:foo@bar.com">foo@bar.com</a></p></body></html>"#,
                )
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&site_a)
        .await;

    // Page B fails; its URL must not appear in the results
    Mock::given(method("GET"))
        .and(path("/about"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&site_b)
        .await;

    let config = create_test_config(&search_server);
    let results = collect(&config, "test", 10, 3, no_delay())
        .await
        .expect("collector should build");

    assert_eq!(results.len(), 1);
    let emails = results.get(&url_a).expect("page A should have emails");
    assert_eq!(emails.len(), 1);
    assert!(emails.contains("foo@bar.com"));
    assert!(!results.contains_url(&url_b));

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("collected_emails.csv");
    save_results(&results, &output).expect("Failed to save results");

    let content = std::fs::read_to_string(&output).expect("Failed to read output");
    assert_eq!(content, format!("URL,Email\n{},foo@bar.com\n", url_a));

    let summary = summarize(&results);
    assert_eq!(summary.urls_processed, 1);
    assert_eq!(summary.total_emails, 1);
    assert_eq!(summary.unique_emails.len(), 1);
}

#[tokio::test]
async fn test_per_domain_cap_limits_fetches() {
    let search_server = MockServer::start().await;
    let busy_site = MockServer::start().await;
    let other_site = MockServer::start().await;

    let urls = vec![
        format!("{}/1", busy_site.uri()),
        format!("{}/2", busy_site.uri()),
        format!("{}/", other_site.uri()),
        format!("{}/3", busy_site.uri()),
        format!("{}/4", busy_site.uri()),
    ];
    mount_search(&search_server, "busy", &urls).await;

    for page in ["/1", "/2"] {
        Mock::given(method("GET"))
            .and(path(page))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(format!("<p>page{}@busy.com</p>", &page[1..])),
            )
            .expect(1)
            .mount(&busy_site)
            .await;
    }
    for page in ["/3", "/4"] {
        Mock::given(method("GET"))
            .and(path(page))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>never@busy.com</p>"))
            .expect(0)
            .mount(&busy_site)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>no emails</p>"))
        .expect(1)
        .mount(&other_site)
        .await;

    let config = create_test_config(&search_server);
    let results = collect(&config, "busy", 10, 2, no_delay())
        .await
        .expect("collector should build");

    let urls_with_emails: Vec<&str> = results.iter().map(|(url, _)| url).collect();
    assert_eq!(urls_with_emails, vec![urls[0].as_str(), urls[1].as_str()]);

    let summary = summarize(&results);
    assert!(!summary.unique_emails.contains("never@busy.com"));
}

#[tokio::test]
async fn test_search_failure_yields_empty_result() {
    let search_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&search_server)
        .await;

    let config = create_test_config(&search_server);
    let collector =
        Collector::from_config(&config, no_delay()).expect("collector should build");
    let results = collector.collect("anything", 10, 3).await;

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_result_count_limits_pages_visited() {
    let search_server = MockServer::start().await;
    let site = MockServer::start().await;

    let urls: Vec<String> = (1..=4).map(|i| format!("{}/p{}", site.uri(), i)).collect();
    mount_search(&search_server, "limited", &urls).await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>team@site.org</p>"))
        .expect(2)
        .mount(&site)
        .await;

    let config = create_test_config(&search_server);
    let results = collect(&config, "limited", 2, 10, no_delay())
        .await
        .expect("collector should build");

    assert_eq!(results.len(), 2);

    // The same address on both pages counts once as unique, twice in total
    let summary = summarize(&results);
    assert_eq!(summary.total_emails, 2);
    assert_eq!(summary.unique_emails.len(), 1);
}
