use std::collections::VecDeque;

use spindcli::error::FetchError;
use spindcli::spotify::{PageSource, fetch_all, retry_delay_secs};
use spindcli::types::Page;

/// Page source that replays a scripted sequence of results and records the
/// cursor URLs it was asked for.
struct ScriptedSource {
    pages: VecDeque<Result<Page<String>, FetchError>>,
    requested_urls: Vec<String>,
}

impl ScriptedSource {
    fn new(pages: Vec<Result<Page<String>, FetchError>>) -> Self {
        Self {
            pages: pages.into(),
            requested_urls: Vec::new(),
        }
    }
}

impl PageSource<String> for ScriptedSource {
    async fn fetch(&mut self, url: &str) -> Result<Page<String>, FetchError> {
        self.requested_urls.push(url.to_string());
        self.pages
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Api("no more scripted pages".to_string())))
    }
}

fn page(items: &[&str], next: Option<&str>) -> Result<Page<String>, FetchError> {
    Ok(Page {
        items: items.iter().map(|s| s.to_string()).collect(),
        next: next.map(|s| s.to_string()),
    })
}

#[tokio::test]
async fn test_three_pages_concatenate_in_order() {
    let mut source = ScriptedSource::new(vec![
        page(&["a", "b"], Some("page2")),
        page(&["c", "d"], Some("page3")),
        page(&["e"], None),
    ]);

    let items = fetch_all(&mut source, "page1".to_string()).await.unwrap();

    assert_eq!(items, vec!["a", "b", "c", "d", "e"]);
    assert_eq!(source.requested_urls, vec!["page1", "page2", "page3"]);
}

#[tokio::test]
async fn test_empty_page_with_cursor_does_not_terminate() {
    let mut source = ScriptedSource::new(vec![
        page(&["a"], Some("page2")),
        page(&[], Some("page3")),
        page(&["b"], None),
    ]);

    let items = fetch_all(&mut source, "page1".to_string()).await.unwrap();

    assert_eq!(items, vec!["a", "b"]);
    assert_eq!(source.requested_urls.len(), 3);
}

#[tokio::test]
async fn test_terminates_strictly_on_absent_cursor() {
    let mut source = ScriptedSource::new(vec![
        page(&["a"], None),
        // would blow up the scripted source if it were requested
        page(&["never"], None),
    ]);

    let items = fetch_all(&mut source, "page1".to_string()).await.unwrap();

    assert_eq!(items, vec!["a"]);
    assert_eq!(source.requested_urls, vec!["page1"]);
}

#[tokio::test]
async fn test_mid_fetch_failure_discards_partial_result() {
    let mut source = ScriptedSource::new(vec![
        page(&["a", "b"], Some("page2")),
        Err(FetchError::Api("boom".to_string())),
    ]);

    let result = fetch_all(&mut source, "page1".to_string()).await;

    // the whole fetch fails; the two already-fetched items are discarded
    assert!(result.is_err());
    assert_eq!(source.requested_urls, vec!["page1", "page2"]);
}

#[tokio::test]
async fn test_single_empty_collection() {
    let mut source = ScriptedSource::new(vec![page(&[], None)]);

    let items = fetch_all(&mut source, "page1".to_string()).await.unwrap();

    assert!(items.is_empty());
}

#[test]
fn test_retry_delay_honors_header() {
    assert_eq!(retry_delay_secs(Some("5")), 5);
    assert_eq!(retry_delay_secs(Some("60")), 60);
}

#[test]
fn test_retry_delay_clamps_excessive_header() {
    assert_eq!(retry_delay_secs(Some("61")), 60);
    assert_eq!(retry_delay_secs(Some("86400")), 60);
}

#[test]
fn test_retry_delay_falls_back_without_usable_header() {
    assert_eq!(retry_delay_secs(None), 10);
    assert_eq!(retry_delay_secs(Some("soon")), 10);
    assert_eq!(retry_delay_secs(Some("-3")), 10);
}
