mod common;

use common::{meal, FakeApi};
use recipe_finder::error::{EMPTY_QUERY_MESSAGE, NO_RESULTS_MESSAGE, SEARCH_FAILED_MESSAGE};
use recipe_finder::{KeyPolicy, SearchController, SearchError, SearchOutcome};

#[tokio::test]
async fn test_repeat_search_is_served_from_cache() {
    let api = FakeApi::new();
    api.with_results("beef", vec![meal("1", "Beef Wellington"), meal("2", "Beef Stew")]);
    let controller = SearchController::new(api.clone(), KeyPolicy::Exact);

    let first = controller.search("beef").await.unwrap();
    let second = controller.search("beef").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].thumbnail_url, "https://img.example/1.jpg");
    assert_eq!(api.call_count(), 1);

    let view = controller.view();
    assert!(!view.loading);
    assert_eq!(view.query, "beef");
    assert_eq!(view.results().len(), 2);
    assert!(view.message().is_none());
}

#[tokio::test]
async fn test_blank_query_never_reaches_network() {
    let api = FakeApi::new();
    let controller = SearchController::new(api.clone(), KeyPolicy::Exact);

    for query in ["", "   ", "\t\n"] {
        let err = controller.search(query).await.unwrap_err();
        assert!(matches!(err, SearchError::ValidationError));
        assert_eq!(controller.view().message(), Some(EMPTY_QUERY_MESSAGE));
    }

    assert_eq!(api.call_count(), 0);
    assert_eq!(controller.cached_queries(), 0);
}

#[tokio::test]
async fn test_no_matches_is_cached_empty_state() {
    let api = FakeApi::new();
    let controller = SearchController::new(api.clone(), KeyPolicy::Exact);

    let results = controller.search("chicken").await.unwrap();
    assert!(results.is_empty());
    let view = controller.view();
    assert_eq!(view.outcome, Some(SearchOutcome::NoResults));
    assert_eq!(view.message(), Some(NO_RESULTS_MESSAGE));

    let again = controller.search("chicken").await.unwrap();
    assert!(again.is_empty());
    assert_eq!(controller.view(), view);
    assert_eq!(api.call_count(), 1);
}

#[tokio::test]
async fn test_fetch_failure_is_not_cached() {
    let api = FakeApi::new();
    api.with_results("pasta", vec![meal("7", "Pasta Bake")]);
    api.fail("pasta");
    let controller = SearchController::new(api.clone(), KeyPolicy::Exact);

    let err = controller.search("pasta").await.unwrap_err();
    assert!(err.is_retryable());
    let view = controller.view();
    assert_eq!(view.message(), Some(SEARCH_FAILED_MESSAGE));
    assert!(view.results().is_empty());
    assert!(!view.loading);

    api.recover("pasta");
    let results = controller.search("pasta").await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(api.call_count(), 2);
    assert!(controller.view().message().is_none());
}

#[tokio::test]
async fn test_exact_keys_distinguish_case() {
    let api = FakeApi::new();
    let controller = SearchController::new(api.clone(), KeyPolicy::Exact);

    controller.search("chicken").await.unwrap();
    controller.search("Chicken").await.unwrap();
    assert_eq!(api.call_count(), 2);
}

#[tokio::test]
async fn test_folded_keys_share_entries() {
    let api = FakeApi::new();
    api.with_results("chicken", vec![meal("3", "Chicken Handi")]);
    let controller = SearchController::new(api.clone(), KeyPolicy::Folded);

    let first = controller.search("chicken").await.unwrap();
    let second = controller.search("  Chicken ").await.unwrap();
    assert_eq!(first, second);
    assert_eq!(api.call_count(), 1);
}

#[tokio::test]
async fn test_loading_flag_while_request_in_flight() {
    let api = FakeApi::new();
    api.hold("lamb");
    let controller = SearchController::new(api.clone(), KeyPolicy::Exact);

    let (result, loading) = tokio::join!(controller.search("lamb"), async {
        tokio::task::yield_now().await;
        let loading = controller.view().loading;
        api.release("lamb");
        loading
    });

    assert!(loading);
    assert!(result.unwrap().is_empty());
    assert!(!controller.view().loading);
}

#[tokio::test]
async fn test_overlapping_searches_older_resolves_last() {
    let api = FakeApi::new();
    api.with_results("beef", vec![meal("1", "Beef Wellington")]);
    api.with_results("pork", vec![meal("2", "Pork Cassoulet")]);
    api.hold("beef");
    api.hold("pork");
    let controller = SearchController::new(api.clone(), KeyPolicy::Exact);

    let (beef, pork, _) = tokio::join!(controller.search("beef"), controller.search("pork"), async {
        tokio::task::yield_now().await;
        api.release("pork");
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
        api.release("beef");
    });

    // Each call still gets its own results back
    assert_eq!(beef.unwrap()[0].name, "Beef Wellington");
    assert_eq!(pork.unwrap()[0].name, "Pork Cassoulet");

    let view = controller.view();
    assert_eq!(view.query, "pork");
    assert_eq!(view.results()[0].name, "Pork Cassoulet");
    // The stale response was still worth caching
    assert_eq!(controller.cached_queries(), 2);
}

#[tokio::test]
async fn test_overlapping_searches_older_resolves_first() {
    let api = FakeApi::new();
    api.with_results("beef", vec![meal("1", "Beef Wellington")]);
    api.with_results("pork", vec![meal("2", "Pork Cassoulet")]);
    api.hold("beef");
    api.hold("pork");
    let controller = SearchController::new(api.clone(), KeyPolicy::Exact);

    let (_, _, _) = tokio::join!(controller.search("beef"), controller.search("pork"), async {
        tokio::task::yield_now().await;
        api.release("beef");
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
        api.release("pork");
    });

    let view = controller.view();
    assert_eq!(view.query, "pork");
    assert_eq!(view.results()[0].name, "Pork Cassoulet");
}

#[tokio::test]
async fn test_cache_hit_supersedes_in_flight_request() {
    let api = FakeApi::new();
    api.with_results("beef", vec![meal("1", "Beef Wellington")]);
    api.with_results("pork", vec![meal("2", "Pork Cassoulet")]);
    let controller = SearchController::new(api.clone(), KeyPolicy::Exact);
    controller.search("pork").await.unwrap();

    api.hold("beef");
    let (_, _) = tokio::join!(controller.search("beef"), async {
        tokio::task::yield_now().await;
        controller.search("pork").await.unwrap();
        api.release("beef");
    });

    assert_eq!(controller.view().results()[0].name, "Pork Cassoulet");
    assert_eq!(api.calls(), vec!["search:pork", "search:beef"]);
}
