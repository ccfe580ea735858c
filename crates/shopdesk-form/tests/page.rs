//! End-to-end tests for `CreateProductPage` against a wiremock backend.

use std::time::Duration;

use serde_json::json;
use shopdesk_client::{CatalogClient, CATEGORY_PATH, CREATE_PRODUCT_PATH};
use shopdesk_core::{FileHandle, RequiredField, ShippingFlag};
use shopdesk_form::{
    CategoryLoad, CreateProductPage, NavigationLog, NotificationLog, PreviewRegistry,
    SubmissionOutcome, SubmissionState, ADMIN_PRODUCTS_PATH, CATEGORY_FETCH_FAILED,
    PRODUCT_CREATED, SUBMIT_FAILED, VALIDATION_FAILED,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

type Page = CreateProductPage<NotificationLog, NavigationLog>;

struct Harness {
    page: Page,
    notes: NotificationLog,
    nav: NavigationLog,
    registry: PreviewRegistry,
}

fn harness(base_url: &str, timeout_secs: u64) -> Harness {
    let client = CatalogClient::with_base_url(base_url, timeout_secs)
        .expect("client construction should not fail");
    let notes = NotificationLog::new();
    let nav = NavigationLog::new();
    let registry = PreviewRegistry::new();
    let page = CreateProductPage::new(client, notes.clone(), nav.clone(), registry.clone());
    Harness {
        page,
        notes,
        nav,
        registry,
    }
}

async fn mount_categories(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(CATEGORY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "category": [
                { "_id": "1", "name": "Electronics" },
                { "_id": "2", "name": "Books" }
            ]
        })))
        .mount(server)
        .await;
}

fn test_png() -> FileHandle {
    FileHandle::new("test.png", "image/png", b"test".to_vec())
}

fn fill_headphones(page: &mut Page) {
    page.set_name("Wireless Headphones");
    page.set_description("High-quality wireless headphones with noise cancellation.");
    page.set_price("100");
    page.set_quantity("10");
    page.select_category_by_name("Electronics")
        .expect("Electronics should be listed");
    page.select_shipping("1").expect("\"1\" is a shipping option");
    page.set_photo(Some(test_png()));
}

// ---------------------------------------------------------------------------
// Category loading
// ---------------------------------------------------------------------------

#[tokio::test]
async fn mount_lists_fetched_categories_without_errors() {
    let server = MockServer::start().await;
    mount_categories(&server).await;
    let mut h = harness(&server.uri(), 5);

    let load = h.page.mount().await;

    assert_eq!(load, CategoryLoad::Loaded(2));
    let view = h.page.view();
    let labels: Vec<&str> = view
        .category
        .options
        .iter()
        .map(|o| o.label.as_str())
        .collect();
    assert_eq!(labels, vec!["Electronics", "Books"]);
    assert!(h.notes.is_empty(), "unexpected notifications: {:?}", h.notes.entries());
}

#[tokio::test]
async fn mount_shows_server_message_when_category_request_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CATEGORY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Failed to get category"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let mut h = harness(&server.uri(), 5);

    let load = h.page.mount().await;

    assert_eq!(load, CategoryLoad::Rejected("Failed to get category".to_string()));
    assert!(h.page.categories().is_empty());
    assert_eq!(h.notes.errors(), vec!["Failed to get category".to_string()]);
    assert_eq!(h.notes.len(), 1);
}

#[tokio::test]
async fn mount_falls_back_when_category_rejection_has_no_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CATEGORY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": false })))
        .expect(1)
        .mount(&server)
        .await;
    let mut h = harness(&server.uri(), 5);

    let load = h.page.mount().await;

    assert_eq!(load, CategoryLoad::Rejected(CATEGORY_FETCH_FAILED.to_string()));
    assert!(h.page.categories().is_empty());
    assert_eq!(h.notes.errors(), vec![CATEGORY_FETCH_FAILED.to_string()]);
    assert_eq!(h.notes.len(), 1);
}

#[tokio::test]
async fn category_lookup_matches_fetched_ids_only() {
    let server = MockServer::start().await;
    mount_categories(&server).await;
    let mut h = harness(&server.uri(), 5);
    h.page.mount().await;

    assert_eq!(h.page.category("2").map(|c| c.name.as_str()), Some("Books"));
    assert!(h.page.category("Books").is_none());
    assert!(h.page.category("3").is_none());
}

#[tokio::test]
async fn mount_shows_fallback_when_category_request_fails() {
    let mut h = harness("http://127.0.0.1:1", 1);

    let load = h.page.mount().await;

    assert_eq!(load, CategoryLoad::Failed);
    assert!(h.page.view().category.options.is_empty());
    assert_eq!(h.notes.errors(), vec![CATEGORY_FETCH_FAILED.to_string()]);
    assert_eq!(h.notes.len(), 1);
}

// ---------------------------------------------------------------------------
// Form rendering and selection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn view_renders_every_form_element() {
    let server = MockServer::start().await;
    mount_categories(&server).await;
    let mut h = harness(&server.uri(), 5);
    h.page.mount().await;

    let view = h.page.view();
    assert_eq!(view.heading, "Create Product");
    assert_eq!(view.category.placeholder, "Select a category");
    assert_eq!(view.upload_label, "Upload Photo");
    assert!(view.preview.is_none());
    let placeholders: Vec<&str> = view.inputs().iter().map(|i| i.placeholder).collect();
    assert_eq!(
        placeholders,
        vec![
            "write a name",
            "write a description",
            "write a price",
            "write a quantity"
        ]
    );
    assert_eq!(view.shipping.placeholder, "Select Shipping");
    let shipping: Vec<&str> = view
        .shipping
        .options
        .iter()
        .map(|o| o.label.as_str())
        .collect();
    assert_eq!(shipping, vec!["No", "Yes"]);
    assert_eq!(view.submit_label, "CREATE PRODUCT");

    let text = view.to_string();
    assert!(text.contains("Electronics (1)"));
    assert!(text.contains("[ CREATE PRODUCT ]"));
}

#[tokio::test]
async fn selecting_options_stores_their_values() {
    let server = MockServer::start().await;
    mount_categories(&server).await;
    let mut h = harness(&server.uri(), 5);
    h.page.mount().await;

    h.page.select_category("1");
    h.page.select_shipping("1");

    let view = h.page.view();
    assert_eq!(view.category.selected.as_deref(), Some("1"));
    assert_eq!(view.shipping.selected.as_deref(), Some("1"));
    assert_eq!(h.page.form().draft().shipping, Some(ShippingFlag::Yes));
}

#[tokio::test]
async fn selecting_a_photo_shows_a_local_preview() {
    let mut h = harness("http://127.0.0.1:1", 1);

    h.page.set_photo(Some(test_png()));

    let view = h.page.view();
    let image = view.preview.expect("preview should be rendered");
    assert_eq!(image.alt, "product_photo");
    assert!(image.src.starts_with("blob:"), "unexpected src {}", image.src);
    assert!(!image.src.contains("http"));
    assert_eq!(view.upload_label, "test.png");
    assert_eq!(h.registry.live_count(), 1);

    h.page.set_photo(Some(FileHandle::new("other.png", "image/png", vec![1])));
    assert_eq!(h.registry.live_count(), 1, "old preview must be released");
    assert!(h.registry.resolve(&image.src).is_none());

    h.page.unmount();
    assert_eq!(h.registry.live_count(), 0);
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_creates_product_and_navigates() {
    let server = MockServer::start().await;
    mount_categories(&server).await;
    Mock::given(method("POST"))
        .and(path(CREATE_PRODUCT_PATH))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "message": "Product Created Successfully"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let mut h = harness(&server.uri(), 5);
    h.page.mount().await;
    fill_headphones(&mut h.page);

    let outcome = h.page.submit().await.expect("draft is complete");

    assert_eq!(outcome, SubmissionOutcome::Success);
    assert_eq!(h.notes.successes(), vec![PRODUCT_CREATED.to_string()]);
    assert!(h.notes.errors().is_empty());
    assert_eq!(h.nav.paths(), vec![ADMIN_PRODUCTS_PATH.to_string()]);
    assert_eq!(h.page.submission_state(), SubmissionState::Succeeded);

    let requests = server.received_requests().await.unwrap();
    let posts: Vec<_> = requests
        .iter()
        .filter(|r| r.url.path() == CREATE_PRODUCT_PATH)
        .collect();
    assert_eq!(posts.len(), 1);
    let body = String::from_utf8_lossy(&posts[0].body);
    assert!(body.contains("name=\"name\"\r\n\r\nWireless Headphones\r\n"));
    assert!(body.contains(
        "name=\"description\"\r\n\r\nHigh-quality wireless headphones with noise cancellation.\r\n"
    ));
    assert!(body.contains("name=\"price\"\r\n\r\n100\r\n"));
    assert!(body.contains("name=\"quantity\"\r\n\r\n10\r\n"));
    assert!(body.contains("name=\"category\"\r\n\r\n1\r\n"));
    assert!(body.contains("name=\"shipping\"\r\n\r\n1\r\n"));
    assert!(body.contains("name=\"photo\"; filename=\"test.png\""));

    // The session ends on success.
    assert!(h.page.form().draft().name.is_empty());
    assert!(h.page.preview_url().is_none());
    assert_eq!(h.registry.live_count(), 0);
}

#[tokio::test]
async fn submit_shows_server_rejection_verbatim() {
    let server = MockServer::start().await;
    mount_categories(&server).await;
    Mock::given(method("POST"))
        .and(path(CREATE_PRODUCT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Error creating product"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let mut h = harness(&server.uri(), 5);
    h.page.mount().await;
    fill_headphones(&mut h.page);

    let outcome = h.page.submit().await.unwrap();

    assert_eq!(
        outcome,
        SubmissionOutcome::RejectedByServer {
            message: "Error creating product".to_string()
        }
    );
    assert_eq!(h.notes.errors(), vec!["Error creating product".to_string()]);
    assert!(h.nav.paths().is_empty());
    assert_eq!(h.page.submission_state(), SubmissionState::Rejected);
    assert_eq!(h.page.form().draft().name, "Wireless Headphones");
}

#[tokio::test]
async fn submit_falls_back_when_rejection_message_is_empty() {
    let server = MockServer::start().await;
    mount_categories(&server).await;
    Mock::given(method("POST"))
        .and(path(CREATE_PRODUCT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": ""
        })))
        .expect(1)
        .mount(&server)
        .await;
    let mut h = harness(&server.uri(), 5);
    h.page.mount().await;
    fill_headphones(&mut h.page);

    let outcome = h.page.submit().await.unwrap();

    assert_eq!(
        outcome,
        SubmissionOutcome::RejectedByServer {
            message: SUBMIT_FAILED.to_string()
        }
    );
    assert_eq!(h.notes.errors(), vec![SUBMIT_FAILED.to_string()]);
    assert_eq!(h.notes.len(), 1);
    assert!(h.nav.paths().is_empty());
    assert_eq!(h.page.submission_state(), SubmissionState::Rejected);
}

#[tokio::test]
async fn submit_shows_generic_message_on_transport_failure() {
    let server = MockServer::start().await;
    mount_categories(&server).await;
    Mock::given(method("POST"))
        .and(path(CREATE_PRODUCT_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    let mut h = harness(&server.uri(), 1);
    h.page.mount().await;
    fill_headphones(&mut h.page);

    let outcome = h.page.submit().await.unwrap();

    assert_eq!(outcome, SubmissionOutcome::TransportFailure);
    assert_eq!(h.notes.errors(), vec![SUBMIT_FAILED.to_string()]);
    assert!(h.nav.paths().is_empty());
    assert_eq!(h.page.submission_state(), SubmissionState::Failed);
    assert!(h.page.preview_url().is_some(), "form state is kept after failure");
}

#[tokio::test]
async fn submit_treats_error_status_as_transport_failure() {
    let server = MockServer::start().await;
    mount_categories(&server).await;
    Mock::given(method("POST"))
        .and(path(CREATE_PRODUCT_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "message": "Error in creating product"
        })))
        .mount(&server)
        .await;
    let mut h = harness(&server.uri(), 5);
    h.page.mount().await;
    fill_headphones(&mut h.page);

    let outcome = h.page.submit().await.unwrap();

    assert_eq!(outcome, SubmissionOutcome::TransportFailure);
    assert_eq!(h.notes.errors(), vec![SUBMIT_FAILED.to_string()]);
}

#[tokio::test]
async fn submit_without_photo_is_blocked_before_any_request() {
    let server = MockServer::start().await;
    mount_categories(&server).await;
    Mock::given(method("POST"))
        .and(path(CREATE_PRODUCT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(0)
        .mount(&server)
        .await;
    let mut h = harness(&server.uri(), 5);
    h.page.mount().await;
    fill_headphones(&mut h.page);
    h.page.set_photo(None);

    let err = h.page.submit().await.unwrap_err();

    assert_eq!(err.missing, vec![RequiredField::Photo]);
    assert_eq!(h.notes.errors(), vec![VALIDATION_FAILED.to_string()]);
    assert!(h.nav.paths().is_empty());
    assert_eq!(h.page.submission_state(), SubmissionState::Blocked);
}

#[tokio::test]
async fn repeated_submits_each_reach_the_server() {
    let server = MockServer::start().await;
    mount_categories(&server).await;
    Mock::given(method("POST"))
        .and(path(CREATE_PRODUCT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Error creating product"
        })))
        .expect(2)
        .mount(&server)
        .await;
    let mut h = harness(&server.uri(), 5);
    h.page.mount().await;
    fill_headphones(&mut h.page);

    let first = h.page.submit().await.unwrap();
    let second = h.page.submit().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(
        h.notes.errors(),
        vec![
            "Error creating product".to_string(),
            "Error creating product".to_string()
        ]
    );
}
