//! Home page tests
//!
//! The API is replaced by an in-memory double that counts delete requests,
//! navigation is recorded instead of performed.

use super::*;
use crate::api::ApiError;
use crate::dom::render::to_html;
use crate::navigation::{Page, RecordingNavigator};
use crate::session::MemoryStorage;
use crate::types::{Post, User};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
struct MockApi {
    posts: Vec<Post>,
    users: Vec<User>,
    fail_fetch: bool,
    fail_delete: bool,
    deleted: Mutex<Vec<String>>,
}

fn server_error(url: &str) -> ApiError {
    ApiError::Status {
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        url: url.to_string(),
    }
}

impl ApiClient for MockApi {
    async fn get_posts(&self) -> Result<Vec<Post>, ApiError> {
        if self.fail_fetch {
            return Err(server_error("/posts"));
        }
        Ok(self.posts.clone())
    }

    async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        if self.fail_fetch {
            return Err(server_error("/users"));
        }
        Ok(self.users.clone())
    }

    async fn delete_post(&self, id: &str) -> Result<(), ApiError> {
        self.deleted.lock().unwrap().push(id.to_string());
        if self.fail_delete {
            return Err(server_error("/posts/id"));
        }
        Ok(())
    }
}

impl MockApi {
    fn delete_requests(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

fn post(id: &str) -> Post {
    Post {
        id: id.into(),
        title: format!("Title {id}"),
        author_name: "Ann".into(),
        img: format!("https://img.example.com/{id}.png"),
        story: "Once upon a time".into(),
    }
}

fn user(id: &str, first: &str, last: &str) -> User {
    User {
        id: id.into(),
        first_name: first.into(),
        last_name: last.into(),
        avatar: None,
    }
}

fn api_with_posts(ids: &[&str]) -> MockApi {
    MockApi {
        posts: ids.iter().map(|id| post(id)).collect(),
        ..MockApi::default()
    }
}

fn build(
    api: MockApi,
    storage: Arc<MemoryStorage>,
) -> (HomePage<MockApi>, Arc<RecordingNavigator>) {
    let navigator = Arc::new(RecordingNavigator::default());
    let mut page = HomePage::new(api, storage.clone(), storage, navigator.clone());
    page.assemble();
    (page, navigator)
}

fn logged_in() -> Arc<MemoryStorage> {
    Arc::new(MemoryStorage::with_token("token-123"))
}

fn logged_out() -> Arc<MemoryStorage> {
    Arc::new(MemoryStorage::default())
}

fn feed_ids(page: &HomePage<MockApi>) -> Vec<String> {
    let doc = page.doc();
    let posts = doc.get_element_by_id(POSTS_ID).unwrap();
    doc.children(posts)
        .iter()
        .map(|&card| doc.dataset(card, "id").unwrap().to_string())
        .collect()
}

fn control(page: &HomePage<MockApi>, class: &str, post_id: &str) -> NodeId {
    let doc = page.doc();
    doc.query_selector_all(&format!(".{class}"))
        .into_iter()
        .find(|&b| doc.dataset(b, "id") == Some(post_id))
        .unwrap()
}

fn by_id(page: &HomePage<MockApi>, id: &str) -> NodeId {
    page.doc().get_element_by_id(id).unwrap()
}

#[test]
fn layout_is_mounted_before_any_data() {
    let (page, _) = build(MockApi::default(), logged_out());
    let doc = page.doc();

    for id in [POSTS_ID, BLOGGER_LIST_ID, CREATE_POST_BTN_ID, AUTH_BTN_ID] {
        assert!(doc.get_element_by_id(id).is_some(), "missing #{id}");
    }
    let posts = doc.get_element_by_id(POSTS_ID).unwrap();
    assert!(doc.children(posts).is_empty());
    assert_eq!(doc.query_selector_all(".footer-text").len(), 1);
    drop(doc);
    assert_eq!(page.listeners().len(), 3);
}

#[test]
fn auth_label_follows_session() {
    let (page, _) = build(MockApi::default(), logged_out());
    let auth = by_id(&page, AUTH_BTN_ID);
    assert_eq!(page.doc().text_content(auth), "Log In");

    let (page, _) = build(MockApi::default(), logged_in());
    let auth = by_id(&page, AUTH_BTN_ID);
    assert_eq!(page.doc().text_content(auth), "Log Out");
}

#[tokio::test]
async fn feed_shows_every_post_in_reverse_order() {
    let (page, _) = build(api_with_posts(&["1", "2", "3", "4"]), logged_in());
    page.populate_feed().await;

    assert_eq!(feed_ids(&page), vec!["4", "3", "2", "1"]);
    assert_eq!(page.doc().query_selector_all(".post").len(), 4);
    assert!(page.doc().get_element_by_id("post-3").is_some());
}

#[tokio::test]
async fn sidebar_shows_every_user_in_order() {
    let api = MockApi {
        users: vec![
            user("1", "Ada", "Lovelace"),
            user("2", "Grace", "Hopper"),
            User {
                avatar: Some("https://img.example.com/me.png".into()),
                ..user("3", "Alan", "Turing")
            },
        ],
        ..MockApi::default()
    };
    let (page, _) = build(api, logged_out());
    page.populate_sidebar().await;

    let doc = page.doc();
    let names: Vec<String> = doc
        .query_selector_all(".blogger-name")
        .into_iter()
        .map(|n| doc.text_content(n))
        .collect();
    assert_eq!(names, vec!["Ada Lovelace", "Grace Hopper", "Alan Turing"]);

    let avatars: Vec<&str> = doc
        .query_selector_all(".avatar")
        .into_iter()
        .map(|n| doc.element(n).unwrap().get_attribute("src").unwrap())
        .collect();
    assert_eq!(avatars[0], DEFAULT_AVATAR_URL);
    assert_eq!(avatars[2], "https://img.example.com/me.png");
}

#[tokio::test]
async fn empty_and_failed_fetches_leave_sections_empty() {
    let (page, _) = build(MockApi::default(), logged_in());
    page.populate().await;
    assert!(feed_ids(&page).is_empty());

    let failing = MockApi {
        fail_fetch: true,
        ..api_with_posts(&["1"])
    };
    let (page, _) = build(failing, logged_in());
    page.populate().await;
    assert!(feed_ids(&page).is_empty());
    let doc = page.doc();
    let list = doc.get_element_by_id(BLOGGER_LIST_ID).unwrap();
    assert!(doc.children(list).is_empty());
}

#[tokio::test]
async fn populate_without_containers_does_nothing() {
    let navigator = Arc::new(RecordingNavigator::default());
    let storage = logged_in();
    // Never assembled, so neither container exists
    let page = HomePage::new(api_with_posts(&["1"]), storage.clone(), storage, navigator);
    page.populate().await;
    assert!(page.doc().query_selector_all(".post").is_empty());
}

#[tokio::test]
async fn successful_delete_removes_exactly_that_card() {
    let (page, navigator) = build(api_with_posts(&["1", "2", "3"]), logged_in());
    page.populate_feed().await;

    let button = control(&page, "delete-btn", "2");
    page.dispatch_click(button).await;

    assert_eq!(page.api.delete_requests(), vec!["2"]);
    assert_eq!(feed_ids(&page), vec!["3", "1"]);
    assert!(page.doc().get_element_by_id("post-2").is_none());
    assert!(navigator.visited().is_empty());
}

#[tokio::test]
async fn failed_delete_keeps_the_card() {
    let api = MockApi {
        fail_delete: true,
        ..api_with_posts(&["1", "2"])
    };
    let (page, navigator) = build(api, logged_in());
    page.populate_feed().await;

    let button = control(&page, "delete-btn", "1");
    page.dispatch_click(button).await;

    assert_eq!(page.api.delete_requests(), vec!["1"]);
    assert_eq!(feed_ids(&page), vec!["2", "1"]);
    assert!(navigator.visited().is_empty());
}

#[tokio::test]
async fn click_on_button_text_reaches_the_button() {
    let (page, _) = build(api_with_posts(&["7"]), logged_in());
    page.populate_feed().await;

    let button = control(&page, "delete-btn", "7");
    let label = page.doc().children(button)[0];
    page.dispatch_click(label).await;

    assert_eq!(page.api.delete_requests(), vec!["7"]);
    assert!(feed_ids(&page).is_empty());
}

#[tokio::test]
async fn edit_navigates_to_the_edit_page() {
    let (page, navigator) = build(api_with_posts(&["1", "2"]), logged_in());
    page.populate_feed().await;

    page.dispatch_click(control(&page, "edit-btn", "1")).await;

    assert_eq!(navigator.visited(), vec![Page::EditPost("1".into())]);
    assert!(page.api.delete_requests().is_empty());
    assert_eq!(feed_ids(&page), vec!["2", "1"]);
}

#[tokio::test]
async fn logged_out_feed_clicks_go_to_landing_page() {
    let (page, navigator) = build(api_with_posts(&["1"]), logged_out());
    page.populate_feed().await;

    let title = page.doc().query_selector(".post-title").unwrap();
    let targets = [
        control(&page, "delete-btn", "1"),
        control(&page, "edit-btn", "1"),
        title,
        by_id(&page, POSTS_ID),
    ];
    for target in targets {
        page.dispatch_click(target).await;
    }

    assert_eq!(navigator.visited(), vec![Page::Landing; 4]);
    assert!(page.api.delete_requests().is_empty());
    assert_eq!(feed_ids(&page), vec!["1"]);
}

#[tokio::test]
async fn session_is_checked_at_click_time() {
    let storage = logged_in();
    let (page, navigator) = build(api_with_posts(&["1"]), storage.clone());
    page.populate_feed().await;

    storage.clear().unwrap();
    page.dispatch_click(control(&page, "delete-btn", "1")).await;

    assert_eq!(navigator.visited(), vec![Page::Landing]);
    assert!(page.api.delete_requests().is_empty());
}

#[tokio::test]
async fn logged_in_click_outside_controls_does_nothing() {
    let (page, navigator) = build(api_with_posts(&["1"]), logged_in());
    page.populate_feed().await;

    let story = page.doc().query_selector(".post-text").unwrap();
    page.dispatch_click(story).await;

    assert!(navigator.visited().is_empty());
    assert!(page.api.delete_requests().is_empty());
}

#[tokio::test]
async fn logout_clears_storage_then_redirects_once() {
    let storage = logged_in();
    storage.set("userId", "42").unwrap();
    let (page, navigator) = build(MockApi::default(), storage.clone());

    page.dispatch_click(by_id(&page, AUTH_BTN_ID)).await;

    assert!(storage.is_empty());
    assert_eq!(navigator.visited(), vec![Page::Landing]);
}

#[tokio::test]
async fn login_button_redirects_without_touching_storage() {
    let storage = logged_out();
    storage.set("theme", "dark").unwrap();
    let (page, navigator) = build(MockApi::default(), storage.clone());

    page.dispatch_click(by_id(&page, AUTH_BTN_ID)).await;

    assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(navigator.visited(), vec![Page::Landing]);
}

#[tokio::test]
async fn create_post_and_sign_up_navigation() {
    let (page, navigator) = build(MockApi::default(), logged_out());

    page.dispatch_click(by_id(&page, CREATE_POST_BTN_ID)).await;
    let sign_up = {
        let doc = page.doc();
        doc.query_selector_all("a")
            .into_iter()
            .find(|&a| doc.text_content(a) == "Sign Up")
            .unwrap()
    };
    page.dispatch_click(sign_up).await;

    assert_eq!(navigator.visited(), vec![Page::NewPost, Page::Registration]);
}

#[tokio::test]
async fn repaint_is_requested_after_changes() {
    let repaints = Arc::new(AtomicUsize::new(0));
    let counter = repaints.clone();
    let navigator = Arc::new(RecordingNavigator::default());
    let storage = logged_in();
    let api = MockApi {
        users: vec![user("1", "Ada", "Lovelace")],
        ..api_with_posts(&["1"])
    };
    let mut page = HomePage::new(api, storage.clone(), storage, navigator).with_repaint(
        Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    );
    page.assemble();

    page.populate().await;
    assert_eq!(repaints.load(Ordering::SeqCst), 2);

    page.dispatch_click(control(&page, "delete-btn", "1")).await;
    assert_eq!(repaints.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn post_content_is_escaped_in_html() {
    let api = MockApi {
        posts: vec![Post {
            title: "<img src=x onerror=alert(1)>".into(),
            ..post("1")
        }],
        ..MockApi::default()
    };
    let (page, _) = build(api, logged_in());
    page.populate_feed().await;

    let doc = page.doc();
    let html = to_html(&doc, doc.body());
    assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    assert!(!html.contains("<img src=x"));
}
