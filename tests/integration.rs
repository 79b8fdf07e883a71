use std::sync::{Arc, Mutex};

use feedgram::models::models::{CurrentUser, Post, Story, Suggestion};
use feedgram::{
    dispatch, feed, ContentGenerator, FeedStore, Intent, LoadState, Presenter, SharedStore,
};

/// Captures render signals and notifications so tests can assert on the
/// presenter side of the contract.
#[derive(Clone, Default)]
struct Recorder {
    notices: Arc<Mutex<Vec<String>>>,
    post_renders: Arc<Mutex<usize>>,
    story_renders: Arc<Mutex<usize>>,
    suggestion_renders: Arc<Mutex<usize>>,
    loading_signals: Arc<Mutex<Vec<bool>>>,
    detail_posts: Arc<Mutex<Vec<u64>>>,
}

impl Recorder {
    fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }

    fn last_notice(&self) -> Option<String> {
        self.notices.lock().unwrap().last().cloned()
    }
}

struct RecordingPresenter {
    rec: Recorder,
}

impl Presenter for RecordingPresenter {
    fn render_posts(&mut self, _posts: &[Post]) {
        *self.rec.post_renders.lock().unwrap() += 1;
    }

    fn render_stories(&mut self, _current_user: &CurrentUser, _stories: &[Story]) {
        *self.rec.story_renders.lock().unwrap() += 1;
    }

    fn render_suggestions(&mut self, _suggestions: &[Suggestion]) {
        *self.rec.suggestion_renders.lock().unwrap() += 1;
    }

    fn render_profile(&mut self, _current_user: &CurrentUser) {}

    fn show_post_detail(&mut self, post: &Post) {
        self.rec.detail_posts.lock().unwrap().push(post.id);
    }

    fn set_loading(&mut self, loading: bool) {
        self.rec.loading_signals.lock().unwrap().push(loading);
    }

    fn notify(&mut self, message: &str) {
        self.rec.notices.lock().unwrap().push(message.to_string());
    }
}

fn seeded_store(seed: u64) -> (SharedStore, Recorder) {
    let rec = Recorder::default();
    let presenter = Box::new(RecordingPresenter { rec: rec.clone() });
    let store = feedgram::shared(FeedStore::new(ContentGenerator::with_seed(seed), presenter));
    (store, rec)
}

#[tokio::test(start_paused = true)]
async fn double_toggle_like_restores_state() {
    let (store, _rec) = seeded_store(1);
    feed::load_more(&store).await;

    let (post_id, likes_before, liked_before) = {
        let guard = feedgram::lock(&store);
        let post = &guard.posts()[0];
        (post.id, post.likes, post.liked)
    };

    dispatch(&store, Intent::Like(post_id)).await.unwrap();
    {
        let guard = feedgram::lock(&store);
        let post = &guard.posts()[0];
        assert_eq!(post.liked, !liked_before);
        assert_eq!(post.likes, likes_before + 1);
    }

    dispatch(&store, Intent::Like(post_id)).await.unwrap();
    let guard = feedgram::lock(&store);
    let post = &guard.posts()[0];
    assert_eq!(post.liked, liked_before);
    assert_eq!(post.likes, likes_before);
}

#[tokio::test(start_paused = true)]
async fn double_toggle_save_restores_state() {
    let (store, rec) = seeded_store(1);
    feed::load_more(&store).await;

    let (post_id, likes_before) = {
        let guard = feedgram::lock(&store);
        (guard.posts()[0].id, guard.posts()[0].likes)
    };

    dispatch(&store, Intent::Save(post_id)).await.unwrap();
    assert!(feedgram::lock(&store).posts()[0].saved);
    assert_eq!(rec.last_notice().unwrap(), "Post saved!");

    dispatch(&store, Intent::Save(post_id)).await.unwrap();
    let guard = feedgram::lock(&store);
    assert!(!guard.posts()[0].saved);
    // Saving never touches the like counter.
    assert_eq!(guard.posts()[0].likes, likes_before);
}

#[tokio::test(start_paused = true)]
async fn publish_validation_never_changes_feed_length() {
    let (store, rec) = seeded_store(2);
    feed::load_more(&store).await;
    let len_before = feedgram::lock(&store).posts().len();
    let notices_before = rec.notices().len();

    let err = feedgram::lock(&store).publish_post("", "a caption").unwrap_err();
    assert!(matches!(err, feedgram::FeedError::Validation(_)));

    let err = feedgram::lock(&store).publish_post("data:image/png;base64,xyz", "   ").unwrap_err();
    assert!(matches!(err, feedgram::FeedError::Validation(_)));

    let guard = feedgram::lock(&store);
    assert_eq!(guard.posts().len(), len_before);
    // Rejected input surfaces no notification.
    assert_eq!(rec.notices().len(), notices_before);
}

#[tokio::test(start_paused = true)]
async fn append_preserves_order_and_publish_prepends() {
    let (store, rec) = seeded_store(3);
    feed::load_more(&store).await;
    let first_page_ids: Vec<u64> =
        feedgram::lock(&store).posts().iter().map(|p| p.id).collect();

    feed::load_more(&store).await;
    {
        let guard = feedgram::lock(&store);
        assert_eq!(guard.posts().len(), 10);
        let ids: Vec<u64> = guard.posts().iter().map(|p| p.id).collect();
        // Prior order intact, new batch strictly after it.
        assert_eq!(&ids[..5], &first_page_ids[..]);
        assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids must be strictly increasing");
    }

    dispatch(
        &store,
        Intent::CreatePost {
            image: "data:image/png;base64,xyz".to_string(),
            caption: "fresh from the viewer".to_string(),
        },
    )
    .await
    .unwrap();

    let guard = feedgram::lock(&store);
    assert_eq!(guard.posts().len(), 11);
    let newest = &guard.posts()[0];
    assert_eq!(newest.caption, "fresh from the viewer");
    assert_eq!(newest.author.username, guard.current_user().username);
    assert_eq!(newest.likes, 0);
    assert_eq!(newest.comments, 0);
    assert!(!newest.liked && !newest.saved);
    assert!(newest.id > *first_page_ids.last().unwrap());
    assert_eq!(rec.last_notice().unwrap(), "Post created successfully!");
}

#[tokio::test(start_paused = true)]
async fn load_more_fills_one_page() {
    let (store, rec) = seeded_store(4);
    assert_eq!(feedgram::lock(&store).posts().len(), 0);

    feed::load_more(&store).await;

    let guard = feedgram::lock(&store);
    assert_eq!(guard.posts().len(), 5);
    assert_eq!(guard.load_state(), LoadState::Idle);
    assert_eq!(guard.page(), 1);
    assert_eq!(*rec.loading_signals.lock().unwrap(), vec![true, false]);
}

#[tokio::test(start_paused = true)]
async fn load_more_is_noop_while_loading() {
    let (store, _rec) = seeded_store(5);

    assert!(feedgram::lock(&store).begin_load());
    // Second request arrives while the first page is still in flight.
    feed::load_more(&store).await;
    assert_eq!(feedgram::lock(&store).posts().len(), 0);

    feedgram::lock(&store).finish_load();
    let guard = feedgram::lock(&store);
    assert_eq!(guard.posts().len(), 5);
    assert_eq!(guard.page(), 1);
}

#[tokio::test(start_paused = true)]
async fn refresh_resets_then_reloads() {
    let (store, rec) = seeded_store(6);
    feed::load_more(&store).await;
    feed::load_more(&store).await;
    assert_eq!(feedgram::lock(&store).posts().len(), 10);

    feed::refresh(&store).await;

    let guard = feedgram::lock(&store);
    assert_eq!(guard.posts().len(), 5);
    assert_eq!(guard.page(), 1);
    assert!(rec.notices().contains(&"Feed refreshed!".to_string()));
}

#[tokio::test]
async fn toggle_follow_flips_and_notifies() {
    let (store, rec) = seeded_store(7);
    feedgram::lock(&store).init();

    let (username, was_followed) = {
        let guard = feedgram::lock(&store);
        let suggestion = &guard.suggestions()[0];
        (suggestion.username.clone(), suggestion.followed)
    };

    dispatch(&store, Intent::Follow(username.clone())).await.unwrap();

    let guard = feedgram::lock(&store);
    let suggestion =
        guard.suggestions().iter().find(|s| s.username == username).unwrap();
    assert_eq!(suggestion.followed, !was_followed);
    let notice = rec.last_notice().unwrap();
    assert!(notice.contains(&username), "notice should name the user: {}", notice);
    if was_followed {
        assert!(notice.starts_with("Unfollowed"));
    } else {
        assert!(notice.starts_with("Following"));
    }
}

#[tokio::test]
async fn story_view_marks_first_match() {
    let (store, rec) = seeded_store(8);
    feedgram::lock(&store).init();

    let username = feedgram::lock(&store).stories()[0].username.clone();
    dispatch(&store, Intent::ViewStory(username.clone())).await.unwrap();

    let guard = feedgram::lock(&store);
    let story = guard.stories().iter().find(|s| s.username == username).unwrap();
    assert!(story.viewed);
    assert_eq!(rec.last_notice().unwrap(), format!("Viewing {}'s story!", username));
}

#[tokio::test]
async fn update_profile_rejects_empty_fields() {
    let (store, _rec) = seeded_store(9);
    let before = feedgram::lock(&store).current_user().clone();

    let err = feedgram::lock(&store).update_profile("", "Name", "bio").unwrap_err();
    assert!(matches!(err, feedgram::FeedError::Validation(_)));
    let err = feedgram::lock(&store).update_profile("name", "  ", "bio").unwrap_err();
    assert!(matches!(err, feedgram::FeedError::Validation(_)));

    assert_eq!(*feedgram::lock(&store).current_user(), before);
}

#[tokio::test]
async fn update_profile_overwrites_and_sanitizes() {
    let (store, rec) = seeded_store(10);

    dispatch(
        &store,
        Intent::UpdateProfile {
            username: "new_handle".to_string(),
            display_name: "New <b>Name</b>".to_string(),
            bio: String::new(),
        },
    )
    .await
    .unwrap();

    let guard = feedgram::lock(&store);
    assert_eq!(guard.current_user().username, "new_handle");
    assert_eq!(guard.current_user().display_name, "New Name");
    assert_eq!(guard.current_user().bio, None);
    assert_eq!(rec.last_notice().unwrap(), "Profile updated successfully!");
}

#[tokio::test(start_paused = true)]
async fn switch_account_keeps_prior_authorship() {
    let (store, _rec) = seeded_store(11);
    feedgram::lock(&store)
        .publish_post("data:image/png;base64,xyz", "authored before switching")
        .unwrap();
    let original_author = feedgram::lock(&store).current_user().username.clone();

    dispatch(&store, Intent::SwitchAccount).await.unwrap();

    let guard = feedgram::lock(&store);
    assert_ne!(guard.current_user().username, original_author);
    assert_eq!(guard.current_user().bio, None);
    assert_eq!(guard.posts()[0].author.username, original_author);
}

#[tokio::test]
async fn missing_targets_are_silent_noops() {
    let (store, rec) = seeded_store(12);
    feedgram::lock(&store).init();

    dispatch(&store, Intent::Like(9999)).await.unwrap();
    dispatch(&store, Intent::Save(9999)).await.unwrap();
    dispatch(&store, Intent::Follow("nobody".to_string())).await.unwrap();
    dispatch(&store, Intent::ViewStory("nobody".to_string())).await.unwrap();
    dispatch(&store, Intent::OpenPostDetail(9999)).await.unwrap();

    assert!(rec.notices().is_empty());
    assert!(rec.detail_posts.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn open_post_detail_surfaces_post() {
    let (store, rec) = seeded_store(13);
    feed::load_more(&store).await;
    let post_id = feedgram::lock(&store).posts()[2].id;

    dispatch(&store, Intent::OpenPostDetail(post_id)).await.unwrap();
    assert_eq!(*rec.detail_posts.lock().unwrap(), vec![post_id]);
}

#[tokio::test]
async fn search_reports_match_count() {
    let (store, rec) = seeded_store(14);

    let results = feedgram::lock(&store).search("LOVER");
    assert_eq!(results.len(), 4);
    assert_eq!(
        rec.last_notice().unwrap(),
        "Found 4 users matching \"LOVER\""
    );

    // Below the minimum length: no-op, no notification.
    let notices_before = rec.notices().len();
    let results = feedgram::lock(&store).search("x");
    assert!(results.is_empty());
    assert_eq!(rec.notices().len(), notices_before);

    // No matches: count stays quiet, like the original.
    let results = feedgram::lock(&store).search("zzzz");
    assert!(results.is_empty());
    assert_eq!(rec.notices().len(), notices_before);
}

#[tokio::test]
async fn init_populates_stories_and_suggestions() {
    let (store, rec) = seeded_store(15);
    feedgram::lock(&store).init();

    let guard = feedgram::lock(&store);
    assert_eq!(guard.stories().len(), feedgram::catalog::SAMPLE_USERS.len());
    assert_eq!(guard.suggestions().len(), feedgram::config::SUGGESTION_COUNT);
    assert!(guard
        .suggestions()
        .iter()
        .all(|s| s.username != guard.current_user().username));
    assert_eq!(*rec.story_renders.lock().unwrap(), 1);
    assert_eq!(*rec.suggestion_renders.lock().unwrap(), 1);
}

#[tokio::test(start_paused = true)]
async fn reset_restores_defaults() {
    let (store, _rec) = seeded_store(16);
    feedgram::lock(&store).init();
    feed::load_more(&store).await;
    dispatch(&store, Intent::SwitchAccount).await.unwrap();

    feedgram::lock(&store).reset();

    let guard = feedgram::lock(&store);
    assert_eq!(guard.current_user().username, "your_username");
    assert_eq!(guard.posts().len(), 0);
    assert_eq!(guard.page(), 0);
    assert_eq!(guard.load_state(), LoadState::Idle);
    assert_eq!(guard.stories().len(), feedgram::catalog::SAMPLE_USERS.len());
}

#[test]
fn media_collaborator_round_trip() {
    // No file selected: a no-op, not an error.
    assert_eq!(feedgram::media::image_to_data_uri(None).unwrap(), None);

    let path = std::env::temp_dir().join(format!("feedgram_media_{}.png", std::process::id()));
    std::fs::write(&path, [137u8, 80, 78, 71]).unwrap();
    let uri = feedgram::media::image_to_data_uri(Some(&path)).unwrap().unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(uri.starts_with("data:image/png;base64,"), "got {}", uri);
}

#[test]
fn snapshot_serializes() {
    let rec = Recorder::default();
    let mut store = FeedStore::new(
        ContentGenerator::with_seed(17),
        Box::new(RecordingPresenter { rec }),
    );
    store.init();

    let json = serde_json::to_value(store.snapshot()).unwrap();
    assert_eq!(json["current_user"]["username"], "your_username");
    assert_eq!(json["stories"].as_array().unwrap().len(), 10);
    assert_eq!(json["suggestions"].as_array().unwrap().len(), 5);
    assert!(json["posts"].as_array().unwrap().is_empty());
}
