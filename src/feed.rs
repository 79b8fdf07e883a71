use std::sync::{Arc, Mutex, MutexGuard};

use tokio::time::{sleep, Duration};

use crate::catalog::{self, SampleUser, AVATAR_IMAGES};
use crate::config::{
    load_delay_ms, MAX_STORIES, POSTS_PER_PAGE, TICK_LIKE_BUMP_PROBABILITY,
    TICK_STORY_PROBABILITY,
};
use crate::core::errors::FeedError;
use crate::core::helpers::{now, sanitize_text};
use crate::generator::ContentGenerator;
use crate::models::models::{CurrentUser, FeedSnapshot, Post, Story, Suggestion, User};
use crate::presenter::Presenter;

/// Monotonic post id source. Ids are strictly increasing within a session,
/// never reused.
pub struct PostIdGen {
    next: u64,
}

impl PostIdGen {
    pub fn new() -> Self {
        PostIdGen { next: 1 }
    }

    pub fn fresh(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for PostIdGen {
    fn default() -> Self {
        PostIdGen::new()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoadState {
    Idle,
    Loading,
}

/// Single source of truth for session state. Every mutation re-renders the
/// affected collection through the presenter; the presenter only ever sees
/// read-only snapshots.
pub struct FeedStore {
    current_user: CurrentUser,
    posts: Vec<Post>,
    stories: Vec<Story>,
    suggestions: Vec<Suggestion>,
    page: usize,
    load_state: LoadState,
    ids: PostIdGen,
    generator: ContentGenerator,
    presenter: Box<dyn Presenter>,
}

fn default_current_user() -> CurrentUser {
    CurrentUser {
        username: "your_username".to_string(),
        display_name: "Your Name".to_string(),
        avatar: AVATAR_IMAGES[0].to_string(),
        bio: Some("Welcome to my feed!".to_string()),
    }
}

impl FeedStore {
    pub fn new(generator: ContentGenerator, presenter: Box<dyn Presenter>) -> Self {
        FeedStore {
            current_user: default_current_user(),
            posts: Vec::new(),
            stories: Vec::new(),
            suggestions: Vec::new(),
            page: 0,
            load_state: LoadState::Idle,
            ids: PostIdGen::new(),
            generator,
            presenter,
        }
    }

    /// Populate stories and suggestions from the catalog and render them.
    /// Posts arrive through the first `load_more`.
    pub fn init(&mut self) {
        self.stories = self.generator.generate_stories();
        self.presenter.render_stories(&self.current_user, &self.stories);

        let exclude = self.current_user.username.clone();
        self.suggestions = self.generator.generate_suggestions(&exclude);
        self.presenter.render_suggestions(&self.suggestions);
    }

    /// Back to startup defaults: default current user, empty collections,
    /// then a fresh `init`.
    pub fn reset(&mut self) {
        self.current_user = default_current_user();
        self.posts.clear();
        self.stories.clear();
        self.suggestions.clear();
        self.page = 0;
        self.load_state = LoadState::Idle;
        self.init();
    }

    // === Snapshots ===

    pub fn current_user(&self) -> &CurrentUser {
        &self.current_user
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn snapshot(&self) -> FeedSnapshot<'_> {
        FeedSnapshot {
            current_user: &self.current_user,
            posts: &self.posts,
            stories: &self.stories,
            suggestions: &self.suggestions,
        }
    }

    // === Post mutations ===

    pub fn toggle_like(&mut self, post_id: u64) -> Result<(), FeedError> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| FeedError::NotFound(format!("post {}", post_id)))?;
        post.liked = !post.liked;
        if post.liked {
            post.likes += 1;
        } else {
            post.likes -= 1;
        }
        let liked = post.liked;
        self.presenter.render_posts(&self.posts);
        self.presenter.notify(if liked { "Post liked!" } else { "Post unliked!" });
        Ok(())
    }

    pub fn toggle_save(&mut self, post_id: u64) -> Result<(), FeedError> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| FeedError::NotFound(format!("post {}", post_id)))?;
        post.saved = !post.saved;
        let saved = post.saved;
        self.presenter.render_posts(&self.posts);
        self.presenter.notify(if saved { "Post saved!" } else { "Post unsaved!" });
        Ok(())
    }

    /// Append a generated batch below the existing feed, preserving order.
    pub fn append_generated_posts(&mut self, posts: Vec<Post>) {
        self.posts.extend(posts);
        self.presenter.render_posts(&self.posts);
    }

    pub fn publish_post(&mut self, image: &str, caption: &str) -> Result<(), FeedError> {
        if image.is_empty() {
            return Err(FeedError::Validation("Image is required".to_string()));
        }
        let caption = caption.trim();
        if caption.is_empty() {
            return Err(FeedError::Validation("Caption is required".to_string()));
        }

        let post = Post {
            id: self.ids.fresh(),
            author: self.current_user.as_user(),
            image: image.to_string(),
            caption: sanitize_text(caption),
            likes: 0,
            comments: 0,
            created_at: now(),
            liked: false,
            saved: false,
        };
        self.posts.insert(0, post); // prepend newest
        self.presenter.render_posts(&self.posts);
        self.presenter.notify("Post created successfully!");
        Ok(())
    }

    pub fn open_post_detail(&mut self, post_id: u64) -> Result<(), FeedError> {
        let post = self
            .posts
            .iter()
            .find(|p| p.id == post_id)
            .ok_or_else(|| FeedError::NotFound(format!("post {}", post_id)))?;
        self.presenter.show_post_detail(post);
        Ok(())
    }

    // === Story mutations ===

    /// First story matching the username wins; usernames are not unique.
    pub fn mark_story_viewed(&mut self, username: &str) -> Result<(), FeedError> {
        let story = self
            .stories
            .iter_mut()
            .find(|s| s.username == username)
            .ok_or_else(|| FeedError::NotFound(format!("story for {}", username)))?;
        story.viewed = true;
        self.presenter.render_stories(&self.current_user, &self.stories);
        self.presenter.notify(&format!("Viewing {}'s story!", username));
        Ok(())
    }

    /// Prepend a story, evicting the oldest entry past the cap. Eviction is
    /// FIFO by insertion order, not by timestamp.
    pub fn add_story(&mut self, story: Story) {
        self.stories.insert(0, story);
        if self.stories.len() > MAX_STORIES {
            self.stories.pop();
        }
        self.presenter.render_stories(&self.current_user, &self.stories);
    }

    // === Suggestion mutations ===

    pub fn toggle_follow(&mut self, username: &str) -> Result<(), FeedError> {
        let suggestion = self
            .suggestions
            .iter_mut()
            .find(|s| s.username == username)
            .ok_or_else(|| FeedError::NotFound(format!("suggestion {}", username)))?;
        suggestion.followed = !suggestion.followed;
        let followed = suggestion.followed;
        self.presenter.render_suggestions(&self.suggestions);
        let message = if followed {
            format!("Following {}!", username)
        } else {
            format!("Unfollowed {}!", username)
        };
        self.presenter.notify(&message);
        Ok(())
    }

    // === Current user ===

    /// Wholesale replacement. Posts already authored keep their original
    /// author reference.
    pub fn switch_current_user(&mut self, candidate: User) {
        self.current_user = CurrentUser::from_user(candidate);
        self.presenter.render_profile(&self.current_user);
        let message = format!("Switched to {}!", self.current_user.username);
        self.presenter.notify(&message);
    }

    pub fn switch_account(&mut self) {
        let candidate = self.generator.random_catalog_user().to_user();
        self.switch_current_user(candidate);
    }

    pub fn update_profile(
        &mut self,
        username: &str,
        display_name: &str,
        bio: &str,
    ) -> Result<(), FeedError> {
        if username.trim().is_empty() {
            return Err(FeedError::Validation("Username is required".to_string()));
        }
        if display_name.trim().is_empty() {
            return Err(FeedError::Validation("Display name is required".to_string()));
        }

        self.current_user.username = sanitize_text(username);
        self.current_user.display_name = sanitize_text(display_name);
        let bio = sanitize_text(bio);
        self.current_user.bio = if bio.is_empty() { None } else { Some(bio) };

        self.presenter.render_profile(&self.current_user);
        self.presenter.notify("Profile updated successfully!");
        Ok(())
    }

    // === Read-only intents ===

    pub fn view_profile(&mut self, username: &str) {
        self.presenter.notify(&format!("Viewing {}'s profile!", username));
    }

    pub fn search(&mut self, query: &str) -> Vec<&'static SampleUser> {
        let results = catalog::search_users(query);
        if !results.is_empty() {
            let message =
                format!("Found {} users matching \"{}\"", results.len(), query);
            self.presenter.notify(&message);
        }
        results
    }

    // === Background activity ===

    /// One ticker firing: two independent random events. A like bump does
    /// not touch the viewer's `liked` flag, so the counter and the flag can
    /// drift apart between two toggles; that mirrors the original behavior.
    pub fn tick(&mut self) {
        if self.generator.chance(TICK_STORY_PROBABILITY) {
            let story = self.generator.random_story();
            let username = story.username.clone();
            self.add_story(story);
            self.presenter.notify(&format!("{} added a new story!", username));
        }

        if self.generator.chance(TICK_LIKE_BUMP_PROBABILITY) && !self.posts.is_empty() {
            let index = self.generator.random_index(self.posts.len());
            let bump = self.generator.random_range(1..6);
            self.posts[index].likes += bump;
            self.presenter.render_posts(&self.posts);
        }
    }

    // === Pagination state machine ===

    /// Idle -> Loading. Returns false (no-op) when a load is already in
    /// flight.
    pub fn begin_load(&mut self) -> bool {
        if self.load_state == LoadState::Loading {
            return false;
        }
        self.load_state = LoadState::Loading;
        self.presenter.set_loading(true);
        true
    }

    /// Loading -> Idle: generate a page, append it, advance the page
    /// counter.
    pub fn finish_load(&mut self) {
        let batch = self.generator.generate_posts(POSTS_PER_PAGE, &mut self.ids);
        self.append_generated_posts(batch);
        self.load_state = LoadState::Idle;
        self.presenter.set_loading(false);
        self.page += 1;
    }

    pub fn reset_feed(&mut self) {
        self.posts.clear();
        self.page = 0;
        self.presenter.render_posts(&self.posts);
        self.presenter.notify("Feed refreshed!");
    }
}

pub type SharedStore = Arc<Mutex<FeedStore>>;

pub fn shared(store: FeedStore) -> SharedStore {
    Arc::new(Mutex::new(store))
}

pub fn lock(store: &SharedStore) -> MutexGuard<'_, FeedStore> {
    store.lock().expect("feed store lock poisoned")
}

/// Simulated page fetch. The lock is not held across the wait, so ticker
/// firings and input events interleave freely while the page is "in flight".
pub async fn load_more(store: &SharedStore) {
    if !lock(store).begin_load() {
        return;
    }
    sleep(Duration::from_millis(load_delay_ms())).await;
    lock(store).finish_load();
}

/// Clear the feed and fetch the first page again.
pub async fn refresh(store: &SharedStore) {
    lock(store).reset_feed();
    load_more(store).await;
}
