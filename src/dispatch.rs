use crate::core::errors::FeedError;
use crate::feed::{self, SharedStore};

/// User intents emitted by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Like(u64),
    Save(u64),
    Follow(String),
    ViewStory(String),
    ViewProfile(String),
    OpenPostDetail(u64),
    CreatePost { image: String, caption: String },
    UpdateProfile { username: String, display_name: String, bio: String },
    SwitchAccount,
    Search(String),
    ScrolledNearBottom,
    Refresh,
}

/// Route an intent into the store. `NotFound` is swallowed (silent no-op,
/// per policy); `Validation` is returned so the caller can leave its form
/// inputs in place for correction.
pub async fn dispatch(store: &SharedStore, intent: Intent) -> Result<(), FeedError> {
    let result = match intent {
        Intent::Like(post_id) => feed::lock(store).toggle_like(post_id),
        Intent::Save(post_id) => feed::lock(store).toggle_save(post_id),
        Intent::Follow(username) => feed::lock(store).toggle_follow(&username),
        Intent::ViewStory(username) => feed::lock(store).mark_story_viewed(&username),
        Intent::ViewProfile(username) => {
            feed::lock(store).view_profile(&username);
            Ok(())
        }
        Intent::OpenPostDetail(post_id) => feed::lock(store).open_post_detail(post_id),
        Intent::CreatePost { image, caption } => {
            feed::lock(store).publish_post(&image, &caption)
        }
        Intent::UpdateProfile { username, display_name, bio } => {
            feed::lock(store).update_profile(&username, &display_name, &bio)
        }
        Intent::SwitchAccount => {
            feed::lock(store).switch_account();
            Ok(())
        }
        Intent::Search(query) => {
            feed::lock(store).search(&query);
            Ok(())
        }
        Intent::ScrolledNearBottom => {
            feed::load_more(store).await;
            Ok(())
        }
        Intent::Refresh => {
            feed::refresh(store).await;
            Ok(())
        }
    };

    match result {
        Err(FeedError::NotFound(_)) => Ok(()),
        other => other,
    }
}
