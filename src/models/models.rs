use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct User {
    pub username: String,
    pub display_name: String,
    pub avatar: String,
}

/// The account currently driving the session. Exactly one exists; it is
/// replaced wholesale on account switch and edited in place on profile update.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CurrentUser {
    pub username: String,
    pub display_name: String,
    pub avatar: String,
    pub bio: Option<String>,
}

impl CurrentUser {
    pub fn as_user(&self) -> User {
        User {
            username: self.username.clone(),
            display_name: self.display_name.clone(),
            avatar: self.avatar.clone(),
        }
    }

    pub fn from_user(user: User) -> Self {
        CurrentUser {
            username: user.username,
            display_name: user.display_name,
            avatar: user.avatar,
            bio: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Post {
    pub id: u64,
    pub author: User,
    pub image: String,
    pub caption: String,
    pub likes: u32,
    pub comments: u32,
    pub created_at: DateTime<Utc>,
    pub liked: bool,
    pub saved: bool,
}

/// Ephemeral per-user status item. Usernames are not unique across the
/// collection; colliding entries are independent, never merged.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Story {
    pub username: String,
    pub display_name: String,
    pub avatar: String,
    pub viewed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Suggestion {
    pub username: String,
    pub display_name: String,
    pub avatar: String,
    pub followed: bool,
    pub followed_by: Option<String>,
}

/// Read-only view of the whole session state, handed to the presentation
/// layer and serialized by the demo binary's `dump` command.
#[derive(Serialize)]
pub struct FeedSnapshot<'a> {
    pub current_user: &'a CurrentUser,
    pub posts: &'a [Post],
    pub stories: &'a [Story],
    pub suggestions: &'a [Suggestion],
}
