pub mod catalog;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod feed;
pub mod generator;
pub mod media;
pub mod models;
pub mod presenter;
pub mod ticker;

pub use crate::core::errors::FeedError;
pub use dispatch::{dispatch, Intent};
pub use feed::{load_more, lock, refresh, shared, FeedStore, LoadState, SharedStore};
pub use generator::ContentGenerator;
pub use models::models::{CurrentUser, FeedSnapshot, Post, Story, Suggestion, User};
pub use presenter::{NullPresenter, Presenter};
pub use ticker::Ticker;
