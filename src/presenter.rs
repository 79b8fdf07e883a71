use crate::models::models::{CurrentUser, Post, Story, Suggestion};

/// Presentation layer contract: read-only snapshots in, nothing out.
/// Every store mutation re-renders the affected collection through this
/// trait; there is no diffing.
pub trait Presenter: Send {
    fn render_posts(&mut self, posts: &[Post]);
    fn render_stories(&mut self, current_user: &CurrentUser, stories: &[Story]);
    fn render_suggestions(&mut self, suggestions: &[Suggestion]);
    fn render_profile(&mut self, current_user: &CurrentUser);
    fn show_post_detail(&mut self, post: &Post);
    fn set_loading(&mut self, loading: bool);
    /// Transient user-facing notification; surfaces auto-dismiss it.
    fn notify(&mut self, message: &str);
}

/// Headless presenter for tests and non-interactive use.
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render_posts(&mut self, _posts: &[Post]) {}
    fn render_stories(&mut self, _current_user: &CurrentUser, _stories: &[Story]) {}
    fn render_suggestions(&mut self, _suggestions: &[Suggestion]) {}
    fn render_profile(&mut self, _current_user: &CurrentUser) {}
    fn show_post_detail(&mut self, _post: &Post) {}
    fn set_loading(&mut self, _loading: bool) {}
    fn notify(&mut self, _message: &str) {}
}
