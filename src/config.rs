/// Posts generated per feed page.
pub const POSTS_PER_PAGE: usize = 5;

/// Live story cap; the oldest entry is evicted past this.
pub const MAX_STORIES: usize = 10;

pub const SUGGESTION_COUNT: usize = 5;

pub const MIN_SEARCH_QUERY_LEN: usize = 2;

/// How long a notification stays visible before auto-dismissing.
pub const NOTIFICATION_DURATION_MS: u64 = 3000;

/// Per-tick chance that a synthetic story is injected.
pub const TICK_STORY_PROBABILITY: f64 = 0.05;

/// Per-tick chance that a random post gets a like bump.
pub const TICK_LIKE_BUMP_PROBABILITY: f64 = 0.02;

/// Simulated fetch latency for a feed page.
pub fn load_delay_ms() -> u64 {
    std::env::var("FEEDGRAM_LOAD_DELAY_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(1000)
}

pub fn ticker_interval_ms() -> u64 {
    std::env::var("FEEDGRAM_TICKER_INTERVAL_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(5000)
}
