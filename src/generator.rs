use chrono::Duration;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::catalog::{SampleUser, SAMPLE_CAPTIONS, SAMPLE_IMAGES, SAMPLE_USERS};
use crate::config::SUGGESTION_COUNT;
use crate::core::helpers::now;
use crate::feed::PostIdGen;
use crate::models::models::{Post, Story, Suggestion};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;
const WEEK_MS: i64 = 7 * DAY_MS;

/// Produces synthetic content by sampling the catalog. Holds its own RNG so
/// tests can pin a seed and assert deterministic output.
pub struct ContentGenerator {
    rng: StdRng,
}

impl ContentGenerator {
    pub fn new() -> Self {
        ContentGenerator { rng: StdRng::from_entropy() }
    }

    pub fn with_seed(seed: u64) -> Self {
        ContentGenerator { rng: StdRng::seed_from_u64(seed) }
    }

    /// Each post independently samples a user, an image and a caption with
    /// replacement; engagement counters and age are uniform random.
    pub fn generate_posts(&mut self, count: usize, ids: &mut PostIdGen) -> Vec<Post> {
        let now = now();
        (0..count)
            .map(|_| {
                let user = SAMPLE_USERS.choose(&mut self.rng).expect("catalog must be non-empty");
                let image = SAMPLE_IMAGES.choose(&mut self.rng).expect("catalog must be non-empty");
                let caption =
                    SAMPLE_CAPTIONS.choose(&mut self.rng).expect("catalog must be non-empty");
                Post {
                    id: ids.fresh(),
                    author: user.to_user(),
                    image: image.to_string(),
                    caption: caption.to_string(),
                    likes: self.rng.gen_range(100..5100),
                    comments: self.rng.gen_range(10..210),
                    created_at: now - Duration::milliseconds(self.rng.gen_range(0..WEEK_MS)),
                    liked: false,
                    saved: false,
                }
            })
            .collect()
    }

    /// One story per catalog user, half of them already viewed, created
    /// within the past day.
    pub fn generate_stories(&mut self) -> Vec<Story> {
        let now = now();
        SAMPLE_USERS
            .iter()
            .map(|user| Story {
                username: user.username.to_string(),
                display_name: user.display_name.to_string(),
                avatar: user.avatar.to_string(),
                viewed: self.rng.gen_bool(0.5),
                created_at: now - Duration::milliseconds(self.rng.gen_range(0..DAY_MS)),
            })
            .collect()
    }

    /// Shuffled catalog minus the excluded user, truncated to the fixed
    /// suggestion count.
    pub fn generate_suggestions(&mut self, exclude_username: &str) -> Vec<Suggestion> {
        let mut candidates: Vec<&SampleUser> =
            SAMPLE_USERS.iter().filter(|user| user.username != exclude_username).collect();
        candidates.shuffle(&mut self.rng);
        candidates
            .into_iter()
            .take(SUGGESTION_COUNT)
            .map(|user| {
                let followed = self.rng.gen_bool(0.3);
                let followed_by = if self.rng.gen_bool(0.5) {
                    Some(format!("user{}", self.rng.gen_range(0..1000)))
                } else {
                    None
                };
                Suggestion {
                    username: user.username.to_string(),
                    display_name: user.display_name.to_string(),
                    avatar: user.avatar.to_string(),
                    followed,
                    followed_by,
                }
            })
            .collect()
    }

    /// Fresh unviewed story for a random catalog user, used by the ticker.
    pub fn random_story(&mut self) -> Story {
        let user = SAMPLE_USERS.choose(&mut self.rng).expect("catalog must be non-empty");
        Story {
            username: user.username.to_string(),
            display_name: user.display_name.to_string(),
            avatar: user.avatar.to_string(),
            viewed: false,
            created_at: now(),
        }
    }

    pub fn random_catalog_user(&mut self) -> &'static SampleUser {
        SAMPLE_USERS.choose(&mut self.rng).expect("catalog must be non-empty")
    }

    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }

    pub fn random_range(&mut self, range: std::ops::Range<u32>) -> u32 {
        self.rng.gen_range(range)
    }

    pub fn random_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

impl Default for ContentGenerator {
    fn default() -> Self {
        ContentGenerator::new()
    }
}
