use crate::config::MIN_SEARCH_QUERY_LEN;
use crate::models::models::User;

/// Generator source entry. The catalog is fixed at startup and assumed
/// non-empty.
pub struct SampleUser {
    pub username: &'static str,
    pub display_name: &'static str,
    pub avatar: &'static str,
}

impl SampleUser {
    pub fn to_user(&self) -> User {
        User {
            username: self.username.to_string(),
            display_name: self.display_name.to_string(),
            avatar: self.avatar.to_string(),
        }
    }
}

pub const AVATAR_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=56&h=56&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=56&h=56&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=56&h=56&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=56&h=56&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=56&h=56&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=56&h=56&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=56&h=56&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=56&h=56&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1517841905240-472988babdf9?w=56&h=56&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1524504388940-b1c1722653e1?w=56&h=56&fit=crop&crop=face",
];

pub const SAMPLE_USERS: &[SampleUser] = &[
    SampleUser { username: "travel_lover", display_name: "Travel Enthusiast", avatar: AVATAR_IMAGES[0] },
    SampleUser { username: "art_gallery", display_name: "Art Gallery", avatar: AVATAR_IMAGES[1] },
    SampleUser { username: "foodie_blog", display_name: "Food Blogger", avatar: AVATAR_IMAGES[2] },
    SampleUser { username: "fitness_goals", display_name: "Fitness Coach", avatar: AVATAR_IMAGES[3] },
    SampleUser { username: "book_worm", display_name: "Book Lover", avatar: AVATAR_IMAGES[4] },
    SampleUser { username: "music_lover", display_name: "Music Fan", avatar: AVATAR_IMAGES[5] },
    SampleUser { username: "photography_pro", display_name: "Photographer", avatar: AVATAR_IMAGES[6] },
    SampleUser { username: "plant_parent", display_name: "Plant Parent", avatar: AVATAR_IMAGES[7] },
    SampleUser { username: "tech_geek", display_name: "Tech Enthusiast", avatar: AVATAR_IMAGES[8] },
    SampleUser { username: "pet_lover", display_name: "Pet Lover", avatar: AVATAR_IMAGES[9] },
];

pub const SAMPLE_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=600&h=600&fit=crop",
    "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=600&h=600&fit=crop",
    "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=600&h=600&fit=crop",
    "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=600&h=600&fit=crop",
    "https://images.unsplash.com/photo-1544716278-ca5e3f4abd8c?w=600&h=600&fit=crop",
    "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=600&h=600&fit=crop",
    "https://images.unsplash.com/photo-1518837695005-2083093ee35b?w=600&h=600&fit=crop",
    "https://images.unsplash.com/photo-1552053831-71594a27632d?w=600&h=600&fit=crop",
    "https://images.unsplash.com/photo-1518709268805-4e9042af2176?w=600&h=600&fit=crop",
    "https://images.unsplash.com/photo-1541961017774-22349e4a1262?w=600&h=600&fit=crop",
];

pub const SAMPLE_CAPTIONS: &[&str] = &[
    "Amazing sunset at the mountains! 🌅 #travel #nature #sunset",
    "New abstract piece I've been working on! What do you think? 🎭 #art #abstract #creative",
    "Homemade pizza night! 🍕🔥 This margherita turned out perfectly! #pizza #homemade #foodie",
    "Morning workout complete! 💪 Ready to conquer the day! #fitness #motivation #workout",
    "Just finished this amazing book! 📖 Highly recommend! #books #reading #literature",
    "New song I've been working on! 🎵 What do you think? #music #creative #songwriting",
    "Captured this beautiful moment today! 📸 #photography #nature #beauty",
    "My plant collection is growing! 🌱 #plants #nature #home",
    "Working on some new code! 💻 #programming #tech #coding",
    "Best friends forever! 🐕 #pets #love #friendship",
];

/// Case-insensitive substring search over the catalog by username or
/// display name. Queries shorter than the minimum return nothing.
pub fn search_users(query: &str) -> Vec<&'static SampleUser> {
    if query.len() < MIN_SEARCH_QUERY_LEN {
        return Vec::new();
    }
    let query = query.to_lowercase();
    SAMPLE_USERS
        .iter()
        .filter(|user| {
            user.username.to_lowercase().contains(&query)
                || user.display_name.to_lowercase().contains(&query)
        })
        .collect()
}
