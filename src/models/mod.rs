// Re-export all models from their respective modules
pub mod admin;
pub mod analytics;
pub mod artist;
pub mod collaboration;
pub mod commerce;
pub mod content;
pub mod engagement;
pub mod leaderboard;
pub mod moderation;
pub mod notification;
pub mod party;
pub mod review;
pub mod social;
pub mod upload;
pub mod user;

// Re-export commonly used models
pub use admin::*;
pub use analytics::*;
pub use artist::*;
pub use collaboration::*;
pub use commerce::*;
pub use content::*;
pub use engagement::*;
pub use leaderboard::*;
pub use moderation::*;
pub use notification::*;
pub use party::*;
pub use review::*;
pub use social::*;
pub use upload::*;
pub use user::*;
