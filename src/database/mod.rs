// Database layer organized by domain
pub mod admin;
pub mod analytics;
pub mod artists;
pub mod collaboration;
pub mod commerce;
pub mod connection;
pub mod content;
pub mod engagement;
pub mod leaderboards;
pub mod moderation;
pub mod notifications;
pub mod parties;
pub mod reviews;
pub mod service;
pub mod social;
pub mod uploads;
pub mod users;

// Re-export commonly used types
pub use admin::AdminOperations;
pub use analytics::AnalyticsOperations;
pub use artists::ArtistOperations;
pub use collaboration::CollaborationOperations;
pub use commerce::CommerceOperations;
pub use connection::{DbConnection, DbPool, MIGRATIONS, create_pool, get_connection_with_retry};
pub use content::ContentOperations;
pub use engagement::EngagementOperations;
pub use leaderboards::LeaderboardOperations;
pub use moderation::ModerationOperations;
pub use notifications::NotificationOperations;
pub use parties::PartyOperations;
pub use reviews::ReviewOperations;
pub use service::DatabaseService;
pub use social::SocialOperations;
pub use uploads::UploadOperations;
pub use users::UserOperations;
