use super::admin::AdminOperations;
use super::analytics::AnalyticsOperations;
use super::artists::ArtistOperations;
use super::collaboration::CollaborationOperations;
use super::commerce::CommerceOperations;
use super::connection::{DbConnection, DbPool, create_pool, get_connection_with_retry};
use super::content::ContentOperations;
use super::engagement::EngagementOperations;
use super::leaderboards::LeaderboardOperations;
use super::moderation::ModerationOperations;
use super::notifications::NotificationOperations;
use super::parties::PartyOperations;
use super::reviews::ReviewOperations;
use super::social::SocialOperations;
use super::uploads::UploadOperations;
use super::users::UserOperations;
use crate::error::DataError;

/// Main database service that provides a unified interface to all database
/// operations, one accessor per domain.
#[derive(Debug)]
pub struct DatabaseService {
    pub pool: DbPool,
}

impl DatabaseService {
    /// Creates a new DatabaseService with an initialized connection pool.
    /// Runs pending migrations as part of pool setup.
    pub fn new(database_url: &str) -> Result<Self, DataError> {
        let pool = create_pool(database_url)?;
        Ok(Self { pool })
    }

    /// Gets a connection from the pool with retry logic
    pub fn get_connection(&self) -> Result<DbConnection, DataError> {
        get_connection_with_retry(&self.pool)
    }

    pub fn users(&self) -> UserOperations<'_> {
        UserOperations::new(&self.pool)
    }

    pub fn content(&self) -> ContentOperations<'_> {
        ContentOperations::new(&self.pool)
    }

    pub fn artists(&self) -> ArtistOperations<'_> {
        ArtistOperations::new(&self.pool)
    }

    pub fn social(&self) -> SocialOperations<'_> {
        SocialOperations::new(&self.pool)
    }

    pub fn uploads(&self) -> UploadOperations<'_> {
        UploadOperations::new(&self.pool)
    }

    pub fn reviews(&self) -> ReviewOperations<'_> {
        ReviewOperations::new(&self.pool)
    }

    pub fn moderation(&self) -> ModerationOperations<'_> {
        ModerationOperations::new(&self.pool)
    }

    pub fn notifications(&self) -> NotificationOperations<'_> {
        NotificationOperations::new(&self.pool)
    }

    pub fn collaboration(&self) -> CollaborationOperations<'_> {
        CollaborationOperations::new(&self.pool)
    }

    pub fn commerce(&self) -> CommerceOperations<'_> {
        CommerceOperations::new(&self.pool)
    }

    pub fn analytics(&self) -> AnalyticsOperations<'_> {
        AnalyticsOperations::new(&self.pool)
    }

    pub fn leaderboards(&self) -> LeaderboardOperations<'_> {
        LeaderboardOperations::new(&self.pool)
    }

    pub fn engagement(&self) -> EngagementOperations<'_> {
        EngagementOperations::new(&self.pool)
    }

    pub fn parties(&self) -> PartyOperations<'_> {
        PartyOperations::new(&self.pool)
    }

    pub fn admin(&self) -> AdminOperations<'_> {
        AdminOperations::new(&self.pool)
    }
}
