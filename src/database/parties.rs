use chrono::Utc;
use diesel::prelude::*;
use log::debug;

use super::connection::{DbPool, get_connection_with_retry};
use crate::error::DataError;
use crate::models::party::*;
use crate::schema::{
    listening_parties, party_chat_messages, party_participants, party_playlist_queue,
    party_reactions, party_sync_events, party_user_votes, party_voting,
};

/// Listening party operations: rooms, membership, chat, queue and votes
pub struct PartyOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> PartyOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Creates a party and seats the host as its first participant.
    pub fn create_party(
        &self,
        host_user_id: i32,
        party_name: String,
        description: Option<String>,
    ) -> Result<ListeningParty, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let new_party = NewListeningParty::new(host_user_id, party_name, description);
            let party = diesel::insert_into(listening_parties::table)
                .values(&new_party)
                .get_result::<ListeningParty>(conn)?;

            diesel::insert_into(party_participants::table)
                .values(&NewPartyParticipant {
                    party_id: party.party_id.clone(),
                    user_id: host_user_id,
                    role: ParticipantRole::Host.to_string(),
                    last_heartbeat: Utc::now().naive_utc(),
                })
                .execute(conn)?;

            debug!("Created party {}", party.party_id);
            Ok(party)
        })
        .map_err(DataError::from)
    }

    pub fn get_party(&self, party_id: &str) -> Result<Option<ListeningParty>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let party = listening_parties::table
            .filter(listening_parties::party_id.eq(party_id))
            .first::<ListeningParty>(&mut conn)
            .optional()?;
        Ok(party)
    }

    pub fn public_active_parties(&self) -> Result<Vec<ListeningParty>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let parties = listening_parties::table
            .filter(listening_parties::is_public.eq(true))
            .filter(listening_parties::status.eq(PartyStatus::Active.as_str()))
            .order(listening_parties::created_at.desc())
            .load::<ListeningParty>(&mut conn)?;
        Ok(parties)
    }

    pub fn update_party(
        &self,
        party_id: &str,
        mut changes: UpdateListeningParty,
    ) -> Result<ListeningParty, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        changes.updated_at = Some(Utc::now().naive_utc());
        let party = diesel::update(
            listening_parties::table.filter(listening_parties::party_id.eq(party_id)),
        )
        .set(&changes)
        .get_result::<ListeningParty>(&mut conn)?;
        Ok(party)
    }

    pub fn end_party(&self, party_id: &str) -> Result<ListeningParty, DataError> {
        let now = Utc::now().naive_utc();
        self.update_party(
            party_id,
            UpdateListeningParty {
                status: Some(PartyStatus::Ended.to_string()),
                ended_at: Some(now),
                ..Default::default()
            },
        )
    }

    /// Adds a participant, enforcing the party's capacity limit.
    pub fn join_party(&self, party_id: &str, user_id: i32) -> Result<PartyParticipant, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let party = listening_parties::table
                .filter(listening_parties::party_id.eq(party_id))
                .first::<ListeningParty>(conn)?;

            let active_count: i64 = party_participants::table
                .filter(party_participants::party_id.eq(party_id))
                .filter(party_participants::is_active.eq(true))
                .count()
                .get_result(conn)?;

            if active_count >= party.max_participants as i64 {
                return Err(diesel::result::Error::RollbackTransaction);
            }

            let participant = diesel::insert_into(party_participants::table)
                .values(&NewPartyParticipant {
                    party_id: party_id.to_string(),
                    user_id,
                    role: ParticipantRole::Participant.to_string(),
                    last_heartbeat: Utc::now().naive_utc(),
                })
                .get_result::<PartyParticipant>(conn)?;

            Ok(participant)
        })
        .map_err(|e| match e {
            diesel::result::Error::RollbackTransaction => {
                DataError::CheckViolation("party is at capacity".to_string())
            }
            other => DataError::from(other),
        })
    }

    pub fn leave_party(&self, party_id: &str, user_id: i32) -> Result<usize, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let updated = diesel::update(
            party_participants::table
                .filter(party_participants::party_id.eq(party_id))
                .filter(party_participants::user_id.eq(user_id))
                .filter(party_participants::is_active.eq(true)),
        )
        .set((
            party_participants::is_active.eq(false),
            party_participants::left_at.eq(Utc::now().naive_utc()),
        ))
        .execute(&mut conn)?;
        Ok(updated)
    }

    pub fn heartbeat(&self, party_id: &str, user_id: i32) -> Result<usize, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let updated = diesel::update(
            party_participants::table
                .filter(party_participants::party_id.eq(party_id))
                .filter(party_participants::user_id.eq(user_id)),
        )
        .set(party_participants::last_heartbeat.eq(Utc::now().naive_utc()))
        .execute(&mut conn)?;
        Ok(updated)
    }

    pub fn active_participants(&self, party_id: &str) -> Result<Vec<PartyParticipant>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let participants = party_participants::table
            .filter(party_participants::party_id.eq(party_id))
            .filter(party_participants::is_active.eq(true))
            .order(party_participants::joined_at.asc())
            .load::<PartyParticipant>(&mut conn)?;
        Ok(participants)
    }

    pub fn post_message(&self, new_message: &NewPartyChatMessage) -> Result<PartyChatMessage, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let message = diesel::insert_into(party_chat_messages::table)
            .values(new_message)
            .get_result::<PartyChatMessage>(&mut conn)?;
        Ok(message)
    }

    pub fn recent_messages(
        &self,
        party_id: &str,
        limit: i64,
    ) -> Result<Vec<PartyChatMessage>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let messages = party_chat_messages::table
            .filter(party_chat_messages::party_id.eq(party_id))
            .order(party_chat_messages::created_at.desc())
            .limit(limit)
            .load::<PartyChatMessage>(&mut conn)?;
        Ok(messages)
    }

    /// Queues a track at the end of the party playlist.
    pub fn enqueue_track(
        &self,
        party_id: &str,
        track_id: i32,
        added_by_user_id: i32,
    ) -> Result<PartyQueueEntry, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let max_position: Option<i32> = party_playlist_queue::table
                .filter(party_playlist_queue::party_id.eq(party_id))
                .select(diesel::dsl::max(party_playlist_queue::position))
                .first(conn)?;

            let entry = diesel::insert_into(party_playlist_queue::table)
                .values(&NewPartyQueueEntry {
                    party_id: party_id.to_string(),
                    track_id,
                    added_by_user_id,
                    position: max_position.unwrap_or(-1) + 1,
                    status: QueueStatus::Queued.to_string(),
                })
                .get_result::<PartyQueueEntry>(conn)?;
            Ok(entry)
        })
        .map_err(DataError::from)
    }

    pub fn queue_for_party(&self, party_id: &str) -> Result<Vec<PartyQueueEntry>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let entries = party_playlist_queue::table
            .filter(party_playlist_queue::party_id.eq(party_id))
            .order(party_playlist_queue::position.asc())
            .load::<PartyQueueEntry>(&mut conn)?;
        Ok(entries)
    }

    pub fn set_queue_status(
        &self,
        id: i32,
        status: QueueStatus,
    ) -> Result<PartyQueueEntry, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let played_at = match status {
            QueueStatus::Played | QueueStatus::Playing => Some(Utc::now().naive_utc()),
            _ => None,
        };

        let entry = diesel::update(party_playlist_queue::table.find(id))
            .set(&UpdatePartyQueueEntry {
                status: Some(status.to_string()),
                played_at,
                ..Default::default()
            })
            .get_result::<PartyQueueEntry>(&mut conn)?;
        Ok(entry)
    }

    pub fn open_vote(&self, new_vote: &NewPartyVote) -> Result<PartyVote, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let vote = diesel::insert_into(party_voting::table)
            .values(new_vote)
            .get_result::<PartyVote>(&mut conn)?;
        Ok(vote)
    }

    /// Casts a ballot and updates the tally; resolves the vote when the
    /// required count is reached. A second ballot from the same user is a
    /// UniqueViolation.
    pub fn cast_ballot(
        &self,
        vote_id: i32,
        user_id: i32,
        in_favor: bool,
    ) -> Result<PartyVote, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::insert_into(party_user_votes::table)
                .values(&NewPartyUserVote {
                    vote_id,
                    user_id,
                    vote: if in_favor { "for" } else { "against" }.to_string(),
                })
                .execute(conn)?;

            let vote = if in_favor {
                diesel::update(party_voting::table.find(vote_id))
                    .set(party_voting::votes_for.eq(party_voting::votes_for + 1))
                    .get_result::<PartyVote>(conn)?
            } else {
                diesel::update(party_voting::table.find(vote_id))
                    .set(party_voting::votes_against.eq(party_voting::votes_against + 1))
                    .get_result::<PartyVote>(conn)?
            };

            if vote.votes_for >= vote.required_votes {
                let resolved = diesel::update(party_voting::table.find(vote_id))
                    .set(&UpdatePartyVote {
                        status: Some("passed".to_string()),
                        resolved_at: Some(Utc::now().naive_utc()),
                        ..Default::default()
                    })
                    .get_result::<PartyVote>(conn)?;
                return Ok(resolved);
            }

            Ok(vote)
        })
        .map_err(DataError::from)
    }

    pub fn fail_vote(&self, vote_id: i32) -> Result<PartyVote, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let vote = diesel::update(party_voting::table.find(vote_id))
            .set(&UpdatePartyVote {
                status: Some("failed".to_string()),
                resolved_at: Some(Utc::now().naive_utc()),
                ..Default::default()
            })
            .get_result::<PartyVote>(&mut conn)?;
        Ok(vote)
    }

    pub fn react(&self, new_reaction: &NewPartyReaction) -> Result<PartyReaction, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let reaction = diesel::insert_into(party_reactions::table)
            .values(new_reaction)
            .get_result::<PartyReaction>(&mut conn)?;
        Ok(reaction)
    }

    pub fn record_sync_event(&self, new_event: &NewPartySyncEvent) -> Result<PartySyncEvent, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let event = diesel::insert_into(party_sync_events::table)
            .values(new_event)
            .get_result::<PartySyncEvent>(&mut conn)?;
        Ok(event)
    }

    /// The most recent playback event, used to resynchronize late joiners.
    pub fn latest_sync_event(&self, party_id: &str) -> Result<Option<PartySyncEvent>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let event = party_sync_events::table
            .filter(party_sync_events::party_id.eq(party_id))
            .order(party_sync_events::occurred_at.desc())
            .first::<PartySyncEvent>(&mut conn)
            .optional()?;
        Ok(event)
    }
}
