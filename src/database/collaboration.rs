use chrono::Utc;
use diesel::prelude::*;

use super::connection::{DbPool, get_connection_with_retry};
use crate::error::DataError;
use crate::models::collaboration::*;
use crate::schema::{collaboration_activity_log, collaboration_invites, collaborators};

/// Upload collaboration operations: invites, membership and activity log
pub struct CollaborationOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> CollaborationOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub fn invite(
        &self,
        invited_by: i32,
        invited_user: i32,
        music_upload_id: i32,
        role: CollaborationRole,
    ) -> Result<CollaborationInvite, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let invite = diesel::insert_into(collaboration_invites::table)
            .values(&NewCollaborationInvite {
                invited_by,
                invited_user,
                music_upload_id,
                role: role.to_string(),
                status: InviteStatus::Pending.to_string(),
            })
            .get_result::<CollaborationInvite>(&mut conn)?;
        Ok(invite)
    }

    pub fn pending_invites_for_user(
        &self,
        invited_user: i32,
    ) -> Result<Vec<CollaborationInvite>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let invites = collaboration_invites::table
            .filter(collaboration_invites::invited_user.eq(invited_user))
            .filter(collaboration_invites::status.eq(InviteStatus::Pending.as_str()))
            .order(collaboration_invites::created_at.desc())
            .load::<CollaborationInvite>(&mut conn)?;
        Ok(invites)
    }

    /// Accepts an invite and adds the invitee as a collaborator with the
    /// invited role, atomically.
    pub fn accept_invite(&self, invite_id: i32) -> Result<Collaborator, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let invite = diesel::update(collaboration_invites::table.find(invite_id))
                .set(&UpdateCollaborationInvite {
                    status: Some(InviteStatus::Accepted.to_string()),
                    responded_at: Some(Utc::now().naive_utc()),
                })
                .get_result::<CollaborationInvite>(conn)?;

            let collaborator = diesel::insert_into(collaborators::table)
                .values(&NewCollaborator {
                    user_id: invite.invited_user,
                    music_upload_id: invite.music_upload_id,
                    role: invite.role.clone(),
                })
                .get_result::<Collaborator>(conn)?;

            Ok(collaborator)
        })
        .map_err(DataError::from)
    }

    pub fn decline_invite(&self, invite_id: i32) -> Result<CollaborationInvite, DataError> {
        self.set_invite_status(invite_id, InviteStatus::Rejected)
    }

    pub fn revoke_invite(&self, invite_id: i32) -> Result<CollaborationInvite, DataError> {
        self.set_invite_status(invite_id, InviteStatus::Revoked)
    }

    fn set_invite_status(
        &self,
        invite_id: i32,
        status: InviteStatus,
    ) -> Result<CollaborationInvite, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let invite = diesel::update(collaboration_invites::table.find(invite_id))
            .set(&UpdateCollaborationInvite {
                status: Some(status.to_string()),
                responded_at: Some(Utc::now().naive_utc()),
            })
            .get_result::<CollaborationInvite>(&mut conn)?;
        Ok(invite)
    }

    pub fn collaborators_on(&self, music_upload_id: i32) -> Result<Vec<Collaborator>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let members = collaborators::table
            .filter(collaborators::music_upload_id.eq(music_upload_id))
            .order(collaborators::joined_at.asc())
            .load::<Collaborator>(&mut conn)?;
        Ok(members)
    }

    pub fn remove_collaborator(
        &self,
        user_id: i32,
        music_upload_id: i32,
    ) -> Result<usize, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let deleted = diesel::delete(
            collaborators::table
                .filter(collaborators::user_id.eq(user_id))
                .filter(collaborators::music_upload_id.eq(music_upload_id)),
        )
        .execute(&mut conn)?;
        Ok(deleted)
    }

    pub fn log_activity(
        &self,
        new_activity: &NewCollaborationActivity,
    ) -> Result<CollaborationActivity, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let activity = diesel::insert_into(collaboration_activity_log::table)
            .values(new_activity)
            .get_result::<CollaborationActivity>(&mut conn)?;
        Ok(activity)
    }

    pub fn activity_for_upload(
        &self,
        music_upload_id: i32,
        limit: i64,
    ) -> Result<Vec<CollaborationActivity>, DataError> {
        let mut conn = get_connection_with_retry(self.pool)?;

        let entries = collaboration_activity_log::table
            .filter(collaboration_activity_log::music_upload_id.eq(music_upload_id))
            .order(collaboration_activity_log::occurred_at.desc())
            .limit(limit)
            .load::<CollaborationActivity>(&mut conn)?;
        Ok(entries)
    }
}
