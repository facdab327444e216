use diesel::prelude::*;
use serial_test::serial;
use tempfile::TempDir;

use gifted_eternity::database::DatabaseService;
use gifted_eternity::models::analytics::NewTrackPlay;
use gifted_eternity::models::content::{NewAlbum, NewTrack};
use gifted_eternity::models::party::NewPartyVote;
use gifted_eternity::models::review::NewTrackReview;
use gifted_eternity::models::upload::{NewMusicUpload, UploadStatus};
use gifted_eternity::schema::tracks;
use gifted_eternity::seed;

fn test_service() -> (TempDir, DatabaseService) {
    let dir = TempDir::new().expect("temp dir");
    let db_path = dir.path().join("test.db");
    let service =
        DatabaseService::new(db_path.to_str().expect("utf-8 path")).expect("database setup");
    (dir, service)
}

fn make_user(service: &DatabaseService, open_id: &str, name: &str) -> i32 {
    service
        .users()
        .get_or_create_user(open_id, Some(name.to_string()), None)
        .expect("user")
        .id
}

fn make_track(service: &DatabaseService, artist_id: i32, title: &str) -> i32 {
    service
        .content()
        .create_track(&NewTrack {
            title: title.to_string(),
            artist_id,
            album_id: None,
            duration: 180,
            genre: Some("Gospel".to_string()),
            audio_url: format!("https://example.com/audio/{title}.mp3"),
            cover_art_url: None,
            is_published: true,
        })
        .expect("track")
        .id
}

fn make_upload(service: &DatabaseService, uploaded_by: i32, title: &str) -> i32 {
    service
        .uploads()
        .create_upload(&NewMusicUpload {
            uploaded_by,
            title: title.to_string(),
            artist: "Test Artist".to_string(),
            album: None,
            genre: None,
            description: None,
            duration: Some(200),
            file_key: format!("uploads/{title}.mp3"),
            file_url: format!("https://example.com/uploads/{title}.mp3"),
            mime_type: "audio/mpeg".to_string(),
            file_size: Some(1024),
            status: UploadStatus::Published.as_str().to_string(),
        })
        .expect("upload")
        .id
}

#[test]
#[serial]
fn test_get_or_create_user_is_idempotent() {
    let (_dir, service) = test_service();

    let first = service
        .users()
        .get_or_create_user("oauth|abc", Some("Alice".to_string()), None)
        .expect("create");
    let second = service
        .users()
        .get_or_create_user("oauth|abc", Some("Alice".to_string()), None)
        .expect("lookup");

    assert_eq!(first.id, second.id);
}

#[test]
#[serial]
fn test_duplicate_track_review_rejected() {
    let (_dir, service) = test_service();
    let artist = make_user(&service, "oauth|artist", "Artist");
    let listener = make_user(&service, "oauth|listener", "Listener");
    let track = make_track(&service, artist, "Amazing Grace");

    let review = NewTrackReview {
        user_id: listener,
        track_id: track,
        rating: 5,
        title: None,
        content: None,
        is_verified_purchase: false,
    };
    service.reviews().create_track_review(&review).expect("first review");

    let err = service
        .reviews()
        .create_track_review(&review)
        .expect_err("second review for the same track must fail");
    assert!(err.is_unique_violation(), "got {err:?}");
}

#[test]
#[serial]
fn test_rating_out_of_range_rejected() {
    let (_dir, service) = test_service();
    let artist = make_user(&service, "oauth|artist", "Artist");
    let listener = make_user(&service, "oauth|listener", "Listener");
    let track = make_track(&service, artist, "Amazing Grace");

    let err = service
        .reviews()
        .create_track_review(&NewTrackReview {
            user_id: listener,
            track_id: track,
            rating: 6,
            title: None,
            content: None,
            is_verified_purchase: false,
        })
        .expect_err("rating above 5 must fail");
    assert!(matches!(
        err,
        gifted_eternity::DataError::CheckViolation(_)
    ));
}

#[test]
#[serial]
fn test_rating_aggregate_tracks_review_lifecycle() {
    let (_dir, service) = test_service();
    let artist = make_user(&service, "oauth|artist", "Artist");
    let a = make_user(&service, "oauth|a", "A");
    let b = make_user(&service, "oauth|b", "B");
    let track = make_track(&service, artist, "Amazing Grace");

    let first = service
        .reviews()
        .create_track_review(&NewTrackReview {
            user_id: a,
            track_id: track,
            rating: 5,
            title: None,
            content: None,
            is_verified_purchase: false,
        })
        .expect("review a");
    service
        .reviews()
        .create_track_review(&NewTrackReview {
            user_id: b,
            track_id: track,
            rating: 3,
            title: None,
            content: None,
            is_verified_purchase: false,
        })
        .expect("review b");

    let rating = service
        .reviews()
        .get_rating_for_track(track)
        .expect("rating query")
        .expect("aggregate exists");
    assert_eq!(rating.total_reviews, 2);
    assert_eq!(rating.five_star_count, 1);
    assert_eq!(rating.three_star_count, 1);
    assert!((rating.average_rating - 4.0).abs() < f32::EPSILON);

    service
        .reviews()
        .delete_track_review(first.id)
        .expect("delete review");

    let rating = service
        .reviews()
        .get_rating_for_track(track)
        .expect("rating query")
        .expect("aggregate exists");
    assert_eq!(rating.total_reviews, 1);
    assert!((rating.average_rating - 3.0).abs() < f32::EPSILON);
}

#[test]
#[serial]
fn test_rating_range_enforced_by_storage_engine() {
    use gifted_eternity::schema::track_reviews;

    let (_dir, service) = test_service();
    let artist = make_user(&service, "oauth|artist", "Artist");
    let listener = make_user(&service, "oauth|listener", "Listener");
    let track = make_track(&service, artist, "Amazing Grace");

    // A writer that skips the data layer still cannot store an out-of-range
    // rating.
    let mut conn = service.get_connection().expect("connection");
    let err = diesel::insert_into(track_reviews::table)
        .values((
            track_reviews::user_id.eq(listener),
            track_reviews::track_id.eq(track),
            track_reviews::rating.eq(0),
        ))
        .execute(&mut conn)
        .expect_err("rating outside 1-5 must fail at the database");
    assert!(matches!(
        gifted_eternity::DataError::from(err),
        gifted_eternity::DataError::CheckViolation(_)
    ));
}

#[test]
#[serial]
fn test_duplicate_favorite_rejected() {
    let (_dir, service) = test_service();
    let artist = make_user(&service, "oauth|artist", "Artist");
    let listener = make_user(&service, "oauth|listener", "Listener");
    let track = make_track(&service, artist, "Amazing Grace");

    service
        .content()
        .favorite_track(listener, track)
        .expect("first favorite");
    let err = service
        .content()
        .favorite_track(listener, track)
        .expect_err("second favorite must fail");
    assert!(err.is_unique_violation());
}

#[test]
#[serial]
fn test_duplicate_follow_rejected() {
    let (_dir, service) = test_service();
    let a = make_user(&service, "oauth|a", "A");
    let b = make_user(&service, "oauth|b", "B");

    service.social().follow_user(a, b).expect("first follow");
    let err = service
        .social()
        .follow_user(a, b)
        .expect_err("second follow must fail");
    assert!(err.is_unique_violation());
}

#[test]
#[serial]
fn test_user_deletion_cascades_uploads_and_anonymizes_plays() {
    let (_dir, service) = test_service();
    let uploader = make_user(&service, "oauth|uploader", "Uploader");
    let listener = make_user(&service, "oauth|listener", "Listener");
    let upload = make_upload(&service, uploader, "demo");

    service
        .analytics()
        .record_play(&NewTrackPlay {
            music_upload_id: upload,
            user_id: Some(listener),
            duration: Some(120),
            device_type: Some("mobile".to_string()),
            country: Some("US".to_string()),
        })
        .expect("play");

    // Listener accounts are anonymized in the play log, not erased.
    service.users().delete_user(listener).expect("delete listener");
    let plays = service.analytics().plays_for_upload(upload).expect("plays");
    assert_eq!(plays.len(), 1);
    assert_eq!(plays[0].user_id, None);

    // The uploader owns the rows; deleting the account removes them.
    service.users().delete_user(uploader).expect("delete uploader");
    assert!(
        service
            .uploads()
            .get_upload_by_id(upload)
            .expect("lookup")
            .is_none()
    );
    let plays = service.analytics().plays_for_upload(upload).expect("plays");
    assert!(plays.is_empty());
}

#[test]
#[serial]
fn test_album_deletion_detaches_tracks() {
    let (_dir, service) = test_service();
    let artist = make_user(&service, "oauth|artist", "Artist");
    let album = service
        .content()
        .create_album(&NewAlbum {
            title: "Hymns".to_string(),
            artist_id: artist,
            description: None,
            cover_art_url: None,
            release_date: None,
            genre: Some("Gospel".to_string()),
        })
        .expect("album");

    let track = service
        .content()
        .create_track(&NewTrack {
            title: "Amazing Grace".to_string(),
            artist_id: artist,
            album_id: Some(album.id),
            duration: 240,
            genre: Some("Gospel".to_string()),
            audio_url: "https://example.com/audio/amazing-grace.mp3".to_string(),
            cover_art_url: None,
            is_published: true,
        })
        .expect("track");

    service.content().delete_album(album.id).expect("delete album");

    let track = service
        .content()
        .get_track_by_id(track.id)
        .expect("lookup")
        .expect("track survives");
    assert_eq!(track.album_id, None);
}

#[test]
#[serial]
fn test_referenced_tier_cannot_be_deleted() {
    use gifted_eternity::models::user::{NewSubscriptionTier, NewUserSubscription};
    use gifted_eternity::schema::subscription_tiers;

    let (_dir, service) = test_service();
    let user = make_user(&service, "oauth|subscriber", "Subscriber");

    let tier = service
        .users()
        .create_subscription_tier(&NewSubscriptionTier {
            name: "premium".to_string(),
            description: None,
            monthly_price_cents: 999,
            yearly_price_cents: None,
            features: None,
            stripe_price_id: None,
        })
        .expect("tier");
    service
        .users()
        .create_subscription(&NewUserSubscription {
            user_id: user,
            tier_id: tier.id,
            stripe_subscription_id: None,
            status: "active".to_string(),
            current_period_start: None,
            current_period_end: None,
        })
        .expect("subscription");

    let mut conn = service.get_connection().expect("connection");
    let err = diesel::delete(subscription_tiers::table.find(tier.id))
        .execute(&mut conn)
        .expect_err("tier with live subscriptions must not be deletable");
    let err = gifted_eternity::DataError::from(err);
    assert!(err.is_foreign_key_violation());
}

#[test]
#[serial]
fn test_unknown_device_type_rejected() {
    let (_dir, service) = test_service();
    let uploader = make_user(&service, "oauth|uploader", "Uploader");
    let upload = make_upload(&service, uploader, "demo");

    let err = service
        .analytics()
        .record_play(&NewTrackPlay {
            music_upload_id: upload,
            user_id: None,
            duration: None,
            device_type: Some("console".to_string()),
            country: None,
        })
        .expect_err("device type outside the allowed set must fail");
    assert!(matches!(
        err,
        gifted_eternity::DataError::CheckViolation(_)
    ));
}

#[test]
#[serial]
fn test_party_vote_resolves_at_required_count() {
    let (_dir, service) = test_service();
    let host = make_user(&service, "oauth|host", "Host");
    let guest = make_user(&service, "oauth|guest", "Guest");

    let party = service
        .parties()
        .create_party(host, "Friday Night".to_string(), None)
        .expect("party");
    service
        .parties()
        .join_party(&party.party_id, guest)
        .expect("join");

    let vote = service
        .parties()
        .open_vote(&NewPartyVote {
            party_id: party.party_id.clone(),
            vote_type: "skip".to_string(),
            target_track_id: None,
            initiated_by_user_id: host,
            required_votes: 1,
        })
        .expect("vote");

    let resolved = service
        .parties()
        .cast_ballot(vote.id, guest, true)
        .expect("ballot");
    assert_eq!(resolved.status, "passed");
    assert!(resolved.resolved_at.is_some());

    let err = service
        .parties()
        .cast_ballot(vote.id, guest, true)
        .expect_err("second ballot from the same user must fail");
    assert!(err.is_unique_violation());
}

#[test]
#[serial]
fn test_opaque_json_payloads_round_trip() {
    use gifted_eternity::models::commerce::NewPaymentEvent;
    use gifted_eternity::models::user::NewSubscriptionTier;

    let (_dir, service) = test_service();
    let user = make_user(&service, "oauth|subscriber", "Subscriber");

    let tier = service
        .users()
        .create_subscription_tier(&NewSubscriptionTier {
            name: "premium".to_string(),
            description: None,
            monthly_price_cents: 999,
            yearly_price_cents: None,
            features: Some(r#"["offline_listening","lossless_audio"]"#.to_string()),
            stripe_price_id: None,
        })
        .expect("tier");
    assert_eq!(
        tier.feature_list().expect("well-formed features"),
        vec!["offline_listening".to_string(), "lossless_audio".to_string()]
    );

    let bare = service
        .users()
        .create_subscription_tier(&NewSubscriptionTier {
            name: "free".to_string(),
            description: None,
            monthly_price_cents: 0,
            yearly_price_cents: None,
            features: None,
            stripe_price_id: None,
        })
        .expect("bare tier");
    assert!(bare.feature_list().expect("empty features").is_empty());

    let event = service
        .commerce()
        .ingest_payment_event(&NewPaymentEvent {
            event_type: "invoice.paid".to_string(),
            provider: "stripe".to_string(),
            external_event_id: "evt_123".to_string(),
            user_id: Some(user),
            related_id: None,
            data: Some(r#"{"amount":999,"currency":"usd"}"#.to_string()),
        })
        .expect("event");
    let payload = event
        .payload()
        .expect("well-formed payload")
        .expect("payload present");
    assert_eq!(payload["amount"], 999);
    assert_eq!(payload["currency"], "usd");
}

#[test]
#[serial]
fn test_seed_inserts_catalog_and_reruns_append() {
    let (_dir, service) = test_service();

    let inserted = seed::run_orm(&service).expect("first seed run");
    assert_eq!(inserted.len(), 50);
    assert_eq!(inserted[0], "Amazing Grace");
    assert_eq!(service.content().count_tracks().expect("count"), 50);

    // No dedup on title; a second run appends another full catalog.
    seed::run_orm(&service).expect("second seed run");
    assert_eq!(service.content().count_tracks().expect("count"), 100);
}

#[test]
#[serial]
fn test_seed_orm_and_raw_produce_identical_rows() {
    let (_dir_a, orm_service) = test_service();
    let (_dir_b, raw_service) = test_service();

    seed::run_orm(&orm_service).expect("orm seed");
    let mut raw_conn = raw_service.get_connection().expect("connection");
    seed::run_raw(&mut raw_conn).expect("raw seed");

    type Row = (i32, String, i32, Option<i32>, i32, Option<String>, String, Option<String>, bool);
    let select = (
        tracks::id,
        tracks::title,
        tracks::artist_id,
        tracks::album_id,
        tracks::duration,
        tracks::genre,
        tracks::audio_url,
        tracks::cover_art_url,
        tracks::is_published,
    );

    let mut orm_conn = orm_service.get_connection().expect("connection");
    let orm_rows: Vec<Row> = tracks::table
        .select(select)
        .order(tracks::id.asc())
        .load(&mut orm_conn)
        .expect("orm rows");
    let raw_rows: Vec<Row> = tracks::table
        .select(select)
        .order(tracks::id.asc())
        .load(&mut raw_conn)
        .expect("raw rows");

    assert_eq!(orm_rows.len(), 50);
    assert_eq!(orm_rows, raw_rows);
}
