//! Fixed gospel catalog used by the seed-tracks binaries.
//!
//! Both the data-layer variant and the raw SQL variant run off the same
//! literal track list and produce row-for-row identical results. A rerun
//! appends another 50 rows; there is no dedup on title.

use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::{Integer, Text};
use log::{debug, info};

use crate::database::DatabaseService;
use crate::error::DataError;
use crate::models::content::{NewAlbum, NewTrack};
use crate::schema::albums;

#[derive(Debug, Clone, Copy)]
pub struct SeedTrack {
    pub title: &'static str,
    pub artist: &'static str,
    pub album: &'static str,
    pub genre: &'static str,
    pub duration: i32,
}

const fn track(
    title: &'static str,
    artist: &'static str,
    album: &'static str,
    duration: i32,
) -> SeedTrack {
    SeedTrack {
        title,
        artist,
        album,
        genre: "Gospel",
        duration,
    }
}

pub const GOSPEL_TRACKS: [SeedTrack; 50] = [
    track("Amazing Grace", "Damone Ward Sr.", "Hymns of Faith", 240),
    track("How Great Thou Art", "Damone Ward Sr.", "Hymns of Faith", 260),
    track("Jesus Loves Me", "Gospel Choir", "Spiritual Songs", 180),
    track("I'll Fly Away", "Gospel Singers", "Heavenly Voices", 220),
    track("Oh Happy Day", "Gospel Ensemble", "Joyful Praise", 200),
    track("Swing Low Sweet Chariot", "Gospel Choir", "Spiritual Songs", 240),
    track("Wade in the Water", "Gospel Singers", "Heavenly Voices", 210),
    track("Go Down Moses", "Gospel Ensemble", "Joyful Praise", 230),
    track("Blessed Assurance", "Damone Ward Sr.", "Hymns of Faith", 250),
    track("Jesus Christ is Risen Today", "Gospel Choir", "Spiritual Songs", 270),
    track("The Old Rugged Cross", "Gospel Singers", "Heavenly Voices", 240),
    track("Just As I Am", "Gospel Ensemble", "Joyful Praise", 220),
    track("Nearer My God to Thee", "Damone Ward Sr.", "Hymns of Faith", 260),
    track("Rock of Ages", "Gospel Choir", "Spiritual Songs", 230),
    track("What a Friend We Have in Jesus", "Gospel Singers", "Heavenly Voices", 250),
    track("Jesus Paid It All", "Gospel Ensemble", "Joyful Praise", 240),
    track("At the Cross", "Damone Ward Sr.", "Hymns of Faith", 220),
    track("It Is Well", "Gospel Choir", "Spiritual Songs", 210),
    track("Great Is Thy Faithfulness", "Gospel Singers", "Heavenly Voices", 260),
    track("Jesus Loves the Little Children", "Gospel Ensemble", "Joyful Praise", 180),
    track("Precious Jesus", "Damone Ward Sr.", "Hymns of Faith", 240),
    track("Hallelujah", "Gospel Choir", "Spiritual Songs", 200),
    track("Glory to God", "Gospel Singers", "Heavenly Voices", 230),
    track("Holy Holy Holy", "Gospel Ensemble", "Joyful Praise", 250),
    track("Praise God from Whom All Blessings Flow", "Damone Ward Sr.", "Hymns of Faith", 220),
    track("Crown Him with Many Crowns", "Gospel Choir", "Spiritual Songs", 240),
    track("O Come All Ye Faithful", "Gospel Singers", "Heavenly Voices", 260),
    track("Joy to the World", "Gospel Ensemble", "Joyful Praise", 230),
    track("Silent Night", "Damone Ward Sr.", "Hymns of Faith", 210),
    track("O Little Town of Bethlehem", "Gospel Choir", "Spiritual Songs", 240),
    track("Hark the Herald Angels Sing", "Gospel Singers", "Heavenly Voices", 250),
    track("O Come O Come Emmanuel", "Gospel Ensemble", "Joyful Praise", 220),
    track("Angels We Have Heard on High", "Damone Ward Sr.", "Hymns of Faith", 240),
    track("It Came Upon a Midnight Clear", "Gospel Choir", "Spiritual Songs", 230),
    track("Deck the Halls", "Gospel Singers", "Heavenly Voices", 210),
    track("God Rest Ye Merry Gentlemen", "Gospel Ensemble", "Joyful Praise", 240),
    track("We Three Kings", "Damone Ward Sr.", "Hymns of Faith", 260),
    track("O Sanctissima", "Gospel Choir", "Spiritual Songs", 220),
    track("Gaudete", "Gospel Singers", "Heavenly Voices", 200),
    track("Carol of the Bells", "Gospel Ensemble", "Joyful Praise", 230),
    track("The First Noel", "Damone Ward Sr.", "Hymns of Faith", 250),
    track("What Child Is This", "Gospel Choir", "Spiritual Songs", 240),
    track("Good Christian Men Rejoice", "Gospel Singers", "Heavenly Voices", 220),
    track("Ding Dong Merrily on High", "Gospel Ensemble", "Joyful Praise", 210),
    track("O Come All Ye Faithful (Reprise)", "Damone Ward Sr.", "Hymns of Faith", 240),
    track("Adeste Fideles", "Gospel Choir", "Spiritual Songs", 260),
    track("Veni Veni Emmanuel", "Gospel Singers", "Heavenly Voices", 230),
    track("Christus Natus Est", "Gospel Ensemble", "Joyful Praise", 250),
    track("Gloria in Excelsis Deo", "Damone Ward Sr.", "Hymns of Faith", 220),
    track("Magnificat", "Gospel Choir", "Spiritual Songs", 240),
];

// The four placeholder artist accounts, in the order their IDs are assigned
// on a fresh database.
const SEED_ARTISTS: [(&str, &str); 4] = [
    ("Damone Ward Sr.", "seed:damone-ward-sr"),
    ("Gospel Choir", "seed:gospel-choir"),
    ("Gospel Singers", "seed:gospel-singers"),
    ("Gospel Ensemble", "seed:gospel-ensemble"),
];

const SEED_ALBUM_TITLE: &str = "Hymns of Faith";
const COVER_ART_URL: &str = "https://example.com/cover.jpg";

/// Maps a catalog artist name to its placeholder artist ID. Unrecognized
/// names fall back to artist 1.
pub fn artist_id_for(artist: &str) -> i32 {
    match artist {
        "Gospel Choir" => 2,
        "Gospel Singers" => 3,
        "Gospel Ensemble" => 4,
        _ => 1,
    }
}

/// Derives the audio object URL from the track title: whitespace runs become
/// hyphens and the result is lowercased.
pub fn audio_url_for(title: &str) -> String {
    let slug = title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    format!("https://example.com/audio/{slug}.mp3")
}

/// A seed run that stopped partway. `inserted` holds the titles that made it
/// in before the failing insert.
#[derive(Debug)]
pub struct SeedFailure {
    pub inserted: Vec<String>,
    pub source: DataError,
}

impl std::fmt::Display for SeedFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "seeding aborted after {} tracks: {}",
            self.inserted.len(),
            self.source
        )
    }
}

impl std::error::Error for SeedFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Seeds the catalog through the data-access layer. Returns the inserted
/// titles in order.
pub fn run_orm(service: &DatabaseService) -> Result<Vec<String>, SeedFailure> {
    let fail = |inserted: Vec<String>, source: DataError| SeedFailure { inserted, source };

    ensure_scaffolding_orm(service).map_err(|e| fail(Vec::new(), e))?;

    let mut inserted = Vec::with_capacity(GOSPEL_TRACKS.len());
    for entry in &GOSPEL_TRACKS {
        let new_track = NewTrack {
            title: entry.title.to_string(),
            artist_id: artist_id_for(entry.artist),
            album_id: Some(1),
            duration: entry.duration,
            genre: Some(entry.genre.to_string()),
            audio_url: audio_url_for(entry.title),
            cover_art_url: Some(COVER_ART_URL.to_string()),
            is_published: true,
        };

        match service.content().create_track(&new_track) {
            Ok(_) => {
                debug!("Added: {} by {}", entry.title, entry.artist);
                inserted.push(entry.title.to_string());
            }
            Err(e) => return Err(fail(inserted, e)),
        }
    }

    info!("Seeded {} gospel tracks", inserted.len());
    Ok(inserted)
}

/// Seeds the catalog with raw parameterized SQL, bypassing the typed query
/// builder. Produces the same rows as `run_orm`.
pub fn run_raw(conn: &mut SqliteConnection) -> Result<Vec<String>, SeedFailure> {
    let fail = |inserted: Vec<String>, source: DataError| SeedFailure { inserted, source };

    ensure_scaffolding_raw(conn).map_err(|e| fail(Vec::new(), e))?;

    let mut inserted = Vec::with_capacity(GOSPEL_TRACKS.len());
    for entry in &GOSPEL_TRACKS {
        let result = sql_query(
            "INSERT INTO tracks (title, artist_id, album_id, duration, genre, audio_url, \
             cover_art_url, is_published) VALUES (?, ?, 1, ?, ?, ?, ?, 1)",
        )
        .bind::<Text, _>(entry.title)
        .bind::<Integer, _>(artist_id_for(entry.artist))
        .bind::<Integer, _>(entry.duration)
        .bind::<Text, _>(entry.genre)
        .bind::<Text, _>(audio_url_for(entry.title))
        .bind::<Text, _>(COVER_ART_URL)
        .execute(conn);

        match result {
            Ok(_) => {
                debug!("Added: {} by {}", entry.title, entry.artist);
                inserted.push(entry.title.to_string());
            }
            Err(e) => return Err(fail(inserted, e.into())),
        }
    }

    info!("Seeded {} gospel tracks", inserted.len());
    Ok(inserted)
}

/// Get-or-create for the four placeholder artists and the placeholder album
/// the catalog attaches every track to.
fn ensure_scaffolding_orm(service: &DatabaseService) -> Result<(), DataError> {
    for (name, open_id) in SEED_ARTISTS {
        service
            .users()
            .get_or_create_user(open_id, Some(name.to_string()), None)?;
    }

    let mut conn = service.get_connection()?;
    let existing: Option<i32> = albums::table
        .filter(albums::title.eq(SEED_ALBUM_TITLE))
        .select(albums::id)
        .first(&mut conn)
        .optional()?;

    if existing.is_none() {
        diesel::insert_into(albums::table)
            .values(&NewAlbum {
                title: SEED_ALBUM_TITLE.to_string(),
                artist_id: 1,
                description: None,
                cover_art_url: Some(COVER_ART_URL.to_string()),
                release_date: None,
                genre: Some("Gospel".to_string()),
            })
            .execute(&mut conn)?;
    }

    Ok(())
}

fn ensure_scaffolding_raw(conn: &mut SqliteConnection) -> Result<(), DataError> {
    for (name, open_id) in SEED_ARTISTS {
        sql_query("INSERT OR IGNORE INTO users (open_id, name) VALUES (?, ?)")
            .bind::<Text, _>(open_id)
            .bind::<Text, _>(name)
            .execute(conn)?;
    }

    let album_count: i64 = albums::table
        .filter(albums::title.eq(SEED_ALBUM_TITLE))
        .count()
        .get_result(conn)?;

    if album_count == 0 {
        sql_query(
            "INSERT INTO albums (title, artist_id, cover_art_url, genre) VALUES (?, 1, ?, ?)",
        )
        .bind::<Text, _>(SEED_ALBUM_TITLE)
        .bind::<Text, _>(COVER_ART_URL)
        .bind::<Text, _>("Gospel")
        .execute(conn)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_fifty_tracks() {
        assert_eq!(GOSPEL_TRACKS.len(), 50);
    }

    #[test]
    fn test_artist_lookup() {
        assert_eq!(artist_id_for("Damone Ward Sr."), 1);
        assert_eq!(artist_id_for("Gospel Choir"), 2);
        assert_eq!(artist_id_for("Gospel Singers"), 3);
        assert_eq!(artist_id_for("Gospel Ensemble"), 4);
        assert_eq!(artist_id_for("Somebody Else"), 1);
    }

    #[test]
    fn test_audio_url_slug() {
        assert_eq!(
            audio_url_for("Amazing Grace"),
            "https://example.com/audio/amazing-grace.mp3"
        );
        assert_eq!(
            audio_url_for("O Come All Ye Faithful (Reprise)"),
            "https://example.com/audio/o-come-all-ye-faithful-(reprise).mp3"
        );
    }

    #[test]
    fn test_every_artist_is_mapped() {
        for entry in &GOSPEL_TRACKS {
            assert!((1..=4).contains(&artist_id_for(entry.artist)), "{}", entry.artist);
        }
    }
}
