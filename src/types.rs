//! Wire-shaped data structures.
//!
//! These mirror the JSON the API actually sends. Many fields come back as
//! `null` for older shows, so nullable fields route through
//! [`null_default`] and whole structs use `#[serde(default)]` to decode
//! partially populated payloads into zero values. Table row structs used by
//! the text renderer live at the bottom of the module.

use serde::{Deserialize, Deserializer};
use tabled::Tabled;

/// Decodes `null` as the type's default value instead of failing.
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A paginated list response: `{total_entries, total_pages, page, data}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Paginated<T> {
    #[serde(default)]
    pub total_entries: u64,
    #[serde(default)]
    pub total_pages: u64,
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub data: Vec<T>,
}

/// A single-object response: `{data}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Show {
    pub id: u64,
    pub date: String,
    pub duration: u64,
    pub incomplete: bool,
    pub sbd: bool,
    pub remastered: bool,
    pub tags: Vec<Tag>,
    pub venue: Venue,
    #[serde(deserialize_with = "null_default")]
    pub venue_name: String,
    #[serde(deserialize_with = "null_default")]
    pub location: String,
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Track {
    pub id: u64,
    #[serde(deserialize_with = "null_default")]
    pub show_date: String,
    #[serde(deserialize_with = "null_default")]
    pub venue_name: String,
    #[serde(deserialize_with = "null_default")]
    pub venue_location: String,
    pub title: String,
    pub position: u64,
    pub duration: u64,
    #[serde(deserialize_with = "null_default")]
    pub set_name: String,
    #[serde(deserialize_with = "null_default")]
    pub slug: String,
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "null_default")]
    pub mp3: String,
}

/// Tag data as embedded in shows and tracks.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub group: String,
    #[serde(deserialize_with = "null_default")]
    pub notes: String,
}

/// Tag data as returned by the /tags endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TagListItem {
    pub id: u64,
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_default")]
    pub group: String,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    pub show_ids: Vec<u64>,
    pub track_ids: Vec<u64>,
}

/// Tag data as found in track search results.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TrackTag {
    pub id: u64,
    pub track_id: u64,
    pub tag_id: u64,
    #[serde(deserialize_with = "null_default")]
    pub notes: String,
    #[serde(deserialize_with = "null_default")]
    pub transcript: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Tour {
    pub id: u64,
    pub name: String,
    pub shows_count: u64,
    #[serde(deserialize_with = "null_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_default")]
    pub starts_on: String,
    #[serde(deserialize_with = "null_default")]
    pub ends_on: String,
    pub shows: Vec<Show>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Song {
    pub id: u64,
    #[serde(deserialize_with = "null_default")]
    pub slug: String,
    pub title: String,
    pub original: bool,
    #[serde(deserialize_with = "null_default")]
    pub artist: String,
    pub tracks_count: u64,
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Venue {
    pub id: u64,
    #[serde(deserialize_with = "null_default")]
    pub slug: String,
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub location: String,
    pub shows_count: u64,
    pub show_dates: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Year {
    pub date: String,
    pub show_count: u64,
}

/// The /eras list payload keys eras by name; years may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Eras {
    #[serde(rename = "1.0")]
    pub one: Option<Vec<String>>,
    #[serde(rename = "2.0")]
    pub two: Option<Vec<String>>,
    #[serde(rename = "3.0")]
    pub three: Option<Vec<String>>,
    #[serde(rename = "4.0")]
    pub four: Option<Vec<String>>,
}

/// The /search payload: one optional exact match plus per-category lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchData {
    pub exact_show: Option<Show>,
    pub other_shows: Vec<Show>,
    pub songs: Vec<Song>,
    pub tags: Vec<TagListItem>,
    pub tours: Vec<Tour>,
    pub track_tags: Vec<TrackTag>,
    pub tracks: Vec<Track>,
    pub venues: Vec<Venue>,
}

//////////////////
/* Table rows  */
////////////////

#[derive(Tabled)]
pub struct YearRow {
    #[tabled(rename = "Years:")]
    pub date: String,
    #[tabled(rename = "Show Count:")]
    pub show_count: u64,
}

#[derive(Tabled)]
pub struct ShowRow {
    #[tabled(rename = "Date:")]
    pub date: String,
    #[tabled(rename = "Venue:")]
    pub venue: String,
    #[tabled(rename = "Location:")]
    pub location: String,
    #[tabled(rename = "Duration:")]
    pub duration: String,
}

#[derive(Tabled)]
pub struct ShowDetailRow {
    #[tabled(rename = "Date:")]
    pub date: String,
    #[tabled(rename = "Venue:")]
    pub venue: String,
    #[tabled(rename = "Location:")]
    pub location: String,
}

#[derive(Tabled)]
pub struct VerboseShowRow {
    #[tabled(rename = "ID:")]
    pub id: u64,
    #[tabled(rename = "Date:")]
    pub date: String,
    #[tabled(rename = "Venue:")]
    pub venue: String,
    #[tabled(rename = "Location:")]
    pub location: String,
    #[tabled(rename = "Duration:")]
    pub duration: String,
    #[tabled(rename = "Soundboard:")]
    pub soundboard: String,
    #[tabled(rename = "Remastered:")]
    pub remastered: String,
}

#[derive(Tabled)]
pub struct SongRow {
    #[tabled(rename = "Title:")]
    pub title: String,
    #[tabled(rename = "Original Artist:")]
    pub artist: String,
    #[tabled(rename = "TracksCount:")]
    pub tracks_count: u64,
}

#[derive(Tabled)]
pub struct SongDetailRow {
    #[tabled(rename = "Title:")]
    pub title: String,
    #[tabled(rename = "ID:")]
    pub id: u64,
    #[tabled(rename = "Original Artist:")]
    pub artist: String,
    #[tabled(rename = "TracksCount:")]
    pub tracks_count: u64,
}

#[derive(Tabled)]
pub struct SongTrackRow {
    #[tabled(rename = "ID:")]
    pub id: u64,
    #[tabled(rename = "Date:")]
    pub date: String,
    #[tabled(rename = "Venue:")]
    pub venue: String,
    #[tabled(rename = "Location:")]
    pub location: String,
    #[tabled(rename = "Duration:")]
    pub duration: String,
    #[tabled(rename = "Mp3:")]
    pub mp3: String,
}

#[derive(Tabled)]
pub struct TourRow {
    #[tabled(rename = "Name:")]
    pub name: String,
    #[tabled(rename = "Starts On:")]
    pub starts_on: String,
    #[tabled(rename = "Ends On:")]
    pub ends_on: String,
    #[tabled(rename = "Shows Count:")]
    pub shows_count: u64,
}

#[derive(Tabled)]
pub struct VenueRow {
    #[tabled(rename = "Venue:")]
    pub venue: String,
    #[tabled(rename = "Location:")]
    pub location: String,
    #[tabled(rename = "Show Count:")]
    pub show_count: u64,
}

#[derive(Tabled)]
pub struct TrackRow {
    #[tabled(rename = "ID:")]
    pub id: u64,
    #[tabled(rename = "Date:")]
    pub date: String,
    #[tabled(rename = "Venue:")]
    pub venue: String,
    #[tabled(rename = "Location:")]
    pub location: String,
    #[tabled(rename = "Title:")]
    pub title: String,
    #[tabled(rename = "Mp3:")]
    pub mp3: String,
}

#[derive(Tabled)]
pub struct TrackDetailRow {
    #[tabled(rename = "ID:")]
    pub id: u64,
    #[tabled(rename = "Date:")]
    pub date: String,
    #[tabled(rename = "Venue:")]
    pub venue: String,
    #[tabled(rename = "Location:")]
    pub location: String,
    #[tabled(rename = "Title:")]
    pub title: String,
    #[tabled(rename = "Duration:")]
    pub duration: String,
    #[tabled(rename = "Set:")]
    pub set: String,
    #[tabled(rename = "Mp3:")]
    pub mp3: String,
}

#[derive(Tabled)]
pub struct TagRow {
    #[tabled(rename = "Name:")]
    pub name: String,
    #[tabled(rename = "Description:")]
    pub description: String,
    #[tabled(rename = "Group:")]
    pub group: String,
}

#[derive(Tabled)]
pub struct TagNotesRow {
    #[tabled(rename = "Name:")]
    pub name: String,
    #[tabled(rename = "Group:")]
    pub group: String,
    #[tabled(rename = "Notes:")]
    pub notes: String,
}
