//! Display models: flattened, render-ready projections of wire data.
//!
//! The transformation is pure and shared by both text and JSON output, so
//! JSON carries the display shape too (durations are pre-formatted strings,
//! locations are flattened). Tags stay structured here; the text renderer
//! joins them into annotation strings via [`tag_annotation`].

use serde::Serialize;

use crate::types::{
    Eras, Paginated, SearchData, Show, Song, Tag, TagListItem, Tour, Track, TrackTag, Venue, Year,
};

/// Formats a wire duration (milliseconds) for display.
///
/// Early shows are under an hour, so those keep their seconds; anything
/// with an hour component drops them.
pub fn format_duration_ms(ms: u64) -> String {
    let total_secs = ms / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m {seconds}s")
    }
}

/// Joins tags into one annotation string for text output.
///
/// Tags with notes render as "Name: notes" with embedded newlines and
/// carriage returns stripped (they are sometimes inserted mid-text); tags
/// without notes render as the bare name.
pub fn tag_annotation(tags: &[TagOut]) -> String {
    let parts: Vec<String> = tags
        .iter()
        .map(|t| {
            if t.notes.is_empty() {
                t.name.clone()
            } else {
                let notes = t.notes.replace(['\n', '\r'], "");
                format!("{}: {}", t.name, notes)
            }
        })
        .collect();
    parts.join(", ")
}

#[derive(Debug, Clone, Serialize)]
pub struct ErasOut {
    #[serde(rename = "1.0")]
    pub one: Option<Vec<String>>,
    #[serde(rename = "2.0")]
    pub two: Option<Vec<String>>,
    #[serde(rename = "3.0")]
    pub three: Option<Vec<String>>,
    #[serde(rename = "4.0")]
    pub four: Option<Vec<String>>,
}

impl From<Eras> for ErasOut {
    fn from(e: Eras) -> Self {
        ErasOut {
            one: e.one,
            two: e.two,
            three: e.three,
            four: e.four,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EraOut {
    pub era: String,
    pub years: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct YearOut {
    pub date: String,
    pub show_count: u64,
}

impl From<Year> for YearOut {
    fn from(y: Year) -> Self {
        YearOut {
            date: y.date,
            show_count: y.show_count,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct YearsOut {
    pub years: Vec<YearOut>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagOut {
    pub name: String,
    pub group: String,
    pub notes: String,
}

impl From<Tag> for TagOut {
    fn from(t: Tag) -> Self {
        TagOut {
            name: t.name,
            group: t.group,
            notes: t.notes,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VenueOut {
    pub name: String,
    pub location: String,
    pub shows_count: u64,
    pub show_dates: Vec<String>,
}

impl From<Venue> for VenueOut {
    fn from(v: Venue) -> Self {
        VenueOut {
            name: v.name,
            location: v.location,
            shows_count: v.shows_count,
            show_dates: v.show_dates,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VenuesOut {
    pub total_entries: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub venues: Vec<VenueOut>,
}

impl VenuesOut {
    pub fn new(venues: Vec<Venue>) -> Self {
        VenuesOut {
            total_entries: 0,
            total_pages: 0,
            current_page: 0,
            venues: venues.into_iter().map(VenueOut::from).collect(),
        }
    }

    pub fn paginated(resp: Paginated<Venue>) -> Self {
        VenuesOut {
            total_entries: resp.total_entries,
            total_pages: resp.total_pages,
            current_page: resp.page,
            venues: resp.data.into_iter().map(VenueOut::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackOut {
    pub id: u64,
    pub show_date: String,
    pub venue_name: String,
    pub venue_location: String,
    pub title: String,
    pub duration: String,
    pub set_name: String,
    pub slug: String,
    pub tags: Vec<TagOut>,
    pub mp3: String,
}

impl From<Track> for TrackOut {
    fn from(t: Track) -> Self {
        TrackOut {
            id: t.id,
            show_date: t.show_date,
            venue_name: t.venue_name,
            venue_location: t.venue_location,
            title: t.title,
            duration: format_duration_ms(t.duration),
            set_name: t.set_name,
            slug: t.slug,
            tags: t.tags.into_iter().map(TagOut::from).collect(),
            mp3: t.mp3,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TracksOut {
    pub total_entries: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub tracks: Vec<TrackOut>,
}

impl TracksOut {
    pub fn new(tracks: Vec<Track>) -> Self {
        TracksOut {
            total_entries: 0,
            total_pages: 0,
            current_page: 0,
            tracks: tracks.into_iter().map(TrackOut::from).collect(),
        }
    }

    pub fn paginated(resp: Paginated<Track>) -> Self {
        TracksOut {
            total_entries: resp.total_entries,
            total_pages: resp.total_pages,
            current_page: resp.page,
            tracks: resp.data.into_iter().map(TrackOut::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ShowOut {
    pub id: u64,
    pub date: String,
    pub duration: String,
    pub sbd: bool,
    pub remastered: bool,
    pub tags: Vec<TagOut>,
    pub venue: VenueOut,
    pub venue_name: String,
    pub location: String,
    pub tracks: Vec<TrackOut>,
}

impl From<Show> for ShowOut {
    fn from(s: Show) -> Self {
        // some payloads populate the show's own location field while others
        // only fill in the embedded venue, so flatten to one place here
        let location = if s.location.is_empty() {
            s.venue.location.clone()
        } else {
            s.location
        };
        ShowOut {
            id: s.id,
            date: s.date,
            duration: format_duration_ms(s.duration),
            sbd: s.sbd,
            remastered: s.remastered,
            tags: s.tags.into_iter().map(TagOut::from).collect(),
            venue: VenueOut::from(s.venue),
            venue_name: s.venue_name,
            location,
            tracks: s.tracks.into_iter().map(TrackOut::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ShowsOut {
    pub total_entries: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub shows: Vec<ShowOut>,
}

impl ShowsOut {
    /// A list of shows with a zero pagination envelope; used by detail-shaped
    /// renders (a year's shows, a tour's shows) that reuse the list renderer
    /// but must suppress the footer.
    pub fn new(shows: Vec<Show>) -> Self {
        ShowsOut {
            total_entries: 0,
            total_pages: 0,
            current_page: 0,
            shows: shows.into_iter().map(ShowOut::from).collect(),
        }
    }

    pub fn paginated(resp: Paginated<Show>) -> Self {
        ShowsOut {
            total_entries: resp.total_entries,
            total_pages: resp.total_pages,
            current_page: resp.page,
            shows: resp.data.into_iter().map(ShowOut::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SongOut {
    pub id: u64,
    pub title: String,
    pub original: bool,
    pub artist: String,
    pub tracks_count: u64,
    pub tracks: Vec<TrackOut>,
}

impl SongOut {
    /// Artist name for text output; originals belong to the band itself.
    pub fn display_artist(&self) -> &str {
        if self.original { "Phish" } else { &self.artist }
    }
}

impl From<Song> for SongOut {
    fn from(s: Song) -> Self {
        SongOut {
            id: s.id,
            title: s.title,
            original: s.original,
            artist: s.artist,
            tracks_count: s.tracks_count,
            tracks: s.tracks.into_iter().map(TrackOut::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SongsOut {
    pub total_entries: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub songs: Vec<SongOut>,
}

impl SongsOut {
    pub fn new(songs: Vec<Song>) -> Self {
        SongsOut {
            total_entries: 0,
            total_pages: 0,
            current_page: 0,
            songs: songs.into_iter().map(SongOut::from).collect(),
        }
    }

    pub fn paginated(resp: Paginated<Song>) -> Self {
        SongsOut {
            total_entries: resp.total_entries,
            total_pages: resp.total_pages,
            current_page: resp.page,
            songs: resp.data.into_iter().map(SongOut::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TourOut {
    pub name: String,
    pub shows_count: u64,
    pub starts_on: String,
    pub ends_on: String,
    pub shows: Vec<ShowOut>,
}

impl From<Tour> for TourOut {
    fn from(t: Tour) -> Self {
        TourOut {
            name: t.name,
            shows_count: t.shows_count,
            starts_on: t.starts_on,
            ends_on: t.ends_on,
            shows: t.shows.into_iter().map(ShowOut::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToursOut {
    pub tours: Vec<TourOut>,
}

impl ToursOut {
    pub fn new(tours: Vec<Tour>) -> Self {
        ToursOut {
            tours: tours.into_iter().map(TourOut::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TagItemOut {
    pub name: String,
    pub group: String,
    pub description: String,
    pub show_ids: Vec<u64>,
    pub track_ids: Vec<u64>,
}

impl From<TagListItem> for TagItemOut {
    fn from(t: TagListItem) -> Self {
        TagItemOut {
            name: t.name,
            group: t.group,
            description: t.description,
            show_ids: t.show_ids,
            track_ids: t.track_ids,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TagsOut {
    pub tags: Vec<TagItemOut>,
}

impl TagsOut {
    pub fn new(tags: Vec<TagListItem>) -> Self {
        TagsOut {
            tags: tags.into_iter().map(TagItemOut::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackTagOut {
    pub id: u64,
    pub track_id: u64,
    pub tag_id: u64,
    pub notes: String,
    pub transcript: String,
}

impl From<TrackTag> for TrackTagOut {
    fn from(t: TrackTag) -> Self {
        TrackTagOut {
            id: t.id,
            track_id: t.track_id,
            tag_id: t.tag_id,
            notes: t.notes,
            transcript: t.transcript,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_show: Option<ShowOut>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub other_shows: Vec<ShowOut>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub songs: Vec<SongOut>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagItemOut>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tours: Vec<TourOut>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub track_tags: Vec<TrackTagOut>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tracks: Vec<TrackOut>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub venues: Vec<VenueOut>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.exact_show.is_none()
            && self.other_shows.is_empty()
            && self.songs.is_empty()
            && self.tags.is_empty()
            && self.tours.is_empty()
            && self.track_tags.is_empty()
            && self.tracks.is_empty()
            && self.venues.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchOut {
    pub results: SearchResults,
}

impl From<SearchData> for SearchOut {
    fn from(data: SearchData) -> Self {
        SearchOut {
            results: SearchResults {
                exact_show: data
                    .exact_show
                    .filter(|s| s.id != 0)
                    .map(ShowOut::from),
                other_shows: data.other_shows.into_iter().map(ShowOut::from).collect(),
                songs: data.songs.into_iter().map(SongOut::from).collect(),
                tags: data.tags.into_iter().map(TagItemOut::from).collect(),
                tours: data.tours.into_iter().map(TourOut::from).collect(),
                track_tags: data.track_tags.into_iter().map(TrackTagOut::from).collect(),
                tracks: data.tracks.into_iter().map(TrackOut::from).collect(),
                venues: data.venues.into_iter().map(VenueOut::from).collect(),
            },
        }
    }
}
