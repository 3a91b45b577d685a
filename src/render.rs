//! Text table and JSON rendering for display models.
//!
//! Every display model implements [`Render`] for text output;
//! [`print_results`] picks text or pretty JSON from the output format flag.
//! The verbose flag only changes text column sets; JSON output never looks
//! at it. All output goes through one sequential writer.

use std::io::{self, Write};

use anyhow::Context;
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Padding, Style},
};

use crate::Res;
use crate::display::{
    EraOut, ErasOut, SearchOut, ShowOut, ShowsOut, SongOut, SongsOut, TagItemOut, TagsOut,
    TourOut, ToursOut, TrackOut, TrackTagOut, TracksOut, VenueOut, VenuesOut, YearsOut,
    tag_annotation,
};
use crate::query::OutputFormat;
use crate::types::{
    ShowDetailRow, ShowRow, SongDetailRow, SongRow, SongTrackRow, TagNotesRow, TagRow, TourRow,
    TrackDetailRow, TrackRow, VenueRow, VerboseShowRow, YearRow,
};

pub const SEARCH_TIPS: &str = r#"
get a blank space where results should be? try the following:
format dates as "1995-12-31"
search for venues via name/past name or location ("msg" or "new york")
enter all or part of song names, tour names, etc (like "summer", "1995", "sbd", etc.)

see https://phish.in/api-docs for more details
"#;

/// Text rendering for one display model.
pub trait Render {
    fn render_text(&self, w: &mut dyn Write, verbose: bool) -> io::Result<()>;
}

/// Writes a display model as text or pretty JSON.
pub fn print_results<T>(w: &mut dyn Write, out: &T, format: OutputFormat, verbose: bool) -> Res<()>
where
    T: Render + Serialize,
{
    match format {
        OutputFormat::Json => print_json(w, out),
        OutputFormat::Text => out
            .render_text(w, verbose)
            .context("unable to write output"),
    }
}

/// Writes any serializable value as pretty JSON.
pub fn print_json<T: Serialize>(w: &mut dyn Write, data: &T) -> Res<()> {
    let b = serde_json::to_string_pretty(data).context("unable to convert data to json")?;
    writeln!(w, "{b}").context("unable to write output")?;
    Ok(())
}

fn yes(b: bool) -> String {
    // false renders blank, not "no"
    if b { "yes".to_string() } else { String::new() }
}

fn write_table<R, I>(w: &mut dyn Write, rows: I) -> io::Result<()>
where
    R: Tabled,
    I: IntoIterator<Item = R>,
{
    let mut table = Table::new(rows);
    table.with(Style::blank()).with(Padding::new(0, 2, 0, 0));
    writeln!(w, "{table}")
}

fn write_footer(
    w: &mut dyn Write,
    total_entries: u64,
    total_pages: u64,
    current_page: u64,
) -> io::Result<()> {
    if total_entries != 0 {
        writeln!(w)?;
        writeln!(
            w,
            "Total Entries: {total_entries}  Total Pages: {total_pages}  Result Page: {current_page}"
        )?;
    }
    Ok(())
}

impl Render for ErasOut {
    fn render_text(&self, w: &mut dyn Write, _verbose: bool) -> io::Result<()> {
        let join = |years: &Option<Vec<String>>| match years {
            Some(years) => years.join(", "),
            None => String::new(),
        };
        writeln!(w, "Eras")?;
        writeln!(w, "1.0: {}", join(&self.one))?;
        writeln!(w, "2.0: {}", join(&self.two))?;
        writeln!(w, "3.0: {}", join(&self.three))?;
        writeln!(w, "4.0: {}", join(&self.four))?;
        Ok(())
    }
}

impl Render for EraOut {
    fn render_text(&self, w: &mut dyn Write, _verbose: bool) -> io::Result<()> {
        writeln!(w, "Era {}:", self.era)?;
        writeln!(w, "{}", self.years.join(", "))?;
        Ok(())
    }
}

impl Render for YearsOut {
    fn render_text(&self, w: &mut dyn Write, _verbose: bool) -> io::Result<()> {
        let rows = self.years.iter().map(|y| YearRow {
            date: y.date.clone(),
            show_count: y.show_count,
        });
        write_table(w, rows)
    }
}

fn verbose_show_row(s: &ShowOut) -> VerboseShowRow {
    VerboseShowRow {
        id: s.id,
        date: s.date.clone(),
        venue: s.venue_name.clone(),
        location: s.location.clone(),
        duration: s.duration.clone(),
        soundboard: yes(s.sbd),
        remastered: yes(s.remastered),
    }
}

impl Render for ShowsOut {
    fn render_text(&self, w: &mut dyn Write, verbose: bool) -> io::Result<()> {
        if verbose {
            write_table(w, self.shows.iter().map(verbose_show_row))?;
        } else {
            let rows = self.shows.iter().map(|s| ShowRow {
                date: s.date.clone(),
                venue: s.venue_name.clone(),
                location: s.location.clone(),
                duration: s.duration.clone(),
            });
            write_table(w, rows)?;
        }
        // detail-shaped reuses (a year's shows) carry a zero envelope
        write_footer(w, self.total_entries, self.total_pages, self.current_page)
    }
}

/// Writes tracks grouped by set name, one heading per set change, with
/// titles padded to the widest title of this render call so the duration
/// column lines up across sets.
fn write_track_sets(w: &mut dyn Write, tracks: &[TrackOut]) -> io::Result<()> {
    if tracks.is_empty() {
        return Ok(());
    }
    let widest = tracks.iter().map(|t| t.title.len()).max().unwrap_or(0);
    writeln!(w, "{}", tracks[0].set_name)?;
    for (i, t) in tracks.iter().enumerate() {
        if i > 0 && t.set_name != tracks[i - 1].set_name {
            writeln!(w)?;
            writeln!(w, "{}", t.set_name)?;
        }
        writeln!(w, "{:<widest$}  {}", t.title, t.duration)?;
    }
    Ok(())
}

impl Render for ShowOut {
    fn render_text(&self, w: &mut dyn Write, verbose: bool) -> io::Result<()> {
        if verbose {
            write_table(w, [verbose_show_row(self)])?;
            writeln!(w)?;
            if !self.tags.is_empty() {
                writeln!(w, "Show Tags:")?;
                writeln!(w, "{}", tag_annotation(&self.tags))?;
                writeln!(w)?;
            }
            // should always have tracks but worth a check
            if self.tracks.is_empty() {
                return Ok(());
            }
            write_track_sets(w, &self.tracks)?;
            writeln!(w)?;
            writeln!(w, "Track Info:")?;
            for t in &self.tracks {
                writeln!(w, "{}", t.title)?;
                writeln!(w, "{}", t.mp3)?;
                let tag_info = tag_annotation(&t.tags);
                if !tag_info.is_empty() {
                    writeln!(w, "{tag_info}")?;
                }
                writeln!(w)?;
            }
            return Ok(());
        }
        write_table(
            w,
            [ShowDetailRow {
                date: self.date.clone(),
                venue: self.venue_name.clone(),
                location: self.location.clone(),
            }],
        )?;
        writeln!(w)?;
        if self.tracks.is_empty() {
            return Ok(());
        }
        write_track_sets(w, &self.tracks)
    }
}

impl Render for SongsOut {
    fn render_text(&self, w: &mut dyn Write, _verbose: bool) -> io::Result<()> {
        let rows = self.songs.iter().map(|s| SongRow {
            title: s.title.clone(),
            artist: s.display_artist().to_string(),
            tracks_count: s.tracks_count,
        });
        write_table(w, rows)?;
        write_footer(w, self.total_entries, self.total_pages, self.current_page)
    }
}

impl Render for SongOut {
    fn render_text(&self, w: &mut dyn Write, _verbose: bool) -> io::Result<()> {
        write_table(
            w,
            [SongDetailRow {
                title: self.title.clone(),
                id: self.id,
                artist: self.display_artist().to_string(),
                tracks_count: self.tracks_count,
            }],
        )?;
        writeln!(w)?;
        writeln!(w, "Tracks")?;
        let rows = self.tracks.iter().map(|t| SongTrackRow {
            id: t.id,
            date: t.show_date.clone(),
            venue: t.venue_name.clone(),
            location: t.venue_location.clone(),
            duration: t.duration.clone(),
            mp3: t.mp3.clone(),
        });
        write_table(w, rows)
    }
}

impl Render for ToursOut {
    fn render_text(&self, w: &mut dyn Write, _verbose: bool) -> io::Result<()> {
        let rows = self.tours.iter().map(|t| TourRow {
            name: t.name.clone(),
            starts_on: t.starts_on.clone(),
            ends_on: t.ends_on.clone(),
            shows_count: t.shows_count,
        });
        write_table(w, rows)
    }
}

impl Render for TourOut {
    fn render_text(&self, w: &mut dyn Write, _verbose: bool) -> io::Result<()> {
        write_table(
            w,
            [TourRow {
                name: self.name.clone(),
                starts_on: self.starts_on.clone(),
                ends_on: self.ends_on.clone(),
                shows_count: self.shows_count,
            }],
        )?;
        writeln!(w)?;
        write_table(w, self.shows.iter().map(verbose_show_row))
    }
}

impl Render for VenuesOut {
    fn render_text(&self, w: &mut dyn Write, _verbose: bool) -> io::Result<()> {
        let rows = self.venues.iter().map(|v| VenueRow {
            venue: v.name.clone(),
            location: v.location.clone(),
            show_count: v.shows_count,
        });
        write_table(w, rows)?;
        write_footer(w, self.total_entries, self.total_pages, self.current_page)
    }
}

impl Render for VenueOut {
    fn render_text(&self, w: &mut dyn Write, _verbose: bool) -> io::Result<()> {
        write_table(
            w,
            [VenueRow {
                venue: self.name.clone(),
                location: self.location.clone(),
                show_count: self.shows_count,
            }],
        )?;
        if self.show_dates.is_empty() {
            return Ok(());
        }
        writeln!(w)?;
        writeln!(w, "Show Dates")?;
        for d in &self.show_dates {
            writeln!(w, "{d}")?;
        }
        Ok(())
    }
}

impl Render for TracksOut {
    fn render_text(&self, w: &mut dyn Write, _verbose: bool) -> io::Result<()> {
        let rows = self.tracks.iter().map(|t| TrackRow {
            id: t.id,
            date: t.show_date.clone(),
            venue: t.venue_name.clone(),
            location: t.venue_location.clone(),
            title: t.title.clone(),
            mp3: t.mp3.clone(),
        });
        write_table(w, rows)?;
        write_footer(w, self.total_entries, self.total_pages, self.current_page)
    }
}

impl Render for TrackOut {
    fn render_text(&self, w: &mut dyn Write, _verbose: bool) -> io::Result<()> {
        write_table(
            w,
            [TrackDetailRow {
                id: self.id,
                date: self.show_date.clone(),
                venue: self.venue_name.clone(),
                location: self.venue_location.clone(),
                title: self.title.clone(),
                duration: self.duration.clone(),
                set: self.set_name.clone(),
                mp3: self.mp3.clone(),
            }],
        )?;
        if self.tags.is_empty() {
            return Ok(());
        }
        writeln!(w)?;
        writeln!(w, "Tags")?;
        let rows = self.tags.iter().map(|t| TagNotesRow {
            name: t.name.clone(),
            group: t.group.clone(),
            notes: t.notes.replace(['\n', '\r'], ""),
        });
        write_table(w, rows)
    }
}

impl Render for TagsOut {
    fn render_text(&self, w: &mut dyn Write, _verbose: bool) -> io::Result<()> {
        let rows = self.tags.iter().map(|t| TagRow {
            name: t.name.clone(),
            description: t.description.clone(),
            group: t.group.clone(),
        });
        write_table(w, rows)
    }
}

impl Render for TagItemOut {
    fn render_text(&self, w: &mut dyn Write, _verbose: bool) -> io::Result<()> {
        write_table(
            w,
            [TagRow {
                name: self.name.clone(),
                description: self.description.clone(),
                group: self.group.clone(),
            }],
        )?;
        writeln!(w)?;
        let join = |ids: &[u64]| {
            ids.iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        writeln!(w, "Show IDs Where {} Appears", self.name)?;
        writeln!(w, "{}", join(&self.show_ids))?;
        writeln!(w)?;
        writeln!(w, "Track IDs Where {} Appears", self.name)?;
        writeln!(w, "{}", join(&self.track_ids))?;
        Ok(())
    }
}

fn write_track_tags(w: &mut dyn Write, tags: &[TrackTagOut]) -> io::Result<()> {
    for tag in tags {
        writeln!(w, "ID:  TrackID:  TagID:")?;
        writeln!(w, "{}  {}  {}", tag.id, tag.track_id, tag.tag_id)?;
        if !tag.notes.is_empty() {
            writeln!(w)?;
            writeln!(w, "Notes:")?;
            // sometimes arrives html-escaped
            writeln!(w, "{}", tag.notes.replace("&gt;", ">"))?;
        }
        if !tag.transcript.is_empty() {
            if !tag.notes.is_empty() {
                writeln!(w)?;
            }
            writeln!(w, "Transcript:")?;
            writeln!(w, "{}", tag.transcript)?;
        }
        writeln!(w)?;
    }
    Ok(())
}

impl Render for SearchOut {
    fn render_text(&self, w: &mut dyn Write, _verbose: bool) -> io::Result<()> {
        let r = &self.results;
        if r.is_empty() {
            // mistyped identifiers are the dominant failure mode
            write!(w, "{SEARCH_TIPS}")?;
            return Ok(());
        }
        if let Some(show) = &r.exact_show {
            writeln!(w, "*** EXACT SHOW RESULTS ***")?;
            show.render_text(w, true)?;
            writeln!(w)?;
        }
        if !r.other_shows.is_empty() {
            writeln!(w, "*** SHOW RESULTS ***")?;
            let shows = ShowsOut {
                total_entries: 0,
                total_pages: 0,
                current_page: 0,
                shows: r.other_shows.clone(),
            };
            shows.render_text(w, true)?;
            writeln!(w)?;
        }
        if !r.songs.is_empty() {
            writeln!(w, "*** SONG RESULTS ***")?;
            let songs = SongsOut {
                total_entries: 0,
                total_pages: 0,
                current_page: 0,
                songs: r.songs.clone(),
            };
            songs.render_text(w, false)?;
            writeln!(w)?;
        }
        if !r.tags.is_empty() {
            writeln!(w, "*** TAG RESULTS ***")?;
            let tags = TagsOut {
                tags: r.tags.clone(),
            };
            tags.render_text(w, false)?;
            writeln!(w)?;
        }
        if !r.tours.is_empty() {
            writeln!(w, "*** TOUR RESULTS ***")?;
            let tours = ToursOut {
                tours: r.tours.clone(),
            };
            tours.render_text(w, false)?;
            writeln!(w)?;
        }
        if !r.track_tags.is_empty() {
            writeln!(w, "*** TRACK TAG RESULTS ***")?;
            write_track_tags(w, &r.track_tags)?;
            writeln!(w)?;
        }
        if !r.tracks.is_empty() {
            writeln!(w, "*** TRACK RESULTS ***")?;
            let tracks = TracksOut {
                total_entries: 0,
                total_pages: 0,
                current_page: 0,
                tracks: r.tracks.clone(),
            };
            tracks.render_text(w, false)?;
            writeln!(w)?;
        }
        if !r.venues.is_empty() {
            writeln!(w, "*** VENUE RESULTS ***")?;
            let venues = VenuesOut {
                total_entries: 0,
                total_pages: 0,
                current_page: 0,
                venues: r.venues.clone(),
            };
            venues.render_text(w, false)?;
            writeln!(w)?;
        }
        Ok(())
    }
}
