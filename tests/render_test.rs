use phishin::display::{
    SearchOut, ShowOut, ShowsOut, TagOut, format_duration_ms, tag_annotation,
};
use phishin::query::OutputFormat;
use phishin::render::{Render, print_results};
use phishin::types::{Envelope, Eras, Paginated, SearchData, Show};
use serde_json::Value;

const SHOW_FIXTURE: &str = r#"{
  "data": {
    "id": 1253,
    "date": "1994-10-31",
    "duration": 10865000,
    "sbd": true,
    "remastered": false,
    "tags": [{"name": "Costume", "group": "Set", "notes": "Beatles\nwhite album"}],
    "venue": {
      "id": 9,
      "slug": "glens-falls-civic-center",
      "name": "Glens Falls Civic Center",
      "location": "Glens Falls, NY",
      "shows_count": 2,
      "show_dates": []
    },
    "venue_name": "Glens Falls Civic Center",
    "location": "",
    "tracks": [
      {"id": 1, "show_date": null, "venue_name": null, "title": "Llama", "position": 1,
       "duration": 240000, "set_name": "Set 1", "slug": "llama",
       "mp3": "https://example.com/llama.mp3", "tags": []},
      {"id": 2, "title": "You Enjoy Myself", "position": 2,
       "duration": 1200000, "set_name": "Set 1", "slug": "you-enjoy-myself",
       "mp3": "https://example.com/yem.mp3", "tags": []},
      {"id": 3, "title": "Tweezer", "position": 3,
       "duration": 240000, "set_name": "Encore", "slug": "tweezer",
       "mp3": "https://example.com/tweezer.mp3", "tags": []}
    ]
  }
}"#;

const ERAS_FIXTURE: &str = r#"{
  "data": {
    "1.0": ["1983-1987", "1988", "1989"],
    "2.0": ["2002", "2003"],
    "3.0": ["2009", "2010"]
  }
}"#;

fn fixture_show() -> ShowOut {
    let resp: Envelope<Show> = serde_json::from_str(SHOW_FIXTURE).unwrap();
    ShowOut::from(resp.data)
}

fn render_text<T: Render>(out: &T, verbose: bool) -> String {
    let mut buf = Vec::new();
    out.render_text(&mut buf, verbose).unwrap();
    String::from_utf8(buf).unwrap()
}

fn render_json<T: Render + serde::Serialize>(out: &T, verbose: bool) -> String {
    let mut buf = Vec::new();
    print_results(&mut buf, out, OutputFormat::Json, verbose).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_duration_formatting() {
    assert_eq!(format_duration_ms(368618), "6m 8s");
    assert_eq!(format_duration_ms(9601071), "2h 40m");

    // hour boundary drops the seconds
    assert_eq!(format_duration_ms(3600000), "1h 0m");
    assert_eq!(format_duration_ms(3599999), "59m 59s");
    assert_eq!(format_duration_ms(0), "0m 0s");
}

#[test]
fn test_eras_text_block() {
    let resp: Envelope<Eras> = serde_json::from_str(ERAS_FIXTURE).unwrap();
    let eras = phishin::display::ErasOut::from(resp.data);
    let text = render_text(&eras, false);
    assert!(text.starts_with("Eras\n"));
    assert!(text.contains("1.0: 1983-1987, 1988, 1989\n"));
    assert!(text.contains("2.0: 2002, 2003\n"));
    // the missing era renders as a blank list
    assert!(text.contains("4.0: \n"));
}

#[test]
fn test_eras_json_keys() {
    let resp: Envelope<Eras> = serde_json::from_str(ERAS_FIXTURE).unwrap();
    let eras = phishin::display::ErasOut::from(resp.data);
    let json = render_json(&eras, false);
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["1.0"][0], "1983-1987");
    assert_eq!(value["3.0"][1], "2010");
    // arrays or null, never absent
    assert!(value["4.0"].is_null());
}

#[test]
fn test_show_tracks_keep_wire_order() {
    let show = fixture_show();
    let titles: Vec<&str> = show.tracks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Llama", "You Enjoy Myself", "Tweezer"]);

    // null fields on the wire decode to blanks, not errors
    assert_eq!(show.tracks[0].show_date, "");
    assert_eq!(show.tracks[0].venue_name, "");
}

#[test]
fn test_show_detail_groups_tracks_by_set() {
    let show = fixture_show();
    let text = render_text(&show, false);

    // one heading per set change, in wire order
    let set1 = text.find("Set 1\n").unwrap();
    let encore = text.find("\nEncore\n").unwrap();
    assert!(set1 < encore);
    assert_eq!(text.matches("Set 1\n").count(), 1);

    // titles are padded to the widest title of this render call
    assert!(text.contains(&format!("{:<16}  {}", "Llama", "4m 0s")));
    assert!(text.contains(&format!("{:<16}  {}", "You Enjoy Myself", "20m 0s")));
    assert!(text.contains(&format!("{:<16}  {}", "Tweezer", "4m 0s")));
}

#[test]
fn test_show_verbose_adds_tag_and_track_info() {
    let show = fixture_show();
    let text = render_text(&show, true);
    assert!(text.contains("Show Tags:"));
    // embedded newlines are stripped from tag notes
    assert!(text.contains("Costume: Beatleswhite album"));
    assert!(text.contains("Track Info:"));
    assert!(text.contains("https://example.com/llama.mp3"));
}

#[test]
fn test_location_falls_back_to_nested_venue() {
    let show = fixture_show();
    assert_eq!(show.location, "Glens Falls, NY");
}

#[test]
fn test_boolean_flags_render_yes_or_blank() {
    let resp: Envelope<Show> = serde_json::from_str(SHOW_FIXTURE).unwrap();
    let shows = ShowsOut::paginated(Paginated {
        total_entries: 1,
        total_pages: 1,
        page: 1,
        data: vec![resp.data],
    });
    let text = render_text(&shows, true);
    // sbd is true, remastered is false; false stays visually quiet
    assert_eq!(text.matches("yes").count(), 1);
    assert!(!text.contains("no"));
}

#[test]
fn test_pagination_footer_only_with_entries() {
    let resp: Envelope<Show> = serde_json::from_str(SHOW_FIXTURE).unwrap();
    let show = resp.data;

    let listed = ShowsOut::paginated(Paginated {
        total_entries: 1760,
        total_pages: 587,
        page: 1,
        data: vec![show.clone()],
    });
    let text = render_text(&listed, false);
    assert!(text.contains("Total Entries: 1760  Total Pages: 587  Result Page: 1"));

    // a year's shows reuse this renderer with a zero envelope
    let unlisted = ShowsOut::new(vec![show]);
    let text = render_text(&unlisted, false);
    assert!(!text.contains("Total Entries"));
}

#[test]
fn test_json_ignores_verbose() {
    let resp: Envelope<Show> = serde_json::from_str(SHOW_FIXTURE).unwrap();
    let shows = ShowsOut::new(vec![resp.data]);
    assert_eq!(render_json(&shows, true), render_json(&shows, false));
}

#[test]
fn test_json_carries_display_shape() {
    let show = fixture_show();
    let json = render_json(&show, false);
    let value: Value = serde_json::from_str(&json).unwrap();
    // durations are pre-formatted strings in both outputs
    assert_eq!(value["duration"], "3h 1m");
    assert_eq!(value["tracks"][1]["duration"], "20m 0s");
    // tags stay structured for json
    assert_eq!(value["tags"][0]["name"], "Costume");
    assert_eq!(value["tags"][0]["notes"], "Beatles\nwhite album");
}

#[test]
fn test_tag_annotation() {
    let tags = vec![
        TagOut {
            name: "SBD".to_string(),
            group: "Audio".to_string(),
            notes: String::new(),
        },
        TagOut {
            name: "Jamcharts".to_string(),
            group: "Curated".to_string(),
            notes: "Version of\r\nnote".to_string(),
        },
    ];
    assert_eq!(tag_annotation(&tags), "SBD, Jamcharts: Version ofnote");
    assert_eq!(tag_annotation(&[]), "");
}

#[test]
fn test_empty_search_renders_only_hints() {
    let results = SearchOut::from(SearchData::default());
    let text = render_text(&results, false);
    assert!(text.contains("get a blank space where results should be?"));
    assert!(!text.contains("***"));
}

#[test]
fn test_search_sections_per_nonempty_category() {
    let fixture = r#"{
      "data": {
        "exact_show": null,
        "other_shows": [],
        "songs": [{"id": 2, "slug": "tweezer", "title": "Tweezer", "original": true,
                   "artist": null, "tracks_count": 100, "tracks": []}],
        "venues": [{"id": 4, "slug": "msg", "name": "Madison Square Garden",
                    "location": "New York, NY", "shows_count": 60, "show_dates": []}]
      }
    }"#;
    let resp: Envelope<SearchData> = serde_json::from_str(fixture).unwrap();
    let results = SearchOut::from(resp.data);
    let text = render_text(&results, false);
    assert!(text.contains("*** SONG RESULTS ***"));
    assert!(text.contains("*** VENUE RESULTS ***"));
    assert!(!text.contains("*** SHOW RESULTS ***"));
    assert!(!text.contains("*** TOUR RESULTS ***"));
    // originals render under the band's own name
    assert!(text.contains("Phish"));
}
