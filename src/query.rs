//! Argument normalization.
//!
//! One shared flag-parsing pass (clap, in `main`) produces a [`Flags`]
//! value; [`normalize`] applies the per-endpoint rules and emits an
//! immutable [`QuerySpec`] or a descriptive [`ArgumentError`]. The spec is
//! built once per invocation and never mutated afterwards.
//!
//! When a search query selects one entity (detail mode), list parameters
//! are never computed: the identifier strictly wins, and the invariant is
//! enforced here at construction time rather than at URL-formatting time.

use std::fmt;
use std::str::FromStr;

use crate::error::ArgumentError;

pub const ENDPOINT_LIST: &str = r#"
supported endpoints:

/eras
/eras/:era

/years
/years/:year

/songs
/songs/:id
/songs/:slug

/tours
/tours/:id
/tours/:slug

/venues
/venues/:id
/venues/:slug

/shows
/shows/:id
/shows/:date(yyyy-mm-dd)

/show-on-date/:date(yyyy-mm-dd)

/shows-on-day-of-year/:day(mm-dd)

/random-show

/tracks
/tracks/:id

/search/:term

/tags
/tags/:id
/tags/:slug

example usage to get era 2.0:
phishin eras -s 2.0

see https://phish.in/api-docs for more details"#;

/// The closed set of API endpoints the client can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Eras,
    Years,
    Songs,
    Tours,
    Venues,
    Shows,
    ShowOnDate,
    ShowsOnDayOfYear,
    RandomShow,
    Tracks,
    Search,
    Tags,
}

impl Endpoint {
    /// URL path segment for the endpoint.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Eras => "eras",
            Endpoint::Years => "years",
            Endpoint::Songs => "songs",
            Endpoint::Tours => "tours",
            Endpoint::Venues => "venues",
            Endpoint::Shows => "shows",
            Endpoint::ShowOnDate => "show-on-date",
            Endpoint::ShowsOnDayOfYear => "shows-on-day-of-year",
            Endpoint::RandomShow => "random-show",
            Endpoint::Tracks => "tracks",
            Endpoint::Search => "search",
            Endpoint::Tags => "tags",
        }
    }

    /// Endpoints that accept pagination and sort parameters in list mode.
    fn supports_list_params(self) -> bool {
        matches!(
            self,
            Endpoint::Shows | Endpoint::Tracks | Endpoint::Songs | Endpoint::Venues
        )
    }

    /// Endpoints that accept a tag filter in list mode.
    fn supports_tag_filter(self) -> bool {
        matches!(self, Endpoint::Shows | Endpoint::Tracks)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Endpoint {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eras" => Ok(Endpoint::Eras),
            "years" => Ok(Endpoint::Years),
            "songs" => Ok(Endpoint::Songs),
            "tours" => Ok(Endpoint::Tours),
            "venues" => Ok(Endpoint::Venues),
            "shows" => Ok(Endpoint::Shows),
            "show-on-date" => Ok(Endpoint::ShowOnDate),
            "shows-on-day-of-year" => Ok(Endpoint::ShowsOnDayOfYear),
            "random-show" => Ok(Endpoint::RandomShow),
            "tracks" => Ok(Endpoint::Tracks),
            "search" => Ok(Endpoint::Search),
            "tags" => Ok(Endpoint::Tags),
            other => Err(ArgumentError::UnrecognizedCommand(other.to_string())),
        }
    }
}

/// How results are written to the output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Raw flag values from the shared parsing pass, before per-endpoint
/// normalization.
#[derive(Debug, Clone)]
pub struct Flags {
    pub search: Option<String>,
    pub output: String,
    pub sort_dir: Option<String>,
    pub sort_attr: Option<String>,
    pub per_page: i64,
    pub page: i64,
    pub tag: Option<String>,
    pub verbose: bool,
    pub debug: bool,
    pub raw: bool,
    pub download: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Flags {
            search: None,
            output: "text".to_string(),
            sort_dir: None,
            sort_attr: None,
            per_page: 20,
            page: 1,
            tag: None,
            verbose: false,
            debug: false,
            raw: false,
            download: false,
        }
    }
}

/// The validated, normalized representation of one invocation.
///
/// Invariant: `parameters` is non-empty only when `identifier` is `None`.
#[derive(Debug, Clone)]
pub struct QuerySpec {
    pub endpoint: Endpoint,
    pub identifier: Option<String>,
    pub parameters: Vec<String>,
    pub output: OutputFormat,
    pub verbose: bool,
    pub debug: bool,
    pub raw: bool,
    pub download: bool,
}

impl QuerySpec {
    pub fn is_detail(&self) -> bool {
        self.identifier.is_some()
    }
}

/// Applies the per-endpoint validation and defaulting rules to raw flags.
pub fn normalize(endpoint: &str, flags: Flags) -> Result<QuerySpec, ArgumentError> {
    let endpoint: Endpoint = endpoint.parse()?;

    let output = match flags.output.as_str() {
        "text" => OutputFormat::Text,
        "json" => OutputFormat::Json,
        other => return Err(ArgumentError::InvalidOutputFormat(other.to_string())),
    };

    let mut identifier = flags.search.filter(|s| !s.is_empty());
    match endpoint {
        Endpoint::ShowOnDate if identifier.is_none() => {
            return Err(ArgumentError::MissingQuery("date"));
        }
        Endpoint::ShowsOnDayOfYear if identifier.is_none() => {
            return Err(ArgumentError::MissingQuery("day"));
        }
        Endpoint::Search if identifier.is_none() => {
            return Err(ArgumentError::MissingQuery("search term"));
        }
        // doesn't take a query, so drop if the user added one
        Endpoint::RandomShow => identifier = None,
        _ => {}
    }

    // identifier wins: list parameters exist only in list mode
    let mut parameters = Vec::new();
    if identifier.is_none() {
        if endpoint == Endpoint::Years {
            parameters.push("include_show_counts=true".to_string());
        }
        if endpoint.supports_tag_filter() {
            push_tag_param(&mut parameters, flags.tag.as_deref());
        }
        if endpoint.supports_list_params() {
            push_page_params(&mut parameters, flags.per_page, flags.page);
            push_sort_params(
                &mut parameters,
                flags.sort_dir.as_deref(),
                flags.sort_attr.as_deref(),
            );
        }
    }

    Ok(QuerySpec {
        endpoint,
        identifier,
        parameters,
        output,
        verbose: flags.verbose,
        debug: flags.debug,
        raw: flags.raw,
        download: flags.download,
    })
}

fn push_page_params(parameters: &mut Vec<String>, per_page: i64, page: i64) {
    if per_page != 20 && per_page > 0 {
        parameters.push(format!("per_page={per_page}"));
    }
    if page > 1 {
        parameters.push(format!("page={page}"));
    }
}

fn push_sort_params(parameters: &mut Vec<String>, sort_dir: Option<&str>, sort_attr: Option<&str>) {
    match sort_dir {
        Some("asc") => parameters.push("sort_dir=asc".to_string()),
        Some("desc") => parameters.push("sort_dir=desc".to_string()),
        // anything else is silently ignored
        _ => {}
    }
    if let Some(attr) = sort_attr {
        if !attr.is_empty() {
            parameters.push(format!("sort_attr={attr}"));
        }
    }
}

fn push_tag_param(parameters: &mut Vec<String>, tag: Option<&str>) {
    if let Some(tag) = tag {
        if !tag.is_empty() {
            parameters.push(format!("tag={tag}"));
        }
    }
}
