use clap::{
    CommandFactory, Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use phishin::error::ApiError;
use phishin::query::{ENDPOINT_LIST, Flags};
use phishin::render::SEARCH_TIPS;
use phishin::{api, cli, config, error, query, warning};

const AFTER_HELP: &str = r#"request the 3 most recent shows like this:
    phishin shows --pp 3 -p 1 --sort-attr date --sort-dir desc

outputs the following:
    Date:       Venue:                 Location:                     Duration:
    2024-02-20  Moon Palace            Quintana Roo, Cancun, Mexico  54m 19s
    2023-12-31  Madison Square Garden  New York, NY                  4h 6m
    2023-12-30  Madison Square Garden  New York, NY                  2h 53m

    Total Entries: 1760  Total Pages: 587  Result Page: 1

getting started:
    get an api key (info at https://phish.in/contact-info).
    set it as an environment variable (PHISHIN_API_KEY).
    go phishin!

endpoint arguments correspond to the phishin endpoints, and one (and only one)
argument must be specified. most allow an optional search query (-s/--search)
to change the output from a list of entities to details about a particular
entity. run `phishin endpoints` for the full endpoint listing.

list-related flags are supported for /shows, /songs, /tracks, and /venues.
they will be ignored if you include them for other commands.

see https://phish.in/api-docs for more details"#;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name = env!("CARGO_PKG_NAME"),
  bin_name = env!("CARGO_PKG_NAME"),
  about = env!("CARGO_PKG_DESCRIPTION"),
  after_help = AFTER_HELP,
  styles = styles(),
)]
struct Cli {
    /// Endpoint to query (e.g. shows, years, search; `phishin endpoints` lists all)
    endpoint: Option<String>,

    /// Search query, format depends on the specific endpoint
    #[clap(short, long)]
    search: Option<String>,

    /// Print output as <text> or <json>
    #[clap(short, long, default_value = "text")]
    output: String,

    /// Direction to sort in, asc or desc
    #[clap(short = 'd', long = "sort-dir")]
    sort_dir: Option<String>,

    /// Attribute to sort on (e.g. name, date)
    #[clap(short = 'a', long = "sort-attr")]
    sort_attr: Option<String>,

    /// Number of results included per page
    #[clap(long = "per-page", alias = "pp", default_value_t = 20)]
    per_page: i64,

    /// Result page to return
    #[clap(short, long, default_value_t = 1)]
    page: i64,

    /// Filter results by a specific tag (applicable for /shows and /tracks)
    #[clap(short, long)]
    tag: Option<String>,

    /// Include extra information in output (not supported in all routes)
    #[clap(short, long)]
    verbose: bool,

    /// Print the url that the client is sending to the server
    #[clap(long)]
    debug: bool,

    /// Dump the full response envelope as json, skipping output shaping
    #[clap(short, long)]
    raw: bool,

    /// Download media files (show and track details)
    #[clap(long)]
    download: bool,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    let endpoint = match cli.endpoint.as_deref() {
        Some(endpoint) => endpoint.to_lowercase(),
        None => {
            let mut cmd = Cli::command();
            let _ = cmd.print_long_help();
            std::process::exit(1);
        }
    };
    match endpoint.as_str() {
        "help" | "h" => {
            let mut cmd = Cli::command();
            let _ = cmd.print_long_help();
            return;
        }
        "endpoints" | "e" => {
            eprintln!("{ENDPOINT_LIST}");
            return;
        }
        _ => {}
    }

    let flags = Flags {
        search: cli.search,
        output: cli.output,
        sort_dir: cli.sort_dir,
        sort_attr: cli.sort_attr,
        per_page: cli.per_page,
        page: cli.page,
        tag: cli.tag,
        verbose: cli.verbose,
        debug: cli.debug,
        raw: cli.raw,
        download: cli.download,
    };
    let spec = match query::normalize(&endpoint, flags) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("unable to parse args: {e}");
            std::process::exit(1);
        }
    };

    let api_key = match config::api_key() {
        Ok(key) => key,
        Err(e) => error!("{}", e),
    };

    let client = api::Client::new(api_key).debug(spec.debug);
    if let Err(e) = cli::run(&client, &spec).await {
        eprintln!("{e:#}");
        let not_found = e.chain().any(|cause| {
            matches!(cause.downcast_ref::<ApiError>(), Some(ApiError::NotFound(_)))
        });
        if not_found {
            eprint!("{SEARCH_TIPS}");
        }
        std::process::exit(1);
    }
}
