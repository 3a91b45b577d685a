//! # CLI Module
//!
//! Per-endpoint pipelines and the endpoint dispatcher. Each submodule wires
//! one resource through fetch → decode → transform → render; [`run`] routes
//! a normalized query spec to the right pipeline by matching exhaustively on
//! the endpoint so an unhandled combination cannot slip through silently.
//!
//! Endpoints without a list mode (`show-on-date`, `random-show`,
//! `shows-on-day-of-year`) route to a fixed pipeline regardless of whether
//! an identifier was given; `search` is always detail-shaped. The raw
//! output flag short-circuits everything: fetch, decode into a generic
//! value, and print formatted JSON.

mod eras;
mod search;
mod shows;
mod songs;
mod tags;
mod tours;
mod tracks;
mod venues;
mod years;

use std::io;

use anyhow::Context;

use crate::Res;
use crate::api::Client;
use crate::query::{Endpoint, QuerySpec};
use crate::render;

/// Runs one invocation's pipeline against the API.
pub async fn run(client: &Client, spec: &QuerySpec) -> Res<()> {
    let url = client.format_url(spec);

    if spec.raw {
        let value = client
            .get_value(&url)
            .await
            .context("unable to get raw response")?;
        let mut w = io::stdout().lock();
        return render::print_json(&mut w, &value).context("raw output failure");
    }

    match spec.endpoint {
        Endpoint::Eras => {
            if spec.is_detail() {
                eras::detail(client, spec, &url)
                    .await
                    .context("era details failure")
            } else {
                eras::list(client, spec, &url)
                    .await
                    .context("eras list failure")
            }
        }
        Endpoint::Years => {
            if spec.is_detail() {
                years::detail(client, spec, &url)
                    .await
                    .context("year details failure")
            } else {
                years::list(client, spec, &url)
                    .await
                    .context("years list failure")
            }
        }
        Endpoint::Songs => {
            if spec.is_detail() {
                songs::detail(client, spec, &url)
                    .await
                    .context("song details failure")
            } else {
                songs::list(client, spec, &url)
                    .await
                    .context("songs list failure")
            }
        }
        Endpoint::Tours => {
            if spec.is_detail() {
                tours::detail(client, spec, &url)
                    .await
                    .context("tour details failure")
            } else {
                tours::list(client, spec, &url)
                    .await
                    .context("tours list failure")
            }
        }
        Endpoint::Venues => {
            if spec.is_detail() {
                venues::detail(client, spec, &url)
                    .await
                    .context("venue details failure")
            } else {
                venues::list(client, spec, &url)
                    .await
                    .context("venues list failure")
            }
        }
        Endpoint::Shows => {
            if spec.is_detail() {
                shows::detail(client, spec, &url)
                    .await
                    .context("show details failure")
            } else {
                shows::list(client, spec, &url)
                    .await
                    .context("shows list failure")
            }
        }
        Endpoint::ShowOnDate => shows::detail(client, spec, &url)
            .await
            .context("show details failure"),
        Endpoint::ShowsOnDayOfYear => shows::day_of_year(client, spec, &url)
            .await
            .context("shows list failure"),
        Endpoint::RandomShow => shows::detail(client, spec, &url)
            .await
            .context("show details failure"),
        Endpoint::Tracks => {
            if spec.is_detail() {
                tracks::detail(client, spec, &url)
                    .await
                    .context("track details failure")
            } else {
                tracks::list(client, spec, &url)
                    .await
                    .context("tracks list failure")
            }
        }
        Endpoint::Search => search::run(client, spec, &url)
            .await
            .context("search failure"),
        Endpoint::Tags => {
            if spec.is_detail() {
                tags::detail(client, spec, &url)
                    .await
                    .context("tag details failure")
            } else {
                tags::list(client, spec, &url)
                    .await
                    .context("tags list failure")
            }
        }
    }
}
