use std::io;

use anyhow::Context;

use crate::Res;
use crate::display::{ShowsOut, YearOut, YearsOut};
use crate::api::Client;
use crate::query::QuerySpec;
use crate::render;
use crate::types::{Envelope, Paginated, Show, Year};

pub async fn list(client: &Client, spec: &QuerySpec, url: &str) -> Res<()> {
    let resp: Paginated<Year> = client
        .get_json(url)
        .await
        .context("unable to get years list")?;
    let years = YearsOut {
        years: resp.data.into_iter().map(YearOut::from).collect(),
    };
    let mut w = io::stdout().lock();
    render::print_results(&mut w, &years, spec.output, spec.verbose)
}

/// A year's details are its shows; the list renderer is reused with a zero
/// pagination envelope so no footer appears.
pub async fn detail(client: &Client, spec: &QuerySpec, url: &str) -> Res<()> {
    let resp: Envelope<Vec<Show>> = client
        .get_json(url)
        .await
        .context("unable to get year details")?;
    let shows = ShowsOut::new(resp.data);
    let mut w = io::stdout().lock();
    render::print_results(&mut w, &shows, spec.output, spec.verbose)
}
