use std::io;

use anyhow::Context;

use crate::Res;
use crate::display::{VenueOut, VenuesOut};
use crate::api::Client;
use crate::query::QuerySpec;
use crate::render;
use crate::types::{Envelope, Paginated, Venue};

pub async fn list(client: &Client, spec: &QuerySpec, url: &str) -> Res<()> {
    let resp: Paginated<Venue> = client
        .get_json(url)
        .await
        .context("unable to get venues list")?;
    let venues = VenuesOut::paginated(resp);
    let mut w = io::stdout().lock();
    render::print_results(&mut w, &venues, spec.output, spec.verbose)
}

pub async fn detail(client: &Client, spec: &QuerySpec, url: &str) -> Res<()> {
    let resp: Envelope<Venue> = client
        .get_json(url)
        .await
        .context("unable to get venue details")?;
    let venue = VenueOut::from(resp.data);
    let mut w = io::stdout().lock();
    render::print_results(&mut w, &venue, spec.output, spec.verbose)
}
