use std::io;

use anyhow::Context;

use crate::Res;
use crate::display::{TourOut, ToursOut};
use crate::api::Client;
use crate::query::QuerySpec;
use crate::render;
use crate::types::{Envelope, Tour};

pub async fn list(client: &Client, spec: &QuerySpec, url: &str) -> Res<()> {
    let resp: Envelope<Vec<Tour>> = client
        .get_json(url)
        .await
        .context("unable to get tours list")?;
    let tours = ToursOut::new(resp.data);
    let mut w = io::stdout().lock();
    render::print_results(&mut w, &tours, spec.output, spec.verbose)
}

pub async fn detail(client: &Client, spec: &QuerySpec, url: &str) -> Res<()> {
    let resp: Envelope<Tour> = client
        .get_json(url)
        .await
        .context("unable to get tour details")?;
    let tour = TourOut::from(resp.data);
    let mut w = io::stdout().lock();
    render::print_results(&mut w, &tour, spec.output, spec.verbose)
}
