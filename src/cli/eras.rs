use std::io;

use anyhow::Context;

use crate::Res;
use crate::display::{EraOut, ErasOut};
use crate::api::Client;
use crate::query::QuerySpec;
use crate::render;
use crate::types::{Envelope, Eras};

pub async fn list(client: &Client, spec: &QuerySpec, url: &str) -> Res<()> {
    let resp: Envelope<Eras> = client
        .get_json(url)
        .await
        .context("unable to get eras list")?;
    let eras = ErasOut::from(resp.data);
    let mut w = io::stdout().lock();
    render::print_results(&mut w, &eras, spec.output, spec.verbose)
}

pub async fn detail(client: &Client, spec: &QuerySpec, url: &str) -> Res<()> {
    let resp: Envelope<Vec<String>> = client
        .get_json(url)
        .await
        .context("unable to get era details")?;
    let era = EraOut {
        era: spec.identifier.clone().unwrap_or_default(),
        years: resp.data,
    };
    let mut w = io::stdout().lock();
    render::print_results(&mut w, &era, spec.output, spec.verbose)
}
