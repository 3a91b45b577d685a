use std::io;

use anyhow::Context;

use crate::Res;
use crate::display::{ShowOut, ShowsOut};
use crate::download;
use crate::api::Client;
use crate::query::QuerySpec;
use crate::render;
use crate::types::{Envelope, Paginated, Show};

pub async fn list(client: &Client, spec: &QuerySpec, url: &str) -> Res<()> {
    let resp: Paginated<Show> = client
        .get_json(url)
        .await
        .context("unable to get shows list")?;
    let shows = ShowsOut::paginated(resp);
    let mut w = io::stdout().lock();
    render::print_results(&mut w, &shows, spec.output, spec.verbose)
}

/// One show by id or date; also serves `show-on-date` and `random-show`.
pub async fn detail(client: &Client, spec: &QuerySpec, url: &str) -> Res<()> {
    let resp: Envelope<Show> = client
        .get_json(url)
        .await
        .context("unable to get show details")?;
    let show = ShowOut::from(resp.data);
    {
        let mut w = io::stdout().lock();
        render::print_results(&mut w, &show, spec.output, spec.verbose)?;
    }
    if spec.download {
        download::download_show(&show).await?;
    }
    Ok(())
}

pub async fn day_of_year(client: &Client, spec: &QuerySpec, url: &str) -> Res<()> {
    let resp: Envelope<Vec<Show>> = client
        .get_json(url)
        .await
        .context("unable to get shows list")?;
    let shows = ShowsOut::new(resp.data);
    let mut w = io::stdout().lock();
    render::print_results(&mut w, &shows, spec.output, spec.verbose)
}
