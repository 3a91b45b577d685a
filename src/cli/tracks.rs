use std::io;

use anyhow::Context;

use crate::Res;
use crate::display::{TrackOut, TracksOut};
use crate::download;
use crate::api::Client;
use crate::query::QuerySpec;
use crate::render;
use crate::types::{Envelope, Paginated, Track};

pub async fn list(client: &Client, spec: &QuerySpec, url: &str) -> Res<()> {
    let resp: Paginated<Track> = client
        .get_json(url)
        .await
        .context("unable to get tracks list")?;
    let tracks = TracksOut::paginated(resp);
    let mut w = io::stdout().lock();
    render::print_results(&mut w, &tracks, spec.output, spec.verbose)
}

pub async fn detail(client: &Client, spec: &QuerySpec, url: &str) -> Res<()> {
    let resp: Envelope<Track> = client
        .get_json(url)
        .await
        .context("unable to get track details")?;
    let track = TrackOut::from(resp.data);
    {
        let mut w = io::stdout().lock();
        render::print_results(&mut w, &track, spec.output, spec.verbose)?;
    }
    if spec.download {
        download::download_track(&track).await?;
    }
    Ok(())
}
