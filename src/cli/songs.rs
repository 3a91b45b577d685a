use std::io;

use anyhow::Context;

use crate::Res;
use crate::display::{SongOut, SongsOut};
use crate::api::Client;
use crate::query::QuerySpec;
use crate::render;
use crate::types::{Envelope, Paginated, Song};

pub async fn list(client: &Client, spec: &QuerySpec, url: &str) -> Res<()> {
    let resp: Paginated<Song> = client
        .get_json(url)
        .await
        .context("unable to get songs list")?;
    let songs = SongsOut::paginated(resp);
    let mut w = io::stdout().lock();
    render::print_results(&mut w, &songs, spec.output, spec.verbose)
}

pub async fn detail(client: &Client, spec: &QuerySpec, url: &str) -> Res<()> {
    let resp: Envelope<Song> = client
        .get_json(url)
        .await
        .context("unable to get song details")?;
    let song = SongOut::from(resp.data);
    let mut w = io::stdout().lock();
    render::print_results(&mut w, &song, spec.output, spec.verbose)
}
