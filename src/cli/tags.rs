use std::io;

use anyhow::Context;

use crate::Res;
use crate::display::{TagItemOut, TagsOut};
use crate::api::Client;
use crate::query::QuerySpec;
use crate::render;
use crate::types::{Envelope, TagListItem};

pub async fn list(client: &Client, spec: &QuerySpec, url: &str) -> Res<()> {
    let resp: Envelope<Vec<TagListItem>> = client
        .get_json(url)
        .await
        .context("unable to get tags list")?;
    let tags = TagsOut::new(resp.data);
    let mut w = io::stdout().lock();
    render::print_results(&mut w, &tags, spec.output, spec.verbose)
}

pub async fn detail(client: &Client, spec: &QuerySpec, url: &str) -> Res<()> {
    let resp: Envelope<TagListItem> = client
        .get_json(url)
        .await
        .context("unable to get tag details")?;
    let tag = TagItemOut::from(resp.data);
    let mut w = io::stdout().lock();
    render::print_results(&mut w, &tag, spec.output, spec.verbose)
}
