use std::io;

use anyhow::Context;

use crate::Res;
use crate::display::SearchOut;
use crate::api::Client;
use crate::query::QuerySpec;
use crate::render;
use crate::types::{Envelope, SearchData};

/// Search is always detail-shaped; the renderer emits one section per
/// nonempty result category.
pub async fn run(client: &Client, spec: &QuerySpec, url: &str) -> Res<()> {
    let resp: Envelope<SearchData> = client
        .get_json(url)
        .await
        .context("unable to get search results")?;
    let results = SearchOut::from(resp.data);
    let mut w = io::stdout().lock();
    render::print_results(&mut w, &results, spec.output, spec.verbose)
}
