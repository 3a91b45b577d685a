//! Bounded-concurrency bulk media downloads.
//!
//! A full show downloads into a directory named by the show date, one file
//! per track numbered by the API-returned track order; a single track
//! downloads into the working directory. Worker tasks run under a shared
//! concurrency limit and report byte counts over a channel to one owning
//! progress aggregator, which draws the single status line; workers never
//! write to the console themselves.
//!
//! On partial failure the batch keeps everything already on disk and
//! reports the failed files by name.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::AsyncWriteExt;
use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;

use crate::display::{ShowOut, TrackOut};
use crate::error::DownloadError;
use crate::{Res, success, warning};

/// Upper bound on concurrently running download tasks.
pub const WORKERS: usize = 4;

/// Destination file name for one track of a full-show download.
///
/// Numbering follows the API-returned track order and is fixed at task
/// creation time, so concurrent completion order never affects it.
pub fn track_file_name(position: usize, slug: &str) -> String {
    format!("{position:02}-{slug}.mp3")
}

struct Job {
    name: String,
    url: String,
}

struct Progress {
    name: String,
    bytes: u64,
}

/// Downloads every track of a show into a directory named by the show date.
///
/// The directory must not already exist; collision handling is the user's
/// problem.
pub async fn download_show(show: &ShowOut) -> Res<()> {
    let dir = PathBuf::from(&show.date);
    tokio::fs::create_dir(&dir)
        .await
        .with_context(|| format!("failed to create directory {:?}", show.date))?;

    let jobs: Vec<Job> = show
        .tracks
        .iter()
        .enumerate()
        .map(|(i, t)| Job {
            name: track_file_name(i + 1, &t.slug),
            url: t.mp3.clone(),
        })
        .collect();
    let count = jobs.len();
    run_batch(&dir, jobs).await?;
    success!("downloaded {} tracks to {}", count, dir.display());
    Ok(())
}

/// Downloads one track into the working directory, named by its slug.
pub async fn download_track(track: &TrackOut) -> Res<()> {
    let jobs = vec![Job {
        name: format!("{}.mp3", track.slug),
        url: track.mp3.clone(),
    }];
    run_batch(Path::new("."), jobs).await
}

async fn run_batch(dir: &Path, jobs: Vec<Job>) -> Res<()> {
    let http = reqwest::Client::new();
    let limit = Arc::new(Semaphore::new(WORKERS));
    let (tx, rx) = mpsc::channel::<Progress>(64);
    let reporter = tokio::spawn(report_progress(rx));

    let mut tasks = JoinSet::new();
    for job in jobs {
        let http = http.clone();
        let limit = Arc::clone(&limit);
        let tx = tx.clone();
        let path = dir.join(&job.name);
        tasks.spawn(async move {
            let result = fetch_file(http, limit, path, &job, tx).await;
            (job.name, result)
        });
    }
    drop(tx);

    let mut failed: Vec<String> = Vec::new();
    let mut cancelled = false;
    loop {
        tokio::select! {
            next = tasks.join_next() => match next {
                Some(Ok((name, Err(e)))) => {
                    warning!("failed to download {}: {:#}", name, e);
                    failed.push(name);
                }
                Some(Ok((_, Ok(())))) => {}
                Some(Err(_)) => {
                    // task aborted by cancellation; partial file stays put
                }
                None => break,
            },
            _ = tokio::signal::ctrl_c(), if !cancelled => {
                cancelled = true;
                tasks.abort_all();
            }
        }
    }
    // workers are gone, so the channel is closed and the reporter drains
    let _ = reporter.await;

    if cancelled {
        return Err(anyhow!("download cancelled"));
    }
    if !failed.is_empty() {
        return Err(DownloadError::from_names(&failed).into());
    }
    Ok(())
}

async fn fetch_file(
    http: reqwest::Client,
    limit: Arc<Semaphore>,
    path: PathBuf,
    job: &Job,
    tx: mpsc::Sender<Progress>,
) -> Res<()> {
    let _permit = limit
        .acquire_owned()
        .await
        .context("worker limit closed")?;

    let mut file = tokio::fs::File::create(&path)
        .await
        .context("failed to create file")?;
    let mut response = http
        .get(&job.url)
        .send()
        .await
        .context("failed to get response")?;
    if !response.status().is_success() {
        return Err(anyhow!(
            "received unexpected status code: {:?}",
            response.status().to_string()
        ));
    }

    let mut written: u64 = 0;
    while let Some(chunk) = response
        .chunk()
        .await
        .context("failed to read response body")?
    {
        file.write_all(&chunk)
            .await
            .context("unable to copy data to file")?;
        written += chunk.len() as u64;
        let _ = tx
            .send(Progress {
                name: job.name.clone(),
                bytes: written,
            })
            .await;
    }
    file.flush().await.context("unable to flush file")?;
    Ok(())
}

/// Owns the single status line; consumes progress events from all workers.
async fn report_progress(mut rx: mpsc::Receiver<Progress>) {
    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    while let Some(p) = rx.recv().await {
        pb.set_message(format!(
            "downloaded {} of {}",
            humanize_bytes(p.bytes),
            p.name
        ));
    }
    pb.finish_and_clear();
}

/// Humanizes a byte count in base-1024 units.
///
/// One decimal place below 10 units of the chosen suffix, an integer
/// otherwise.
pub fn humanize_bytes(b: u64) -> String {
    const SIZES: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    if b < 10 {
        return format!("{b} B");
    }
    let exp = ((b as f64).ln() / 1024f64.ln()).floor() as usize;
    let exp = exp.min(SIZES.len() - 1);
    let val = ((b as f64) / 1024f64.powi(exp as i32) * 10.0 + 0.5).floor() / 10.0;
    if val < 10.0 {
        format!("{:.1} {}", val, SIZES[exp])
    } else {
        format!("{:.0} {}", val, SIZES[exp])
    }
}
