//! The chunked streaming fetch itself.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use reqwest::StatusCode;
use reqwest_middleware::ClientWithMiddleware;
use tokio::{fs, fs::OpenOptions, io::AsyncWriteExt};
use tracing::debug;

use super::cancel::CancelFlag;
use crate::error::{Error, Result};
use crate::naming::PART_SUFFIX;
use crate::progress::ProgressBarOpts;
use crate::resolve::DownloadTarget;

/// Staging path for an in-flight transfer: the final path plus `.part`.
pub fn part_path(dest: &Path) -> PathBuf {
    let mut os = dest.as_os_str().to_os_string();
    os.push(PART_SUFFIX);
    PathBuf::from(os)
}

/// Streams `target` to `dest`, reporting progress chunk by chunk.
///
/// Bytes are written to the `.part` sibling and renamed to `dest` only on
/// a clean end of stream; a stale `.part` from a crashed run is deleted up
/// front and every transfer starts from byte zero. Returns the number of
/// bytes written.
///
/// Cancellation is checked between chunks: when `cancel` is raised the
/// `.part` artifact is removed and [`Error::Cancelled`] is returned, with
/// `dest` guaranteed absent for this attempt. A stream or write error also
/// removes the `.part` before propagating. No integrity verification
/// happens on completion.
pub async fn fetch_to_file(
    client: &ClientWithMiddleware,
    target: &DownloadTarget,
    dest: &Path,
    style: &ProgressBarOpts,
    cancel: &CancelFlag,
) -> Result<u64> {
    if let Some(parent) = dest.parent() {
        debug!("creating destination directory {:?}", parent);
        fs::create_dir_all(parent).await?;
    }

    let part = part_path(dest);
    if fs::try_exists(&part).await? {
        debug!("removing stale part file {:?}", part);
        fs::remove_file(&part).await?;
    }

    debug!("fetching {}", target.media_url);
    let res = client.get(&target.media_url).send().await?;
    if let Err(e) = res.error_for_status_ref() {
        return Err(match res.status() {
            StatusCode::FORBIDDEN | StatusCode::NOT_FOUND | StatusCode::GONE => {
                Error::Unavailable(format!("{} returned {}", target.title, res.status()))
            }
            _ => Error::from(e),
        });
    }

    // Declared length from the response, else the extractor's estimate;
    // with neither, progress degrades to a plain byte counter.
    let total = res.content_length().or(target.size_hint);
    let pb = style.to_progress_bar(total);

    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&part)
        .await?;

    let mut written: u64 = 0;
    let mut stream = res.bytes_stream();
    loop {
        if cancel.is_cancelled() {
            drop(file);
            remove_part(&part).await;
            pb.abandon();
            return Err(Error::Cancelled);
        }
        let Some(item) = stream.next().await else {
            break;
        };
        let mut chunk = match item {
            Ok(chunk) => chunk,
            Err(e) => {
                drop(file);
                remove_part(&part).await;
                pb.abandon();
                return Err(e.into());
            }
        };
        let chunk_len = chunk.len() as u64;
        if let Err(e) = file.write_all_buf(&mut chunk).await {
            drop(file);
            remove_part(&part).await;
            pb.abandon();
            return Err(e.into());
        }
        written += chunk_len;
        pb.inc(chunk_len);
    }

    file.flush().await?;
    drop(file);
    fs::rename(&part, dest).await?;
    style.finish(&pb);
    debug!("wrote {} bytes to {:?}", written, dest);
    Ok(written)
}

async fn remove_part(part: &Path) {
    if let Err(e) = fs::remove_file(part).await {
        debug!("could not remove part file {:?}: {}", part, e);
    }
}
