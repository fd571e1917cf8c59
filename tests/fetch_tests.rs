//! Tests for the chunked streaming fetch: full transfers, cancellation
//! cleanup, stale part files and HTTP error classification.

mod common;
use common::helpers::*;

use std::fs;

use ytfetch::fetch::{fetch_to_file, part_path, CancelFlag};
use ytfetch::resolve::DownloadTarget;
use ytfetch::{create_http_client, Error, HttpClientConfig, ProgressBarOpts};

fn target(title: &str, media_url: String) -> DownloadTarget {
    DownloadTarget {
        title: title.to_string(),
        media_url,
        size_hint: None,
    }
}

#[tokio::test]
async fn transfers_every_declared_byte() {
    let mut server = mockito::Server::new_async().await;
    let body = create_test_content(64 * 1024);
    let mock = server
        .mock("GET", "/clip.mp4")
        .with_header("content-type", "video/mp4")
        .with_body(body.clone())
        .create_async()
        .await;

    let dir = create_temp_dir();
    let dest = dir.path().join("clip.mp4");
    let client = create_http_client(HttpClientConfig::default()).unwrap();
    let cancel = CancelFlag::new();

    let written = fetch_to_file(
        &client,
        &target("clip", format!("{}/clip.mp4", server.url())),
        &dest,
        &ProgressBarOpts::hidden(),
        &cancel,
    )
    .await
    .unwrap();

    assert_eq!(written, body.len() as u64);
    assert_file_size(&dest, body.len() as u64);
    assert_eq!(fs::read(&dest).unwrap(), body);
    assert!(!part_path(&dest).exists(), "part file must not survive");
    mock.assert_async().await;
}

#[tokio::test]
async fn creates_missing_parent_directories() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/clip.mp4")
        .with_body(b"data")
        .create_async()
        .await;

    let dir = create_temp_dir();
    let dest = dir.path().join("My List").join("clip.mp4");
    let client = create_http_client(HttpClientConfig::default()).unwrap();

    fetch_to_file(
        &client,
        &target("clip", format!("{}/clip.mp4", server.url())),
        &dest,
        &ProgressBarOpts::hidden(),
        &CancelFlag::new(),
    )
    .await
    .unwrap();

    assert_file_size(&dest, 4);
}

#[tokio::test]
async fn cancellation_leaves_no_artifacts() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/clip.mp4")
        .with_body(create_test_content(1024 * 1024))
        .create_async()
        .await;

    let dir = create_temp_dir();
    let dest = dir.path().join("clip.mp4");
    let client = create_http_client(HttpClientConfig::default()).unwrap();
    let cancel = CancelFlag::new();
    cancel.cancel();

    let result = fetch_to_file(
        &client,
        &target("clip", format!("{}/clip.mp4", server.url())),
        &dest,
        &ProgressBarOpts::hidden(),
        &cancel,
    )
    .await;

    assert!(matches!(result, Err(Error::Cancelled)));
    assert!(!dest.exists(), "final file must not exist after cancel");
    assert!(!part_path(&dest).exists(), "part file must be cleaned up");
}

#[tokio::test]
async fn stale_part_file_is_discarded() {
    let mut server = mockito::Server::new_async().await;
    let body = create_test_content(2048);
    server
        .mock("GET", "/clip.mp4")
        .with_body(body.clone())
        .create_async()
        .await;

    let dir = create_temp_dir();
    let dest = dir.path().join("clip.mp4");
    // Leftover from a crashed run.
    fs::write(part_path(&dest), b"junk from a previous run").unwrap();

    let client = create_http_client(HttpClientConfig::default()).unwrap();
    let written = fetch_to_file(
        &client,
        &target("clip", format!("{}/clip.mp4", server.url())),
        &dest,
        &ProgressBarOpts::hidden(),
        &CancelFlag::new(),
    )
    .await
    .unwrap();

    assert_eq!(written, 2048);
    assert_eq!(fs::read(&dest).unwrap(), body);
    assert!(!part_path(&dest).exists());
}

#[tokio::test]
async fn missing_remote_reports_unavailable() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/clip.mp4")
        .with_status(404)
        .create_async()
        .await;

    let dir = create_temp_dir();
    let dest = dir.path().join("clip.mp4");
    let client = create_http_client(HttpClientConfig::default()).unwrap();

    let result = fetch_to_file(
        &client,
        &target("clip", format!("{}/clip.mp4", server.url())),
        &dest,
        &ProgressBarOpts::hidden(),
        &CancelFlag::new(),
    )
    .await;

    assert!(matches!(result, Err(Error::Unavailable(_))));
    assert!(!dest.exists());
    assert!(!part_path(&dest).exists());
}

#[test]
fn part_path_appends_suffix() {
    let dest = std::path::Path::new("downloads/My List/clip.mp4");
    assert_eq!(
        part_path(dest),
        std::path::PathBuf::from("downloads/My List/clip.mp4.part")
    );
}
