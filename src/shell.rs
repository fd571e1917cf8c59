//! The interactive menu loop.
//!
//! Thin glue: a numbered menu on stdin/stdout dispatching into the
//! [`Session`]. All user-facing text lives here and in [`print_event`];
//! the core modules never touch the terminal.

use std::io::{self, Write};
use std::path::Path;

use console::style;
use tokio::signal;

use crate::error::Result;
use crate::fetch::{Status, Summary};
use crate::mode::CollisionPrompt;
use crate::resolve::Resolve;
use crate::session::{Event, RangeFilter, Session};

const RULE: &str = "----------------------------";

/// Collision prompt backed by the terminal.
pub struct StdinPrompt;

impl CollisionPrompt for StdinPrompt {
    fn ask(&mut self, filename: &str) -> Result<String> {
        let question = format!(
            "The file {} already exists. What do you want to do? (o: overwrite, s: skip): ",
            filename
        );
        print!("{}", style(question).yellow());
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        Ok(answer)
    }
}

/// Prints one live reporting event in the original tool's voice.
pub fn print_event(event: &Event<'_>) {
    match event {
        Event::PlaylistResolved { title, videos } => {
            println!("{}", RULE);
            println!("{}", style(format!("Playlist: {}", title)).magenta().bold());
            println!("{}", style(format!("Number of Videos: {}", videos)).cyan());
            println!("{}", RULE);
        }
        Event::ResolveRetry {
            attempt,
            max_attempts,
            error,
        } => {
            println!("{}", style(format!("An error occurred: {}", error)).red());
            println!("{}", RULE);
            println!(
                "{}",
                style(format!("Retrying ({}/{})...", attempt, max_attempts)).red()
            );
            println!("{}", RULE);
        }
        Event::ResolveExhausted => {
            println!("{}", RULE);
            println!("{}", style("Max retries reached. Giving up.").red());
            println!("{}", RULE);
        }
        Event::SkippedByRange { index } => {
            println!(
                "{}",
                style(format!("Skipping video {} (manually specified)", index)).yellow()
            );
        }
        Event::FileDone(summary) => print_summary(summary),
    }
}

fn print_summary(summary: &Summary) {
    match summary.status() {
        Status::Success => {
            println!(
                "{}",
                style(format!("Downloaded: {}", summary.filename())).green()
            );
            println!(
                "{}",
                style(format!(
                    "Saved to: {} ({} bytes)",
                    absolute(summary.path()).display(),
                    summary.bytes()
                ))
                .green()
            );
        }
        Status::Skipped(reason) => {
            println!(
                "{}",
                style(format!("Skipping {}. {}.", summary.filename(), reason)).yellow()
            );
        }
        Status::Aborted => {
            println!(
                "{}",
                style(format!(
                    "Download of {} canceled by the user.",
                    summary.filename()
                ))
                .red()
            );
        }
        Status::Unavailable(_) => {
            println!(
                "{}",
                style(format!("Video {} is unavailable.", summary.filename())).red()
            );
        }
        Status::Fail(msg) => {
            println!(
                "{}",
                style(format!("Failed to download {}: {}", summary.filename(), msg)).red()
            );
        }
        Status::NotStarted => {}
    }
    println!("{}", RULE);
}

fn absolute(path: &Path) -> std::path::PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn read_index(prompt: &str) -> io::Result<Option<usize>> {
    let line = read_line(prompt)?;
    match line.parse::<usize>() {
        Ok(n) => Ok(Some(n)),
        Err(_) => {
            println!("{}", style("Not a valid index.").red());
            Ok(None)
        }
    }
}

fn print_menu() {
    println!("\nOptions:\n");
    println!("1. Download Single Video");
    println!("2. Download Playlist");
    println!("3. Skip All Downloaded Videos in Playlist");
    println!("4. Override All Downloaded Videos in Playlist");
    println!("5. Skip a Range of Videos in Playlist");
    println!("6. Exit");
    println!("{}", RULE);
}

/// Runs the menu loop until the user exits.
pub async fn run<R: Resolve>(mut session: Session<R>) -> Result<()> {
    println!(
        "{}",
        style("\nWelcome to the YouTube Video Downloader!").red().bold()
    );
    tokio::fs::create_dir_all(session.directory()).await?;

    // First ctrl-c cancels the in-flight transfer instead of killing the
    // process; the flag is re-armed before every menu action.
    let cancel = session.cancel_flag();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            while signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        }
    });

    loop {
        print_menu();
        let choice = read_line("Enter your choice (1/2/3/4/5/6): ")?;
        println!("{}", RULE);
        cancel.reset();
        match choice.as_str() {
            "1" => {
                let url = read_line("Enter YouTube video URL: ")?;
                if let Err(e) = session.download_video(&url, &mut StdinPrompt).await {
                    println!("{}", style(format!("An error occurred: {}", e)).red());
                    println!("{}", RULE);
                }
            }
            "2" => {
                let url = read_line("Enter YouTube playlist URL: ")?;
                run_playlist(&session, &url, None).await;
            }
            "3" => {
                session.mode_mut().skip_all = true;
                println!("{}", style("Skipping all downloads").yellow().bold());
            }
            "4" => {
                session.mode_mut().override_all = true;
                println!("{}", style("Overriding all downloads.").yellow().bold());
            }
            "5" => {
                let url = read_line("Enter YouTube playlist URL: ")?;
                let Some(start) = read_index("Enter the first video number to skip: ")? else {
                    continue;
                };
                let Some(end) = read_index("Enter the last video number to skip: ")? else {
                    continue;
                };
                run_playlist(&session, &url, Some(RangeFilter::new(start, end))).await;
            }
            "6" => {
                println!("{}", style("Exiting the application.").red());
                println!("{}", RULE);
                break;
            }
            _ => {
                println!("{}", style("Invalid choice. Enter a valid option.").red());
                println!("{}", RULE);
            }
        }
    }
    Ok(())
}

async fn run_playlist<R: Resolve>(session: &Session<R>, url: &str, range: Option<RangeFilter>) {
    match session.download_playlist(url, range, &mut StdinPrompt).await {
        Ok(report) => {
            if report.resolved {
                println!(
                    "{}",
                    style(format!(
                        "Done: {} downloaded, {} skipped, {} failed.",
                        report.downloaded(),
                        report.skipped(),
                        report.failed()
                    ))
                    .cyan()
                );
                println!("{}", RULE);
            }
        }
        Err(e) => {
            println!("{}", style(format!("An error occurred: {}", e)).red());
            println!("{}", RULE);
        }
    }
}
