use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use ytfetch::resolve::YtDlp;
use ytfetch::session::SessionBuilder;
use ytfetch::shell;

#[tokio::main]
async fn main() -> ytfetch::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let session = SessionBuilder::new()
        .directory(PathBuf::from("downloads"))
        .on_event(shell::print_event)
        .build(YtDlp::default())?;

    shell::run(session).await
}
