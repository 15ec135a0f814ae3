use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    hangterm::cli::run_cli().await
}
