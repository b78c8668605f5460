#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = scholarship_portal::run().await {
        eprintln!("scholarship-portal fatal: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
