#[tokio::main]
async fn main() -> anyhow::Result<()> {
    civic_intel_server::start().await
}
