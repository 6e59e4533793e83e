#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dayplan_lib::run().await
}
