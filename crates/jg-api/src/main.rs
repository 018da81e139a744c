#[tokio::main]
async fn main() {
    if let Err(err) = jg_api::run().await {
        tracing::error!(error = %err, "jg-api failed");
        std::process::exit(1);
    }
}
