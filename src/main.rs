mod cli;
mod search;

#[tokio::main]
async fn main() {
    // A local .env may carry RUST_LOG
    dotenvy::dotenv().ok();
    env_logger::init();

    // Every failure ends up here, printed once; the exit status stays 0
    if let Err(e) = cli::run().await {
        eprintln!("{e}");
    }
}
