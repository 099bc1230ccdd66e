//! 数据填充入口
//!
//! 清空并重建一套 K-12 示例数据集，逻辑在 `runtime::seeder` 中。

use dotenv::dotenv;

use rust_schoolsystem::config::AppConfig;
use rust_schoolsystem::runtime::seeder;

#[tokio::main]
async fn main() {
    dotenv().ok();

    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.app.log_level))
        .init();

    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    if let Err(e) = seeder::run().await {
        tracing::error!("Seeding failed: {}", e);
        std::process::exit(1);
    }
}
