use anyhow::Context;

mod config;
mod error;
mod menu;
mod users;

use crate::config::AppConfig;
use crate::menu::Menu;
use crate::users::repo::UserStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "usersdb=warn".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    // stdout belongs to the menu
    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let config = AppConfig::from_env();
    tracing::debug!(?config, "configuration loaded");

    let store = UserStore::open(&config.database_path)
        .await
        .context("startup")?;

    let outcome = {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut menu = Menu::new(&store, &config, stdin.lock(), stdout.lock());
        menu.run().await
    };

    store.close().await;
    outcome
}
