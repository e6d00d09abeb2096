use anyhow::Context;
use artic_browser::{browse, catalog, cli, config, render, session};
use catalog::{CatalogClient, CatalogSource};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use session::BrowseSession;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load().context("設定ファイルの読み込みに失敗")?;

    match cli.command {
        Commands::Page { page, json } => {
            let client = CatalogClient::from_config(&config)?;
            if json {
                let result = client
                    .fetch_page(page)
                    .await
                    .with_context(|| format!("ページ{}の取得に失敗", page))?;
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            let mut session = BrowseSession::new(client);
            session.open(page).await;
            let controller = session.controller();
            if let Some(err) = controller.last_error() {
                anyhow::bail!("ページ{}の取得に失敗: {}", page, err);
            }
            println!("{}", render::render_summary(controller));
            println!("{}", render::render_page(controller));
        }

        Commands::Browse { page } => {
            let client = CatalogClient::from_config(&config)?;
            println!("🖼  artic - {}\n", client.endpoint());
            let mut session = BrowseSession::new(client);
            browse::run_browse(&mut session, page).await?;
        }

        Commands::Config { set_endpoint, set_timeout, show } => {
            let mut config = config;

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                println!("✔ エンドポイントを設定しました");
            }

            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
                println!("✔ タイムアウトを設定しました");
            }

            if show {
                println!("設定:");
                println!("  エンドポイント: {}", config.resolved_endpoint());
                println!(
                    "  タイムアウト: {}",
                    config
                        .timeout_seconds
                        .map(|s| format!("{}秒", s))
                        .unwrap_or_else(|| "なし".to_string())
                );
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
