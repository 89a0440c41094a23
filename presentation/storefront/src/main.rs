use std::sync::Arc;

use dotenvy::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};

mod command;
mod config;
mod gateway;
mod render;
mod session;
mod state;

use command::{Command, HELP};
use config::StorefrontConfig;
use gateway::HttpRecommendationGateway;
use logger::TracingLogger;
use session::{AskOutcome, Storefront};

/// Terminal storefront
///
/// Shows the static catalog, filters it by category and asks the
/// recommendation server for picks matching a free-text preference.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Quiet by default so log lines do not interleave with the product list.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = StorefrontConfig::from_env();
    let gateway = HttpRecommendationGateway::new(&config.api_url);
    tracing::debug!(endpoint = gateway.endpoint(), "Storefront starting");
    println!("Our Latest Products (recommendations from {})", gateway.endpoint());

    let logger = Arc::new(TracingLogger::for_component("storefront"));
    let mut storefront =
        Storefront::new(catalog::sample::sample_catalog(), Arc::new(gateway), logger);

    print_screen(&storefront);
    println!("\n{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = Command::parse(&line) else {
            continue;
        };

        match command {
            Command::List => print_screen(&storefront),
            Command::Categories => println!("{}", storefront.categories().join("  ")),
            Command::Category(name) => {
                if storefront.select_category(&name) {
                    print_screen(&storefront);
                } else {
                    println!("Clear the recommendations first to browse categories.");
                }
            }
            Command::Ask(preference) => {
                println!("Thinking...");
                match storefront.ask(&preference).await {
                    AskOutcome::Skipped => println!("Tell me what you are looking for first."),
                    AskOutcome::Resolved(count) => {
                        println!("{}", render::render_summary(count));
                        print_screen(&storefront);
                    }
                    AskOutcome::Unchanged => print_screen(&storefront),
                    AskOutcome::Failed(alert) => eprintln!("{}", alert),
                }
            }
            Command::Clear => {
                storefront.clear();
                print_screen(&storefront);
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
            Command::Unknown(input) => println!("Unknown command: {} (type `help`)", input),
        }
    }

    Ok(())
}

fn print_screen(storefront: &Storefront) {
    if let Some(tabs) = render::render_tabs(&storefront.categories(), storefront.state()) {
        println!("\n{}", tabs);
    }
    println!("\n{}", render::render_products(&storefront.displayed()));
}
