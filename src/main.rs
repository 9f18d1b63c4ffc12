use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use greenpath::cli::{Cli, Command, PlanArgs};
use greenpath::llm::API_KEY_ENV;
use greenpath::models::{Budget, Destination, MAX_DAYS, MIN_DAYS, Priority};
use greenpath::{Credential, GreenPathConfig, GreenPathError, Planner, TripRequest, export, logging, web};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        // Domain errors carry a user-facing message; everything else prints its chain
        match e.downcast_ref::<GreenPathError>() {
            Some(err) => eprintln!("❌ {}", err.user_message()),
            None => eprintln!("❌ {e:#}"),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = GreenPathConfig::load_from_path(cli.config.clone())
        .context("Failed to load configuration")?;
    logging::init(&config.logging, cli.verbose)?;
    debug!(?config, "Configuration loaded");

    match cli.command {
        Command::Plan(args) => plan(&config, args).await,
        Command::Options => {
            print_options();
            Ok(())
        }
        Command::Serve { port } => {
            let credential =
                Credential::from_sources(config.llm.api_key.as_deref(), std::env::var(API_KEY_ENV).ok());
            let planner = Planner::from_config(&config.llm, credential)?;
            web::run(planner, port.unwrap_or(config.server.port)).await
        }
    }
}

async fn plan(config: &GreenPathConfig, args: PlanArgs) -> Result<()> {
    let trip = TripRequest::new(args.destination, args.days, args.budget, args.priorities)?;

    let mut credential =
        Credential::from_sources(config.llm.api_key.as_deref(), std::env::var(API_KEY_ENV).ok());
    if credential.is_none() && !args.no_prompt {
        println!("⚠️  No OpenAI API key found.");
        credential = Credential::prompt_stdin().context("Failed to read API key")?;
    }

    let planner = Planner::from_config(&config.llm, credential)?;

    println!("🌿 GreenPath Nepal");
    println!("Travel Nepal beautifully, leave it even more beautiful");
    println!("नेपाल घुमौँ सुन्दर तरिकाले, छोडौँ अझ सुन्दर बनाएर।");
    println!();

    if !planner.has_credential() {
        return Err(GreenPathError::MissingCredential.into());
    }
    println!("AI is planning your sustainable trip...");

    let result = planner.plan(&trip).await?;

    println!("Your GreenPath Nepal Itinerary is Ready!");
    println!();
    println!("{}", result.raw_text);
    println!();
    println!("🌍 {}", result.footprint_message());

    if !args.no_export {
        let directory = args
            .output_dir
            .unwrap_or_else(|| PathBuf::from(&config.export.directory));
        let path = export::write_export(&result, &directory)?;
        println!("📄 Saved itinerary to {}", path.display());
    }

    Ok(())
}

fn print_options() {
    println!("Destinations:");
    for destination in Destination::ALL {
        println!("  {:<24} {}", destination.slug(), destination.label());
    }
    println!("Days: {MIN_DAYS}-{MAX_DAYS}");
    println!("Budgets:");
    for budget in Budget::ALL {
        println!("  {:<24} {}", budget.slug(), budget.label());
    }
    println!("Priorities:");
    for priority in Priority::ALL {
        println!("  {:<24} {}", priority.slug(), priority.label());
    }
}
