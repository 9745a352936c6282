mod apic;
mod blueprints;
mod config;
mod models;
mod services;
mod utils;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use apic::ApicClient;
use blueprints::Blueprint;
use config::Config;
use services::TenantExists;

/// Create a fabric tenant from a built-in blueprint
#[derive(Parser)]
#[command(name = "fabric-provision")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Tenant layout to create
    #[arg(long, short, value_enum, default_value_t = Blueprint::MpodPbr)]
    blueprint: Blueprint,

    /// Name or ID stored in the tenant description (prompted when omitted)
    #[arg(long, env = "FABRIC_OWNER")]
    owner: Option<String>,

    /// Build and check the tree, print it, and exit without contacting the APIC
    #[arg(long)]
    dry_run: bool,

    /// Print the submitted JSON after a successful run (always on for inter-epg-lab)
    #[arg(long)]
    show_config: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Credentials file first so it can feed both RUST_LOG and APIC_*
    if let Ok(path) = dotenvy::dotenv() {
        eprintln!("Loaded credentials from {}", path.display());
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fabric_provision=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => Ok(()),
        Err(e) => {
            if let Some(exists) = e.downcast_ref::<TenantExists>() {
                println!("\n{}\n", exists);
                std::process::exit(1);
            }
            Err(e)
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let owner = match &cli.owner {
        Some(owner) => owner.clone(),
        None => utils::prompt_owner()?,
    };
    let tenant = cli.blueprint.tenant_name();

    if cli.dry_run {
        let tree = services::prepare(cli.blueprint, &owner)?;
        tracing::info!("Dry run: {} objects for tenant {}", tree.len(), tenant);
        println!("{}", serde_json::to_string_pretty(&tree)?);
        return Ok(());
    }

    let cfg = Config::load()?;
    tracing::info!("Starting provisioning of {} ({:?})", tenant, cli.blueprint);
    tracing::info!("APIC: {}", cfg.apic_url);

    let mut session = ApicClient::new(&cfg)?;
    session.login().await?;

    let tree = services::provision(&session, cli.blueprint, &owner).await?;

    println!("\nNew Tenant, {}, has been created.\n", tenant);
    if let Some(summary) = cli.blueprint.summary() {
        println!("{}\n", summary);
    }
    if cli.show_config || cli.blueprint.always_shows_config() {
        println!("{}\n", serde_json::to_string_pretty(&tree)?);
    }
    Ok(())
}
