mod prompt;
mod public_ip;
mod settings;

use clap::Parser;
use colored::Colorize;
use fleetkey_cloud::credentials::ensure_dir;
use fleetkey_cloud::{AccessPipeline, AccessReport, AccessRequest, CredentialOutcome, FleetService};
use fleetkey_cloud_aws::GameLiftService;
use public_ip::HttpIpLookup;
use settings::Settings;

#[derive(Parser)]
#[command(name = "fleetkey")]
#[command(version)]
#[command(
    about = "Open SSH/RDP on a GameLift fleet for your IP and save instance credentials",
    long_about = "Prompts for an output directory, confirms the AWS region and asks for a \
                  fleet id (fleet-...) or build id (build-...). Every instance of the \
                  resolved GameLift fleets gets its temporary credentials written to \
                  <output>/<fleet_id>/<instance_id>/Info.txt, plus PrivateKey.pem on Linux."
)]
struct Cli {}

#[tokio::main]
async fn main() {
    let _cli = Cli::parse();

    // ログは stderr、プロンプトとサマリーは stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run().await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    println!("{}", "🔑 fleetkey".blue().bold());
    println!();

    let output_dir = prompt::output_dir()?;
    ensure_dir(&output_dir).await;

    let service = GameLiftService::from_env().await;
    prompt::confirm_region(service.region())?;

    let target = prompt::target()?;
    println!();

    let ip_source = HttpIpLookup::new(&settings.ip_lookup_url);
    let request = AccessRequest { output_dir, target };
    let report = AccessPipeline::new(&service, &ip_source)
        .run(&request)
        .await?;

    print_summary(&report);
    Ok(())
}

fn print_summary(report: &AccessReport) {
    println!();
    println!("{}", "Summary".bold());
    println!("  Public IP: {}", report.public_ip.to_string().cyan());

    for fleet in &report.fleets {
        let status = match (&fleet.permissions, &fleet.port_update_error) {
            (None, _) => "skipped".yellow(),
            (Some(_), Some(_)) => "port update failed".red(),
            (Some(rules), None) => format!("{} rule(s) opened", rules.len()).green(),
        };
        println!(
            "  {} ({} instance(s)): {}",
            fleet.fleet_id.cyan(),
            fleet.instances.len(),
            status
        );
    }

    for entry in &report.instances {
        let instance = &entry.instance;
        match &entry.outcome {
            CredentialOutcome::Saved(saved) => println!(
                "  {} {} [{}] → {}",
                "✓".green(),
                instance.instance_id,
                instance.os(),
                saved.dir.display()
            ),
            CredentialOutcome::Missing => println!(
                "  {} {} [{}] no credentials returned",
                "✗".red(),
                instance.instance_id,
                instance.os()
            ),
            CredentialOutcome::Failed(reason) => println!(
                "  {} {} [{}] {}",
                "✗".red(),
                instance.instance_id,
                instance.os(),
                reason
            ),
        }
    }

    println!();
    let line = format!(
        "{} saved, {} skipped, {} port update(s) failed",
        report.saved_count(),
        report.skipped_count(),
        report.failed_port_updates()
    );
    if report.skipped_count() == 0 && report.failed_port_updates() == 0 {
        println!("{}", line.green().bold());
    } else {
        println!("{}", line.yellow().bold());
    }
}
