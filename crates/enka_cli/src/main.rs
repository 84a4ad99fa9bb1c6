use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use enka_client::EnkaClient;
use enka_core::core_api::{PlayerProfile, validate_response};
use enka_render::{
    default_csv_filename, render_artifact_table, render_character_details, render_player_summary,
    write_artifact_csv,
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(value_name = "UID")]
    uid: u64,
    #[arg(long, value_name = "NAME")]
    character: Option<String>,
    #[arg(long)]
    csv: bool,
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
    #[arg(long)]
    json: bool,
    #[arg(long = "base-url", value_name = "URL", default_value = enka_client::DEFAULT_BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if cli.csv && cli.character.is_none() {
        eprintln!("--csv requires --character <NAME>");
        process::exit(2);
    }
    if cli.output.is_some() && !cli.csv {
        eprintln!("--output requires --csv");
        process::exit(2);
    }

    if !cli.json {
        println!("Fetching player information for UID: {}", cli.uid);
        if let Some(name) = &cli.character {
            println!("Looking for character: {name}");
        }
        println!("{}", "=".repeat(70));
    }

    let client = EnkaClient::with_base_url(&cli.base_url);
    let payload = client.fetch_player(cli.uid).await.unwrap_or_else(|e| {
        eprintln!("Error fetching UID {}: {e}", cli.uid);
        process::exit(1);
    });

    if cli.json {
        let rendered = serde_json::to_string_pretty(&payload).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON output: {e}");
            process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    let profile = validate_response(&payload).unwrap_or_else(|e| {
        eprintln!("Error validating response for UID {}: {e}", cli.uid);
        process::exit(1);
    });

    match &cli.character {
        Some(name) => print_character_view(&profile, name, cli.csv, cli.output.as_deref()),
        None => print_profile_view(&profile),
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

fn print_profile_view(profile: &PlayerProfile) {
    println!();
    print!("{}", render_player_summary(profile));
    println!();
    println!("=== CHARACTERS ({} total) ===", profile.characters.len());
    for record in &profile.characters {
        println!();
        print!("{}", render_character_details(record));
    }
}

fn print_character_view(profile: &PlayerProfile, name: &str, csv: bool, output: Option<&Path>) {
    let Some(record) = profile.find_character(name) else {
        eprintln!("Character '{name}' not found in this showcase");
        eprintln!();
        eprintln!("Available characters:");
        for available in profile.character_names() {
            eprintln!("  - {available}");
        }
        process::exit(1);
    };

    let display_name = record.display_name();
    println!();
    print!("{}", render_character_details(record));

    let rows = record.artifact_rows();
    println!();
    print!("{}", render_artifact_table(&display_name, &rows));

    if csv {
        let path = match output {
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(default_csv_filename(&display_name)),
        };
        write_artifact_csv(&path, &rows).unwrap_or_else(|e| {
            eprintln!("Error writing {}: {e}", path.display());
            process::exit(1);
        });
        println!();
        println!("Artifact table exported to '{}'", path.display());
    }
}
