use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "character-cli")]
#[command(about = "Query a running character browser", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List characters, optionally filtered
    List {
        /// Case-insensitive name substring
        #[arg(long)]
        name: Option<String>,
        /// Exact species ("All" for any)
        #[arg(long)]
        species: Option<String>,
        /// Status to include; repeat for several
        #[arg(long)]
        status: Vec<String>,
    },
    /// Show one character
    Show { id: u32 },
    /// List the distinct statuses
    Statuses,
    /// Check service and catalog state
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let request = match cli.command {
        Commands::List { name, species, status } => {
            let mut query: Vec<(&str, String)> = Vec::new();
            if let Some(name) = name {
                query.push(("name", name));
            }
            if let Some(species) = species {
                query.push(("species", species));
            }
            query.extend(status.into_iter().map(|s| ("status", s)));

            client.get(format!("{}/api/characters", cli.url)).query(&query)
        }
        Commands::Show { id } => client.get(format!("{}/api/characters/{}", cli.url, id)),
        Commands::Statuses => client.get(format!("{}/api/statuses", cli.url)),
        Commands::Health => client.get(format!("{}/health", cli.url)),
    };

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
