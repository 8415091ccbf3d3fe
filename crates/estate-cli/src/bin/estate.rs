use anyhow::Result;
use clap::{Parser, Subcommand};
use estate_cli::EstateClient;
use estate_core::{horizontal_distance, plan_coverage, rules};

#[derive(Parser, Debug)]
#[command(author, version, about = "Estate survey command line client", long_about = None)]
struct Args {
    /// Estate server URL
    #[arg(long, env = "ESTATE_URL", default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an estate
    CreateEstate {
        #[arg(long)]
        width: i64,
        #[arg(long)]
        length: i64,
    },
    /// Plant a tree on an estate
    AddTree {
        estate_id: String,
        #[arg(long, allow_hyphen_values = true)]
        x: i64,
        #[arg(long, allow_hyphen_values = true)]
        y: i64,
        #[arg(long, allow_hyphen_values = true)]
        height: i64,
    },
    /// Show tree height statistics for an estate
    Stats { estate_id: String },
    /// Show the drone survey distance for an estate
    DronePlan { estate_id: String },
    /// Compute a survey distance locally without a server
    Plan {
        #[arg(long)]
        width: i64,
        #[arg(long)]
        length: i64,
        /// Tree height, repeatable
        #[arg(long = "height")]
        heights: Vec<i64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = EstateClient::new(args.url);

    match args.command {
        Command::CreateEstate { width, length } => {
            let id = client.create_estate(width, length).await?;
            println!("Created estate: {}", id);
        }
        Command::AddTree {
            estate_id,
            x,
            y,
            height,
        } => {
            let id = client.add_tree(&estate_id, x, y, height).await?;
            println!("Planted tree: {}", id);
        }
        Command::Stats { estate_id } => {
            let stats = client.stats(&estate_id).await?;
            println!("Trees:  {}", stats.count);
            println!("Min:    {}", stats.min);
            println!("Max:    {}", stats.max);
            println!("Median: {}", stats.median);
        }
        Command::DronePlan { estate_id } => {
            let plan = client.drone_plan(&estate_id).await?;
            println!("Distance: {}", plan.distance);
        }
        Command::Plan {
            width,
            length,
            heights,
        } => {
            let dims = rules::validate_dimensions(width, length)?;
            let heights = heights
                .into_iter()
                .map(|h| rules::validate_tree(0, 0, h).map(|t| t.height))
                .collect::<Result<Vec<_>, _>>()?;

            let sweep = horizontal_distance(dims.width, dims.length);
            let total = plan_coverage(dims.width, dims.length, heights.iter().copied());
            println!("Sweep:    {}", sweep);
            println!("Climb:    {}", total - sweep);
            println!("Distance: {}", total);
        }
    }

    Ok(())
}
