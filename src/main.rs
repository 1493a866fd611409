use clap::{Parser, Subcommand};
use latency_stacked_bar::diagnostics;
use latency_stacked_bar::input;
use latency_stacked_bar::stacked_bar::{self, StackedBar, TimeUnit};
use latency_stacked_bar::view;
use latency_stacked_bar::{StageMarkers, StageRules};

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "latency-stacked-bar")]
#[command(about = "Per-stage latency breakdown of ROS2 path traces", long_about = None)]
struct Cli {
    /// Suppress warnings.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the stacked-bar table for a record file and write it as JSON.
    Report {
        #[arg(long)]
        records: String,

        /// JSON file overriding the stage markers.
        #[arg(long)]
        markers: Option<String>,

        #[arg(long, value_enum, default_value_t = TimeUnit::Ns)]
        unit: TimeUnit,

        #[arg(short = 'o', long)]
        out: String,
    },
    /// Print how each raw column is classified.
    Classify {
        #[arg(long)]
        records: String,

        #[arg(long)]
        markers: Option<String>,
    },
}

fn load_rules(markers: Option<&str>) -> Result<StageRules> {
    let markers = match markers {
        Some(path) => input::load_markers(path)?,
        None => StageMarkers::default(),
    };
    Ok(markers.compile()?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    diagnostics::set_quiet(cli.quiet);

    match cli.cmd {
        Commands::Report {
            records,
            markers,
            unit,
            out,
        } => {
            let rules = load_rules(markers.as_deref())?;
            let set = input::parse_records_file(&records)?;

            let stacked = StackedBar::with_rules(set, &rules)?;
            for column in stacked.dropped_columns() {
                diagnostics::warn(format!("column {} matches no stage, dropped", column));
            }

            let data = view::build_report_data(&stacked, unit);
            std::fs::write(&out, serde_json::to_string_pretty(&data)?)?;
            println!("Wrote {}", out);
        }
        Commands::Classify { records, markers } => {
            let rules = load_rules(markers.as_deref())?;
            let set = input::parse_records_file(&records)?;

            for column in set.columns() {
                match stacked_bar::classify_column(column, &rules) {
                    Some(label) => println!("{} -> {}", column, label),
                    None => println!("{} -> (dropped)", column),
                }
            }
        }
    }

    Ok(())
}
