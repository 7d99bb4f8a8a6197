use anyhow::Result;
use clap::Parser;
use program_health::cli::{Cli, Commands};
use program_health::commands::{assess, init, recommend};
use program_health::observability::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Assess {
            snapshot,
            format,
            output,
            top,
            as_of,
            config,
            plain,
            color,
            notify,
            verbosity,
        } => {
            init_tracing(verbosity);
            assess::assess_portfolio(assess::AssessConfig {
                snapshot,
                format,
                output,
                top,
                as_of,
                config,
                plain,
                color,
                notify,
            })
        }
        Commands::Recommend {
            snapshot,
            format,
            output,
            top,
            all,
            as_of,
            config,
            plain,
            color,
            verbosity,
        } => {
            init_tracing(verbosity);
            recommend::recommend(recommend::RecommendConfig {
                snapshot,
                format,
                output,
                top,
                all,
                as_of,
                config,
                plain,
                color,
            })
        }
        Commands::Init { force } => {
            init_tracing(0);
            init::init_config(force)
        }
    }
}
