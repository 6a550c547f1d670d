use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use colorforge::config::ChallengeConfig;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "output/session.json")]
    session: PathBuf,

    /// JSON file with challenge settings; explicit flags win over it
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a new reference order
    Shuffle(cmd::shuffle::ShuffleArgs),
    /// Score a frame's detections against the reference order
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Print or export the last analysis result
    Report(cmd::report::ReportArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let (cli_config, sub_matches) = match &cli.command {
        Commands::Shuffle(args) => (&args.config, matches.subcommand_matches("shuffle")),
        Commands::Analyze(args) => (&args.config, matches.subcommand_matches("analyze")),
        Commands::Report(args) => (&args.config, matches.subcommand_matches("report")),
    };

    let config = match (&cli.config, sub_matches) {
        (Some(path), Some(sub)) => {
            info!("⚙️  Loading settings from: {}", path.display());
            let mut file_config = ChallengeConfig::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ {}", e);
                process::exit(1);
            });
            file_config.merge_from_cli(cli_config, sub);
            file_config
        }
        _ => cli_config.clone(),
    };

    let result = match cli.command {
        Commands::Shuffle(args) => cmd::shuffle::run(args, &config, &cli.session),
        Commands::Analyze(args) => cmd::analyze::run(args, &config, &cli.session),
        Commands::Report(args) => cmd::report::run(args, &config, &cli.session),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
