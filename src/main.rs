use clap::{Parser, Subcommand};
use repoclean::{Error, Result, cmd};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the repoclean application
#[derive(Parser)]
#[command(name = "repoclean")]
#[command(about = "Apply retention rules to CCDB object repositories")]
#[command(version)]
struct Cli {
   #[command(subcommand)]
   command: Cmd,
}

/// Available subcommands for repoclean
#[derive(Subcommand)]
enum Cmd {
   #[command(about = "Apply a retention rule to one or more object paths")]
   Run {
      #[arg(short = 'r', long, help = "Rule name (see 'repoclean rules')")]
      rule: String,

      #[arg(required = true, help = "Object path(s), or patterns, to process")]
      paths: Vec<String>,

      #[arg(
         long,
         default_value = "0",
         help = "Grace period in minutes during which new versions are never deleted"
      )]
      delay: i64,

      #[arg(
         long,
         default_value = "0",
         help = "Only consider versions created after this timestamp (epoch ms)"
      )]
      from: i64,

      #[arg(
         long,
         default_value_t = i64::MAX,
         help = "Only consider versions created before this timestamp (epoch ms)"
      )]
      to: i64,

      #[arg(long = "extra", value_name = "KEY=VALUE", help = "Extra rule parameter (repeatable)")]
      extra: Vec<String>,

      #[arg(long, help = "JSON output")]
      json: bool,
   },

   #[command(about = "List versions stored at an object path")]
   Versions {
      #[arg(help = "Object path to enumerate")]
      path: String,

      #[arg(long, help = "JSON output")]
      json: bool,
   },

   #[command(about = "List registered retention rules")]
   Rules {
      #[arg(long, help = "JSON output")]
      json: bool,
   },

   #[command(about = "Run health checks and report status")]
   Health {
      #[arg(long, help = "JSON output")]
      json: bool,
   },
}

#[tokio::main]
async fn main() {
   tracing_subscriber::fmt()
      .with_env_filter(EnvFilter::from_default_env().add_directive(Level::WARN.into()))
      .init();

   let cli = Cli::parse();
   if let Err(err) = run(cli).await {
      if !matches!(err, Error::Reported { .. }) {
         eprintln!("{err}");
      }
      std::process::exit(err.exit_code());
   }
}

async fn run(cli: Cli) -> Result<()> {
   match cli.command {
      Cmd::Run { rule, paths, delay, from, to, extra, json } => {
         cmd::run::execute(rule, paths, delay, from, to, extra, json).await
      },
      Cmd::Versions { path, json } => cmd::versions::execute(path, json).await,
      Cmd::Rules { json } => cmd::rules::execute(json),
      Cmd::Health { json } => cmd::health::execute(json).await,
   }
}
