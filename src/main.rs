//! Command-line front end of the Visual Genome Designer.
//!
//! Replays a designer script against a fresh session and prints the
//! DNA-Lang export or the lattice summary.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use genome_designer::script::run_script;
use genome_designer::{DesignerConfig, DesignerSession, Dialect, GateKind};

/// Visual Genome Designer - circuit layout and DNA-Lang export
#[derive(Parser)]
#[command(name = "genome-designer")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a script and print the DNA-Lang export
    Export {
        #[command(flatten)]
        session: SessionArgs,

        /// Lane notation of the export
        #[arg(short, long, env = "GENOME_DIALECT")]
        dialect: Option<Dialect>,

        /// Write the export to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replay a script and print the lattice summary as JSON
    Summary {
        #[command(flatten)]
        session: SessionArgs,
    },

    /// List the gate catalog
    Palette,
}

#[derive(Args)]
struct SessionArgs {
    /// Designer script to replay
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// JSON session config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial lane count (1-8)
    #[arg(short, long, env = "GENOME_LANES")]
    lanes: Option<usize>,

    /// Start from an empty grid instead of the seeded layout
    #[arg(long)]
    empty: bool,
}

impl SessionArgs {
    fn load_config(&self) -> Result<DesignerConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = read(path)?;
                DesignerConfig::from_json(&text)
                    .with_context(|| format!("invalid config {}", path.display()))?
            }
            None => DesignerConfig::default(),
        };
        if let Some(lanes) = self.lanes {
            config.lanes = lanes;
        }
        if self.empty {
            config.seeded = false;
        }
        Ok(config)
    }

    fn build(&self, dialect: Option<Dialect>) -> Result<DesignerSession> {
        let mut config = self.load_config()?;
        if let Some(dialect) = dialect {
            config.dialect = dialect;
        }
        debug!(?config, "starting session");

        let mut session = DesignerSession::new(&config);
        if let Some(path) = &self.script {
            let script = read(path)?;
            let outcomes = run_script(&mut session, &script)
                .with_context(|| format!("script {} failed", path.display()))?;
            info!(commands = outcomes.len(), "script replayed");
        }
        Ok(session)
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Export {
            session,
            dialect,
            output,
        } => {
            let mut session = session.build(dialect)?;
            let text = session.export();
            match output {
                Some(path) => {
                    fs::write(&path, text)
                        .with_context(|| format!("cannot write {}", path.display()))?;
                    info!(path = %path.display(), "export written");
                }
                None => print!("{text}"),
            }
        }
        Commands::Summary { session } => {
            let session = session.build(None)?;
            println!("{}", session.summary().to_json()?);
        }
        Commands::Palette => {
            for kind in GateKind::ALL {
                let span = if kind.is_two_qubit() { "2q" } else { "1q" };
                println!(
                    "{:<8} {:<4} {:<8} {span}  {}",
                    kind.id(),
                    kind.symbol(),
                    kind.name(),
                    kind.description()
                );
            }
        }
    }

    Ok(())
}
