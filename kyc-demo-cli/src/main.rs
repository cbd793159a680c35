//! KYC Demo CLI
//!
//! Command-line front end for the Aadhaar → PAN → Business verification demo.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use kyc_demo_cli::commands;
use kyc_demo_core::Step;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kyc-demo")]
#[command(about = "KYC Demo CLI - Aadhaar, PAN and business verification walkthrough", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Custom storage directory
    #[arg(long, global = true, env = "KYC_DEMO_DIR")]
    storage_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show verification progress and the next step
    Status,

    /// Open a page by route (/, /aadhaar, /pan, /business, /success)
    Open {
        /// Route path
        path: String,
    },

    /// Verify Aadhaar by number or via DigiLocker
    Aadhaar {
        /// 12-digit Aadhaar number
        #[arg(short, long, conflicts_with = "digilocker")]
        number: Option<String>,

        /// Verify through DigiLocker instead of entering a number
        #[arg(long)]
        digilocker: bool,
    },

    /// Verify PAN
    Pan {
        /// PAN in the form ABCDE1234F
        number: Option<String>,
    },

    /// Verify business details and upload a proof document
    Business {
        /// Business name
        #[arg(long)]
        name: Option<String>,

        /// Registration number
        #[arg(long)]
        registration: Option<String>,

        /// GSTIN (optional)
        #[arg(long)]
        gstin: Option<String>,

        /// Path to the proof document (PDF, JPG, PNG; max 5MB)
        #[arg(short, long)]
        document: Option<String>,

        /// Media type of the document (defaults to one derived from the extension)
        #[arg(long)]
        media_type: Option<String>,
    },

    /// Continue from a step to the next one
    Next {
        /// Step to continue from
        #[arg(value_enum)]
        from: StepArg,
    },

    /// Show the completion summary and save kyc-certificate.txt
    Certificate {
        /// Directory to write the certificate to (defaults to the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Clear all progress and start over
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Walk through all remaining steps interactively
    Wizard {
        /// Directory to write the certificate to at the end
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StepArg {
    Start,
    Aadhaar,
    Pan,
    Business,
    Success,
}

impl From<StepArg> for Step {
    fn from(arg: StepArg) -> Self {
        match arg {
            StepArg::Start => Step::Start,
            StepArg::Aadhaar => Step::Aadhaar,
            StepArg::Pan => Step::Pan,
            StepArg::Business => Step::Business,
            StepArg::Success => Step::Success,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose {
        "kyc_demo_cli=debug,kyc_demo_core=debug"
    } else {
        "kyc_demo_cli=info,kyc_demo_core=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Setup storage directory
    let storage_dir = cli.storage_dir.unwrap_or_else(|| {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("kyc-demo")
    });
    tracing::debug!(storage_dir = %storage_dir.display(), "using storage directory");

    // Dispatch commands
    match cli.command {
        Commands::Status => {
            commands::status::run(&storage_dir, cli.verbose).await?;
        }
        Commands::Open { path } => {
            commands::open::run(&storage_dir, &path).await?;
        }
        Commands::Aadhaar { number, digilocker } => {
            commands::aadhaar::run(&storage_dir, number, digilocker).await?;
        }
        Commands::Pan { number } => {
            commands::pan::run(&storage_dir, number).await?;
        }
        Commands::Business {
            name,
            registration,
            gstin,
            document,
            media_type,
        } => {
            let args = commands::business::BusinessArgs {
                name,
                registration,
                gstin,
                document,
                media_type,
            };
            commands::business::run(&storage_dir, args).await?;
        }
        Commands::Next { from } => {
            commands::next::run(&storage_dir, from.into()).await?;
        }
        Commands::Certificate { output } => {
            commands::certificate::run(&storage_dir, output).await?;
        }
        Commands::Reset { yes } => {
            commands::reset::run(&storage_dir, yes).await?;
        }
        Commands::Wizard { output } => {
            commands::wizard::run(&storage_dir, output).await?;
        }
    }

    Ok(())
}
