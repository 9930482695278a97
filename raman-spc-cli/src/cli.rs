use clap::{Parser, Subcommand, ValueEnum};
use raman_spc::BuilderKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "raman-spc", about = "Convert SPC Raman files to RDF", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to config file (TOML, or JSON by extension)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Options shared by commands that run the decoder
#[derive(clap::Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// Directory for staged copies of the input
    #[arg(long, env = "RAMAN_SPC_STAGING_DIR")]
    pub staging_dir: Option<PathBuf>,

    /// R front end used to decode SPC files
    #[arg(long, env = "RAMAN_SPC_RSCRIPT")]
    pub rscript: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert an SPC file to N-Triples
    Convert {
        /// SPC file to convert
        file: PathBuf,

        /// Base identifier of the file (defaults to urn:raman:resource/<file name>)
        #[arg(long)]
        base: Option<String>,

        /// Statement layout
        #[arg(long, value_enum)]
        builder: Option<BuilderArg>,

        /// Write N-Triples here instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Decode an SPC file and print its attribute tree as JSON
    Inspect {
        /// SPC file to decode
        file: PathBuf,

        #[command(flatten)]
        engine: EngineArgs,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BuilderArg {
    /// One predicate per property on the file node
    Compact,
    /// One described node per property
    Verbose,
}

impl From<BuilderArg> for BuilderKind {
    fn from(arg: BuilderArg) -> Self {
        match arg {
            BuilderArg::Compact => BuilderKind::Compact,
            BuilderArg::Verbose => BuilderKind::Verbose,
        }
    }
}
