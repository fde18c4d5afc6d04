use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "kubecomply",
    version,
    about = "Scan a running cluster or local manifests against compliance frameworks"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the current cluster or yaml/json files
    Scan(ScanCmd),
    /// Submit previously computed artifacts to the backend
    Submit {
        #[command(subcommand)]
        command: SubmitCommands,
    },
}

#[derive(Args, Debug)]
pub struct ScanCmd {
    #[command(flatten)]
    pub opts: ScanOpts,
    #[command(subcommand)]
    pub target: Option<ScanTarget>,
}

#[derive(Subcommand, Debug)]
pub enum ScanTarget {
    /// Scan one or more frameworks, e.g. `framework nsa,mitre`
    Framework {
        /// Comma-separated framework names
        names: String,
        /// Input sources: glob patterns, `-` for stdin, or a URL
        sources: Vec<String>,
    },
    /// Scan individual controls by name
    Control {
        /// Comma-separated control names
        names: String,
        /// Input sources: glob patterns, `-` for stdin, or a URL
        sources: Vec<String>,
    },
}

#[derive(Args, Debug)]
pub struct ScanOpts {
    #[arg(
        long,
        global = true,
        help = "Send the scan results to the management backend"
    )]
    pub submit: bool,
    #[arg(
        long,
        global = true,
        help = "Keep the scan results local, never report them to the backend"
    )]
    pub keep_local: bool,
    #[arg(
        short = 'e',
        long,
        global = true,
        default_value = "",
        help = "Namespaces to exclude from scanning, comma separated. Recommended: kube-system,kube-public"
    )]
    pub exclude_namespaces: String,
    #[arg(
        long,
        global = true,
        default_value = "",
        help = "Scan specific namespaces, comma separated. e.g: --include-namespaces ns-a,ns-b"
    )]
    pub include_namespaces: String,
    #[arg(
        short = 'f',
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::PrettyPrinter,
        help = "Output format"
    )]
    pub format: OutputFormat,
    #[arg(
        short = 'o',
        long,
        global = true,
        help = "Output file. Print output to file and not stdout"
    )]
    pub output: Option<PathBuf>,
    #[arg(short = 's', long, global = true, help = "Silence progress messages")]
    pub silent: bool,
    #[arg(
        short = 't',
        long,
        global = true,
        default_value_t = 0,
        help = "Percent below which the scan fails and returns exit code 1"
    )]
    pub fail_threshold: u16,
    #[arg(
        long,
        global = true,
        value_delimiter = ',',
        help = "Load policy objects from the given paths instead of downloading"
    )]
    pub use_from: Vec<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Load policy objects from the default local path"
    )]
    pub use_default: bool,
    #[arg(long, global = true, help = "Path to an exceptions object")]
    pub exceptions: Option<PathBuf>,
    #[arg(long, global = true, help = "Path to a controls-config object")]
    pub controls_config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum SubmitCommands {
    /// Submit a pre-scanned results file. The file must be in json format
    Results { file: PathBuf },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    PrettyPrinter,
    Json,
    Junit,
    Prometheus,
}
