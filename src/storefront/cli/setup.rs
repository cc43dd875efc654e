use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "storefront", bin_name = "storefront", version)]
#[command(about = "Inspect brand settings and variant attribute badges", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding brand.json (defaults to ./.storefront, then the user config dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the attribute badges of a variant
    #[command(alias = "b")]
    Badges {
        /// JSON file with a variant list or a product with `variants`
        file: PathBuf,

        /// Variant id to show (defaults to the first variant)
        #[arg(long = "variant", value_name = "ID")]
        variant: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Format a page title with the brand template
    Title {
        /// Page title
        title: String,
    },

    /// Print the copyright line
    Copyright {
        /// Year to print (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Print the effective brand settings as JSON
    Brand,
}
