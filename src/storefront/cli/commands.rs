use super::setup::{Cli, Commands, OutputFormat};
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use storefront::attributes::extract_optional_attributes;
use storefront::badges::{render_badges, render_badges_text};
use storefront::brand::BrandConfig;
use storefront::error::Result;
use storefront::model::parse_variants;
use tracing_subscriber::EnvFilter;

const LOCAL_CONFIG_DIR: &str = ".storefront";

struct AppContext {
    config_dir: Option<PathBuf>,
    use_color: bool,
}

impl AppContext {
    /// Loads `brand.json` on demand; badge rendering never reads it.
    fn brand(&self) -> Result<BrandConfig> {
        match &self.config_dir {
            Some(dir) => BrandConfig::load(dir),
            None => Ok(BrandConfig::default()),
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli);
    let ansi = !cli.no_color && Term::stderr().features().colors_supported();
    init_logging(cli.verbose, ansi);

    match cli.command {
        Commands::Badges {
            file,
            variant,
            format,
        } => handle_badges(&ctx, &file, variant.as_deref(), format),
        Commands::Title { title } => handle_title(&ctx, &title),
        Commands::Copyright { year } => handle_copyright(&ctx, year),
        Commands::Brand => handle_brand(&ctx),
    }
}

fn init_logging(verbose: bool, ansi: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("storefront=debug")
    } else {
        EnvFilter::new("warn")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(ansi)
        .try_init();
}

fn init_context(cli: &Cli) -> AppContext {
    AppContext {
        config_dir: resolve_config_dir(cli.config_dir.as_deref()),
        use_color: !cli.no_color && Term::stdout().features().colors_supported(),
    }
}

fn resolve_config_dir(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = explicit {
        return Some(dir.to_path_buf());
    }

    let local = std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(LOCAL_CONFIG_DIR);
    if local.is_dir() {
        return Some(local);
    }

    ProjectDirs::from("com", "storefront", "storefront").map(|d| d.config_dir().to_path_buf())
}

fn handle_badges(
    ctx: &AppContext,
    file: &Path,
    variant: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let content = fs::read_to_string(file)?;
    let variants = parse_variants(&content)?;
    tracing::debug!(count = variants.len(), "loaded variants");

    let attributes = extract_optional_attributes(&variants, variant);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&attributes)?),
        OutputFormat::Html => {
            if let Some(html) = render_badges(&attributes)? {
                println!("{}", html);
            }
        }
        OutputFormat::Text => {
            if let Some(text) = render_badges_text(&attributes, ctx.use_color)? {
                print!("{}", text);
            }
        }
    }
    Ok(())
}

fn handle_title(ctx: &AppContext, title: &str) -> Result<()> {
    println!("{}", ctx.brand()?.format_page_title(title));
    Ok(())
}

fn handle_copyright(ctx: &AppContext, year: Option<i32>) -> Result<()> {
    println!("{}", ctx.brand()?.copyright_text(year));
    Ok(())
}

fn handle_brand(ctx: &AppContext) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&ctx.brand()?)?);
    Ok(())
}
