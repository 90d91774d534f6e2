use std::path::PathBuf;

use clap::Parser;

use foodgram_pages::{config::Config, site::Site, style::StyleRegistry, template::Shell};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(help = "The destination directory.")]
    dest: PathBuf,
    #[arg(short, long, help = "Path to the site configuration file")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Initialize Logging.
    let log_environ = env_logger::Env::new()
        .filter("FOODGRAM_LOG")
        .write_style("FOODGRAM_LOG_STYLE");
    let mut log_builder = env_logger::Builder::new();

    log_builder.filter_level(log::LevelFilter::Info);
    log_builder.parse_env(log_environ);
    log_builder.init();

    // Parse Arguments.
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let shell = match &config.templates {
        Some(dir) => Shell::from_dir(dir)?,
        None => Shell::new()?,
    };
    let styles = match &config.styles {
        Some(path) => StyleRegistry::from_yaml(&std::fs::read_to_string(path)?)?,
        None => StyleRegistry::default(),
    };

    log::info!("Outputting to `{}`", args.dest.display());

    Site::new(config.site_url, shell, styles).build(&args.dest)?;

    log::info!("Done.");

    Ok(())
}
