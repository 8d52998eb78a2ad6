use anyhow::Result;
use clap::Parser;
use course_store::config;
use course_store::server;
use tracing_subscriber::EnvFilter;

/// In-memory course catalogue REST service.
#[derive(Parser)]
#[command(name = "course-store")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides `LISTEN`
    #[arg(short, long)]
    listen: Option<String>,

    /// Log format (`text` or `json`), overrides `LOG_FORMAT`
    #[arg(long)]
    log_format: Option<String>,

    /// Start with an empty store instead of the demo courses
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::Config::from_env()?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    if let Some(log_format) = cli.log_format {
        config.log_format = log_format;
    }
    if cli.no_seed {
        config.seed_courses = false;
    }
    config.validate()?;

    init_tracing(&config.log_level, &config.log_format);
    config.print_summary();

    server::run(config).await
}

fn init_tracing(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
