use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use finder_dev::{Config, ContentLoader, ContentSource, ContentSummary};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding config/site-data.json, data/home.json and data/splash.json.
    /// Uses the bundled content when omitted.
    #[arg(short, long)]
    content_dir: Option<PathBuf>,

    /// Milliseconds between frames
    #[arg(short, long, default_value_t = 16, value_parser = clap::value_parser!(u64).range(1..))]
    tick_rate: u64,

    /// File to write logs to
    #[arg(short, long, default_value = "finder-dev.log")]
    log_file: PathBuf,

    /// Validate the content documents and exit
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let content = match args.content_dir {
        Some(dir) => ContentSource::Directory(dir),
        None => ContentSource::Bundled,
    };

    if args.check {
        return check(ContentLoader::new(content));
    }

    let _guard = match finder_dev::logging::init(&args.log_file) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let config = Config {
        content,
        tick_rate: Duration::from_millis(args.tick_rate),
    };

    if let Err(e) = finder_dev::run(config).await {
        tracing::error!(error = %e, "exiting");
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn check(loader: ContentLoader) -> ExitCode {
    match ContentSummary::load(&loader) {
        Ok(summary) => {
            println!("{}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
