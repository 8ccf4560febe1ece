use clap::Parser;

use emojiterm::cli::{self, Args};
use emojiterm::config::{self, Settings};

/// Initialize logging; `RUST_LOG` overrides the default `warn` filter.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment (including RUST_LOG)
    let env_file = config::load_env();
    init_logging();
    if let Some(path) = env_file {
        log::debug!("Loaded environment from {}", path.display());
    }

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are not failures; everything else exits 1
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = cli::run(&args, &settings).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
