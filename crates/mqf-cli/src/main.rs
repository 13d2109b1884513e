use clap::Parser;
use std::io::Write as _;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "mqf",
    about = "Rewrite single-quoted metadata titles and descriptions to double quotes",
    version
)]
struct Cli {
    /// Directory to scan recursively for .tsx and .jsx files (defaults to src)
    root: Option<PathBuf>,
    /// Print the summary as JSON after the report
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Report what would change without writing any file
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let root = cli
        .root
        .unwrap_or_else(|| PathBuf::from(mqf_core::DEFAULT_ROOT));
    let opts = mqf_core::FixOpts {
        dry_run: cli.dry_run,
    };

    let mut out = std::io::stdout().lock();
    let summary = match mqf_core::process(&root, opts, &mut out) {
        Ok(s) => s,
        Err(e) => {
            drop(out);
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    if cli.json {
        match serde_json::to_string(&summary) {
            Ok(s) => {
                writeln!(out, "{}", s).ok();
            }
            Err(e) => eprintln!("error encoding summary: {}", e),
        }
    }
    tracing::debug!(
        scanned = summary.scanned,
        modified = summary.modified,
        failed = summary.failed,
        "done"
    );
}

// Logs go to stderr so stdout stays the plain report.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
