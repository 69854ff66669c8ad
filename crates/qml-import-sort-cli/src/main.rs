use anyhow::{Result, bail};
use clap::Parser;
use qml_import_sort_config::Config;
use qml_import_sort_engine::{ProcessOptions, process_files, process_reader};
use std::{
    io,
    path::{Path, PathBuf},
    process,
};

#[derive(Parser)]
#[command(name = "qmlimportsort")]
#[command(about = "Sorts and groups the pragma and import statements of QML files", long_about = None)]
#[command(version = concat!("v", env!("CARGO_PKG_VERSION")))]
struct Cli {
    /// Modify files in-place (only valid with files)
    #[arg(short, long)]
    in_place: bool,

    /// Configuration file [default: ~/.config/qml-import-sort/config.toml]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Log only errors
    #[arg(short, long)]
    quiet: bool,

    /// QML files to organize; standard input is read when none are given
    files: Vec<PathBuf>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version exit with 0, usage errors with 1.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };
    init_logging(&cli);

    // Library errors already carry their cause in the message.
    if let Err(e) = run(cli) {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else if cli.quiet {
        log::LevelFilter::Error
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    if cli.in_place && cli.files.is_empty() {
        bail!("error: --in-place can only be used with files");
    }

    let config = load_config(cli.config.as_deref())?.unwrap_or_default();
    let mut stdout = io::stdout().lock();

    let result = if cli.files.is_empty() {
        log::debug!("reading document from standard input");
        process_reader(io::stdin().lock(), &mut stdout)
    } else {
        let files = config.exclusions()?.filter(cli.files);
        let options = ProcessOptions {
            in_place: cli.in_place || config.in_place,
        };
        process_files(&files, options, &mut stdout)
            .map(|count| log::info!("processed {count} file(s)"))
    };

    match result {
        // The reader of our output went away; nothing left to report.
        Err(e) if e.is_broken_pipe() => Ok(()),
        other => Ok(other?),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Option<Config>> {
    let Some(path) = explicit else {
        let config_path = Config::config_path();
        log::debug!("Config path: {}", config_path.display());
        return Ok(Config::load()?);
    };

    if !path.exists() {
        bail!("config file '{}' does not exist", path.display());
    }
    Ok(Config::load_from_path(path)?)
}
