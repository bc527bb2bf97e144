use anyhow::{Context, Result};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::env;
use std::io;
use std::path::PathBuf;
use todolist::cli::print_help;
use todolist::config::Config;
use todolist::shell::Shell;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let binary_name = args.first().map(String::as_str).unwrap_or("todolist");

    let mut config_path: Option<PathBuf> = None;
    let mut title: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" | "help" => {
                print_help(binary_name);
                return Ok(());
            }
            "--config" | "-c" => {
                let value = args.get(i + 1).context("--config needs a path")?;
                config_path = Some(PathBuf::from(value));
                i += 1;
            }
            "--title" | "-t" => {
                let value = args.get(i + 1).context("--title needs a value")?;
                title = Some(value.clone());
                i += 1;
            }
            other => anyhow::bail!("Unknown argument '{}' (see --help)", other),
        }
        i += 1;
    }

    let path = match config_path {
        Some(p) => p,
        None => Config::default_path()?,
    };
    let loaded = Config::load_optional(&path)?;
    let found = loaded.is_some();
    let mut config = loaded.unwrap_or_default();
    if let Some(t) = title {
        config.title = t;
    }

    // Logs go to stderr so they never interleave with command output.
    TermLogger::init(
        config.level_filter(),
        ConfigBuilder::new().build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;
    if !found {
        log::info!("No config at '{}', using defaults", path.display());
    }
    log::info!("Starting session '{}' (config: {})", config.title, path.display());

    let mut shell = Shell::new(config.title.clone());
    let stdin = io::stdin();
    let stdout = io::stdout();
    shell.run(stdin.lock(), stdout.lock(), &config.prompt)?;

    log::info!("Session ended with {} todo(s)", shell.list().size());
    Ok(())
}
