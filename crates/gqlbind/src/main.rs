mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    let result = match cli.cmd.take() {
        Some(command) => command.run(cli).await,
        None => cli.run_default().await,
    };
    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}")
    }
    result.exit_code
}

/// `--verbose` wins over `LOG_LEVEL`. Logs go to stderr so `args` output can
/// be piped.
fn setup_logger(cli: &Cli) {
    let (log_level, invalid_env_value) =
        if cli.verbose {
            (tracing::Level::DEBUG, None)
        } else {
            match std::env::var("LOG_LEVEL") {
                Ok(env_val) => match level_from_env(env_val.trim()) {
                    Some(level) => (level, None),
                    None => (DEFAULT_LOG_LEVEL, Some(env_val)),
                },
                Err(_) => (DEFAULT_LOG_LEVEL, None),
            }
        };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(other) = invalid_env_value {
        log::warn!("Invalid `LOG_LEVEL` environment variable value: `{other}`");
    }
}

fn level_from_env(env_val: &str) -> Option<tracing::Level> {
    Some(match env_val.to_ascii_lowercase().as_str() {
        "debug" | "verbose" => tracing::Level::DEBUG,
        "error" => tracing::Level::ERROR,
        "info" => tracing::Level::INFO,
        "trace" => tracing::Level::TRACE,
        "warn" => tracing::Level::WARN,
        _ => return None,
    })
}
