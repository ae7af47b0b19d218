use std::{
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
    sync::Arc,
    time::Duration,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    files::{load_dropped_files, read_dropped_path},
    load_client_settings, HttpCodecBackend, Notifier, OperationController, SharedPanel,
    TextSurface, UiBindings,
};
use shared::domain::{Mode, OperationResult, Severity};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Encode or decode base64 through the codec server")]
struct Args {
    /// Overrides APP__SERVER_URL / client.toml.
    #[arg(long)]
    server_url: Option<String>,
    /// Request timeout in seconds; 0 waits indefinitely.
    #[arg(long)]
    timeout_secs: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Encode(InputArgs),
    Decode(InputArgs),
}

#[derive(clap::Args, Debug)]
struct InputArgs {
    /// Text to send; read from stdin when neither TEXT nor --file is given.
    text: Option<String>,
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,
}

impl Command {
    fn mode(&self) -> Mode {
        match self {
            Command::Encode(_) => Mode::Encode,
            Command::Decode(_) => Mode::Decode,
        }
    }

    fn input(&self) -> &InputArgs {
        match self {
            Command::Encode(input) | Command::Decode(input) => input,
        }
    }
}

/// Prints notifications to stderr so stdout carries only the result.
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        eprintln!("{}", notification_line(message, severity));
    }
}

fn notification_line(message: &str, severity: Severity) -> String {
    format!("[{}] {message}", severity.as_str())
}

fn fill_input(input: &InputArgs, target: &dyn TextSurface, notifier: &dyn Notifier) -> Result<()> {
    if let Some(path) = &input.file {
        let file = read_dropped_path(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        load_dropped_files(target, [file], notifier);
    } else if let Some(text) = &input.text {
        target.set_text(text);
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        target.set_text(&buf);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    let args = Args::parse();

    let mut settings = load_client_settings();
    if let Some(server_url) = args.server_url.clone() {
        settings.server_url = server_url;
    }
    if let Some(secs) = args.timeout_secs {
        settings.request_timeout = (secs > 0).then(|| Duration::from_secs(secs));
    }
    tracing::debug!(server_url = %settings.server_url, timeout = ?settings.request_timeout, "client settings");

    let notifier: Arc<dyn Notifier> = Arc::new(TerminalNotifier);
    let mode = args.command.mode();
    let encode = SharedPanel::new(Mode::Encode);
    let decode = SharedPanel::new(Mode::Decode);
    let bindings = UiBindings::from_shared(&encode, &decode, Arc::clone(&notifier));

    fill_input(
        args.command.input(),
        bindings.panel(mode).input.as_ref(),
        notifier.as_ref(),
    )?;

    let controller = OperationController::new(HttpCodecBackend::from_settings(&settings)?, notifier);
    match controller.run_panel(mode, &bindings).await {
        OperationResult::Success { output } => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{output}")?;
            Ok(ExitCode::SUCCESS)
        }
        OperationResult::Failure { .. } => Ok(ExitCode::FAILURE),
    }
}
