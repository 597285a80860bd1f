mod carousel;
mod cli;
mod clipboard;
mod config;
mod repl;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use std::time::Duration;
use tracing::{info, warn};

use crafted_carousel::{Carousel, CarouselGeometry, CarouselRunner};
use crafted_rules::Catalog;
use crafted_workspace::{
    Clipboard, FileStore, MemoryStore, OverrideStore, RuleWorkspace, SyntaxHighlighter,
    WorkspaceCommand, WorkspaceOptions,
};

use crate::carousel::TerminalCarousel;
use crate::cli::{CliArgs, Command};
use crate::clipboard::{CommandClipboard, Osc52Surface};
use crate::config::CliConfig;
use crate::repl::ReplCommand;
use crate::terminal::Terminal;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let terminal = Terminal::new();

    // Load config
    let config = CliConfig::load(args.config.as_deref()).context("failed to load configuration")?;

    match args.command.clone().unwrap_or(Command::Edit) {
        Command::Carousel {
            cards,
            card_width,
            gap,
            viewport,
            ticks,
            interval_ms,
        } => {
            let interval = Duration::from_millis(interval_ms.unwrap_or(config.carousel_interval_ms));
            let geometry = CarouselGeometry::uniform(cards, card_width, gap, viewport);
            run_carousel(&terminal, geometry, interval, ticks).await
        }
        Command::List => {
            let (workspace, _) = build_workspace(&args, &config)?;
            terminal.print_templates(&workspace)
        }
        Command::Edit => {
            let (workspace, store_label) = build_workspace(&args, &config)?;
            run_editor(&terminal, workspace, &store_label).await
        }
    }
}

/// Assemble the catalog, override store and clipboard into a workspace.
/// Also returns a label describing where overrides are kept.
fn build_workspace(args: &CliArgs, config: &CliConfig) -> Result<(RuleWorkspace, String)> {
    let catalog = match config.resolve_templates_dir(args.templates_dir.as_deref()) {
        Some(dir) => Catalog::builtin_with_dir(&dir)
            .with_context(|| format!("failed to load templates from {}", dir.display()))?,
        None => Catalog::builtin().context("failed to load built-in templates")?,
    };

    let (store, store_label): (Box<dyn OverrideStore>, String) = if args.ephemeral {
        (Box::new(MemoryStore::new()), "memory".to_string())
    } else {
        let data_dir = config.resolve_data_dir(args.data_dir.as_deref())?;
        let path = CliConfig::overrides_path(&data_dir);
        let label = path.display().to_string();
        (Box::new(FileStore::open(path)), label)
    };

    let mut clipboard = Clipboard::default().with_fallback(Osc52Surface::stdout());
    match CommandClipboard::detect(config.clipboard_command.as_deref()) {
        Some(writer) => {
            info!(program = writer.program(), "using clipboard command");
            clipboard = clipboard.with_writer(writer);
        }
        None => info!("no clipboard command found, using terminal escape fallback"),
    }

    let options = WorkspaceOptions {
        namespace: config.namespace.clone(),
        default_template: config.resolve_template(args.template.as_deref()),
    };
    let workspace =
        RuleWorkspace::new(catalog, options, store, Box::new(SyntaxHighlighter), clipboard)
            .context("failed to open rule workspace")?;
    Ok((workspace, store_label))
}

async fn run_editor(terminal: &Terminal, mut workspace: RuleWorkspace, store_label: &str) -> Result<()> {
    terminal.print_banner(workspace.namespace(), store_label)?;
    terminal.render_workspace(&workspace)?;

    loop {
        let line = match terminal.read_input(workspace.active_template_id())? {
            Some(line) => line,
            None => break,
        };

        match repl::parse(&line) {
            ReplCommand::Empty => {}
            ReplCommand::Quit => break,
            ReplCommand::Help => terminal.print_help()?,
            ReplCommand::List => terminal.print_templates(&workspace)?,
            ReplCommand::Show => terminal.render_workspace(&workspace)?,
            ReplCommand::Status => terminal.print_status(workspace.status())?,
            ReplCommand::BeginEdit => {
                let text = terminal.read_block()?;
                workspace.edit_text(text);
                terminal.render_highlighted(&workspace)?;
                terminal.print_status(workspace.status())?;
            }
            ReplCommand::Workspace(WorkspaceCommand::Select { template_id }) => {
                if workspace.select_template(&template_id) {
                    terminal.render_workspace(&workspace)?;
                } else {
                    terminal.print_error(&format!(
                        "unknown template '{}'; type 'list' to see ids",
                        template_id
                    ))?;
                }
            }
            ReplCommand::Workspace(command) => {
                let status = workspace.dispatch(command).await;
                terminal.print_status(status)?;
            }
            ReplCommand::Invalid(usage) => terminal.print_error(&format!("usage: {}", usage))?,
            ReplCommand::Unknown(word) => {
                terminal.print_error(&format!("unknown command '{}'; type 'help'", word))?
            }
        }
    }

    terminal.print_info("Goodbye.")?;
    Ok(())
}

async fn run_carousel(
    terminal: &Terminal,
    geometry: CarouselGeometry,
    interval: Duration,
    ticks: Option<u64>,
) -> Result<()> {
    let mut runner = CarouselRunner::new(interval);
    if let Some(ticks) = ticks {
        runner = runner.with_max_ticks(ticks);
    }

    let shutdown = runner.shutdown_handle();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            return;
        }
        shutdown.notify_one();
    });

    let mut view = TerminalCarousel::new(geometry, terminal);
    let mut carousel = Carousel::new();
    let advanced = runner.run(&mut carousel, &mut view).await;
    info!(advanced, positions = view.shown(), "carousel stopped");
    Ok(())
}
