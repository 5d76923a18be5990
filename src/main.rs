use abtree::app::Viewer;
use abtree::config::{Config, LayoutMode};
use abtree::model::{SearchNode, Tree, TreeLoader, TreeStats};
use abtree::services::log_dirs;
use abtree::services::terminal_modes::{self, TerminalModes};
use abtree::services::tracing_setup;
use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{poll as event_poll, read as event_read};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::{
    io::{self, stdout},
    path::PathBuf,
    time::{Duration, Instant},
};

/// Interactive viewer for alpha-beta search trees
#[derive(Parser, Debug)]
#[command(name = "abtree-viewer")]
#[command(about = "Browse a minimax / alpha-beta search tree in the terminal", long_about = None)]
#[command(version)]
struct Args {
    /// Search tree JSON document (default: the bundled sample tree)
    #[arg(value_name = "FILE")]
    tree: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for viewer diagnostics
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Show the tree as an indented outline instead of a diagram
    #[arg(long)]
    outline: bool,

    /// Load and validate the tree, print a summary and exit
    #[arg(long)]
    check: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Print the JSON schema of the configuration file and exit
    #[arg(long)]
    dump_schema: bool,

    /// Print the directories used by the viewer and exit
    #[arg(long)]
    show_paths: bool,
}

fn load_config(args: &Args) -> AnyhowResult<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load_default(),
    };

    if args.outline {
        config.view.layout = LayoutMode::Outline;
    }
    Ok(config)
}

/// Load the tree named on the command line, or the bundled sample
fn load_tree(args: &Args, config: &Config) -> AnyhowResult<(Tree<SearchNode>, String)> {
    let loader = match config.load.max_depth {
        Some(max_depth) => TreeLoader::new().with_max_depth(max_depth),
        None => TreeLoader::new(),
    };

    match &args.tree {
        Some(path) => {
            let tree = loader
                .load_file(path)
                .with_context(|| format!("Failed to load search tree {}", path.display()))?;
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Ok((tree, name))
        }
        None => {
            let tree = loader
                .load_bundled()
                .context("Failed to load the bundled sample tree")?;
            Ok((tree, "sample tree".to_string()))
        }
    }
}

fn run_event_loop(
    viewer: &mut Viewer,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> AnyhowResult<()> {
    const FRAME_DURATION: Duration = Duration::from_millis(16);
    let mut last_render = Instant::now();
    let mut needs_render = true;

    loop {
        if viewer.should_quit() {
            break;
        }

        if needs_render && last_render.elapsed() >= FRAME_DURATION {
            terminal
                .draw(|frame| viewer.render(frame))
                .context("Failed to draw frame")?;
            last_render = Instant::now();
            needs_render = false;
        }

        let timeout = if needs_render {
            FRAME_DURATION.saturating_sub(last_render.elapsed())
        } else {
            Duration::from_millis(250)
        };

        if event_poll(timeout)? {
            let event = event_read()?;
            if viewer.handle_event(&event) {
                needs_render = true;
            }
        }
    }

    Ok(())
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    // Handle informational flags early (no terminal setup needed)
    if args.show_paths {
        log_dirs::print_all_paths();
        return Ok(());
    }

    if args.dump_schema {
        let schema = schemars::schema_for!(Config);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let config = load_config(&args)?;

    if args.dump_config {
        println!(
            "{}",
            serde_json::to_string_pretty(&config).context("Failed to serialize config")?
        );
        return Ok(());
    }

    let log_file = args.log_file.clone().unwrap_or_else(log_dirs::main_log_path);
    if !tracing_setup::init_global(&log_file) {
        eprintln!("Warning: logging disabled, cannot write {}", log_file.display());
    }
    tracing::info!("Viewer starting");

    // The tree is loaded and validated in full before the terminal is touched
    let (tree, source) = load_tree(&args, &config)?;

    if args.check {
        println!("{source}");
        println!("{}", TreeStats::collect(&tree));
        return Ok(());
    }

    let mouse = config.view.mouse;
    let mut viewer = Viewer::new(tree, config, source).context("Invalid theme")?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));

    let mut terminal_modes =
        TerminalModes::enable(mouse).context("Failed to set up the terminal")?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_event_loop(&mut viewer, &mut terminal);

    terminal_modes.undo();
    tracing::info!("Viewer exiting");

    result
}
