mod app;
mod config;
mod input;
mod lyrics;
mod player;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "lyriterm", version, about = "Synchronized lyrics for your terminal")]
struct Cli {
    /// Override config file path.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Fetch lyrics for a track and print the timeline (headless).
    Lyrics {
        artist: String,
        title: String,
        #[command(flatten)]
        at: AtArgs,
    },
    /// Parse a local lyrics file and print the timeline (headless).
    Parse {
        path: PathBuf,
        #[command(flatten)]
        at: AtArgs,
    },
    /// Poll the player once and print its state (headless).
    Status,
    /// Lyrics cache management.
    Cache {
        #[command(subcommand)]
        cmd: CacheCommand,
    },
}

#[derive(Debug, clap::Args)]
struct AtArgs {
    /// Playback position in seconds to mark the active line at.
    #[arg(long)]
    at: Option<f64>,
    /// Offset in milliseconds (defaults to the configured offset).
    #[arg(long, allow_hyphen_values = true)]
    offset_ms: Option<i64>,
}

#[derive(Debug, Subcommand)]
enum CacheCommand {
    /// Delete all cached lyrics files.
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let cfg_path = match cli.config.clone() {
        Some(p) => p,
        None => config::default_config_path().context("default config path")?,
    };

    let command = cli.command.unwrap_or(Command::Tui);
    init_tracing(&cfg, cli.verbose, matches!(command, Command::Tui))?;

    match command {
        Command::Tui => {
            let mut app = app::App::new(cfg, cfg_path)?;
            let mut terminal = tui::TerminalGuard::enter().context("init terminal")?;
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Lyrics { artist, title, at } => {
            let service = lyrics::LyricsService::new(
                lyrics::LrclibClient::new()?,
                lyrics::LyricsCache::new(cfg.paths.cache_dir.clone()),
            );
            match service.fetch(&artist, &title).await? {
                Some(timeline) => print_timeline(&timeline, &at, cfg.sync.offset_ms),
                None => println!("No synchronized lyrics available."),
            }
        }
        Command::Parse { path, at } => {
            let raw = std::fs::read(&path).with_context(|| format!("read {}", path.display()))?;
            let timeline = lyrics::Timeline::parse(&String::from_utf8_lossy(&raw));
            print_timeline(&timeline, &at, cfg.sync.offset_ms);
        }
        Command::Status => {
            let state = player::Playerctl::new(cfg.player.name.clone()).state().await;
            println!("player:   {}", cfg.player.name);
            println!("status:   {}", state.status.label());
            println!("artist:   {}", state.artist);
            println!("title:    {}", state.title);
            println!(
                "position: {} / {}",
                format_time(state.position_secs),
                format_time(state.duration_secs)
            );
        }
        Command::Cache { cmd } => match cmd {
            CacheCommand::Clear => {
                let cache = lyrics::LyricsCache::new(cfg.paths.cache_dir.clone());
                let removed = cache.clear().context("clear lyrics cache")?;
                println!("Removed {removed} cached lyrics file(s) from {}.", cache.dir().display());
            }
        },
    }

    Ok(())
}

/// The TUI owns the terminal, so it logs to a file next to the cache.
fn init_tracing(cfg: &config::Config, verbose: bool, to_file: bool) -> anyhow::Result<()> {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(level);

    if to_file {
        let path = log_path(&cfg.paths.cache_dir);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("open {}", path.display()))?;
        builder
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}

fn log_path(cache_dir: &Path) -> PathBuf {
    cache_dir
        .parent()
        .unwrap_or(cache_dir)
        .join("lyriterm.log")
}

fn print_timeline(timeline: &lyrics::Timeline, at: &AtArgs, default_offset_ms: i64) {
    if timeline.is_empty() {
        println!("No synchronized lyrics available.");
        return;
    }

    let now = at
        .at
        .map(|pos| lyrics::effective_time(pos, at.offset_ms.unwrap_or(default_offset_ms)));
    let active = now.and_then(|t| timeline.active_index(t));

    for (i, line) in timeline.lines().iter().enumerate() {
        let marker = if active == Some(i) { ">" } else { " " };
        println!(
            "{marker} [{}] ({:>5.2}s) {}",
            format_time(line.start_time),
            line.duration,
            line.text
        );
    }

    println!("{} line(s)", timeline.len());

    if let (Some(t), Some(idx)) = (now, active)
        && let Some(line) = timeline.get(idx)
    {
        println!();
        println!(
            "effective time {:.3}s, line {}, sung cutoff {} of {} word(s)",
            t,
            idx,
            line.sung_cutoff(t),
            line.words.len()
        );
    }
}

fn format_time(secs: f64) -> String {
    let secs = secs.max(0.0);
    let min = (secs / 60.0).floor() as u64;
    format!("{:02}:{:05.2}", min, secs - (min as f64) * 60.0)
}
