//! skinbar command-line entry point.
//!
//! Loads `skinbar.toml` (path from `--config`, `SKINBAR_CONFIG`, or the
//! working directory), applies `SKINBAR_SKIN` / `SKINBAR_MODE`, registers the
//! built-in skins plus any override files, and prints the resolved format
//! and correction toolbars.
//!
//! Usage: `skinbar [show|list] [--json] [--config <path>]`

mod commands;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use skinbar_skin::{SkinRegistry, resolve_skin_name};
use skinbar_types::config::ToolbarConfig;

const CONFIG_ENV: &str = "SKINBAR_CONFIG";
const DEFAULT_CONFIG: &str = "skinbar.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Show,
    List,
}

#[derive(Debug)]
struct Args {
    command: Command,
    json: bool,
    config: Option<PathBuf>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut parsed = Args {
        command: Command::Show,
        json: false,
        config: None,
    };
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "show" => parsed.command = Command::Show,
            "list" => parsed.command = Command::List,
            "--json" => parsed.json = true,
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                parsed.config = Some(PathBuf::from(path));
            },
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(parsed)
}

fn load_config(explicit: Option<&Path>) -> Result<ToolbarConfig> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));
    let path = path.or_else(|| {
        let default = PathBuf::from(DEFAULT_CONFIG);
        default.is_file().then_some(default)
    });
    let mut config = match &path {
        Some(p) => {
            let mut config =
                ToolbarConfig::load(p).with_context(|| format!("loading {}", p.display()))?;
            anchor_skins_dir(&mut config, p);
            config
        },
        None => ToolbarConfig::default(),
    };
    config.apply_env_overrides();
    Ok(config)
}

/// Resolve a relative `skins_dir` against the directory of the config file
/// that named it.
fn anchor_skins_dir(config: &mut ToolbarConfig, config_path: &Path) {
    if let Some(dir) = config.skins_dir.as_mut()
        && dir.is_relative()
        && let Some(parent) = config_path.parent()
    {
        *dir = parent.join(&*dir);
    }
}

fn build_registry(config: &ToolbarConfig) -> SkinRegistry {
    let mut registry = SkinRegistry::with_builtins();
    if let Some(dir) = &config.skins_dir {
        match registry.load_directory(dir) {
            Ok(loaded) => log::info!("{} skin override(s) from {}", loaded.len(), dir.display()),
            Err(e) => log::warn!("{e}"),
        }
    }
    registry.set_skin(resolve_skin_name(&config.skin));
    registry.set_editor_mode(config.editor_mode);
    registry
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args(std::env::args().skip(1))?;
    let config = load_config(args.config.as_deref())?;
    let registry = build_registry(&config);
    log::info!(
        "Resolving toolbars for {} ({})",
        registry.current_skin(),
        registry.editor_mode()
    );

    match args.command {
        Command::List => print!(
            "{}",
            commands::list_skins(&registry, config.skins_dir.as_deref())
        ),
        Command::Show => {
            let report = commands::resolve_toolbars(&registry, &config);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", commands::format_report(&report));
            }
        },
    }
    Ok(())
}
