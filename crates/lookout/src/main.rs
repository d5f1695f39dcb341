//! `lookout` - CLI for the zone editor
//!
//! Lists the seeded zones and replays scripted zone-screen sessions.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use lookout::cli::{Cli, Command, ConfigCommand, OutputFormat, ReplayCommand, ZonesCommand};
use lookout::editor::{EventLog, NoticeSink, ZoneSink};
use lookout::session::{load_intents, Outcome, Session, Step};
use lookout::{init_logging, Config, Zone, ZoneEditor, ZoneType};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    match cli.command {
        Command::Zones(cmd) => handle_zones(&load_config(cli.config)?, &cmd),
        Command::Replay(cmd) => handle_replay(&load_config(cli.config)?, &cmd),
        Command::Config(cmd) => handle_config(cli.config, cmd),
    }
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    Config::load_from(path).context("loading configuration")
}

fn selected_tabs(tab: Option<ZoneType>) -> Vec<ZoneType> {
    tab.map_or_else(|| vec![ZoneType::Safe, ZoneType::Risk], |t| vec![t])
}

fn handle_zones(config: &Config, cmd: &ZonesCommand) -> anyhow::Result<()> {
    let editor = ZoneEditor::new(config.clone(), EventLog::new());
    let tabs = selected_tabs(cmd.tab.map(ZoneType::from));

    match cmd.format {
        OutputFormat::Json => {
            let zones: Vec<&Zone> = tabs.iter().flat_map(|t| editor.zones(*t)).collect();
            println!("{}", serde_json::to_string_pretty(&zones)?);
        }
        OutputFormat::Plain => {
            for tab in tabs {
                print_zones(tab, editor.zones(tab));
            }
        }
    }
    Ok(())
}

fn handle_replay(config: &Config, cmd: &ReplayCommand) -> anyhow::Result<()> {
    let intents = load_intents(&cmd.script)
        .with_context(|| format!("reading intents from {}", cmd.script.display()))?;

    if cmd.notices {
        let (editor, steps) = replay(config, NoticeSink::new(), intents);
        match cmd.format {
            OutputFormat::Json => print_json_report(&editor, &steps, editor.sink().notices())?,
            OutputFormat::Plain => {
                print_steps(&steps);
                println!();
                println!("Notices");
                println!("-------");
                for notice in editor.sink().notices() {
                    println!("  {}: {}", notice.title, notice.description);
                }
                print_final_zones(&editor);
            }
        }
    } else {
        let (editor, steps) = replay(config, EventLog::new(), intents);
        match cmd.format {
            OutputFormat::Json => print_json_report(&editor, &steps, editor.sink().events())?,
            OutputFormat::Plain => {
                print_steps(&steps);
                println!();
                println!("Events");
                println!("------");
                for event in editor.sink().events() {
                    println!("  {}", serde_json::to_string(event)?);
                }
                print_final_zones(&editor);
            }
        }
    }
    Ok(())
}

fn replay<S: ZoneSink>(
    config: &Config,
    sink: S,
    intents: Vec<lookout::Intent>,
) -> (ZoneEditor<S>, Vec<Step>) {
    let mut session = Session::new(ZoneEditor::new(config.clone(), sink));
    session.replay(intents);
    session.finish()
}

fn print_json_report<S: ZoneSink, T: serde::Serialize + ?Sized>(
    editor: &ZoneEditor<S>,
    steps: &[Step],
    emitted: &T,
) -> anyhow::Result<()> {
    let report = serde_json::json!({
        "steps": steps,
        "emitted": emitted,
        "mode": editor.mode(),
        "active_tab": editor.active_tab(),
        "safe_zones": editor.zones(ZoneType::Safe),
        "risk_zones": editor.zones(ZoneType::Risk),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_steps(steps: &[Step]) {
    println!("Steps");
    println!("-----");
    for step in steps {
        let status = match &step.outcome {
            Outcome::Applied => "ok".to_string(),
            Outcome::DayToggled { day, selected } => {
                format!("{day} {}", if *selected { "on" } else { "off" })
            }
            Outcome::Saved { id } => format!("saved #{id}"),
            Outcome::Deleted => "deleted".to_string(),
            Outcome::DeletePending => "awaiting confirmation".to_string(),
            Outcome::Rejected { reason, .. } => format!("rejected: {reason}"),
        };
        println!("  {:>3}  {:<60}  {status}", step.index, format!("{:?}", step.intent));
    }
}

fn print_final_zones<S: ZoneSink>(editor: &ZoneEditor<S>) {
    println!();
    println!("Mode: {:?} (tab: {})", editor.mode(), editor.active_tab());
    for tab in [ZoneType::Safe, ZoneType::Risk] {
        print_zones(tab, editor.zones(tab));
    }
}

fn print_zones(tab: ZoneType, zones: &[Zone]) {
    println!();
    println!("{} ({})", tab.title(), zones.len());
    for zone in zones {
        println!(
            "  [{}] {} ({}) {}",
            zone.id,
            zone.name,
            zone.kind.label(),
            zone.radius_caption()
        );
        if !zone.address.is_empty() {
            println!("      {}", zone.address);
        }
        if let Some(schedule) = &zone.schedule {
            if schedule.crosses_midnight() {
                println!("      {schedule} (overnight)");
            } else {
                println!("      {schedule}");
            }
        }
    }
}

fn handle_config(config_path: Option<PathBuf>, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = load_config(config_path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Editor]");
                println!("  Radius policy:      {:?}", config.editor.radius_policy);
                println!("  Confirm deletes:    {}", config.editor.confirm_deletes);
                println!(
                    "  Preview fallback:   {}m",
                    config.editor.preview_fallback_radius
                );
                println!();
                println!("[Radius]");
                println!(
                    "  Bounds:             {}-{}m (step {})",
                    config.radius.min, config.radius.max, config.radius.step
                );
                println!("  Safe default:       {}m", config.radius.safe_default);
                println!("  Risk default:       {}m", config.radius.risk_default);
            }
        }
        ConfigCommand::Path => {
            let path = config_path.unwrap_or_else(Config::default_config_path);
            println!("{}", path.display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            Config::load_from(Some(path.clone()))
                .with_context(|| format!("invalid configuration in {}", path.display()))?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
