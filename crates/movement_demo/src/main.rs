//! Command-line runner for the movement demo

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;

use movement_demo::MovementScript;
use script_engine::foundation::logging;
use script_engine::prelude::*;

const WINDOW_TITLE: &str = "movement demo";

fn cli() -> Command {
    Command::new("movement_demo")
        .about("Steer a box around a canvas with the arrow keys")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Replay an input recording through the movement script")
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .value_name("FILE")
                        .value_parser(clap::value_parser!(PathBuf))
                        .help(
                            "Input recording (.jsonl, .json or .ron); \
                             runs without input if omitted",
                        ),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .value_name("FILE")
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("Engine config file (.toml or .ron)"),
                )
                .arg(
                    Arg::new("ticks")
                        .short('t')
                        .long("ticks")
                        .value_name("N")
                        .value_parser(clap::value_parser!(u64))
                        .help("Stop after N ticks"),
                )
                .arg(
                    Arg::new("verbose")
                        .short('v')
                        .long("verbose")
                        .help("Log per-tick details")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("run", args)) => run(args),
        Some((other, _)) => anyhow::bail!("Unknown command: {}", other),
        None => anyhow::bail!("No command given"),
    }
}

/// Everything a finished `run` leaves behind
struct Session {
    summary: RunSummary,
    script: MovementScript,
    canvas: RecordingCanvas,
}

/// Engine from `--config` (or defaults), with `--ticks` overriding the tick limit
fn build_engine(args: &ArgMatches) -> Result<Engine> {
    let mut engine = match args.get_one::<PathBuf>("config") {
        Some(path) => Engine::from_config_file(path)
            .with_context(|| format!("Failed to load engine config {}", path.display()))?,
        None => Engine::new(EngineConfig::new().with_window(WindowConfig::new(WINDOW_TITLE))),
    };
    if let Some(ticks) = args.get_one::<u64>("ticks") {
        engine.set_max_ticks(Some(*ticks));
    }
    Ok(engine)
}

/// Recording from `--input`, or `--ticks` idle frames (one by default)
fn build_input(args: &ArgMatches) -> Result<ScriptedInput> {
    match args.get_one::<PathBuf>("input") {
        Some(path) => ScriptedInput::load_from_file(path)
            .with_context(|| format!("Failed to load input recording {}", path.display())),
        None => {
            let idle_ticks = args.get_one::<u64>("ticks").copied().unwrap_or(1);
            let idle_ticks = usize::try_from(idle_ticks).context("Tick count too large")?;
            Ok(ScriptedInput::default().idle(idle_ticks))
        }
    }
}

fn run_session(args: &ArgMatches) -> Result<Session> {
    let mut engine = build_engine(args)?;
    let mut input = build_input(args)?;
    let mut script = MovementScript::new();
    let mut canvas = RecordingCanvas::new();

    let summary = engine
        .run(&mut script, &mut input, &mut canvas)
        .context("Movement session failed")?;

    Ok(Session {
        summary,
        script,
        canvas,
    })
}

fn run(args: &ArgMatches) -> Result<()> {
    let level = if args.get_flag("verbose") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    logging::init_with_level(level);

    log::info!("Starting movement demo");
    let Session {
        summary,
        script,
        canvas,
    } = run_session(args)?;

    println!(
        "Ran {} ticks ({:?}), {} draw commands in {:.3}s",
        summary.ticks, summary.exit_reason, summary.commands_drawn, summary.elapsed_secs
    );
    let position = script.position();
    println!(
        "Final position: ({}, {}), direction: {:?}",
        position.x,
        position.y,
        script.direction()
    );

    if let Some(frame) = canvas.last_frame() {
        println!("Last frame:");
        for command in frame {
            match command {
                DrawCommand::Clear(color) => println!("  Clear({:?})", color.to_array()),
                DrawCommand::Rect(color, bounds) => {
                    println!("  Rect({:?}, {:?})", color.to_array(), bounds.to_array())
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        cli().debug_assert();
    }

    #[test]
    fn test_parses_run_arguments() {
        let matches = cli()
            .try_get_matches_from([
                "movement_demo", "run", "--input", "keys.jsonl", "--ticks", "30",
            ])
            .unwrap();
        let (name, args) = matches.subcommand().unwrap();
        assert_eq!(name, "run");
        assert_eq!(args.get_one::<PathBuf>("input"), Some(&PathBuf::from("keys.jsonl")));
        assert_eq!(args.get_one::<u64>("ticks"), Some(&30));
        assert!(!args.get_flag("verbose"));
    }

    #[test]
    fn test_rejects_bad_tick_count() {
        let result = cli().try_get_matches_from(["movement_demo", "run", "--ticks", "lots"]);
        assert!(result.is_err());
    }

    fn run_args(extra: &[&str]) -> ArgMatches {
        let mut argv = vec!["movement_demo", "run"];
        argv.extend_from_slice(extra);
        let matches = cli().try_get_matches_from(argv).unwrap();
        matches.subcommand_matches("run").unwrap().clone()
    }

    fn manifest_path(file: &str) -> String {
        format!("{}/{}", env!("CARGO_MANIFEST_DIR"), file)
    }

    #[test]
    fn test_run_without_arguments_is_one_idle_tick() {
        let session = run_session(&run_args(&[])).unwrap();

        assert_eq!(session.summary.ticks, 1);
        assert_eq!(session.summary.exit_reason, ExitReason::InputExhausted);
        assert_eq!(session.script.position(), Point2::origin());
        assert_eq!(session.canvas.settings().unwrap().title, WINDOW_TITLE);
        assert_eq!(session.canvas.frames().len(), 1);
    }

    #[test]
    fn test_ticks_without_input_runs_idle_ticks() {
        let args = run_args(&["--ticks", "3"]);
        assert_eq!(build_input(&args).unwrap().remaining(), 3);
        assert_eq!(build_engine(&args).unwrap().config().run.max_ticks, Some(3));

        // Input and limit run out together; the limit is checked first
        let session = run_session(&args).unwrap();
        assert_eq!(session.summary.ticks, 3);
        assert_eq!(session.summary.exit_reason, ExitReason::TickLimitReached);
        assert_eq!(session.canvas.frames().len(), 3);
    }

    #[test]
    fn test_ticks_override_config_file() {
        let config = manifest_path("engine.toml");

        let engine = build_engine(&run_args(&["--config", &config])).unwrap();
        assert_eq!(engine.config().run.max_ticks, Some(600));

        let engine = build_engine(&run_args(&["--config", &config, "--ticks", "5"])).unwrap();
        assert_eq!(engine.config().run.max_ticks, Some(5));
        assert_eq!(engine.config().window.title, "movement demo");
    }

    #[test]
    fn test_ticks_limit_recorded_input() {
        let input = manifest_path("recordings/square.jsonl");
        let session = run_session(&run_args(&["--input", &input, "--ticks", "10"])).unwrap();

        assert_eq!(session.summary.exit_reason, ExitReason::TickLimitReached);
        assert_eq!(session.summary.ticks, 10);
        assert_eq!(session.script.position(), Point2::new(10.0, 0.0));
    }

    #[test]
    fn test_replays_recording_until_escape() {
        let input = manifest_path("recordings/square.jsonl");
        let session = run_session(&run_args(&["--input", &input])).unwrap();

        assert_eq!(session.summary.exit_reason, ExitReason::EscapePressed);
        assert_eq!(session.summary.ticks, 152);
        assert_eq!(session.script.position(), Point2::new(100.0, 50.0));
    }

    #[test]
    fn test_missing_config_file_is_reported() {
        let result = run_session(&run_args(&["--config", "does-not-exist.toml"]));
        let message = format!("{:#}", result.err().unwrap());
        assert!(message.contains("Failed to load engine config"), "{}", message);
    }
}
