// SPDX-License-Identifier: MPL-2.0
use oneui_shell::app::{self, App, Flags};
use oneui_shell::config::{paths, PreferenceStore, Preferences};
use oneui_shell::error::Result;
use oneui_shell::shell::{driver, AnimationSpeed, DemoScript, DemoSequencer, ViewStateMachine};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::sync::watch;

const HELP: &str = "\
One UI Shell - simulated phone home screen

USAGE:
  oneui_shell [OPTIONS]

OPTIONS:
  --config-dir <DIR>  Directory holding preferences.toml
  --speed <X>         Animation speed for this run (0.5 - 2.0)
  --demo              Run the quick-switch demo headless and exit
  -h, --help          Print this help

ENVIRONMENT:
  ONEUI_SHELL_CONFIG_DIR  Config directory when --config-dir is absent
  RUST_LOG                Log filter (default: info)
";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .filter_module("wgpu_core", log::LevelFilter::Error)
        .filter_module("naga", log::LevelFilter::Error)
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let headless = args.contains("--demo");
    let (config_dir, speed) = match parse_options(&mut args) {
        Ok(values) => values,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }

    paths::init_cli_override(config_dir.clone());
    let flags = Flags { config_dir, speed };

    if headless {
        return match run_headless(flags) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                log::error!("{err}");
                ExitCode::FAILURE
            }
        };
    }

    let app = match App::new(flags) {
        Ok(app) => app,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("One UI Shell starting");
    match app::run(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn parse_options(
    args: &mut pico_args::Arguments,
) -> std::result::Result<(Option<String>, Option<f64>), pico_args::Error> {
    Ok((
        args.opt_value_from_str("--config-dir")?,
        args.opt_value_from_str("--speed")?,
    ))
}

/// Plays the quick-switch demo against the tokio clock, without a window.
fn run_headless(flags: Flags) -> Result<()> {
    let (store, _warning) = PreferenceStore::load_with_override(flags.config_dir.map(PathBuf::from));
    let mut preferences = Preferences::resolve(&store);
    if let Some(speed) = flags.speed {
        preferences.speed = AnimationSpeed::new(speed);
    }

    let mut machine = ViewStateMachine::standard(preferences.transition_config())?;
    let mut demo = DemoSequencer::new(DemoScript::default(), machine.registry())?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let report = runtime.block_on(async {
        let (cancel_tx, cancel_rx) = watch::channel(false);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = cancel_tx.send(true);
            }
        });

        log::info!(
            "running demo at {} with {} easing",
            preferences.speed,
            preferences.easing
        );
        demo.start(&machine);
        driver::run(&mut machine, &mut demo, cancel_rx).await
    });

    log::info!(
        "demo {}: {} steps, {} closes, finished at {:?} on {}",
        if report.cancelled { "cancelled" } else { "complete" },
        report.demo_steps,
        report.closes_completed,
        machine.now(),
        machine
            .active()
            .map_or("nothing", |screen| screen.id().as_str())
    );
    Ok(())
}
