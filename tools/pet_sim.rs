// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Scripted pet session on a simulated clock.
//!
//! Runs the full engine loop (10 ms polls, 2 s ticks, 60 s saves) against
//! simulated button levels, answers the pet's requests like an attentive
//! owner, then prints lifetime stats and the exported event log.

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use neuropet::config::{
    apply_environment_overrides, load_config, validate_config, ConfigError, NeuropetConfig,
};
use neuropet::observability::{debug_flags_help, init_logging, parse_debug_flags, LoggingOptions};
use neuropet::runtime::{
    EngineConfig, EngineEvent, FileStore, MemoryStore, NeuropetEngine, PetStore, Scheduler,
};
use neuropet::structures::{Action, ButtonId, BUTTON_COUNT};

/// Owner reaction time to a request
const RESPONSE_DELAY_MS: u64 = 3_000;

struct Args {
    minutes: u64,
    in_memory: bool,
    export_count: usize,
    config_path: Option<PathBuf>,
    overrides: HashMap<String, String>,
}

fn usage_and_exit(code: i32) -> ! {
    eprintln!(
        "Usage: pet_sim [--minutes <n>] [--memory] [--export <n>] [--config <path>]\n\
         \x20              [--set <key>=<value>]... [--debug-<crate>]...\n\n\
         Defaults:\n\
         - minutes: 10\n\
         - export: 20 (most recent log entries)\n\n{}",
        debug_flags_help()
    );
    process::exit(code);
}

fn parse_args() -> Args {
    let mut args = Args {
        minutes: 10,
        in_memory: false,
        export_count: 20,
        config_path: None,
        overrides: HashMap::new(),
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--minutes" => {
                args.minutes = iter
                    .next()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or_else(|| usage_and_exit(2));
            }
            "--export" => {
                args.export_count = iter
                    .next()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or_else(|| usage_and_exit(2));
            }
            "--config" => {
                let path = iter.next().unwrap_or_else(|| usage_and_exit(2));
                args.config_path = Some(PathBuf::from(path));
            }
            "--set" => {
                let pair = iter.next().unwrap_or_else(|| usage_and_exit(2));
                match pair.split_once('=') {
                    Some((key, value)) => {
                        args.overrides.insert(key.to_string(), value.to_string());
                    }
                    None => usage_and_exit(2),
                }
            }
            "--memory" => args.in_memory = true,
            "-h" | "--help" => usage_and_exit(0),
            // handled by parse_debug_flags
            other if other.starts_with("--debug-") => {}
            other => {
                eprintln!("Unknown argument: {other}");
                usage_and_exit(2);
            }
        }
    }
    args
}

/// File config if there is one, otherwise defaults with the same overrides
fn load_settings(args: &Args) -> Result<NeuropetConfig> {
    match load_config(args.config_path.as_deref(), Some(&args.overrides)) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) if args.config_path.is_none() => {
            let mut config = NeuropetConfig::default();
            apply_environment_overrides(&mut config);
            neuropet::config::apply_cli_overrides(&mut config, &args.overrides);
            validate_config(&config)?;
            Ok(config)
        }
        Err(e) => Err(e.into()),
    }
}

/// One button held from `at_ms` for `hold_ms`
#[derive(Debug, Clone, Copy)]
struct Press {
    at_ms: u64,
    button: ButtonId,
    hold_ms: u64,
}

impl Press {
    fn is_down(&self, now_ms: u64) -> bool {
        now_ms >= self.at_ms && now_ms < self.at_ms + self.hold_ms
    }
}

/// Opening moves of the session: a snack, a long cuddle, a double tap
fn opening_script() -> Vec<Press> {
    vec![
        Press { at_ms: 5_000, button: ButtonId::Feed, hold_ms: 120 },
        Press { at_ms: 20_000, button: ButtonId::Pet, hold_ms: 700 },
        Press { at_ms: 40_000, button: ButtonId::Feed, hold_ms: 100 },
        Press { at_ms: 40_200, button: ButtonId::Feed, hold_ms: 100 },
    ]
}

fn run<S: PetStore>(mut engine: NeuropetEngine<S>, args: &Args) -> Result<()> {
    let mut scheduler = Scheduler::new(engine.config().cadence, 0);
    let mut presses = opening_script();
    let mut last_action = engine.output().action;
    let end_ms = args.minutes * 60_000;

    let mut now = 0;
    while now <= end_ms {
        let mut levels = [false; BUTTON_COUNT];
        for press in &presses {
            if press.is_down(now) {
                levels[press.button.index()] = true;
            }
        }

        engine.step(&mut scheduler, now, levels)?;

        for event in engine.drain_events() {
            match event {
                EngineEvent::Decision { output, timestamp_ms } => {
                    if output.action != last_action {
                        println!(
                            "[{:>7.1}s] pet is now {} (valence {:+.2}, arousal {:.2})",
                            timestamp_ms as f64 / 1000.0,
                            output.action,
                            output.valence,
                            output.arousal
                        );
                        last_action = output.action;
                    }

                    let wanted = match output.action {
                        Action::AskFood => Some(ButtonId::Feed),
                        Action::AskPet => Some(ButtonId::Pet),
                        _ => None,
                    };
                    let pending = presses.iter().any(|p| p.at_ms > timestamp_ms);
                    if let (Some(button), false) = (wanted, pending) {
                        presses.push(Press {
                            at_ms: timestamp_ms + RESPONSE_DELAY_MS,
                            button,
                            hold_ms: 120,
                        });
                    }
                }
                EngineEvent::Interaction { input, timestamp_ms } => {
                    println!("[{:>7.1}s] owner: {}", timestamp_ms as f64 / 1000.0, input.name());
                }
                EngineEvent::Ignored { since_ms } => {
                    println!("[{:>7.1}s] pet feels ignored", since_ms as f64 / 1000.0);
                }
                other => println!("[event] {}", other.name()),
            }
        }

        now += scheduler.cadence().poll_ms;
    }

    engine.persist(end_ms)?;

    let stats = engine.pet_stats();
    println!();
    println!("Boot #{}", stats.boot_count);
    println!("Feeds: {}  Pets: {}", stats.total_feeds, stats.total_pets);
    println!(
        "Max trust: {:.3}  Starvations: {}",
        stats.max_trust_reached as f32 / 1000.0,
        stats.times_starved
    );
    println!("Rewards learned from: {}", engine.learner().total_rewards());
    println!("Biases: {:?}", engine.learner().bias().values());

    let log = engine.event_log();
    let start = log.count().saturating_sub(args.export_count);
    println!();
    println!("{}", engine.export_log(start, args.export_count)?);
    Ok(())
}

fn main() -> Result<()> {
    let args = parse_args();
    let settings = load_settings(&args).context("Failed to load configuration")?;

    let debug_flags = parse_debug_flags();
    let _guard = init_logging(
        &debug_flags,
        &LoggingOptions {
            level: settings.logging.level.clone(),
            log_dir: settings
                .logging
                .file_logging
                .then(|| settings.logging.log_dir.clone()),
            ..Default::default()
        },
    )?;

    let engine_config = EngineConfig::from(&settings);
    if args.in_memory {
        let engine = NeuropetEngine::start(MemoryStore::new(), engine_config, 0)?;
        run(engine, &args)
    } else {
        let store = FileStore::open(&settings.storage.data_dir)
            .with_context(|| format!("Cannot open {}", settings.storage.data_dir.display()))?;
        let engine = NeuropetEngine::start(store, engine_config, 0)?;
        run(engine, &args)
    }
}
