use anyhow::{Context, Result};
use clap::Parser;

use impossible_objects::cache::IllusionCache;
use impossible_objects::cli::{Cli, Command};
use impossible_objects::config::AppConfig;
use impossible_objects::core::{sample, AnimationState, FixedFrames, FrameInfo, RealtimeFrames};
use impossible_objects::illusion::IllusionKind;
use impossible_objects::types::to_instances;

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    cli.overrides.apply(&mut config);
    Ok(config)
}

fn validate(config: &AppConfig, kind: IllusionKind) -> Result<()> {
    config.params.validate_for(kind).map_err(|err| {
        log::warn!("Rejected {kind} parameters: {err}");
        err
    })?;
    Ok(())
}

fn print_geometry(cache: &mut IllusionCache, config: &AppConfig, kind: IllusionKind, instances: bool) -> Result<()> {
    validate(config, kind)?;
    let placements = cache.placements(kind, &config.params);

    let json = if instances {
        let matrices: Vec<_> = to_instances(placements).iter().map(|i| i.model).collect();
        serde_json::to_string_pretty(&matrices)
    } else {
        serde_json::to_string_pretty(placements)
    }
    .context("Failed to serialize geometry")?;

    println!("{json}");
    Ok(())
}

fn simulate(cache: &mut IllusionCache, config: &AppConfig, frames: impl Iterator<Item = FrameInfo>) -> Result<()> {
    validate(config, IllusionKind::Stairs)?;
    let path = cache.stairs_path(&config.params);
    let mut state = AnimationState::new();

    log::info!("Simulating marker over {} waypoints at speed {}", path.len(), config.speed);

    for frame in frames {
        let Some(marker) = sample(path, &mut state, frame.delta, config.speed, &config.marker) else {
            log::warn!("Stairs path is empty; nothing to animate");
            break;
        };
        let p = marker.position;
        println!(
            "{:>5} t={:.3} progress={:.3} pos=({:.3}, {:.3}, {:.3}) bounce={:.4}",
            frame.number, frame.time, marker.progress, p.x, p.y, p.z, marker.bounce
        );
    }
    Ok(())
}

fn print_info(kind: IllusionKind) {
    let notes = kind.notes();
    println!("{}\n", notes.title);
    println!("{}\n", notes.summary);
    println!("Why it works: {}\n", notes.principle);
    println!("True geometry: {}", notes.revealed);
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let mut cache = IllusionCache::new();

    match cli.command {
        Command::Geometry { illusion, instances } => print_geometry(&mut cache, &config, illusion, instances),
        Command::Path => {
            validate(&config, IllusionKind::Stairs)?;
            let json = serde_json::to_string_pretty(cache.stairs_path(&config.params))
                .context("Failed to serialize path")?;
            println!("{json}");
            Ok(())
        }
        Command::Simulate { frames, fps, realtime } => {
            if realtime {
                simulate(&mut cache, &config, RealtimeFrames::new().take(frames))
            } else {
                simulate(&mut cache, &config, FixedFrames::new(fps).take(frames))
            }
        }
        Command::Info { illusion } => {
            print_info(illusion);
            Ok(())
        }
    }
}
