use springmesh::{Driver, SimConfig};

use clap::Parser;
use anyhow::{Context, Result};

use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scene description file to load
    #[arg(short, long)]
    scene: PathBuf,

    /// Runtime settings (YAML); defaults are used if the file is absent
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 250)]
    ticks: u32,
}

// keep main clean: all file I/O happens up here, never in the core
fn load_config(path: &PathBuf) -> Result<SimConfig> {
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(SimConfig::default());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    // An empty document is YAML null, which no amount of field defaulting
    // turns into a mapping; treat it as "use the defaults".
    if text.trim().is_empty() {
        return Ok(SimConfig::default());
    }
    let cfg = serde_yaml::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let cfg = load_config(&args.config)?;
    let mut driver = Driver::from_config(&cfg);
    let group = driver.add_group();

    let text = fs::read_to_string(&args.scene)
        .with_context(|| format!("reading scene {}", args.scene.display()))?;
    driver.load_scene(group, &text)?;

    for _ in 0..args.ticks {
        driver.step(cfg.dt);
    }

    for (i, e) in driver.group(group).entities().iter().enumerate() {
        println!(
            "entity {i}: pos=({:.3}, {:.3}) vel=({:.3}, {:.3})",
            e.x.x, e.x.y, e.v.x, e.v.y
        );
    }
    for (i, c) in driver.group(group).connectors().iter().enumerate() {
        println!(
            "connector {i}: {} -> {} stress={:.3}",
            c.start,
            c.end,
            c.stress(driver.group(group).entities())
        );
    }

    Ok(())
}
