use std::{env, fs};

use anyhow::Context;
use log::info;

use spsa::{SpsaBuilder, SpsaSpec};

const SPEC_VAR: &str = "SPSA_SPEC";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .or_else(|| env::var(SPEC_VAR).ok())
        .with_context(|| format!("usage: spsa <spec.json> (or set {SPEC_VAR})"))?;

    let raw = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let spec: SpsaSpec = serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))?;
    info!("loaded spec from {path}");

    let rounds = spec.rounds;
    let loss = spec.loss.loss();

    let mut optimizer = SpsaBuilder::new().build(spec)?;
    let theta = optimizer.run(rounds)?;

    println!("theta = {theta}");
    println!("loss  = {}", loss(theta));
    Ok(())
}
