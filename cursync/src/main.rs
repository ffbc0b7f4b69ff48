// src/main.rs
use anyhow::Result;
use clap::Parser as _;
use cursync::{Args, logging, run};

fn main() -> Result<()> {
    logging::init()?;
    let args = Args::parse();
    run(args)
}
