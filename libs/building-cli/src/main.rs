use anyhow::Result;
use building_cli::run;
use config::constants::LOG_LEVEL_ENV;
use env_logger::Env;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().filter_or(LOG_LEVEL_ENV, "warn")).try_init()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let export = run(&args, Path::new("."))?;
    println!("OBJ file generated: {}", export.filename);

    Ok(())
}
