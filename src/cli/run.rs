use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;

use super::args::{Arguments, Command, GenCommand};
use crate::arb::ArbDirectory;
use crate::config::{CONFIG_FILE_NAME, Config, default_config_json};
use crate::generator::{GenerateOutcome, Generator};
use crate::sink::FileSink;

#[derive(Debug)]
pub enum RunOutcome {
    Generated {
        output_file: PathBuf,
        outcome: GenerateOutcome,
    },
    Initialized,
}

pub fn run(Arguments { command }: Arguments) -> Result<RunOutcome> {
    match command {
        Some(Command::Gen(cmd)) => generate(cmd),
        Some(Command::Init) => {
            init()?;
            Ok(RunOutcome::Initialized)
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn generate(cmd: GenCommand) -> Result<RunOutcome> {
    let config = Config::load(Path::new("."))?;
    let res_dir = cmd
        .common
        .res_dir
        .unwrap_or_else(|| PathBuf::from(&config.res_dir));
    let output_file = cmd
        .common
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output_file));

    let provider = ArbDirectory::new(res_dir);
    let sink = FileSink::new(&output_file);
    let outcome = Generator::new(&provider, &sink).generate()?;

    Ok(RunOutcome::Generated {
        output_file,
        outcome,
    })
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
