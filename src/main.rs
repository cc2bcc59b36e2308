mod cli;

use anyhow::{Result, Context};
use clap::Parser;
use log::{info, warn};
use std::fs::File;
use std::io::{IsTerminal, Write};

use host_specificity::io::{write_results, ProfileReader};
use host_specificity::reference::{RegressionReport, REFERENCE_CASES};
use host_specificity::{HostProfile, RankCalculator, SpecificityResult};

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(log_file) = &cli.log_file {
        let file = File::create(log_file)
            .with_context(|| format!("Failed to create log file: {}", log_file.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    let calculator = RankCalculator::new((&cli.maxima).into());

    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };

    if cli.test {
        let report = RegressionReport::run(&calculator, REFERENCE_CASES)?;
        let color = cli.output.is_none() && std::io::stdout().is_terminal();
        report.render(&mut writer, color)?;
    } else if let Some(input) = &cli.input {
        handle_batch(&cli, &calculator, ProfileReader::new(input), &mut writer)?;
    } else if let Some(profile) = cli.profile() {
        // clap requires all five counts whenever --test and --input are absent
        if cli.strict {
            profile.check_nesting()?;
        }
        let result = score(&calculator, profile)?;
        write_results(&mut writer, &[result], cli.format.into(), false)?;
    }

    writer.flush()?;
    Ok(())
}

fn handle_batch(
    cli: &Cli,
    calculator: &RankCalculator,
    reader: ProfileReader,
    writer: &mut dyn Write,
) -> Result<()> {
    let profiles = reader.read_all()?;

    let mut results = Vec::with_capacity(profiles.len());
    for profile in profiles {
        if cli.strict {
            if let Err(e) = profile.check_nesting() {
                warn!("Skipping profile {}: {}", profile, e);
                continue;
            }
        }
        results.push(score(calculator, profile)?);
    }

    info!("Scored {} profiles", results.len());
    write_results(writer, &results, cli.format.into(), true)
}

fn score(calculator: &RankCalculator, profile: HostProfile) -> Result<SpecificityResult> {
    let specificity = calculator
        .score(profile)
        .with_context(|| format!("Failed to score profile {}", profile))?;
    Ok(SpecificityResult::new(profile, specificity))
}
