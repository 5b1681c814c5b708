use crate::args::Cli;
use crate::config::Config;
use crate::summary::{Summary, render_hints};
use crate::types::OutputFormat;
use crate::writer;
use anyhow::{Context, Result};

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let input = cli.input.unwrap_or_else(|| config.log_file());
    let output = cli.output.unwrap_or_else(|| config.output_file());
    let plain = cli.format == OutputFormat::Plain;

    if plain {
        println!("Parsing log file: {}", input.display());
        println!("Output {} file: {}", cli.export.label(), output.display());
    }

    let records = healthlog_parser::parse_log_file(&input)?;
    tracing::info!(records = records.len(), input = %input.display(), "parsed log");

    if records.is_empty() {
        match cli.format {
            OutputFormat::Plain => println!("No records found in log file!"),
            OutputFormat::Json => print_json(&Summary::from_records(&records))?,
        }
        return Ok(());
    }

    writer::export(&output, &records, cli.export)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    tracing::info!(output = %output.display(), format = %cli.export, "wrote records");

    let summary = Summary::from_records(&records).with_output(&output);
    match cli.format {
        OutputFormat::Plain => {
            println!(
                "Successfully wrote {} records to {}",
                records.len(),
                output.display()
            );
            println!();
            print!("{}", summary.render_plain());

            if config.output.hints && !cli.no_hints {
                println!();
                print!("{}", render_hints(&output));
            }
        }
        OutputFormat::Json => print_json(&summary)?,
    }

    Ok(())
}

fn print_json(summary: &Summary) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}
