use crate::types::{ExportFormat, LogLevel, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "healthlog")]
#[command(about = "Convert a system health log into CSV for analysis", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Health log to parse [default: paths.log_file from config, ~/system_health.log]
    pub input: Option<PathBuf>,

    /// File to write [default: paths.output_file from config, ~/system_health_data.csv]
    pub output: Option<PathBuf>,

    /// Config file (TOML); falls back to $HEALTHLOG_CONFIG
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain")]
    pub format: OutputFormat,

    #[arg(long, default_value = "csv")]
    pub export: ExportFormat,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,

    /// Do not print next-step hints after the summary
    #[arg(long)]
    pub no_hints: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["healthlog"]).unwrap();
        assert_eq!(cli.input, None);
        assert_eq!(cli.output, None);
        assert_eq!(cli.format, OutputFormat::Plain);
        assert_eq!(cli.export, ExportFormat::Csv);
        assert_eq!(cli.log_level, LogLevel::Warn);
        assert!(!cli.no_hints);
    }

    #[test]
    fn test_positional_paths() {
        let cli = Cli::try_parse_from(["healthlog", "in.log", "out.csv", "--export", "jsonl"])
            .unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("in.log")));
        assert_eq!(cli.output, Some(PathBuf::from("out.csv")));
        assert_eq!(cli.export, ExportFormat::Jsonl);
    }

    #[test]
    fn test_rejects_third_positional() {
        assert!(Cli::try_parse_from(["healthlog", "a", "b", "c"]).is_err());
    }
}
