//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "apkcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// APK files to verify, processed in the given order
    /// (default: the standard build output candidates)
    #[arg(value_name = "APK")]
    pub apks: Vec<PathBuf>,

    /// Number of leading archive entries to list per APK
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(usize))]
    pub preview: usize,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["apkcheck"]).unwrap();
        assert!(cli.apks.is_empty());
        assert_eq!(cli.preview, 10);
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_paths_keep_order() {
        let cli = Cli::try_parse_from(["apkcheck", "b.apk", "a.apk"]).unwrap();
        assert_eq!(cli.apks, vec![PathBuf::from("b.apk"), PathBuf::from("a.apk")]);
    }

    #[test]
    fn test_parse_preview_and_json() {
        let cli = Cli::try_parse_from(["apkcheck", "--json", "--preview", "3", "x.apk"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.preview, 3);
    }
}
