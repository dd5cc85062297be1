use clap::Parser;
use std::path::PathBuf;

use crate::app::ViewMode;

/// Vitrine - drag, fold and slide components in your terminal
#[derive(Parser, Debug)]
#[command(name = "vitrine", version, about)]
pub struct Args {
    /// View to open first (overrides `ui.start_view`)
    #[arg(long, short = 'v', value_enum)]
    pub view: Option<ViewMode>,

    /// Read configuration from this file instead of the default location
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Write logs to this file (overrides `logging.file`)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Generate default config.toml to stdout
    #[arg(long)]
    pub generate_config: bool,

    /// Print the final component state as JSON on exit
    #[arg(long)]
    pub dump_state: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_view_and_flags() {
        let args = Args::parse_from(["vitrine", "--view", "sidebar", "--dump-state"]);
        assert_eq!(args.view, Some(ViewMode::Sidebar));
        assert!(args.dump_state);
        assert!(!args.generate_config);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_rejects_unknown_view() {
        assert!(Args::try_parse_from(["vitrine", "--view", "grid"]).is_err());
    }
}
