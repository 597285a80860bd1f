use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Detection rule workspace in the terminal.
///
/// Browse the built-in rule templates, edit them, save edits locally and
/// copy them to the clipboard, with a syntax-highlighted view.
#[derive(Parser, Debug)]
#[command(name = "crafted-cli", version, about = "Detection rule workspace in the terminal")]
pub struct CliArgs {
    /// Path to config file (default: ~/.config/craftedsignal/config.toml)
    #[arg(long, env = "CRAFTED_CONFIG")]
    pub config: Option<String>,

    /// Directory of additional template YAML files
    #[arg(long, env = "CRAFTED_TEMPLATES_DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Directory holding saved overrides
    #[arg(long, env = "CRAFTED_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Template to open first (overrides config)
    #[arg(long)]
    pub template: Option<String>,

    /// Keep saved edits in memory only
    #[arg(long)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Interactive rule editor (default)
    Edit,

    /// List available templates
    List,

    /// Run the auto-advancing card carousel
    Carousel {
        /// Number of cards in the slider
        #[arg(long, default_value_t = 6)]
        cards: usize,

        /// Card width in pixels
        #[arg(long, default_value_t = 240.0)]
        card_width: f64,

        /// Gap between cards in pixels
        #[arg(long, default_value_t = 16.0)]
        gap: f64,

        /// Visible slider width in pixels
        #[arg(long, default_value_t = 512.0)]
        viewport: f64,

        /// Stop after this many advances (runs until Ctrl+C if unset)
        #[arg(long)]
        ticks: Option<u64>,

        /// Advance period in milliseconds (overrides config)
        #[arg(long)]
        interval_ms: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_subcommand() {
        let args = CliArgs::try_parse_from(["crafted-cli"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.ephemeral);
    }

    #[test]
    fn parses_carousel_options() {
        let args =
            CliArgs::try_parse_from(["crafted-cli", "carousel", "--cards", "4", "--ticks", "3"]).unwrap();
        match args.command {
            Some(Command::Carousel { cards, ticks, gap, .. }) => {
                assert_eq!(cards, 4);
                assert_eq!(ticks, Some(3));
                assert_eq!(gap, 16.0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_before_subcommand() {
        let args = CliArgs::try_parse_from([
            "crafted-cli",
            "--ephemeral",
            "--template",
            "kerberoasting",
            "edit",
        ])
        .unwrap();
        assert!(args.ephemeral);
        assert_eq!(args.template.as_deref(), Some("kerberoasting"));
        assert_eq!(args.command, Some(Command::Edit));
    }
}
