//! Command-line arguments for the `pawns_only_chess` binary.

use clap::Parser;

use crate::console::session_config::SessionConfig;

#[derive(Debug, Parser)]
#[command(name = "pawns_only_chess", about = "Two-player pawns-only chess on the terminal")]
pub struct CliArgs {
    /// Start from a pawn FEN, e.g. "8/pppppppp/8/8/8/8/PPPPPPPP/8 w -".
    #[arg(long, value_name = "PFEN")]
    pub position: Option<String>,

    /// Print the game record when the session ends.
    #[arg(long)]
    pub record: bool,

    /// Skip the title line.
    #[arg(long)]
    pub no_banner: bool,
}

impl CliArgs {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            show_banner: !self.no_banner,
            print_record: self.record,
            start_position: self.position.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::Parser;

    #[test]
    fn defaults_match_plain_session() {
        let args = CliArgs::try_parse_from(["pawns_only_chess"]).expect("no args should parse");
        let config = args.session_config();
        assert!(config.show_banner);
        assert!(!config.print_record);
        assert!(config.start_position.is_none());
    }

    #[test]
    fn flags_map_onto_config() {
        let args = CliArgs::try_parse_from([
            "pawns_only_chess",
            "--position",
            "8/8/8/8/p7/8/P7/8 w -",
            "--record",
            "--no-banner",
        ])
        .expect("flags should parse");
        let config = args.session_config();
        assert!(!config.show_banner);
        assert!(config.print_record);
        assert_eq!(config.start_position.as_deref(), Some("8/8/8/8/p7/8/P7/8 w -"));
    }
}
