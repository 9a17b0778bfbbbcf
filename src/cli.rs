use std::path::PathBuf;

use clap::Parser;

use crate::config::Overrides;
use crate::transformer::Mode;

/// Turn free-form text into a CTF-style `prefix{...}` flag.
#[derive(Parser, Debug)]
#[command(name = "flaggen", version, about)]
pub struct Cli {
    /// Text to turn into a flag; omit it to start the interactive shell
    pub text: Option<String>,

    /// Flag prefix (substitution mode only)
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Transform policy
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// YAML config file (default: ./config.yaml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Copy the generated flag to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Artificial generation delay in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            prefix: self.prefix.clone(),
            mode: self.mode,
            generation_delay_ms: self.delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;
    use crate::transformer::Mode;

    #[test]
    fn parse_one_shot() {
        let cli = Cli::parse_from([
            "flaggen", "Hello There", "--prefix", "CTF", "-m", "strict", "--copy",
        ]);

        assert_eq!(cli.text.as_deref(), Some("Hello There"));
        assert!(cli.copy);

        let overrides = cli.overrides();
        assert_eq!(overrides.prefix.as_deref(), Some("CTF"));
        assert_eq!(overrides.mode, Some(Mode::Strict));
        assert_eq!(overrides.generation_delay_ms, None);
    }

    #[test]
    fn parse_interactive() {
        let cli = Cli::parse_from(["flaggen", "--delay-ms", "0"]);

        assert!(cli.text.is_none());
        assert_eq!(cli.delay_ms, Some(0));
    }

    #[test]
    fn parse_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["flaggen", "-m", "rot13"]).is_err());
    }
}
