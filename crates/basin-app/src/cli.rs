use std::path::PathBuf;

use clap::Parser;

/// Basin: a neon water basin circled by two rotating rings of text.
#[derive(Parser, Debug)]
#[command(name = "basin", version, about)]
pub struct Args {
    /// Config file path override. Created with defaults if missing.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding `models/` and `img/`, overriding `assets.base_dir`.
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Log filter directive override (e.g. `debug` or `basin_scene=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub dump_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        let args = Args::try_parse_from(["basin"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.assets.is_none());
        assert!(args.log_level.is_none());
        assert!(!args.dump_config);
    }

    #[test]
    fn all_arguments() {
        let args = Args::try_parse_from([
            "basin",
            "--config",
            "/tmp/basin.toml",
            "--assets",
            "/srv/basin",
            "--log-level",
            "debug",
            "--dump-config",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/basin.toml")));
        assert_eq!(args.assets, Some(PathBuf::from("/srv/basin")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.dump_config);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["basin", "--bogus"]).is_err());
    }
}
