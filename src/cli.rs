use anyhow::Context;
use clap::Parser;

use crate::config::Config;

/// Urdash - terminal client for the UR Dashboard Server
#[derive(Parser, Debug)]
#[command(name = "urdash")]
#[command(version)]
#[command(about = "Terminal client for the Universal Robots Dashboard Server")]
#[command(long_about = "Urdash connects to a robot controller's dashboard port (29999) and lets
an operator send high level commands such as load, play, stop, or power on,
showing each response in a scrolling transcript.

Quick start:
  1. Run 'urdash --init' to generate a config file (optional)
  2. Run 'urdash --host 10.0.0.2', then press Enter to connect
  3. Type a command (Tab completes) and press Enter to send")]
pub struct Cli {
    /// Path to config file (defaults to .urdash.toml)
    #[arg(short, long, default_value = ".urdash.toml")]
    pub config: String,

    /// Robot address (overrides config file setting)
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Dashboard server port (overrides config file setting)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Connect as soon as the TUI starts
    #[arg(long)]
    pub connect: bool,

    /// Initialize a new .urdash.toml config file
    #[arg(long)]
    pub init: bool,
}

/// Write a starter config file. Refuses to overwrite an existing one.
pub fn init_config(path: &str) -> anyhow::Result<()> {
    if std::path::Path::new(path).exists() {
        anyhow::bail!("config file {} already exists", path);
    }
    let config = Config::default();
    config
        .save(path)
        .with_context(|| format!("could not write {}", path))?;
    println!("Created {}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_when_no_args() {
        let cli = Cli::parse_from(["urdash"]);
        assert_eq!(cli.config, ".urdash.toml");
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());
        assert!(!cli.connect);
        assert!(!cli.init);
    }

    #[test]
    fn host_and_port_overrides_parse() {
        let cli = Cli::parse_from(["urdash", "-H", "10.0.0.2", "--port", "30001", "--connect"]);
        assert_eq!(cli.host.as_deref(), Some("10.0.0.2"));
        assert_eq!(cli.port, Some(30001));
        assert!(cli.connect);
    }

    #[test]
    fn init_config_refuses_to_overwrite() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(".urdash.toml");
        let path_str = path.to_str().unwrap();

        init_config(path_str).unwrap();
        assert!(path.exists());

        let err = init_config(path_str).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
