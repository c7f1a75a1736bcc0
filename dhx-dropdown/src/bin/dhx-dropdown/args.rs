//! Command-line argument parsing.
//!
//! ```text
//! dhx-dropdown [--config PATH] [--position H,V,H,V] [--animation CLASS] [--open]
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use dhx_dropdown::config::DropdownConfig;
use dhx_dropdown::Placement;

/// Overrides collected from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub position: Option<Placement>,
    pub animation: Option<String>,
    pub open: bool,
}

impl Args {
    /// Apply overrides on top of the loaded configuration.
    pub fn apply(self, mut config: DropdownConfig) -> DropdownConfig {
        if let Some(position) = self.position {
            config = config.with_position(position);
        }
        if let Some(animation) = self.animation {
            config = config.with_animation(animation);
        }
        if self.open {
            config = config.with_visible(true);
        }
        config
    }
}

/// Parse the process arguments.
pub fn parse_args() -> Result<Args> {
    parse(std::env::args().skip(1))
}

/// Parse an argument list (without the program name).
pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().context("--config needs a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--position" | "-p" => {
                let value = args.next().context("--position needs four alignments")?;
                let position = value
                    .parse::<Placement>()
                    .with_context(|| format!("invalid --position `{value}`"))?;
                parsed.position = Some(position);
            }
            "--animation" | "-a" => {
                parsed.animation = Some(args.next().context("--animation needs a class name")?);
            }
            "--open" => parsed.open = true,
            other => bail!("unknown argument `{other}`"),
        }
    }

    log::debug!("parsed arguments: {parsed:?}");
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        parse(list.iter().map(ToString::to_string))
    }

    #[test]
    fn no_arguments_use_defaults() {
        assert_eq!(args(&[]).expect("parses"), Args::default());
    }

    #[test]
    fn all_flags() {
        let parsed = args(&[
            "--config",
            "/tmp/dd.toml",
            "--position",
            "left,bottom,left,top",
            "--animation",
            "ani-fade",
            "--open",
        ])
        .expect("parses");

        assert_eq!(parsed.config, Some(PathBuf::from("/tmp/dd.toml")));
        assert_eq!(
            parsed.position,
            Some("left bottom left top".parse().expect("valid placement"))
        );
        assert_eq!(parsed.animation.as_deref(), Some("ani-fade"));
        assert!(parsed.open);
    }

    #[test]
    fn invalid_position_is_an_error() {
        let err = args(&["--position", "left,middle,left,top"]).unwrap_err();
        assert!(format!("{err:#}").contains("invalid vertical alignment `middle`"));
    }

    #[test]
    fn missing_value_is_an_error() {
        assert!(args(&["--animation"]).is_err());
    }

    #[test]
    fn unknown_flag_is_an_error() {
        assert!(args(&["--verbose"]).is_err());
    }

    #[test]
    fn overrides_apply_on_top_of_config() {
        let parsed = args(&["--animation", "ani-fade", "--open"]).expect("parses");
        let config = parsed.apply(DropdownConfig::default());
        assert_eq!(config.dropdown.animation, "ani-fade");
        assert!(config.dropdown.visible);
        assert_eq!(config.dropdown.position, Placement::default());
    }
}
