//! Application configuration: TOML file loading, CLI overrides, and defaults.
//!
//! Resolution order (first found wins, values merge/override):
//! 1. CLI flags (`--config`, `--output`, `--show-ignored`, etc.)
//! 2. `$FPICK_CONFIG` environment variable (path to config file)
//! 3. Project-local `.fpick.toml` in the current working directory
//! 4. Global `~/.config/fpick/config.toml`
//! 5. Built-in defaults

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::fs::walker::{WalkOptions, DEFAULT_MAX_DEPTH};
use crate::output::emit::DEFAULT_OUTPUT_FILE;
use crate::output::OutputMode;

// ── Section configs ──────────────────────────────────────────────────────────

/// General application settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Start with git-ignored files visible.
    pub show_ignored: Option<bool>,
    /// Initial output mode: "stdout", "clipboard", "file".
    pub output: Option<String>,
    /// Target path for the "file" output mode.
    pub output_file: Option<String>,
}

/// Tree construction settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TreeConfig {
    /// Maximum directory depth to scan.
    pub max_depth: Option<usize>,
    /// Directory names skipped in addition to the built-in list.
    pub extra_skip_dirs: Option<Vec<String>>,
}

/// Color settings for a single theme palette.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ThemeColorsConfig {
    pub cursor_bg: Option<String>,
    pub cursor_fg: Option<String>,
    pub dir_fg: Option<String>,
    pub file_fg: Option<String>,
    pub checked_fg: Option<String>,
    pub title_fg: Option<String>,
    pub status_fg: Option<String>,
}

/// Theme configuration section.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ThemeConfig {
    /// Color scheme: "dark", "light", "custom".
    pub scheme: Option<String>,
    /// Custom color overrides.
    pub custom: Option<ThemeColorsConfig>,
}

/// Log file settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level for the `fpick` target: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Directory for rolling log files.
    pub directory: Option<String>,
}

// ── Top-level config ─────────────────────────────────────────────────────────

/// Top-level application configuration.
///
/// All fields are optional so that partial configs from different sources
/// can be merged together (CLI overrides file, file overrides defaults).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub tree: TreeConfig,
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
}

// ── Default constants ────────────────────────────────────────────────────────

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ── Config file locator ──────────────────────────────────────────────────────

/// Return the list of candidate config file paths in priority order.
///
/// Does NOT include the CLI `--config` path, which is handled separately.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var("FPICK_CONFIG") {
        paths.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(".fpick.toml"));
    }

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("fpick").join("config.toml"));
    }

    paths
}

/// Try to read and parse a TOML config file. Returns `None` if the file
/// doesn't exist or can't be parsed (with a warning printed to stderr).
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return None,
    };
    match toml::from_str::<AppConfig>(&content) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            eprintln!(
                "Warning: failed to parse config file {}: {}",
                path.display(),
                e
            );
            None
        }
    }
}

// ── Merge logic ──────────────────────────────────────────────────────────────

impl AppConfig {
    /// Merge `other` on top of `self`; `other`'s `Some` values win.
    pub fn merge(self, other: &AppConfig) -> AppConfig {
        AppConfig {
            general: GeneralConfig {
                show_ignored: other.general.show_ignored.or(self.general.show_ignored),
                output: other.general.output.clone().or(self.general.output),
                output_file: other
                    .general
                    .output_file
                    .clone()
                    .or(self.general.output_file),
            },
            tree: TreeConfig {
                max_depth: other.tree.max_depth.or(self.tree.max_depth),
                extra_skip_dirs: other
                    .tree
                    .extra_skip_dirs
                    .clone()
                    .or(self.tree.extra_skip_dirs),
            },
            theme: ThemeConfig {
                scheme: other.theme.scheme.clone().or(self.theme.scheme),
                custom: match (&self.theme.custom, &other.theme.custom) {
                    (_, Some(o)) => Some(o.clone()),
                    (Some(s), None) => Some(s.clone()),
                    (None, None) => None,
                },
            },
            logging: LoggingConfig {
                level: other.logging.level.clone().or(self.logging.level),
                directory: other.logging.directory.clone().or(self.logging.directory),
            },
        }
    }

    /// Load the final merged configuration.
    ///
    /// `cli_config_path` is an explicit config file path from `--config`.
    /// `cli_overrides` are partial overrides derived from CLI flags.
    pub fn load(cli_config_path: Option<&Path>, cli_overrides: Option<&AppConfig>) -> AppConfig {
        let mut config = AppConfig::default();

        // Walk in reverse so that highest-priority (env var) overwrites lower.
        for path in candidate_paths().iter().rev() {
            if let Some(file_cfg) = load_file(path) {
                config = config.merge(&file_cfg);
            }
        }

        if let Some(cli_path) = cli_config_path {
            if let Some(file_cfg) = load_file(cli_path) {
                config = config.merge(&file_cfg);
            }
        }

        if let Some(overrides) = cli_overrides {
            config = config.merge(overrides);
        }

        config
    }

    // ── Convenience getters with built-in defaults ──────────────────────────

    /// Whether git-ignored files are shown at startup.
    pub fn show_ignored(&self) -> bool {
        self.general.show_ignored.unwrap_or(false)
    }

    /// Initial output mode. Unknown values fall back to stdout.
    pub fn output_mode(&self) -> OutputMode {
        self.general
            .output
            .as_deref()
            .and_then(OutputMode::parse)
            .unwrap_or_default()
    }

    /// Target path for file output.
    pub fn output_file(&self) -> PathBuf {
        PathBuf::from(
            self.general
                .output_file
                .as_deref()
                .unwrap_or(DEFAULT_OUTPUT_FILE),
        )
    }

    /// Maximum scan depth.
    pub fn max_depth(&self) -> usize {
        self.tree.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }

    /// Walker options: built-in skip list plus configured extras.
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions::default()
            .with_extra_skips(self.tree.extra_skip_dirs.clone().unwrap_or_default())
            .max_depth(self.max_depth())
    }

    /// Log level for the `fpick` target.
    pub fn log_level(&self) -> &str {
        self.logging.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Log directory override, if configured.
    pub fn log_directory(&self) -> Option<PathBuf> {
        self.logging.directory.as_ref().map(PathBuf::from)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_values() {
        let cfg = AppConfig::default();
        assert!(!cfg.show_ignored());
        assert_eq!(cfg.output_mode(), OutputMode::Stdout);
        assert_eq!(cfg.output_file(), PathBuf::from("fpick-output.txt"));
        assert_eq!(cfg.max_depth(), 10);
        assert_eq!(cfg.theme.scheme, None);
        assert_eq!(cfg.log_level(), "info");
        assert!(cfg.log_directory().is_none());
    }

    #[test]
    fn test_toml_parsing_full() {
        let toml = r#"
[general]
show_ignored = true
output = "clipboard"
output_file = "context.txt"

[tree]
max_depth = 4
extra_skip_dirs = ["fixtures", "snapshots"]

[theme]
scheme = "light"

[logging]
level = "debug"
directory = "/tmp/fpick-logs"
"#;
        let cfg: AppConfig = toml::from_str(toml).expect("parse failed");
        assert!(cfg.show_ignored());
        assert_eq!(cfg.output_mode(), OutputMode::Clipboard);
        assert_eq!(cfg.output_file(), PathBuf::from("context.txt"));
        assert_eq!(cfg.max_depth(), 4);
        assert_eq!(cfg.theme.scheme.as_deref(), Some("light"));
        assert_eq!(cfg.log_level(), "debug");
        assert_eq!(cfg.log_directory(), Some(PathBuf::from("/tmp/fpick-logs")));

        let walk = cfg.walk_options();
        assert_eq!(walk.max_depth, 4);
        assert!(walk.skip_dirs.contains("fixtures"));
        assert!(walk.skip_dirs.contains("node_modules"));
    }

    #[test]
    fn test_toml_parsing_partial() {
        let toml = r#"
[general]
output = "file"
"#;
        let cfg: AppConfig = toml::from_str(toml).expect("parse failed");
        assert_eq!(cfg.output_mode(), OutputMode::File);
        assert!(!cfg.show_ignored());
        assert_eq!(cfg.max_depth(), 10);
    }

    #[test]
    fn test_toml_parsing_empty() {
        let cfg: AppConfig = toml::from_str("").expect("parse failed");
        assert!(!cfg.show_ignored());
        assert_eq!(cfg.output_mode(), OutputMode::Stdout);
    }

    #[test]
    fn test_unknown_output_falls_back_to_stdout() {
        let cfg: AppConfig = toml::from_str("[general]\noutput = \"printer\"\n").expect("parse");
        assert_eq!(cfg.output_mode(), OutputMode::Stdout);
    }

    #[test]
    fn test_merge_overrides() {
        let base = AppConfig {
            general: GeneralConfig {
                show_ignored: Some(false),
                output: Some("file".to_string()),
                ..Default::default()
            },
            tree: TreeConfig {
                max_depth: Some(3),
                ..Default::default()
            },
            ..Default::default()
        };

        let over = AppConfig {
            general: GeneralConfig {
                show_ignored: Some(true),
                // output not set, keeps base
                ..Default::default()
            },
            ..Default::default()
        };

        let merged = base.merge(&over);
        assert!(merged.show_ignored()); // overridden
        assert_eq!(merged.output_mode(), OutputMode::File); // from base
        assert_eq!(merged.max_depth(), 3); // from base
    }

    #[test]
    fn test_merge_none_does_not_clear_some() {
        let base = AppConfig {
            logging: LoggingConfig {
                level: Some("warn".to_string()),
                directory: Some("/var/log/fpick".to_string()),
            },
            ..Default::default()
        };
        let over = AppConfig::default();

        let merged = base.merge(&over);
        assert_eq!(merged.log_level(), "warn");
        assert_eq!(merged.log_directory(), Some(PathBuf::from("/var/log/fpick")));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg_path = dir.path().join("test-config.toml");
        let mut f = std::fs::File::create(&cfg_path).expect("create");
        writeln!(
            f,
            r#"
[general]
show_ignored = true

[tree]
max_depth = 2
"#
        )
        .expect("write");

        let cfg = load_file(&cfg_path).expect("load");
        assert!(cfg.show_ignored());
        assert_eq!(cfg.max_depth(), 2);
        assert_eq!(cfg.output_mode(), OutputMode::Stdout);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_file(Path::new("/nonexistent/config.toml"));
        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_toml_returns_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg_path = dir.path().join("bad.toml");
        std::fs::write(&cfg_path, "this is { not valid toml").expect("write");
        assert!(load_file(&cfg_path).is_none());
    }

    #[test]
    fn test_load_with_cli_overrides() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg_path = dir.path().join("config.toml");
        std::fs::write(
            &cfg_path,
            r#"
[general]
show_ignored = true
output = "clipboard"
"#,
        )
        .expect("write");

        let cli_overrides = AppConfig {
            general: GeneralConfig {
                output: Some("file".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let cfg = AppConfig::load(Some(&cfg_path), Some(&cli_overrides));
        // CLI override wins
        assert_eq!(cfg.output_mode(), OutputMode::File);
        // File value preserved (not overridden by CLI)
        assert!(cfg.show_ignored());
    }

    #[test]
    fn test_theme_custom_colors() {
        let toml = r##"
[theme]
scheme = "custom"

[theme.custom]
cursor_bg = "#1a1b26"
dir_fg = "#7aa2f7"
"##;
        let cfg: AppConfig = toml::from_str(toml).expect("parse");
        assert_eq!(cfg.theme.scheme.as_deref(), Some("custom"));
        let custom = cfg.theme.custom.as_ref().expect("custom present");
        assert_eq!(custom.cursor_bg.as_deref(), Some("#1a1b26"));
        assert_eq!(custom.dir_fg.as_deref(), Some("#7aa2f7"));
        assert!(custom.file_fg.is_none());
    }
}
