use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::cli::ConfigCommands;
use crate::config::{Config, KEYS};

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();

    println!("{} {}", "Config file:".bold(), path.display());
    println!();
    let start_slide = config.start_slide().map(|n| n.to_string());
    let rows = [
        ("defaults.theme", config.theme(), "dark"),
        ("defaults.transition", config.transition(), "slide"),
        ("defaults.start_slide", start_slide.as_deref(), "1"),
        ("defaults.display_mode", config.display_mode(), "simple"),
    ];
    for (key, value, default) in rows {
        let key = format!("{key:<24}");
        match value {
            Some(v) => println!("  {} {v}", key.cyan()),
            None => println!("  {} {}", key.cyan(), format!("{default} (default)").dimmed()),
        }
    }
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let path = Config::path()?;
    set_at(&path, key, value)?;
    println!("{} {key} = {value}", "Saved".green().bold());
    println!("  {}", format!("valid keys: {}", KEYS.join(", ")).dimmed());
    Ok(())
}

/// Apply one `key = value` edit to the file at `path`, keeping every other key.
fn set_at(path: &Path, key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_for_edit(path)?;
    config.set(key, value)?;
    config.save_to(path)?;
    tracing::debug!(key, value, path = %path.display(), "config updated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_keeps_existing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "defaults:\n  theme: light\n  start_slide: 5\n").unwrap();

        set_at(&path, "defaults.display_mode", "advanced").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme(), Some("light"));
        assert_eq!(config.start_slide(), Some(5));
        assert_eq!(config.display_mode(), Some("advanced"));
    }

    #[test]
    fn test_set_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("herodeck").join("config.yaml");

        set_at(&path, "defaults.theme", "dark").unwrap();

        assert_eq!(Config::load_from(&path).unwrap().theme(), Some("dark"));
    }

    #[test]
    fn test_set_leaves_malformed_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let broken = "defaults: {theme: light, start_slide: 5, transition: [fade";
        std::fs::write(&path, broken).unwrap();

        assert!(set_at(&path, "defaults.display_mode", "advanced").is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), broken);
    }

    #[test]
    fn test_invalid_value_is_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        assert!(set_at(&path, "defaults.theme", "neon").is_err());
        assert!(!path.exists());
    }
}
