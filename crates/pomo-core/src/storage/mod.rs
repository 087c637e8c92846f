mod config;

pub use config::{Config, ScheduleConfig};

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Returns `~/.config/pomo[-dev]/` based on POMO_ENV.
///
/// Set POMO_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let env = std::env::var("POMO_ENV").ok();
    data_dir_in(&home, env.as_deref())
}

/// Resolve and create the data directory under `home` for the given
/// POMO_ENV value.
fn data_dir_in(home: &Path, env: Option<&str>) -> Result<PathBuf> {
    let name = match env {
        Some("dev") => "pomo-dev",
        _ => "pomo",
    };
    let dir = home.join(".config").join(name);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_dir_is_created_under_home() {
        let home = tempfile::tempdir().unwrap();
        let dir = data_dir_in(home.path(), None).unwrap();
        assert_eq!(dir, home.path().join(".config").join("pomo"));
        assert!(dir.is_dir());

        let other = data_dir_in(home.path(), Some("production")).unwrap();
        assert_eq!(other, dir);
    }

    #[test]
    fn dev_env_uses_separate_dir() {
        let home = tempfile::tempdir().unwrap();
        let dir = data_dir_in(home.path(), Some("dev")).unwrap();
        assert_eq!(dir, home.path().join(".config").join("pomo-dev"));
        assert!(dir.is_dir());
    }

    #[test]
    fn unwritable_home_is_an_io_error() {
        let home = tempfile::tempdir().unwrap();
        let file = home.path().join("not-a-dir");
        std::fs::write(&file, "").unwrap();
        assert!(matches!(
            data_dir_in(&file, None),
            Err(crate::error::CoreError::Io(_))
        ));
    }

    #[test]
    fn config_round_trips_through_data_dir() {
        let home = tempfile::tempdir().unwrap();
        let path = data_dir_in(home.path(), Some("dev")).unwrap().join("config.toml");
        let mut config = Config::default();
        config.set("schedule.focus_duration", "45").unwrap();
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }
}
