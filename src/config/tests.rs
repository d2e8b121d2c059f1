use super::load::{default_config_path, default_log_path, resolve_config_path};
use super::schema::*;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_playdeck_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("PLAYDECK_CONFIG_PATH", "/tmp/playdeck-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        PathBuf::from("/tmp/playdeck-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/xdg-config-home")
            .join("playdeck")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("playdeck")
            .join("config.toml")
    );
}

#[test]
fn default_log_path_uses_xdg_state_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_STATE_HOME", "/tmp/xdg-state");

    assert_eq!(
        default_log_path().unwrap(),
        PathBuf::from("/tmp/xdg-state")
            .join("playdeck")
            .join("playdeck.log")
    );
}

#[test]
fn defaults_match_the_classic_player() {
    let s = Settings::default();
    assert_eq!(s.audio.initial_volume, 70.0);
    assert_eq!(
        s.library.extensions,
        vec!["mp3".to_string(), "wav".into(), "ogg".into(), "flac".into()]
    );
    assert!(!s.library.recursive);
    assert_eq!(s.library.display, DisplayName::FileName);
    assert!(s.playback.auto_advance);
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
initial_volume = 40
volume_step = 10

[library]
music_dir = "/srv/music"
extensions = ["mp3"]
recursive = true
max_depth = 3
include_hidden = false
display = "stem"

[playback]
auto_advance = false

[controls]
scrub_seconds = 9

[ui]
header_text = "hello"
tick_ms = 500
show_tenths = true

[logging]
filter = "playdeck=debug"
file = "/tmp/playdeck.log"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("PLAYDECK_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("PLAYDECK__AUDIO__INITIAL_VOLUME");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.initial_volume, 40.0);
    assert_eq!(s.audio.volume_step, 10.0);
    assert_eq!(s.library.music_dir, Some(PathBuf::from("/srv/music")));
    assert_eq!(s.library.extensions, vec!["mp3".to_string()]);
    assert!(s.library.recursive);
    assert_eq!(s.library.max_depth, Some(3));
    assert!(!s.library.include_hidden);
    assert_eq!(s.library.display, DisplayName::Stem);
    assert!(!s.playback.auto_advance);
    assert_eq!(s.controls.scrub_seconds, 9);
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.ui.tick_ms, 500);
    assert!(s.ui.show_tenths);
    assert_eq!(s.logging.filter, "playdeck=debug");
    assert_eq!(s.logging.file, Some(PathBuf::from("/tmp/playdeck.log")));
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
initial_volume = 70
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("PLAYDECK_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("PLAYDECK__AUDIO__INITIAL_VOLUME", "25");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.initial_volume, 25.0);
}

#[test]
fn validate_rejects_out_of_range_tick() {
    let mut s = Settings::default();
    s.ui.tick_ms = 5;
    assert!(s.validate().is_err());
    s.ui.tick_ms = 1000;
    assert!(s.validate().is_ok());
}

#[test]
fn validate_rejects_empty_extensions_and_bad_step() {
    let mut s = Settings::default();
    s.library.extensions = vec![" . ".into()];
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.audio.volume_step = 0.0;
    assert!(s.validate().is_err());
}

#[test]
fn startup_dir_prefers_argument_then_config() {
    let mut s = Settings::default();
    s.library.music_dir = Some(PathBuf::from("/srv/music"));
    assert_eq!(
        s.startup_dir(Some("/tmp/arg".into())),
        PathBuf::from("/tmp/arg")
    );
    assert_eq!(s.startup_dir(None), PathBuf::from("/srv/music"));
}
