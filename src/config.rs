//! Process-wide configuration: which tuning profile to search with, which
//! host/port the REST façade binds to, and the default language the
//! prober falls back to. Deserialized from an optional JSON file with
//! `serde` (plain `#[derive(Deserialize)]` structs, loaded once in
//! `main`), and otherwise built-in defaults.

use serde::Deserialize;
use wikipath_base::{Profile, SupportedLang};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileName {
    Aggressive,
    Conservative,
}

impl ProfileName {
    pub fn resolve(self) -> Profile {
        match self {
            ProfileName::Aggressive => Profile::aggressive(),
            ProfileName::Conservative => Profile::conservative(),
        }
    }
}

/// On-disk configuration shape. Every field is optional; an absent file
/// (or an absent field) falls back to [`Config::default`].
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub profile: Option<ProfileName>,
    pub default_lang: Option<SupportedLang>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub profile: Profile,
    pub default_lang: SupportedLang,
    pub host: String,
    pub port: u16,
    pub user_agent: String,
}

impl Config {
    pub fn from_file(file: ConfigFile) -> Self {
        let defaults = Config::default();
        Config {
            profile: file.profile.map(ProfileName::resolve).unwrap_or(defaults.profile),
            default_lang: file.default_lang.unwrap_or(defaults.default_lang),
            host: file.host.unwrap_or(defaults.host),
            port: file.port.unwrap_or(defaults.port),
            user_agent: file.user_agent.unwrap_or(defaults.user_agent),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            profile: Profile::aggressive(),
            default_lang: SupportedLang::Ru,
            host: "127.0.0.1".to_string(),
            port: 8080,
            user_agent: "wikipath/0.1 (link-path finder; see repository for contact)".to_string(),
        }
    }
}

/// Loads `path` if given, falling back to defaults on any I/O or parse
/// failure -- config is a convenience, not a precondition, so a bad or
/// missing file should never stop the process from starting.
pub fn load(path: Option<&str>) -> Config {
    let Some(path) = path else { return Config::default() };
    match std::fs::read_to_string(path) {
        Ok(raw) => match serde_json::from_str::<ConfigFile>(&raw) {
            Ok(file) => Config::from_file(file),
            Err(e) => {
                tracing::warn!(path, error = %e, "cannot parse config file, using defaults");
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!(path, error = %e, "cannot read config file, using defaults");
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg = Config::from_file(ConfigFile::default());
        assert_eq!(cfg.default_lang, SupportedLang::Ru);
        assert_eq!(cfg.port, 8080);
    }

    #[test]
    fn explicit_profile_overrides_the_default() {
        let cfg = Config::from_file(ConfigFile { profile: Some(ProfileName::Conservative), ..Default::default() });
        assert_eq!(cfg.profile, Profile::conservative());
    }
}
