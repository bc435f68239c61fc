use std::path::PathBuf;

pub const DEFAULT_DATABASE_PATH: &str = "users.db";
pub const DEFAULT_IMPORT_PATH: &str = "sample_users.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_path: PathBuf, // sqlite file, created on first open
    pub import_path: PathBuf,   // csv file read by menu option 2
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            import_path: PathBuf::from(DEFAULT_IMPORT_PATH),
        }
    }
}

impl AppConfig {
    /// Build the config from `USERSDB_DATABASE` and `USERSDB_IMPORT_FILE`,
    /// falling back to the defaults when a variable is unset or blank.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path_or = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };
        Self {
            database_path: path_or("USERSDB_DATABASE", DEFAULT_DATABASE_PATH),
            import_path: path_or("USERSDB_IMPORT_FILE", DEFAULT_IMPORT_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_match_fixed_locations() {
        let config = AppConfig::default();
        assert_eq!(config.database_path, PathBuf::from("users.db"));
        assert_eq!(config.import_path, PathBuf::from("sample_users.csv"));
    }

    #[test]
    fn unset_variables_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn variables_override_paths() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("USERSDB_DATABASE", "/tmp/people.db"),
            ("USERSDB_IMPORT_FILE", " people.csv "),
        ]));
        assert_eq!(config.database_path, PathBuf::from("/tmp/people.db"));
        assert_eq!(config.import_path, PathBuf::from("people.csv"));
    }

    #[test]
    fn blank_variable_is_ignored() {
        let config = AppConfig::from_lookup(lookup_from(&[("USERSDB_DATABASE", "   ")]));
        assert_eq!(config.database_path, PathBuf::from(DEFAULT_DATABASE_PATH));
    }
}
