// SPDX-License-Identifier: AGPL-3.0

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use zwrap_config::{CliConfig, Config, DEFAULT_CONFIG_FILE};

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[global]").unwrap();
        writeln!(file, "bitvec-format = \"B\"").unwrap();
        writeln!(file, "size = 8").unwrap();
        writeln!(file, "verbose = 2").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.bitvec_format, "B");
        assert_eq!(config.size, 8);
        assert_eq!(config.verbose, 2);
        assert_eq!(config.real_format, "F");
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_from_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[global").unwrap();
        assert!(Config::from_file(file.path()).is_err());
    }

    #[test]
    fn test_resolve_config_path() {
        let dir = tempfile::tempdir().unwrap();
        let cli = CliConfig::default();
        assert_eq!(cli.resolve_config_path(dir.path()), None);

        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "[global]\n").unwrap();
        assert_eq!(cli.resolve_config_path(dir.path()), Some(path));

        let explicit = CliConfig {
            config: Some("custom.toml".into()),
            ..CliConfig::default()
        };
        assert_eq!(
            explicit.resolve_config_path(dir.path()),
            Some("custom.toml".into())
        );
    }

    #[test]
    fn test_file_then_command_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[global]\nsize = 16\nreal_format = \"D\"").unwrap();

        let mut config = Config::from_file(file.path()).unwrap();
        config.merge(&CliConfig::parse_from(["zwrap", "--size", "64"]));

        assert_eq!(config.size, 64);
        assert_eq!(config.real_format, "D");
    }

    #[test]
    fn test_command_line_default_value_beats_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[global]\nsize = 64\nsigned = true").unwrap();

        let mut config = Config::from_file(file.path()).unwrap();
        config.merge(&CliConfig::parse_from(["zwrap", "--size", "32", "--signed=false"]));

        assert_eq!(config.size, 32);
        assert!(!config.signed);
    }

    #[test]
    fn test_unknown_key_is_reported_once() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[global]\nbit-width = 8").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(zwrap_logs::is_logged("Ignoring unknown config key: bit-width"));
    }
}
