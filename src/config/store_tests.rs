//! Unit tests for the settings store

#[cfg(test)]
mod tests {
    use crate::config::{ConfigError, ConfigValue, LineOutcome, Settings, keys};
    use crate::output::OutputFormat;
    use crate::track::TagField;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.get_bool(keys::SEARCH_IN_FILENAME));
        assert!(settings.get_bool(keys::SEARCH_IN_TAG));
        assert!(!settings.get_bool(keys::SEARCH_CASE_SENSITIVE));
        assert_eq!(settings.get_int(keys::NUMBER_TRACK_FORMATED_SPIN_BUTTON), 2);
        assert!(settings.audio_file_player().is_some());
        assert_eq!(settings.get_text(keys::DEFAULT_PATH), None);
        assert!(!settings.is_modified());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("easytagrc");

        let mut settings = Settings::default();
        settings.set_text(keys::AUDIO_FILE_PLAYER, "xdg-open").unwrap();
        settings.set_bool(keys::SEARCH_CASE_SENSITIVE, true).unwrap();
        settings.set_from_str(keys::PAD_DISC_NUMBER_DIGITS, "3").unwrap();
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.audio_file_player(), Some("xdg-open"));
        assert!(loaded.get_bool(keys::SEARCH_CASE_SENSITIVE));
        assert_eq!(loaded.get_int(keys::PAD_DISC_NUMBER_DIGITS), 3);
    }

    #[test]
    fn test_empty_string_is_omitted_and_reverts_to_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("easytagrc");

        let mut settings = Settings::default();
        settings.set_text(keys::AUDIO_FILE_PLAYER, "").unwrap();
        settings.save(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("audio_file_player"));

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(
            loaded.audio_file_player(),
            Settings::default().audio_file_player()
        );
    }

    #[test]
    fn test_file_format_is_registry_ordered_key_value() {
        let mut settings = Settings::default();
        settings.set_text(keys::DEFAULT_PATH, "/music").unwrap();
        let content = settings.to_file_string();

        let keys_in_file: Vec<&str> = content
            .lines()
            .map(|line| line.split_once('=').unwrap().0)
            .collect();
        let registry_keys: Vec<&str> = settings.iter().map(|(entry, _)| entry.key).collect();
        assert_eq!(keys_in_file, registry_keys);
        assert!(content.contains("default_path=/music\n"));
        assert!(content.contains("search_in_tag=1\n"));
        assert!(content.contains("search_case_sensitive=0\n"));
    }

    #[test]
    fn test_value_containing_equals_is_preserved() {
        let mut settings = Settings::default();
        assert_eq!(
            settings.apply_line("audio_file_player=env A=B player"),
            LineOutcome::Applied
        );
        assert_eq!(settings.audio_file_player(), Some("env A=B player"));
    }

    #[test]
    fn test_comments_and_malformed_lines_are_skipped() {
        let mut settings = Settings::default();
        let content = "# comment\n\nfoo\nsearch_in_tag=\nsearch_in_tag=0\n";
        assert_eq!(settings.apply_str(content), 1);
        assert!(!settings.get_bool(keys::SEARCH_IN_TAG));

        assert_eq!(settings.apply_line("# comment"), LineOutcome::Comment);
        assert_eq!(settings.apply_line(""), LineOutcome::Comment);
        assert_eq!(settings.apply_line("foo"), LineOutcome::Malformed);
        assert_eq!(settings.apply_line("search_in_tag="), LineOutcome::Malformed);
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let mut settings = Settings::default();
        settings.set_text(keys::AUDIO_FILE_PLAYER, "mpv").unwrap();
        let before = settings.clone();

        assert_eq!(settings.apply_line("bogus_key=1"), LineOutcome::UnknownKey);
        assert_eq!(settings, before);
    }

    #[test]
    fn test_permissive_numbers() {
        let mut settings = Settings::default();
        settings.apply_line("number_track_formated_spin_button=abc");
        assert_eq!(settings.get_int(keys::NUMBER_TRACK_FORMATED_SPIN_BUTTON), 0);

        settings.apply_line("pad_disc_number_digits=4 digits");
        assert_eq!(settings.get_int(keys::PAD_DISC_NUMBER_DIGITS), 4);

        settings.apply_line("search_in_filename=0");
        assert!(!settings.get_bool(keys::SEARCH_IN_FILENAME));
        settings.apply_line("search_in_filename=5");
        assert!(settings.get_bool(keys::SEARCH_IN_FILENAME));
    }

    #[test]
    fn test_crlf_lines() {
        let mut settings = Settings::default();
        settings.apply_str("audio_file_player=vlc\r\nsearch_in_tag=0\r\n");
        assert_eq!(settings.audio_file_player(), Some("vlc"));
        assert!(!settings.get_bool(keys::SEARCH_IN_TAG));
    }

    #[test]
    fn test_missing_file_is_an_error_but_defaults_survive() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing");

        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));

        let settings = Settings::load_or_default(&path);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_is_not_a_modification() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("easytagrc");
        fs::write(&path, "search_in_tag=0\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert!(!settings.is_modified());
    }

    #[test]
    fn test_setters_validate_keys_and_types() {
        let mut settings = Settings::default();
        assert!(matches!(
            settings.set_bool("bogus", true),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            settings.set(keys::SEARCH_IN_TAG, ConfigValue::Int(1)),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(settings.set_from_str(keys::SEARCH_IN_TAG, "perhaps").is_err());
        assert!(!settings.is_modified());

        settings.set_from_str(keys::SEARCH_IN_TAG, "false").unwrap();
        assert!(settings.is_modified());
    }

    #[test]
    fn test_setters_reject_line_breaks() {
        let mut settings = Settings::default();
        let err = settings
            .set_text(keys::AUDIO_FILE_PLAYER, "mpv\nsearch_in_tag=0")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        assert!(
            settings
                .set(keys::DEFAULT_PATH, ConfigValue::Text("/music\r".into()))
                .is_err()
        );
        assert!(settings.set_from_str(keys::AUDIO_FILE_PLAYER, "a\nb").is_err());
        assert!(!settings.is_modified());

        let content = settings.to_file_string();
        assert!(content.contains("search_in_tag=1\n"));
        assert!(!content.contains("search_in_tag=0"));
    }

    #[test]
    fn test_reset_restores_default() {
        let mut settings = Settings::default();
        settings.set_text(keys::AUDIO_FILE_PLAYER, "mpv").unwrap();
        settings.reset(keys::AUDIO_FILE_PLAYER).unwrap();
        assert_eq!(
            settings.audio_file_player(),
            Settings::default().audio_file_player()
        );
    }

    #[test]
    fn test_enum_setting_uses_lookup_table() {
        let mut settings = Settings::default();
        assert_eq!(settings.search_output_format(), OutputFormat::Text);

        settings.set_from_str(keys::SEARCH_OUTPUT_FORMAT, "json").unwrap();
        assert_eq!(settings.search_output_format(), OutputFormat::Json);

        let err = settings
            .set_from_str(keys::SEARCH_OUTPUT_FORMAT, "xml")
            .unwrap_err();
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_unknown_enum_nick_in_file_falls_back() {
        let mut settings = Settings::default();
        settings.apply_line("search_output_format=yaml");
        assert_eq!(settings.search_output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_flags_setting() {
        let mut settings = Settings::default();
        assert_eq!(settings.search_result_columns(), TagField::ALL.to_vec());

        settings
            .set_search_result_columns(&[TagField::Title, TagField::Filename])
            .unwrap();
        assert_eq!(
            settings.get_text(keys::SEARCH_RESULT_COLUMNS),
            Some("filename,title")
        );
        assert_eq!(
            settings.search_result_columns(),
            vec![TagField::Filename, TagField::Title]
        );

        assert!(
            settings
                .set_from_str(keys::SEARCH_RESULT_COLUMNS, "title,bitrate")
                .is_err()
        );
    }

    #[test]
    fn test_resolve_default_path_keeps_existing_value() {
        let mut settings = Settings::default();
        settings.set_text(keys::DEFAULT_PATH, "/srv/music").unwrap();
        settings.resolve_default_path();
        assert_eq!(settings.get_text(keys::DEFAULT_PATH), Some("/srv/music"));
    }
}
