#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;
    use std::sync::Arc;

    use anyhow::Result;
    use serde_json::json;

    use ctxlog::config::{
        resolve_with, ConfigSource, JsonFileSource, APP_NAME_VAR, CONFIG_PATH_VAR, LEVEL_VAR,
        PRETTY_VAR,
    };
    use ctxlog::{base_engine, Level, LogEngine, Value};

    // In-memory source standing in for the configuration file.
    struct MapSource(HashMap<String, Value>);

    impl ConfigSource for MapSource {
        fn has(&self, key: &str) -> bool {
            self.0.contains_key(key)
        }

        fn get(&self, key: &str) -> Option<Value> {
            self.0.get(key).cloned()
        }
    }

    fn source(root: Value) -> MapSource {
        let map = root
            .as_object()
            .expect("source root must be an object")
            .clone();
        MapSource(map.into_iter().collect())
    }

    fn no_env() -> HashMap<String, String> {
        HashMap::new()
    }

    #[test]
    fn test_defaults_without_source_or_env() {
        let config = resolve_with(None, &no_env());

        assert_eq!(config.level, Level::Info);
        assert!(!config.pretty_print);
        // App name falls back to the invocation identifier.
        let expected = std::env::args().next().expect("argv[0]");
        assert_eq!(config.base.get("_app"), Some(&json!(expected)));
    }

    #[test]
    fn test_logger_section_overlays_defaults() {
        let source = source(json!({
            "logger": { "level": "debug", "prettyPrint": true },
            "appName": "config-test"
        }));

        let config = resolve_with(Some(&source), &no_env());

        assert_eq!(config.level, Level::Debug);
        assert!(config.pretty_print);
        assert_eq!(config.base.get("_app"), Some(&json!("config-test")));
    }

    #[test]
    fn test_partial_logger_section_keeps_other_defaults() {
        let source = source(json!({ "logger": { "level": "warn" } }));

        let config = resolve_with(Some(&source), &no_env());

        assert_eq!(config.level, Level::Warn);
        assert!(!config.pretty_print);
    }

    #[test]
    fn test_invalid_source_values_are_ignored() {
        let source = source(json!({ "logger": { "level": "shouting" } }));

        let config = resolve_with(Some(&source), &no_env());

        assert_eq!(config.level, Level::Info);
    }

    #[test]
    fn test_env_overrides_win_over_source() {
        let source = source(json!({
            "logger": { "level": "debug", "prettyPrint": true },
            "appName": "from-config"
        }));
        let env: HashMap<String, String> = [
            (LEVEL_VAR.to_string(), "error".to_string()),
            (PRETTY_VAR.to_string(), "0".to_string()),
            (APP_NAME_VAR.to_string(), "from-env".to_string()),
        ]
        .into_iter()
        .collect();

        let config = resolve_with(Some(&source), &env);

        assert_eq!(config.level, Level::Error);
        assert!(!config.pretty_print);
        assert_eq!(config.base.get("_app"), Some(&json!("from-env")));
    }

    #[test]
    fn test_env_overrides_are_independent() {
        let env: HashMap<String, String> =
            [(PRETTY_VAR.to_string(), "true".to_string())].into_iter().collect();

        let config = resolve_with(None, &env);

        assert!(config.pretty_print);
        assert_eq!(config.level, Level::Info);
    }

    #[test]
    fn test_unparseable_env_level_is_ignored() {
        let env: HashMap<String, String> =
            [(LEVEL_VAR.to_string(), "loudest".to_string())].into_iter().collect();

        let config = resolve_with(None, &env);

        assert_eq!(config.level, Level::Info);
    }

    #[test]
    fn test_json_file_source() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("default.json");
        let mut file = std::fs::File::create(&path)?;
        writeln!(
            file,
            r#"{{ "logger": {{ "level": "trace" }}, "appName": "file-test" }}"#
        )?;

        let source = JsonFileSource::open(&path)?;
        assert!(source.has("logger"));
        assert!(source.has("appName"));
        assert!(!source.has("missing"));
        assert_eq!(source.get("appName"), Some(json!("file-test")));

        let config = resolve_with(Some(&source), &no_env());
        assert_eq!(config.level, Level::Trace);
        assert_eq!(config.base.get("_app"), Some(&json!("file-test")));
        Ok(())
    }

    #[test]
    fn test_missing_or_invalid_file_degrades_silently() -> Result<()> {
        let env: HashMap<String, String> = [(
            CONFIG_PATH_VAR.to_string(),
            "/nonexistent/ctxlog/default.json".to_string(),
        )]
        .into_iter()
        .collect();
        assert!(JsonFileSource::discover(&env).is_none());

        let dir = tempfile::tempdir()?;
        let path = dir.path().join("default.json");
        std::fs::write(&path, "not json at all")?;
        let env: HashMap<String, String> = [(
            CONFIG_PATH_VAR.to_string(),
            path.to_string_lossy().to_string(),
        )]
        .into_iter()
        .collect();
        assert!(JsonFileSource::discover(&env).is_none());

        // Resolution still succeeds with defaults.
        let config = resolve_with(None, &env);
        assert_eq!(config.level, Level::Info);
        Ok(())
    }

    #[test]
    fn test_base_engine_is_memoized() {
        let first = base_engine();
        let second = base_engine();

        assert!(Arc::ptr_eq(&first, &second));
        // Same effective base bindings across calls, without re-reading
        // the configuration source.
        assert_eq!(first.bindings(), second.bindings());
    }
}
