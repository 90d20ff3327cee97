use super::OverpassConfig;
use crate::model::{feature::SignKind, task::PreviewConfig, SignCliError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uom::si::{f64::Length, length::meter};

/// prefix of environment variables that override configuration values, such
/// as `SIGN_BEARING_SHORT_WAY_THRESHOLD_METERS=40`. nested values use a double
/// underscore: `SIGN_BEARING_PREVIEW__ZOOM=18`.
pub const ENV_PREFIX: &str = "SIGN_BEARING";

/// defines behaviors for a sign bearing run
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct SignBearingConfiguration {
    /// ways strictly shorter than this use the intersection-based strategy
    pub short_way_threshold_meters: f64,
    /// sign kinds to process, in output order within each way
    pub sign_kinds: Vec<SignKind>,
    pub parallelize: bool,
    pub preview: PreviewConfig,
    pub overpass: OverpassConfig,
}

impl Default for SignBearingConfiguration {
    fn default() -> Self {
        Self {
            short_way_threshold_meters: 50.0,
            sign_kinds: SignKind::ALL.to_vec(),
            parallelize: true,
            preview: PreviewConfig::default(),
            overpass: OverpassConfig::default(),
        }
    }
}

impl SignBearingConfiguration {
    pub fn short_way_threshold(&self) -> Length {
        Length::new::<meter>(self.short_way_threshold_meters)
    }

    pub fn validate(&self) -> Result<(), SignCliError> {
        if !self.short_way_threshold_meters.is_finite() || self.short_way_threshold_meters <= 0.0
        {
            return Err(SignCliError::ConfigurationError(format!(
                "short_way_threshold_meters must be a positive number, found {}",
                self.short_way_threshold_meters
            )));
        }
        if self.sign_kinds.is_empty() {
            return Err(SignCliError::ConfigurationError(String::from(
                "sign_kinds must name at least one sign kind",
            )));
        }
        if self.overpass.area_ids.is_empty() {
            return Err(SignCliError::ConfigurationError(String::from(
                "overpass.area_ids must name at least one area",
            )));
        }
        Ok(())
    }

    /// the defaults with any `SIGN_BEARING_*` environment overrides applied
    pub fn from_env() -> Result<Self, SignCliError> {
        load(None, environment_source())
    }

    /// the default configuration as a TOML document
    pub fn default_toml() -> Result<String, SignCliError> {
        toml::to_string_pretty(&SignBearingConfiguration::default()).map_err(|e| {
            SignCliError::ConfigurationError(format!("failure encoding defaults: {e}"))
        })
    }
}

fn environment_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("sign_kinds")
        .with_list_parse_key("overpass.area_ids")
        .try_parsing(true)
}

impl TryFrom<&String> for SignBearingConfiguration {
    type Error = SignCliError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if !(f.ends_with(".toml") || f.ends_with(".json")) {
            return Err(SignCliError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        }
        let path = Path::new(f);
        if !path.is_file() {
            return Err(SignCliError::ConfigurationError(format!(
                "configuration file {f} does not exist"
            )));
        }
        load(Some(path), environment_source())
    }
}

/// layers the defaults, an optional configuration file and the environment,
/// later sources overriding earlier ones
fn load(
    file: Option<&Path>,
    environment: config::Environment,
) -> Result<SignBearingConfiguration, SignCliError> {
    let mut builder = config::Config::builder();
    if let Some(path) = file {
        builder = builder.add_source(config::File::from(path));
    }
    let conf: SignBearingConfiguration = builder
        .add_source(environment)
        .build()
        .and_then(|c| c.try_deserialize())
        .map_err(|e| {
            let source = file
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_else(|| String::from("environment"));
            SignCliError::ConfigurationError(format!("failure decoding {source}: {e}"))
        })?;
    conf.validate()?;
    Ok(conf)
}

#[cfg(test)]
mod tests {
    use super::{environment_source, load, SignBearingConfiguration};
    use crate::model::{feature::SignKind, SignCliError};
    use std::{io::Write, path::Path};

    fn environment(vars: &[(&str, &str)]) -> config::Environment {
        environment_source().source(Some(
            vars.iter()
                .map(|(k, v)| (String::from(*k), String::from(*v)))
                .collect(),
        ))
    }

    fn write_conf(suffix: &str, contents: &str) -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(format!("conf{suffix}"));
        let mut file = std::fs::File::create(&path).expect("created");
        file.write_all(contents.as_bytes()).expect("written");
        (dir, path.to_string_lossy().to_string())
    }

    #[test]
    fn test_defaults() {
        let conf = SignBearingConfiguration::default();
        assert_eq!(conf.short_way_threshold_meters, 50.0);
        assert_eq!(conf.sign_kinds, vec![SignKind::GiveWay, SignKind::Stop]);
        assert!(conf.parallelize);
        assert_eq!(conf.overpass.timeout_seconds, 250);
        assert!(conf.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let (_dir, f) = write_conf(
            ".toml",
            "short_way_threshold_meters = 35.0\nsign_kinds = [\"stop\"]\n\n[preview]\nzoom = 18\n",
        );
        let conf = SignBearingConfiguration::try_from(&f).expect("valid configuration");
        assert_eq!(conf.short_way_threshold_meters, 35.0);
        assert_eq!(conf.sign_kinds, vec![SignKind::Stop]);
        assert_eq!(conf.preview.zoom, 18);
        assert_eq!(conf.preview.size, "480x312");
        assert!(conf.parallelize);
    }

    #[test]
    fn test_json_file() {
        let (_dir, f) = write_conf(".json", r#"{"parallelize": false}"#);
        let conf = SignBearingConfiguration::try_from(&f).expect("valid configuration");
        assert!(!conf.parallelize);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let (_dir, f) = write_conf(".toml", "short_way_threshold_meters = -1.0\n");
        assert!(matches!(
            SignBearingConfiguration::try_from(&f),
            Err(SignCliError::ConfigurationError(_))
        ));
        let no_kinds = SignBearingConfiguration {
            sign_kinds: vec![],
            ..Default::default()
        };
        assert!(matches!(
            no_kinds.validate(),
            Err(SignCliError::ConfigurationError(_))
        ));
        let (_dir, f) = write_conf(".toml", "sign_kinds = [\"traffic_signals\"]\n");
        assert!(matches!(
            SignBearingConfiguration::try_from(&f),
            Err(SignCliError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        let (_dir, f) = write_conf(".yaml", "parallelize: false\n");
        assert!(matches!(
            SignBearingConfiguration::try_from(&f),
            Err(SignCliError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_default_toml_round_trips() {
        let s = SignBearingConfiguration::default_toml().expect("encodes");
        let decoded: SignBearingConfiguration = toml::from_str(&s).expect("decodes");
        assert_eq!(decoded, SignBearingConfiguration::default());
    }

    #[test]
    fn test_environment_overrides() {
        let env = environment(&[
            ("SIGN_BEARING_SHORT_WAY_THRESHOLD_METERS", "40"),
            ("SIGN_BEARING_SIGN_KINDS", "stop,give_way"),
            ("SIGN_BEARING_PARALLELIZE", "false"),
            ("SIGN_BEARING_PREVIEW__ZOOM", "17"),
            ("SIGN_BEARING_OVERPASS__AREA_IDS", "3600000001,3600000002"),
            ("OTHER_TOOL_PARALLELIZE", "true"),
        ]);
        let conf = load(None, env).expect("valid overrides");
        assert_eq!(conf.short_way_threshold_meters, 40.0);
        assert_eq!(conf.sign_kinds, vec![SignKind::Stop, SignKind::GiveWay]);
        assert!(!conf.parallelize);
        assert_eq!(conf.preview.zoom, 17);
        assert_eq!(conf.preview.maptype, "mapnikde");
        assert_eq!(conf.overpass.area_ids, vec![3600000001, 3600000002]);
        assert_eq!(conf.overpass.timeout_seconds, 250);
    }

    #[test]
    fn test_environment_overrides_file() {
        let (_dir, f) = write_conf(".toml", "short_way_threshold_meters = 35.0\nparallelize = false\n");
        let env = environment(&[("SIGN_BEARING_SHORT_WAY_THRESHOLD_METERS", "20")]);
        let conf = load(Some(Path::new(&f)), env).expect("valid configuration");
        assert_eq!(conf.short_way_threshold_meters, 20.0);
        assert!(!conf.parallelize);
    }

    #[test]
    fn test_invalid_environment_override_rejected() {
        let env = environment(&[("SIGN_BEARING_SIGN_KINDS", "traffic_signals")]);
        assert!(matches!(
            load(None, env),
            Err(SignCliError::ConfigurationError(_))
        ));
    }
}
