//! config.rs — emplacement des outils externes.
//!
//! Couches, de la plus faible à la plus forte :
//!   1. défauts : `fxc`, `dxc`, `glslc` cherchés dans le PATH
//!   2. fichier TOML (`--config <fichier>`, sinon `./ssc.toml` s'il existe)
//!   3. ENV : `SSC_FXC`, `SSC_DXC`, `SSC_GLSLC`
//!
//! ```toml
//! fxc = "C:/Program Files (x86)/Windows Kits/10/bin/x64/fxc.exe"
//! dxc = "/opt/dxc/bin/dxc"
//! ```

use std::path::{Path, PathBuf};

use camino::Utf8PathBuf;
use serde::Deserialize;

use crate::error::{Result, SscError};
use crate::util::fs;

pub const DEFAULT_CONFIG_FILE: &str = "ssc.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolchainConfig {
    pub fxc: Utf8PathBuf,
    pub dxc: Utf8PathBuf,
    pub glslc: Utf8PathBuf,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            fxc: Utf8PathBuf::from("fxc"),
            dxc: Utf8PathBuf::from("dxc"),
            glslc: Utf8PathBuf::from("glslc"),
        }
    }
}

impl ToolchainConfig {
    /// Lit un fichier TOML ; les clés absentes gardent leur défaut.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text).map_err(|source| SscError::Config { path: path.to_path_buf(), source })
    }

    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Résolution complète : fichier explicite, sinon `./ssc.toml`, puis ENV.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let file: Option<PathBuf> = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.is_file()),
        };
        let mut cfg = match file {
            Some(p) => {
                log::debug!("configuration lue depuis {}", p.display());
                Self::from_file(&p)?
            }
            None => Self::default(),
        };
        cfg.apply_env();
        Ok(cfg)
    }

    /// Applique les variables d'environnement `SSC_*`.
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| std::env::var(key).ok());
    }

    /// Comme `apply_env`, avec une source de variables arbitraire.
    pub fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        if let Some(v) = read("SSC_FXC")   { self.fxc = v.into(); }
        if let Some(v) = read("SSC_DXC")   { self.dxc = v.into(); }
        if let Some(v) = read("SSC_GLSLC") { self.glslc = v.into(); }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_rely_on_path_lookup() {
        let c = ToolchainConfig::default();
        assert_eq!((c.fxc.as_str(), c.dxc.as_str(), c.glslc.as_str()), ("fxc", "dxc", "glslc"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let c = ToolchainConfig::from_toml(r#"dxc = "/opt/dxc/bin/dxc""#).unwrap();
        assert_eq!(c.dxc, "/opt/dxc/bin/dxc");
        assert_eq!(c.fxc, "fxc");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ToolchainConfig::from_toml(r#"spirv_cross = "x""#).is_err());
    }

    #[test]
    fn env_overrides_file_values() {
        let mut c = ToolchainConfig::from_toml(r#"glslc = "/usr/bin/glslc""#).unwrap();
        let vars: HashMap<&str, &str> = [("SSC_GLSLC", "/sdk/glslc"), ("SSC_FXC", "  ")].into();
        c.apply_vars(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(c.glslc, "/sdk/glslc");
        assert_eq!(c.fxc, "fxc");
    }

    #[test]
    fn malformed_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ssc.toml");
        std::fs::write(&path, "dxc = [").unwrap();
        let err = ToolchainConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, SscError::Config { path: ref p, .. } if p == &path));
    }

    #[test]
    fn explicit_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ToolchainConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, SscError::Io { .. }));
    }
}
