//! error.rs — taxonomie d'erreurs d'une invocation `ssc`.
//!
//! Chaque variante correspond à un état terminal d'échec ; aucune n'est
//! réessayée. `exit_code` fournit la convention de codes de sortie du binaire.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = SscError> = std::result::Result<T, E>;

/// Nature de l'artefact vide signalé par `EmptyOutput`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Compiled,
    Disassembled,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::Compiled => f.write_str("le shader compilé"),
            ArtifactKind::Disassembled => f.write_str("le shader désassemblé"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SscError {
    #[error("le fichier {} n'existe pas", .0.display())]
    InputNotFound(PathBuf),

    #[error("profil cible invalide: `{0}`")]
    InvalidTargetProfile(String),

    /// Texte de diagnostic renvoyé par le backend, recopié tel quel.
    #[error("{tool}: {message}")]
    BackendDiagnostic { tool: &'static str, message: String },

    #[error("{0} est vide")]
    EmptyOutput(ArtifactKind),

    #[error("argument invalide: {0}")]
    InvalidArgument(String),

    #[error("impossible de lancer `{program}`: {source}")]
    ToolLaunch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("E/S sur {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("configuration invalide ({}): {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl SscError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SscError::Io { path: path.into(), source }
    }

    /// Code de sortie du processus pour cette erreur.
    pub fn exit_code(&self) -> u8 {
        match self {
            SscError::Io { .. } | SscError::ToolLaunch { .. } | SscError::Config { .. } => 1,
            SscError::InvalidArgument(_) => 2,
            SscError::InputNotFound(_) => 3,
            SscError::InvalidTargetProfile(_) => 4,
            SscError::BackendDiagnostic { .. } => 5,
            SscError::EmptyOutput(_) => 6,
        }
    }
}
