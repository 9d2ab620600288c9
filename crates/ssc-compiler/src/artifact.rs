//! artifact.rs — produit opaque d'un backend (+ statut + diagnostics).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

/// Octets produits par un backend. Jamais interprétés ici : ils sont écrits
/// tels quels si le statut est `Success` et qu'ils ne sont pas vides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledArtifact {
    pub bytes: Vec<u8>,
    pub status: Status,
    pub diagnostics: Option<String>,
}

impl CompiledArtifact {
    pub fn success(bytes: impl Into<Vec<u8>>) -> Self {
        Self { bytes: bytes.into(), status: Status::Success, diagnostics: None }
    }

    pub fn failure(diagnostics: impl Into<String>) -> Self {
        Self { bytes: Vec::new(), status: Status::Failure, diagnostics: Some(diagnostics.into()) }
    }

    pub fn with_diagnostics(mut self, diagnostics: Option<String>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// Texte d'erreur à afficher, vide si le backend n'a rien dit.
    pub fn diagnostic_text(&self) -> &str {
        self.diagnostics.as_deref().unwrap_or("")
    }
}
