//! backends — compilateurs/désassembleurs externes, vus comme des boîtes noires.
//!
//! Trois familles, chacune derrière un trait pour pouvoir substituer un
//! double de test :
//!   - [`LegacyBackend`]   : DXBC (`fxc`)
//!   - [`ModernBackend`]   : DXIL (`dxc`)
//!   - [`PortableBackend`] : SPIR-V (`glslc`)
//!
//! Les implémentations fournies lancent les outils en ligne de commande ;
//! chaque appel possède son dossier temporaire, supprimé à la sortie.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};

use camino::Utf8Path;

use crate::artifact::CompiledArtifact;
use crate::error::{Result, SscError};
use crate::options::PortableOptions;
use crate::util::fs;

pub mod dxc;
pub mod fxc;
pub mod glslc;

pub use dxc::Dxc;
pub use fxc::Fxc;
pub use glslc::Glslc;

pub trait LegacyBackend {
    fn compile(&self, input: &Path, entry: &str, profile: &str) -> Result<CompiledArtifact>;
    fn disassemble(&self, bytecode: &[u8]) -> Result<CompiledArtifact>;
}

pub trait ModernBackend {
    /// `source` est transmise octet pour octet, sans décodage ; `file_name`
    /// sert aux messages du compilateur, les `#include` sont cherchés dans
    /// `include_dir`.
    fn compile(
        &self,
        source: &[u8],
        file_name: &OsStr,
        args: &[String],
        include_dir: &Path,
    ) -> Result<CompiledArtifact>;
    fn disassemble(&self, ir: &[u8]) -> Result<CompiledArtifact>;
}

pub trait PortableBackend {
    fn compile(&self, input: &Path, options: &PortableOptions) -> Result<CompiledArtifact>;
}

/* ─────────────────────── Lancement des outils ─────────────────────── */

/// Lance `program` et attend sa fin (stdout/stderr capturés).
pub(crate) fn run_tool(program: &Utf8Path, cmd: &mut Command) -> Result<Output> {
    log::debug!("exec {cmd:?}");
    cmd.output().map_err(|source| SscError::ToolLaunch { program: program.to_string(), source })
}

fn text_of(raw: &[u8]) -> Option<String> {
    let s = String::from_utf8_lossy(raw).trim().to_string();
    (!s.is_empty()).then_some(s)
}

/// Transforme la sortie d'un outil en artefact : statut d'après le code de
/// retour, octets lus dans `product` (absent → vide).
///
/// Diagnostics : en échec stderr (sinon stdout), en succès stderr seul, les
/// outils y écrivant leurs avertissements.
pub(crate) fn collect(output: &Output, product: &Path) -> Result<CompiledArtifact> {
    if !output.status.success() {
        let text = text_of(&output.stderr)
            .or_else(|| text_of(&output.stdout))
            .unwrap_or_else(|| format!("l'outil a échoué ({})", output.status));
        return Ok(CompiledArtifact::failure(text));
    }
    let bytes = fs::read_product(product)?;
    Ok(CompiledArtifact::success(bytes).with_diagnostics(text_of(&output.stderr)))
}

/// Dossier de travail éphémère d'un appel.
pub(crate) fn scratch_dir() -> Result<tempfile::TempDir> {
    tempfile::Builder::new()
        .prefix("ssc-")
        .tempdir()
        .map_err(|e| SscError::io(std::env::temp_dir(), e))
}
