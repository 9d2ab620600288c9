//! pipeline.rs — un handler par verbe, et l'orchestrateur qui les relie.
//!
//! Chaque handler suit `Start → Validated → Invoked → {Failed | EmptyResult | Written}` :
//!   1. valide l'entrée et dérive la sortie (aucun backend appelé avant)
//!   2. traduit les drapeaux en options du backend
//!   3. appelle le backend
//!   4. échec ou résultat vide → erreur, **aucun fichier écrit**
//!   5. sinon écrit les octets tels quels et renvoie le chemin écrit

use std::path::{Path, PathBuf};

use crate::artifact::CompiledArtifact;
use crate::backends::{Dxc, Fxc, Glslc, LegacyBackend, ModernBackend, PortableBackend};
use crate::config::ToolchainConfig;
use crate::error::{ArtifactKind, Result, SscError};
use crate::options::{dxil_arguments, PortableOptions};
use crate::paths::{append_extension, resolve};
use crate::profile::extension_for;
use crate::request::{CommandRequest, CompileDxbc, CompileDxil, CompileSpirv, Disassemble, DEFAULT_ENTRY_POINT};
use crate::util::fs;

pub const SPIRV_EXTENSION: &str = "spv";
pub const DXBC_LISTING_EXTENSION: &str = "asm";
pub const DXIL_LISTING_EXTENSION: &str = "ir";

/* ─────────────────────────── Orchestrateur ─────────────────────────── */

/// Jeu de backends utilisé par une invocation.
pub struct Toolchain {
    legacy: Box<dyn LegacyBackend>,
    modern: Box<dyn ModernBackend>,
    portable: Box<dyn PortableBackend>,
}

impl Toolchain {
    pub fn new(
        legacy: Box<dyn LegacyBackend>,
        modern: Box<dyn ModernBackend>,
        portable: Box<dyn PortableBackend>,
    ) -> Self {
        Self { legacy, modern, portable }
    }

    /// Backends en ligne de commande (`fxc`, `dxc`, `glslc`).
    pub fn from_config(cfg: &ToolchainConfig) -> Self {
        Self::new(Box::new(Fxc::new(cfg)), Box::new(Dxc::new(cfg)), Box::new(Glslc::new(cfg)))
    }

    /// Exécute une requête ; renvoie le chemin de l'artefact écrit.
    pub fn run(&self, request: &CommandRequest) -> Result<PathBuf> {
        log::debug!("{} : {:?}", request.verb(), request);
        match request {
            CommandRequest::CompileDxbc(r) => compile_dxbc(r, self.legacy.as_ref()),
            CommandRequest::CompileDxil(r) => compile_dxil(r, self.modern.as_ref()),
            CommandRequest::CompileSpirv(r) => compile_spirv(r, self.portable.as_ref()),
            CommandRequest::DisassembleDxbc(r) => disassemble_dxbc(r, self.legacy.as_ref()),
            CommandRequest::DisassembleDxil(r) => disassemble_dxil(r, self.modern.as_ref()),
        }
    }
}

/* ─────────────────────────── Handlers ─────────────────────────── */

pub fn compile_dxbc(req: &CompileDxbc, backend: &dyn LegacyBackend) -> Result<PathBuf> {
    let (input, output) = resolve(&req.input, req.output.as_deref(), "")?;
    let ext = extension_for(&req.target)?;
    let entry = entry_point(req.entry.as_deref())?;

    let artifact = backend.compile(&input, entry, &req.target)?;

    // Tout texte de diagnostic est bloquant, avertissements compris.
    if let Some(text) = artifact.diagnostics.as_deref().filter(|t| !t.is_empty()) {
        return Err(SscError::BackendDiagnostic { tool: "fxc", message: text.to_string() });
    }
    ensure_succeeded(&artifact, "fxc")?;
    write_artifact(&append_extension(&output, ext), artifact, ArtifactKind::Compiled)
}

pub fn compile_dxil(req: &CompileDxil, backend: &dyn ModernBackend) -> Result<PathBuf> {
    let (input, output) = resolve(&req.input, req.output.as_deref(), "")?;
    let ext = extension_for(&req.target)?;
    entry_point(req.entry.as_deref())?;

    let source = fs::read_to_bytes(&input)?;
    let args = dxil_arguments(req);
    let file_name = input.file_name().unwrap_or(input.as_os_str());
    let include_dir = include_dir_of(&input)?;

    let artifact = backend.compile(&source, file_name, &args, &include_dir)?;
    ensure_succeeded(&artifact, "dxc")?;
    warn_diagnostics(&artifact, "dxc");
    write_artifact(&append_extension(&output, ext), artifact, ArtifactKind::Compiled)
}

pub fn compile_spirv(req: &CompileSpirv, backend: &dyn PortableBackend) -> Result<PathBuf> {
    let (input, output) = resolve(&req.input, req.output.as_deref(), SPIRV_EXTENSION)?;
    let options = PortableOptions::from_request(req);

    let artifact = backend.compile(&input, &options)?;
    ensure_succeeded(&artifact, "glslc")?;
    warn_diagnostics(&artifact, "glslc");
    write_artifact(&output, artifact, ArtifactKind::Compiled)
}

pub fn disassemble_dxbc(req: &Disassemble, backend: &dyn LegacyBackend) -> Result<PathBuf> {
    let (input, output) = resolve(&req.input, req.output.as_deref(), DXBC_LISTING_EXTENSION)?;
    let bytecode = fs::read_to_bytes(&input)?;

    let artifact = backend.disassemble(&bytecode)?;
    ensure_succeeded(&artifact, "fxc")?;
    write_artifact(&output, artifact, ArtifactKind::Disassembled)
}

pub fn disassemble_dxil(req: &Disassemble, backend: &dyn ModernBackend) -> Result<PathBuf> {
    let (input, output) = resolve(&req.input, req.output.as_deref(), DXIL_LISTING_EXTENSION)?;
    let ir = fs::read_to_bytes(&input)?;

    let artifact = backend.disassemble(&ir)?;
    ensure_succeeded(&artifact, "dxc")?;
    write_artifact(&output, artifact, ArtifactKind::Disassembled)
}

/* ─────────────────────────── Helpers ─────────────────────────── */

/// Point d'entrée effectif : absent → `main`, blanc → argument invalide.
fn entry_point(entry: Option<&str>) -> Result<&str> {
    match entry {
        None => Ok(DEFAULT_ENTRY_POINT),
        Some(e) if e.trim().is_empty() => {
            Err(SscError::InvalidArgument("point d'entrée vide".to_string()))
        }
        Some(e) => Ok(e),
    }
}

fn ensure_succeeded(artifact: &CompiledArtifact, tool: &'static str) -> Result<()> {
    if artifact.is_success() {
        return Ok(());
    }
    Err(SscError::BackendDiagnostic { tool, message: artifact.diagnostic_text().to_string() })
}

fn warn_diagnostics(artifact: &CompiledArtifact, tool: &str) {
    if let Some(text) = artifact.diagnostics.as_deref() {
        log::warn!("{tool}: {text}");
    }
}

fn write_artifact(path: &Path, artifact: CompiledArtifact, kind: ArtifactKind) -> Result<PathBuf> {
    if artifact.bytes.is_empty() {
        return Err(SscError::EmptyOutput(kind));
    }
    fs::write_all(path, &artifact.bytes)?;
    log::info!("écrit {} ({} octets)", path.display(), artifact.bytes.len());
    Ok(path.to_path_buf())
}

fn include_dir_of(input: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(input).map_err(|e| SscError::io(input, e))?;
    Ok(absolute.parent().map(Path::to_path_buf).unwrap_or_default())
}
