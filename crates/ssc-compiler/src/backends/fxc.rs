//! fxc.rs — compilateur/désassembleur DXBC historique (`fxc`).

use std::path::Path;
use std::process::Command;

use camino::Utf8PathBuf;

use super::{collect, run_tool, scratch_dir, LegacyBackend};
use crate::artifact::CompiledArtifact;
use crate::config::ToolchainConfig;
use crate::error::Result;
use crate::util::fs;

/// Backend qui appelle `fxc` (D3DCompiler en ligne de commande).
#[derive(Debug, Clone)]
pub struct Fxc {
    bin: Utf8PathBuf,
}

impl Fxc {
    pub fn new(cfg: &ToolchainConfig) -> Self {
        Self { bin: cfg.fxc.clone() }
    }
}

impl LegacyBackend for Fxc {
    fn compile(&self, input: &Path, entry: &str, profile: &str) -> Result<CompiledArtifact> {
        let tmp = scratch_dir()?;
        let object = tmp.path().join("shader.dxbc");

        let output = run_tool(
            &self.bin,
            Command::new(&self.bin)
                .arg("/nologo")
                .args(["/T", profile, "/E", entry])
                .arg("/Fo")
                .arg(&object)
                .arg(input),
        )?;
        collect(&output, &object)
    }

    fn disassemble(&self, bytecode: &[u8]) -> Result<CompiledArtifact> {
        let tmp = scratch_dir()?;
        let blob = tmp.path().join("shader.dxbc");
        let listing = tmp.path().join("shader.asm");
        fs::write_all(&blob, bytecode)?;

        // Pas de drapeau particulier, pas de commentaire en tête de listing.
        let output = run_tool(
            &self.bin,
            Command::new(&self.bin)
                .args(["/nologo", "/dumpbin", "/Fc"])
                .arg(&listing)
                .arg(&blob),
        )?;
        collect(&output, &listing)
    }
}
