//! dxc.rs — compilateur/désassembleur DXIL (`dxc`).

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use camino::Utf8PathBuf;

use super::{collect, run_tool, scratch_dir, ModernBackend};
use crate::artifact::CompiledArtifact;
use crate::config::ToolchainConfig;
use crate::error::Result;
use crate::util::fs;

/// Backend qui appelle `dxc` (DirectXShaderCompiler).
#[derive(Debug, Clone)]
pub struct Dxc {
    bin: Utf8PathBuf,
}

impl Dxc {
    pub fn new(cfg: &ToolchainConfig) -> Self {
        Self { bin: cfg.dxc.clone() }
    }
}

impl ModernBackend for Dxc {
    fn compile(
        &self,
        source: &[u8],
        file_name: &OsStr,
        args: &[String],
        include_dir: &Path,
    ) -> Result<CompiledArtifact> {
        // La source est recopiée sous son nom d'origine pour que les
        // diagnostics la désignent ; les includes restent relatifs à l'entrée.
        let tmp = scratch_dir()?;
        let staged = tmp.path().join(file_name);
        let object = tmp.path().join("shader.dxil");
        fs::write_all(&staged, source)?;

        let output = run_tool(
            &self.bin,
            Command::new(&self.bin)
                .args(args)
                .arg("-I")
                .arg(include_dir)
                .arg("-Fo")
                .arg(&object)
                .arg(&staged),
        )?;
        collect(&output, &object)
    }

    fn disassemble(&self, ir: &[u8]) -> Result<CompiledArtifact> {
        let tmp = scratch_dir()?;
        let blob = tmp.path().join("shader.dxil");
        let listing = tmp.path().join("shader.ll");
        fs::write_all(&blob, ir)?;

        let output = run_tool(
            &self.bin,
            Command::new(&self.bin)
                .arg("-dumpbin")
                .arg(&blob)
                .arg("-Fc")
                .arg(&listing),
        )?;
        collect(&output, &listing)
    }
}
