//! glslc.rs — compilateur SPIR-V (`glslc`, front-end de shaderc).

use std::path::Path;
use std::process::Command;

use camino::Utf8PathBuf;

use super::{collect, run_tool, scratch_dir, PortableBackend};
use crate::artifact::CompiledArtifact;
use crate::config::ToolchainConfig;
use crate::error::Result;
use crate::options::PortableOptions;

#[derive(Debug, Clone)]
pub struct Glslc {
    bin: Utf8PathBuf,
}

impl Glslc {
    pub fn new(cfg: &ToolchainConfig) -> Self {
        Self { bin: cfg.glslc.clone() }
    }
}

/// Drapeaux glslc, dans l'ordre où ils sont passés (avant `-o` et l'entrée).
pub fn glslc_arguments(opts: &PortableOptions) -> Vec<String> {
    let mut args = Vec::new();
    if let Some(lang) = opts.language {
        args.push("-x".to_string());
        args.push(lang.glslc_name().to_string());
    }
    args.push(opts.optimization.glslc_flag().to_string());
    if opts.invert_y           { args.push("-finvert-y".to_string()); }
    if opts.debug              { args.push("-g".to_string()); }
    if opts.suppress_warnings  { args.push("-w".to_string()); }
    if opts.warnings_as_errors { args.push("-Werror".to_string()); }
    if let Some(stage) = opts.stage.and_then(|s| s.glslc_stage()) {
        args.push(format!("-fshader-stage={stage}"));
    }
    if let Some(v) = opts.target_spv {
        args.push(format!("--target-spv={}", v.glslc_name()));
    }
    args
}

impl PortableBackend for Glslc {
    fn compile(&self, input: &Path, options: &PortableOptions) -> Result<CompiledArtifact> {
        let tmp = scratch_dir()?;
        let module = tmp.path().join("shader.spv");

        let output = run_tool(
            &self.bin,
            Command::new(&self.bin)
                .args(glslc_arguments(options))
                .arg("-o")
                .arg(&module)
                .arg(input),
        )?;
        collect(&output, &module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{
        OptimizationLevel, PipelineStage, ShaderStage, SourceLanguage, SpirvVersion,
    };

    #[test]
    fn defaults_only_set_the_optimization_level() {
        assert_eq!(glslc_arguments(&PortableOptions::default()), ["-O"]);
    }

    #[test]
    fn every_option_is_translated() {
        let opts = PortableOptions {
            language: Some(SourceLanguage::Hlsl),
            optimization: OptimizationLevel::Size,
            stage: Some(ShaderStage::Default(PipelineStage::Fragment)),
            target_spv: Some(SpirvVersion::V1_6),
            invert_y: true,
            debug: true,
            suppress_warnings: true,
            warnings_as_errors: true,
        };
        assert_eq!(
            glslc_arguments(&opts),
            [
                "-x", "hlsl", "-Os", "-finvert-y", "-g", "-w", "-Werror",
                "-fshader-stage=frag", "--target-spv=spv1.6",
            ]
        );
    }

    #[test]
    fn inferred_stage_passes_no_stage_flag() {
        let opts = PortableOptions {
            stage: Some(ShaderStage::InferFromSource),
            ..Default::default()
        };
        assert!(glslc_arguments(&opts).iter().all(|a| !a.starts_with("-fshader-stage")));
    }
}
