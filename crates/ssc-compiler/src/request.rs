//! request.rs — une requête par verbe de la CLI.
//!
//! Les champs reflètent les drapeaux tels que saisis ; les valeurs par défaut
//! (point d'entrée `main`, version HLSL `2021`, …) sont appliquées par les
//! handlers de [`crate::pipeline`].

use std::path::PathBuf;

pub const DEFAULT_ENTRY_POINT: &str = "main";
pub const DEFAULT_HLSL_VERSION: &str = "2021";

/// `comp-dxbc` : HLSL → DXBC via le compilateur historique.
#[derive(Debug, Clone, Default)]
pub struct CompileDxbc {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub target: String,
    pub entry: Option<String>,
}

/// Interrupteurs booléens de `comp-dxil`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DxilToggles {
    pub enable_16bit_types: bool,
    pub legacy_macro_expansion: bool,
    pub debug: bool,
    pub disable_optimizations: bool,
    pub disable_validation: bool,
    pub compatibility_mode: bool,
    pub strict_mode: bool,
    pub suppress_warnings: bool,
    pub warnings_as_errors: bool,
}

/// `comp-dxil` : HLSL → DXIL via dxc.
#[derive(Debug, Clone, Default)]
pub struct CompileDxil {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub target: String,
    pub entry: Option<String>,
    pub hlsl_version: Option<String>,
    pub toggles: DxilToggles,
}

/// `comp-spv` : GLSL/HLSL → SPIR-V. Les sélecteurs restent textuels :
/// un texte inconnu retombe sur la valeur par défaut du backend.
#[derive(Debug, Clone, Default)]
pub struct CompileSpirv {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub language: Option<String>,
    pub optimization: Option<String>,
    pub stage: Option<String>,
    pub spirv_version: Option<String>,
    pub invert_y: bool,
    pub debug: bool,
    pub suppress_warnings: bool,
    pub warnings_as_errors: bool,
}

/// `disasm-dxbc` / `disasm-dxil`.
#[derive(Debug, Clone, Default)]
pub struct Disassemble {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub enum CommandRequest {
    CompileDxbc(CompileDxbc),
    CompileDxil(CompileDxil),
    CompileSpirv(CompileSpirv),
    DisassembleDxbc(Disassemble),
    DisassembleDxil(Disassemble),
}

impl CommandRequest {
    /// Nom du verbe, pour les logs.
    pub fn verb(&self) -> &'static str {
        match self {
            CommandRequest::CompileDxbc(_) => "comp-dxbc",
            CommandRequest::CompileDxil(_) => "comp-dxil",
            CommandRequest::CompileSpirv(_) => "comp-spv",
            CommandRequest::DisassembleDxbc(_) => "disasm-dxbc",
            CommandRequest::DisassembleDxil(_) => "disasm-dxil",
        }
    }
}
