//! options.rs — traduction des drapeaux vers les options de chaque backend.
//!
//! - `dxil_arguments` : liste d'arguments dxc, interrupteurs absents **omis**
//! - `PortableOptions` : sélecteurs SPIR-V parsés avec repli silencieux
//!
//! Le repli est volontaire : un nom inconnu (`-O turbo`) n'arrête pas la
//! commande, il redonne la valeur par défaut du backend.

use crate::request::{CompileDxil, CompileSpirv, DEFAULT_ENTRY_POINT, DEFAULT_HLSL_VERSION};

/* ─────────────────────────── DXIL (dxc) ─────────────────────────── */

pub fn dxil_arguments(req: &CompileDxil) -> Vec<String> {
    let t = &req.toggles;
    let mut args: Vec<String> = Vec::with_capacity(16);

    args.push("-E".into());
    args.push(req.entry.as_deref().unwrap_or(DEFAULT_ENTRY_POINT).into());
    args.push("-T".into());
    args.push(req.target.clone());

    if t.enable_16bit_types      { args.push("-enable-16bit-types".into()); }
    if t.legacy_macro_expansion  { args.push("-legacy-macro-expansion".into()); }
    if t.debug                   { args.push("-Zi".into()); }
    if t.disable_optimizations   { args.push("-Od".into()); }
    if t.disable_validation      { args.push("-Vd".into()); }

    args.push("-HV".into());
    args.push(req.hlsl_version.as_deref().unwrap_or(DEFAULT_HLSL_VERSION).into());

    if t.compatibility_mode      { args.push("-Gec".into()); }
    if t.strict_mode             { args.push("-Ges".into()); }
    if t.suppress_warnings       { args.push("-no-warnings".into()); }
    if t.warnings_as_errors      { args.push("-WX".into()); }

    args
}

/* ─────────────────────── Parsing tolérant ─────────────────────── */

/// Énumération nommée, parsable sans tenir compte de la casse.
pub trait Named: Copy + 'static {
    /// Genre de sélecteur (pour les logs).
    const WHAT: &'static str;
    const NAMES: &'static [(&'static str, Self)];

    fn from_name(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(text))
            .map(|(_, v)| *v)
    }
}

/// Texte absent ou blanc → `default` ; texte inconnu → `default` + avertissement.
pub fn parse_or_default<T: Named>(text: Option<&str>, default: Option<T>) -> Option<T> {
    match text.map(str::trim) {
        None | Some("") => default,
        Some(t) => T::from_name(t).or_else(|| {
            log::warn!("{} inconnu `{t}` : valeur par défaut du backend", T::WHAT);
            default
        }),
    }
}

/* ─────────────────────── SPIR-V (glslc) ─────────────────────── */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLanguage { Glsl, Hlsl }

impl Named for SourceLanguage {
    const WHAT: &'static str = "langage source";
    const NAMES: &'static [(&'static str, Self)] = &[
        ("GLSL", SourceLanguage::Glsl),
        ("HLSL", SourceLanguage::Hlsl),
    ];
}

impl SourceLanguage {
    pub fn glslc_name(self) -> &'static str {
        match self {
            SourceLanguage::Glsl => "glsl",
            SourceLanguage::Hlsl => "hlsl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptimizationLevel { Zero, Size, #[default] Performance }

impl Named for OptimizationLevel {
    const WHAT: &'static str = "niveau d'optimisation";
    const NAMES: &'static [(&'static str, Self)] = &[
        ("Zero", OptimizationLevel::Zero),
        ("Size", OptimizationLevel::Size),
        ("Performance", OptimizationLevel::Performance),
    ];
}

impl OptimizationLevel {
    pub fn glslc_flag(self) -> &'static str {
        match self {
            OptimizationLevel::Zero => "-O0",
            OptimizationLevel::Size => "-Os",
            OptimizationLevel::Performance => "-O",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpirvVersion { V1_0, V1_1, V1_2, V1_3, V1_4, V1_5, V1_6 }

impl Named for SpirvVersion {
    const WHAT: &'static str = "version SPIR-V";
    const NAMES: &'static [(&'static str, Self)] = &[
        ("Version_1_0", SpirvVersion::V1_0),
        ("Version_1_1", SpirvVersion::V1_1),
        ("Version_1_2", SpirvVersion::V1_2),
        ("Version_1_3", SpirvVersion::V1_3),
        ("Version_1_4", SpirvVersion::V1_4),
        ("Version_1_5", SpirvVersion::V1_5),
        ("Version_1_6", SpirvVersion::V1_6),
    ];
}

impl SpirvVersion {
    pub fn glslc_name(self) -> &'static str {
        match self {
            SpirvVersion::V1_0 => "spv1.0",
            SpirvVersion::V1_1 => "spv1.1",
            SpirvVersion::V1_2 => "spv1.2",
            SpirvVersion::V1_3 => "spv1.3",
            SpirvVersion::V1_4 => "spv1.4",
            SpirvVersion::V1_5 => "spv1.5",
            SpirvVersion::V1_6 => "spv1.6",
        }
    }
}

/// Étage de pipeline (nom court glslc).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Vertex, Fragment, Compute, Geometry, TessControl, TessEvaluation,
    Raygen, AnyHit, ClosestHit, Miss, Intersection, Callable,
    Task, Mesh,
}

impl PipelineStage {
    pub fn glslc_name(self) -> &'static str {
        match self {
            PipelineStage::Vertex => "vert",
            PipelineStage::Fragment => "frag",
            PipelineStage::Compute => "comp",
            PipelineStage::Geometry => "geom",
            PipelineStage::TessControl => "tesc",
            PipelineStage::TessEvaluation => "tese",
            PipelineStage::Raygen => "rgen",
            PipelineStage::AnyHit => "rahit",
            PipelineStage::ClosestHit => "rchit",
            PipelineStage::Miss => "rmiss",
            PipelineStage::Intersection => "rint",
            PipelineStage::Callable => "rcall",
            PipelineStage::Task => "task",
            PipelineStage::Mesh => "mesh",
        }
    }
}

/// Sélecteur d'étage tel que nommé par shaderc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// Étage imposé (`VertexShader`, `GLSL_VertexShader`).
    Explicit(PipelineStage),
    /// Étage par défaut si la source ne le précise pas (`GLSL_Default*`).
    Default(PipelineStage),
    /// Étage lu dans la source (`#pragma shader_stage`).
    InferFromSource,
    SpirvAssembly,
}

impl ShaderStage {
    /// Valeur de `-fshader-stage=`, `None` quand glslc doit déduire seul.
    pub fn glslc_stage(self) -> Option<&'static str> {
        match self {
            ShaderStage::Explicit(s) | ShaderStage::Default(s) => Some(s.glslc_name()),
            ShaderStage::InferFromSource | ShaderStage::SpirvAssembly => None,
        }
    }
}

impl Named for ShaderStage {
    const WHAT: &'static str = "étage de shader";
    const NAMES: &'static [(&'static str, Self)] = {
        use PipelineStage::*;
        use ShaderStage::{Default as D, Explicit as E};
        &[
            ("VertexShader", E(Vertex)),
            ("FragmentShader", E(Fragment)),
            ("ComputeShader", E(Compute)),
            ("GeometryShader", E(Geometry)),
            ("TessControlShader", E(TessControl)),
            ("TessEvaluationShader", E(TessEvaluation)),
            ("GLSL_VertexShader", E(Vertex)),
            ("GLSL_FragmentShader", E(Fragment)),
            ("GLSL_ComputeShader", E(Compute)),
            ("GLSL_GeometryShader", E(Geometry)),
            ("GLSL_TessControlShader", E(TessControl)),
            ("GLSL_TessEvaluationShader", E(TessEvaluation)),
            ("GLSL_InferFromSource", ShaderStage::InferFromSource),
            ("GLSL_DefaultVertexShader", D(Vertex)),
            ("GLSL_DefaultFragmentShader", D(Fragment)),
            ("GLSL_DefaultComputeShader", D(Compute)),
            ("GLSL_DefaultGeometryShader", D(Geometry)),
            ("GLSL_DefaultTessControlShader", D(TessControl)),
            ("GLSL_DefaultTessEvaluationShader", D(TessEvaluation)),
            ("SPIRVAssembly", ShaderStage::SpirvAssembly),
            ("RaygenShader", E(Raygen)),
            ("AnyHitShader", E(AnyHit)),
            ("ClosestHitShader", E(ClosestHit)),
            ("MissShader", E(Miss)),
            ("IntersectionShader", E(Intersection)),
            ("CallableShader", E(Callable)),
            ("GLSL_RaygenShader", E(Raygen)),
            ("GLSL_AnyHitShader", E(AnyHit)),
            ("GLSL_ClosestHitShader", E(ClosestHit)),
            ("GLSL_MissShader", E(Miss)),
            ("GLSL_IntersectionShader", E(Intersection)),
            ("GLSL_CallableShader", E(Callable)),
            ("shaderc_glsl_default_raygen_shader", D(Raygen)),
            ("GLSL_DefaultAnyHitShader", D(AnyHit)),
            ("GLSL_DefaultClosestHitShader", D(ClosestHit)),
            ("GLSL_DefaultMissShader", D(Miss)),
            ("GLSL_DefaultIntersectionShader", D(Intersection)),
            ("GLSL_DefaultCallableShader", D(Callable)),
            ("TaskShader", E(Task)),
            ("MeshShader", E(Mesh)),
            ("GLSL_TaskShader", E(Task)),
            ("GLSL_MeshShader", E(Mesh)),
            ("GLSL_DefaultTaskShader", D(Task)),
            ("GLSL_DefaultMeshShader", D(Mesh)),
        ]
    };
}

/// Options du compilateur SPIR-V, sélecteurs déjà résolus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PortableOptions {
    pub language: Option<SourceLanguage>,
    pub optimization: OptimizationLevel,
    pub stage: Option<ShaderStage>,
    pub target_spv: Option<SpirvVersion>,
    pub invert_y: bool,
    pub debug: bool,
    pub suppress_warnings: bool,
    pub warnings_as_errors: bool,
}

impl PortableOptions {
    pub fn from_request(req: &CompileSpirv) -> Self {
        Self {
            language: parse_or_default(req.language.as_deref(), None),
            optimization: parse_or_default(req.optimization.as_deref(), None).unwrap_or_default(),
            stage: parse_or_default(req.stage.as_deref(), None),
            target_spv: parse_or_default(req.spirv_version.as_deref(), None),
            invert_y: req.invert_y,
            debug: req.debug,
            suppress_warnings: req.suppress_warnings,
            warnings_as_errors: req.warnings_as_errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::DxilToggles;

    fn dxil(toggles: DxilToggles) -> CompileDxil {
        CompileDxil { target: "ps_6_0".into(), toggles, ..Default::default() }
    }

    #[test]
    fn dxil_defaults_only_carry_required_pairs() {
        let args = dxil_arguments(&dxil(DxilToggles::default()));
        assert_eq!(args, ["-E", "main", "-T", "ps_6_0", "-HV", "2021"]);
        assert!(args.iter().all(|a| !a.is_empty()));
    }

    #[test]
    fn dxil_toggles_keep_their_order() {
        let all = DxilToggles {
            enable_16bit_types: true,
            legacy_macro_expansion: true,
            debug: true,
            disable_optimizations: true,
            disable_validation: true,
            compatibility_mode: true,
            strict_mode: true,
            suppress_warnings: true,
            warnings_as_errors: true,
        };
        let mut req = dxil(all);
        req.entry = Some("PSMain".into());
        req.hlsl_version = Some("2018".into());

        assert_eq!(
            dxil_arguments(&req),
            [
                "-E", "PSMain", "-T", "ps_6_0",
                "-enable-16bit-types", "-legacy-macro-expansion", "-Zi", "-Od", "-Vd",
                "-HV", "2018",
                "-Gec", "-Ges", "-no-warnings", "-WX",
            ]
        );
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!(SourceLanguage::from_name("hlsl"), Some(SourceLanguage::Hlsl));
        assert_eq!(OptimizationLevel::from_name(" SIZE "), Some(OptimizationLevel::Size));
        assert_eq!(SpirvVersion::from_name("version_1_3"), Some(SpirvVersion::V1_3));
        assert_eq!(
            ShaderStage::from_name("glsl_defaultmeshshader"),
            Some(ShaderStage::Default(PipelineStage::Mesh))
        );
    }

    #[test]
    fn unknown_text_falls_back_to_default() {
        assert_eq!(parse_or_default::<OptimizationLevel>(Some("turbo"), None), None);
        assert_eq!(
            parse_or_default(Some("turbo"), Some(OptimizationLevel::Zero)),
            Some(OptimizationLevel::Zero)
        );
        assert_eq!(parse_or_default::<SourceLanguage>(Some("   "), None), None);
        assert_eq!(parse_or_default::<SourceLanguage>(None, None), None);
    }

    #[test]
    fn portable_options_default_to_performance() {
        let req = CompileSpirv { optimization: Some("fastest".into()), ..Default::default() };
        let opts = PortableOptions::from_request(&req);
        assert_eq!(opts.optimization, OptimizationLevel::Performance);
        assert_eq!(opts.language, None);
        assert_eq!(opts.stage, None);
        assert_eq!(opts.target_spv, None);
    }

    #[test]
    fn portable_options_resolve_known_names() {
        let req = CompileSpirv {
            language: Some("GLSL".into()),
            optimization: Some("zero".into()),
            stage: Some("ComputeShader".into()),
            spirv_version: Some("Version_1_5".into()),
            invert_y: true,
            ..Default::default()
        };
        let opts = PortableOptions::from_request(&req);
        assert_eq!(opts.language, Some(SourceLanguage::Glsl));
        assert_eq!(opts.optimization, OptimizationLevel::Zero);
        assert_eq!(opts.stage.and_then(ShaderStage::glslc_stage), Some("comp"));
        assert_eq!(opts.target_spv.map(SpirvVersion::glslc_name), Some("spv1.5"));
        assert!(opts.invert_y);
    }

    #[test]
    fn stage_table_has_no_duplicate_names() {
        let mut names: Vec<String> =
            ShaderStage::NAMES.iter().map(|(n, _)| n.to_ascii_lowercase()).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
        assert_eq!(total, 44);
    }
}
