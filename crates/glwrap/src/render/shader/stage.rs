//! Shader stage kinds and stage sets

use std::fmt;

/// A single compilable unit of a shader program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Geometry shader
    Geometry,
    /// Fragment shader
    Fragment,
    /// Compute shader (not supported by the loader)
    Compute,
    /// Tessellation control shader (not supported by the loader)
    TessControl,
    /// Tessellation evaluation shader (not supported by the loader)
    TessEvaluation,
}

impl ShaderStage {
    /// OpenGL shader type enum for this stage
    pub const fn gl_enum(self) -> u32 {
        match self {
            Self::Vertex => glow::VERTEX_SHADER,
            Self::Geometry => glow::GEOMETRY_SHADER,
            Self::Fragment => glow::FRAGMENT_SHADER,
            Self::Compute => glow::COMPUTE_SHADER,
            Self::TessControl => glow::TESS_CONTROL_SHADER,
            Self::TessEvaluation => glow::TESS_EVALUATION_SHADER,
        }
    }

    /// Whether the program loader compiles this stage
    pub const fn is_supported(self) -> bool {
        matches!(self, Self::Vertex | Self::Geometry | Self::Fragment)
    }

    /// Source file name inside a shader directory, for supported stages
    pub const fn file_name(self) -> Option<&'static str> {
        match self {
            Self::Vertex => Some("vertex.shd"),
            Self::Geometry => Some("geometry.shd"),
            Self::Fragment => Some("fragment.shd"),
            Self::Compute | Self::TessControl | Self::TessEvaluation => None,
        }
    }

    /// Lowercase stage name for diagnostics
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Geometry => "geometry",
            Self::Fragment => "fragment",
            Self::Compute => "compute",
            Self::TessControl => "tessellation control",
            Self::TessEvaluation => "tessellation evaluation",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which stages a program directory provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StageSet {
    /// `vertex.shd` + `fragment.shd`
    #[default]
    VertexFragment,
    /// `vertex.shd` + `geometry.shd` + `fragment.shd`
    VertexGeometryFragment,
}

impl StageSet {
    /// Stages in attach order
    pub const fn stages(self) -> &'static [ShaderStage] {
        match self {
            Self::VertexFragment => &[ShaderStage::Vertex, ShaderStage::Fragment],
            Self::VertexGeometryFragment => {
                &[ShaderStage::Vertex, ShaderStage::Geometry, ShaderStage::Fragment]
            }
        }
    }

    /// Short tag used in log messages
    pub const fn tag(self) -> &'static str {
        match self {
            Self::VertexFragment => "VF",
            Self::VertexGeometryFragment => "VGF",
        }
    }
}
