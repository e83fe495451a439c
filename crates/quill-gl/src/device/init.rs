/// Version directive used when none is configured.
pub const DEFAULT_GLSL_VERSION: &str = "#version 300 es";

/// Initialization parameters for the renderer.
///
/// Keep this structure small; the renderer reads it once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererInit {
    /// GLSL `#version` directive prepended to both shader stages,
    /// e.g. `"#version 150"` or `"#version 300 es"`.
    ///
    /// An empty string selects [`DEFAULT_GLSL_VERSION`].
    pub glsl_version: String,
}

impl Default for RendererInit {
    fn default() -> Self {
        Self {
            glsl_version: DEFAULT_GLSL_VERSION.to_owned(),
        }
    }
}

impl RendererInit {
    pub fn with_glsl_version(glsl_version: impl Into<String>) -> Self {
        Self {
            glsl_version: glsl_version.into(),
        }
    }

    /// The directive to use, with the empty-string default applied.
    pub fn resolved_glsl_version(&self) -> &str {
        if self.glsl_version.is_empty() {
            DEFAULT_GLSL_VERSION
        } else {
            &self.glsl_version
        }
    }
}
