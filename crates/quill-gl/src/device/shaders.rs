use anyhow::{Context, Result};

use crate::gl::GlApi;

/// GLSL dialect family the shader pair is written in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GlslDialect {
    /// GLSL 1.20 (`attribute`/`varying`); also used for anything below 130.
    Glsl120,
    /// GLSL 1.30 and every version without a dedicated pair.
    Glsl130,
    /// GLSL ES 3.00.
    Glsl300Es,
    /// GLSL 4.10 core.
    Glsl410Core,
}

struct ShaderPair {
    vertex: &'static str,
    fragment: &'static str,
}

const GLSL_120: ShaderPair = ShaderPair {
    vertex: include_str!("shaders/vert_120.glsl"),
    fragment: include_str!("shaders/frag_120.glsl"),
};

const GLSL_130: ShaderPair = ShaderPair {
    vertex: include_str!("shaders/vert_130.glsl"),
    fragment: include_str!("shaders/frag_130.glsl"),
};

const GLSL_300_ES: ShaderPair = ShaderPair {
    vertex: include_str!("shaders/vert_300_es.glsl"),
    fragment: include_str!("shaders/frag_300_es.glsl"),
};

const GLSL_410_CORE: ShaderPair = ShaderPair {
    vertex: include_str!("shaders/vert_410_core.glsl"),
    fragment: include_str!("shaders/frag_410_core.glsl"),
};

impl GlslDialect {
    /// Selects the dialect for a numeric GLSL version.
    ///
    /// `< 130` → 1.20, `410` → 4.10 core, `300` → ES 3.00, anything else → 1.30.
    pub fn from_version(version: u32) -> Self {
        match version {
            v if v < 130 => Self::Glsl120,
            410 => Self::Glsl410Core,
            300 => Self::Glsl300Es,
            _ => Self::Glsl130,
        }
    }

    /// Selects the dialect for a `#version` directive.
    pub fn from_directive(directive: &str) -> Self {
        Self::from_version(parse_glsl_version(directive))
    }

    fn pair(self) -> &'static ShaderPair {
        match self {
            Self::Glsl120 => &GLSL_120,
            Self::Glsl130 => &GLSL_130,
            Self::Glsl300Es => &GLSL_300_ES,
            Self::Glsl410Core => &GLSL_410_CORE,
        }
    }

    /// Vertex shader body (without the `#version` line).
    pub fn vertex_source(self) -> &'static str {
        self.pair().vertex
    }

    /// Fragment shader body (without the `#version` line).
    pub fn fragment_source(self) -> &'static str {
        self.pair().fragment
    }
}

/// Extracts `N` from a `"#version N ..."` directive.
///
/// Returns 120 when the directive does not have that shape, including when
/// it does not start with `#version` exactly.
pub fn parse_glsl_version(directive: &str) -> u32 {
    const FALLBACK: u32 = 120;

    let Some(rest) = directive.strip_prefix("#version") else {
        return FALLBACK;
    };
    let rest = rest.trim_start();
    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);

    digits.parse().unwrap_or(FALLBACK)
}

/// Creates and compiles one shader stage.
///
/// Compilation failure is logged, not returned: the shader object is kept so
/// the caller still owns (and later deletes) it. Only object creation fails.
pub(crate) fn compile_stage<G: GlApi>(
    gl: &mut G,
    stage: u32,
    directive: &str,
    body: &str,
    desc: &str,
) -> Result<G::Shader> {
    let shader = gl
        .create_shader(stage)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("failed to create {desc}"))?;

    gl.shader_source(shader, &format!("{directive}\n{body}"));
    gl.compile_shader(shader);
    check_shader(gl, shader, desc);

    Ok(shader)
}

/// Logs the info log of a shader that failed to compile.
pub(crate) fn check_shader<G: GlApi>(gl: &G, shader: G::Shader, desc: &str) -> bool {
    let ok = gl.shader_compile_status(shader);
    if !ok {
        let info = gl.shader_info_log(shader);
        log::error!("failed to compile {desc}: {}", info.trim_end());
    }
    ok
}

/// Logs the info log of a program that failed to link.
pub(crate) fn check_program<G: GlApi>(gl: &G, program: G::Program, desc: &str) -> bool {
    let ok = gl.program_link_status(program);
    if !ok {
        let info = gl.program_info_log(program);
        log::error!("failed to link {desc}: {}", info.trim_end());
    }
    ok
}
