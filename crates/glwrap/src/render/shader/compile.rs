//! Stage compilation and program linking
//!
//! None of these functions fail hard. Compile and link errors are logged
//! with the driver's info log and the handle is still returned; only an
//! unsupported stage or a failed object allocation yields `None`.

use std::path::Path;

use super::backend::ShaderBackend;
use super::stage::{ShaderStage, StageSet};
use crate::foundation::fileio::{read_text_file, to_platform_dir};

/// Result of linking a program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkOutcome<P> {
    /// Program handle, usable for drawing only if `linked`
    pub program: P,
    /// Driver link status
    pub linked: bool,
}

/// Read and compile one stage from `path`
///
/// Returns `None` without creating a shader object when `stage` is not
/// vertex, geometry or fragment.
pub fn compile_stage<B: ShaderBackend>(gl: &B, stage: ShaderStage, path: impl AsRef<Path>) -> Option<B::Shader> {
    let path = path.as_ref();
    if !stage.is_supported() {
        log::error!("[SHADER] Unsupported shader stage '{}' for {:?}", stage, path);
        return None;
    }

    let source = read_text_file(path);

    let shader = match gl.create_shader(stage.gl_enum()) {
        Ok(shader) => shader,
        Err(e) => {
            log::error!("[SHADER] Failed to create {} shader object: {}", stage, e);
            return None;
        }
    };

    log::debug!("[SHADER] Compiling {} shader {:?}", stage, path);
    gl.shader_source(shader, &source);
    gl.compile_shader(shader);

    if !gl.shader_compile_status(shader) {
        log::error!(
            "[SHADER] {} shader {:?} failed to compile:\n{}",
            stage,
            path,
            gl.shader_info_log(shader).trim_end()
        );
    }

    Some(shader)
}

/// Attach and link `stages`, reporting the link status
///
/// Every stage handle is deleted afterwards, whether or not the link succeeded.
pub fn link_program_checked<B: ShaderBackend>(gl: &B, stages: &[B::Shader]) -> Option<LinkOutcome<B::Program>> {
    let program = match gl.create_program() {
        Ok(program) => program,
        Err(e) => {
            log::error!("[SHADER] Failed to create program object: {}", e);
            delete_stages(gl, stages);
            return None;
        }
    };

    log::debug!("[SHADER] Linking program {:?} from {} stages", program, stages.len());
    for &shader in stages {
        gl.attach_shader(program, shader);
    }
    gl.link_program(program);

    let linked = gl.program_link_status(program);
    if !linked {
        log::error!(
            "[SHADER] Program {:?} failed to link:\n{}",
            program,
            gl.program_info_log(program).trim_end()
        );
    }

    delete_stages(gl, stages);
    Some(LinkOutcome { program, linked })
}

/// Attach and link `stages`, returning the program even if linking failed
pub fn link_program<B: ShaderBackend>(gl: &B, stages: &[B::Shader]) -> Option<B::Program> {
    link_program_checked(gl, stages).map(|outcome| outcome.program)
}

fn delete_stages<B: ShaderBackend>(gl: &B, stages: &[B::Shader]) {
    for &shader in stages {
        gl.delete_shader(shader);
    }
}

/// Compile every stage of `set` found under the `|`-delimited directory `dir` and link them
pub fn load_program_checked<B: ShaderBackend>(gl: &B, dir: &str, set: StageSet) -> Option<LinkOutcome<B::Program>> {
    let shader_dir = to_platform_dir(dir);
    log::info!("[SHADER] Loading {} shader program '{}'", set.tag(), shader_dir);

    let stages: Vec<B::Shader> = set
        .stages()
        .iter()
        .filter_map(|&stage| {
            let file = stage.file_name()?;
            let shader = compile_stage(gl, stage, format!("{shader_dir}{file}"));
            if shader.is_none() {
                log::warn!("[SHADER] Skipping {} stage of '{}'", stage, shader_dir);
            }
            shader
        })
        .collect();

    let outcome = link_program_checked(gl, &stages)?;
    if outcome.linked && stages.len() != set.stages().len() {
        log::warn!("[SHADER] Program '{}' linked with missing stages", shader_dir);
    }
    Some(outcome)
}

/// Load a program for the given stage set
pub fn load_program<B: ShaderBackend>(gl: &B, dir: &str, set: StageSet) -> Option<B::Program> {
    load_program_checked(gl, dir, set).map(|outcome| outcome.program)
}

/// Load `vertex.shd` + `fragment.shd` from `dir`
pub fn load_program_vf<B: ShaderBackend>(gl: &B, dir: &str) -> Option<B::Program> {
    load_program(gl, dir, StageSet::VertexFragment)
}

/// Load `vertex.shd` + `geometry.shd` + `fragment.shd` from `dir`
pub fn load_program_vgf<B: ShaderBackend>(gl: &B, dir: &str) -> Option<B::Program> {
    load_program(gl, dir, StageSet::VertexGeometryFragment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::shader::mock::{shader_dir, Call, MockBackend, FRAGMENT_SRC, GEOMETRY_SRC, VERTEX_SRC};

    fn dir_str(dir: &tempfile::TempDir) -> String {
        dir.path().to_str().unwrap().to_string()
    }

    #[test]
    fn test_unsupported_stage_returns_none() {
        let gl = MockBackend::default();
        let dir = shader_dir(&[("compute.shd", "void main() {}")]);

        for stage in [ShaderStage::Compute, ShaderStage::TessControl, ShaderStage::TessEvaluation] {
            assert!(compile_stage(&gl, stage, dir.path().join("compute.shd")).is_none());
        }
        assert!(gl.calls.borrow().is_empty(), "no shader or program objects may be created");
    }

    #[test]
    fn test_compile_failure_still_returns_handle() {
        let gl = MockBackend::default();
        let dir = shader_dir(&[("vertex.shd", "#error broken\n")]);

        let shader = compile_stage(&gl, ShaderStage::Vertex, dir.path().join("vertex.shd"));
        let shader = shader.expect("handle is returned even when compilation fails");
        assert!(!gl.shader_compile_status(shader));
    }

    #[test]
    fn test_missing_source_compiles_empty_text() {
        let gl = MockBackend::default();
        let dir = shader_dir(&[]);

        let shader = compile_stage(&gl, ShaderStage::Fragment, dir.path().join("fragment.shd"));
        assert!(shader.is_some());
        assert_eq!(gl.count(|c| matches!(c, Call::Compile(_))), 1);
    }

    #[test]
    fn test_link_deletes_stages_on_success() {
        let gl = MockBackend::default();
        let dir = shader_dir(&[("vertex.shd", VERTEX_SRC), ("fragment.shd", FRAGMENT_SRC)]);

        let vs = compile_stage(&gl, ShaderStage::Vertex, dir.path().join("vertex.shd")).unwrap();
        let fs = compile_stage(&gl, ShaderStage::Fragment, dir.path().join("fragment.shd")).unwrap();
        let outcome = link_program_checked(&gl, &[vs, fs]).unwrap();

        assert!(outcome.linked);
        assert_eq!(gl.deleted_shaders(), vec![vs, fs]);
    }

    #[test]
    fn test_link_failure_returns_program_and_deletes_stages() {
        let gl = MockBackend::default();
        let dir = shader_dir(&[("vertex.shd", VERTEX_SRC), ("fragment.shd", "#error nope")]);

        let program = load_program_checked(&gl, &dir_str(&dir), StageSet::VertexFragment).unwrap();
        assert!(!program.linked);
        assert_eq!(gl.deleted_shaders().len(), 2);
        assert_eq!(gl.count(|c| matches!(c, Call::DeleteProgram(_))), 0);
    }

    #[test]
    fn test_program_creation_failure() {
        let gl = MockBackend::with_failing_program_creation();
        let dir = shader_dir(&[("vertex.shd", VERTEX_SRC), ("fragment.shd", FRAGMENT_SRC)]);

        assert!(load_program_vf(&gl, &dir_str(&dir)).is_none());
        assert_eq!(gl.deleted_shaders().len(), 2, "compiled stages are still released");
    }

    #[test]
    fn test_vf_and_vgf_attach_expected_stages() {
        let dir = shader_dir(&[
            ("vertex.shd", VERTEX_SRC),
            ("geometry.shd", GEOMETRY_SRC),
            ("fragment.shd", FRAGMENT_SRC),
        ]);

        let gl = MockBackend::default();
        assert!(load_program_vf(&gl, &dir_str(&dir)).is_some());
        assert_eq!(gl.count(|c| matches!(c, Call::Attach(..))), 2);
        assert_eq!(gl.count(|c| *c == Call::CreateShader(glow::GEOMETRY_SHADER)), 0);

        let gl = MockBackend::default();
        assert!(load_program_vgf(&gl, &dir_str(&dir)).is_some());
        assert_eq!(gl.count(|c| matches!(c, Call::Attach(..))), 3);
        assert_eq!(gl.count(|c| *c == Call::CreateShader(glow::GEOMETRY_SHADER)), 1);
    }

    #[test]
    fn test_declared_uniform_found_after_link() {
        let gl = MockBackend::default();
        let dir = shader_dir(&[("vertex.shd", VERTEX_SRC), ("fragment.shd", FRAGMENT_SRC)]);

        let program = load_program_vf(&gl, &dir_str(&dir)).unwrap();
        assert!(gl.uniform_location(program, "transform").is_some());
        assert!(gl.uniform_location(program, "xytime").is_some());
        assert!(gl.uniform_location(program, "not_declared").is_none());
    }
}
