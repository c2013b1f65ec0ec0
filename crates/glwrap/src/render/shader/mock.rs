//! Recording [`ShaderBackend`] for tests
//!
//! Behaves like a tiny driver: a stage compiles when its source is non-empty
//! and contains no `#error`, a program links when every attached stage
//! compiled, and `uniform <type> <name>;` declarations in linked sources
//! become active uniforms.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::backend::ShaderBackend;
use super::uniform::UniformValue;

/// One recorded driver call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateShader(u32),
    Compile(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    Attach(u32, u32),
    Link(u32),
    DeleteProgram(u32),
    UseProgram(Option<u32>),
    SetUniform(Option<u32>, UniformValue),
}

#[derive(Debug)]
pub struct MockBackend {
    pub calls: RefCell<Vec<Call>>,
    pub max_texture_units: u32,
    pub fail_create_program: bool,
    context_lost: Cell<bool>,
    next_id: Cell<u32>,
    sources: RefCell<HashMap<u32, String>>,
    attached: RefCell<HashMap<u32, Vec<u32>>>,
    active_uniforms: RefCell<HashMap<u32, Vec<String>>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            calls: RefCell::default(),
            max_texture_units: 16,
            fail_create_program: false,
            context_lost: Cell::new(false),
            next_id: Cell::new(1),
            sources: RefCell::default(),
            attached: RefCell::default(),
            active_uniforms: RefCell::default(),
        }
    }
}

impl MockBackend {
    pub fn with_failing_program_creation() -> Self {
        Self { fail_create_program: true, ..Self::default() }
    }

    pub fn with_texture_units(max_texture_units: u32) -> Self {
        Self { max_texture_units, ..Self::default() }
    }

    /// Simulate the owning window going away
    pub fn lose_context(&self) {
        self.context_lost.set(true);
    }

    fn next_id(&self) -> u32 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn compiles(source: &str) -> bool {
        !source.trim().is_empty() && !source.contains("#error")
    }

    fn declared_uniforms(source: &str) -> impl Iterator<Item = String> + '_ {
        source.lines().filter_map(|line| {
            let line = line.trim().strip_prefix("uniform ")?;
            let name = line.split_whitespace().nth(1)?;
            Some(name.trim_end_matches(';').to_string())
        })
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    pub fn deleted_shaders(&self) -> Vec<u32> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::DeleteShader(id) => Some(*id),
                _ => None,
            })
            .collect()
    }
}

impl ShaderBackend for MockBackend {
    type Shader = u32;
    type Program = u32;
    type UniformLocation = u32;

    fn create_shader(&self, kind: u32) -> Result<u32, String> {
        self.record(Call::CreateShader(kind));
        Ok(self.next_id())
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.sources.borrow_mut().insert(shader, source.to_string());
    }

    fn compile_shader(&self, shader: u32) {
        self.record(Call::Compile(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.sources.borrow().get(&shader).is_some_and(|s| Self::compiles(s))
    }

    fn shader_info_log(&self, shader: u32) -> String {
        format!("0:1(1): error: shader {shader} failed to compile")
    }

    fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        if self.fail_create_program {
            return Err("out of program objects".to_string());
        }
        let id = self.next_id();
        self.record(Call::CreateProgram(id));
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(Call::Attach(program, shader));
        self.attached.borrow_mut().entry(program).or_default().push(shader);
    }

    fn link_program(&self, program: u32) {
        self.record(Call::Link(program));
        if !self.program_link_status(program) {
            return;
        }
        let sources = self.sources.borrow();
        let uniforms = self.attached.borrow()[&program]
            .iter()
            .filter_map(|s| sources.get(s))
            .flat_map(|src| Self::declared_uniforms(src).collect::<Vec<_>>())
            .collect();
        self.active_uniforms.borrow_mut().insert(program, uniforms);
    }

    fn program_link_status(&self, program: u32) -> bool {
        self.attached.borrow().get(&program).is_some_and(|shaders| {
            !shaders.is_empty() && shaders.iter().all(|s| self.shader_compile_status(*s))
        })
    }

    fn program_info_log(&self, program: u32) -> String {
        format!("error: program {program} failed to link")
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    fn uniform_location(&self, program: u32, name: &str) -> Option<u32> {
        let uniforms = self.active_uniforms.borrow();
        let index = uniforms.get(&program)?.iter().position(|u| u == name)?;
        u32::try_from(index).ok()
    }

    fn set_uniform(&self, location: Option<&u32>, value: &UniformValue) {
        self.record(Call::SetUniform(location.copied(), *value));
    }

    fn max_texture_units(&self) -> u32 {
        self.max_texture_units
    }

    fn max_uniform_locations(&self) -> u32 {
        1024
    }

    fn is_context_alive(&self) -> bool {
        !self.context_lost.get()
    }
}

/// Minimal sources used across pipeline tests
pub const VERTEX_SRC: &str = "#version 330 core\n\
    layout (location = 0) in vec2 vertexPos;\n\
    uniform mat4 transform;\n\
    void main() { gl_Position = transform * vec4(vertexPos, 0.0, 1.0); }\n";

pub const FRAGMENT_SRC: &str = "#version 330 core\n\
    uniform vec2 xytime;\n\
    uniform sampler2D tex;\n\
    out vec4 color;\n\
    void main() { color = vec4(xytime, 0.0, 1.0); }\n";

pub const GEOMETRY_SRC: &str = "#version 330 core\n\
    layout (triangles) in;\n\
    layout (triangle_strip, max_vertices = 3) out;\n\
    void main() { EndPrimitive(); }\n";

/// Write a shader directory with the given stage files
pub fn shader_dir(files: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    for (name, contents) in files {
        std::fs::write(dir.path().join(name), contents).expect("write shader");
    }
    dir
}
