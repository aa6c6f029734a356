//! In-memory GL driver for tests.
//!
//! Follows the GL object rules the engine depends on: deleting an attached
//! shader only flags it until it is detached, the element buffer binding lives
//! in the bound vertex array, and attribute pointers capture the current
//! `ARRAY_BUFFER`. "Compilation" accepts source that starts with `#version`,
//! has a `void main`, and has balanced braces.

use std::cell::{Ref, RefCell};
use std::collections::HashMap;

use super::driver::GlDriver;
use super::shader::ShaderStage;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Viewport(i32, i32, i32, i32),
    ClearColor([f32; 4]),
    Clear(u32),
    UseProgram(Option<u32>),
    BindVertexArray(Option<u32>),
    DrawElements { mode: u32, count: i32, element_type: u32, offset: i32 },
}

#[derive(Debug)]
pub(crate) struct FakeShader {
    pub stage: ShaderStage,
    pub source: Option<String>,
    pub compiled: bool,
    pub log: String,
    flagged_for_delete: bool,
}

#[derive(Debug, Default)]
pub(crate) struct FakeProgram {
    pub attached: Vec<u32>,
    pub linked: bool,
    pub log: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FakeAttrib {
    pub buffer: Option<u32>,
    pub size: i32,
    pub normalized: bool,
    pub stride: i32,
    pub offset: i32,
    pub enabled: bool,
}

#[derive(Debug, Default)]
pub(crate) struct FakeVertexArray {
    pub attribs: HashMap<u32, FakeAttrib>,
    pub element_buffer: Option<u32>,
}

#[derive(Debug, Default)]
pub(crate) struct State {
    next_id: u32,
    pub shaders: HashMap<u32, FakeShader>,
    pub programs: HashMap<u32, FakeProgram>,
    pub buffers: HashMap<u32, Vec<u8>>,
    pub vertex_arrays: HashMap<u32, FakeVertexArray>,
    pub array_buffer: Option<u32>,
    pub loose_element_buffer: Option<u32>,
    pub bound_vertex_array: Option<u32>,
    pub current_program: Option<u32>,
    pub calls: Vec<Call>,
    pub fail_create: bool,
}

impl State {
    fn alloc(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn is_attached(&self, shader: u32) -> bool {
        self.programs.values().any(|p| p.attached.contains(&shader))
    }

    fn element_buffer(&self) -> Option<u32> {
        match self.bound_vertex_array {
            Some(vao) => self.vertex_arrays.get(&vao).and_then(|v| v.element_buffer),
            None => self.loose_element_buffer,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct FakeGl {
    state: RefCell<State>,
}

impl FakeGl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `create_*` call fail.
    pub fn fail_creates(&self) {
        self.state.borrow_mut().fail_create = true;
    }

    pub fn state(&self) -> Ref<'_, State> {
        self.state.borrow()
    }

    pub fn take_calls(&self) -> Vec<Call> {
        std::mem::take(&mut self.state.borrow_mut().calls)
    }

    pub fn is_shader(&self, id: u32) -> bool {
        self.state.borrow().shaders.contains_key(&id)
    }

    pub fn is_program(&self, id: u32) -> bool {
        self.state.borrow().programs.contains_key(&id)
    }

    /// Number of live driver objects of any kind.
    pub fn live_objects(&self) -> usize {
        let s = self.state.borrow();
        s.shaders.len() + s.programs.len() + s.buffers.len() + s.vertex_arrays.len()
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }

    fn create(&self, what: &str) -> Result<u32, String> {
        let mut s = self.state.borrow_mut();
        if s.fail_create {
            return Err(format!("out of {what} names"));
        }
        Ok(s.alloc())
    }
}

fn compiles(source: &str) -> bool {
    let mut depth = 0i32;
    for c in source.chars() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0 && source.trim_start().starts_with("#version") && source.contains("void main")
}

impl GlDriver for FakeGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let id = self.create("shader")?;
        self.state.borrow_mut().shaders.insert(
            id,
            FakeShader {
                stage,
                source: None,
                compiled: false,
                log: String::new(),
                flagged_for_delete: false,
            },
        );
        Ok(id)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        if let Some(sh) = self.state.borrow_mut().shaders.get_mut(&shader) {
            sh.source = Some(source.to_string());
        }
    }

    fn compile_shader(&self, shader: u32) {
        let mut s = self.state.borrow_mut();
        let Some(sh) = s.shaders.get_mut(&shader) else { return };
        match sh.source.as_deref() {
            Some(src) if compiles(src) => {
                sh.compiled = true;
                sh.log.clear();
            }
            Some(_) => {
                sh.compiled = false;
                sh.log = "0:1(1): error: syntax error, unexpected end of file\n".to_string();
            }
            None => {
                sh.compiled = false;
                sh.log = "error: no source attached\n".to_string();
            }
        }
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.state.borrow().shaders.get(&shader).is_some_and(|s| s.compiled)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        self.state
            .borrow()
            .shaders
            .get(&shader)
            .map(|s| s.log.clone())
            .unwrap_or_default()
    }

    fn delete_shader(&self, shader: u32) {
        let mut s = self.state.borrow_mut();
        if s.is_attached(shader) {
            if let Some(sh) = s.shaders.get_mut(&shader) {
                sh.flagged_for_delete = true;
            }
        } else {
            s.shaders.remove(&shader);
        }
    }

    fn create_program(&self) -> Result<u32, String> {
        let id = self.create("program")?;
        self.state.borrow_mut().programs.insert(id, FakeProgram::default());
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        let mut s = self.state.borrow_mut();
        if !s.shaders.contains_key(&shader) {
            return;
        }
        if let Some(p) = s.programs.get_mut(&program) {
            if !p.attached.contains(&shader) {
                p.attached.push(shader);
            }
        }
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        let mut s = self.state.borrow_mut();
        if let Some(p) = s.programs.get_mut(&program) {
            p.attached.retain(|&id| id != shader);
        }
        let flagged = s.shaders.get(&shader).is_some_and(|sh| sh.flagged_for_delete);
        if flagged && !s.is_attached(shader) {
            s.shaders.remove(&shader);
        }
    }

    fn link_program(&self, program: u32) {
        let mut s = self.state.borrow_mut();
        let Some(p) = s.programs.get(&program) else { return };

        let mut errors = Vec::new();
        let mut has_vertex = false;
        let mut has_fragment = false;
        for id in &p.attached {
            let Some(sh) = s.shaders.get(id) else { continue };
            if !sh.compiled {
                errors.push(format!("error: {} shader {id} is not compiled", sh.stage));
            }
            match sh.stage {
                ShaderStage::Vertex => has_vertex = true,
                ShaderStage::Fragment => has_fragment = true,
            }
        }
        if !has_vertex {
            errors.push("error: program lacks a vertex shader".to_string());
        }
        if !has_fragment {
            errors.push("error: program lacks a fragment shader".to_string());
        }

        let linked = errors.is_empty();
        let log = errors.join("\n");
        if let Some(p) = s.programs.get_mut(&program) {
            p.linked = linked;
            p.log = log;
        }
    }

    fn program_link_status(&self, program: u32) -> bool {
        self.state.borrow().programs.get(&program).is_some_and(|p| p.linked)
    }

    fn program_info_log(&self, program: u32) -> String {
        self.state
            .borrow()
            .programs
            .get(&program)
            .map(|p| p.log.clone())
            .unwrap_or_default()
    }

    fn use_program(&self, program: Option<u32>) {
        self.state.borrow_mut().current_program = program;
        self.record(Call::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        let attached = match self.state.borrow_mut().programs.get_mut(&program) {
            Some(p) => std::mem::take(&mut p.attached),
            None => return,
        };
        for shader in attached {
            self.detach_shader(program, shader);
        }
        let mut s = self.state.borrow_mut();
        s.programs.remove(&program);
        if s.current_program == Some(program) {
            s.current_program = None;
        }
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let id = self.create("buffer")?;
        self.state.borrow_mut().buffers.insert(id, Vec::new());
        Ok(id)
    }

    fn bind_buffer(&self, target: u32, buffer: Option<u32>) {
        let mut s = self.state.borrow_mut();
        match target {
            glow::ARRAY_BUFFER => s.array_buffer = buffer,
            glow::ELEMENT_ARRAY_BUFFER => match s.bound_vertex_array {
                Some(vao) => {
                    if let Some(v) = s.vertex_arrays.get_mut(&vao) {
                        v.element_buffer = buffer;
                    }
                }
                None => s.loose_element_buffer = buffer,
            },
            _ => {}
        }
    }

    fn buffer_data(&self, target: u32, data: &[u8]) {
        let mut s = self.state.borrow_mut();
        let bound = match target {
            glow::ARRAY_BUFFER => s.array_buffer,
            glow::ELEMENT_ARRAY_BUFFER => s.element_buffer(),
            _ => None,
        };
        if let Some(store) = bound.and_then(|id| s.buffers.get_mut(&id)) {
            *store = data.to_vec();
        }
    }

    fn delete_buffer(&self, buffer: u32) {
        let mut s = self.state.borrow_mut();
        s.buffers.remove(&buffer);
        if s.array_buffer == Some(buffer) {
            s.array_buffer = None;
        }
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let id = self.create("vertex array")?;
        self.state
            .borrow_mut()
            .vertex_arrays
            .insert(id, FakeVertexArray::default());
        Ok(id)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.state.borrow_mut().bound_vertex_array = vertex_array;
        self.record(Call::BindVertexArray(vertex_array));
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        let mut s = self.state.borrow_mut();
        let buffer = s.array_buffer;
        let Some(vao) = s.bound_vertex_array else { return };
        if let Some(v) = s.vertex_arrays.get_mut(&vao) {
            let enabled = v.attribs.get(&index).is_some_and(|a| a.enabled);
            v.attribs.insert(
                index,
                FakeAttrib { buffer, size, normalized, stride, offset, enabled },
            );
        }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        let mut s = self.state.borrow_mut();
        let Some(vao) = s.bound_vertex_array else { return };
        if let Some(a) = s
            .vertex_arrays
            .get_mut(&vao)
            .and_then(|v| v.attribs.get_mut(&index))
        {
            a.enabled = true;
        }
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        let mut s = self.state.borrow_mut();
        s.vertex_arrays.remove(&vertex_array);
        if s.bound_vertex_array == Some(vertex_array) {
            s.bound_vertex_array = None;
        }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(Call::Viewport(x, y, width, height));
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.record(Call::ClearColor([r, g, b, a]));
    }

    fn clear(&self, mask: u32) {
        self.record(Call::Clear(mask));
    }

    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32) {
        self.record(Call::DrawElements { mode, count, element_type, offset });
    }
}
