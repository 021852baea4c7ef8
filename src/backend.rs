//! Abstraction over the backend objects the program builder drives.

use glow::HasContext;

use crate::source::ShaderStage;

/// The backend operations needed to compile and link a shader program.
///
/// Mirrors the OpenGL object model: stage-typed shader objects that compile
/// independently, a program object that links them, and status plus
/// diagnostic-log queries for both. Compile and link are synchronous
/// round-trips to the driver. Implemented for [`glow::Context`];
/// tests drive the builder with a scripted in-memory backend instead.
pub trait ShaderBackend {
    /// Handle to a per-stage shader object.
    type ShaderId: Copy;
    /// Handle to a linked program object.
    type ProgramId: Copy;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::ShaderId, String>;
    fn shader_source(&self, shader: Self::ShaderId, source: &str);
    fn compile_shader(&self, shader: Self::ShaderId);
    fn compile_status(&self, shader: Self::ShaderId) -> bool;
    fn shader_log(&self, shader: Self::ShaderId) -> String;
    fn delete_shader(&self, shader: Self::ShaderId);

    fn create_program(&self) -> Result<Self::ProgramId, String>;
    fn attach_shader(&self, program: Self::ProgramId, shader: Self::ShaderId);
    fn link_program(&self, program: Self::ProgramId);
    fn link_status(&self, program: Self::ProgramId) -> bool;
    fn program_log(&self, program: Self::ProgramId) -> String;
    /// Makes `program` the active program on the context, or unbinds with `None`.
    fn use_program(&self, program: Option<Self::ProgramId>);
    fn delete_program(&self, program: Self::ProgramId);
}

fn gl_stage(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

// glow exposes the whole GL surface as unsafe fns;
// the narrow slice the builder needs is wrapped here
impl ShaderBackend for glow::Context {
    type ShaderId = <glow::Context as HasContext>::Shader;
    type ProgramId = <glow::Context as HasContext>::Program;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::ShaderId, String> {
        unsafe { HasContext::create_shader(self, gl_stage(stage)) }
    }

    fn shader_source(&self, shader: Self::ShaderId, source: &str) {
        unsafe { HasContext::shader_source(self, shader, source) }
    }

    fn compile_shader(&self, shader: Self::ShaderId) {
        unsafe { HasContext::compile_shader(self, shader) }
    }

    fn compile_status(&self, shader: Self::ShaderId) -> bool {
        unsafe { HasContext::get_shader_compile_status(self, shader) }
    }

    fn shader_log(&self, shader: Self::ShaderId) -> String {
        unsafe { HasContext::get_shader_info_log(self, shader) }
    }

    fn delete_shader(&self, shader: Self::ShaderId) {
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<Self::ProgramId, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: Self::ProgramId, shader: Self::ShaderId) {
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn link_program(&self, program: Self::ProgramId) {
        unsafe { HasContext::link_program(self, program) }
    }

    fn link_status(&self, program: Self::ProgramId) -> bool {
        unsafe { HasContext::get_program_link_status(self, program) }
    }

    fn program_log(&self, program: Self::ProgramId) -> String {
        unsafe { HasContext::get_program_info_log(self, program) }
    }

    fn use_program(&self, program: Option<Self::ProgramId>) {
        unsafe { HasContext::use_program(self, program) }
    }

    fn delete_program(&self, program: Self::ProgramId) {
        unsafe { HasContext::delete_program(self, program) }
    }
}
