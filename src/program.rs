//! Compiling and linking split shader sources into a backend program object.

use crate::backend::ShaderBackend;
use crate::source::{ShaderSource, ShaderStage};

/// Longest diagnostic log retained in a [`BuildError`].
/// Longer backend logs are cut with an explicit marker.
const MAX_LOG_LEN: usize = 4096;

/// An error from the backend while building a program.
#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("could not create a {what} object: {reason}")]
    CreateFailed { what: &'static str, reason: String },
    #[error("{stage} shader compilation failed: {log}")]
    CompileFailed { stage: ShaderStage, log: String },
    #[error("program linking failed: {log}")]
    LinkFailed { log: String },
}

/// A linked shader program, the result of a successful [`build`].
///
/// Owns the backend object and deletes it when dropped.
pub struct Program<'gl, B: ShaderBackend> {
    gl: &'gl B,
    id: B::ProgramId,
}

impl<'gl, B: ShaderBackend> Program<'gl, B> {
    /// The backend handle, e.g. for uniform lookups.
    pub fn id(&self) -> B::ProgramId {
        self.id
    }

    /// Releases ownership of the backend object to the caller,
    /// who becomes responsible for eventually deleting it.
    pub fn into_raw(self) -> B::ProgramId {
        let id = self.id;
        std::mem::forget(self);
        id
    }
}

impl<'gl, B: ShaderBackend> std::fmt::Debug for Program<'gl, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Program").finish_non_exhaustive()
    }
}

impl<'gl, B: ShaderBackend> Drop for Program<'gl, B> {
    fn drop(&mut self) {
        self.gl.delete_program(self.id);
    }
}

/// Owns an intermediate per-stage shader object during a build,
/// so that every early return deletes it.
struct StageShader<'gl, B: ShaderBackend> {
    gl: &'gl B,
    id: B::ShaderId,
}

impl<'gl, B: ShaderBackend> Drop for StageShader<'gl, B> {
    fn drop(&mut self) {
        self.gl.delete_shader(self.id);
    }
}

/// Compiles both stages of `sources` and links them into a program.
///
/// Stages compile in a fixed order, vertex first, and the first compile
/// failure aborts the build: a bad vertex shader is reported without ever
/// touching the fragment stage or the linker. On success the program is made
/// current on the context and the intermediate shader objects are deleted,
/// since the linked program keeps its own copy of the compiled code.
///
/// A failed build deletes every backend object it created before returning.
pub fn build<'gl, B: ShaderBackend>(
    gl: &'gl B,
    sources: &ShaderSource,
) -> Result<Program<'gl, B>, BuildError> {
    let vertex = compile_stage(gl, ShaderStage::Vertex, &sources.vertex)?;
    let fragment = compile_stage(gl, ShaderStage::Fragment, &sources.fragment)?;

    let id = gl
        .create_program()
        .map_err(|reason| BuildError::CreateFailed {
            what: "program",
            reason,
        })?;
    let program = Program { gl, id };
    gl.attach_shader(id, vertex.id);
    gl.attach_shader(id, fragment.id);
    gl.link_program(id);
    if !gl.link_status(id) {
        return Err(BuildError::LinkFailed {
            log: bounded_log(gl.program_log(id)),
        });
    }

    gl.use_program(Some(id));
    log::debug!("linked and activated shader program");
    Ok(program)
}

fn compile_stage<'gl, B: ShaderBackend>(
    gl: &'gl B,
    stage: ShaderStage,
    source: &str,
) -> Result<StageShader<'gl, B>, BuildError> {
    let id = gl
        .create_shader(stage)
        .map_err(|reason| BuildError::CreateFailed {
            what: "shader",
            reason,
        })?;
    let shader = StageShader { gl, id };
    gl.shader_source(id, source);
    gl.compile_shader(id);
    if !gl.compile_status(id) {
        return Err(BuildError::CompileFailed {
            stage,
            log: bounded_log(gl.shader_log(id)),
        });
    }
    log::debug!("compiled {stage} shader");
    Ok(shader)
}

fn bounded_log(mut log: String) -> String {
    if log.len() > MAX_LOG_LEN {
        let mut cut = MAX_LOG_LEN;
        while !log.is_char_boundary(cut) {
            cut -= 1;
        }
        log.truncate(cut);
        log.push_str("... [log truncated]");
    }
    log
}

//
// tests
//
