//! Loads combined GLSL source files, splits them into their vertex and
//! fragment stages, and compiles and links them into a live program object.
//!
//! ```no_run
//! # fn demo(gl: &glow::Context) -> Result<(), Box<dyn std::error::Error>> {
//! let sources = shaderlink::load_source("res/basic.shader")?;
//! let program = shaderlink::build(gl, &sources)?;
//! // the program is now current on the context;
//! // it is deleted when `program` goes out of scope
//! # Ok(()) }
//! ```

pub mod source;
pub use source::{split, ParseError, ShaderSource, ShaderStage};

pub mod backend;
pub use backend::ShaderBackend;

pub mod program;
pub use program::{build, BuildError, Program};

pub mod files;
pub use files::{load_source, LoadError};

// Re-exported glow to guarantee versions match
pub use glow;
