//! Error types for Nova Render
//!
//! This module defines the error types used throughout the workspace,
//! including window/context creation, shader compilation, and resource
//! management.

use std::fmt;

/// Result type for Nova Render operations
pub type Result<T> = std::result::Result<T, Error>;

/// Nova Render errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Window or GL context creation failed
    WindowCreation(String),

    /// Backend-specific error (GL object creation, surface operations, etc.)
    BackendError(String),

    /// Shader compilation failed (carries the driver's info log)
    ShaderCompile(String),

    /// Shader program link failed (carries the driver's info log)
    ShaderLink(String),

    /// Image decoding failed
    TextureDecode(String),

    /// Invalid resource (wrong buffer size, zero-sized texture, etc.)
    InvalidResource(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowCreation(msg) => write!(f, "Window creation failed: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::ShaderCompile(log) => write!(f, "Shader compilation failed: {}", log),
            Error::ShaderLink(log) => write!(f, "Shader link failed: {}", log),
            Error::TextureDecode(msg) => write!(f, "Texture decode failed: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
