// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Generation-time errors.
//!
//! Any of these aborts the whole run. Use-time failures of the generated
//! helpers live in `slicegen_runtime::SliceError` instead.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

/// An unrecoverable failure while generating artifacts.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    /// Missing or misplaced command-line arguments.
    #[error("invalid arguments: {0}")]
    #[diagnostic(
        code(slicegen::arguments),
        help("usage: slicegen primitives <package> | slicegen <source-file> <type-name>")
    )]
    Argument(String),

    /// The origin file could not be read.
    #[error("failed to read '{path}'")]
    #[diagnostic(code(slicegen::read))]
    Read {
        /// File that was being read.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The origin file has no usable package declaration line.
    #[error("no package declaration found in '{path}'")]
    #[diagnostic(
        code(slicegen::read),
        help("start the file with a line such as `// package shapes`")
    )]
    MissingPackage {
        /// File that was searched.
        path: Utf8PathBuf,
    },

    /// The package identifier given on the command line is unusable.
    #[error("invalid package identifier '{0}'")]
    #[diagnostic(
        code(slicegen::package),
        help("use letters, digits and underscores only")
    )]
    InvalidPackage(String),

    /// The requested type name is not a plain Rust identifier.
    #[error("invalid type name '{0}'")]
    #[diagnostic(code(slicegen::type_name))]
    InvalidTypeName(String),

    /// The configured runtime path cannot be spliced into generated code.
    #[error("invalid runtime path '{0}'")]
    #[diagnostic(
        code(slicegen::runtime),
        help("use a path such as `::slicegen_runtime` or `crate::support`")
    )]
    InvalidRuntime(String),

    /// A configured kind is not part of the scalar catalog.
    #[error("unknown scalar kind '{0}'")]
    #[diagnostic(code(slicegen::kind))]
    UnknownKind(String),

    /// An artifact could not be persisted.
    #[error("failed to write '{path}'")]
    #[diagnostic(code(slicegen::write))]
    Write {
        /// Destination of the artifact.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, GenerateError>;
