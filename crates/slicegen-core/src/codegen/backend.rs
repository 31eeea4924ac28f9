// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Rendering and persistence of generated artifacts.
//!
//! The specializers only produce [`GeneratedArtifact`] values. A [`Backend`]
//! turns them into text and writes them out; [`RustBackend`] is the
//! implementation used by the CLI and the build-script integration.
//!
//! Writes never leave a half-written artifact behind: text goes to a
//! temporary file in the destination directory which is then renamed over
//! the destination. [`Backend::persist_new`] uses a no-clobber rename, so it
//! cannot replace a file that already exists.
//!
//! Written files get the permissions a plain create would give them, and a
//! replaced file keeps its own.

use std::fs;
use std::io::{ErrorKind, Write};

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::{Builder, NamedTempFile};
use tracing::debug;

use super::document::{Document, INDENT, join, line, nest};
use super::operation::{GeneratedArtifact, Item, OperationSpec, Stmt};
use crate::docvec;
use crate::error::{GenerateError, Result};

/// Renders artifacts to source text and persists them.
pub trait Backend {
    /// Renders `artifact` to source text. Must be deterministic.
    fn render(&self, artifact: &GeneratedArtifact) -> String;

    /// Writes `artifact` to its destination, replacing any previous content.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Write`] if the file cannot be written.
    fn persist(&self, artifact: &GeneratedArtifact) -> Result<()> {
        write_atomic(&artifact.destination, &self.render(artifact))
    }

    /// Writes `artifact` only if its destination does not exist yet.
    ///
    /// Returns `false`, leaving the existing file untouched, when it does.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Write`] if the file cannot be written.
    fn persist_new(&self, artifact: &GeneratedArtifact) -> Result<bool> {
        write_new(&artifact.destination, &self.render(artifact))
    }
}

/// Renders artifacts as Rust source.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustBackend;

impl Backend for RustBackend {
    fn render(&self, artifact: &GeneratedArtifact) -> String {
        let mut text = artifact_doc(artifact).to_pretty_string();
        text.push('\n');
        text
    }
}

fn artifact_doc(artifact: &GeneratedArtifact) -> Document<'_> {
    let mut docs = vec![Document::String(format!("// package {}", artifact.package))];
    for header in &artifact.header {
        docs.push(line());
        docs.push(Document::String(format!("// {header}")));
    }
    for item in &artifact.items {
        docs.push(line());
        docs.push(line());
        docs.push(item_doc(item));
    }
    Document::Vec(docs)
}

fn item_doc(item: &Item) -> Document<'_> {
    match item {
        Item::SliceView {
            name,
            element,
            derives,
            doc,
        } => {
            let mut docs = vec![Document::String(format!("/// {doc}")), line()];
            if !derives.is_empty() {
                docs.push(Document::String(format!(
                    "#[derive({})]",
                    derives.join(", ")
                )));
                docs.push(line());
            }
            docs.push(Document::String(format!(
                "pub struct {name}<'a>(pub &'a [{element}]);"
            )));
            Document::Vec(docs)
        }
        Item::Impl {
            generics,
            trait_path,
            target,
            operations,
        } => {
            let generics = generics
                .as_ref()
                .map_or_else(String::new, |g| format!("<{g}>"));
            let head = match trait_path {
                Some(path) => format!("impl{generics} {path} for {target} {{"),
                None => format!("impl{generics} {target} {{"),
            };
            let methods = join(
                operations.iter().map(operation_doc),
                &docvec![line(), line()],
            );
            docvec![head, nest(INDENT, docvec![line(), methods]), line(), "}"]
        }
    }
}

fn operation_doc(op: &OperationSpec) -> Document<'_> {
    let mut signature = String::new();
    if op.public {
        signature.push_str("pub ");
    }
    signature.push_str("fn ");
    signature.push_str(&op.name);
    if !op.type_params.is_empty() {
        signature.push('<');
        signature.push_str(&op.type_params.join(", "));
        signature.push('>');
    }
    let mut params: Vec<String> = Vec::with_capacity(op.params.len() + 1);
    if op.takes_self {
        params.push("&self".to_string());
    }
    params.extend(op.params.iter().map(|p| format!("{}: {}", p.name, p.ty)));
    signature.push('(');
    signature.push_str(&params.join(", "));
    signature.push(')');
    if let Some(returns) = &op.returns {
        signature.push_str(" -> ");
        signature.push_str(returns);
    }

    let mut docs = Vec::new();
    if let Some(doc) = &op.doc {
        docs.push(Document::String(format!("/// {doc}")));
        docs.push(line());
    }
    docs.push(block_doc(signature, &op.body, ""));
    Document::Vec(docs)
}

fn block_doc<'a>(head: String, body: &'a [Stmt], tail: &'a str) -> Document<'a> {
    if body.is_empty() {
        return docvec![head, " {}", tail];
    }
    let mut inner = Vec::with_capacity(body.len() * 2);
    for stmt in body {
        inner.push(line());
        inner.push(stmt_doc(stmt));
    }
    docvec![
        head,
        " {",
        nest(INDENT, Document::Vec(inner)),
        line(),
        "}",
        tail
    ]
}

fn stmt_doc(stmt: &Stmt) -> Document<'_> {
    match stmt {
        Stmt::Line(text) => Document::Str(text),
        Stmt::Block { head, body, tail } => block_doc(head.clone(), body, tail),
    }
}

fn write_error(path: &Utf8Path) -> impl FnOnce(std::io::Error) -> GenerateError + '_ {
    move |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    }
}

/// Directory that holds `path`, creating it if needed.
fn prepare_parent(path: &Utf8Path) -> Result<Utf8PathBuf> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent.to_path_buf(),
        _ => Utf8PathBuf::from("."),
    };
    fs::create_dir_all(&dir).map_err(write_error(path))?;
    Ok(dir)
}

/// Temp files default to owner-only; ask for what `File::create` would use.
fn temp_builder() -> Builder<'static, 'static> {
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder
}

fn staged(path: &Utf8Path, contents: &str) -> Result<NamedTempFile> {
    let dir = prepare_parent(path)?;
    let mut file = temp_builder().tempfile_in(&dir).map_err(write_error(path))?;
    if let Ok(existing) = fs::metadata(path) {
        file.as_file()
            .set_permissions(existing.permissions())
            .map_err(write_error(path))?;
    }
    file.write_all(contents.as_bytes())
        .and_then(|()| file.as_file().sync_all())
        .map_err(write_error(path))?;
    Ok(file)
}

/// Replaces `path` with `contents` via a temporary file and a rename.
///
/// # Errors
///
/// Returns [`GenerateError::Write`] if any step fails.
pub fn write_atomic(path: &Utf8Path, contents: &str) -> Result<()> {
    let file = staged(path, contents)?;
    file.persist(path)
        .map_err(|err| write_error(path)(err.error))?;
    debug!(path = %path, bytes = contents.len(), "Persisted artifact");
    Ok(())
}

/// Creates `path` with `contents` unless it already exists.
///
/// Returns `Ok(false)` without touching the file when `path` exists.
///
/// # Errors
///
/// Returns [`GenerateError::Write`] if the file cannot be created.
pub fn write_new(path: &Utf8Path, contents: &str) -> Result<bool> {
    let file = staged(path, contents)?;
    match file.persist_noclobber(path) {
        Ok(_) => {
            debug!(path = %path, bytes = contents.len(), "Created artifact");
            Ok(true)
        }
        Err(err) if err.error.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(err) => Err(write_error(path)(err.error)),
    }
}
