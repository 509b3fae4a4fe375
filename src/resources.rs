//! Transient resource lifecycle for imported images.
//!
//! Imported files never touch disk or network: their bytes live in memory
//! behind a [`ResourceHandle`] for exactly as long as something still shows
//! them. The pool keeps one strong reference per allocation in its registry;
//! live items, history snapshots, and the clipboard hold additional clones.
//! Releasing a handle drops the registry reference, so the bytes survive
//! until the last snapshot referencing them is pruned. Reference counting
//! via `Arc`, not ad hoc tracking arrays.
//!
//! Built-in assets (the icon set, the default background) are permanent and
//! never pass through the pool.

use crate::constants::MAX_IMPORT_BYTES;
use crate::error::{EditorError, EditorResult};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Weak};

/// A file handed to the editor by drag-and-drop or the file picker.
///
/// Both entry points funnel into the same validation in
/// [`ResourcePool::allocate`].
#[derive(Clone, Debug)]
pub struct ImportFile {
    /// Original file name, used for item display names
    pub name: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl ImportFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read an import from disk (the file-picker path).
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "untitled".to_string());
        let bytes = std::fs::read(path)?;
        Ok(Self { name, bytes })
    }
}

/// Owned backing data; opaque outside this module.
#[derive(Debug)]
pub struct ResourceData {
    id: u64,
    name: String,
    bytes: Vec<u8>,
}

/// Shared reference to an imported image's bytes.
///
/// Cloning is cheap; clones held by history or clipboard snapshots keep the
/// data alive after the pool has released it.
#[derive(Clone, Debug)]
pub struct ResourceHandle(Arc<ResourceData>);

impl ResourceHandle {
    pub fn id(&self) -> u64 {
        self.0.id
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0.bytes
    }

    /// Downgrade to a weak reference, used by tests to observe deallocation.
    pub fn downgrade(&self) -> Weak<ResourceData> {
        Arc::downgrade(&self.0)
    }
}

impl PartialEq for ResourceHandle {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for ResourceHandle {}

// Bytes are deliberately left out: snapshots of the item list serialize to
// a readable summary, not a re-importable archive.
impl Serialize for ResourceHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ResourceHandle", 2)?;
        state.serialize_field("id", &self.0.id)?;
        state.serialize_field("name", &self.0.name)?;
        state.end()
    }
}

/// Registry of live imported resources.
///
/// Every handle returned by [`allocate`](Self::allocate) is released exactly
/// once: either explicitly when its owning item or background goes away, or
/// by [`release_all`](Self::release_all) at editor teardown.
#[derive(Default)]
pub struct ResourcePool {
    registry: HashMap<u64, ResourceHandle>,
    next_id: u64,
}

impl ResourcePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate an import and allocate a handle for it.
    ///
    /// Accepts PNG, JPEG, and WebP by content sniffing (the extension lies,
    /// the bytes do not), and rejects files over the 8 MB ceiling.
    pub fn allocate(&mut self, file: &ImportFile) -> EditorResult<ResourceHandle> {
        validate_import(file)?;

        let id = self.next_id;
        self.next_id += 1;
        let handle = ResourceHandle(Arc::new(ResourceData {
            id,
            name: file.name.clone(),
            bytes: file.bytes.clone(),
        }));
        self.registry.insert(id, handle.clone());
        tracing::debug!(id, name = %file.name, size = file.bytes.len(), "allocated resource");
        Ok(handle)
    }

    /// Drop the registry reference for a handle. Idempotent: releasing an
    /// already-released handle is a no-op.
    pub fn release(&mut self, handle: &ResourceHandle) {
        if self.registry.remove(&handle.id()).is_some() {
            tracing::debug!(id = handle.id(), "released resource");
        }
    }

    /// Drop all registry references. Called at editor teardown.
    pub fn release_all(&mut self) {
        if !self.registry.is_empty() {
            tracing::debug!(count = self.registry.len(), "releasing all resources");
        }
        self.registry.clear();
    }

    /// Number of resources still held by the registry.
    pub fn live_count(&self) -> usize {
        self.registry.len()
    }

    pub fn is_live(&self, id: u64) -> bool {
        self.registry.contains_key(&id)
    }
}

/// Check an import against the type allowlist and size ceiling.
pub fn validate_import(file: &ImportFile) -> EditorResult<()> {
    use image::ImageFormat;

    let format = image::guess_format(&file.bytes).ok();
    if !matches!(
        format,
        Some(ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::WebP)
    ) {
        tracing::warn!(name = %file.name, "rejected import: unsupported type");
        return Err(EditorError::UnsupportedFileType {
            name: file.name.clone(),
        });
    }
    let size = file.bytes.len() as u64;
    if size > MAX_IMPORT_BYTES {
        tracing::warn!(name = %file.name, size, "rejected import: too large");
        return Err(EditorError::FileTooLarge {
            name: file.name.clone(),
            size,
        });
    }
    Ok(())
}
