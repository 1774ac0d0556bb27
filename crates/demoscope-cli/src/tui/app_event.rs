use demoscope_runtime::{DatasetStore, WorldGeometry};

/// Messages posted by worker threads into the UI loop. Exactly two
/// suspension points exist in a session: the startup dataset load and the
/// at-most-once world-geometry fetch.
#[derive(Debug)]
pub enum AppEvent {
    DatasetLoaded(demoscope_runtime::Result<DatasetStore>),
    GeometryLoaded(demoscope_runtime::Result<WorldGeometry>),
}
