// NOTE: demoscope Architecture Rationale
//
// Why a static snapshot (not live queries)?
// - The indicator sources (V-Dem, BTI, ERT, DEED) publish on yearly cadences;
//   a session explores one immutable snapshot and never mutates a record
// - Filter/sort/view selections are ephemeral UI state, reset only by the
//   user, never persisted
//
// Why derive-per-frame (not cached derived lists)?
// - The tracked set is a few dozen records; re-running the pure derivation on
//   every draw keeps the three views trivially synchronized with the current
//   criteria and sidesteps cache invalidation entirely
//
// Why a load-once geometry cache with explicit states?
// - The world outline is megabytes of remote GeoJSON; one successful fetch
//   serves the whole session
// - Failure must not wedge the map view: Failed transitions back toward
//   Loading on the next activation, which retries automatically

mod args;
mod commands;
mod tui;

pub use args::Cli;
pub use commands::run;
