// NOTE: storelens Architecture Rationale
//
// Why re-derive everything on render (not cache derived views)?
// - The catalog is tens of items; stats, histograms, and filtering are a
//   single pass each
// - One source of truth (the fetched snapshot + query state) means no
//   invalidation bugs when the query changes mid-session
// - Trade-off: redundant work per frame, unmeasurable at this scale
//
// Why a generation counter on fetches?
// - A screen can be torn down (or its product id replaced) while its request
//   is still in flight
// - Responses carry the generation they were spawned with; the event loop
//   drops anything that no longer matches the live screen's generation
// - This is the one ordering guarantee the tool must keep: a stale response
//   must never overwrite newer screen state

mod args;
mod commands;
pub mod app;
mod handlers;
pub mod types;
pub mod ui;
pub mod views;

pub use args::{Cli, Commands};
pub use commands::run;
