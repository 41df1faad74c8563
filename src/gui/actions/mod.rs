// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{collect,copy,export,reload,sync_crm}.

mod collect; // src/gui/actions/collect.rs
mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod reload;  // src/gui/actions/reload.rs
mod sync;    // src/gui/actions/sync.rs

pub use collect::{collect, collect_finished, CollectOutcome};
pub use copy::copy;
pub use export::export;
pub use reload::reload;
pub use sync::sync_crm;
