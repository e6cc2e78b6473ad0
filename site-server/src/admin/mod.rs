//! Admin editing backend: snapshots and batched saves

pub mod save;
pub mod snapshot;

pub use save::{plan_save, save_page};
pub use snapshot::load_snapshot;
