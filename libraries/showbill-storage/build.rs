//! Build script for showbill-storage.
//!
//! Recompiles the crate whenever the embedded migrations are edited, so
//! `sqlx::migrate!` always picks up the current set.

fn main() {
    println!("cargo:rerun-if-changed=migrations");
}
