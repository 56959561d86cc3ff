//! `sac_rust` (sac) - Layered configuration CLI
//!
//! Resolves an effective key-value configuration by merging a global
//! home-directory file with a per-directory override file, and exposes
//! set/get/delete/list commands against the merged result.

use sac_rust::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
