//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `brandwatch_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("brandwatch_core ping={}", brandwatch_core::ping());
    println!("brandwatch_core version={}", brandwatch_core::core_version());
}
