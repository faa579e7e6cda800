//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `jinmyaku_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Probe core wiring independently from the Flutter/FFI runtime.
    println!("jinmyaku_core ping={}", jinmyaku_core::ping());
    println!("jinmyaku_core version={}", jinmyaku_core::core_version());
}
