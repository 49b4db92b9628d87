//! Process-wide registry instance.

use std::sync::LazyLock;

use parking_lot::Mutex;

use super::Registry;

/// Global registry - created empty on first access.
static GLOBAL: LazyLock<Mutex<Registry>> = LazyLock::new(|| Mutex::new(Registry::new()));

/// The shared registry for callers without an owned [`Registry`].
///
/// Loads through this instance are serialized by the mutex; batch order is
/// still the caller's responsibility.
pub fn global() -> &'static Mutex<Registry> {
    &GLOBAL
}
