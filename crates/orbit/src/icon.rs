use crate::nav::Icon;
use freedesktop_icons::lookup;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;

static FOUND: OnceLock<RwLock<HashMap<(Icon, u16), Option<PathBuf>>>> = OnceLock::new();

/// Themed icon file for `icon`, looked up once per size. Misses are cached
/// too, the caller falls back to [`Icon::glyph`].
pub fn find_icon_path(icon: Icon, size: u16) -> Option<PathBuf> {
    let cache = FOUND.get_or_init(|| RwLock::new(HashMap::new()));
    if let Some(hit) = cache.read().get(&(icon, size)) {
        return hit.clone();
    }

    let found = lookup(icon.freedesktop_name())
        .with_size(size)
        .with_scale(1)
        .find();
    if found.is_none() {
        log::debug!("No themed icon for {}", icon.freedesktop_name());
    }
    cache.write().insert((icon, size), found.clone());
    found
}

pub fn clear_cache() {
    if let Some(cache) = FOUND.get() {
        cache.write().clear();
    }
}
