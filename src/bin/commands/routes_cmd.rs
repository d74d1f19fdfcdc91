use anyhow::Result;
use std::path::PathBuf;

use super::load_router;

pub fn cmd_routes(manifest: PathBuf, key: Option<String>) -> Result<()> {
    let router = load_router(&manifest)?;

    let mut keys: Vec<&String> = match &key {
        Some(k) => router.keys().filter(|candidate| *candidate == k).collect(),
        None => router.keys().collect(),
    };
    keys.sort();

    for key in keys {
        for pattern in router.routes(key.as_str()) {
            println!("{}\t{}", key, pattern);
        }
    }
    Ok(())
}
