use anyhow::Result;
use std::path::PathBuf;

use super::load_router;

pub fn cmd_check(manifest: PathBuf) -> Result<()> {
    let router = load_router(&manifest)?;

    let mut keys: Vec<&String> = router.keys().collect();
    keys.sort();
    for key in keys {
        let count = router.table(key.as_str()).map_or(0, |t| t.len());
        println!("{}: {} route{}", key, count, if count == 1 { "" } else { "s" });
    }
    println!("OK: {} routes registered", router.len());
    Ok(())
}
