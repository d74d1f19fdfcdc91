use anyhow::Result;
use serde_json::json;
use std::path::PathBuf;

use super::load_router;

pub fn cmd_lookup(manifest: PathBuf, key: String, path: String, quiet: bool) -> Result<()> {
    let router = load_router(&manifest)?;
    let result = router.find(key.as_str(), &path);
    let found = result.is_some();

    if quiet {
        // Quiet mode: no output, just exit code
        std::process::exit(if found { 0 } else { 1 });
    }

    match result {
        Some(m) => {
            let out = json!({
                "pattern": m.pattern(),
                "payload": m.payload(),
                "params": m.params(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        None => println!("null"),
    }

    std::process::exit(if found { 0 } else { 1 });
}
