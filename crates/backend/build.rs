use std::env;
use std::fs;
use std::path::Path;

/// Кладет config.toml из корня workspace рядом с собранным бинарником,
/// где его ищет `shared::config::load_config`.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let (Ok(out_dir), Ok(profile)) = (env::var("OUT_DIR"), env::var("PROFILE")) else {
        return;
    };

    // OUT_DIR: target/<profile>/build/backend-xxx/out
    let Some(target_dir) = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
    else {
        println!("cargo:warning=target profile directory not found, config.toml not copied");
        return;
    };

    let source_config = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    if !source_config.exists() {
        println!("cargo:warning=config.toml not found, embedded default config will be used");
        return;
    }

    if let Err(e) = fs::copy(&source_config, target_dir.join("config.toml")) {
        println!("cargo:warning=failed to copy config.toml: {e}");
    }
}
