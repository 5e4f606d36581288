use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const MIN_WINDOW_WIDTH: i32 = 320;
const MIN_WINDOW_HEIGHT: i32 = 200;
const LAUNCH_PARAM_SHAPES: [&str; 2] = ["empty", "browser"];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowDefaults {
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppManifest {
    schema_version: u32,
    app_id: String,
    title: String,
    icon: String,
    accent: String,
    show_in_dock: bool,
    launch_params: String,
    window_defaults: WindowDefaults,
}

fn app_manifest_paths(root: &Path) -> Vec<PathBuf> {
    let dir = root.join("manifests");
    println!("cargo:rerun-if-changed={}", dir.display());
    let mut paths = fs::read_dir(&dir)
        .unwrap_or_else(|err| panic!("failed to list {}: {err}", dir.display()))
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect::<Vec<_>>();
    paths.sort();
    paths
}

fn validate(path: &Path, manifest: &AppManifest) {
    if manifest.schema_version != 1 {
        panic!(
            "manifest schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }
    let stem = path.file_stem().and_then(|stem| stem.to_str()).unwrap_or("");
    if manifest.app_id != stem {
        panic!(
            "manifest {} declares app_id `{}`; the file must be named after its app id",
            path.display(),
            manifest.app_id
        );
    }
    if manifest.title.trim().is_empty() {
        panic!("manifest {} has an empty title", path.display());
    }
    if !LAUNCH_PARAM_SHAPES.contains(&manifest.launch_params.as_str()) {
        panic!(
            "manifest {} declares unknown launch_params `{}`",
            path.display(),
            manifest.launch_params
        );
    }
    if manifest.window_defaults.width < MIN_WINDOW_WIDTH
        || manifest.window_defaults.height < MIN_WINDOW_HEIGHT
    {
        panic!(
            "manifest {} window_defaults below {MIN_WINDOW_WIDTH}x{MIN_WINDOW_HEIGHT}",
            path.display()
        );
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let mut manifests = Vec::<AppManifest>::new();
    let mut seen = BTreeSet::new();

    for path in app_manifest_paths(&crate_root) {
        println!("cargo:rerun-if-changed={}", path.display());
        let raw = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
        let manifest: AppManifest = toml::from_str(&raw)
            .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
        validate(&path, &manifest);
        if !seen.insert(manifest.app_id.clone()) {
            panic!("duplicate app_id `{}`", manifest.app_id);
        }
        manifests.push(manifest);
    }

    manifests.sort_by(|a, b| a.app_id.cmp(&b.app_id));
    let json = serde_json::to_string_pretty(&manifests).expect("serialize app manifest catalog");
    let generated = format!(
        "/// Build-time generated app manifest catalog JSON.\n\
pub const APP_MANIFEST_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
