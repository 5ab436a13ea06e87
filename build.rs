use std::fs;
use std::path::Path;

fn main() {
    // Askama reads templates at compile time; cargo does not track them on its own.
    let dir = Path::new("templates");
    println!("cargo:rerun-if-changed={}", dir.display());

    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let p = entry.path();
        if p.extension().and_then(|s| s.to_str()) == Some("html") {
            println!("cargo:rerun-if-changed={}", p.display());
        }
    }
}
