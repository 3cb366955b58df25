//! Building a document with the ini! macro and writing it to disk.
//!
//! Run with: `cargo run --example build_and_write`

use typed_ini::{ini, parse_file, stringify, write_file, LineEnding};

fn main() {
    let doc = ini! {
        "debug": false,
        "workers": 8,
        "tags": ["fast", "stable"],
        "db": {
            "host": "localhost",
            "port": 5432,
        },
    };

    println!("--- stringified ---");
    println!("{}", stringify(&doc).expect("document is flat"));

    let path = std::env::temp_dir().join("typed_ini_demo.ini");
    write_file(&path, &doc, LineEnding::Lf).expect("write should succeed");
    println!("wrote {}", path.display());

    let loaded = parse_file(&path).expect("file should parse back");
    println!("reloaded {} top-level properties", loaded.len());
    // Note: the tags array was written as a plain comma join, so it
    // reloads as the string "fast,stable".
    println!("tags reloaded as {:?}", loaded.get("tags"));

    let _ = std::fs::remove_file(&path);
}
