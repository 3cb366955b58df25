//! Your first typed_ini experience: parse a config and read typed values.
//!
//! Run with: `cargo run --example simple`

use typed_ini::{parse, IniValue};

fn main() {
    let config = "\
; server settings
debug = true
retries = 3
max_payload = 0x4000

[db]
host = localhost
port = 5432
replicas = [alpha, beta, gamma]
";

    let doc = parse(config).expect("config should parse");

    println!("debug      = {:?}", doc.get("debug"));
    println!("retries    = {:?}", doc.get("retries"));
    println!("max_payload= {:?}", doc.get("max_payload"));

    if let Some(IniValue::Section(db)) = doc.get("db") {
        println!("db.host    = {:?}", db.get("host"));
        println!("db.port    = {:?}", db.get("port"));
        println!("db.replicas= {:?}", db.get("replicas"));
    }

    // Duplicate keys accumulate into arrays, each element typed on its own.
    let doc = parse("level=1\nlevel=2\nlevel=verbose").unwrap();
    println!("levels     = {:?}", doc.get("level"));
}
