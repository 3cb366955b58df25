//! Validating parsed configs against a declarative schema.
//!
//! Run with: `cargo run --example schema_validation`

use typed_ini::{read, ParseOptions, ReadOptions, Schema, SchemaKind};

fn main() {
    let schema = Schema::new()
        .field("contact", SchemaKind::Email, true)
        .field("endpoint", SchemaKind::Url, true)
        .field(
            "mode",
            SchemaKind::OneOf(vec!["dev".to_string(), "prod".to_string()]),
            true,
        )
        .section(
            "db",
            Schema::new()
                .field("host", SchemaKind::String, true)
                .field("port", SchemaKind::Number, true),
        );

    let good = "\
contact = ops@example.com
endpoint = https://api.example.com/v1
mode = prod

[db]
host = localhost
port = 5432
";

    let source = read(good, ReadOptions::new().with_schema(schema.clone()));
    match source.parse(&ParseOptions::new()) {
        Ok(doc) => println!("valid config with {} top-level properties", doc.len()),
        Err(err) => println!("unexpected: {}", err),
    }

    // Validation is fail-fast: the first declared violation is reported.
    let bad = "contact = not-an-email\nendpoint = ://nope\nmode = staging";
    let source = read(bad, ReadOptions::new().with_schema(schema));
    match source.parse(&ParseOptions::new()) {
        Ok(_) => println!("unexpectedly valid"),
        Err(err) => println!("rejected: {}", err),
    }
}
