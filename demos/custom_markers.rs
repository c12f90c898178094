//! Loading markers from configuration and encoding with them.
//!
//! Run with: cargo run --example custom_markers

use cson::{cson_record, to_string_with_options, CsonOptions};
use std::error::Error;

cson_record! {
    struct Reading {
        sensor: String,
        celsius: f64,
        ok: bool,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = r##"{
        "markers": {
            "type_def": "#",
            "field_def": "|",
            "field_type": ":",
            "schema_data_sep": "\n---\n",
            "object_val": "@",
            "field_val": ","
        },
        "true_token": "+",
        "false_token": "-"
    }"##;
    let options: CsonOptions = serde_json::from_str(config)?;
    options.validate()?;

    let reading = Reading {
        sensor: "probe|7".to_string(),
        celsius: 21.5,
        ok: true,
    };

    // The '|' inside the sensor name is escaped because it starts a marker.
    println!("{}", to_string_with_options(&reading, options)?);

    Ok(())
}
