//! Encoding a heterogeneous batch of records.
//!
//! Run with: cargo run --example simple

use cson::{cson_record, to_string_batch, Record};
use std::error::Error;

cson_record! {
    #[derive(Debug)]
    struct Student {
        #[cson(rename = "fullName")]
        name: String,
        age: i32,
        enrolled: bool,
    }
}

cson_record! {
    #[derive(Debug)]
    struct Course {
        code: String,
        credits: f32,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let ada = Student {
        name: "Ada Lovelace".to_string(),
        age: 36,
        enrolled: true,
    };
    let alan = Student {
        name: "Alan Turing".to_string(),
        age: 41,
        enrolled: false,
    };
    let course = Course {
        code: "ECS 160".to_string(),
        credits: 4.0,
    };

    let records: Vec<&dyn Record> = vec![&ada, &course, &alan];
    let cson = to_string_batch(&records)?;
    println!("CSON output:\n{}\n", cson);

    let (schema, data) = cson.split_once('🔥').unwrap_or_default();
    println!("Schema section: {}", schema);
    println!("Data section:   {}", data);

    Ok(())
}
