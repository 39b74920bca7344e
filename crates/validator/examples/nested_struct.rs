//! Validating a struct with a nested struct field.
//!
//! Run with `cargo run -p veritas-validator --example nested_struct`.

use veritas_validator::prelude::*;

#[derive(Default)]
struct Address {
    country: String,
    province: String,
    city: String,
}

#[derive(Default)]
struct Person {
    name: String,
    age: i32,
    address: Address,
}

fn person_schema(p: &Person) -> Schema<'_> {
    schema! {
        field("name", &p.name) => len(1, 5),
        field("age", &p.age) => gte(10),
        Field::opaque("address", &p.address) => nested(schema! {
            field("country", &p.address.country) => nonzero(),
            field("province", &p.address.province) => nonzero(),
            field("city", &p.address.city) => nonzero(),
        }),
    }
}

fn report(label: &str, p: &Person) {
    match validate(&person_schema(p)) {
        Ok(()) => println!("✓ {label}: valid"),
        Err(errors) => {
            println!("✗ {label}: {} error(s)", errors.len());
            for error in &errors {
                println!("    {error}");
            }
        }
    }
}

fn main() {
    report("empty person", &Person::default());

    let alice = Person {
        name: "alice".into(),
        age: 30,
        address: Address {
            country: "FR".into(),
            province: "IDF".into(),
            city: "Paris".into(),
        },
    };
    report("alice", &alice);
}
