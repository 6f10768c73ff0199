use crate::schema::{Rule, Schema};

pub const PEOPLE_ROOT: &str = "people";

/// The built-in schema for person registers:
///
/// ```text
/// people
///   P person  (firstname, lastname)  children: T A F
///   F family  (firstname, born)      children: T A
///   A address (street, city, zipcode)
///   T phone   (mobile, landline)
/// ```
pub fn people() -> Schema {
    let none: [&str; 0] = [];

    Schema::new(Rule::new(PEOPLE_ROOT, none, ["P"]))
        .with_rule("P", Rule::new("person", ["firstname", "lastname"], ["T", "A", "F"]))
        .with_rule("F", Rule::new("family", ["firstname", "born"], ["T", "A"]))
        .with_rule("A", Rule::new("address", ["street", "city", "zipcode"], none))
        .with_rule("T", Rule::new("phone", ["mobile", "landline"], none))
}
