use pipe_xml_compiler::{
    builder::{BuildOptions, TreeBuilder},
    convert, convert_rows,
    error::{ConvertError, RowProblem},
    load_schema,
};
use pipe_xml_schema::people;
use proptest::prelude::*;

#[test]
fn test_end_to_end_person_with_phone() {
    let schema = people();
    let mut builder = TreeBuilder::new(&schema);
    builder.open_root();
    builder.process_row("P|Anna|Svensson").unwrap();
    builder.process_row("T|0701234567|").unwrap();
    builder.close_all();

    let expected = "\
<people>
     <person>
          <firstname>Anna</firstname>
          <lastname>Svensson</lastname>
          <phone>
               <mobile>0701234567</mobile>
          </phone>
     </person>
</people>";
    assert_eq!(builder.xml(), expected);
    assert_eq!(builder.depth(), 0);
}

#[test]
fn test_address_nests_inside_family() {
    let schema = people();
    let xml = convert_rows(
        &["P|Jane|Doe", "F|Smith|1990", "A|Main St|Springfield|00000"],
        &schema,
        &BuildOptions::default(),
    )
    .unwrap();

    let expected = "\
<people>
     <person>
          <firstname>Jane</firstname>
          <lastname>Doe</lastname>
          <family>
               <firstname>Smith</firstname>
               <born>1990</born>
               <address>
                    <street>Main St</street>
                    <city>Springfield</city>
                    <zipcode>00000</zipcode>
               </address>
          </family>
     </person>
</people>";
    assert_eq!(xml, expected);
}

#[test]
fn test_new_person_closes_family_and_person() {
    let schema = people();
    let xml = convert_rows(
        &["P|Jane|Doe", "F|Tom|1995", "P|John|Roe"],
        &schema,
        &BuildOptions::default(),
    )
    .unwrap();

    let expected = "\
<people>
     <person>
          <firstname>Jane</firstname>
          <lastname>Doe</lastname>
          <family>
               <firstname>Tom</firstname>
               <born>1995</born>
          </family>
     </person>
     <person>
          <firstname>John</firstname>
          <lastname>Roe</lastname>
     </person>
</people>";
    assert_eq!(xml, expected);
}

#[test]
fn test_missing_fields_are_omitted() {
    let schema = people();
    let xml = convert_rows(&["P|Anna", "A|Storgatan 1"], &schema, &BuildOptions::default()).unwrap();
    assert!(xml.contains("<firstname>Anna</firstname>"));
    assert!(!xml.contains("lastname"));
    assert!(xml.contains("<street>Storgatan 1</street>"));
    assert!(!xml.contains("city"));
    assert!(!xml.contains("zipcode"));
}

#[test]
fn test_convert_text_with_crlf_and_blank_lines() {
    let text = "P|Anna|Svensson\r\n\r\nT|0701234567\r\n";
    let xml = convert(text, &people(), &BuildOptions { indent: 1 }).unwrap();
    assert_eq!(
        xml,
        "<people>\n <person>\n  <firstname>Anna</firstname>\n  <lastname>Svensson</lastname>\n  <phone>\n   <mobile>0701234567</mobile>\n  </phone>\n </person>\n</people>"
    );
}

#[test]
fn test_convert_rejects_invalid_input() {
    let schema = people();
    let options = BuildOptions::default();

    assert!(matches!(convert("", &schema, &options), Err(ConvertError::EmptyInput)));

    match convert("P|Anna\nQ|x", &schema, &options) {
        Err(ConvertError::UnknownTag(tags)) => assert_eq!(tags, vec!["Q"]),
        other => panic!("expected UnknownTag but got {:?}", other),
    }

    let err = convert("P|Anna\nT", &schema, &options).unwrap_err();
    assert_eq!(err.row_problems(), &[RowProblem::NoFields]);

    let err = convert("P||Svensson", &schema, &options).unwrap_err();
    assert_eq!(err.row_problems(), &[RowProblem::EmptyField]);
}

#[test]
fn test_first_row_must_attach_to_root() {
    // valid rows, but a phone cannot sit directly under people
    let err = convert("T|0701234567", &people(), &BuildOptions::default()).unwrap_err();
    assert!(matches!(err, ConvertError::Unattachable { row: 1, ref tag } if tag == "T"));
}

#[test]
fn test_custom_schema_from_json() {
    let schema = load_schema(
        r#"{
            "root":  { "name": "library", "children": ["S"] },
            "rules": {
                "S": { "name": "shelf", "fields": ["label"], "children": ["B"] },
                "B": { "name": "book", "fields": ["title", "author"] }
            }
        }"#,
    )
    .unwrap();

    let xml = convert("S|A\nB|Dune|Herbert\nB|Emma\nS|B", &schema, &BuildOptions { indent: 2 }).unwrap();
    let expected = "\
<library>
  <shelf>
    <label>A</label>
    <book>
      <title>Dune</title>
      <author>Herbert</author>
    </book>
    <book>
      <title>Emma</title>
    </book>
  </shelf>
  <shelf>
    <label>B</label>
  </shelf>
</library>";
    assert_eq!(xml, expected);
}

#[test]
fn test_load_schema_rejects_undefined_child() {
    let err = load_schema(r#"{ "root": { "name": "library", "children": ["S"] } }"#).unwrap_err();
    assert!(matches!(err, ConvertError::SchemaError(_)));

    let err = load_schema("{ not json").unwrap_err();
    assert!(matches!(err, ConvertError::SchemaJson(_)));
}

/// Replays the output with a stack, checking nesting and indentation.
fn assert_well_formed(xml: &str, indent: usize) {
    let mut stack: Vec<String> = Vec::new();
    for line in xml.lines() {
        let body = line.trim_start_matches(' ');
        let leading = line.len() - body.len();

        if let Some(name) = body.strip_prefix("</") {
            let name = name.trim_end_matches('>');
            let open = stack.pop().expect("closing tag without an open element");
            assert_eq!(open, name);
            assert_eq!(leading, stack.len() * indent);
        } else if body.ends_with("/>") || body[1..].contains("</") {
            assert_eq!(leading, stack.len() * indent);
        } else {
            assert_eq!(leading, stack.len() * indent);
            stack.push(body.trim_start_matches('<').trim_end_matches('>').to_string());
        }
    }
    assert!(stack.is_empty(), "unclosed elements: {:?}", stack);
}

fn row_strategy() -> impl Strategy<Value = String> {
    let value = "[A-Za-z0-9]{1,8}";
    prop_oneof![
        prop::collection::vec(value, 1..=2).prop_map(|f| format!("P|{}", f.join("|"))),
        prop::collection::vec(value, 1..=2).prop_map(|f| format!("F|{}", f.join("|"))),
        prop::collection::vec(value, 1..=3).prop_map(|f| format!("A|{}", f.join("|"))),
        prop::collection::vec(value, 1..=2).prop_map(|f| format!("T|{}", f.join("|"))),
    ]
}

proptest! {
    #[test]
    fn prop_output_is_balanced(
        first in prop::collection::vec("[A-Za-z]{1,8}", 1..=2),
        rest in prop::collection::vec(row_strategy(), 0..40),
        indent in 0usize..6,
    ) {
        let mut rows = vec![format!("P|{}", first.join("|"))];
        rows.extend(rest);
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();

        let xml = convert_rows(&rows, &people(), &BuildOptions { indent }).unwrap();
        assert_well_formed(&xml, indent);

        let opened = xml.lines().filter(|l| {
            let body = l.trim_start();
            !body.starts_with("</") && !body[1..].contains("</")
        }).count();
        let closed = xml.lines().filter(|l| l.trim_start().starts_with("</")).count();
        prop_assert_eq!(opened, closed);
    }

    #[test]
    fn prop_leaf_count_matches_supplied_fields(
        fields in prop::collection::vec("[a-z]{1,5}", 1..=3),
    ) {
        let row = format!("A|{}", fields.join("|"));
        let xml = convert_rows(&["P|x", row.as_str()], &people(), &BuildOptions::default()).unwrap();
        let names = ["street", "city", "zipcode"];
        for (i, name) in names.iter().enumerate() {
            prop_assert_eq!(xml.contains(&format!("<{}>", name)), i < fields.len());
        }
    }
}
