// example/src/main.rs

use pipe_xml::*;

const REGISTER: &str = "\
P|Carl Gustaf|Bernadotte
T|0768-101801|08-101801
A|Drottningholms slott|Stockholm|10001
F|Victoria|1977
A|Haga Slott|Stockholm|10002
F|Carl Philip|1979
T|0768-101802|08-101802
P|Barack|Obama
A|1600 Pennsylvania Avenue|Washington, D.C";

fn main() -> Result<(), ConvertError> {
    let schema = people();

    // Validation reports every unknown tag up front, so check before building.
    let rows = split_rows(REGISTER);
    validate_rows(&rows, &schema)?;

    // Build row by row to show the open-element depth after each one.
    let mut builder = TreeBuilder::new(&schema);
    builder.open_root();
    for row in &rows {
        builder.process_row(row)?;
        println!("{:<40} depth {}", row, builder.depth());
    }
    let xml = builder.finish();

    println!();
    println!("{}", xml);

    // The one-call form gives the same document.
    println!();
    println!("convert_str matches: {}", convert_str(REGISTER, &schema)? == xml);
    Ok(())
}
