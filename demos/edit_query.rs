/// Rewrite a query while walking it
use param_cursor::{ParamCursor, Result};

fn main() -> Result<()> {
    let mut cursor = ParamCursor::new("http://site?c=2&d");

    while cursor.advance() {
        if cursor.is_first() {
            // Insert a parameter BEFORE the current one
            cursor.insert_before("b", Some("1"))?;
        }
        if cursor.key() == Some("d") && cursor.value() != Some("3") {
            // To modify a parameter, remove it and insert it again
            cursor.remove()?;
            cursor.insert_after("d", Some("3"))?;
        }
        if cursor.is_last() {
            // Insert a parameter AFTER the current one
            cursor.insert_after("e", Some("4"))?;
        }
    }

    cursor.insert_first("a", Some("0"));
    cursor.insert_last("f", Some("5"));
    println!("{cursor}"); // http://site?a=0&b=1&c=2&d=3&e=4&f=5

    // A different separator
    let mut cursor = ParamCursor::with_separator("AA?b=2;c=3;d=4#fragment", ';')?;
    while cursor.advance() {
        if cursor.key() == Some("c") {
            cursor.remove()?;
        }
    }
    println!("{cursor}"); // AA?b=2;d=4#fragment

    Ok(())
}
