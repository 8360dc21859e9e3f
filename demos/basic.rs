use param_cursor::ParamCursor;

fn main() {
    // Walk the parameters of a URL
    let mut cursor = ParamCursor::new("AA?k=v&k=&k&=&");

    while cursor.advance() {
        // A missing value (no '=') is None, `k=` gives Some("")
        println!("{:?} = {:?}", cursor.key(), cursor.value());
    }
    // Some("k") = Some("v")
    // Some("k") = Some("")
    // Some("k") = None
    // Some("") = Some("")
    // Some("") = None
}
