use super::*;

#[test]
fn test_line_map_simple() {
    let source = "line1\nline2\nline3";
    let map = LineMap::build(source);

    // First character of first line
    assert_eq!(map.offset_to_position(0, source), Position::new(0, 0));
    // Last character of first line
    assert_eq!(map.offset_to_position(4, source), Position::new(0, 4));
    // First character of second line
    assert_eq!(map.offset_to_position(6, source), Position::new(1, 0));
    // First character of third line
    assert_eq!(map.offset_to_position(12, source), Position::new(2, 0));
}

#[test]
fn test_line_map_windows_line_endings() {
    let source = "line1\r\nline2\r\nline3";
    let map = LineMap::build(source);

    assert_eq!(map.offset_to_position(7, source), Position::new(1, 0));
    assert_eq!(map.line_text(0, source), Some("line1"));
    assert_eq!(map.line_text(1, source), Some("line2"));
}

#[test]
fn test_line_map_lone_carriage_return() {
    let source = "a\rb";
    let map = LineMap::build(source);

    assert_eq!(map.line_text(1, source), Some("b"));
    assert_eq!(map.offset_to_position(2, source), Position::new(1, 0));
}

#[test]
fn test_columns_count_characters_not_bytes() {
    let source = "# é\ndef f(): ...";
    let map = LineMap::build(source);

    // 'é' is two bytes; the offset after it is column 3
    assert_eq!(map.offset_to_position(4, source), Position::new(0, 3));
    assert_eq!(map.line_text(1, source), Some("def f(): ..."));
}

#[test]
fn test_offset_past_end_is_clamped() {
    let source = "abc";
    let map = LineMap::build(source);

    assert_eq!(map.offset_to_position(100, source), Position::new(0, 3));
    assert_eq!(map.line_text(5, source), None);
}
