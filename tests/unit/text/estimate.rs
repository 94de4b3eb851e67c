use super::*;

fn measure(text: &str, size_px: f32, max_width: f64) -> Size {
    EstimatingMeasurer::default()
        .measure(text, Font::system(size_px), max_width, f64::INFINITY)
        .unwrap()
}

#[test]
fn single_line_when_unconstrained() {
    // 5 chars * 8 advance, 20 line height
    assert_eq!(measure("hello", 16.0, f64::INFINITY), Size::new(40.0, 20.0));
}

#[test]
fn wraps_greedily_at_spaces() {
    // "aa bb cc" at advance 8: "aa bb" is 40 wide, adding " cc" would be 64
    assert_eq!(measure("aa bb cc", 16.0, 50.0), Size::new(40.0, 40.0));
    assert_eq!(measure("aa bb cc", 16.0, 64.0), Size::new(64.0, 20.0));
}

#[test]
fn long_word_overflows_alone() {
    assert_eq!(measure("abcdefgh ij", 16.0, 10.0), Size::new(64.0, 40.0));
}

#[test]
fn newlines_force_breaks() {
    assert_eq!(
        measure("ab\n\nabcd", 16.0, f64::INFINITY),
        Size::new(32.0, 60.0)
    );
}

#[test]
fn empty_and_negative_widths() {
    assert_eq!(measure("", 16.0, 100.0), Size::ZERO);
    assert_eq!(measure("a b", 16.0, -5.0), Size::new(8.0, 40.0));
}

#[test]
fn remeasuring_at_own_width_is_stable() {
    let first = measure("one two three four five", 12.0, 70.0);
    let again = measure("one two three four five", 12.0, first.width);
    assert_eq!(first, again);
}

#[test]
fn engine_without_font_has_no_shaper() {
    let mut engine = TextEngine::default();
    assert!(engine.parley_mut().is_none());
    let size = engine
        .measure("hi", Font::system(8.0), f64::INFINITY, f64::INFINITY)
        .unwrap();
    assert_eq!(size, Size::new(8.0, 10.0));
}
