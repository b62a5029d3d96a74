/// Literal recognition and conversion helpers.
///
/// Integer literals are plain runs of ASCII digits; the helpers here decide
/// whether a token looks like one and convert it to `i64` without silent
/// truncation.
pub mod num;
