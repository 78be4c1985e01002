/// Compile a regex literal once and hand out a `&'static Regex`.
///
/// The field parser and the validator checks go through this so each pattern is
/// built on first use and shared by all later calls.
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}
