//! Utility helpers shared across integration tests.

/// Join a list of string slices with `\n`, as `wrap` joins output lines.
macro_rules! joined {
    ($($line:expr),* $(,)?) => {
        vec![$($line.to_string()),*].join("\n")
    };
}

/// Assert that every line of wrapped output fits the effective width.
///
/// Applies only to output free of kinsoku overruns and bracket spans; those
/// are allowed to exceed the budget by design.
pub fn assert_lines_within_width(output: &str, width: usize) {
    for line in output.split('\n') {
        assert!(
            jawrap::width::str_width(line) <= width,
            "line {line:?} exceeds width {width}",
        );
    }
}
