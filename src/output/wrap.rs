//! Greedy line filling.

/// Default terminal width in columns.
pub const DEFAULT_WIDTH: usize = 80;

/// Joins `words` with single spaces, soft-wrapped at `width` columns.
///
/// Lines are filled greedily: a word goes on the current line if it
/// fits, otherwise it starts a new one. A word longer than `width` sits
/// on a line of its own. The result ends with a blank line.
pub fn wrap_words<S: AsRef<str>>(words: &[S], width: usize) -> String {
    let mut out = String::new();
    let mut line_len = 0;

    for word in words {
        let word = word.as_ref();
        let word_len = word.chars().count();

        if line_len > 0 && line_len + 1 + word_len > width {
            out.push('\n');
            line_len = 0;
        }
        if line_len > 0 {
            out.push(' ');
            line_len += 1;
        }
        out.push_str(word);
        line_len += word_len;
    }

    out.push_str("\n\n");
    out
}
