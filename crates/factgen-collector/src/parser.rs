//! Split backend output into raw lines

/// Split generated text on newlines, trimming each line and dropping blanks
pub fn raw_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
