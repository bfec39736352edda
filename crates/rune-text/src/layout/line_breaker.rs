use unicode_linebreak::linebreaks;

/// Byte offsets where a hard line may end a visual line.
///
/// Offsets come from UAX-14 and point just past the break, so whitespace
/// before an opportunity stays on the line before it. The line length is
/// always the last entry of a non-empty line. Mandatory breaks inside the
/// line (vertical tab, form feed, line separators) are treated like any
/// other opportunity; only `\n` splits hard lines.
pub fn break_offsets(line: &str) -> Vec<usize> {
    let mut offsets: Vec<usize> = linebreaks(line).map(|(offset, _)| offset).collect();
    if !line.is_empty() && offsets.last() != Some(&line.len()) {
        offsets.push(line.len());
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_runs_stay_before_the_break() {
        assert_eq!(break_offsets("Hello   world"), vec![8, 13]);
    }

    #[test]
    fn unbreakable_word_ends_at_line_end() {
        assert_eq!(break_offsets("supercalifragilistic"), vec![20]);
    }

    #[test]
    fn hyphens_allow_a_break() {
        assert_eq!(break_offsets("well-known"), vec![5, 10]);
    }

    #[test]
    fn empty_line_has_no_breaks() {
        assert!(break_offsets("").is_empty());
    }
}
