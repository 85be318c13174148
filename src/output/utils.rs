//! Shared formatting helpers

/// Leading whitespace for an entry at `depth`.
///
/// Depends only on the depth and the unit width, never on siblings or
/// contents.
pub fn indent_for(depth: usize, width: usize) -> String {
    " ".repeat(depth * width)
}

/// Format a directory line (without terminator).
pub fn dir_line(name: &str, depth: usize, width: usize) -> String {
    format!("{}{}/", indent_for(depth, width), name)
}

/// Format a file line (without terminator).
pub fn file_line(name: &str, depth: usize, width: usize) -> String {
    format!("{}{}", indent_for(depth, width), name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_is_width_times_depth() {
        for depth in 0..8 {
            assert_eq!(indent_for(depth, 4).len(), depth * 4);
            assert!(indent_for(depth, 4).chars().all(|c| c == ' '));
        }
        assert_eq!(indent_for(3, 2), "      ");
    }

    #[test]
    fn test_dir_and_file_lines() {
        assert_eq!(dir_line("root", 0, 4), "root/");
        assert_eq!(dir_line("sub", 1, 4), "    sub/");
        assert_eq!(file_line("c.txt", 2, 4), "        c.txt");
    }

    #[test]
    fn test_names_are_written_verbatim() {
        assert_eq!(file_line("with space.txt", 1, 4), "    with space.txt");
        assert_eq!(dir_line("日本語", 1, 4), "    日本語/");
    }
}
