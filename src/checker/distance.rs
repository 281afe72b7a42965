/// Calculate the Levenshtein distance between two strings.
///
/// Insertions, deletions and substitutions each cost one. Strings are compared
/// by Unicode scalar value, so `"café"` and `"cafe"` are one edit apart.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut matrix = vec![vec![0; b_len + 1]; a_len + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for (i, a_char) in a_chars.iter().enumerate() {
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);

            matrix[i + 1][j + 1] = (matrix[i][j + 1] + 1) // deletion
                .min(matrix[i + 1][j] + 1) // insertion
                .min(matrix[i][j] + cost); // substitution
        }
    }

    matrix[a_len][b_len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("hello", "hello"), 0);
        assert_eq!(edit_distance("hello", "hallo"), 1);
        assert_eq!(edit_distance("hello", "world"), 4);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_medical_typos() {
        assert_eq!(edit_distance("pateint", "patient"), 2);
        assert_eq!(edit_distance("diabetis", "diabetes"), 1);
        assert_eq!(edit_distance("medicne", "medicine"), 1);
        assert_eq!(edit_distance("hospitl", "hospital"), 1);
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("", "lung"), 4);
        assert_eq!(edit_distance("brain", ""), 5);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(edit_distance("café", "cafe"), 1);
        assert_eq!(edit_distance("naïve", "naive"), 1);
        assert_eq!(edit_distance("日本", "日本語"), 1);
    }

    #[test]
    fn test_symmetry() {
        for (a, b) in [("therapy", "theraphy"), ("lung", "lunge"), ("", "x")] {
            assert_eq!(edit_distance(a, b), edit_distance(b, a));
        }
    }
}
