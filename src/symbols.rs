//! The International Morse code symbol table (ITU-R M.1677)

/// The "dit" path symbol
pub const DOT: char = '.';

/// The "dah" path symbol
pub const DASH: char = '-';

/// The International Morse code mapping from ITU-R M.1677.
///
/// Each entry is a dot/dash path followed by the single character it
/// encodes: `".-A"` means the path `.` → `-` leads to `A`. A few payload
/// characters are non-ASCII punctuation (curly quote, en-dash); they are
/// opaque display labels, not normalized to ASCII. Note the full stop
/// entry `".-.-.-."`, whose payload is itself a dot.
pub const MORSE_TABLE: &[&str] = &[
    ".-A", "-...B", "-.-.C", "-..D", ".E", "..-.F", "--.G", "....H", "..I",
    ".---J", "-.-K", ".-..L", "--M", "-.N", "---O", ".--.P", "--.-Q", ".-.R",
    "...S", "-T", "..-U", "...-V", ".--W", "-..-X", "-.--Y", "--..Z",
    "-----0", ".----1", "..---2", "...--3", "....-4", ".....5", "-....6",
    "--...7", "---..8", "----.9", ".-.-.-.", "--..--,", "---...:", "..--..?",
    ".----.’", "-....-–", "-..-./", "-.--.(", "-.--.-)", ".-..-.\"", "-...-=",
    ".-.-.+", ".--.-.@",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_entries_are_path_plus_payload() {
        for entry in MORSE_TABLE {
            let chars: Vec<char> = entry.chars().collect();
            assert!(chars.len() >= 2, "entry {:?} has no path", entry);
            for ch in &chars[..chars.len() - 1] {
                assert!(
                    *ch == DOT || *ch == DASH,
                    "entry {:?} has a bad path symbol {:?}",
                    entry,
                    ch
                );
            }
        }
    }

    #[test]
    fn test_table_paths_are_distinct() {
        let mut paths: Vec<String> = MORSE_TABLE
            .iter()
            .map(|e| {
                let n = e.chars().count();
                e.chars().take(n - 1).collect()
            })
            .collect();
        let total = paths.len();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), total);
    }
}
