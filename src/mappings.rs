//! Human-readable labels for the short property value codes used in the Unicode Character
//! Database (`Lu`, `AL`, `Na`, ...).

/// General_Category short codes.
pub const CATEGORY: &[(&str, &str)] = &[
    ("Lu", "UPPERCASE LETTER"),
    ("Ll", "LOWERCASE LETTER"),
    ("Lt", "TITLECASE LETTER"),
    ("Lm", "MODIFIER LETTER"),
    ("Lo", "OTHER LETTER"),
    ("Mn", "NONSPACING MARK"),
    ("Mc", "SPACING MARK"),
    ("Me", "ENCLOSING MARK"),
    ("Nd", "DECIMAL NUMBER"),
    ("Nl", "LETTER NUMBER"),
    ("No", "OTHER NUMBER"),
    ("Pc", "CONNECTOR PUNCTUATION"),
    ("Pd", "DASH PUNCTUATION"),
    ("Ps", "OPEN PUNCTUATION"),
    ("Pe", "CLOSE PUNCTUATION"),
    ("Pi", "INITIAL PUNCTUATION"),
    ("Pf", "FINAL PUNCTUATION"),
    ("Po", "OTHER PUNCTUATION"),
    ("Sm", "MATH SYMBOL"),
    ("Sc", "CURRENCY SYMBOL"),
    ("Sk", "MODIFIER SYMBOL"),
    ("So", "OTHER SYMBOL"),
    ("Zs", "SPACE SEPARATOR"),
    ("Zl", "LINE SEPARATOR"),
    ("Zp", "PARAGRAPH SEPARATOR"),
    ("Cc", "CONTROL"),
    ("Cf", "FORMAT"),
    ("Cs", "SURROGATE"),
    ("Co", "PRIVATE USE"),
    ("Cn", "UNASSIGNED"),
];

/// Bidi_Class short codes.
pub const BIDI: &[(&str, &str)] = &[
    ("L", "LEFT-TO-RIGHT"),
    ("R", "RIGHT-TO-LEFT"),
    ("AL", "RIGHT-TO-LEFT ARABIC"),
    ("EN", "EUROPEAN NUMBER"),
    ("ES", "EUROPEAN NUMBER SEPARATOR"),
    ("ET", "EUROPEAN NUMBER TERMINATOR"),
    ("AN", "ARABIC NUMBER"),
    ("CS", "COMMON NUMBER SEPARATOR"),
    ("NSM", "NONSPACING MARK"),
    ("BN", "BOUNDARY NEUTRAL"),
    ("B", "PARAGRAPH SEPARATOR"),
    ("S", "SEGMENT SEPARATOR"),
    ("WS", "WHITESPACE"),
    ("ON", "OTHER NEUTRALS"),
    ("LRE", "LEFT-TO-RIGHT EMBEDDING"),
    ("LRO", "LEFT-TO-RIGHT OVERRIDE"),
    ("RLE", "RIGHT-TO-LEFT EMBEDDING"),
    ("RLO", "RIGHT-TO-LEFT OVERRIDE"),
    ("PDF", "POP DIRECTIONAL FORMAT"),
    ("LRI", "LEFT-TO-RIGHT ISOLATE"),
    ("RLI", "RIGHT-TO-LEFT ISOLATE"),
    ("FSI", "FIRST STRONG ISOLATE"),
    ("PDI", "POP DIRECTIONAL ISOLATE"),
];

/// East_Asian_Width short codes.
pub const EAST_ASIAN_WIDTH: &[(&str, &str)] = &[
    ("F", "East Asian Fullwidth"),
    ("H", "East Asian Halfwidth"),
    ("W", "East Asian Wide"),
    ("Na", "East Asian Narrow"),
    ("A", "East Asian Ambiguous"),
    ("N", "Neutral"),
];

/// Finds the label for `code` in one of the tables above. Codes are matched exactly, so `"lu"`
/// does not find `"Lu"`.
pub fn label(table: &'static [(&'static str, &'static str)], code: &str) -> Option<&'static str> {
    table.iter()
        .find(|(short, _)| *short == code)
        .map(|(_, long)| *long)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(label(CATEGORY, "Lu"), Some("UPPERCASE LETTER"));
        assert_eq!(label(BIDI, "AL"), Some("RIGHT-TO-LEFT ARABIC"));
        assert_eq!(label(EAST_ASIAN_WIDTH, "F"), Some("East Asian Fullwidth"));
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(label(CATEGORY, "Xx"), None);
        assert_eq!(label(BIDI, ""), None);
        assert_eq!(label(EAST_ASIAN_WIDTH, "na"), None);
    }

    #[test]
    fn test_codes_are_unique() {
        for table in [CATEGORY, BIDI, EAST_ASIAN_WIDTH] {
            for (i, (code, _)) in table.iter().enumerate() {
                assert!(table[i + 1..].iter().all(|(other, _)| other != code), "duplicate code {code}");
            }
        }
    }
}
