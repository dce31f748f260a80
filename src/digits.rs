use icu_properties::maps;
use icu_properties::GeneralCategory;

/// Characters with Numeric_Type=Digit: digit-valued, but not decimal digits usable in a
/// positional number (superscripts, circled digits, ...). Each entry is an inclusive range and
/// the value of its first character; values rise by one along the range. Matches the
/// UnicodeData.txt digit field of Unicode 15.1, the version of the `icu_properties` data.
pub const DIGIT_RANGES: &[(char, char, u8)] = &[
    ('\u{b2}', '\u{b3}', 2),        // SUPERSCRIPT TWO..SUPERSCRIPT THREE
    ('\u{b9}', '\u{b9}', 1),        // SUPERSCRIPT ONE
    ('\u{1369}', '\u{1371}', 1),    // ETHIOPIC DIGIT ONE..ETHIOPIC DIGIT NINE
    ('\u{19da}', '\u{19da}', 1),    // NEW TAI LUE THAM DIGIT ONE
    ('\u{2070}', '\u{2070}', 0),    // SUPERSCRIPT ZERO
    ('\u{2074}', '\u{2079}', 4),    // SUPERSCRIPT FOUR..SUPERSCRIPT NINE
    ('\u{2080}', '\u{2089}', 0),    // SUBSCRIPT ZERO..SUBSCRIPT NINE
    ('\u{2460}', '\u{2468}', 1),    // CIRCLED DIGIT ONE..CIRCLED DIGIT NINE
    ('\u{2474}', '\u{247c}', 1),    // PARENTHESIZED DIGIT ONE..PARENTHESIZED DIGIT NINE
    ('\u{2488}', '\u{2490}', 1),    // DIGIT ONE FULL STOP..DIGIT NINE FULL STOP
    ('\u{24ea}', '\u{24ea}', 0),    // CIRCLED DIGIT ZERO
    ('\u{24f5}', '\u{24fd}', 1),    // DOUBLE CIRCLED DIGIT ONE..DOUBLE CIRCLED DIGIT NINE
    ('\u{24ff}', '\u{24ff}', 0),    // NEGATIVE CIRCLED DIGIT ZERO
    ('\u{2776}', '\u{277e}', 1),    // DINGBAT NEGATIVE CIRCLED DIGIT ONE..NINE
    ('\u{2780}', '\u{2788}', 1),    // DINGBAT CIRCLED SANS-SERIF DIGIT ONE..NINE
    ('\u{278a}', '\u{2792}', 1),    // DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT ONE..NINE
    ('\u{10a40}', '\u{10a43}', 1),  // KHAROSHTHI DIGIT ONE..KHAROSHTHI DIGIT FOUR
    ('\u{10e60}', '\u{10e68}', 1),  // RUMI DIGIT ONE..RUMI DIGIT NINE
    ('\u{11052}', '\u{1105a}', 1),  // BRAHMI NUMBER ONE..BRAHMI NUMBER NINE
    ('\u{1f100}', '\u{1f100}', 0),  // DIGIT ZERO FULL STOP
    ('\u{1f101}', '\u{1f10a}', 0),  // DIGIT ZERO COMMA..DIGIT NINE COMMA
];

/// Returns the digit value of `character` if it is a decimal digit (General_Category Nd) or one
/// of the digit-valued characters in [`DIGIT_RANGES`].
pub fn digit_value(character: char) -> Option<u8> {
    decimal_value(character).or_else(|| table_value(character))
}

/// Decimal digits are encoded in contiguous, ascending runs of ten starting at zero, and some
/// runs sit back to back (the mathematical digits at U+1D7CE..U+1D7FF). Walking back to the start
/// of the Nd stretch and counting modulo ten therefore finds the value without a table.
fn decimal_value(character: char) -> Option<u8> {
    let is_decimal = |value: u32| maps::general_category().get32(value) == GeneralCategory::DecimalNumber;
    let value = character as u32;
    if !is_decimal(value) {
        return None;
    }
    let mut start = value;
    while start > 0 && is_decimal(start - 1) {
        start -= 1;
    }
    return Some(((value - start) % 10) as u8);
}

fn table_value(character: char) -> Option<u8> {
    DIGIT_RANGES.iter()
        .find(|(first, last, _)| (*first..=*last).contains(&character))
        .map(|(first, _, start_value)| start_value + (character as u32 - *first as u32) as u8)
}
