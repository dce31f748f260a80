use icu_properties::{maps, BidiClass, EastAsianWidth, GeneralCategory};
use itertools::Itertools;
use log::trace;
use unicode_normalization::{is_nfc, is_nfd, is_nfkc, is_nfkd};
use unicode_segmentation::UnicodeSegmentation;

use crate::aliases::AliasTable;
use crate::digits;
use crate::errors::InputError;
use crate::mappings;

/// Attributes of a single character, as listed for every character of a decoded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    pub character: char,
    /// Official name, first alias, or `"UNKNOWN"`. Never empty.
    pub name: String,
    pub category: Option<&'static str>,
    pub digit: Option<u8>,
    pub bidi_class: Option<&'static str>,
    /// The code point as an integer.
    pub code_point: u32,
    /// The code point as `U+XXXX`.
    pub code_point_hex: String,
    /// The code point as bare hex digits, `XXXX`.
    pub hex: String,
    pub east_asian_width: String,
    pub decomposition: String,
    pub aliases: Vec<String>,
    pub upper: String,
    pub lower: String,
}

/// Everything shown on the detail page of one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDescription {
    pub title: String,
    pub tagline: String,
    pub character: char,
    pub name: String,
    pub category: Option<&'static str>,
    pub digit: Option<u8>,
    pub direction: Option<&'static str>,
    pub integer: u32,
    pub upper: String,
    pub lower: String,
    pub decomposition: String,
    /// Aliases joined with `", "`.
    pub aliases: String,
    pub east_asian_width: String,
    pub block: Option<&'static str>,
}

/// Whether a text is already in each of the four Unicode normalization forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizationForms {
    pub nfc: bool,
    pub nfkc: bool,
    pub nfd: bool,
    pub nfkd: bool,
}

impl NormalizationForms {
    /// `(form name, is normalized)` pairs in the order NFC, NFKC, NFD, NFKD.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> {
        [("NFC", self.nfc), ("NFKC", self.nfkc), ("NFD", self.nfd), ("NFKD", self.nfkd)].into_iter()
    }
}

/// Counts and normalization state of a whole text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSummary {
    pub scalar_values: usize,
    pub graphemes: usize,
    pub normalization: NormalizationForms,
}

/// Unicode version of the `icu_properties` data that every attribute is read from. Names and
/// normalization data from other crates are held to this version.
pub const UNICODE_VERSION: (u8, u8, u8) = (15, 1, 0);

/// Formats the code point of `character` as at least four uppercase hex digits, with a `U+`
/// prefix if `prefix` is set.
pub fn code_point(character: char, prefix: bool) -> String {
    let value = character as u32;
    if prefix {
        return format!("U+{value:04X}");
    }
    return format!("{value:04X}");
}

/// The official Unicode name, if the character has one. Control characters, private use and
/// unassigned code points have none. The name table may come from a newer Unicode version than
/// the property data, so a character the property data does not know yet stays unnamed.
pub fn official_name(character: char) -> Option<String> {
    if maps::general_category().get(character) == GeneralCategory::Unassigned {
        return None;
    }
    unicode_names2::name(character).map(|name| name.to_string())
}

pub fn category(character: char) -> Option<&'static str> {
    let general_category = maps::general_category().get(character);
    let short_names = GeneralCategory::enum_to_short_name_mapper();
    let code = short_names.get(general_category)?;
    return mappings::label(mappings::CATEGORY, code);
}

/// Digit value (0-9), or `None` when the character is not a digit. Numbers like CIRCLED NUMBER
/// TEN have a numeric value but no digit value.
pub fn digit(character: char) -> Option<u8> {
    digits::digit_value(character)
}

/// Bidirectional class label.
pub fn direction(character: char) -> Option<&'static str> {
    let bidi_class = maps::bidi_class().get(character);
    let short_names = BidiClass::enum_to_short_name_mapper();
    let code = short_names.get(bidi_class)?;
    return mappings::label(mappings::BIDI, code);
}

/// East Asian width label. A width code without a label is returned as is; a width with no
/// short code in the property data gives an empty string.
pub fn east_asian_width(character: char) -> String {
    let width = maps::east_asian_width().get(character);
    let short_names = EastAsianWidth::enum_to_short_name_mapper();
    return match short_names.get(width) {
        Some(code) => width_label(code),
        None => String::new(),
    };
}

fn width_label(code: &str) -> String {
    return match mappings::label(mappings::EAST_ASIAN_WIDTH, code) {
        Some(label) => label.to_string(),
        None => code.to_string(),
    };
}

/// Full canonical decomposition as space separated hex code points, or an empty string if the
/// character decomposes to itself.
pub fn decomposition(character: char) -> String {
    let mut parts: Vec<char> = vec![];
    unicode_normalization::char::decompose_canonical(character, |c| parts.push(c));
    if parts == [character] {
        return String::new();
    }
    return parts.into_iter().map(|c| code_point(c, false)).join(" ");
}

/// Checks `text` against each normalization form independently.
pub fn normalization_forms(text: &str) -> NormalizationForms {
    NormalizationForms {
        nfc: is_nfc(text),
        nfkc: is_nfkc(text),
        nfd: is_nfd(text),
        nfkd: is_nfkd(text),
    }
}

pub fn summarize(text: &str) -> TextSummary {
    TextSummary {
        scalar_values: text.chars().count(),
        graphemes: text.graphemes(true).count(),
        normalization: normalization_forms(text),
    }
}

/// Accepts `input` only if it holds exactly one character.
pub fn single_char(input: &str) -> Result<char, InputError> {
    let mut chars = input.chars();
    return match (chars.next(), chars.next()) {
        (None, _) => Err(InputError::Empty),
        (Some(c), None) => Ok(c),
        (Some(_), Some(_)) => Err(InputError::NotSingleCharacter{count: input.chars().count()}),
    };
}

/// Looks up character attributes, falling back to a name alias table for characters without an
/// official name.
#[derive(Debug, Clone, Copy)]
pub struct Inspector<'a> {
    aliases: &'a AliasTable,
}

impl<'a> Inspector<'a> {
    pub fn new(aliases: &'a AliasTable) -> Self {
        return Self{aliases};
    }

    /// The official name, else the first alias, else `"UNKNOWN"`.
    pub fn name(&self, character: char) -> String {
        return match official_name(character) {
            Some(name) => name,
            None => {
                trace!("No official name for {}, trying aliases", code_point(character, true));
                self.aliases.first_alias(character)
            }
        };
    }

    pub fn record(&self, character: char) -> CharacterRecord {
        CharacterRecord {
            character,
            name: self.name(character),
            category: category(character),
            digit: digit(character),
            bidi_class: direction(character),
            code_point: character as u32,
            code_point_hex: code_point(character, true),
            hex: code_point(character, false),
            east_asian_width: east_asian_width(character),
            decomposition: decomposition(character),
            aliases: self.aliases.aliases_for(character),
            upper: character.to_uppercase().to_string(),
            lower: character.to_lowercase().to_string(),
        }
    }

    /// One record per Unicode scalar value of `text`, in order.
    pub fn inspect<'t>(&'t self, text: &'t str) -> impl Iterator<Item = CharacterRecord> + 't
    where
        'a: 't,
    {
        text.chars().map(move |c| self.record(c))
    }

    pub fn page_description(&self, character: char) -> PageDescription {
        let name = self.name(character);
        PageDescription {
            title: name.clone(),
            tagline: code_point(character, true),
            character,
            name,
            category: category(character),
            digit: digit(character),
            direction: direction(character),
            integer: character as u32,
            upper: character.to_uppercase().to_string(),
            lower: character.to_lowercase().to_string(),
            decomposition: decomposition(character),
            aliases: self.aliases.formatted_aliases(character),
            east_asian_width: east_asian_width(character),
            block: unicode_blocks::find_unicode_block(character).map(|block| block.name()),
        }
    }
}
