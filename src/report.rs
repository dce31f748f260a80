use std::fmt::Display;
use std::fmt::Formatter;

use crate::inspector::{CharacterRecord, NormalizationForms, PageDescription, TextSummary};

/// Soft misses are shown as blanks.
fn or_blank(value: Option<&str>) -> &str {
    value.unwrap_or("")
}

fn digit_or_blank(digit: Option<u8>) -> String {
    return match digit {
        Some(d) => d.to_string(),
        None => String::new(),
    };
}

impl Display for CharacterRecord {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{:<8} {:<6} {} [{}] [{}]",
            self.code_point_hex,
            self.character.escape_debug().to_string(),
            self.name,
            or_blank(self.category),
            or_blank(self.bidi_class),
        )?;
        if let Some(d) = self.digit {
            write!(f, " digit {d}")?;
        }
        if f.alternate() {
            writeln!(f)?;
            write!(f, "    integer {}, hex {}, width {}, upper {}, lower {}",
                self.code_point,
                self.hex,
                self.east_asian_width,
                self.upper.escape_debug(),
                self.lower.escape_debug(),
            )?;
            if !self.decomposition.is_empty() {
                write!(f, ", decomposes to {}", self.decomposition)?;
            }
            if !self.aliases.is_empty() {
                write!(f, ", aliases {}", self.aliases.join(", "))?;
            }
        }
        Ok(())
    }
}

impl Display for PageDescription {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.tagline)?;
        let rows = [
            ("Character", self.character.escape_debug().to_string()),
            ("Name", self.name.clone()),
            ("Category", or_blank(self.category).to_string()),
            ("Digit", digit_or_blank(self.digit)),
            ("Direction", or_blank(self.direction).to_string()),
            ("Integer", self.integer.to_string()),
            ("Uppercase", self.upper.clone()),
            ("Lowercase", self.lower.clone()),
            ("Decomposition", self.decomposition.clone()),
            ("Aliases", self.aliases.clone()),
            ("East Asian width", self.east_asian_width.clone()),
            ("Block", or_blank(self.block).to_string()),
        ];
        for (label, value) in rows {
            writeln!(f, "  {:<17} {}", format!("{label}:"), value)?;
        }
        Ok(())
    }
}

impl Display for NormalizationForms {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let mut first = true;
        for (form, normalized) in self.iter() {
            if !first {
                write!(f, "  ")?;
            }
            first = false;
            write!(f, "{form}: {}", if normalized {"yes"} else {"no"})?;
        }
        Ok(())
    }
}

impl Display for TextSummary {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        writeln!(f, "{} characters, {} graphemes", self.scalar_values, self.graphemes)?;
        write!(f, "{}", self.normalization)
    }
}
