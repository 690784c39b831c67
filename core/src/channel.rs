//! Channel selections.
//!
//! Two grammars are accepted for a channel mask. A full mnemonic list such
//! as `"Red,Green"` or `"All,!Alpha"` goes through [`ListParser`]. A compact
//! run of single letters such as `"rgb"` or `"cmyk"` sets one bit per
//! letter; a comma inside the run hands the rest of the input back to the
//! list parser.
//!
//! Pixel channels are a different thing: an index into a pixel's channel
//! layout rather than a mask, resolved by [`parse_pixel_channel`].

use crate::error::ResolveError;
use crate::parse::{ListParser, is_space};
use crate::table::MnemonicTable;

/// Channel mask bits.
pub mod bits {
    pub const UNDEFINED: i64 = 0x0;
    pub const RED: i64 = 0x1;
    pub const GRAY: i64 = 0x1;
    pub const CYAN: i64 = 0x1;
    pub const GREEN: i64 = 0x2;
    pub const MAGENTA: i64 = 0x2;
    pub const BLUE: i64 = 0x4;
    pub const YELLOW: i64 = 0x4;
    pub const BLACK: i64 = 0x8;
    pub const ALPHA: i64 = 0x10;
    /// Red, green, blue, black and alpha.
    pub const COMPOSITE: i64 = 0x1f;
    pub const SYNC: i64 = 0x20000;
    pub const DEFAULT: i64 = 0x7ffffff;
}

/// Number of addressable pixel channels; numeric pixel channels must be
/// below this.
pub const MAX_PIXEL_CHANNELS: i64 = 32;

/// Pixel channel returned for a bare `;` or `|` separator.
pub const RED_PIXEL_CHANNEL: i64 = 0;

/// Parses a channel mask against the channel table.
///
/// # Errors
///
/// Returns [`ResolveError::UnknownMnemonic`] for a letter outside
/// `ABCGKMORY` (either case) or when the part after a comma fails to parse.
///
/// # Examples
///
/// ```
/// use magick_options_core::{Registry, channel::bits};
///
/// let registry = Registry::builtin();
/// assert_eq!(registry.parse_channels("rgb").unwrap(), bits::RED | bits::GREEN | bits::BLUE);
/// assert_eq!(registry.parse_channels("r,Alpha").unwrap(), bits::RED | bits::ALPHA);
/// assert!(registry.parse_channels("rgbx").is_err());
/// ```
pub fn parse_channel_spec(table: &MnemonicTable, input: &str) -> Result<i64, ResolveError> {
    if let Ok(parsed) = ListParser::new(table).parse(input) {
        return Ok(parsed.value);
    }

    let mut channel = bits::UNDEFINED;
    for (index, c) in input.char_indices() {
        channel |= match c.to_ascii_lowercase() {
            'a' | 'o' => bits::ALPHA,
            'b' => bits::BLUE,
            'c' => bits::CYAN,
            'g' => bits::GREEN,
            'k' => bits::BLACK,
            'm' => bits::MAGENTA,
            'r' => bits::RED,
            'y' => bits::YELLOW,
            ',' => {
                let rest = ListParser::new(table).parse(&input[index + 1..])?;
                return Ok(channel | rest.value);
            }
            _ => return Err(ResolveError::unknown(table.category(), input)),
        };
    }
    Ok(channel)
}

/// Parses the first token of `input` as a pixel channel.
///
/// The token is a pixel-channel mnemonic or a channel number below
/// [`MAX_PIXEL_CHANNELS`]. Only the token's leading number counts, and a
/// fraction is dropped, so `"7.5"` and `"7px"` both select channel 7. A bare `;` or `|` selects
/// [`RED_PIXEL_CHANNEL`].
///
/// ```
/// use magick_options_core::Registry;
///
/// let registry = Registry::builtin();
/// assert_eq!(registry.parse_pixel_channel("Alpha").unwrap(), 4);
/// assert_eq!(registry.parse_pixel_channel(" 7,blue").unwrap(), 7);
/// assert!(registry.parse_pixel_channel("32").is_err());
/// ```
pub fn parse_pixel_channel(table: &MnemonicTable, input: &str) -> Result<i64, ResolveError> {
    let trimmed = input.trim_start_matches(|c: char| c.is_ascii() && is_space(c as u8));
    if trimmed.starts_with([';', '|']) {
        return Ok(RED_PIXEL_CHANNEL);
    }
    let end = trimmed
        .find(|c: char| (c.is_ascii() && is_space(c as u8)) || matches!(c, ',' | ';' | '|'))
        .unwrap_or(trimmed.len());
    let token = &trimmed[..end];

    if let Ok(parsed) = ListParser::new(table).multiple(false).parse(token) {
        return Ok(parsed.value);
    }
    match leading_number(token) {
        Some(number) if number > -1.0 && number < MAX_PIXEL_CHANNELS as f64 => Ok(number as i64),
        _ => Err(ResolveError::unknown(table.category(), token)),
    }
}

/// Reads the longest decimal number at the start of `token`, the way C
/// `strtod` does, ignoring whatever follows it.
///
/// Returns `None` when `token` does not start with a number.
fn leading_number(token: &str) -> Option<f64> {
    let bytes = token.as_bytes();
    let digits_from = |mut pos: usize| {
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        pos
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        has_digits |= frac_end > end + 1;
        end = frac_end;
    }
    if !has_digits {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    token[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, MnemonicEntry};

    static CHANNELS: &[MnemonicEntry] = &[
        MnemonicEntry::new("Undefined", bits::UNDEFINED).hidden(),
        MnemonicEntry::new("All", bits::COMPOSITE),
        MnemonicEntry::new("Alpha", bits::ALPHA),
        MnemonicEntry::new("Black", bits::BLACK),
        MnemonicEntry::new("Blue", bits::BLUE),
        MnemonicEntry::new("Green", bits::GREEN),
        MnemonicEntry::new("R", bits::RED),
        MnemonicEntry::new("Red", bits::RED),
    ];

    static PIXEL_CHANNELS: &[MnemonicEntry] = &[
        MnemonicEntry::new("Red", 0),
        MnemonicEntry::new("Green", 1),
        MnemonicEntry::new("Alpha", 4),
        MnemonicEntry::new("Composite", 32),
    ];

    fn channels() -> MnemonicTable {
        MnemonicTable::new(Category::Channel, CHANNELS)
    }

    fn pixel_channels() -> MnemonicTable {
        MnemonicTable::new(Category::PixelChannel, PIXEL_CHANNELS)
    }

    #[test]
    fn test_full_names_use_list_parser() {
        assert_eq!(parse_channel_spec(&channels(), "All,!Red"), Ok(0x1e));
        assert_eq!(parse_channel_spec(&channels(), "Green|Blue"), Ok(0x6));
    }

    #[test]
    fn test_letter_run() {
        assert_eq!(parse_channel_spec(&channels(), "rgb"), Ok(0x7));
        assert_eq!(parse_channel_spec(&channels(), "CMYK"), Ok(0xf));
    }

    #[test]
    fn test_o_is_alpha() {
        assert_eq!(parse_channel_spec(&channels(), "ro"), Ok(bits::RED | bits::ALPHA));
    }

    #[test]
    fn test_comma_switches_to_list_mode() {
        assert_eq!(parse_channel_spec(&channels(), "gb,Alpha"), Ok(0x16));
        // The continuation picks its own delimiter.
        assert_eq!(parse_channel_spec(&channels(), "g,Black|Red"), Ok(0xb));
    }

    #[test]
    fn test_continuation_failure_is_reported() {
        let err = parse_channel_spec(&channels(), "gb,Purple").unwrap_err();
        assert_eq!(err, ResolveError::unknown(Category::Channel, "Purple"));
    }

    #[test]
    fn test_unknown_letter_fails() {
        let err = parse_channel_spec(&channels(), "rgbz").unwrap_err();
        assert_eq!(err, ResolveError::unknown(Category::Channel, "rgbz"));
        assert!(parse_channel_spec(&channels(), "r-g").is_err());
    }

    #[test]
    fn test_empty_input_selects_nothing() {
        assert_eq!(parse_channel_spec(&channels(), ""), Ok(0));
    }

    #[test]
    fn test_pixel_channel_by_name_and_number() {
        let table = pixel_channels();
        assert_eq!(parse_pixel_channel(&table, "green"), Ok(1));
        assert_eq!(parse_pixel_channel(&table, "  Alpha extra"), Ok(4));
        assert_eq!(parse_pixel_channel(&table, "31"), Ok(31));
        assert_eq!(parse_pixel_channel(&table, "0"), Ok(0));
    }

    #[test]
    fn test_pixel_channel_bare_separator_is_red() {
        assert_eq!(parse_pixel_channel(&pixel_channels(), ";"), Ok(RED_PIXEL_CHANNEL));
        assert_eq!(parse_pixel_channel(&pixel_channels(), " |Green"), Ok(RED_PIXEL_CHANNEL));
    }

    #[test]
    fn test_pixel_channel_reads_leading_number() {
        let table = pixel_channels();
        assert_eq!(parse_pixel_channel(&table, "7.5"), Ok(7));
        assert_eq!(parse_pixel_channel(&table, "3abc"), Ok(3));
        assert_eq!(parse_pixel_channel(&table, "+2"), Ok(2));
        assert_eq!(parse_pixel_channel(&table, "1e1"), Ok(10));
        assert_eq!(parse_pixel_channel(&table, "31.9"), Ok(31));
        assert!(parse_pixel_channel(&table, "abc3").is_err());
        assert!(parse_pixel_channel(&table, ".").is_err());
        assert!(parse_pixel_channel(&table, "32.0").is_err());
    }

    #[test]
    fn test_leading_number_stops_at_first_non_numeric_byte() {
        assert_eq!(leading_number("12px"), Some(12.0));
        assert_eq!(leading_number("-.5"), Some(-0.5));
        assert_eq!(leading_number("4e"), Some(4.0));
        assert_eq!(leading_number("4e+x"), Some(4.0));
        assert_eq!(leading_number("-"), None);
        assert_eq!(leading_number(""), None);
    }

    #[test]
    fn test_pixel_channel_rejects_out_of_range() {
        let table = pixel_channels();
        assert!(parse_pixel_channel(&table, "32").is_err());
        assert!(parse_pixel_channel(&table, "-1").is_err());
        assert!(parse_pixel_channel(&table, "Purple").is_err());
        assert!(parse_pixel_channel(&table, "").is_err());
    }
}
