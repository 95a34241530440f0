//! # ESC/P Command Builders
//!
//! This module implements the ESC/P and ESC/P2 command protocol used by
//! Epson dot-matrix printers (LX-300, LQ-570, LQ-2170, etc.).
//!
//! ## Protocol Overview
//!
//! ESC/P commands are byte sequences starting with the ESC prefix. The
//! subset implemented here covers:
//!
//! - **Pitch**: 10 and 15 characters per inch
//! - **Quality**: draft vs letter-quality (LQ) printing
//! - **Style**: emphasized (bold) and proportional spacing
//! - **Character tables**: assignment and selection of registered tables
//! - **Positioning**: vertical paper feed, relative and absolute
//!   horizontal motion, margins, tabs
//! - **Pagination**: line feed and form feed
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `CR`, `LF`, `FF`, `HT`
//! - Two bytes: `ESC @`, `ESC P`, `ESC E`
//! - Multi-byte with parameters: `ESC J n`, `ESC $ nL nH`,
//!   `ESC ( t 3 0 d1 d2 d3`
//!
//! ## Byte Order
//!
//! Multi-byte operands use **little-endian** encoding: a `u16` value is
//! sent as `[low, high]` where `value = high * 256 + low`.
//!
//! ## Reference
//!
//! Based on the "Epson ESC/P Reference Manual" (ESC/P2 and 9-pin ESC/P).

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Every ESC/P control sequence begins with ESC (0x1B). This byte signals
/// the start of a command rather than printable text.
pub const ESC: u8 = 0x1B;

/// CR (Carriage Return) - Return print head to the left margin
///
/// The Epson reference manual recommends sending CR before LF and FF so the
/// horizontal position is reset before the paper moves.
pub const CR: u8 = 0x0D;

/// LF (Line Feed) - Advance paper one line
pub const LF: u8 = 0x0A;

/// FF (Form Feed) - Eject the current sheet / advance to the next page
pub const FF: u8 = 0x0C;

/// HT (Horizontal Tab) - Advance to the next tab position
pub const HT: u8 = 0x09;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state. Sent at the start of
/// each print job to ensure consistent behavior.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## What Gets Reset
///
/// - Print buffer is cleared
/// - Pitch, quality, and style selections return to panel defaults
/// - Margins and tab positions are cleared
/// - The active character table reverts to the default slot
///
/// ## Example
///
/// ```
/// use matriz::protocol::commands;
///
/// let init = commands::init();
/// assert_eq!(init, vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// CHARACTER PITCH
// ============================================================================

/// # Select 10.5-point, 10-cpi Characters (ESC P)
///
/// Selects 10 characters-per-inch pitch. Condensed mode remains available
/// at this pitch.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC P |
/// | Hex     | 1B 50 |
/// | Decimal | 27 80 |
#[inline]
pub fn pitch_10cpi() -> Vec<u8> {
    vec![ESC, b'P']
}

/// # Select 10.5-point, 15-cpi Characters (ESC g)
///
/// Selects 15 characters-per-inch pitch. Condensed mode is not available
/// at this pitch.
///
/// ## Protocol Details
///
/// | Format  | Bytes  |
/// |---------|--------|
/// | ASCII   | ESC g  |
/// | Hex     | 1B 67  |
/// | Decimal | 27 103 |
#[inline]
pub fn pitch_15cpi() -> Vec<u8> {
    vec![ESC, b'g']
}

// ============================================================================
// PRINT QUALITY
// ============================================================================

/// Print quality selector for `ESC x`
///
/// The operand is the ASCII digit, not the raw value: `'0'` (0x30) selects
/// draft, `'1'` (0x31) selects letter quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintQuality {
    /// Draft: fast, lower dot density
    #[default]
    Draft = 0x30,
    /// Letter quality: slower, full dot density
    Letter = 0x31,
}

/// # Select Print Quality (ESC x n)
///
/// Switches between draft and letter-quality (LQ) printing.
///
/// ## Protocol Details
///
/// | Format  | Bytes        |
/// |---------|--------------|
/// | ASCII   | ESC x n      |
/// | Hex     | 1B 78 30\|31 |
/// | Decimal | 27 120 48\|49 |
///
/// ## Example
///
/// ```
/// use matriz::protocol::commands::{self, PrintQuality};
///
/// assert_eq!(commands::quality(PrintQuality::Draft), vec![0x1B, 0x78, 0x30]);
/// assert_eq!(commands::quality(PrintQuality::Letter), vec![0x1B, 0x78, 0x31]);
/// ```
#[inline]
pub fn quality(q: PrintQuality) -> Vec<u8> {
    vec![ESC, b'x', q as u8]
}

// ============================================================================
// TEXT STYLE
// ============================================================================

/// # Select Emphasized Printing (ESC E)
///
/// Enables bold text. Each dot is printed twice, slightly offset.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC E |
/// | Hex     | 1B 45 |
/// | Decimal | 27 69 |
#[inline]
pub fn bold_on() -> Vec<u8> {
    vec![ESC, b'E']
}

/// # Cancel Emphasized Printing (ESC F)
///
/// Disables bold text.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC F |
/// | Hex     | 1B 46 |
/// | Decimal | 27 70 |
#[inline]
pub fn bold_off() -> Vec<u8> {
    vec![ESC, b'F']
}

/// # Turn Proportional Mode On/Off (ESC p n)
///
/// Selects proportional character spacing (`'1'`) or fixed-pitch spacing
/// (`'0'`). As with [`quality`], the operand is the ASCII digit.
///
/// ## Protocol Details
///
/// | Format  | Bytes         |
/// |---------|---------------|
/// | ASCII   | ESC p n       |
/// | Hex     | 1B 70 31\|30  |
/// | Decimal | 27 112 49\|48 |
///
/// ## Example
///
/// ```
/// use matriz::protocol::commands;
///
/// assert_eq!(commands::proportional(true), vec![0x1B, 0x70, b'1']);
/// assert_eq!(commands::proportional(false), vec![0x1B, 0x70, b'0']);
/// ```
#[inline]
pub fn proportional(enabled: bool) -> Vec<u8> {
    vec![ESC, b'p', if enabled { b'1' } else { b'0' }]
}

// ============================================================================
// CHARACTER TABLES
// ============================================================================

/// # Assign Character Table (ESC ( t 3 0 d1 d2 d3)
///
/// Assigns a registered character table to one of the selectable table
/// slots. The table only becomes active once the slot is selected with
/// [`select_char_table`]; the printer expects the assignment first.
///
/// ## Protocol Details
///
/// | Format  | Bytes                      |
/// |---------|----------------------------|
/// | ASCII   | ESC ( t 3 0 d1 d2 d3       |
/// | Hex     | 1B 28 74 03 00 d1 d2 d3    |
/// | Decimal | 27 40 116 3 0 d1 d2 d3     |
///
/// ## Parameters
///
/// - `slot` (d1): selectable table slot to load (0-3)
/// - `code` (d2): registered character table to assign (see
///   [`CharacterSet`](crate::protocol::charset::CharacterSet))
/// - d3 is always 0 for registered tables
///
/// The two length bytes (3, 0) are the little-endian operand count and are
/// fixed for this form of the command.
///
/// ## Example
///
/// ```
/// use matriz::protocol::commands;
///
/// // Assign BRASCII (25) to slot 1
/// let cmd = commands::assign_char_table(1, 25);
/// assert_eq!(cmd, vec![0x1B, 0x28, 0x74, 3, 0, 1, 25, 0]);
/// ```
#[inline]
pub fn assign_char_table(slot: u8, code: u8) -> Vec<u8> {
    vec![ESC, b'(', b't', 3, 0, slot, code, 0]
}

/// # Select Character Table (ESC t n)
///
/// Activates one of the selectable table slots previously loaded with
/// [`assign_char_table`].
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC t n  |
/// | Hex     | 1B 74 n  |
/// | Decimal | 27 116 n |
#[inline]
pub fn select_char_table(slot: u8) -> Vec<u8> {
    vec![ESC, b't', slot]
}

// ============================================================================
// PAGINATION
// ============================================================================

/// # Line Feed (CR LF)
///
/// Prints the line buffer and advances the paper one line. CR is sent
/// first: the Epson reference manual requires the carriage return so the
/// horizontal position is reset before the feed.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | CR LF |
/// | Hex     | 0D 0A |
/// | Decimal | 13 10 |
#[inline]
pub fn line_feed() -> Vec<u8> {
    vec![CR, LF]
}

/// # Form Feed (CR FF)
///
/// Ejects the current single sheet (or advances continuous paper to the
/// next top-of-form). CR precedes FF for the same reason as [`line_feed`].
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | CR FF |
/// | Hex     | 0D 0C |
/// | Decimal | 13 12 |
#[inline]
pub fn form_feed() -> Vec<u8> {
    vec![CR, FF]
}

/// # Horizontal Tab (HT)
///
/// Moves the print position to the next tab stop.
#[inline]
pub fn tab() -> Vec<u8> {
    vec![HT]
}

// ============================================================================
// PAPER MOTION
// ============================================================================

/// # Advance Print Position Vertically (ESC J n)
///
/// Feeds the paper forward by `n` motion units without a carriage return.
/// One unit is 1/216 inch on 9-pin printers and 1/180 inch on 24-pin
/// ESC/P2 printers.
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC J n |
/// | Hex     | 1B 4A n |
/// | Decimal | 27 74 n |
///
/// ## Parameters
///
/// - `n`: feed amount in motion units. The protocol documents 0-255, but
///   values near 255 misbehave on real hardware; the driver layer caps the
///   operand at 127 and splits longer motions into several commands (see
///   [`MAX_FEED_UNITS`](crate::printer::config::MAX_FEED_UNITS)).
///
/// ## Example
///
/// ```
/// use matriz::protocol::commands;
///
/// assert_eq!(commands::feed_units(70), vec![0x1B, 0x4A, 70]);
/// ```
#[inline]
pub fn feed_units(n: u8) -> Vec<u8> {
    vec![ESC, b'J', n]
}

/// # Set Relative Horizontal Print Position (ESC \ nL nH)
///
/// Moves the print position right of its current position by
/// `units`/120 inch. Unlike vertical motion this command natively takes a
/// two-byte operand, so no splitting is needed.
///
/// ## Protocol Details
///
/// | Format  | Bytes          |
/// |---------|----------------|
/// | ASCII   | ESC \ nL nH    |
/// | Hex     | 1B 5C nL nH    |
/// | Decimal | 27 92 nL nH    |
///
/// ## Example
///
/// ```
/// use matriz::protocol::commands;
///
/// // One inch: 120 units
/// assert_eq!(commands::relative_advance(120), vec![0x1B, 0x5C, 120, 0]);
/// ```
#[inline]
pub fn relative_advance(units: u16) -> Vec<u8> {
    let [low, high] = u16_le(units);
    vec![ESC, b'\\', low, high]
}

/// # Set Absolute Horizontal Print Position (ESC $ nL nH)
///
/// Moves the print position to `units`/60 inch from the left margin.
///
/// ## Protocol Details
///
/// | Format  | Bytes       |
/// |---------|-------------|
/// | ASCII   | ESC $ nL nH |
/// | Hex     | 1B 24 nL nH |
/// | Decimal | 27 36 nL nH |
///
/// ## Example
///
/// ```
/// use matriz::protocol::commands;
///
/// // Two inches from the left margin: 120 units
/// assert_eq!(commands::absolute_position(120), vec![0x1B, 0x24, 120, 0]);
/// ```
#[inline]
pub fn absolute_position(units: u16) -> Vec<u8> {
    let [low, high] = u16_le(units);
    vec![ESC, b'$', low, high]
}

// ============================================================================
// MARGINS
// ============================================================================

/// # Set Left Margin (ESC l n)
///
/// Sets the left margin to column `n` in the current character pitch.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC l n  |
/// | Hex     | 1B 6C n  |
/// | Decimal | 27 108 n |
#[inline]
pub fn left_margin(columns: u8) -> Vec<u8> {
    vec![ESC, b'l', columns]
}

/// # Set Right Margin (ESC Q n)
///
/// Sets the right margin to column `n` in the current character pitch.
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC Q n |
/// | Hex     | 1B 51 n |
/// | Decimal | 27 81 n |
#[inline]
pub fn right_margin(columns: u8) -> Vec<u8> {
    vec![ESC, b'Q', columns]
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ESC/P uses little-endian encoding for all two-byte operands.
///
/// ## Example
///
/// ```
/// use matriz::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(300), [44, 1]); // 300 = 1*256 + 44
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        assert_eq!(init(), vec![0x1B, 0x40]);
    }

    #[test]
    fn test_pitch() {
        assert_eq!(pitch_10cpi(), vec![0x1B, 0x50]);
        assert_eq!(pitch_15cpi(), vec![0x1B, 0x67]);
    }

    #[test]
    fn test_quality_uses_ascii_digits() {
        assert_eq!(quality(PrintQuality::Draft), vec![0x1B, 0x78, 0x30]);
        assert_eq!(quality(PrintQuality::Letter), vec![0x1B, 0x78, 0x31]);
    }

    #[test]
    fn test_bold() {
        assert_eq!(bold_on(), vec![0x1B, 0x45]);
        assert_eq!(bold_off(), vec![0x1B, 0x46]);
    }

    #[test]
    fn test_proportional_uses_ascii_digits() {
        assert_eq!(proportional(true), vec![0x1B, 0x70, 0x31]);
        assert_eq!(proportional(false), vec![0x1B, 0x70, 0x30]);
    }

    #[test]
    fn test_assign_char_table() {
        // BRASCII into slot 1
        assert_eq!(
            assign_char_table(1, 25),
            vec![0x1B, 0x28, 0x74, 3, 0, 1, 25, 0]
        );
        // PC437 into slot 0
        assert_eq!(
            assign_char_table(0, 1),
            vec![0x1B, 0x28, 0x74, 3, 0, 0, 1, 0]
        );
    }

    #[test]
    fn test_select_char_table() {
        assert_eq!(select_char_table(1), vec![0x1B, 0x74, 1]);
    }

    #[test]
    fn test_line_feed_leads_with_cr() {
        assert_eq!(line_feed(), vec![0x0D, 0x0A]);
    }

    #[test]
    fn test_form_feed_leads_with_cr() {
        assert_eq!(form_feed(), vec![0x0D, 0x0C]);
    }

    #[test]
    fn test_tab() {
        assert_eq!(tab(), vec![0x09]);
    }

    #[test]
    fn test_feed_units() {
        assert_eq!(feed_units(0), vec![0x1B, 0x4A, 0]);
        assert_eq!(feed_units(70), vec![0x1B, 0x4A, 70]);
        assert_eq!(feed_units(127), vec![0x1B, 0x4A, 127]);
    }

    #[test]
    fn test_relative_advance() {
        assert_eq!(relative_advance(120), vec![0x1B, 0x5C, 120, 0]);
        // 300 units crosses the 256 boundary
        assert_eq!(relative_advance(300), vec![0x1B, 0x5C, 44, 1]);
    }

    #[test]
    fn test_absolute_position() {
        assert_eq!(absolute_position(120), vec![0x1B, 0x24, 120, 0]);
        assert_eq!(absolute_position(0), vec![0x1B, 0x24, 0, 0]);
    }

    #[test]
    fn test_margins() {
        assert_eq!(left_margin(10), vec![0x1B, 0x6C, 10]);
        assert_eq!(right_margin(75), vec![0x1B, 0x51, 75]);
    }

    #[test]
    fn test_u16_le() {
        assert_eq!(u16_le(0x0000), [0x00, 0x00]);
        assert_eq!(u16_le(0x00FF), [0xFF, 0x00]);
        assert_eq!(u16_le(0xFF00), [0x00, 0xFF]);
        assert_eq!(u16_le(0x1234), [0x34, 0x12]);
        // value recoverable as high * 256 + low
        let [low, high] = u16_le(4724);
        assert_eq!(high as u16 * 256 + low as u16, 4724);
    }
}
