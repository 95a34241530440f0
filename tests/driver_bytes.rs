//! # Driver Byte-Stream Tests
//!
//! These tests drive an [`EscPrinter`] against a temp-file device and
//! assert the exact bytes that reach the wire. Expected sequences are
//! written out as literals (from the Epson ESC/P reference), not rebuilt
//! from the command builders, so an encoding regression cannot cancel
//! itself out.

use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;

use matriz::{CharacterSet, EscPrinter, MatrizError, PinClass};

/// The job setup sequence `initialize()` must emit, in order: reset,
/// 10 cpi, draft quality, BRASCII assigned to slot 1, slot 1 selected.
const SETUP: &[u8] = &[
    0x1B, 0x40, // ESC @  reset
    0x1B, 0x50, // ESC P  10 cpi
    0x1B, 0x78, 0x30, // ESC x 0  draft
    0x1B, 0x28, 0x74, 3, 0, 1, 25, 0, // ESC ( t  assign BRASCII to slot 1
    0x1B, 0x74, 1, // ESC t 1  select slot 1
];

fn temp_device(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("matriz-{}-{}.prn", name, std::process::id()))
}

/// Run `job` against a freshly initialized printer writing to a temp
/// file, and return everything it emitted after the setup sequence.
fn capture(
    name: &str,
    pins: PinClass,
    job: impl FnOnce(&mut EscPrinter) -> Result<(), MatrizError>,
) -> Vec<u8> {
    let path = temp_device(name);
    let mut printer = EscPrinter::new(path.display().to_string(), pins);

    assert!(printer.initialize(), "temp-file device should open");
    assert!(printer.is_initialized());

    job(&mut printer).expect("job should emit cleanly");
    printer.close();
    assert!(!printer.is_initialized());

    let bytes = fs::read(&path).expect("device file should exist");
    fs::remove_file(&path).ok();

    assert_eq!(&bytes[..SETUP.len()], SETUP, "setup sequence mismatch");
    bytes[SETUP.len()..].to_vec()
}

// ============================================================================
// INITIALIZATION
// ============================================================================

#[test]
fn initialize_writes_exactly_the_setup_sequence() {
    let emitted = capture("init", PinClass::Pin24, |_| Ok(()));
    assert_eq!(emitted, Vec::<u8>::new());
}

#[test]
fn initialize_on_unreachable_target_fails_without_writes() {
    let path = std::env::temp_dir()
        .join("matriz-no-such-dir")
        .join("printer.prn");
    let mut printer = EscPrinter::new(path.display().to_string(), PinClass::Pin24);

    assert!(!printer.initialize());
    assert!(!printer.is_initialized());
    assert!(!path.exists(), "no output may be created on failure");

    // Best-effort close must still be safe.
    printer.close();
}

// ============================================================================
// VERTICAL MOTION
// ============================================================================

#[test]
fn vertical_advance_one_cm_on_24_pin_is_a_single_command() {
    // 1.0 / 2.54 * 180 = 70.86 -> 70 units, under the 127 cap
    let emitted = capture("vert-1cm", PinClass::Pin24, |p| p.advance_vertical(1.0));
    assert_eq!(emitted, vec![0x1B, 0x4A, 70]);
}

#[test]
fn vertical_advance_three_cm_on_24_pin_splits_at_127() {
    // 3.0 / 2.54 * 180 = 212.6 -> 212 units = 127 + 85
    let emitted = capture("vert-3cm", PinClass::Pin24, |p| p.advance_vertical(3.0));
    assert_eq!(emitted, vec![0x1B, 0x4A, 127, 0x1B, 0x4A, 85]);
}

#[test]
fn vertical_advance_uses_216_units_on_9_pin() {
    // 1.0 / 2.54 * 216 = 85.04 -> 85 units
    let emitted = capture("vert-9pin", PinClass::Pin9, |p| p.advance_vertical(1.0));
    assert_eq!(emitted, vec![0x1B, 0x4A, 85]);
}

#[test]
fn vertical_advance_long_distance_sums_exactly() {
    // 10.0 / 2.54 * 180 = 708.66 -> 708 units = 5 * 127 + 73
    let emitted = capture("vert-10cm", PinClass::Pin24, |p| p.advance_vertical(10.0));

    let commands: Vec<&[u8]> = emitted.chunks(3).collect();
    assert_eq!(commands.len(), 6);
    for command in &commands[..5] {
        assert_eq!(*command, &[0x1B, 0x4A, 127]);
    }
    assert_eq!(commands[5], &[0x1B, 0x4A, 73]);

    let total: u32 = commands.iter().map(|c| u32::from(c[2])).sum();
    assert_eq!(total, 708);
}

// ============================================================================
// HORIZONTAL MOTION
// ============================================================================

#[test]
fn horizontal_advance_encodes_120_units_per_inch() {
    // 2.54 cm = 1 inch = 120 units
    let emitted = capture("horiz-1in", PinClass::Pin24, |p| p.advance_horizontal(2.54));
    assert_eq!(emitted, vec![0x1B, 0x5C, 120, 0]);
}

#[test]
fn horizontal_advance_crosses_the_256_boundary_little_endian() {
    // 100 cm = 39.37 inches -> 4724 units = 18 * 256 + 116
    let emitted = capture("horiz-1m", PinClass::Pin24, |p| p.advance_horizontal(100.0));
    assert_eq!(emitted, vec![0x1B, 0x5C, 116, 18]);
}

#[test]
fn absolute_position_encodes_60_units_per_inch() {
    // 5.08 cm = 2 inches = 120 units
    let emitted = capture("abs-2in", PinClass::Pin24, |p| {
        p.set_absolute_horizontal_position(5.08)
    });
    assert_eq!(emitted, vec![0x1B, 0x24, 120, 0]);
}

// ============================================================================
// CHARACTER TABLES
// ============================================================================

#[test]
fn character_set_assigns_then_selects_every_call() {
    let emitted = capture("charset", PinClass::Pin24, |p| {
        p.set_character_set(CharacterSet::Usa)?;
        p.set_character_set(CharacterSet::Usa)
    });

    let one_call = [
        0x1B, 0x28, 0x74, 3, 0, 1, 1, 0, // assign PC437 to slot 1
        0x1B, 0x74, 1, // select slot 1
    ];
    let expected: Vec<u8> = [one_call, one_call].concat();
    assert_eq!(emitted, expected);
}

// ============================================================================
// PAGINATION AND STYLE
// ============================================================================

#[test]
fn line_and_form_feed_lead_with_carriage_return() {
    let emitted = capture("feeds", PinClass::Pin24, |p| {
        p.line_feed()?;
        p.form_feed()
    });
    assert_eq!(emitted, vec![0x0D, 0x0A, 0x0D, 0x0C]);
}

#[test]
fn bold_toggles_between_esc_e_and_esc_f() {
    let emitted = capture("bold", PinClass::Pin24, |p| {
        p.bold(true)?;
        p.bold(false)
    });
    assert_eq!(emitted, vec![0x1B, 0x45, 0x1B, 0x46]);
}

#[test]
fn proportional_mode_sends_ascii_digit_flags() {
    let emitted = capture("prop", PinClass::Pin24, |p| {
        p.proportional_mode(true)?;
        p.proportional_mode(false)
    });
    assert_eq!(emitted, vec![0x1B, 0x70, 0x31, 0x1B, 0x70, 0x30]);
}

#[test]
fn pitch_and_quality_commands() {
    let emitted = capture("pitch", PinClass::Pin24, |p| {
        p.select_15_cpi()?;
        p.select_letter_quality()
    });
    assert_eq!(emitted, vec![0x1B, 0x67, 0x1B, 0x78, 0x31]);
}

#[test]
fn margins_emit_left_then_right() {
    let emitted = capture("margins", PinClass::Pin24, |p| p.set_margins(5, 75));
    assert_eq!(emitted, vec![0x1B, 0x6C, 5, 0x1B, 0x51, 75]);
}

#[test]
fn horizontal_tab_repeats_the_tab_byte() {
    let emitted = capture("tabs", PinClass::Pin24, |p| p.horizontal_tab(3));
    assert_eq!(emitted, vec![0x09, 0x09, 0x09]);
}

#[test]
fn print_passes_text_through_untranslated() {
    let emitted = capture("text", PinClass::Pin24, |p| p.print("Total: 1.234,56"));
    assert_eq!(emitted, b"Total: 1.234,56".to_vec());
}

// ============================================================================
// A FULL JOB
// ============================================================================

#[test]
fn a_small_job_end_to_end() {
    let emitted = capture("job", PinClass::Pin24, |p| {
        p.bold(true)?;
        p.print("PEDIDO #1047")?;
        p.bold(false)?;
        p.line_feed()?;
        p.advance_vertical(1.0)?;
        p.print("3x Cafe")?;
        p.horizontal_tab(1)?;
        p.print("12,00")?;
        p.form_feed()
    });

    let mut expected = Vec::new();
    expected.extend_from_slice(&[0x1B, 0x45]);
    expected.extend_from_slice(b"PEDIDO #1047");
    expected.extend_from_slice(&[0x1B, 0x46]);
    expected.extend_from_slice(&[0x0D, 0x0A]);
    expected.extend_from_slice(&[0x1B, 0x4A, 70]);
    expected.extend_from_slice(b"3x Cafe");
    expected.push(0x09);
    expected.extend_from_slice(b"12,00");
    expected.extend_from_slice(&[0x0D, 0x0C]);

    assert_eq!(emitted, expected);
}
