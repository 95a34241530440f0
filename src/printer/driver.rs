//! # ESC/P Printer Driver
//!
//! The [`EscPrinter`] owns a connection to one printer and encodes
//! high-level print intents into exact ESC/P byte sequences, written
//! straight to the device. It bypasses any OS print rendering path: on a
//! dot-matrix machine, raw escape codes are both faster and the only way
//! to reach pitch, quality, and character-table features.
//!
//! ## Lifecycle
//!
//! One printer instance drives one print job:
//!
//! 1. [`EscPrinter::new`] records the target and pin class, opens nothing.
//! 2. [`EscPrinter::initialize`] opens the device and sends the setup
//!    sequence (reset, 10 cpi, draft, default character table). Commands
//!    may be issued only after it returns `true`.
//! 3. [`EscPrinter::close`] flushes and releases the device. Best-effort:
//!    it never fails, and is safe to call even if `initialize` never
//!    succeeded. The instance is not reusable afterwards; start the next
//!    job with a fresh one.
//!
//! A single caller thread drives the instance; there is no internal
//! locking.
//!
//! ## Example
//!
//! ```no_run
//! use matriz::printer::{EscPrinter, PinClass};
//!
//! let mut printer = EscPrinter::new("/dev/lp0", PinClass::Pin24);
//! if printer.initialize() {
//!     printer.bold(true)?;
//!     printer.print("RELATORIO DE VENDAS")?;
//!     printer.bold(false)?;
//!     printer.line_feed()?;
//!     printer.advance_vertical(1.5)?;
//!     printer.print("Total: 1.234,56")?;
//!     printer.form_feed()?;
//!     printer.close();
//! }
//! # Ok::<(), matriz::MatrizError>(())
//! ```

use tracing::warn;

use crate::error::MatrizError;
use crate::printer::config::{self, PinClass};
use crate::protocol::charset::CharacterSet;
use crate::protocol::commands::{self, PrintQuality};
use crate::transport::DeviceTransport;

/// Selectable character-table slot used for all assignments.
const TABLE_SLOT: u8 = 1;

/// # ESC/P Command Encoder
///
/// Encodes print commands for one ESC/P or ESC/P2 printer and writes them
/// to the device. See the [module docs](self) for the lifecycle.
#[derive(Debug)]
pub struct EscPrinter {
    target: String,
    pins: PinClass,
    transport: Option<DeviceTransport>,
    ready: bool,
}

impl EscPrinter {
    /// Create a driver for the printer at `target`.
    ///
    /// `target` names the output device: a device node (`/dev/lp0`), a
    /// spool file, or a network share (`\\server\epson`). Nothing is
    /// opened until [`initialize`](Self::initialize).
    pub fn new(target: impl Into<String>, pins: PinClass) -> Self {
        Self {
            target: target.into(),
            pins,
            transport: None,
            ready: false,
        }
    }

    /// Open the device and send the job setup sequence.
    ///
    /// On success the printer has received, in order: hardware reset
    /// (`ESC @`), 10-cpi pitch, draft quality, and the default character
    /// table (Brazil). Returns `true` only if the device opened and the
    /// whole sequence was written.
    ///
    /// On failure the connection is dropped and the driver stays unusable;
    /// there are no retries. Re-attempt with a fresh instance.
    pub fn initialize(&mut self) -> bool {
        self.ready = false;

        match DeviceTransport::open(&self.target) {
            Ok(transport) => self.transport = Some(transport),
            Err(e) => {
                warn!(device = %self.target, error = %e, "could not open printer");
                return false;
            }
        }

        if let Err(e) = self.write_setup() {
            warn!(device = %self.target, error = %e, "printer setup sequence failed");
            self.transport = None;
            return false;
        }

        self.ready = true;
        true
    }

    /// The job setup sequence: reset, 10 cpi, draft, default table.
    fn write_setup(&mut self) -> Result<(), MatrizError> {
        self.emit(&commands::init())?;
        self.select_10_cpi()?;
        self.select_draft_quality()?;
        self.set_character_set(CharacterSet::default())
    }

    /// Flush and release the device. Used when the print job ended.
    ///
    /// Never fails: teardown problems are logged and swallowed so the
    /// job's exit path can always release the printer. Safe to call
    /// without a successful [`initialize`](Self::initialize), and
    /// idempotent.
    pub fn close(&mut self) {
        self.ready = false;

        if let Some(transport) = self.transport.take() {
            if let Err(e) = transport.shutdown() {
                warn!(device = %self.target, error = %e, "error releasing printer");
            }
        }
    }

    /// Select 10 characters-per-inch pitch (condensed available).
    pub fn select_10_cpi(&mut self) -> Result<(), MatrizError> {
        self.emit(&commands::pitch_10cpi())
    }

    /// Select 15 characters-per-inch pitch (condensed not available).
    pub fn select_15_cpi(&mut self) -> Result<(), MatrizError> {
        self.emit(&commands::pitch_15cpi())
    }

    /// Select draft-quality printing.
    pub fn select_draft_quality(&mut self) -> Result<(), MatrizError> {
        self.emit(&commands::quality(PrintQuality::Draft))
    }

    /// Select letter-quality printing.
    pub fn select_letter_quality(&mut self) -> Result<(), MatrizError> {
        self.emit(&commands::quality(PrintQuality::Letter))
    }

    /// Make `set` the active character table.
    ///
    /// Two commands every call, in the order the firmware requires: assign
    /// the table to slot 1, then select slot 1.
    pub fn set_character_set(&mut self, set: CharacterSet) -> Result<(), MatrizError> {
        self.emit(&commands::assign_char_table(TABLE_SLOT, set.code()))?;
        self.emit(&commands::select_char_table(TABLE_SLOT))
    }

    /// Print the line buffer and advance one line (CR then LF).
    pub fn line_feed(&mut self) -> Result<(), MatrizError> {
        self.emit(&commands::line_feed())
    }

    /// Eject the sheet / advance to the next top-of-form (CR then FF).
    pub fn form_feed(&mut self) -> Result<(), MatrizError> {
        self.emit(&commands::form_feed())
    }

    /// Turn emphasized (bold) printing on or off.
    ///
    /// Stateless: the requested mode is re-sent each call, which the
    /// firmware treats as a no-op when already active.
    pub fn bold(&mut self, enabled: bool) -> Result<(), MatrizError> {
        if enabled {
            self.emit(&commands::bold_on())
        } else {
            self.emit(&commands::bold_off())
        }
    }

    /// Turn proportional character spacing on or off.
    pub fn proportional_mode(&mut self, enabled: bool) -> Result<(), MatrizError> {
        self.emit(&commands::proportional(enabled))
    }

    /// Advance the vertical print position by approximately `centimeters`.
    ///
    /// The distance is converted to motion units for this head's pin class
    /// (truncating, so the result can be short by up to one unit) and sent
    /// as one `ESC J` per [`config::MAX_FEED_UNITS`] units, with the
    /// remainder in the final command.
    pub fn advance_vertical(&mut self, centimeters: f32) -> Result<(), MatrizError> {
        check_distance(centimeters, "vertical advance")?;

        let mut units = self.pins.vertical_units(centimeters);
        while units > 0 {
            let n = units.min(u32::from(config::MAX_FEED_UNITS)) as u8;
            self.emit(&commands::feed_units(n))?;
            units -= u32::from(n);
        }
        Ok(())
    }

    /// Advance the horizontal print position by approximately
    /// `centimeters` (1/120-inch units, single command).
    pub fn advance_horizontal(&mut self, centimeters: f32) -> Result<(), MatrizError> {
        check_distance(centimeters, "horizontal advance")?;
        self.emit(&commands::relative_advance(config::relative_units(
            centimeters,
        )))
    }

    /// Set the absolute horizontal print position to `centimeters` from
    /// the left margin (1/60-inch units).
    pub fn set_absolute_horizontal_position(
        &mut self,
        centimeters: f32,
    ) -> Result<(), MatrizError> {
        check_distance(centimeters, "horizontal position")?;
        self.emit(&commands::absolute_position(config::absolute_units(
            centimeters,
        )))
    }

    /// Perform `tabs` horizontal tabs.
    pub fn horizontal_tab(&mut self, tabs: usize) -> Result<(), MatrizError> {
        for _ in 0..tabs {
            self.emit(&commands::tab())?;
        }
        Ok(())
    }

    /// Set the left and right margins, in columns of the current pitch.
    ///
    /// Both must be in 1..=255; the protocol treats 0 as invalid.
    pub fn set_margins(&mut self, left: u8, right: u8) -> Result<(), MatrizError> {
        if left == 0 || right == 0 {
            return Err(MatrizError::InvalidCommand(format!(
                "margins must be in 1..=255 columns, got left={}, right={}",
                left, right
            )));
        }

        self.emit(&commands::left_margin(left))?;
        self.emit(&commands::right_margin(right))
    }

    /// Write text bytes straight to the device.
    ///
    /// No translation happens here; the active character table on the
    /// printer decides the glyphs.
    pub fn print(&mut self, text: &str) -> Result<(), MatrizError> {
        self.emit(text.as_bytes())
    }

    /// Whether [`initialize`](Self::initialize) succeeded and
    /// [`close`](Self::close) has not been called since.
    pub fn is_initialized(&self) -> bool {
        self.ready
    }

    /// The target identifier this driver was created with.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Diagnostic summary, e.g. `<EscPrinter[target=/dev/lp0, pins=24-pin]>`.
    pub fn describe(&self) -> String {
        format!("<EscPrinter[target={}, pins={}]>", self.target, self.pins)
    }

    fn emit(&mut self, bytes: &[u8]) -> Result<(), MatrizError> {
        match self.transport.as_mut() {
            Some(transport) => transport.write_all(bytes),
            None => Err(MatrizError::Transport(format!(
                "printer {} is not open",
                self.target
            ))),
        }
    }
}

/// Reject negative (or non-finite) distances before anything is emitted.
fn check_distance(centimeters: f32, what: &str) -> Result<(), MatrizError> {
    if !centimeters.is_finite() || centimeters < 0.0 {
        return Err(MatrizError::InvalidCommand(format!(
            "{} must be a non-negative distance, got {} cm",
            what, centimeters
        )));
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
