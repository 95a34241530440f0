//! # Matriz - ESC/P Dot-Matrix Printer Driver
//!
//! Matriz is a Rust library for driving Epson ESC/P and ESC/P2 dot-matrix
//! printers (LX-300, LQ-570, and friends) by writing escape codes directly
//! to the device. It provides:
//!
//! - **Protocol implementation**: ESC/P command builders with exact wire
//!   encodings
//! - **Driver**: a per-job command encoder handling pin-class unit scaling
//!   and the firmware quirks of vertical motion
//! - **Transport**: synchronous raw writes to a device node, spool file,
//!   or network share
//!
//! Writing the protocol directly bypasses generic graphics-based printing,
//! which is considerably slower on a dot-matrix machine and hides the
//! hardware's pitch, quality, and character-table features.
//!
//! ## Quick Start
//!
//! ```no_run
//! use matriz::{CharacterSet, EscPrinter, PinClass};
//!
//! // One driver instance per print job
//! let mut printer = EscPrinter::new("/dev/lp0", PinClass::Pin24);
//!
//! if printer.initialize() {
//!     printer.select_letter_quality()?;
//!     printer.set_character_set(CharacterSet::Brazil)?;
//!
//!     printer.bold(true)?;
//!     printer.print("PEDIDO #1047")?;
//!     printer.bold(false)?;
//!     printer.line_feed()?;
//!
//!     printer.advance_vertical(0.5)?;
//!     printer.print("3x Cafe ............. 12,00")?;
//!     printer.line_feed()?;
//!
//!     printer.form_feed()?;
//!     printer.close();
//! }
//! # Ok::<(), matriz::MatrizError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/P command builders and character tables |
//! | [`printer`] | The [`EscPrinter`] driver and pin-class configuration |
//! | [`transport`] | Raw device/share output sink |
//! | [`error`] | Error types |
//!
//! ## Supported Printers
//!
//! Any printer speaking ESC/P (9-pin) or ESC/P2 (24/48-pin). Pass the pin
//! class at construction; it decides the vertical motion-unit scaling.

pub mod error;
pub mod printer;
pub mod protocol;
pub mod transport;

// Re-exports for convenience
pub use error::MatrizError;
pub use printer::{EscPrinter, PinClass};
pub use protocol::charset::CharacterSet;
pub use transport::DeviceTransport;
