//! # ESC/P Protocol Implementation
//!
//! This module provides low-level command builders for the ESC/P and
//! ESC/P2 protocols used by Epson dot-matrix printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: command builders (pitch, quality, style, motion, margins)
//! - [`charset`]: registered character-table enumeration
//!
//! ## Usage Example
//!
//! ```
//! use matriz::protocol::{charset::CharacterSet, commands};
//!
//! // Build a print sequence by hand
//! let mut data = Vec::new();
//!
//! // Initialize printer
//! data.extend(commands::init());
//!
//! // Bold title
//! data.extend(commands::bold_on());
//! data.extend(b"INVOICE");
//! data.extend(commands::bold_off());
//! data.extend(commands::line_feed());
//!
//! // Switch to the Brazilian character table in slot 1
//! data.extend(commands::assign_char_table(1, CharacterSet::Brazil.code()));
//! data.extend(commands::select_char_table(1));
//!
//! // Send `data` to the printer via a transport, or use
//! // `matriz::EscPrinter` which does the writing for you.
//! ```
//!
//! ## Protocol Reference
//!
//! This implementation is based on the "Epson ESC/P Reference Manual"
//! covering both 9-pin ESC/P and 24/48-pin ESC/P2 machines.

pub mod charset;
pub mod commands;
