//! # Transport Layer
//!
//! Communication backends for sending raw bytes to printers.
//!
//! ## Modules
//!
//! - [`device`]: synchronous path-addressed sink (device node, spool file,
//!   or network share)

pub mod device;

pub use device::DeviceTransport;
