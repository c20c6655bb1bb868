// envgen: typed accessor generator for `.env` files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! encoding
//!   decode_text()  UTF-8/UTF-8+BOM/UTF-16 --> UTF-8
//!   encode_text()  UTF-8 --> original encoding
//!   LineEnding     LF / CRLF detection
//! fs
//!   read_text(), write_text(), write_atomic(), replace_file()
//! ```

pub mod encoding;
pub mod fs;
