// envgen: typed accessor generator for `.env` files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Text decoding with BOM sniffing, and line ending detection.
//!
//! ```text
//! On-disk bytes              Internal        On-disk bytes
//! UTF-8 / UTF-8+BOM  --(decode)-->  UTF-8  --(encode)-->  same encoding
//! UTF-16 LE/BE + BOM
//! ```
//!
//! Uses `encoding_rs`. Invalid sequences → U+FFFD.

use std::borrow::Cow;

use encoding_rs::{UTF_8, UTF_16BE, UTF_16LE};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Encoding detected from a byte-order mark.
///
/// Files without a BOM are treated as plain UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8 without BOM.
    #[default]
    Utf8,
    /// UTF-8 with a leading BOM (common from Windows editors).
    Utf8Bom,
    /// UTF-16 Little Endian with BOM (PowerShell `>` redirection).
    Utf16Le,
    /// UTF-16 Big Endian with BOM.
    Utf16Be,
}

/// Decoded file content together with the encoding it was stored in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText<'a> {
    pub text: Cow<'a, str>,
    pub encoding: Encoding,
}

/// Decodes file bytes to UTF-8, honoring a leading byte-order mark.
///
/// # Example
/// ```
/// use envgen::utility::encoding::{decode_text, Encoding};
///
/// let decoded = decode_text(b"\xEF\xBB\xBFAPP_NAME=demo");
/// assert_eq!(decoded.text, "APP_NAME=demo");
/// assert_eq!(decoded.encoding, Encoding::Utf8Bom);
/// ```
#[must_use]
pub fn decode_text(bytes: &[u8]) -> DecodedText<'_> {
    let (encoding, body) = if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        (Encoding::Utf8Bom, rest)
    } else if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        (Encoding::Utf16Le, rest)
    } else if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        (Encoding::Utf16Be, rest)
    } else {
        (Encoding::Utf8, bytes)
    };

    let codec = match encoding {
        Encoding::Utf8 | Encoding::Utf8Bom => UTF_8,
        Encoding::Utf16Le => UTF_16LE,
        Encoding::Utf16Be => UTF_16BE,
    };
    let (text, _had_errors) = codec.decode_without_bom_handling(body);

    DecodedText { text, encoding }
}

/// Encodes UTF-8 text back into `encoding`, restoring its BOM.
#[must_use]
pub fn encode_text(text: &str, encoding: Encoding) -> Vec<u8> {
    match encoding {
        Encoding::Utf8 => text.as_bytes().to_vec(),
        Encoding::Utf8Bom => {
            let mut out = Vec::with_capacity(UTF8_BOM.len() + text.len());
            out.extend_from_slice(UTF8_BOM);
            out.extend_from_slice(text.as_bytes());
            out
        }
        Encoding::Utf16Le => {
            let mut out = UTF16_LE_BOM.to_vec();
            out.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
            out
        }
        Encoding::Utf16Be => {
            let mut out = UTF16_BE_BOM.to_vec();
            out.extend(text.encode_utf16().flat_map(u16::to_be_bytes));
            out
        }
    }
}

/// Line terminator used by a text file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Detects the style from the first line break; LF when there is none.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(idx) if idx > 0 && text.as_bytes()[idx - 1] == b'\r' => Self::CrLf,
            _ => Self::Lf,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}
