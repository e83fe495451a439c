//! Glyph-range tables for font atlas builders.
//!
//! Atlas builders take a zero-terminated list of inclusive `u16` codepoint
//! pairs describing which glyphs to rasterize. This crate builds such a table
//! from the text an application intends to display.
//!
//! # Quick start
//!
//! ```rust
//! use quill_glyphs::build_glyph_ranges;
//!
//! let ranges = build_glyph_ranges("中文");
//! assert_eq!(
//!     ranges.as_slice(),
//!     &[0x0020, 0x00FF, 0x4E2D, 0x4E2D, 0x6587, 0x6587, 0, 0]
//! );
//! ```

mod ranges;

pub use ranges::{build_glyph_ranges, GlyphRanges, LATIN_FIRST, LATIN_LAST};
