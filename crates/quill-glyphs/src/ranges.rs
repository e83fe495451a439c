/// First codepoint of the always-present range (space).
pub const LATIN_FIRST: u16 = 0x0020;

/// Last codepoint of the always-present range (end of Latin-1 Supplement).
pub const LATIN_LAST: u16 = 0x00FF;

/// Zero-terminated table of inclusive codepoint pairs.
///
/// Layout: `[first, last, first, last, ..., 0, 0]`. The first pair is always
/// `[LATIN_FIRST, LATIN_LAST]`; every following pair covers one codepoint and
/// pairs are sorted by codepoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRanges(Vec<u16>);

impl GlyphRanges {
    /// Table containing only Basic Latin + Latin-1 Supplement.
    pub fn default_latin() -> Self {
        Self(vec![LATIN_FIRST, LATIN_LAST, 0, 0])
    }

    /// Raw table including the trailing `[0, 0]` sentinel.
    #[inline]
    pub fn as_slice(&self) -> &[u16] {
        &self.0
    }

    /// Pointer to the first element, for atlas builders that take a C array.
    ///
    /// Valid for as long as `self` is alive and unmodified.
    #[inline]
    pub fn as_ptr(&self) -> *const u16 {
        self.0.as_ptr()
    }

    /// Number of `u16` entries, sentinel included.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a table holds at least the Latin range and the sentinel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(first, last)` pairs, sentinel excluded.
    pub fn pairs(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.0
            .chunks_exact(2)
            .map(|p| (p[0], p[1]))
            .take_while(|&pair| pair != (0, 0))
    }

    /// Consumes the table and returns the raw entries.
    pub fn into_vec(self) -> Vec<u16> {
        self.0
    }
}

impl Default for GlyphRanges {
    fn default() -> Self {
        Self::default_latin()
    }
}

impl AsRef<[u16]> for GlyphRanges {
    fn as_ref(&self) -> &[u16] {
        &self.0
    }
}

/// Builds the glyph-range table needed to render `text`.
///
/// Characters up to U+00FF are covered by the fixed Latin range. Each distinct
/// character above it yields one `[c, c]` pair, in ascending codepoint order.
/// Characters outside the Basic Multilingual Plane cannot be expressed in a
/// `u16` table and are skipped.
pub fn build_glyph_ranges(text: &str) -> GlyphRanges {
    let mut extra: Vec<u16> = text
        .chars()
        .filter_map(|c| u16::try_from(u32::from(c)).ok())
        .filter(|&cp| cp > LATIN_LAST)
        .collect();
    extra.sort_unstable();
    extra.dedup();

    let mut table = Vec::with_capacity(4 + extra.len() * 2);
    table.extend_from_slice(&[LATIN_FIRST, LATIN_LAST]);
    for cp in extra {
        table.extend_from_slice(&[cp, cp]);
    }
    table.extend_from_slice(&[0, 0]);

    GlyphRanges(table)
}
