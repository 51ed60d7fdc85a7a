//! Segmented byte sequence
//!
//! Presents an ordered list of borrowed byte chunks as one logical byte
//! stream without copying. Positions are `(segment, offset)` pairs and are
//! kept normalized: they never point at the end of a segment or into an
//! empty one. The end of the sequence is the position one past the last
//! segment, so positions order the same way as the byte offsets they mark.

/// Backing storage: one contiguous slice, or an ordered list of slices
#[derive(Debug, Clone, Copy)]
enum Segments<'a> {
    Single(&'a [u8]),
    Multi(&'a [&'a [u8]]),
}

impl<'a> Segments<'a> {
    #[inline]
    fn count(&self) -> usize {
        match self {
            Segments::Single(_) => 1,
            Segments::Multi(list) => list.len(),
        }
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&'a [u8]> {
        match *self {
            Segments::Single(bytes) => (index == 0).then_some(bytes),
            Segments::Multi(list) => list.get(index).copied(),
        }
    }
}

/// Marker for an offset inside a [`ByteSequence`]
///
/// Only meaningful for the sequence that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SequencePosition {
    segment: usize,
    offset: usize,
}

impl SequencePosition {
    /// Index of the segment this position points into
    pub fn segment(&self) -> usize {
        self.segment
    }

    /// Offset within that segment
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Read-only view over a possibly multi-segment byte buffer
#[derive(Debug, Clone, Copy)]
pub struct ByteSequence<'a> {
    segments: Segments<'a>,
    len: usize,
}

impl<'a> ByteSequence<'a> {
    /// Create a sequence over ordered segments. Empty segments are allowed.
    pub fn new(segments: &'a [&'a [u8]]) -> Self {
        let len = segments.iter().map(|s| s.len()).sum();
        Self {
            segments: Segments::Multi(segments),
            len,
        }
    }

    /// Create a single-segment sequence over a contiguous slice
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        Self {
            segments: Segments::Single(bytes),
            len: bytes.len(),
        }
    }

    /// Total number of bytes across all segments
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of physical segments, including empty ones
    pub fn segment_count(&self) -> usize {
        self.segments.count()
    }

    /// Whether all bytes live in one contiguous chunk
    pub fn is_single_segment(&self) -> bool {
        self.segments().filter(|s| !s.is_empty()).count() <= 1
    }

    /// Iterate over the physical segments in order
    pub fn segments(&self) -> impl Iterator<Item = &'a [u8]> + 'a {
        let segments = self.segments;
        (0..segments.count()).filter_map(move |i| segments.get(i))
    }

    /// Position of the first byte
    pub fn start(&self) -> SequencePosition {
        self.normalize(SequencePosition::default())
    }

    /// Position one past the last byte
    pub fn end(&self) -> SequencePosition {
        SequencePosition {
            segment: self.segments.count(),
            offset: 0,
        }
    }

    /// First contiguous run of bytes and the position following it
    pub fn first_chunk(&self) -> (&'a [u8], SequencePosition) {
        self.chunk_with_next(self.start())
    }

    /// Contiguous run of bytes starting at `pos`, up to the end of its segment
    ///
    /// Empty for the end position or a position from another sequence.
    pub fn chunk_at(&self, pos: SequencePosition) -> &'a [u8] {
        self.segments
            .get(pos.segment)
            .and_then(|chunk| chunk.get(pos.offset..))
            .unwrap_or(&[])
    }

    /// Contiguous run at `pos` together with the position right after it
    pub(crate) fn chunk_with_next(&self, pos: SequencePosition) -> (&'a [u8], SequencePosition) {
        let chunk = self.chunk_at(pos);
        let next = self.seek(pos, chunk.len()).unwrap_or_else(|| self.end());
        (chunk, next)
    }

    /// Position `count` bytes after `from`, crossing segments as needed
    ///
    /// Returns `None` if fewer than `count` bytes remain after `from` or
    /// `from` does not belong to this sequence.
    pub fn seek(&self, from: SequencePosition, count: usize) -> Option<SequencePosition> {
        if !self.contains(from) {
            return None;
        }

        let mut segment = from.segment;
        let mut offset = from.offset;
        let mut left = count;

        while let Some(chunk) = self.segments.get(segment) {
            let available = chunk.len().saturating_sub(offset);
            if left < available {
                return Some(SequencePosition {
                    segment,
                    offset: offset + left,
                });
            }
            left -= available;
            segment += 1;
            offset = 0;
        }

        (left == 0).then(|| self.end())
    }

    /// Fill `dest` with the bytes starting at `from`
    ///
    /// Returns false if fewer than `dest.len()` bytes remain; `dest` may then
    /// hold a partial copy. An empty `dest` always succeeds.
    pub fn copy_exact(&self, from: SequencePosition, dest: &mut [u8]) -> bool {
        if dest.is_empty() {
            return true;
        }
        if !self.contains(from) {
            return false;
        }

        let mut segment = from.segment;
        let mut offset = from.offset;
        let mut filled = 0;

        while filled < dest.len() {
            let Some(chunk) = self.segments.get(segment) else {
                return false;
            };
            let available = chunk.get(offset..).unwrap_or(&[]);
            let take = available.len().min(dest.len() - filled);
            dest[filled..filled + take].copy_from_slice(&available[..take]);
            filled += take;
            segment += 1;
            offset = 0;
        }

        true
    }

    /// Absolute byte offset of `pos` from the start of the sequence
    pub fn offset_of(&self, pos: SequencePosition) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        let before: usize = self.segments().take(pos.segment).map(|s| s.len()).sum();
        Some(before + pos.offset)
    }

    /// Normalized position of an absolute byte offset
    pub fn position_at(&self, offset: usize) -> Option<SequencePosition> {
        self.seek(SequencePosition::default(), offset)
    }

    /// Gather every byte into an owned buffer
    pub fn to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len);
        for segment in self.segments() {
            out.extend_from_slice(segment);
        }
        out
    }

    /// Whether `pos` addresses a byte boundary inside this sequence
    fn contains(&self, pos: SequencePosition) -> bool {
        match self.segments.get(pos.segment) {
            Some(chunk) => pos.offset <= chunk.len(),
            None => pos == self.end(),
        }
    }

    fn normalize(&self, pos: SequencePosition) -> SequencePosition {
        self.seek(pos, 0).unwrap_or_else(|| self.end())
    }
}

impl Default for ByteSequence<'_> {
    fn default() -> Self {
        Self::from_slice(&[])
    }
}

impl<'a> From<&'a [u8]> for ByteSequence<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl<'a> From<&'a [&'a [u8]]> for ByteSequence<'a> {
    fn from(segments: &'a [&'a [u8]]) -> Self {
        Self::new(segments)
    }
}
