//! Ordered, immutable sequences of frames

use crate::frame::Frame;
use crate::render::{display_verb, Render, Verb};
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{Deref, Range};

/// Frames captured at one moment, closest to the capture point first.
///
/// A trace is either *absent* (nothing was ever captured) or present with
/// zero or more frames. The two only render differently under
/// [`Verb::Debug`]: `[]Frame(nil)` versus `[]Frame{}`.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct StackTrace {
    frames: Option<Vec<Frame>>,
}

impl StackTrace {
    /// A trace that was never captured
    pub const fn absent() -> Self {
        Self { frames: None }
    }

    /// A captured trace with no frames
    pub const fn empty() -> Self {
        Self {
            frames: Some(Vec::new()),
        }
    }

    /// Capture the active call stack.
    ///
    /// `skip` counts frames above the caller of `capture`: with `skip == 0`
    /// the first frame is the function that called `capture`. At most
    /// `max_depth` frames are kept.
    #[inline(never)]
    pub fn capture(skip: usize, max_depth: usize) -> Self {
        if !cfg!(feature = "full-backtrace") {
            return Self::empty();
        }
        Self::from(walk(Self::capture as usize, skip, max_depth))
    }

    /// Whether this trace was never captured.
    pub fn is_absent(&self) -> bool {
        self.frames.is_none()
    }

    /// The frames, empty for an absent trace
    pub fn frames(&self) -> &[Frame] {
        self.frames.as_deref().unwrap_or_default()
    }

    /// A sub-range of this trace, or `None` if `range` is out of bounds.
    pub fn slice(&self, range: Range<usize>) -> Option<Self> {
        self.frames()
            .get(range)
            .map(|frames| Self::from(frames.to_vec()))
    }

    fn write_list(&self, f: &mut fmt::Formatter<'_>, verb: Verb) -> fmt::Result {
        f.write_str("[")?;
        for (i, frame) in self.frames().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            frame.render_into(f, verb)?;
        }
        f.write_str("]")
    }
}

impl From<Vec<Frame>> for StackTrace {
    fn from(frames: Vec<Frame>) -> Self {
        Self {
            frames: Some(frames),
        }
    }
}

impl FromIterator<Frame> for StackTrace {
    fn from_iter<I: IntoIterator<Item = Frame>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Deref for StackTrace {
    type Target = [Frame];

    fn deref(&self) -> &[Frame] {
        self.frames()
    }
}

impl<'a> IntoIterator for &'a StackTrace {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames().iter()
    }
}

impl Render for StackTrace {
    fn render_into(&self, f: &mut fmt::Formatter<'_>, verb: Verb) -> fmt::Result {
        match verb {
            Verb::Extended => {
                for frame in self.frames() {
                    f.write_str("\n")?;
                    frame.render_into(f, Verb::Extended)?;
                }
                Ok(())
            }
            Verb::Debug => match &self.frames {
                None => f.write_str("[]Frame(nil)"),
                Some(frames) => {
                    f.write_str("[]Frame{")?;
                    for (i, frame) in frames.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        frame.render_into(f, Verb::Debug)?;
                    }
                    f.write_str("}")
                }
            },
            Verb::Short | Verb::Long | Verb::Line | Verb::Name | Verb::Default => {
                self.write_list(f, verb)
            }
        }
    }
}

impl fmt::Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_into(f, display_verb(f))
    }
}

impl fmt::Debug for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_into(f, Verb::Debug)
    }
}

impl Serialize for StackTrace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let Some(frames) = &self.frames else {
            return serializer.serialize_none();
        };
        let mut seq = serializer.serialize_seq(Some(frames.len()))?;
        for frame in frames {
            seq.serialize_element(frame)?;
        }
        seq.end()
    }
}

/// Walk the live call stack.
///
/// Frames belonging to the unwinder and to the function at address `marker`
/// are dropped, then `skip` more, then at most `max_depth` are kept. If the
/// marker never shows up (no symbol addresses on this platform) nothing is
/// dropped for it.
#[inline(never)]
pub(crate) fn walk(marker: usize, skip: usize, max_depth: usize) -> Vec<Frame> {
    let mut raw = Vec::new();
    let mut start = None;

    backtrace::trace(|frame| {
        raw.push(Frame::from_ip(frame.ip() as usize));
        if start.is_none() && frame.symbol_address() as usize == marker {
            start = Some(raw.len());
        }
        // Stop once enough frames past the marker are in hand.
        let wanted = start.map(|s| s.saturating_add(skip).saturating_add(max_depth));
        !matches!(wanted, Some(end) if raw.len() >= end)
    });

    let frames: Vec<Frame> = raw
        .into_iter()
        .skip(start.unwrap_or(0).saturating_add(skip))
        .take(max_depth)
        .collect();

    tracing::trace!("Captured {} frames (skip={skip})", frames.len());
    frames
}
