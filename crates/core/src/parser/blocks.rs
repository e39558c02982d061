//! Block stream decoder.
//!
//! After the header the file is a flat sequence of blocks:
//!
//! ```text
//! [2 bytes] block tag (0x0001 color, 0xC001 group start, 0xC002 group end)
//! [4 bytes] block length (bytes following this field)
//! [.....]   payload
//!             color:       name, 4-byte model tag, arity * f32, u16 type
//!             group start: name
//!             group end:   (empty)
//! ```
//!
//! The decoder is a state machine re-entered once per field. Each state
//! carries the partially decoded block, so a color is only materialized
//! once its type code has been read and its framing checked.

use tracing::{trace, warn};

use super::cursor::ByteCursor;
use crate::codec;
use crate::error::{Result, StructuralError};
use crate::model::{Channels, Color, ColorModel, Document, Group, Version};

pub const COLOR_START: u16 = 0x0001;
pub const GROUP_START: u16 = 0xC001;
pub const GROUP_END: u16 = 0xC002;

/// Block classification from its 2-byte tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    ColorStart,
    GroupStart,
    GroupEnd,
}

impl BlockKind {
    pub fn from_tag(tag: u16) -> Option<Self> {
        match tag {
            COLOR_START => Some(BlockKind::ColorStart),
            GROUP_START => Some(BlockKind::GroupStart),
            GROUP_END => Some(BlockKind::GroupEnd),
            _ => None,
        }
    }

    pub const fn tag(self) -> u16 {
        match self {
            BlockKind::ColorStart => COLOR_START,
            BlockKind::GroupStart => GROUP_START,
            BlockKind::GroupEnd => GROUP_END,
        }
    }
}

/// How the 4-byte block length is used to delimit blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FramingPolicy {
    /// Decoded payload must end exactly where the length says.
    #[default]
    Strict,
    /// The length bounds the block; unread trailing bytes are skipped.
    Padded,
    /// The length is read and ignored; field consumption alone
    /// delimits blocks.
    Implicit,
}

/// Position and declared extent of the block being decoded.
#[derive(Debug, Clone, Copy)]
struct Frame {
    kind: BlockKind,
    /// Offset of the block tag.
    start: usize,
    /// Offset of the first payload byte.
    body: usize,
    declared: u32,
}

#[derive(Debug)]
enum State {
    ReadBlockTag,
    ReadBlockLength {
        kind: BlockKind,
        start: usize,
    },
    ReadBlockName {
        frame: Frame,
    },
    ReadBlockModel {
        frame: Frame,
        name: String,
    },
    ReadBlockColor {
        frame: Frame,
        name: String,
        model: ColorModel,
    },
    ReadBlockType {
        frame: Frame,
        name: String,
        model: ColorModel,
        channels: Channels,
    },
}

impl State {
    fn label(&self) -> &'static str {
        match self {
            State::ReadBlockTag => "ReadBlockTag",
            State::ReadBlockLength { .. } => "ReadBlockLength",
            State::ReadBlockName { .. } => "ReadBlockName",
            State::ReadBlockModel { .. } => "ReadBlockModel",
            State::ReadBlockColor { .. } => "ReadBlockColor",
            State::ReadBlockType { .. } => "ReadBlockType",
        }
    }
}

/// Result of walking a block stream.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedStream {
    pub document: Document,
    /// Number of blocks (of any kind) decoded.
    pub blocks: u32,
}

/// Decoder context threaded through every state transition.
pub struct BlockDecoder<'a> {
    cursor: ByteCursor<'a>,
    framing: FramingPolicy,
    document: Document,
    open_group: Option<usize>,
    blocks: u32,
}

impl<'a> BlockDecoder<'a> {
    /// Create a decoder reading blocks from `cursor` until it is exhausted.
    pub fn new(cursor: ByteCursor<'a>, version: Version, framing: FramingPolicy) -> Self {
        Self {
            cursor,
            framing,
            document: Document::new(version),
            open_group: None,
            blocks: 0,
        }
    }

    /// Decode every remaining block.
    ///
    /// Stops cleanly only when the buffer ends on a block boundary.
    pub fn run(mut self) -> Result<DecodedStream> {
        let mut state = State::ReadBlockTag;
        loop {
            if self.cursor.is_empty() {
                if !matches!(state, State::ReadBlockTag) {
                    return Err(StructuralError::InvalidState {
                        state: state.label(),
                        pos: self.cursor.position(),
                    }
                    .into());
                }
                break;
            }
            state = self.step(state)?;
        }

        if let Some(idx) = self.open_group {
            warn!(
                group = %self.document.groups[idx].name,
                "group still open at end of input"
            );
        }

        Ok(DecodedStream {
            document: self.document,
            blocks: self.blocks,
        })
    }

    fn step(&mut self, state: State) -> Result<State> {
        let next = match state {
            State::ReadBlockTag => {
                let start = self.cursor.position();
                let tag = self.cursor.read_u16()?;
                let kind = BlockKind::from_tag(tag)
                    .ok_or(StructuralError::UnknownBlockTag { tag, pos: start })?;
                self.blocks += 1;
                trace!(pos = start, ?kind, "block");
                State::ReadBlockLength { kind, start }
            }
            State::ReadBlockLength { kind, start } => {
                let declared = self.cursor.read_u32()?;
                let frame = Frame {
                    kind,
                    start,
                    body: self.cursor.position(),
                    declared,
                };
                match kind {
                    BlockKind::GroupEnd => {
                        self.close_group(start);
                        self.end_block(&frame)?;
                        State::ReadBlockTag
                    }
                    BlockKind::ColorStart | BlockKind::GroupStart => State::ReadBlockName { frame },
                }
            }
            State::ReadBlockName { frame } => {
                let name = codec::read_name(&mut self.cursor)?;
                match frame.kind {
                    BlockKind::GroupStart => {
                        self.end_block(&frame)?;
                        self.open_group(name);
                        State::ReadBlockTag
                    }
                    BlockKind::ColorStart => State::ReadBlockModel { frame, name },
                    BlockKind::GroupEnd => {
                        return Err(StructuralError::InvalidState {
                            state: "ReadBlockName",
                            pos: self.cursor.position(),
                        }
                        .into());
                    }
                }
            }
            State::ReadBlockModel { frame, name } => {
                let model = codec::read_model(&mut self.cursor)?;
                State::ReadBlockColor { frame, name, model }
            }
            State::ReadBlockColor { frame, name, model } => {
                let channels = codec::read_channels(&mut self.cursor, model)?;
                State::ReadBlockType {
                    frame,
                    name,
                    model,
                    channels,
                }
            }
            State::ReadBlockType {
                frame,
                name,
                model,
                channels,
            } => {
                let color_type = codec::read_type(&mut self.cursor)?;
                self.end_block(&frame)?;
                self.push_color(Color {
                    name,
                    model,
                    channels,
                    color_type,
                });
                State::ReadBlockTag
            }
        };
        Ok(next)
    }

    /// Reconcile the cursor with the block's declared length.
    fn end_block(&mut self, frame: &Frame) -> Result<()> {
        let consumed = self.cursor.position() - frame.body;
        let declared = frame.declared as usize;
        let mismatch = StructuralError::LengthMismatch {
            pos: frame.start,
            declared: frame.declared,
            consumed,
        };

        match self.framing {
            FramingPolicy::Implicit => Ok(()),
            FramingPolicy::Strict if consumed != declared => Err(mismatch.into()),
            FramingPolicy::Strict => Ok(()),
            FramingPolicy::Padded if consumed > declared => Err(mismatch.into()),
            FramingPolicy::Padded => {
                if consumed < declared {
                    trace!(pos = frame.start, pad = declared - consumed, "skipping block padding");
                }
                self.cursor.skip(declared - consumed)
            }
        }
    }

    fn open_group(&mut self, name: String) {
        if let Some(prev) = self.open_group {
            warn!(
                open = %self.document.groups[prev].name,
                new = %name,
                "group started before previous group ended"
            );
        }
        self.document.groups.push(Group::new(name));
        self.open_group = Some(self.document.groups.len() - 1);
    }

    fn close_group(&mut self, pos: usize) {
        if self.open_group.take().is_none() {
            warn!(pos, "group end without open group");
        }
    }

    fn push_color(&mut self, color: Color) {
        let index = self.document.colors.len();
        self.document.colors.push(color);
        if let Some(g) = self.open_group {
            self.document.groups[g].push_member(index);
        }
    }
}

/// Decode all blocks after the header.
pub fn decode_blocks(
    cursor: ByteCursor<'_>,
    version: Version,
    framing: FramingPolicy,
) -> Result<DecodedStream> {
    BlockDecoder::new(cursor, version, framing).run()
}
