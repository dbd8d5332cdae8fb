//! Rendering module
//!
//! The core never touches pixels. Each frame it describes the screen as
//! sprite blits, text and circles on a [`Canvas`] the platform implements.

pub mod scene;
pub mod sprites;

pub use scene::{draw_help, draw_menu, draw_play};
pub use sprites::SpriteId;

use glam::IVec2;

/// How a sprite combines with what is already on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlitMode {
    /// Replace the destination rectangle (backgrounds)
    Overwrite,
    /// Only lit pixels are drawn (everything layered on top)
    SelfMasked,
}

/// Drawing primitives provided by the platform
pub trait Canvas {
    fn blit(&mut self, sprite: SpriteId, pos: IVec2, frame: u8, mode: BlitMode);
    fn text(&mut self, pos: IVec2, size: u8, text: &str);
    fn circle(&mut self, center: IVec2, radius: u8, filled: bool);
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Blit {
        sprite: SpriteId,
        pos: IVec2,
        frame: u8,
        mode: BlitMode,
    },
    Text {
        pos: IVec2,
        size: u8,
        text: String,
    },
    Circle {
        center: IVec2,
        radius: u8,
        filled: bool,
    },
}

/// A canvas that records calls instead of drawing them
#[derive(Debug, Clone, Default)]
pub struct CommandList {
    pub commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Blits of one sprite, in draw order
    pub fn blits_of(&self, sprite: SpriteId) -> impl Iterator<Item = (IVec2, u8)> + '_ {
        self.commands.iter().filter_map(move |c| match c {
            DrawCommand::Blit {
                sprite: s,
                pos,
                frame,
                ..
            } if *s == sprite => Some((*pos, *frame)),
            _ => None,
        })
    }

    /// Whether any text call contains `needle`
    pub fn has_text(&self, needle: &str) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Text { text, .. } if text.contains(needle)))
    }
}

impl Canvas for CommandList {
    fn blit(&mut self, sprite: SpriteId, pos: IVec2, frame: u8, mode: BlitMode) {
        self.commands.push(DrawCommand::Blit {
            sprite,
            pos,
            frame,
            mode,
        });
    }

    fn text(&mut self, pos: IVec2, size: u8, text: &str) {
        self.commands.push(DrawCommand::Text {
            pos,
            size,
            text: text.to_string(),
        });
    }

    fn circle(&mut self, center: IVec2, radius: u8, filled: bool) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            filled,
        });
    }
}
