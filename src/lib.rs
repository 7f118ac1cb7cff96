//! Screen-buffer rendering for SSD1305/1306 OLED and SSD1675a/1680/2677
//! ePaper display controllers.
//!
//! The controllers in this family expose their frame memory as pages of
//! eight vertically stacked pixels: one byte covers one column of one page,
//! least significant bit on top. This crate keeps such a framebuffer in
//! ordinary RAM, draws into it, and hands the finished bytes to a render
//! target which owns the bus transfer.
//!
//! ## Architecture
//!
//! This crate separates buffer composition from hardware control:
//! - **Renderer** owns a page-packed framebuffer and draws primitives,
//!   bitmaps and text into it. All drawing is pure in-memory work.
//! - **DualRenderer** composes two `Renderer` planes (black and red) for
//!   tri-color ePaper panels and converts the page packing into the
//!   row-major packing those controllers expect.
//! - **RenderTarget** is the seam to the per-chip drivers: they receive the
//!   finished bytes and talk to the hardware. Several buffers can share a
//!   single target.
//!
//! ## Usage
//!
//! ```rust, ignore
//! use ssd_renderer::prelude::*;
//!
//! let mut renderer = Renderer::new(128, 8);
//! renderer.draw_horizontal_line(0, 7);
//! renderer.print(Position { x: 64, y: 2 }, b"Hello", Alignment::Center, 2);
//! renderer.render(&mut driver)?;
//! ```
//!
//! For tri-color panels, draw on both planes and submit them together:
//!
//! ```rust, ignore
//! let mut dual = DualRenderer::new(128, 296);
//! dual.black_mut().print(Position::default(), b"13:37", Alignment::Left, 4);
//! dual.red_mut().invert_page(0);
//! dual.dual_render(&mut driver)?;
//! ```
//!
//! With the default `graphics` feature enabled, `Renderer` also implements
//! [`embedded_graphics::draw_target::DrawTarget`] so the usual primitives,
//! images and fonts from that ecosystem draw straight into the page-packed
//! buffer.
#![no_std]
#![deny(missing_docs)]
#![allow(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

extern crate alloc;

pub mod dual;
pub mod font;
pub mod fonts;
#[cfg(feature = "graphics")]
mod graphics;
pub mod image;
pub mod renderer;
pub mod target;

/// Pixel rows covered by one framebuffer page.
pub const PIXELS_PER_PAGE: usize = 8;

/// Useful exports
pub mod prelude {
    pub use crate::dual::DualRenderer;
    pub use crate::font::Font;
    pub use crate::image::Image;
    pub use crate::renderer::{Alignment, Area, Position, Renderer};
    pub use crate::target::RenderTarget;
}
