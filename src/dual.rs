//! Dual-plane adapter for tri-color ePaper panels.

use alloc::boxed::Box;
use alloc::vec;

use log::debug;

use crate::renderer::Renderer;
use crate::target::{DisplayError, RenderTarget, BLACK_PLANE_TAG, RED_PLANE_TAG};
use crate::PIXELS_PER_PAGE;

/// Renders two [`Renderer`] planes onto a dual-plane controller.
///
/// [`Renderer`] composes for SSD1305/1306, where a byte is a column of 8
/// stacked pixels. SSD1675a/1680 RAM instead packs 8 pixels side by side in
/// each byte. This adapter keeps a black and a red plane in the renderer
/// packing, rearranges each into the controller packing at render time, and
/// submits both followed by a refresh trigger.
pub struct DualRenderer<'f> {
    width: usize,
    height: usize,
    black: Renderer<'f>,
    red: Renderer<'f>,
    intermediate: Box<[u8]>,
}

impl<'f> DualRenderer<'f> {
    /// Creates a dual renderer for a `width` x `height` pixel panel.
    ///
    /// Both dimensions are expected to be multiples of 8; the plane buffers
    /// and the intermediate buffer are allocated here and live as long as
    /// the dual renderer.
    pub fn new(width: usize, height: usize) -> Self {
        debug_assert!(width % PIXELS_PER_PAGE == 0);
        debug_assert!(height % PIXELS_PER_PAGE == 0);

        let pages = height / PIXELS_PER_PAGE;

        Self {
            width,
            height,
            black: Renderer::new(width, pages),
            red: Renderer::new(width, pages),
            intermediate: vec![0; (width / PIXELS_PER_PAGE) * height].into_boxed_slice(),
        }
    }

    /// Panel width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Panel height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The black plane.
    pub fn black(&self) -> &Renderer<'f> {
        &self.black
    }

    /// The black plane, for drawing.
    pub fn black_mut(&mut self) -> &mut Renderer<'f> {
        &mut self.black
    }

    /// The red plane.
    pub fn red(&self) -> &Renderer<'f> {
        &self.red
    }

    /// The red plane, for drawing.
    pub fn red_mut(&mut self) -> &mut Renderer<'f> {
        &mut self.red
    }

    /// Submits both planes to the render target, then triggers a refresh.
    ///
    /// Each plane is rearranged into the controller packing and submitted
    /// with its plane tag ORed into the length; the trailing zero-length
    /// submission tells the target to update the display.
    pub fn dual_render(&mut self, target: &mut impl RenderTarget) -> Result<(), DisplayError> {
        let length = self.intermediate.len();

        debug!("submitting black plane ({} bytes)", length);
        rearrange(
            self.black.buffer(),
            &mut self.intermediate,
            self.width,
            self.height,
        );
        target.submit_image(&self.intermediate, length | BLACK_PLANE_TAG)?;

        debug!("submitting red plane ({} bytes)", length);
        rearrange(
            self.red.buffer(),
            &mut self.intermediate,
            self.width,
            self.height,
        );
        target.submit_image(&self.intermediate, length | RED_PLANE_TAG)?;

        debug!("triggering display refresh");
        target.submit_image(&[], 0)
    }
}

/// Repacks a plane from column-major pages into the row-major layout.
///
/// The source byte at `(page, column)` lands at `(column, page)` in the
/// intermediate buffer. The destination packing reads pixels in the
/// opposite physical scan direction, so every byte is bit-reversed on the
/// way over.
fn rearrange(vram: &[u8], intermediate: &mut [u8], width: usize, height: usize) {
    let pages = height / PIXELS_PER_PAGE;

    for column in 0..width {
        for page in 0..pages {
            intermediate[column * pages + page] = vram[page * width + column].reverse_bits();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{rearrange, DualRenderer};
    use crate::target::{DisplayError, RenderTarget, BLACK_PLANE_TAG, RED_PLANE_TAG};
    use alloc::vec;
    use alloc::vec::Vec;

    const WIDTH: usize = 16;
    const HEIGHT: usize = 128;
    const PAGES: usize = HEIGHT / 8;
    const PLANE_LEN: usize = (WIDTH / 8) * HEIGHT;

    struct CaptureTarget {
        submissions: Vec<(Vec<u8>, usize)>,
    }

    impl RenderTarget for CaptureTarget {
        fn submit_image(&mut self, image: &[u8], length: usize) -> Result<(), DisplayError> {
            self.submissions.push((image.to_vec(), length));
            Ok(())
        }
    }

    #[test]
    fn rearrange_round_trips_every_byte_value() {
        // 16 columns x 16 pages holds each byte value exactly once
        let source: Vec<u8> = (0..=255).collect();
        let mut intermediate = vec![0u8; 256];
        rearrange(&source, &mut intermediate, WIDTH, HEIGHT);

        // apply the inverse mapping and compare with the original
        let mut recovered = vec![0u8; 256];
        for column in 0..WIDTH {
            for page in 0..PAGES {
                recovered[page * WIDTH + column] =
                    intermediate[column * PAGES + page].reverse_bits();
            }
        }

        assert_eq!(recovered, source);
    }

    #[test]
    fn rearrange_reverses_bit_order() {
        let mut source = vec![0u8; PLANE_LEN];
        // top-left pixel of page 0, column 0
        source[0] = 0b0000_0001;

        let mut intermediate = vec![0u8; PLANE_LEN];
        rearrange(&source, &mut intermediate, WIDTH, HEIGHT);

        assert_eq!(intermediate[0], 0b1000_0000);
        assert!(intermediate[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn dual_render_submits_planes_then_commit() {
        let mut dual = DualRenderer::new(WIDTH, HEIGHT);
        dual.black_mut().draw_horizontal_line(0, 0);

        let mut target = CaptureTarget {
            submissions: Vec::new(),
        };
        dual.dual_render(&mut target).unwrap();

        assert_eq!(target.submissions.len(), 3);

        let (black, black_length) = &target.submissions[0];
        assert_eq!(*black_length, PLANE_LEN | BLACK_PLANE_TAG);
        assert_eq!(black.len(), PLANE_LEN);

        let (red, red_length) = &target.submissions[1];
        assert_eq!(*red_length, PLANE_LEN | RED_PLANE_TAG);
        assert!(red.iter().all(|&b| b == 0));

        let (commit, commit_length) = &target.submissions[2];
        assert_eq!(*commit_length, 0);
        assert!(commit.is_empty());

        // row 0 of the black plane became the reversed top bit of every column
        for column in 0..WIDTH {
            assert_eq!(black[column * PAGES], 0b1000_0000);
        }
    }

    #[test]
    fn planes_draw_independently() {
        let mut dual = DualRenderer::new(WIDTH, HEIGHT);
        dual.black_mut().invert_page(0);

        assert!(dual.red().buffer().iter().all(|&b| b == 0));
        assert!(dual.black().buffer()[..WIDTH].iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn plane_and_intermediate_sizes_match_the_panel() {
        let dual = DualRenderer::new(WIDTH, HEIGHT);

        assert_eq!(dual.black().buffer().len(), WIDTH * PAGES);
        assert_eq!(dual.red().buffer().len(), WIDTH * PAGES);
        assert_eq!(dual.width(), WIDTH);
        assert_eq!(dual.height(), HEIGHT);
    }
}
