//! The seam between buffer composition and the per-chip drivers.

pub use display_interface::DisplayError;

/// Bit set in the `length` argument of [`RenderTarget::submit_image`] to
/// route the payload to the black plane RAM of a dual-plane controller.
pub const BLACK_PLANE_TAG: usize = 1 << 24;

/// Bit set in the `length` argument of [`RenderTarget::submit_image`] to
/// route the payload to the red plane RAM of a dual-plane controller.
pub const RED_PLANE_TAG: usize = 1 << 26;

/// Mask extracting the payload byte count from a tagged `length` value.
pub const LENGTH_MASK: usize = 0xFFFF;

/// Interface for receiving a rendered image.
///
/// Implemented by the per-chip drivers; they own the bus transfer and any
/// busy-waiting it involves. A call may block the calling thread, but the
/// renderer's own state is never affected by what happens behind this seam.
pub trait RenderTarget {
    /// Submits an entire image to the render target.
    ///
    /// `length` is the number of payload bytes, possibly combined with
    /// out-of-band tag bits in its upper bits ([`BLACK_PLANE_TAG`],
    /// [`RED_PLANE_TAG`]; the byte count itself fits in [`LENGTH_MASK`]).
    /// A `length` of zero carries no payload and means "trigger a display
    /// refresh/commit", not "submit zero bytes".
    fn submit_image(&mut self, image: &[u8], length: usize) -> Result<(), DisplayError>;

    /// Updates only a limited region of the image.
    ///
    /// `x` and `width` are in pixels, `y` in pages, `length` is the number
    /// of region bytes. Targets without partial-update support can rely on
    /// the provided no-op implementation.
    fn update_region(
        &mut self,
        x: usize,
        width: usize,
        y: usize,
        data: &[u8],
        length: u8,
    ) -> Result<(), DisplayError> {
        let _ = (x, width, y, data, length);
        Ok(())
    }
}
