//! embedded-graphics support for [`Renderer`].

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::renderer::Renderer;
use crate::PIXELS_PER_PAGE;

impl OriginDimensions for Renderer<'_> {
    fn size(&self) -> Size {
        Size::new(self.width() as u32, (self.pages() * PIXELS_PER_PAGE) as u32)
    }
}

impl DrawTarget for Renderer<'_> {
    type Error = core::convert::Infallible;
    type Color = BinaryColor;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }

            self.set_pixel(point.x as usize, point.y as usize, color.is_on());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::renderer::Renderer;
    use embedded_graphics::{
        pixelcolor::BinaryColor,
        prelude::*,
        primitives::{Line, PrimitiveStyle, Rectangle},
    };

    #[test]
    fn size_reports_pixels() {
        let renderer = Renderer::new(128, 8);
        assert_eq!(renderer.size(), Size::new(128, 64));
    }

    #[test]
    fn pixels_map_lsb_top_into_pages() {
        let mut renderer = Renderer::new(128, 8);

        let pixels = [
            Pixel(Point::new(0, 0), BinaryColor::On),
            Pixel(Point::new(1, 7), BinaryColor::On),
            Pixel(Point::new(2, 8), BinaryColor::On),
        ];
        renderer.draw_iter(pixels.iter().copied()).unwrap();

        assert_eq!(renderer.buffer()[0], 0b0000_0001);
        assert_eq!(renderer.buffer()[1], 0b1000_0000);
        assert_eq!(renderer.buffer()[128 + 2], 0b0000_0001);
    }

    #[test]
    fn off_pixels_clear_bits() {
        let mut renderer = Renderer::new(128, 8);
        renderer.invert_page(0);

        renderer
            .draw_iter([Pixel(Point::new(0, 0), BinaryColor::Off)])
            .unwrap();

        assert_eq!(renderer.buffer()[0], 0b1111_1110);
    }

    #[test]
    fn out_of_bounds_pixels_are_dropped() {
        let mut renderer = Renderer::new(128, 8);

        let pixels = [
            Pixel(Point::new(-1, 0), BinaryColor::On),
            Pixel(Point::new(0, -1), BinaryColor::On),
            Pixel(Point::new(128, 0), BinaryColor::On),
            Pixel(Point::new(0, 64), BinaryColor::On),
        ];
        renderer.draw_iter(pixels.iter().copied()).unwrap();

        assert!(renderer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn line_primitive_lands_in_first_page() {
        let mut renderer = Renderer::new(128, 8);

        let _ = Line::new(Point::new(0, 0), Point::new(7, 0))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut renderer);

        for column in 0..8 {
            assert_eq!(renderer.buffer()[column], 0b0000_0001);
        }
        assert!(renderer.buffer()[8..].iter().all(|&b| b == 0));
    }

    #[test]
    fn filled_rectangle_spans_pages() {
        let mut renderer = Renderer::new(128, 8);

        let _ = Rectangle::new(Point::new(4, 4), Size::new(2, 8))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut renderer);

        // rows 4..11: upper nibble of page 0 plus lower nibble of page 1
        assert_eq!(renderer.buffer()[4], 0b1111_0000);
        assert_eq!(renderer.buffer()[5], 0b1111_0000);
        assert_eq!(renderer.buffer()[128 + 4], 0b0000_1111);
        assert_eq!(renderer.buffer()[128 + 5], 0b0000_1111);
    }
}
