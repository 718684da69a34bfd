//! Low-level drawing primitives shared across widgets.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};

use crate::geometry::GridGeometry;
use crate::icons::Icon;

/// Draw one BCD cell anchored at `point`.
///
/// Always fills a `circle_radius` square in `foreground`. For a clear bit a second square,
/// inset by `line_thickness` on every side, is filled in `background` on top of it, which
/// leaves a ring.
pub fn draw_cell<D>(
    display: &mut D,
    geometry: &GridGeometry,
    point: Point,
    filled: bool,
    foreground: Rgb565,
    background: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let corner = Size::new(geometry.corner_radius, geometry.corner_radius);
    let outer = Rectangle::new(point, Size::new(geometry.circle_radius, geometry.circle_radius));

    RoundedRectangle::with_equal_corners(outer, corner)
        .into_styled(PrimitiveStyle::with_fill(foreground))
        .draw(display)
        .ok();

    if !filled {
        let inset = geometry.line_thickness;
        let inner_size = geometry.circle_radius.saturating_sub(inset * 2);
        let inner = Rectangle::new(
            point + Point::new(inset as i32, inset as i32),
            Size::new(inner_size, inner_size),
        );
        RoundedRectangle::with_equal_corners(inner, corner)
            .into_styled(PrimitiveStyle::with_fill(background))
            .draw(display)
            .ok();
    }
}

/// Fill a layer's frame with its background color.
pub fn fill_layer<D>(
    display: &mut D,
    frame: Rectangle,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    frame.into_styled(PrimitiveStyle::with_fill(color)).draw(display).ok();
}

/// Draw the set pixels of `icon` in `color` with its top-left corner at `origin`.
///
/// Unset pixels are left untouched, so the layer underneath shows through.
pub fn draw_icon<D>(
    display: &mut D,
    icon: &Icon,
    origin: Point,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display
        .draw_iter(icon.points().map(|offset| Pixel(origin + offset, color)))
        .ok();
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;
    use crate::colors::{BLACK, WHITE};
    use crate::icons::PHONE_WHITE;

    const GEOMETRY: GridGeometry = GridGeometry::WATCH;

    fn display() -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display
    }

    #[test]
    fn test_filled_cell_is_solid() {
        let mut display = display();
        draw_cell(&mut display, &GEOMETRY, Point::zero(), true, WHITE, BLACK);

        for p in [Point::new(8, 8), Point::new(1, 8), Point::new(3, 3), Point::new(14, 8)] {
            assert_eq!(display.get_pixel(p), Some(WHITE), "{p:?}");
        }
        // Nothing outside the square
        assert_eq!(display.get_pixel(Point::new(16, 8)), None);
        assert_eq!(display.get_pixel(Point::new(8, 16)), None);
    }

    #[test]
    fn test_unfilled_cell_is_ring() {
        let mut display = display();
        draw_cell(&mut display, &GEOMETRY, Point::zero(), false, WHITE, BLACK);

        // Ring: two pixels wide on each edge
        for p in [Point::new(0, 8), Point::new(1, 8), Point::new(14, 8), Point::new(15, 8), Point::new(8, 1)] {
            assert_eq!(display.get_pixel(p), Some(WHITE), "{p:?}");
        }
        // Hollow centre
        for p in [Point::new(2, 8), Point::new(8, 8), Point::new(13, 8), Point::new(8, 13)] {
            assert_eq!(display.get_pixel(p), Some(BLACK), "{p:?}");
        }
    }

    #[test]
    fn test_cell_respects_anchor() {
        let mut display = display();
        draw_cell(&mut display, &GEOMETRY, Point::new(20, 20), true, WHITE, BLACK);
        assert_eq!(display.get_pixel(Point::new(19, 28)), None);
        assert_eq!(display.get_pixel(Point::new(28, 28)), Some(WHITE));
    }

    #[test]
    fn test_draw_icon_only_set_pixels() {
        let mut display = display();
        draw_icon(&mut display, &PHONE_WHITE, Point::new(4, 4), WHITE);

        assert_eq!(display.get_pixel(Point::new(6, 6)), Some(WHITE));
        assert_eq!(display.get_pixel(Point::new(4, 4)), None);
        assert_eq!(display.get_pixel(Point::new(9, 10)), None);
    }

    #[test]
    fn test_fill_layer() {
        let mut display = display();
        fill_layer(&mut display, Rectangle::new(Point::new(2, 2), Size::new(3, 3)), BLACK);
        assert_eq!(display.get_pixel(Point::new(4, 4)), Some(BLACK));
        assert_eq!(display.get_pixel(Point::new(5, 4)), None);
    }
}
