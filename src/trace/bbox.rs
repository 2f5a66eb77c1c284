use image::RgbaImage;

/// Tightest axis-aligned box around foreground pixels; both corners inclusive
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    /// Box around every `(x, y)` for which `is_foreground` holds, or `None`
    /// when nothing does
    pub fn scan(width: u32, height: u32, is_foreground: impl Fn(u32, u32) -> bool) -> Option<Self> {
        let mut bbox: Option<BoundingBox> = None;
        for y in 0..height {
            for x in 0..width {
                if !is_foreground(x, y) {
                    continue;
                }
                bbox = Some(match bbox {
                    None => BoundingBox {
                        min_x: x,
                        min_y: y,
                        max_x: x,
                        max_y: y,
                    },
                    Some(b) => BoundingBox {
                        min_x: b.min_x.min(x),
                        min_y: b.min_y,
                        max_x: b.max_x.max(x),
                        max_y: y,
                    },
                });
            }
        }
        bbox
    }

    /// Box around pixels with non-zero alpha
    pub fn of_alpha(image: &RgbaImage) -> Option<Self> {
        Self::scan(image.width(), image.height(), |x, y| {
            image.get_pixel(x, y).0[3] > 0
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_points() {
        let points = [(5, 5), (10, 12)];
        let bbox = BoundingBox::scan(20, 20, |x, y| points.contains(&(x, y))).unwrap();
        assert_eq!(
            bbox,
            BoundingBox {
                min_x: 5,
                min_y: 5,
                max_x: 10,
                max_y: 12
            }
        );
        assert_eq!((bbox.width(), bbox.height()), (6, 8));
    }

    #[test]
    fn test_empty_is_none() {
        assert_eq!(BoundingBox::scan(8, 8, |_, _| false), None);
        assert_eq!(BoundingBox::of_alpha(&RgbaImage::new(8, 8)), None);
    }

    #[test]
    fn test_alpha_box() {
        let mut image = RgbaImage::new(10, 10);
        image.put_pixel(7, 2, image::Rgba([0, 0, 0, 1]));
        image.put_pixel(3, 8, image::Rgba([0, 0, 0, 255]));
        let bbox = BoundingBox::of_alpha(&image).unwrap();
        assert_eq!((bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y), (3, 2, 7, 8));
    }
}
