use texrip_image::Image;

use crate::error::ImgprocError;
use crate::flip::flip;
use crate::rotate::rotate90;

/// Rotation applied to an extracted texture, in quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    /// No rotation.
    #[default]
    None,
    /// 90 degrees.
    Deg90,
    /// 180 degrees.
    Deg180,
    /// 270 degrees.
    Deg270,
}

impl Rotation {
    /// Parse a rotation from whole degrees; only 0, 90, 180 and 270 are
    /// representable.
    pub fn from_degrees(degrees: u32) -> Option<Self> {
        match degrees {
            0 => Some(Self::None),
            90 => Some(Self::Deg90),
            180 => Some(Self::Deg180),
            270 => Some(Self::Deg270),
            _ => None,
        }
    }

    /// The number of clockwise quarter turns.
    pub fn quarter_turns(self) -> usize {
        match self {
            Self::None => 0,
            Self::Deg90 => 1,
            Self::Deg180 => 2,
            Self::Deg270 => 3,
        }
    }
}

/// Post-extraction orientation of a texture.
///
/// Rotation is applied first, as repeated clockwise 90-degree steps, then
/// the flips about the rotated buffer's own axes. The flips commute with
/// each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Orientation {
    /// Clockwise rotation in quarter turns.
    pub rotation: Rotation,
    /// Mirror columns after rotating.
    pub flip_x: bool,
    /// Mirror rows after rotating.
    pub flip_y: bool,
}

/// Apply an [`Orientation`] to a raster, producing a new buffer.
///
/// # Example
///
/// ```
/// use texrip_image::{Image, ImageSize};
/// use texrip_imgproc::transform::{apply_orientation, Orientation, Rotation};
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     vec![1u8, 2],
/// )
/// .unwrap();
///
/// let oriented = apply_orientation(
///     &image,
///     &Orientation {
///         rotation: Rotation::Deg180,
///         flip_x: false,
///         flip_y: false,
///     },
/// )
/// .unwrap();
///
/// assert_eq!(oriented.as_slice(), &[2u8, 1]);
/// ```
pub fn apply_orientation<T, const C: usize>(
    src: &Image<T, C>,
    orientation: &Orientation,
) -> Result<Image<T, C>, ImgprocError>
where
    T: Copy + Default + Send + Sync,
{
    let mut dst = src.clone();
    for _ in 0..orientation.rotation.quarter_turns() {
        dst = rotate90(&dst, true)?;
    }
    if orientation.flip_x || orientation.flip_y {
        dst = flip(&dst, orientation.flip_x, orientation.flip_y)?;
    }
    Ok(dst)
}
