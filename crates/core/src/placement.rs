use crate::{CoreError, CoreResult, Vec3};

/// Uniform scale followed by a translation, applied to positions only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub scale: f32,
    pub offset: Vec3,
}

impl Placement {
    #[inline]
    pub const fn identity() -> Self {
        Self {
            scale: 1.0,
            offset: Vec3::ZERO,
        }
    }

    pub fn new(scale: f32, offset: Vec3) -> CoreResult<Self> {
        if !scale.is_finite() {
            return Err(CoreError::NonFiniteScale(scale));
        }
        if !offset.is_finite() {
            return Err(CoreError::NonFiniteOffset(offset));
        }
        Ok(Self { scale, offset })
    }

    /// Placement that moves a box with the given `center` and `extent` to
    /// the origin and scales its largest extent to `size`. A flat or
    /// point-like box only gets centred.
    pub fn fit(center: Vec3, extent: Vec3, size: f32) -> CoreResult<Self> {
        if !(size.is_finite() && size > 0.0) {
            return Err(CoreError::InvalidFitSize(size));
        }
        let largest = extent.max_element();
        let scale = if largest > f32::EPSILON {
            size / largest
        } else {
            1.0
        };
        Self::new(scale, -center * scale)
    }

    /// `p * scale + offset`
    #[inline]
    pub fn apply(&self, p: Vec3) -> Vec3 {
        p * self.scale + self.offset
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::identity()
    }
}
