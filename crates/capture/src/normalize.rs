use drillboard_config::SurfaceSize;
use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("degenerate surface: {width}x{height}")]
    DegenerateSurface { width: u32, height: u32 },
}

/// Map a raw pointer offset (pixels from the surface's top-left) to a
/// normalized position, each component a fraction of the surface dimension.
///
/// Raw input inside the surface yields components in [0,1]; input outside
/// is passed through unclamped. Errors only on a zero dimension, which
/// [`SurfaceSize::new`]'s floor clamp already rules out for sizes built
/// through the constructor.
pub fn normalize_point(raw: Vec2, surface: SurfaceSize) -> Result<Vec2, NormalizeError> {
    if surface.width == 0 || surface.height == 0 {
        return Err(NormalizeError::DegenerateSurface {
            width: surface.width,
            height: surface.height,
        });
    }
    Ok(Vec2::new(
        raw.x / surface.width_f32(),
        raw.y / surface.height_f32(),
    ))
}

/// Map a normalized position back to pixel coordinates on the given surface
pub fn denormalize_point(norm: Vec2, surface: SurfaceSize) -> Vec2 {
    Vec2::new(
        norm.x * surface.width_f32(),
        norm.y * surface.height_f32(),
    )
}
