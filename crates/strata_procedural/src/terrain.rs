//! # Terrain Function
//!
//! Pure mapping from world coordinates to a material.
//!
//! ## Height
//!
//! Two sinusoids over the world X/Z column, truncated toward zero and
//! lifted by [`BASE_HEIGHT`]:
//!
//! ```text
//! h = 10 + trunc(sin(0.1x + 0.1z) * 2 + cos(0.3x + 0.2z) * 2)
//! ```
//!
//! ## Determinism Guarantee
//!
//! No seed, no randomness, no state. The same coordinates always give
//! **exactly** the same material.

use strata_shared::Material;

/// Surface elevation before the sinusoidal offset. Lifts the world so
/// that Y = 0 sits below the surface.
pub const BASE_HEIGHT: i64 = 10;

/// X/Z frequencies of the sine term.
pub const SINE_FREQUENCY: (f64, f64) = (0.1, 0.1);

/// X/Z frequencies of the cosine term.
pub const COSINE_FREQUENCY: (f64, f64) = (0.3, 0.2);

/// Amplitude applied to both terms.
pub const AMPLITUDE: f64 = 2.0;

/// Dirt layers between the surface and stone.
pub const DIRT_DEPTH: i64 = 3;

/// World Y that is always stone.
pub const FLOOR_Y: i64 = 0;

/// Signed offset of the surface from [`BASE_HEIGHT`], in `[-4, 4]`.
#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn surface_offset(world_x: i64, world_z: i64) -> i64 {
    let x = world_x as f64;
    let z = world_z as f64;
    let wave = (x * SINE_FREQUENCY.0 + z * SINE_FREQUENCY.1).sin() * AMPLITUDE
        + (x * COSINE_FREQUENCY.0 + z * COSINE_FREQUENCY.1).cos() * AMPLITUDE;
    // `as` truncates toward zero.
    wave as i64
}

/// Surface height of the world column at (`world_x`, `world_z`).
#[inline]
#[must_use]
pub fn height(world_x: i64, world_z: i64) -> i64 {
    BASE_HEIGHT + surface_offset(world_x, world_z)
}

/// Classifies `world_y` in a column whose surface is at `surface`.
///
/// Gives the same answer as [`material_at`] for any voxel in that column.
#[inline]
#[must_use]
pub const fn column_material(surface: i64, world_y: i64) -> Material {
    if world_y == FLOOR_Y {
        // Floor wins over every layer.
        return Material::Stone;
    }
    if world_y < surface - DIRT_DEPTH {
        Material::Stone
    } else if world_y < surface {
        Material::Dirt
    } else if world_y == surface {
        Material::Grass
    } else {
        Material::Air
    }
}

/// Material of the voxel at world (`world_x`, `world_y`, `world_z`).
#[inline]
#[must_use]
pub fn material_at(world_x: i64, world_y: i64, world_z: i64) -> Material {
    column_material(height(world_x, world_z), world_y)
}
