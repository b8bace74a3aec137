//! Terrain material identifiers.
//!
//! The numeric values are part of the wire contract: the host maps them
//! back to block types without any handshake.

use std::fmt;

use bytemuck::NoUninit;

use crate::error::ProtocolError;

/// A voxel material.
///
/// `repr(u16)` so a slice of materials can be viewed as the `u16` ids
/// that go on the wire.
#[repr(u16)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, NoUninit)]
pub enum Material {
    /// Empty space above the surface.
    #[default]
    Air = 0,
    /// Deep subsurface, and the floor at world Y = 0.
    Stone = 1,
    /// Near-surface fill.
    Dirt = 2,
    /// Surface layer.
    Grass = 3,
}

impl Material {
    /// Every material, in id order.
    pub const ALL: [Self; 4] = [Self::Air, Self::Stone, Self::Dirt, Self::Grass];

    /// Returns the wire id.
    #[inline]
    #[must_use]
    pub const fn id(self) -> u16 {
        self as u16
    }

    /// Looks up a material by wire id.
    #[inline]
    #[must_use]
    pub const fn from_id(id: u16) -> Option<Self> {
        match id {
            0 => Some(Self::Air),
            1 => Some(Self::Stone),
            2 => Some(Self::Dirt),
            3 => Some(Self::Grass),
            _ => None,
        }
    }

    /// Returns true for anything but air.
    #[inline]
    #[must_use]
    pub const fn is_solid(self) -> bool {
        !matches!(self, Self::Air)
    }

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Air => "air",
            Self::Stone => "stone",
            Self::Dirt => "dirt",
            Self::Grass => "grass",
        }
    }
}

impl TryFrom<u16> for Material {
    type Error = ProtocolError;

    fn try_from(id: u16) -> Result<Self, Self::Error> {
        Self::from_id(id).ok_or(ProtocolError::UnknownMaterial(id))
    }
}

impl From<Material> for u16 {
    fn from(material: Material) -> Self {
        material.id()
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_stable() {
        assert_eq!(Material::Air.id(), 0);
        assert_eq!(Material::Stone.id(), 1);
        assert_eq!(Material::Dirt.id(), 2);
        assert_eq!(Material::Grass.id(), 3);
    }

    #[test]
    fn test_try_from_rejects_unknown_id() {
        for material in Material::ALL {
            assert_eq!(Material::try_from(material.id()), Ok(material));
        }
        assert_eq!(
            Material::try_from(4),
            Err(ProtocolError::UnknownMaterial(4))
        );
        assert_eq!(
            Material::try_from(u16::MAX),
            Err(ProtocolError::UnknownMaterial(u16::MAX))
        );
    }

    #[test]
    fn test_slice_cast_matches_ids() {
        let materials = [Material::Grass, Material::Air, Material::Stone];
        let ids: &[u16] = bytemuck::cast_slice(&materials);
        assert_eq!(ids, &[3, 0, 1]);
    }

    #[test]
    fn test_solidity() {
        assert!(!Material::Air.is_solid());
        assert!(Material::Stone.is_solid());
        assert!(Material::Dirt.is_solid());
        assert!(Material::Grass.is_solid());
    }
}
