use crate::color::Rgb;
use crate::constants::*;

/// Translucent clear-coated surface shared by every heart.
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicalMaterial {
    pub color: Rgb,
    pub metalness: f32,
    pub roughness: f32,
    pub transmission: f32,
    pub thickness: f32,
    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
    pub ior: f32,
    pub opacity: f32,
    pub transparent: bool,
}

impl Default for PhysicalMaterial {
    fn default() -> Self {
        Self {
            color: Rgb::from_hex(MATERIAL_COLOR),
            metalness: MATERIAL_METALNESS,
            roughness: MATERIAL_ROUGHNESS,
            transmission: MATERIAL_TRANSMISSION,
            thickness: MATERIAL_THICKNESS,
            clearcoat: MATERIAL_CLEARCOAT,
            clearcoat_roughness: MATERIAL_CLEARCOAT_ROUGHNESS,
            ior: MATERIAL_IOR,
            opacity: MATERIAL_OPACITY,
            transparent: true,
        }
    }
}

impl PhysicalMaterial {
    /// Normal-incidence reflectance for a dielectric with this ior.
    pub fn f0(&self) -> f32 {
        let r = (self.ior - 1.0) / (self.ior + 1.0);
        r * r
    }
}
