use serde::Deserialize;

pub type Color = [u8; 3];

/// Color and material settings, passed through to the renderer untouched.
/// The only thing this crate reads out of it is the per-vendor trail color.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub building_color: Color,
    pub trail_color_0: Color,
    pub trail_color_1: Color,
    pub point_color: Color,
    pub material: Material,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Material {
    pub ambient: f64,
    pub diffuse: f64,
    pub shininess: f64,
    pub specular_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            building_color: [74, 80, 87],
            trail_color_0: [253, 128, 93],
            trail_color_1: [23, 184, 190],
            point_color: [255, 255, 255],
            material: Material::default(),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: 0.1,
            diffuse: 0.6,
            shininess: 32.0,
            specular_color: [60, 64, 70],
        }
    }
}

impl Theme {
    pub fn trail_color(&self, vendor: model::Vendor) -> Color {
        if vendor == model::Vendor(0) {
            self.trail_color_0
        } else {
            self.trail_color_1
        }
    }
}
