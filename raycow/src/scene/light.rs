use crate::materials::color::Color;

use super::ambient_light::AmbientLight;
use super::directional_light::DirectionalLight;
use super::point_light::PointLight;
use super::spot_light::SpotLight;

#[derive(Clone)]
pub enum Light {
    Ambient(AmbientLight),
    Directional(DirectionalLight),
    Point(PointLight),
    Spot(SpotLight),
}

impl Light {

    // for ambient lights this is ia, for every other kind it is both id and is
    pub fn color(&self) -> &Color {
        match self {
            Light::Ambient(light) => light.color(),
            Light::Directional(light) => light.color(),
            Light::Point(light) => light.color(),
            Light::Spot(light) => light.color(),
        }
    }
}
