use std::collections::HashMap;

#[derive(Clone)]
pub struct RenderOptions {
    pub ambient: bool,
    pub diffuse: bool,
    pub specular: bool,
    pub shadows: bool,
    pub reflection: bool,
    pub transmission: bool,
    pub refraction: bool,
    // transmissive occluders attenuate shadows instead of fully blocking them
    pub shadow_transparency: bool,
    pub acceleration: bool,
    pub allow_back_hits: bool,
    pub schlick_refraction: bool,
    pub outline_shading: bool,
    pub sketch_shading: bool,
    pub supersampling: bool,
    pub max_depth: u32,
}

impl RenderOptions {

    pub fn default() -> Self {
        Self {
            ambient: true,
            diffuse: true,
            specular: true,
            shadows: true,
            reflection: true,
            transmission: true,
            refraction: true,
            shadow_transparency: true,
            acceleration: true,
            allow_back_hits: true,
            schlick_refraction: false,
            outline_shading: false,
            sketch_shading: false,
            supersampling: true,
            max_depth: 8,
        }
    }

    pub fn from_options(options: &HashMap<String, String>) -> Self {
        let defaults = Self::default();

        Self {
            ambient: !options.contains_key("no-ambient"),
            diffuse: !options.contains_key("no-diffuse"),
            specular: !options.contains_key("no-specular"),
            shadows: !options.contains_key("no-shadows"),
            reflection: !options.contains_key("no-reflection"),
            transmission: !options.contains_key("no-transmission"),
            refraction: !options.contains_key("no-refraction"),
            shadow_transparency: !options.contains_key("no-shadow-transparency"),
            acceleration: !options.contains_key("no-acceleration"),
            allow_back_hits: !options.contains_key("no-back-hits"),
            schlick_refraction: options.contains_key("schlick-refraction"),
            outline_shading: options.contains_key("outline-shading"),
            sketch_shading: options.contains_key("sketch-shading"),
            supersampling: !options.contains_key("no-supersampling"),
            max_depth: options.get("max-depth").and_then(|v| v.parse().ok()).unwrap_or(defaults.max_depth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert!(options.shadow_transparency);
        assert!(options.acceleration);
        assert!(!options.schlick_refraction);
        assert!(!options.outline_shading);
        assert_eq!(options.max_depth, 8);
    }

    #[test]
    fn test_from_options() {
        let mut raw = HashMap::new();
        raw.insert("no-acceleration".to_string(), "true".to_string());
        raw.insert("sketch-shading".to_string(), "true".to_string());
        raw.insert("max-depth".to_string(), "3".to_string());

        let options = RenderOptions::from_options(&raw);
        assert!(!options.acceleration);
        assert!(options.sketch_shading);
        assert_eq!(options.max_depth, 3);
        assert!(options.shadows);
    }
}
