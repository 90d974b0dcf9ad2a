use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;
use crate::materials::color::Color;
use crate::materials::material::reflect;
use crate::scene::light::Light;
use crate::scene::scene_object::SceneObject;

use super::context::RenderContext;
use super::resolver::resolve;

// secondary rays start slightly off the surface to avoid hitting it again
pub const SELF_HIT: f64 = 2e-3;

// the central recursive shading function: direct lighting for every light in
// the scene plus reflected and transmitted contributions while the depth
// budget lasts
pub fn shade(context: &RenderContext, object: &SceneObject, eye: &Vector3, at: &Vector3, normal: &Vector3, depth: u32) -> Color {
    let options = context.options();
    let material = object.material();

    let mut reflect_color = Color::black();
    let mut transmit_color = Color::black();

    if !material.reflective.is_black() && depth < options.max_depth && options.reflection {
        reflect_color = reflected_color(context, eye, at, normal, depth);
    }

    if !material.transmissive.is_black() && depth < options.max_depth && options.transmission {
        transmit_color = transmitted_color(context, object, eye, at, normal, depth);
    }

    let mut direct_color = Color::black();

    for light in context.scene().lights() {
        if let Light::Ambient(ambient) = light {
            if options.ambient {
                direct_color = direct_color + *ambient.color() * material.ambient;
            }
            continue;
        }

        let (to_light, light_distance, maybe_lit) = match light {
            Light::Directional(directional) => {
                ((*directional.direction() * -1.0).normalized(), None, true)
            },
            Light::Point(point) => {
                let towards = *point.position() - *at;
                (towards.normalized(), Some(towards.length()), true)
            },
            Light::Spot(spot) => {
                let towards = *spot.position() - *at;
                let distance = towards.length();
                let direction = towards.normalized();
                let facing = (*spot.direction() * -1.0).normalized();
                let within_cone = direction.dot_product(&facing).acos() <= spot.cutoff().to_radians();
                (direction, Some(distance), within_cone)
            },
            Light::Ambient(_) => continue,
        };

        if !maybe_lit {
            continue;
        }

        let mut shadow_opacity = Color::black();
        let mut shadowed = false;
        if options.shadows {
            let shadow_ray = Ray::with_interval(*at, to_light, SELF_HIT, light_distance);
            shadowed = resolve(context, &shadow_ray, Some(&mut shadow_opacity)).is_some();
        }

        if shadowed && !options.shadow_transparency {
            continue;
        }

        let light_color = *light.color();
        let to_eye = (*eye - *at).normalized();

        let mut surface_normal = *normal;
        let mut diffuse_dot = surface_normal.dot_product(&to_light);
        if diffuse_dot < 0.0 && options.allow_back_hits && object.is_two_sided() {
            // light arriving on the back of an inconsistently wound face
            surface_normal = surface_normal * -1.0;
            diffuse_dot = -diffuse_dot;
        }

        if diffuse_dot > 0.0 {
            let mut this_light_color = Color::black();

            if options.diffuse {
                this_light_color = this_light_color + (light_color * material.diffuse * diffuse_dot).clamped();
            }

            let reflected_light = surface_normal * (2.0 * diffuse_dot) - to_light;
            let rdotv = reflected_light.dot_product(&to_eye);
            if rdotv > 0.0 && options.specular {
                this_light_color = this_light_color + (light_color * material.specular * rdotv.powf(material.shininess)).clamped();
            }

            if options.shadow_transparency {
                this_light_color = this_light_color * (Color::white() - shadow_opacity);
            }

            direct_color = (direct_color + this_light_color).clamped();
        }
    }

    let mut color = direct_color;
    if !reflect_color.is_black() {
        color = color + reflect_color * material.reflective;
    }
    if !transmit_color.is_black() {
        color = color * (Color::white() - material.transmissive) + transmit_color * material.transmissive;
    }

    color.clamped()
}

fn reflected_color(context: &RenderContext, eye: &Vector3, at: &Vector3, normal: &Vector3, depth: u32) -> Color {
    let to_eye = (*eye - *at).normalized();
    let direction = reflect(&to_eye, normal).normalized();
    let ray = Ray::with_interval(*at, direction, SELF_HIT, None);

    match resolve(context, &ray, None) {
        Some(hit) => shade(context, hit.object(), at, hit.intersection().point(), hit.intersection().normal(), depth + 1),
        None => *context.background(),
    }
}

fn transmitted_color(context: &RenderContext, object: &SceneObject, eye: &Vector3, at: &Vector3, normal: &Vector3, depth: u32) -> Color {
    let material = object.material();
    let incident = (*at - *eye).normalized();
    let mut direction = incident;

    if material.refraction > 0.0 && context.options().refraction {
        direction = if context.options().schlick_refraction {
            schlick_refract(&incident, normal, material.refraction)
        } else {
            refract(&incident, normal, material.refraction)
        };
    }

    let ray = Ray::with_interval(*at, direction, SELF_HIT, None);

    match resolve(context, &ray, None) {
        Some(hit) => shade(context, hit.object(), at, hit.intersection().point(), hit.intersection().normal(), depth + 1),
        None => *context.background(),
    }
}

// bends `incident` by Snell's law; a negative radicand means total internal
// reflection and the ray is mirrored instead
pub fn refract(incident: &Vector3, normal: &Vector3, index_of_refraction: f64) -> Vector3 {
    let mut n = *normal;
    let vi = incident.normalized();
    let mut vi_dot_n = vi.dot_product(&n);

    let (eta_i, eta_r) = if vi_dot_n < 0.0 {
        // entering the medium
        (1.0, index_of_refraction)
    } else {
        // leaving it: flip the working normal and swap the index ratio
        n = n * -1.0;
        vi_dot_n = -vi_dot_n;
        (index_of_refraction, 1.0)
    };

    let radicand = 1.0 - (eta_i * eta_i) * (1.0 - vi_dot_n * vi_dot_n) / (eta_r * eta_r);
    if radicand >= 0.0 {
        (vi - n * vi_dot_n) * (eta_i / eta_r) - n * radicand.sqrt()
    } else {
        reflect(&(vi * -1.0), &n)
    }
}

// Schlick's approximation picks between reflecting and refracting based on a
// reflectance probability
pub fn schlick_refract(incident: &Vector3, normal: &Vector3, index_of_refraction: f64) -> Vector3 {
    let refraction_ratio = 1.0 / index_of_refraction;
    let vi = incident.normalized();

    let cos_theta = vi.dot_product(normal).min(1.0);
    let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
    let cannot_refract = refraction_ratio * sin_theta > 1.0;

    let r0 = ((1.0 - refraction_ratio) / (1.0 + refraction_ratio)).powi(2);
    let reflectance = r0 + (1.0 - r0) * (1.0 - cos_theta).powi(5);

    if cannot_refract || reflectance > rand::random::<f64>() {
        reflect(&(vi * -1.0), normal)
    } else {
        refract(incident, normal, refraction_ratio)
    }
}

#[cfg(test)]
mod tests {
    use crate::materials::material::Material;
    use crate::objects::plane::Plane;
    use crate::objects::sphere::Sphere;
    use crate::scene::ambient_light::AmbientLight;
    use crate::scene::camera::Camera;
    use crate::scene::directional_light::DirectionalLight;
    use crate::scene::scene::Scene;
    use crate::scene::scene_object::Shape;
    use crate::scene::spot_light::SpotLight;
    use crate::render::options::RenderOptions;

    use super::*;

    fn shade_front_of_sphere(scene: Scene) -> Color {
        let context = RenderContext::new(scene, RenderOptions::default());
        let ray = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, -1.0));
        let hit = resolve(&context, &ray, None).unwrap();
        shade(&context, hit.object(), &Vector3::zero(), hit.intersection().point(), hit.intersection().normal(), 0)
    }

    #[test]
    fn test_ambient_only_round_trip() {
        let mut scene = Scene::new(Camera::default());
        let material = Material::default().with_ambient(Color::new(0.2, 0.2, 0.2));
        scene.add_object(material, Shape::Sphere(Sphere::new(Vector3::new(0.0, 0.0, -5.0), 1.0)));
        scene.add_light(Light::Ambient(AmbientLight::new(Color::white())));

        assert_eq!(shade_front_of_sphere(scene), Color::new(0.2, 0.2, 0.2));
    }

    #[test]
    fn test_directional_light_shades_red_sphere() {
        let mut scene = Scene::new(Camera::default());
        let material = Material::default().with_diffuse(Color::new(1.0, 0.0, 0.0));
        scene.add_object(material, Shape::Sphere(Sphere::new(Vector3::new(0.0, 0.0, -5.0), 1.0)));
        // pointing away from the camera, straight at the sphere's near side
        scene.add_light(Light::Directional(DirectionalLight::new(Color::white(), Vector3::new(0.0, 0.0, -1.0))));

        assert_eq!(shade_front_of_sphere(scene), Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_spot_light_outside_cone_contributes_nothing() {
        let mut scene = Scene::new(Camera::default());
        let material = Material::default()
            .with_ambient(Color::new(0.1, 0.1, 0.1))
            .with_diffuse(Color::new(1.0, 1.0, 1.0));
        scene.add_object(material, Shape::Sphere(Sphere::new(Vector3::new(0.0, 0.0, -5.0), 1.0)));
        scene.add_light(Light::Ambient(AmbientLight::new(Color::white())));
        // the spot sits between camera and sphere but faces sideways, with a
        // 10 degree cone the hit point is far outside it
        scene.add_light(Light::Spot(SpotLight::new(Color::white(), Vector3::new(0.0, 0.0, -2.0), Vector3::new(1.0, 0.0, 0.0), 10.0)));

        assert_eq!(shade_front_of_sphere(scene), Color::new(0.1, 0.1, 0.1));
    }

    #[test]
    fn test_spot_light_inside_cone_contributes() {
        let mut scene = Scene::new(Camera::default());
        let material = Material::default().with_diffuse(Color::new(1.0, 1.0, 1.0));
        scene.add_object(material, Shape::Sphere(Sphere::new(Vector3::new(0.0, 0.0, -5.0), 1.0)));
        scene.add_light(Light::Spot(SpotLight::new(Color::white(), Vector3::new(0.0, 0.0, -2.0), Vector3::new(0.0, 0.0, -1.0), 10.0)));

        assert_eq!(shade_front_of_sphere(scene), Color::white());
    }

    #[test]
    fn test_transparent_occluder_attenuates_instead_of_blocking() {
        let mut scene = Scene::new(Camera::default());
        let material = Material::default().with_diffuse(Color::new(1.0, 1.0, 1.0));
        scene.add_object(material, Shape::Sphere(Sphere::new(Vector3::new(0.0, 0.0, -5.0), 1.0)));
        // a mostly transparent pane behind the camera, between the light and
        // the sphere
        let pane = Material::default().with_transmissive(Color::new(0.75, 0.75, 0.75), 0.0);
        scene.add_object(pane, Shape::Plane(Plane::new(Vector3::new(0.0, 0.0, 2.0), Vector3::new(0.0, 0.0, 1.0))));
        scene.add_light(Light::Directional(DirectionalLight::new(Color::white(), Vector3::new(0.0, 0.0, -1.0))));

        assert_eq!(shade_front_of_sphere(scene), Color::new(0.75, 0.75, 0.75));
    }

    #[test]
    fn test_opaque_occluder_blocks_binary_shadows() {
        let mut scene = Scene::new(Camera::default());
        let material = Material::default()
            .with_ambient(Color::new(0.1, 0.1, 0.1))
            .with_diffuse(Color::new(1.0, 1.0, 1.0));
        scene.add_object(material, Shape::Sphere(Sphere::new(Vector3::new(0.0, 0.0, -5.0), 1.0)));
        scene.add_object(Material::default(), Shape::Plane(Plane::new(Vector3::new(0.0, 0.0, 2.0), Vector3::new(0.0, 0.0, 1.0))));
        scene.add_light(Light::Ambient(AmbientLight::new(Color::white())));
        scene.add_light(Light::Directional(DirectionalLight::new(Color::white(), Vector3::new(0.0, 0.0, -1.0))));

        let mut options = RenderOptions::default();
        options.shadow_transparency = false;

        let context = RenderContext::new(scene, options);
        let ray = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, -1.0));
        let hit = resolve(&context, &ray, None).unwrap();
        let color = shade(&context, hit.object(), &Vector3::zero(), hit.intersection().point(), hit.intersection().normal(), 0);

        // only the ambient term survives
        assert_eq!(color, Color::new(0.1, 0.1, 0.1));
    }

    #[test]
    fn test_facing_mirrors_stop_at_the_depth_budget() {
        let mut scene = Scene::new(Camera::default());
        let mirror = Material::default().with_reflective(Color::white());
        scene.add_object(mirror.clone(), Shape::Plane(Plane::new(Vector3::new(0.0, 0.0, -10.0), Vector3::new(0.0, 0.0, 1.0))));
        scene.add_object(mirror, Shape::Plane(Plane::new(Vector3::new(0.0, 0.0, 10.0), Vector3::new(0.0, 0.0, -1.0))));
        scene.add_light(Light::Ambient(AmbientLight::new(Color::white())));

        let context = RenderContext::new(scene, RenderOptions::default());
        let ray = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, -1.0));
        let hit = resolve(&context, &ray, None).unwrap();

        // terminates because the recursion is bounded, and stays in range
        let color = shade(&context, hit.object(), &Vector3::zero(), hit.intersection().point(), hit.intersection().normal(), 0);
        assert!(color.red >= 0.0 && color.red <= 1.0);
    }

    #[test]
    fn test_refract_entering_bends_towards_normal() {
        let incident = Vector3::new(1.0, -1.0, 0.0).normalized();
        let normal = Vector3::new(0.0, 1.0, 0.0);

        let refracted = refract(&incident, &normal, 1.5);
        // snell: sin(theta_r) = sin(45 degrees) / 1.5
        let expected_sin = (45.0f64).to_radians().sin() / 1.5;
        assert!((refracted.x - expected_sin).abs() < 1e-9);
        assert!(refracted.y < 0.0);
        assert!((refracted.length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_refract_total_internal_reflection() {
        // leaving a dense medium at a grazing angle, the incident direction
        // points to the same side as the stored surface normal
        let incident = Vector3::new(1.0, 0.2, 0.0).normalized();
        let normal = Vector3::new(0.0, 1.0, 0.0);

        let refracted = refract(&incident, &normal, 1.5);
        // mirrored back into the medium: x keeps going, y flips
        assert_eq!(refracted, Vector3::new(incident.x, -incident.y, 0.0));
    }

    #[test]
    fn test_reflection_picks_up_the_mirrored_object() {
        let mut scene = Scene::new(Camera::default());
        let mirror = Material::default().with_reflective(Color::white());
        scene.add_object(mirror, Shape::Plane(Plane::new(Vector3::new(0.0, -1.0, 0.0), Vector3::new(0.0, 1.0, 0.0))));
        let glow = Material::default().with_ambient(Color::new(0.0, 0.3, 0.0));
        scene.add_object(glow, Shape::Sphere(Sphere::new(Vector3::new(0.0, 1.0, -10.0), 1.0)));
        scene.add_light(Light::Ambient(AmbientLight::new(Color::white())));

        let context = RenderContext::new(scene, RenderOptions::default());
        // aimed at the mirror floor so the bounce goes up towards the sphere
        let ray = Ray::new(Vector3::new(0.0, 1.0, 0.0), Vector3::new(0.0, -2.0, -5.0).normalized());
        let hit = resolve(&context, &ray, None).unwrap();
        assert!(hit.object().is_plane());

        let color = shade(&context, hit.object(), &Vector3::new(0.0, 1.0, 0.0), hit.intersection().point(), hit.intersection().normal(), 0);
        assert!(color.green > 0.0);
        assert_eq!(color.red, 0.0);
    }
}
