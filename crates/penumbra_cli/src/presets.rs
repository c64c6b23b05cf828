//! Hard-coded scenes.

use clap::ValueEnum;
use penumbra_renderer::{AreaLight, Color, DVec3, Material, Plane, Primitive, Scene, Sphere, Triangle};

const BLUE: Color = Color::new(175.0, 240.0, 240.0);
const PINK: Color = Color::new(255.0, 192.0, 203.0);
const YELLOW: Color = Color::new(255.0, 253.0, 208.0);
const WHITE: Color = Color::new(255.0, 255.0, 255.0);
const SLATE: Color = Color::new(120.0, 130.0, 150.0);
const DARK_BLUE: Color = Color::new(0.0, 0.0, 139.0);
const DEEP_BLUE: Color = Color::new(15.0, 82.0, 166.0);
const LIGHT_BLUE: Color = Color::new(137.0, 207.0, 240.0);
const PURPLE: Color = Color::new(152.0, 141.0, 242.0);

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScenePreset {
    /// Five spheres over a white floor, one glossy and one near-mirror
    Original,
    /// Four matte and shiny spheres under a light bar
    Classic,
    /// Spheres on a glossy floor in front of a mirror panel
    Showcase,
}

impl ScenePreset {
    pub fn build(self) -> Scene {
        let scene = match self {
            ScenePreset::Original => original(),
            ScenePreset::Classic => classic(),
            ScenePreset::Showcase => showcase(),
        };
        log::debug!("Built {:?} scene with {} primitives", self, scene.len());
        scene
    }

    /// Resolution the preset is framed for.
    pub fn resolution(self) -> (u32, u32) {
        match self {
            ScenePreset::Original => (1500, 1000),
            ScenePreset::Classic | ScenePreset::Showcase => (960, 540),
        }
    }
}

fn original() -> Scene {
    let sphere = |center: DVec3, radius: f64, material: Material| -> Primitive {
        Sphere::new(center, radius, material).into()
    };

    let objects: Vec<Primitive> = vec![
        sphere(
            DVec3::new(-200.0, -150.0, 2200.0),
            250.0,
            Material::new(DARK_BLUE)
                .with_specular(1000)
                .with_reflectivity(0.5)
                .with_glossiness(0.1),
        ),
        sphere(
            DVec3::new(100.0, 100.0, 1625.0),
            70.0,
            Material::new(DEEP_BLUE).with_specular(10).with_reflectivity(0.0),
        ),
        sphere(
            DVec3::new(300.0, 300.0, 1600.0),
            150.0,
            Material::new(LIGHT_BLUE).with_specular(1000).with_reflectivity(0.1),
        ),
        sphere(
            DVec3::new(-500.0, 300.0, 2300.0),
            150.0,
            Material::new(PURPLE).with_specular(1000).with_reflectivity(0.0),
        ),
        sphere(
            DVec3::new(200.0, -250.0, 1700.0),
            150.0,
            Material::new(LIGHT_BLUE).with_specular(1000).with_reflectivity(0.9),
        ),
        Plane::new(DVec3::Y, 400.0, Material::new(WHITE).with_specular(20).with_reflectivity(0.0)).into(),
    ];

    let light = AreaLight::new(
        DVec3::new(600.0, 500.0, 1200.0),
        DVec3::new(700.0, 500.0, 1200.0),
        0.8,
        25,
    );

    Scene::new(objects, light)
}

fn classic() -> Scene {
    let objects: Vec<Primitive> = vec![
        Sphere::new(DVec3::new(0.0, 0.0, 2000.0), 300.0, Material::new(BLUE).with_specular(10)).into(),
        Sphere::new(DVec3::new(-700.0, 50.0, 1700.0), 300.0, Material::new(PINK).with_specular(500)).into(),
        Sphere::new(DVec3::new(400.0, -50.0, 3000.0), 300.0, Material::new(YELLOW).with_specular(1000)).into(),
        Sphere::new(DVec3::new(-100.0, -700.0, 2200.0), 500.0, Material::new(WHITE).with_specular(1000)).into(),
    ];

    let light = AreaLight::new(
        DVec3::new(-300.0, 300.0, 2000.0),
        DVec3::new(0.0, 300.0, 1600.0),
        0.8,
        16,
    );

    Scene::new(objects, light)
}

fn showcase() -> Scene {
    let floor = Material::new(SLATE).with_reflectivity(0.15).with_glossiness(0.1);
    let mirror = Material::new(WHITE)
        .with_specular(1000)
        .with_reflectivity(0.8)
        .with_glossiness(0.02);

    let objects: Vec<Primitive> = vec![
        Plane::new(DVec3::Y, 400.0, floor).into(),
        Sphere::new(
            DVec3::new(0.0, -100.0, 2000.0),
            300.0,
            Material::new(BLUE).with_specular(10).with_reflectivity(0.2),
        )
        .into(),
        Sphere::new(
            DVec3::new(-700.0, -100.0, 2300.0),
            300.0,
            Material::new(PINK)
                .with_specular(500)
                .with_reflectivity(0.4)
                .with_glossiness(0.05),
        )
        .into(),
        Sphere::new(DVec3::new(700.0, -100.0, 2600.0), 300.0, Material::new(YELLOW).with_specular(1000)).into(),
        // Wound so the face normal points back at the camera
        Triangle::new(
            DVec3::new(-1200.0, -400.0, 3500.0),
            DVec3::new(0.0, 1200.0, 3800.0),
            DVec3::new(1200.0, -400.0, 3500.0),
            mirror,
        )
        .into(),
    ];

    let light = AreaLight::new(
        DVec3::new(-400.0, 600.0, 1500.0),
        DVec3::new(400.0, 600.0, 1500.0),
        0.7,
        24,
    );

    Scene::new(objects, light)
}
