//! Scene description and the one-time assembly from options.

use crate::camera::PerspectiveCamera;
use crate::color::Color;
use crate::config::KubefontConfig;
use crate::constants::*;
use crate::font::Font;
use crate::geometry::{box_geometry, text_geometry, MeshData, TextGeometryOptions};
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// XYZ Euler angles in radians.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        let r = self.rotation;
        Mat4::from_scale_rotation_translation(
            self.scale,
            Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
            self.position,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shading {
    /// Diffuse only.
    Lambert,
    /// Diffuse plus Blinn-Phong highlight.
    Phong { specular: Color, shininess: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Color,
    pub emissive: Color,
    pub emissive_intensity: f32,
    pub shading: Shading,
}

impl Material {
    pub fn text(color: Color) -> Self {
        Self {
            color,
            emissive: color,
            emissive_intensity: TEXT_EMISSIVE_INTENSITY,
            shading: Shading::Phong {
                specular: Color::from_hex(TEXT_SPECULAR),
                shininess: TEXT_SHININESS,
            },
        }
    }

    pub fn cube(color: Color) -> Self {
        Self {
            color,
            emissive: color,
            emissive_intensity: CUBE_EMISSIVE_INTENSITY,
            shading: Shading::Lambert,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Text,
    Cube,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GeometryId(usize);

#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    pub kind: MeshKind,
    pub geometry: GeometryId,
    pub material: Material,
    pub transform: Transform,
}

/// Point light without distance falloff.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneObject {
    Mesh(Mesh),
    PointLight(PointLight),
}

/// Exponential-squared fog: `1 - exp(-(density * depth)^2)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub color: Color,
    pub density: f32,
}

impl Fog {
    pub fn factor(&self, depth: f32) -> f32 {
        let d = self.density * depth;
        (1.0 - (-d * d).exp()).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub background: Option<Color>,
    pub fog: Option<Fog>,
    geometries: Vec<MeshData>,
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_geometry(&mut self, mesh: MeshData) -> GeometryId {
        self.geometries.push(mesh);
        GeometryId(self.geometries.len() - 1)
    }

    #[inline]
    pub fn geometry(&self, id: GeometryId) -> &MeshData {
        &self.geometries[id.0]
    }

    pub fn geometries(&self) -> impl Iterator<Item = (GeometryId, &MeshData)> {
        self.geometries
            .iter()
            .enumerate()
            .map(|(i, g)| (GeometryId(i), g))
    }

    pub fn add(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    #[inline]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn meshes(&self) -> impl Iterator<Item = &Mesh> {
        self.objects.iter().filter_map(|o| match o {
            SceneObject::Mesh(m) => Some(m),
            SceneObject::PointLight(_) => None,
        })
    }

    pub fn meshes_of(&self, kind: MeshKind) -> impl Iterator<Item = &Mesh> {
        self.meshes().filter(move |m| m.kind == kind)
    }

    pub fn lights(&self) -> impl Iterator<Item = &PointLight> {
        self.objects.iter().filter_map(|o| match o {
            SceneObject::PointLight(l) => Some(l),
            SceneObject::Mesh(_) => None,
        })
    }
}

pub struct SceneParts {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
}

/// Random placement inside a cube of edge `spread` centered on the origin,
/// with each Euler angle in [0, PI].
pub fn random_transform<R: Rng + ?Sized>(rng: &mut R, spread: f32) -> Transform {
    let mut coord = || rng.gen::<f32>() * spread - spread / 2.0;
    let position = Vec3::new(coord(), coord(), coord());
    let rotation = Vec3::new(
        rng.gen::<f32>() * PI,
        rng.gen::<f32>() * PI,
        rng.gen::<f32>() * PI,
    );
    Transform {
        position,
        rotation,
        ..Transform::default()
    }
}

/// Assemble the scene: fogged background, centered text, scattered cubes and
/// one point light in the camera's direction.
pub fn build_scene<R: Rng + ?Sized>(
    config: &KubefontConfig,
    font: &Font,
    aspect: f32,
    rng: &mut R,
) -> SceneParts {
    let mut scene = Scene::new();
    scene.background = Some(config.background_color);
    scene.fog = Some(Fog {
        color: config.background_color,
        density: FOG_DENSITY,
    });

    let mut camera = PerspectiveCamera::standard(aspect);

    let mut text_mesh = text_geometry(font, &config.text, TextGeometryOptions::default());
    text_mesh.center();
    log::info!(
        "[scene] text {:?}: {} triangles",
        config.text,
        text_mesh.triangle_count()
    );
    let text_geometry_id = scene.add_geometry(text_mesh);
    let text = Mesh {
        kind: MeshKind::Text,
        geometry: text_geometry_id,
        material: Material::text(config.text_color),
        transform: Transform::default(),
    };
    camera.position = Vec3::new(
        text.transform.position.x,
        text.transform.position.y + CAMERA_TEXT_Y_OFFSET,
        config.camera_distance,
    );
    scene.add(SceneObject::Mesh(text));

    let cube_geometry = scene.add_geometry(box_geometry(CUBE_SIZE, CUBE_SIZE, CUBE_SIZE));
    let spread = config.spread();
    for _ in 0..config.particles_number {
        scene.add(SceneObject::Mesh(Mesh {
            kind: MeshKind::Cube,
            geometry: cube_geometry,
            material: Material::cube(config.cubes_color),
            transform: random_transform(rng, spread),
        }));
    }

    scene.add(SceneObject::PointLight(PointLight {
        color: Color::from_hex(LIGHT_COLOR),
        intensity: LIGHT_INTENSITY,
        position: camera.position.normalize_or_zero(),
    }));

    SceneParts { scene, camera }
}
