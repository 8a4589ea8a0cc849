mod common;

use common::*;
use glam::Vec3;
use kubefont_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::PI;

fn build(config: &KubefontConfig, seed: u64) -> SceneParts {
    let mut rng = StdRng::seed_from_u64(seed);
    build_scene(config, &blocky_font(), 16.0 / 9.0, &mut rng)
}

fn hello(particles: usize) -> KubefontConfig {
    let mut cfg = KubefontConfig::new("HELLO", "/font.json");
    cfg.particles_number = particles;
    cfg
}

#[test]
fn hello_with_five_particles() {
    let parts = build(&hello(5), 1);
    let scene = &parts.scene;
    assert_eq!(scene.meshes_of(MeshKind::Text).count(), 1);
    assert_eq!(scene.meshes_of(MeshKind::Cube).count(), 5);
    assert_eq!(scene.lights().count(), 1);
    assert_eq!(scene.objects().len(), 7);
}

#[test]
fn default_particle_count_is_fifty() {
    let parts = build(&KubefontConfig::new("HELLO", "/font.json"), 2);
    assert_eq!(parts.scene.meshes_of(MeshKind::Cube).count(), 50);
}

#[test]
fn zero_particles_leaves_text_and_light() {
    let parts = build(&hello(0), 3);
    assert_eq!(parts.scene.meshes_of(MeshKind::Cube).count(), 0);
    assert_eq!(parts.scene.objects().len(), 2);
}

#[test]
fn cubes_stay_inside_scatter_volume() {
    let mut cfg = hello(500);
    cfg.scattering = 0.75;
    let half = 400.0 * 0.75 / 2.0;
    let parts = build(&cfg, 4);
    for cube in parts.scene.meshes_of(MeshKind::Cube) {
        let p = cube.transform.position;
        let r = cube.transform.rotation;
        for c in p.to_array() {
            assert!((-half..=half).contains(&c), "position {p:?} outside ±{half}");
        }
        for a in r.to_array() {
            assert!((0.0..=PI).contains(&a), "rotation {r:?} outside [0, PI]");
        }
        assert_eq!(cube.transform.scale, Vec3::ONE);
    }
}

#[test]
fn cubes_share_one_box_geometry() {
    let parts = build(&hello(8), 5);
    let mut ids = parts.scene.meshes_of(MeshKind::Cube).map(|m| m.geometry);
    let first = ids.next().unwrap();
    assert!(ids.all(|id| id == first));
    let cube = parts.scene.geometry(first);
    let (lo, hi) = cube.bounding_box().unwrap();
    assert_eq!(hi - lo, Vec3::splat(20.0));
}

#[test]
fn same_seed_same_layout() {
    let a = build(&hello(10), 42);
    let b = build(&hello(10), 42);
    let pa: Vec<_> = a.scene.meshes_of(MeshKind::Cube).map(|m| m.transform).collect();
    let pb: Vec<_> = b.scene.meshes_of(MeshKind::Cube).map(|m| m.transform).collect();
    assert_eq!(pa, pb);
}

#[test]
fn text_is_centered_at_origin() {
    let parts = build(&hello(0), 6);
    let text = parts.scene.meshes_of(MeshKind::Text).next().unwrap();
    assert_eq!(text.transform.position, Vec3::ZERO);
    let geometry = parts.scene.geometry(text.geometry);
    assert!(!geometry.is_empty());
    let (lo, hi) = geometry.bounding_box().unwrap();
    assert!((lo + hi).length() < 1e-3);
    // "HELLO" is wider than it is tall at size 70
    assert!(hi.x - lo.x > hi.y - lo.y);
    assert!((hi.z - lo.z - 10.0).abs() < 1e-4);
}

#[test]
fn camera_sits_below_text_at_configured_distance() {
    let mut cfg = hello(1);
    cfg.camera_distance = 250.0;
    let parts = build(&cfg, 7);
    assert_eq!(parts.camera.position, Vec3::new(0.0, -200.0, 250.0));
    assert_eq!(parts.camera.fov_y_degrees, 75.0);
    assert_eq!(parts.camera.znear, 0.1);
    assert_eq!(parts.camera.zfar, 1000.0);
    assert!((parts.camera.aspect - 16.0 / 9.0).abs() < 1e-6);
}

#[test]
fn light_points_along_camera_direction() {
    let parts = build(&hello(1), 8);
    let light = parts.scene.lights().next().unwrap();
    assert_eq!(light.color, Color::WHITE);
    assert_eq!(light.intensity, 2.0);
    assert!((light.position.length() - 1.0).abs() < 1e-5);
    let expected = Vec3::new(0.0, -200.0, 400.0).normalize();
    assert!((light.position - expected).length() < 1e-5);
}

#[test]
fn background_drives_fog() {
    let mut cfg = hello(0);
    cfg.background_color = Color::from_hex(0x223344);
    let parts = build(&cfg, 9);
    assert_eq!(parts.scene.background, Some(Color::from_hex(0x223344)));
    let fog = parts.scene.fog.unwrap();
    assert_eq!(fog.color.hex(), 0x223344);
    assert_eq!(fog.density, 0.0025);
    assert_eq!(fog.factor(0.0), 0.0);
    assert!(fog.factor(400.0) > 0.6 && fog.factor(400.0) < 0.7);
}

#[test]
fn materials_follow_configured_colors() {
    let mut cfg = hello(1);
    cfg.text_color = Color::from_hex(0xff0000);
    cfg.cubes_color = Color::from_hex(0x00ff00);
    let parts = build(&cfg, 10);
    let text = parts.scene.meshes_of(MeshKind::Text).next().unwrap();
    assert_eq!(text.material.color.hex(), 0xff0000);
    assert_eq!(text.material.emissive.hex(), 0xff0000);
    assert_eq!(text.material.emissive_intensity, 0.8);
    assert!(matches!(text.material.shading, Shading::Phong { .. }));
    let cube = parts.scene.meshes_of(MeshKind::Cube).next().unwrap();
    assert_eq!(cube.material.color.hex(), 0x00ff00);
    assert_eq!(cube.material.emissive_intensity, 0.2);
    assert_eq!(cube.material.shading, Shading::Lambert);
}

#[test]
fn unknown_characters_do_not_break_assembly() {
    let font = Font::from_json(&typeface_json(false)).unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let parts = build_scene(&KubefontConfig::new("###", "/f"), &font, 1.0, &mut rng);
    let text = parts.scene.meshes_of(MeshKind::Text).next().unwrap();
    assert!(parts.scene.geometry(text.geometry).is_empty());
    assert_eq!(parts.scene.meshes_of(MeshKind::Cube).count(), 50);
}

#[test]
fn transform_matrix_places_and_rotates() {
    let t = Transform {
        position: Vec3::new(1.0, 2.0, 3.0),
        rotation: Vec3::new(0.0, 0.0, PI / 2.0),
        scale: Vec3::ONE,
    };
    let p = t.matrix().transform_point3(Vec3::X);
    assert!((p - Vec3::new(1.0, 3.0, 3.0)).length() < 1e-5);
}
