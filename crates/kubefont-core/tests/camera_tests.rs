use glam::{Vec3, Vec4};
use kubefont_core::*;

#[test]
fn view_matrix_moves_camera_to_origin() {
    let mut camera = PerspectiveCamera::standard(1.0);
    camera.position = Vec3::new(5.0, -200.0, 400.0);
    let p = camera.view_matrix().transform_point3(camera.position);
    assert!(p.length() < 1e-3);
}

#[test]
fn unrotated_camera_looks_down_negative_z() {
    let mut camera = PerspectiveCamera::standard(1.0);
    camera.position = Vec3::new(0.0, 0.0, 400.0);
    let clip = camera.view_projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
    assert!((clip.w - 400.0).abs() < 1e-3);
}

#[test]
fn pitch_up_moves_target_down_on_screen() {
    let mut camera = PerspectiveCamera::standard(1.0);
    camera.position = Vec3::new(0.0, 0.0, 400.0);
    camera.rotation.x = 0.1;
    let clip = camera.view_projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(clip.y / clip.w < 0.0);
}

#[test]
fn bad_aspect_falls_back_to_square() {
    let mut camera = PerspectiveCamera::standard(f32::NAN);
    assert_eq!(camera.aspect, 1.0);
    camera.set_aspect(0.0);
    assert_eq!(camera.aspect, 1.0);
    camera.set_aspect(2.0);
    assert_eq!(camera.aspect, 2.0);
}
