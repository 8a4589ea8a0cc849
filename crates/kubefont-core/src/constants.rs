// Shared scene and interaction tuning constants.

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_TEXT_Y_OFFSET: f32 = -200.0; // camera sits below the text

// Fog
pub const FOG_DENSITY: f32 = 0.0025;

// Text
pub const TEXT_SIZE: f32 = 70.0;
pub const TEXT_DEPTH: f32 = 10.0;
pub const TEXT_CURVE_SEGMENTS: usize = 100;
pub const TEXT_EMISSIVE_INTENSITY: f32 = 0.8;
pub const TEXT_SHININESS: f32 = 30.0;
pub const TEXT_SPECULAR: u32 = 0x111111;

// Cubes
pub const CUBE_SIZE: f32 = 20.0;
pub const CUBE_EMISSIVE_INTENSITY: f32 = 0.2;
pub const SCATTERING_LEVEL: f32 = 400.0; // spread volume edge before scaling

// Light
pub const LIGHT_COLOR: u32 = 0xffffff;
pub const LIGHT_INTENSITY: f32 = 2.0;

// Pointer mapping
pub const POINTER_PAN_SPEED: f32 = 0.2;
pub const POINTER_ROTATE_SPEED: f32 = 0.001;

// Orientation mapping
pub const ORIENTATION_ANGLE_OFFSET: f32 = 150.0;
pub const ORIENTATION_WRAP: f32 = 360.0;
pub const ORIENTATION_PAN_SPEED: f32 = 0.5;
pub const ORIENTATION_ROTATE_SPEED: f32 = 0.05;
