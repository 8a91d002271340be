//! Scene loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-readable scene files. The file
//! format is a plain description; `SceneFile::build` turns it into a validated
//! `Scene`, a `Camera` and `RenderSettings`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::{Model, RenderSettings, Scene, Transform, Triangle};
use crate::error::{Error, Result};
use crate::rasterizer::Camera;

/// Meshes available without listing vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Builtin {
    Cube,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDef {
    pub position: Vec3,
    pub yaw_degrees: f32,
    pub pitch_degrees: f32,
}

impl Default for CameraDef {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw_degrees: 0.0,
            pitch_degrees: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDef {
    pub name: String,
    /// Use a built-in mesh; `vertices` and `triangles` are then ignored
    #[serde(default)]
    pub builtin: Option<Builtin>,
    #[serde(default)]
    pub vertices: Vec<Vec3>,
    #[serde(default)]
    pub triangles: Vec<Triangle>,
    #[serde(default)]
    pub intensities: Vec<f32>,
}

fn unit_scale() -> Vec3 {
    Vec3::ONE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceDef {
    /// Name of a model declared in the same file
    pub model: String,
    #[serde(default)]
    pub translation: Vec3,
    /// (pitch about X, yaw about Y, roll about Z), applied roll, pitch, yaw
    #[serde(default)]
    pub rotation_degrees: Vec3,
    #[serde(default = "unit_scale")]
    pub scale: Vec3,
}

impl InstanceDef {
    pub fn transform(&self) -> Transform {
        let r = self.rotation_degrees;
        let rotation = Quat::from_euler(
            EulerRot::YXZ,
            r.y.to_radians(),
            r.x.to_radians(),
            r.z.to_radians(),
        );
        Transform::new(self.translation, rotation, self.scale)
    }
}

/// On-disk scene description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub camera: CameraDef,
    pub models: Vec<ModelDef>,
    pub instances: Vec<InstanceDef>,
    #[serde(default)]
    pub settings: Option<RenderSettings>,
}

/// A scene file turned into live objects
#[derive(Debug, Clone)]
pub struct LoadedScene {
    pub scene: Scene,
    pub camera: Camera,
    pub settings: RenderSettings,
}

impl SceneFile {
    /// Validate models and resolve instance model names
    pub fn build(&self) -> Result<LoadedScene> {
        let mut scene = Scene::new();
        let mut by_name = HashMap::new();

        for def in &self.models {
            let model = match def.builtin {
                Some(Builtin::Cube) => {
                    let cube = Model::cube();
                    Model::new(&def.name, cube.vertices().to_vec(), cube.triangles().to_vec())?
                }
                None => Model::new(&def.name, def.vertices.clone(), def.triangles.clone())?,
            };
            let model = model.with_intensities(def.intensities.clone())?;

            let id = scene.add_model(model);
            if by_name.insert(def.name.clone(), id).is_some() {
                log::warn!("Model '{}' declared twice, using the last one", def.name);
            }
        }

        for def in &self.instances {
            let model = *by_name
                .get(&def.model)
                .ok_or_else(|| Error::UnknownModel(def.model.clone()))?;
            scene.add_instance(model, def.transform())?;
        }

        let mut camera = Camera::new(self.camera.position);
        camera.set_yaw_degrees(self.camera.yaw_degrees);
        camera.set_pitch_degrees(self.camera.pitch_degrees);

        Ok(LoadedScene {
            scene,
            camera,
            settings: self.settings.clone().unwrap_or_default(),
        })
    }
}

/// Load a scene from a RON file
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<LoadedScene> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let loaded = load_scene_from_str(&contents)?;
    log::info!(
        "Loaded scene {} ({} models, {} instances)",
        path.display(),
        loaded.scene.models().len(),
        loaded.scene.len()
    );
    Ok(loaded)
}

/// Load a scene from a RON string (embedded scenes, tests)
pub fn load_scene_from_str(s: &str) -> Result<LoadedScene> {
    let file: SceneFile = ron::from_str(s)?;
    file.build()
}

/// Save a scene description to a RON file
pub fn save_scene<P: AsRef<Path>>(file: &SceneFile, path: P) -> Result<()> {
    let path = path.as_ref();
    let contents = to_ron_string(file)?;
    fs::write(path, contents)?;
    log::info!("Saved scene to {}", path.display());
    Ok(())
}

pub fn to_ron_string(file: &SceneFile) -> Result<String> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .indentor("  ".to_string());
    Ok(ron::ser::to_string_pretty(file, config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{NearPlane, RenderMode};

    const DEMO: &str = include_str!("../../assets/scenes/cubes.ron");

    #[test]
    fn test_demo_scene_loads() {
        let loaded = load_scene_from_str(DEMO).unwrap();
        assert_eq!(loaded.scene.len(), 3);
        assert_eq!(loaded.scene.models()[0].triangles().len(), 12);
        assert_eq!(loaded.scene.models()[1].intensity(4), 1.0);
    }

    #[test]
    fn test_minimal_file_uses_defaults() {
        let src = r#"(
            models: [(name: "box", builtin: Some(Cube))],
            instances: [(model: "box", translation: (0.0, 0.0, 7.0))],
        )"#;
        let loaded = load_scene_from_str(src).unwrap();
        assert_eq!(loaded.settings, RenderSettings::default());
        assert_eq!(loaded.camera, Camera::default());
        let (_, inst, model) = loaded.scene.instances().next().unwrap();
        assert_eq!(model.name(), "box");
        assert_eq!(inst.transform.scale, Vec3::ONE);
        assert_eq!(inst.transform.translation, Vec3::new(0.0, 0.0, 7.0));
    }

    #[test]
    fn test_explicit_mesh_and_settings() {
        let src = r#"(
            camera: (position: (0.0, 1.0, -2.0), yaw_degrees: 90.0),
            models: [(
                name: "tri",
                vertices: [(0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.0, 1.0, 0.0)],
                triangles: [(indices: (0, 1, 2), color: (r: 10, g: 20, b: 30, a: 255))],
                intensities: [0.2, 0.4, 0.6],
            )],
            instances: [(model: "tri")],
            settings: Some((mode: Shaded, near_plane: Cull)),
        )"#;
        let loaded = load_scene_from_str(src).unwrap();
        assert_eq!(loaded.settings.mode, RenderMode::Shaded);
        assert_eq!(loaded.settings.near_plane, NearPlane::Cull);
        assert_eq!(loaded.settings.near_distance, 0.1);
        assert!((loaded.camera.yaw_degrees() - 90.0).abs() < 1e-3);
        assert_eq!(loaded.scene.models()[0].intensity(2), 0.6);
    }

    #[test]
    fn test_unknown_model_name() {
        let src = r#"(models: [], instances: [(model: "ghost")])"#;
        match load_scene_from_str(src) {
            Err(Error::UnknownModel(name)) => assert_eq!(name, "ghost"),
            other => panic!("expected UnknownModel, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_bad_index_in_file() {
        let src = r#"(
            models: [(
                name: "broken",
                vertices: [(0.0, 0.0, 0.0)],
                triangles: [(indices: (0, 0, 4), color: (r: 1, g: 1, b: 1, a: 255))],
            )],
            instances: [],
        )"#;
        assert!(matches!(load_scene_from_str(src), Err(Error::InvalidTriangle { .. })));
    }

    #[test]
    fn test_parse_error_reported() {
        assert!(matches!(load_scene_from_str("(models: ["), Err(Error::Parse(_))));
    }

    #[test]
    fn test_round_trip() {
        let file: SceneFile = ron::from_str(DEMO).unwrap();
        let text = to_ron_string(&file).unwrap();
        let again: SceneFile = ron::from_str(&text).unwrap();
        assert_eq!(file, again);
    }

    #[test]
    fn test_save_then_load_file() {
        let file: SceneFile = ron::from_str(DEMO).unwrap();
        let path = std::env::temp_dir().join(format!("scratch-raster-{}.ron", std::process::id()));

        save_scene(&file, &path).unwrap();
        let loaded = load_scene(&path);
        let saved_text = fs::read_to_string(&path);
        let _ = fs::remove_file(&path);

        let saved: SceneFile = ron::from_str(&saved_text.unwrap()).unwrap();
        assert_eq!(saved, file);
        let loaded = loaded.unwrap();
        assert_eq!(loaded.scene.len(), 3);
        assert_eq!(loaded.settings, file.settings.clone().unwrap_or_default());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("scratch-raster-no-such-scene.ron");
        assert!(matches!(load_scene(&path), Err(Error::Io(_))));
    }

    #[test]
    fn test_instance_rotation_degrees() {
        let def = InstanceDef {
            model: "m".to_string(),
            translation: Vec3::ZERO,
            rotation_degrees: Vec3::new(0.0, 90.0, 0.0),
            scale: Vec3::ONE,
        };
        let p = def.transform().as_matrix().transform_point3(Vec3::Z);
        assert!((p - Vec3::X).length() < 1e-5);
    }
}
