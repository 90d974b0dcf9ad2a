use std::collections::HashMap;

use crate::io::json::scene_file_reader;
use crate::scene::scene::Scene;

use super::provider::{SceneProvider, SceneProviderError};

pub struct FileSceneProvider {
}

impl FileSceneProvider {

    pub fn new() -> Self {
        Self {
        }
    }
}

impl SceneProvider for FileSceneProvider {

    fn scene(&self, options: &HashMap<String, String>) -> Result<Scene, SceneProviderError> {
        let path = options.get("scene").ok_or(SceneProviderError::FailedToLoad {
            description: "no scene file is set, pass --scene=path/to/scene.json".to_string(),
        })?;

        scene_file_reader::load(path).map_err(|err| SceneProviderError::FailedToLoad {
            description: err.to_string(),
        })
    }
}
