use std::collections::HashMap;

use custom_error::custom_error;

use crate::scene::scene::Scene;

custom_error! {pub SceneProviderError
    FailedToLoad {description: String} = "Failed to load scene: {description}",
}

pub trait SceneProvider {

    fn scene(&self, options: &HashMap<String, String>) -> Result<Scene, SceneProviderError>;
}
