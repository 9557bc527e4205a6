use std::path::{Path, PathBuf};

use snap_core::{AssetResolver, LoadOutcome};

/// The draggable node pulled out of a model file.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedModel {
    pub source: PathBuf,
    pub node_name: String,
}

/// Resolves `<name>.glb` / `<name>.gltf` under an asset directory.
///
/// Model files wrap the mesh one level deep: the draggable object is the
/// first child of the first root node in the default scene. Anything else is
/// treated as absent.
pub struct GltfAssets {
    root: PathBuf,
}

impl GltfAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn locate(&self, name: &str) -> Option<PathBuf> {
        ["glb", "gltf"]
            .iter()
            .map(|ext| self.root.join(format!("{name}.{ext}")))
            .find(|p| p.is_file())
    }
}

impl AssetResolver for GltfAssets {
    type Model = LoadedModel;

    async fn resolve(&mut self, name: &str) -> LoadOutcome<LoadedModel> {
        let Some(path) = self.locate(name) else {
            log::warn!("[assets] no model file for '{name}' in {}", self.root.display());
            return LoadOutcome::Absent;
        };
        match load_draggable_node(&path) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("[assets] failed to read {}: {err}", path.display());
                LoadOutcome::Absent
            }
        }
    }
}

fn load_draggable_node(path: &Path) -> Result<LoadOutcome<LoadedModel>, gltf::Error> {
    let document = gltf::Gltf::open(path)?;
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next());
    let node = scene
        .and_then(|s| s.nodes().next())
        .and_then(|root| root.children().next());
    let Some(node) = node else {
        log::warn!(
            "[assets] {} has no nested model node; skipping",
            path.display()
        );
        return Ok(LoadOutcome::Absent);
    };
    Ok(LoadOutcome::Loaded(LoadedModel {
        source: path.to_path_buf(),
        node_name: node
            .name()
            .map(String::from)
            .unwrap_or_else(|| format!("node {}", node.index())),
    }))
}
