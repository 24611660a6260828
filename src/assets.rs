//! Texture cache
//!
//! Library API for native renderers embedding the engine; the web build
//! leaves textures to the page. The renderer owns the actual texture type;
//! this module only knows which textures the vault scene needs and
//! guarantees they are all present before the scene starts. The cache is
//! built once by [`TextureCache::load`] and handed to whoever draws.

use std::collections::HashMap;

use thiserror::Error;

/// Every texture the vault scene draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureName {
    Background,
    Blink,
    Door,
    DoorOpen,
    DoorOpenShadow,
    Handle,
    HandleShadow,
}

impl TextureName {
    pub const ALL: [TextureName; 7] = [
        TextureName::Background,
        TextureName::Blink,
        TextureName::Door,
        TextureName::DoorOpen,
        TextureName::DoorOpenShadow,
        TextureName::Handle,
        TextureName::HandleShadow,
    ];

    /// Asset file stem
    pub fn file_stem(&self) -> &'static str {
        match self {
            TextureName::Background => "bg",
            TextureName::Blink => "blink",
            TextureName::Door => "door",
            TextureName::DoorOpen => "doorOpen",
            TextureName::DoorOpenShadow => "doorOpenShadow",
            TextureName::Handle => "handle",
            TextureName::HandleShadow => "handleShadow",
        }
    }

    /// Path relative to `base`, e.g. `assets/door.png`
    pub fn path(&self, base: &str) -> String {
        format!("{}/{}.png", base.trim_end_matches('/'), self.file_stem())
    }
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load texture `{name}` from {path}: {reason}")]
    Load {
        name: &'static str,
        path: String,
        reason: String,
    },
}

/// All scene textures, loaded up front
#[derive(Debug, Clone)]
pub struct TextureCache<T> {
    textures: HashMap<TextureName, T>,
}

impl<T> TextureCache<T> {
    /// Load every texture under `base` through `loader`.
    ///
    /// Fails on the first texture the loader cannot produce.
    pub fn load<E, F>(base: &str, mut loader: F) -> Result<Self, AssetError>
    where
        E: std::fmt::Display,
        F: FnMut(&str) -> Result<T, E>,
    {
        let mut textures = HashMap::with_capacity(TextureName::ALL.len());
        for name in TextureName::ALL {
            let path = name.path(base);
            let texture = loader(&path).map_err(|e| AssetError::Load {
                name: name.file_stem(),
                path: path.clone(),
                reason: e.to_string(),
            })?;
            textures.insert(name, texture);
        }
        log::info!("Loaded {} textures from {}", textures.len(), base);
        Ok(Self { textures })
    }

    pub fn get(&self, name: TextureName) -> &T {
        // `load` is the only constructor and fills every name
        &self.textures[&name]
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
