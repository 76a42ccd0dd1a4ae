use std::path::{Path, PathBuf};

use egui::{ColorImage, Context, TextureHandle, TextureOptions};

use crate::error::{PaintError, PaintResult};
use crate::tools::{Tool, ToolKind};

/// `dir/toolN.png`, N being the tool's 1-based toolbar position
pub fn icon_path(dir: &Path, kind: ToolKind) -> PathBuf {
    dir.join(format!("tool{}.png", kind.icon_index()))
}

/// Decodes an image file into an egui image
pub fn load_icon_image(path: &Path) -> PaintResult<ColorImage> {
    let image = image::open(path).map_err(|source| PaintError::Icon {
        path: path.to_owned(),
        source,
    })?;
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Toolbar icon textures, one per tool
pub struct IconSet {
    textures: Vec<(ToolKind, TextureHandle)>,
}

impl std::fmt::Debug for IconSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconSet")
            .field("icons", &self.textures.len())
            .finish()
    }
}

impl IconSet {
    /// Loads every tool icon from `dir`. Any missing icon fails the whole set.
    pub fn load(ctx: &Context, dir: &Path) -> PaintResult<Self> {
        let mut textures = Vec::with_capacity(ToolKind::ALL.len());
        for kind in ToolKind::ALL {
            let path = icon_path(dir, kind);
            let image = load_icon_image(&path)?;
            log::debug!("Loaded {} icon from {}", kind.name(), path.display());
            let handle = ctx.load_texture(
                format!("tool_icon_{}", kind.icon_index()),
                image,
                TextureOptions::NEAREST,
            );
            textures.push((kind, handle));
        }
        Ok(Self { textures })
    }

    pub fn get(&self, kind: ToolKind) -> Option<&TextureHandle> {
        self.textures
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, handle)| handle)
    }
}
