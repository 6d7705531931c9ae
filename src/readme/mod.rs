//! README patching for theme-aware logos
//!
//! The README gets a centered `<picture>` element that serves the dark logo to
//! viewers in dark mode and the light logo otherwise. Re-running the patch
//! replaces the existing element instead of adding another one.

pub mod paths;

use std::path::Path;

use tracing::info;

pub use paths::relative_reference;

use crate::extract::Span;

const PICTURE_OPEN: &str = "<picture>";
const PICTURE_CLOSE: &str = "</picture>";
const CONTAINER_CLOSE: &str = "</p>";

/// Markup settings for the picture block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureBlock {
    /// Alt text of the fallback image
    pub alt: String,
    /// Width of the fallback image in pixels
    pub width: u32,
}

impl Default for PictureBlock {
    fn default() -> Self {
        Self {
            alt: "Project logo".to_string(),
            width: 200,
        }
    }
}

impl PictureBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Render the block for already-resolved image references
    pub fn render(&self, light: &str, dark: &str) -> String {
        format!(
            r#"<p align="center">
  <picture>
    <source media="(prefers-color-scheme: dark)" srcset="{dark}">
    <source media="(prefers-color-scheme: light)" srcset="{light}">
    <img src="{light}" alt="{alt}" width="{width}">
  </picture>
</p>"#,
            alt = self.alt,
            width = self.width,
        )
    }

    /// Insert or replace the picture block in `readme`.
    ///
    /// Image paths under `base_dir` are referenced relative to it.
    pub fn apply(
        &self,
        readme: &str,
        light_path: impl AsRef<Path>,
        dark_path: impl AsRef<Path>,
        base_dir: impl AsRef<Path>,
    ) -> String {
        let base_dir = base_dir.as_ref();
        let light = relative_reference(light_path.as_ref(), base_dir);
        let dark = relative_reference(dark_path.as_ref(), base_dir);
        let block = self.render(&light, &dark);

        match find_picture_block(readme) {
            Some(span) => {
                info!("replaced existing picture element");
                let mut patched = String::with_capacity(readme.len() + block.len());
                patched.push_str(&readme[..span.start]);
                patched.push_str(&block);
                patched.push_str(&readme[span.end..]);
                patched
            }
            None => {
                info!("added new picture element");
                insert_block(readme, &block)
            }
        }
    }
}

/// Insert or replace the default picture block in `readme`
pub fn apply_picture_block(
    readme: &str,
    light_path: impl AsRef<Path>,
    dark_path: impl AsRef<Path>,
    base_dir: impl AsRef<Path>,
) -> String {
    PictureBlock::default().apply(readme, light_path, dark_path, base_dir)
}

/// Locate the first picture block.
///
/// A block is a `<p ...>` start tag followed (after whitespace) by
/// `<picture>`, then a `</picture>` followed (after whitespace) by `</p>`.
/// The first `</picture>` that is followed by `</p>` closes the block.
pub fn find_picture_block(text: &str) -> Option<Span> {
    for (start, _) in text.match_indices("<p") {
        let after_name = start + "<p".len();
        let Some(gt) = text[after_name..].find('>') else {
            return None;
        };

        let picture = skip_whitespace(text, after_name + gt + 1);
        if !text[picture..].starts_with(PICTURE_OPEN) {
            continue;
        }

        let body = picture + PICTURE_OPEN.len();
        for (close, _) in text[body..].match_indices(PICTURE_CLOSE) {
            let container = skip_whitespace(text, body + close + PICTURE_CLOSE.len());
            if text[container..].starts_with(CONTAINER_CLOSE) {
                return Some(start..container + CONTAINER_CLOSE.len());
            }
        }
    }
    None
}

fn skip_whitespace(text: &str, pos: usize) -> usize {
    let rest = &text[pos..];
    pos + (rest.len() - rest.trim_start().len())
}

/// Insert a new block after a leading heading line, or at the very top
fn insert_block(readme: &str, block: &str) -> String {
    if readme.is_empty() {
        return format!("{block}\n");
    }

    if readme.starts_with('#') {
        return match readme.find('\n') {
            Some(newline) => format!(
                "{}\n\n{}\n{}",
                &readme[..newline],
                block,
                &readme[newline..]
            ),
            None => format!("{readme}\n\n{block}\n"),
        };
    }

    format!("{block}\n\n{readme}")
}
