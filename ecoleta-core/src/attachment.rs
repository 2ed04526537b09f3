//! Single image attachment with a locally renderable preview.
//!
//! The preview is a resource (e.g. an object URL) that is released
//! when its value is dropped. The dropzone owns at most one preview
//! at any time: a new attachment drops the old preview and tearing
//! down the dropzone drops the current one.

use std::fmt;

use thiserror::Error;

use crate::entities::is_image_media_type;

/// A raw file handle as delivered by a file input.
pub trait MediaFile {
    fn media_type(&self) -> String;
}

#[cfg(feature = "web-sys")]
impl MediaFile for web_sys::File {
    fn media_type(&self) -> String {
        self.type_()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentError {
    #[error("None of the {0} offered file(s) is an image")]
    NoImage(usize),
    #[error("Unable to create a preview: {0}")]
    Preview(String),
}

#[derive(Debug)]
pub struct ImageDropzone<P> {
    preview: Option<P>,
}

impl<P> Default for ImageDropzone<P> {
    fn default() -> Self {
        Self { preview: None }
    }
}

impl<P> ImageDropzone<P> {
    pub const fn preview(&self) -> Option<&P> {
        self.preview.as_ref()
    }

    /// Accepts the first image among `files` and discards the rest.
    ///
    /// On success the accepted file is handed back to the caller
    /// and its preview replaces the previous one.
    pub fn accept<F, E>(
        &mut self,
        files: impl IntoIterator<Item = F>,
        create_preview: impl FnOnce(&F) -> Result<P, E>,
    ) -> Result<F, AttachmentError>
    where
        F: MediaFile,
        E: fmt::Display,
    {
        let files: Vec<F> = files.into_iter().collect();
        let offered = files.len();
        let Some(file) = files
            .into_iter()
            .find(|f| is_image_media_type(&f.media_type()))
        else {
            log::debug!("Reject {offered} file(s) without an image");
            return Err(AttachmentError::NoImage(offered));
        };
        if offered > 1 {
            log::debug!("Accept only the first image of {offered} files");
        }
        let preview =
            create_preview(&file).map_err(|err| AttachmentError::Preview(err.to_string()))?;
        self.preview = Some(preview);
        Ok(file)
    }

    /// Releases the current preview.
    pub fn clear(&mut self) {
        self.preview = None;
    }
}
