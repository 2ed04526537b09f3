use std::{fs, path::Path};

use ecoleta_core::{attachment::MediaFile, entities::media_type_from_extension};

use crate::{Error, Result};

const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// An image file that has been read from disk.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageFile {
    name: String,
    media_type: String,
    bytes: Vec<u8>,
}

impl std::fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageFile")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl ImageFile {
    /// Reads the file and derives its media type from the extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| Error::File {
            path: path.to_owned(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let media_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(media_type_from_extension)
            .unwrap_or(FALLBACK_MEDIA_TYPE)
            .to_owned();
        log::debug!("Read {} bytes of {media_type} from {}", bytes.len(), path.display());
        Ok(Self {
            name,
            media_type,
            bytes,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl MediaFile for ImageFile {
    fn media_type(&self) -> String {
        self.media_type.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use ecoleta_core::attachment::ImageDropzone;

    use super::*;

    fn temp_file(suffix: &str, content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn read_image_from_disk() {
        let file = temp_file(".PNG", b"\x89PNG");
        let image = ImageFile::from_path(file.path()).unwrap();
        assert_eq!(image.media_type(), "image/png");
        assert_eq!(image.bytes(), b"\x89PNG");
        assert!(image.name().ends_with(".PNG"));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageFile::from_path(&dir.path().join("missing.jpg")).unwrap_err();
        assert!(matches!(err, Error::File { .. }));
    }

    #[test]
    fn dropzone_rejects_non_images() {
        let text = temp_file(".txt", b"hello");
        let photo = temp_file(".jpg", b"\xff\xd8");
        let text = ImageFile::from_path(text.path()).unwrap();
        let photo = ImageFile::from_path(photo.path()).unwrap();
        assert_eq!(text.media_type(), FALLBACK_MEDIA_TYPE);

        let mut dropzone = ImageDropzone::<String>::default();
        let accepted = dropzone
            .accept([text, photo.clone()], |f: &ImageFile| {
                Ok::<_, std::convert::Infallible>(f.name().to_owned())
            })
            .unwrap();
        assert_eq!(accepted, photo);
        assert_eq!(dropzone.preview(), Some(&photo.name().to_owned()));
    }
}
