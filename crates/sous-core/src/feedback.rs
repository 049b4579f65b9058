//! Post-cooking feedback: a star rating, free text and photos of the dish.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use jiff::Timestamp;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SousError};

/// Highest star rating.
pub const MAX_RATING: u8 = 5;

/// A photo attached to feedback, held as a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub file_name: String,
    pub mime: String,
    pub data_url: String,
}

impl Photo {
    /// Reads an image file into a data URL.
    ///
    /// # Errors
    ///
    /// Returns `SousError::InvalidInput` when the file name does not map to an
    /// `image/*` MIME type, and `SousError::FileSystem` when the file cannot
    /// be read.
    pub fn from_file(path: &Path) -> Result<Photo> {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        if mime.type_() != mime_guess::mime::IMAGE {
            return Err(SousError::invalid_input("photo").with_reason("Please upload an image file"));
        }
        let bytes = std::fs::read(path).map_err(|source| SousError::FileSystem {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!("Attached photo {file_name} ({} bytes, {mime})", bytes.len());
        let data_url = format!("data:{mime};base64,{}", STANDARD.encode(&bytes));
        Ok(Photo {
            file_name,
            mime: mime.essence_str().to_string(),
            data_url,
        })
    }
}

/// Submitted feedback for one cooked recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub recipe_id: String,
    pub recipe_title: String,
    pub rating: Option<u8>,
    pub text: String,
    pub photos: Vec<Photo>,
    pub submitted_at: Timestamp,
}

/// Feedback being filled in after a cooking session.
#[derive(Debug, Clone, Default)]
pub struct FeedbackForm {
    recipe_id: String,
    recipe_title: String,
    rating: Option<u8>,
    text: String,
    photos: Vec<Photo>,
}

impl FeedbackForm {
    pub fn new(recipe_id: impl Into<String>, recipe_title: impl Into<String>) -> Self {
        Self {
            recipe_id: recipe_id.into(),
            recipe_title: recipe_title.into(),
            ..Self::default()
        }
    }

    /// Sets the star rating.
    ///
    /// # Errors
    ///
    /// Returns `SousError::InvalidInput` outside `1..=5`.
    pub fn set_rating(&mut self, rating: u8) -> Result<()> {
        if !(1..=MAX_RATING).contains(&rating) {
            return Err(SousError::invalid_input("rating")
                .with_reason(format!("Rating must be between 1 and {MAX_RATING}")));
        }
        self.rating = Some(rating);
        Ok(())
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Attaches one photo. Non-image files are rejected and leave the form
    /// unchanged.
    pub fn attach_photo(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let photo = Photo::from_file(path.as_ref())?;
        self.photos.push(photo);
        Ok(())
    }

    /// Removes the photo at `index`. Returns `false` when there is none.
    pub fn remove_photo(&mut self, index: usize) -> bool {
        if index >= self.photos.len() {
            return false;
        }
        self.photos.remove(index);
        true
    }

    pub fn rating(&self) -> Option<u8> {
        self.rating
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn recipe_title(&self) -> &str {
        &self.recipe_title
    }

    /// Finalizes the form into a timestamped record.
    pub fn submit(self) -> Feedback {
        Feedback {
            recipe_id: self.recipe_id,
            recipe_title: self.recipe_title,
            rating: self.rating,
            text: self.text.trim().to_string(),
            photos: self.photos,
            submitted_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_rating_bounds() {
        let mut form = FeedbackForm::new("r1", "Soup");
        assert!(form.set_rating(0).is_err());
        assert!(form.set_rating(6).is_err());
        assert_eq!(form.rating(), None);
        form.set_rating(5).unwrap();
        assert_eq!(form.rating(), Some(5));
    }

    #[test]
    fn test_attach_image_as_data_url() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "dish.png", b"png");
        let mut form = FeedbackForm::new("r1", "Soup");
        form.attach_photo(&path).unwrap();

        let photo = &form.photos()[0];
        assert_eq!(photo.file_name, "dish.png");
        assert_eq!(photo.mime, "image/png");
        assert_eq!(photo.data_url, "data:image/png;base64,cG5n");
    }

    #[test]
    fn test_non_image_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "notes.txt", b"hello");
        let mut form = FeedbackForm::new("r1", "Soup");
        let err = form.attach_photo(&path).unwrap_err();
        assert_eq!(err.reason(), "Please upload an image file");
        assert!(form.photos().is_empty());
    }

    #[test]
    fn test_missing_image_file() {
        let dir = TempDir::new().unwrap();
        let mut form = FeedbackForm::new("r1", "Soup");
        let err = form.attach_photo(dir.path().join("gone.jpg")).unwrap_err();
        assert!(matches!(err, SousError::FileSystem { .. }));
    }

    #[test]
    fn test_remove_photo_by_index() {
        let dir = TempDir::new().unwrap();
        let mut form = FeedbackForm::new("r1", "Soup");
        form.attach_photo(write_file(&dir, "a.jpg", b"a")).unwrap();
        form.attach_photo(write_file(&dir, "b.gif", b"b")).unwrap();

        assert!(!form.remove_photo(2));
        assert!(form.remove_photo(0));
        assert_eq!(form.photos().len(), 1);
        assert_eq!(form.photos()[0].file_name, "b.gif");
    }

    #[test]
    fn test_submit() {
        let mut form = FeedbackForm::new("r1", "Soup");
        form.set_rating(4).unwrap();
        form.set_text("  Tasty, a bit salty  ");
        let feedback = form.submit();
        assert_eq!(feedback.recipe_title, "Soup");
        assert_eq!(feedback.rating, Some(4));
        assert_eq!(feedback.text, "Tasty, a bit salty");
        assert!(feedback.photos.is_empty());
    }
}
