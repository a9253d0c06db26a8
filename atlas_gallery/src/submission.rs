//! Fan-art submission form and validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use atlas_roster::{Catalog, CharacterId, FanArt, FanArtId};

/// Shown after a successful submission.
pub const SUBMITTED_MESSAGE: &str = "Fan art submitted! Thanks for sharing your talent.";

/// Editable fields of the submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    CharacterId,
    Artist,
    ImageUrl,
    Caption,
}

/// Why a submission was rejected. Only the first failing rule is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("All fields are required.")]
    MissingField(FormField),

    #[error("Image URL must start with http:// or https://")]
    InvalidImageUrl,
}

/// Raw form state as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FanArtForm {
    pub character_id: CharacterId,
    pub artist: String,
    pub image_url: String,
    pub caption: String,
}

impl FanArtForm {
    /// An empty form with the first catalog character preselected.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self {
            character_id: catalog
                .first()
                .map(|c| c.id.clone())
                .unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::CharacterId => self.character_id = CharacterId(value),
            FormField::Artist => self.artist = value,
            FormField::ImageUrl => self.image_url = value,
            FormField::Caption => self.caption = value,
        }
    }

    /// Clear the text inputs, keeping the chosen character.
    pub fn clear_text_fields(&mut self) {
        self.artist.clear();
        self.image_url.clear();
        self.caption.clear();
    }

    /// Validate the form and build the record it describes.
    ///
    /// Emptiness is judged on trimmed text, but the scheme check sees the URL
    /// exactly as typed, so leading whitespace is rejected. The stored record
    /// carries trimmed text. The character id comes from a picker and is taken
    /// as-is.
    pub fn validate(&self) -> Result<FanArt, SubmissionError> {
        let artist = self.artist.trim();
        let image_url = self.image_url.trim();
        let caption = self.caption.trim();

        let missing = [
            (FormField::Artist, artist),
            (FormField::ImageUrl, image_url),
            (FormField::Caption, caption),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty());
        if let Some((field, _)) = missing {
            return Err(SubmissionError::MissingField(field));
        }

        if !has_web_scheme(&self.image_url) {
            return Err(SubmissionError::InvalidImageUrl);
        }

        Ok(FanArt::new(
            FanArtId::generate(),
            self.character_id.clone(),
            artist,
            image_url,
            caption,
        ))
    }
}

/// Shallow scheme check; says nothing about what the URL points at.
pub fn has_web_scheme(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Outcome styling for the form message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormStatus {
    Success,
    Error,
}

/// Inline message shown under the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormMessage {
    pub status: FormStatus,
    pub text: String,
}

impl FormMessage {
    pub fn success() -> Self {
        Self {
            status: FormStatus::Success,
            text: SUBMITTED_MESSAGE.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == FormStatus::Error
    }
}

impl From<&SubmissionError> for FormMessage {
    fn from(err: &SubmissionError) -> Self {
        Self {
            status: FormStatus::Error,
            text: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> FanArtForm {
        FanArtForm {
            character_id: CharacterId::from("ember"),
            artist: "Test".to_string(),
            image_url: "https://x.test/a.png".to_string(),
            caption: "hello".to_string(),
        }
    }

    #[test]
    fn test_valid_form_builds_trimmed_record() {
        let mut form = valid_form();
        form.artist = "  Test  ".to_string();
        form.caption = "\thello\n".to_string();
        form.image_url = "https://x.test/a.png  ".to_string();

        let art = form.validate().unwrap();
        assert_eq!(art.character_id.as_str(), "ember");
        assert_eq!(art.artist, "Test");
        assert_eq!(art.image_url, "https://x.test/a.png");
        assert_eq!(art.caption, "hello");
        assert!(art.id.as_str().starts_with("fanart-"));
    }

    #[test]
    fn test_missing_fields_rejected_in_order() {
        let mut form = valid_form();
        form.caption = "   ".to_string();
        assert_eq!(
            form.validate(),
            Err(SubmissionError::MissingField(FormField::Caption))
        );

        form.artist.clear();
        assert_eq!(
            form.validate(),
            Err(SubmissionError::MissingField(FormField::Artist))
        );
    }

    #[test]
    fn test_missing_field_wins_over_bad_url() {
        let mut form = valid_form();
        form.image_url = "ftp://example.com/x.png".to_string();
        form.caption.clear();
        assert_eq!(
            form.validate(),
            Err(SubmissionError::MissingField(FormField::Caption))
        );
    }

    #[test]
    fn test_non_web_scheme_rejected() {
        let mut form = valid_form();
        form.image_url = "ftp://example.com/x.png".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!(err, SubmissionError::InvalidImageUrl);
        assert_eq!(err.to_string(), "Image URL must start with http:// or https://");
    }

    #[test]
    fn test_leading_space_in_url_rejected() {
        let mut form = valid_form();
        form.image_url = " https://x.test/a.png".to_string();
        assert_eq!(form.validate(), Err(SubmissionError::InvalidImageUrl));
    }

    #[test]
    fn test_scheme_check() {
        assert!(has_web_scheme("http://a"));
        assert!(has_web_scheme("https://a"));
        assert!(!has_web_scheme("HTTPS://a"));
        assert!(!has_web_scheme("www.example.com"));
        assert!(!has_web_scheme("https:/a"));
    }

    #[test]
    fn test_clear_keeps_character() {
        let mut form = valid_form();
        form.set_field(FormField::CharacterId, "kaio");
        form.clear_text_fields();
        assert_eq!(form.character_id.as_str(), "kaio");
        assert!(form.artist.is_empty() && form.image_url.is_empty() && form.caption.is_empty());
    }

    #[test]
    fn test_for_catalog_preselects_first_character() {
        let form = FanArtForm::for_catalog(&Catalog::builtin());
        assert_eq!(form.character_id.as_str(), "ember");

        let form = FanArtForm::for_catalog(&Catalog::empty());
        assert_eq!(form.character_id.as_str(), "");
    }

    #[test]
    fn test_form_messages() {
        let message = FormMessage::from(&SubmissionError::MissingField(FormField::Artist));
        assert!(message.is_error());
        assert_eq!(message.text, "All fields are required.");

        let message = FormMessage::success();
        assert!(!message.is_error());
        assert_eq!(message.text, SUBMITTED_MESSAGE);
    }
}
