//! Page session - all interactive state, updated one event at a time.
//!
//! The session owns the filter, selection, gallery and form state. Input
//! arrives as [`AtlasEvent`]s through [`AtlasSession::apply`]; everything the
//! page displays is derived on demand from the current state.

use serde::{Deserialize, Serialize};

use atlas_roster::{
    Catalog, Character, CharacterFilter, CharacterId, Difficulty, Facet, FacetOptions, FanArt,
    FanArtId, Role, Selection, NO_CHARACTERS_MESSAGE,
};

use crate::gallery::{empty_gallery_message, FanArtGallery};
use crate::store::{load_or_seed, FanArtRepository};
use crate::submission::{FanArtForm, FormField, FormMessage, SubmissionError};

/// User input the page reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtlasEvent {
    SearchChanged(String),
    RoleFilterChanged(Facet<Role>),
    DifficultyFilterChanged(Facet<Difficulty>),
    TagFilterChanged(Facet<String>),
    /// A character card was clicked.
    CharacterSelected(CharacterId),
    FanArtFieldChanged { field: FormField, value: String },
    FanArtSubmitted,
    FanArtFilterChanged(Facet<CharacterId>),
}

/// Headline counters for the page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    pub featured_characters: usize,
    pub fan_art_submissions: usize,
    pub tactical_guides: usize,
}

/// The complete state of one page session.
pub struct AtlasSession<R> {
    catalog: Catalog,
    facet_options: FacetOptions,
    filter: CharacterFilter,
    selection: Selection,
    gallery: FanArtGallery,
    gallery_filter: Facet<CharacterId>,
    form: FanArtForm,
    form_message: Option<FormMessage>,
    repository: R,
}

impl<R: FanArtRepository> AtlasSession<R> {
    /// Start a session. The gallery is loaded (or seeded) before anything
    /// else can write to the repository.
    pub fn open(catalog: Catalog, mut repository: R) -> Self {
        let gallery = FanArtGallery::new(load_or_seed(&mut repository));
        log::info!(
            "session opened with {} characters and {} fan art entries",
            catalog.len(),
            gallery.len()
        );

        Self {
            facet_options: FacetOptions::derive(&catalog),
            filter: CharacterFilter::default(),
            selection: Selection::for_catalog(&catalog),
            gallery,
            gallery_filter: Facet::All,
            form: FanArtForm::for_catalog(&catalog),
            form_message: None,
            catalog,
            repository,
        }
    }

    /// Apply one event.
    pub fn apply(&mut self, event: AtlasEvent) {
        match event {
            AtlasEvent::SearchChanged(search) => self.filter.search = search,
            AtlasEvent::RoleFilterChanged(role) => self.filter.role = role,
            AtlasEvent::DifficultyFilterChanged(difficulty) => self.filter.difficulty = difficulty,
            AtlasEvent::TagFilterChanged(tag) => self.filter.tag = tag,
            AtlasEvent::CharacterSelected(id) => self.selection.choose(id),
            AtlasEvent::FanArtFieldChanged { field, value } => {
                self.form_message = None;
                self.form.set_field(field, value);
            }
            AtlasEvent::FanArtSubmitted => {
                if let Err(err) = self.submit_fan_art() {
                    log::debug!("submit event left the gallery unchanged: {}", err);
                }
            }
            AtlasEvent::FanArtFilterChanged(filter) => self.gallery_filter = filter,
        }
    }

    /// Validate the form and, if it passes, publish the new entry.
    ///
    /// On failure nothing but the form message changes.
    pub fn submit_fan_art(&mut self) -> Result<FanArtId, SubmissionError> {
        let entry = match self.form.validate() {
            Ok(entry) => entry,
            Err(err) => {
                self.form_message = Some(FormMessage::from(&err));
                return Err(err);
            }
        };

        let id = entry.id.clone();
        log::info!("fan art {} submitted for {}", id, entry.character_id);
        self.gallery.prepend(entry);
        self.form.clear_text_fields();
        self.gallery_filter = Facet::All;
        self.form_message = Some(FormMessage::success());
        self.persist();
        Ok(id)
    }

    /// Write the full gallery snapshot. Failures are logged; the in-memory
    /// gallery stays authoritative for the rest of the session.
    fn persist(&mut self) {
        if let Err(err) = self.repository.save(self.gallery.entries()) {
            log::warn!("failed to save fan art: {}", err);
        }
    }
}

impl<R> AtlasSession<R> {
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn facet_options(&self) -> &FacetOptions {
        &self.facet_options
    }

    pub fn filter(&self) -> &CharacterFilter {
        &self.filter
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn gallery(&self) -> &FanArtGallery {
        &self.gallery
    }

    pub fn gallery_filter(&self) -> &Facet<CharacterId> {
        &self.gallery_filter
    }

    pub fn form(&self) -> &FanArtForm {
        &self.form
    }

    pub fn form_message(&self) -> Option<&FormMessage> {
        self.form_message.as_ref()
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn into_repository(self) -> R {
        self.repository
    }

    /// Characters passing the current search and facets.
    pub fn visible_characters(&self) -> Vec<&Character> {
        self.filter.apply(&self.catalog)
    }

    /// The character shown in the playbook view.
    pub fn active_character(&self) -> Option<&Character> {
        let visible = self.visible_characters();
        self.selection.resolve(&visible, &self.catalog)
    }

    /// Fan art passing the gallery filter, newest first.
    pub fn displayed_fan_art(&self) -> Vec<&FanArt> {
        self.gallery.filtered(&self.gallery_filter)
    }

    pub fn fan_art_summary(&self) -> String {
        self.gallery.summary(&self.gallery_filter)
    }

    /// Empty-state text for the character grid, if it is empty.
    pub fn characters_empty_message(&self) -> Option<&'static str> {
        self.visible_characters()
            .is_empty()
            .then_some(NO_CHARACTERS_MESSAGE)
    }

    /// Empty-state text for the gallery, if it is empty.
    pub fn fan_art_empty_message(&self) -> Option<String> {
        self.displayed_fan_art()
            .is_empty()
            .then(|| empty_gallery_message(&self.catalog, &self.gallery_filter))
    }

    pub fn insights(&self) -> Insights {
        Insights {
            featured_characters: self.visible_characters().len(),
            fan_art_submissions: self.gallery.len(),
            tactical_guides: self.catalog.total_guides(),
        }
    }

    /// Heading of the playbook section.
    pub fn playbook_title(&self) -> Option<String> {
        self.active_character()
            .map(|c| format!("{} Mastery Playbook", c.name))
    }

    /// Heading of the fan-art section.
    pub fn spotlight_title(&self) -> String {
        let name = self
            .active_character()
            .map(|c| c.name.as_str())
            .unwrap_or("Your squad");
        format!("{} Spotlight", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{KeyValueFanArtRepository, KeyValueStore, MemoryStore, StoreError};
    use crate::submission::FormStatus;
    use atlas_roster::seed_fan_art;

    /// Repository whose saves always fail after loading the seed.
    struct BrokenRepository;

    impl FanArtRepository for BrokenRepository {
        fn load(&self) -> Result<Option<Vec<FanArt>>, StoreError> {
            Ok(None)
        }

        fn save(&mut self, _entries: &[FanArt]) -> Result<(), StoreError> {
            Err(StoreError::InvalidKey("broken".to_string()))
        }
    }

    fn session() -> AtlasSession<KeyValueFanArtRepository<MemoryStore>> {
        AtlasSession::open(
            Catalog::builtin(),
            KeyValueFanArtRepository::new(MemoryStore::new()),
        )
    }

    fn fill_form(session: &mut AtlasSession<impl FanArtRepository>, fields: [(FormField, &str); 4]) {
        for (field, value) in fields {
            session.apply(AtlasEvent::FanArtFieldChanged {
                field,
                value: value.to_string(),
            });
        }
    }

    fn valid_fields() -> [(FormField, &'static str); 4] {
        [
            (FormField::CharacterId, "ember"),
            (FormField::Artist, "Test"),
            (FormField::ImageUrl, "https://x.test/a.png"),
            (FormField::Caption, "hello"),
        ]
    }

    fn stored_len(session: &AtlasSession<KeyValueFanArtRepository<MemoryStore>>) -> usize {
        let raw = session
            .repository()
            .store()
            .get(session.repository().key())
            .unwrap()
            .unwrap();
        serde_json::from_str::<Vec<FanArt>>(&raw).unwrap().len()
    }

    #[test]
    fn test_open_seeds_gallery() {
        let session = session();
        assert_eq!(session.gallery().entries(), seed_fan_art().as_slice());
        assert_eq!(stored_len(&session), 3);
        assert_eq!(session.form().character_id.as_str(), "ember");
        assert!(session.form_message().is_none());
    }

    #[test]
    fn test_valid_submission() {
        let mut session = session();
        session.apply(AtlasEvent::FanArtFilterChanged(Facet::Only(CharacterId::from("kaio"))));
        fill_form(&mut session, valid_fields());

        session.apply(AtlasEvent::FanArtSubmitted);

        assert_eq!(session.gallery().len(), 4);
        let newest = &session.gallery().entries()[0];
        assert_eq!(newest.character_id.as_str(), "ember");
        assert_eq!(newest.artist, "Test");
        assert_eq!(session.gallery_filter(), &Facet::All);
        assert_eq!(session.form_message(), Some(&FormMessage::success()));
        assert_eq!(stored_len(&session), 4);

        // text fields reset, character kept
        assert_eq!(session.form().character_id.as_str(), "ember");
        assert!(session.form().artist.is_empty());
        assert!(session.form().image_url.is_empty());
        assert!(session.form().caption.is_empty());
    }

    #[test]
    fn test_empty_caption_rejected() {
        let mut session = session();
        let mut fields = valid_fields();
        fields[3].1 = "   ";
        fill_form(&mut session, fields);

        let result = session.submit_fan_art();

        assert_eq!(result, Err(SubmissionError::MissingField(FormField::Caption)));
        assert_eq!(session.gallery().len(), 3);
        assert_eq!(stored_len(&session), 3);
        let message = session.form_message().unwrap();
        assert_eq!(message.status, FormStatus::Error);
        assert_eq!(message.text, "All fields are required.");
        // the form keeps what was typed
        assert_eq!(session.form().artist, "Test");
    }

    #[test]
    fn test_ftp_url_rejected() {
        let mut session = session();
        let mut fields = valid_fields();
        fields[2].1 = "ftp://example.com/x.png";
        fill_form(&mut session, fields);

        assert_eq!(session.submit_fan_art(), Err(SubmissionError::InvalidImageUrl));
        assert_eq!(session.gallery().len(), 3);
    }

    #[test]
    fn test_rejected_submit_event_only_sets_message() {
        let mut session = session();
        let mut fields = valid_fields();
        fields[2].1 = "ftp://example.com/x.png";
        fill_form(&mut session, fields);

        session.apply(AtlasEvent::FanArtSubmitted);

        assert_eq!(session.gallery().len(), 3);
        assert_eq!(stored_len(&session), 3);
        assert_eq!(
            session.form_message().unwrap().text,
            "Image URL must start with http:// or https://"
        );
        assert_eq!(session.form().image_url, "ftp://example.com/x.png");
    }

    #[test]
    fn test_editing_a_field_clears_the_message() {
        let mut session = session();
        session.apply(AtlasEvent::FanArtSubmitted);
        assert!(session.form_message().unwrap().is_error());

        session.apply(AtlasEvent::FanArtFieldChanged {
            field: FormField::Artist,
            value: "A".to_string(),
        });
        assert!(session.form_message().is_none());
    }

    #[test]
    fn test_save_failure_keeps_submission_in_memory() {
        let mut session = AtlasSession::open(Catalog::builtin(), BrokenRepository);
        assert_eq!(session.gallery().len(), 3);
        fill_form(&mut session, valid_fields());

        assert!(session.submit_fan_art().is_ok());
        assert_eq!(session.gallery().len(), 4);
        assert_eq!(session.form_message().unwrap().status, FormStatus::Success);
    }

    #[test]
    fn test_filters_and_selection() {
        let mut session = session();
        session.apply(AtlasEvent::CharacterSelected(CharacterId::from("kaio")));
        assert_eq!(session.active_character().unwrap().id.as_str(), "kaio");

        session.apply(AtlasEvent::RoleFilterChanged(Facet::Only(Role::Marksman)));
        assert_eq!(session.active_character().unwrap().id.as_str(), "lyra");
        assert_eq!(session.insights().featured_characters, 1);

        session.apply(AtlasEvent::RoleFilterChanged(Facet::All));
        assert_eq!(session.active_character().unwrap().id.as_str(), "kaio");
    }

    #[test]
    fn test_empty_results() {
        let mut session = session();
        session.apply(AtlasEvent::SearchChanged("nobody by that name".to_string()));
        assert!(session.visible_characters().is_empty());
        assert_eq!(session.characters_empty_message(), Some(NO_CHARACTERS_MESSAGE));
        assert_eq!(session.active_character().unwrap().id.as_str(), "ember");

        session.apply(AtlasEvent::FanArtFilterChanged(Facet::Only(CharacterId::from("lyra"))));
        assert!(session.displayed_fan_art().is_empty());
        assert_eq!(
            session.fan_art_empty_message().unwrap(),
            "No fan art yet. Be the first to share your masterpiece for Lyra Quell."
        );
        assert_eq!(session.fan_art_summary(), "Showing 0 of 3 pieces.");
    }

    #[test]
    fn test_headings_and_insights() {
        let mut session = session();
        session.apply(AtlasEvent::CharacterSelected(CharacterId::from("solenne")));
        assert_eq!(session.playbook_title().unwrap(), "Solenne Vale Mastery Playbook");
        assert_eq!(session.spotlight_title(), "Solenne Vale Spotlight");
        assert_eq!(
            session.insights(),
            Insights {
                featured_characters: 4,
                fan_art_submissions: 3,
                tactical_guides: 5,
            }
        );
    }

    #[test]
    fn test_empty_catalog_session() {
        let session = AtlasSession::open(
            Catalog::empty(),
            KeyValueFanArtRepository::new(MemoryStore::new()),
        );
        assert!(session.active_character().is_none());
        assert!(session.playbook_title().is_none());
        assert_eq!(session.spotlight_title(), "Your squad Spotlight");
        assert_eq!(session.facet_options().roles, vec![Facet::All]);
    }
}
