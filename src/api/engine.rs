use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use ipa_core::lexicon::{self, Lexicon};
use ipa_core::settings::{self, Settings};
use ipa_core::{Segment, Segmenter};

use super::{read_config, EngineError};

/// An owned lexicon and settings pair. Immutable once built, so one engine
/// can serve any number of threads.
#[derive(Debug)]
pub struct IpaEngine {
    lexicon: Arc<Lexicon>,
    settings: Arc<Settings>,
}

impl IpaEngine {
    pub fn new(lexicon: Arc<Lexicon>, settings: Arc<Settings>) -> Arc<Self> {
        Arc::new(Self { lexicon, settings })
    }

    /// Build from TOML text, falling back to the embedded defaults.
    pub fn from_toml(
        lexicon_toml: Option<&str>,
        settings_toml: Option<&str>,
    ) -> Result<Arc<Self>, EngineError> {
        let lexicon = Lexicon::from_toml(lexicon_toml.unwrap_or(lexicon::default_toml()))
            .map_err(EngineError::invalid_data)?;
        let settings =
            settings::parse_settings_toml(settings_toml.unwrap_or(settings::default_toml()))
                .map_err(EngineError::invalid_data)?;
        debug!(syllables = lexicon.len(), "engine built");
        Ok(Self::new(Arc::new(lexicon), Arc::new(settings)))
    }

    /// Build from configuration files, falling back to the embedded defaults.
    pub fn open(
        lexicon_path: Option<&Path>,
        settings_path: Option<&Path>,
    ) -> Result<Arc<Self>, EngineError> {
        let lexicon_toml = lexicon_path.map(read_config).transpose()?;
        let settings_toml = settings_path.map(read_config).transpose()?;
        Self::from_toml(lexicon_toml.as_deref(), settings_toml.as_deref())
    }

    pub fn segment(&self, text: &str) -> Vec<Segment> {
        Segmenter::new(&self.lexicon, &self.settings).segment(text)
    }

    /// Segments joined for display: IPA for syllables, typed text otherwise.
    pub fn transcribe(&self, text: &str) -> String {
        self.segment(text).iter().map(Segment::display).collect()
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
