use super::{InputSource, ParserToJson, PassthroughParser};
use std::collections::HashMap;
use std::path::Path;

/// Constructor for a parser bound to one input source
pub type ParserFactory = Box<dyn Fn(InputSource) -> Box<dyn ParserToJson> + Send + Sync>;

/// Dynamic dispatch table for file type parsers
pub struct ParserRegistry {
    /// Fallback factory for unknown extensions
    fallback: ParserFactory,
    /// Extension -> factory mapping
    map: HashMap<String, ParserFactory>,
}

impl ParserRegistry {
    /// Create a new registry with PassthroughParser as fallback
    pub fn new() -> Self {
        Self {
            fallback: Box::new(|source: InputSource| -> Box<dyn ParserToJson> {
                Box::new(PassthroughParser::new(source))
            }),
            map: HashMap::new(),
        }
    }

    /// Register a parser factory for a specific file extension
    ///
    /// # Arguments
    /// * `extension` - File extension without dot (e.g., "txt"), matched case-insensitively
    /// * `factory` - Builds a fresh parser over each input source
    ///
    /// # Example
    /// ```ignore
    /// registry.register("transcript", TranscriptParser::new);
    /// ```
    pub fn register<P, F>(&mut self, extension: impl Into<String>, factory: F)
    where
        P: ParserToJson + 'static,
        F: Fn(InputSource) -> P + Send + Sync + 'static,
    {
        self.map.insert(
            extension.into().to_lowercase(),
            Box::new(move |source: InputSource| -> Box<dyn ParserToJson> {
                Box::new(factory(source))
            }),
        );
    }

    /// Build a parser for `path` over an already opened source
    ///
    /// Falls back to PassthroughParser if no extension-specific parser exists
    pub fn build(&self, path: &Path, source: InputSource) -> Box<dyn ParserToJson> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .unwrap_or_default();

        let factory = self.map.get(&ext).unwrap_or(&self.fallback);
        factory(source)
    }

    /// Get the number of registered parsers (excluding fallback)
    pub fn parser_count(&self) -> usize {
        self.map.len()
    }

    /// List all registered extensions
    pub fn registered_extensions(&self) -> Vec<&str> {
        self.map.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}
