use std::fmt;
use std::sync::OnceLock;

use tracing::debug;

use super::config::{parse_lexicon_toml, LexiconConfigError};
use super::table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Result of a longest-prefix match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Munch<'a> {
    /// Number of characters consumed from the start index.
    pub until: usize,
    /// IPA of the longest complete syllable found, or `None` when the
    /// consumed characters are only a prefix of some syllable.
    pub phonetic: Option<&'a str>,
}

enum Route {
    Lower,
    Equal,
    Higher,
}

struct Node {
    /// `None` marks a terminal node.
    split: Option<char>,
    value: Option<String>,
    lower: Option<Box<Node>>,
    equal: Option<Box<Node>>,
    higher: Option<Box<Node>>,
}

impl Node {
    fn branch(split: char) -> Self {
        Self {
            split: Some(split),
            value: None,
            lower: None,
            equal: None,
            higher: None,
        }
    }

    fn terminal(value: String, higher: Option<Box<Node>>) -> Self {
        Self {
            split: None,
            value: Some(value),
            lower: None,
            equal: None,
            higher,
        }
    }

    fn is_terminal(&self) -> bool {
        self.split.is_none()
    }

    /// Terminal nodes compare below every character, so continuations of a
    /// complete key hang off their `higher` edge.
    fn route(&self, c: char) -> Route {
        match self.split {
            Some(split) if c < split => Route::Lower,
            Some(split) if c == split => Route::Equal,
            _ => Route::Higher,
        }
    }

    fn child(&self, route: Route) -> Option<&Node> {
        match route {
            Route::Lower => self.lower.as_deref(),
            Route::Equal => self.equal.as_deref(),
            Route::Higher => self.higher.as_deref(),
        }
    }
}

/// Ternary search tree mapping Pinyin syllables to IPA.
///
/// The tree is unbalanced; its shape follows insertion order. Query results
/// for distinct keys do not depend on that order.
#[derive(Default)]
pub struct Lexicon {
    root: Option<Box<Node>>,
    len: usize,
}

impl fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexicon")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut lexicon = Self::new();
        for (key, value) in pairs {
            lexicon.insert(key.as_ref(), value);
        }
        lexicon
    }

    /// Build a lexicon from a syllable table in TOML form.
    pub fn from_toml(toml_str: &str) -> Result<Self, LexiconConfigError> {
        Ok(Self::from_pairs(parse_lexicon_toml(toml_str)?))
    }

    /// Set a custom syllable table before the first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), LexiconConfigError> {
        // Validate eagerly
        parse_lexicon_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| LexiconConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Lexicon {
        static INSTANCE: OnceLock<Lexicon> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let pairs = parse_lexicon_toml(toml_str).expect("lexicon TOML must be valid");
            let lexicon = Lexicon::from_pairs(pairs);
            debug!(syllables = lexicon.len(), "lexicon built");
            lexicon
        })
    }

    /// Number of distinct syllables stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `key` with IPA `value`. Re-inserting a key overwrites its value.
    /// Empty keys are ignored.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        let chars: Vec<char> = key.chars().collect();
        if chars.is_empty() {
            return;
        }

        let mut slot = &mut self.root;
        let mut i = 0;
        while i < chars.len() {
            let node = slot.get_or_insert_with(|| Box::new(Node::branch(chars[i])));
            slot = match node.route(chars[i]) {
                Route::Lower => &mut node.lower,
                Route::Equal => {
                    i += 1;
                    &mut node.equal
                }
                Route::Higher => &mut node.higher,
            };
        }

        let value = value.into();
        if let Some(existing) = slot.as_deref_mut().filter(|n| n.is_terminal()) {
            existing.value = Some(value);
            return;
        }
        // A longer key may already continue from here: the new terminal
        // adopts it as its `higher` child.
        let adopted = slot.take();
        *slot = Some(Box::new(Node::terminal(value, adopted)));
        self.len += 1;
    }

    /// Look up the exact key `chars[start..]`.
    pub fn find_exact(&self, chars: &[char], start: usize) -> Option<&str> {
        let mut node = self.root.as_deref();
        let mut i = start;
        while let Some(n) = node {
            let Some(&c) = chars.get(i) else {
                return n.value.as_deref();
            };
            let route = n.route(c);
            if matches!(route, Route::Equal) {
                i += 1;
            }
            node = n.child(route);
        }
        None
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let chars: Vec<char> = key.chars().collect();
        self.find_exact(&chars, 0)
    }

    /// Longest-prefix match of `chars[start..]`.
    ///
    /// A deeper complete syllable always wins over a shallower one. When the
    /// walk ends without a complete syllable, the deepest one passed on the
    /// way is returned; failing that, the length of the matched prefix with
    /// no phonetic.
    pub fn munch(&self, chars: &[char], start: usize) -> Munch<'_> {
        let mut node = self.root.as_deref();
        let mut i = start;
        let mut best: Option<Munch<'_>> = None;

        let reached = loop {
            let Some(n) = node else {
                break Munch {
                    until: i - start,
                    phonetic: None,
                };
            };
            let Some(&c) = chars.get(i) else {
                break Munch {
                    until: i - start,
                    phonetic: n.value.as_deref(),
                };
            };
            if let Some(value) = n.value.as_deref() {
                best = Some(Munch {
                    until: i - start,
                    phonetic: Some(value),
                });
            }
            let route = n.route(c);
            if matches!(route, Route::Equal) {
                i += 1;
            }
            node = n.child(route);
        };

        match (reached.phonetic, best) {
            (None, Some(best)) => best,
            _ => reached,
        }
    }
}
