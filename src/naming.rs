use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static RE_NON_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s_-]").unwrap());
static RE_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_-]+").unwrap());

const FALLBACK_CLASS: &str = "element";
const FALLBACK_COMPONENT: &str = "Component";

fn words(name: &str) -> Vec<String> {
    let name: String = name.nfkc().collect();
    let stripped = RE_NON_NAME.replace_all(&name, "");
    RE_SEPARATORS
        .split(&stripped)
        .filter(|w| !w.is_empty())
        .map(|w| w.to_string())
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// `"primary button"` -> `"PrimaryButton"`.
pub fn to_pascal_case(name: &str) -> String {
    words(name).iter().map(|w| capitalize(w)).collect()
}

/// `"primary button"` -> `"primaryButton"`.
pub fn to_camel_case(name: &str) -> String {
    let pascal = to_pascal_case(name);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn sanitize_class_name(name: &str) -> String {
    let s = to_camel_case(name);
    if s.is_empty() {
        FALLBACK_CLASS.to_string()
    } else {
        s
    }
}

/// Component identifier, also the stem of every generated filename.
pub fn component_name(name: &str) -> String {
    let s = to_pascal_case(name);
    if s.is_empty() {
        FALLBACK_COMPONENT.to_string()
    } else {
        s
    }
}

/// Issues class names that never collide case-insensitively within one tree.
#[derive(Debug, Clone, Default)]
pub struct ClassNameScope {
    used: HashSet<String>,
}

impl ClassNameScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a class name as taken without issuing it.
    pub fn reserve(&mut self, class_name: &str) {
        self.used.insert(class_name.to_lowercase());
    }

    /// Sanitizes `raw_name` and suffixes `2`, `3`, ... until the result is free.
    pub fn claim(&mut self, raw_name: &str) -> String {
        let base = sanitize_class_name(raw_name);
        if self.used.insert(base.to_lowercase()) {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{}{}", base, n);
            if self.used.insert(candidate.to_lowercase()) {
                tracing::debug!("class name {:?} taken, using {:?}", base, candidate);
                return candidate;
            }
            n += 1;
        }
    }
}
