//! Language catalog and per-language recognizer profiles
//!
//! The engine dispatches on a closed language enumeration: each supported
//! language maps to a small profile of recognizer predicates (loop-header
//! test, function-definition test, collection-op tokens) resolved once per
//! analysis call. Unrecognized tags fall back to the C-family (JavaScript)
//! profile, so resolution is total.
//!
//! The static catalog is the single source for both language detection and
//! the profiles, which keeps the two consistent by construction.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::shared::text;

/// Closed set of supported language tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageId {
    JavaScript,
    TypeScript,
    Python,
    Java,
    Cpp,
    Go,
    Rust,
}

impl LanguageId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Python => "python",
            Self::Java => "java",
            Self::Cpp => "cpp",
            Self::Go => "go",
            Self::Rust => "rust",
        }
    }

    /// Parse a user-supplied tag. Accepts the common short aliases.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "javascript" | "js" | "jsx" => Some(Self::JavaScript),
            "typescript" | "ts" | "tsx" => Some(Self::TypeScript),
            "python" | "py" => Some(Self::Python),
            "java" => Some(Self::Java),
            "cpp" | "c++" | "c" | "cxx" => Some(Self::Cpp),
            "go" | "golang" => Some(Self::Go),
            "rust" | "rs" => Some(Self::Rust),
            _ => None,
        }
    }
}

/// How a language delimits blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStyle {
    /// `{` / `}` counting (C family).
    Braces,
    /// Indentation levels below a `:`-terminated header (Python).
    Indentation,
}

/// One row of the static language catalog.
pub struct LanguageSpec {
    pub id: LanguageId,
    pub display_name: &'static str,
    pub file_extensions: &'static [&'static str],
    /// Signals scored by `detect_language` when no extension is available.
    pub keywords: &'static [&'static str],
    /// Regex source for "is this line a loop header".
    pub loop_hint: &'static str,
}

/// Static catalog of supported languages.
pub static SUPPORTED_LANGUAGES: &[LanguageSpec] = &[
    LanguageSpec {
        id: LanguageId::JavaScript,
        display_name: "JavaScript",
        file_extensions: &["js", "jsx", "mjs"],
        keywords: &["function ", "const ", "let ", "var ", "=>", "console.log"],
        loop_hint: C_FAMILY_LOOP,
    },
    LanguageSpec {
        id: LanguageId::TypeScript,
        display_name: "TypeScript",
        file_extensions: &["ts", "tsx"],
        keywords: &["interface ", ": string", ": number", "enum ", "=>", "export "],
        loop_hint: C_FAMILY_LOOP,
    },
    LanguageSpec {
        id: LanguageId::Python,
        display_name: "Python",
        file_extensions: &["py"],
        keywords: &["def ", "import ", "self.", "elif ", "None", "print("],
        loop_hint: r"^\s*(?:for|while)\b[^:]*:",
    },
    LanguageSpec {
        id: LanguageId::Java,
        display_name: "Java",
        file_extensions: &["java"],
        keywords: &["public ", "private ", "void ", "System.out", "extends ", "new "],
        loop_hint: C_FAMILY_LOOP,
    },
    LanguageSpec {
        id: LanguageId::Cpp,
        display_name: "C/C++",
        file_extensions: &["c", "h", "cpp", "cc", "cxx", "hpp"],
        keywords: &["#include", "std::", "cout", "nullptr", "template<", "printf("],
        loop_hint: C_FAMILY_LOOP,
    },
    LanguageSpec {
        id: LanguageId::Go,
        display_name: "Go",
        file_extensions: &["go"],
        keywords: &["func ", "package ", ":= ", "fmt.", "go func"],
        loop_hint: r"^\s*for\b",
    },
    LanguageSpec {
        id: LanguageId::Rust,
        display_name: "Rust",
        file_extensions: &["rs"],
        keywords: &["fn ", "let mut ", "impl ", "match ", "println!", "&str"],
        loop_hint: r"^\s*(?:for\s+\w+.*\bin\b|while\s|loop\s*\{)",
    },
];

const C_FAMILY_LOOP: &str = r"(?:^|[\s})])(?:for|while)\s*\(|^\s*do\s*\{";

/// Resolved recognizer set for one language.
///
/// Holds compiled regexes; obtained from the process-wide table, never
/// constructed per call.
pub struct LanguageProfile {
    pub id: LanguageId,
    pub block_style: BlockStyle,
    loop_header: Regex,
    function_def: Regex,
    collection_ops: &'static [&'static str],
}

/// Names that a C-family function-definition regex can capture but which are
/// control-flow keywords, not function names.
const CONTROL_KEYWORDS: &[&str] = &["if", "for", "while", "switch", "catch", "return", "else"];

static KEYED_ACCESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z_]\w*\s*\[[^\[\]]+\]").expect("keyed access regex"));

static PROFILES: Lazy<Vec<LanguageProfile>> = Lazy::new(|| {
    SUPPORTED_LANGUAGES
        .iter()
        .map(|spec| {
            let (function_def, block_style, collection_ops) = language_details(spec.id);
            LanguageProfile {
                id: spec.id,
                block_style,
                loop_header: Regex::new(spec.loop_hint).expect("loop header regex"),
                function_def: Regex::new(function_def).expect("function def regex"),
                collection_ops,
            }
        })
        .collect()
});

fn language_details(id: LanguageId) -> (&'static str, BlockStyle, &'static [&'static str]) {
    match id {
        LanguageId::JavaScript | LanguageId::TypeScript => (
            r"function\s+([A-Za-z_$][\w$]*)\s*\(|(?:const|let|var)\s+([A-Za-z_$][\w$]*)\s*=\s*(?:async\s+)?(?:function\b|\()",
            BlockStyle::Braces,
            &[
                ".includes(",
                ".indexOf(",
                ".lastIndexOf(",
                ".find(",
                ".filter(",
                ".map(",
                ".forEach(",
                ".some(",
                ".every(",
                ".reduce(",
                ".substring(",
                ".substr(",
            ],
        ),
        LanguageId::Python => (
            r"^\s*def\s+([A-Za-z_]\w*)\s*\(",
            BlockStyle::Indentation,
            &[
                " in ",
                ".count(",
                ".index(",
                "filter(",
                "map(",
                ".find(",
                ".startswith(",
                ".endswith(",
            ],
        ),
        LanguageId::Java => (
            r"(?:\w[\w<>\[\],\s]*)\s+([A-Za-z_]\w*)\s*\([^;{]*\)\s*\{",
            BlockStyle::Braces,
            &[
                ".contains(",
                ".indexOf(",
                ".stream(",
                ".filter(",
                ".map(",
                ".forEach(",
            ],
        ),
        LanguageId::Cpp => (
            r"[\w:<>~*&]+\s+([A-Za-z_]\w*)\s*\([^;{]*\)\s*\{",
            BlockStyle::Braces,
            &[
                "std::find(",
                "std::count(",
                ".find(",
                ".count(",
                "strstr(",
                "strchr(",
            ],
        ),
        LanguageId::Go => (
            r"^\s*func\s+(?:\([^)]*\)\s*)?([A-Za-z_]\w*)\s*\(",
            BlockStyle::Braces,
            &[
                "strings.Contains(",
                "strings.Index(",
                "strings.HasPrefix(",
                "strings.HasSuffix(",
            ],
        ),
        LanguageId::Rust => (
            r"^\s*(?:pub(?:\([^)]*\))?\s+)?fn\s+([A-Za-z_]\w*)",
            BlockStyle::Braces,
            &[
                ".contains(",
                ".find(",
                ".position(",
                ".filter(",
                ".map(",
                ".iter()",
            ],
        ),
    }
}

impl LanguageProfile {
    /// Resolve a tag to its profile. Unknown tags get the C-family default.
    pub fn resolve(tag: &str) -> &'static LanguageProfile {
        let id = LanguageId::from_tag(tag).unwrap_or(LanguageId::JavaScript);
        Self::for_id(id)
    }

    pub fn for_id(id: LanguageId) -> &'static LanguageProfile {
        PROFILES
            .iter()
            .find(|p| p.id == id)
            .unwrap_or(&PROFILES[0])
    }

    /// Does this line open a loop?
    pub fn is_loop_header(&self, line: &str) -> bool {
        self.loop_header.is_match(line)
    }

    /// Does this line define a function? (Name extraction can still fail on
    /// a matching line; callers fall back to a placeholder name.)
    pub fn is_function_def(&self, line: &str) -> bool {
        self.function_def.is_match(line)
    }

    /// Extract the defined function's name from a definition line.
    pub fn function_name(&self, line: &str) -> Option<String> {
        let caps = self.function_def.captures(line)?;
        let name = caps
            .iter()
            .skip(1)
            .flatten()
            .map(|m| m.as_str())
            .next()?;
        if CONTROL_KEYWORDS.contains(&name) {
            return None;
        }
        Some(name.to_string())
    }

    /// Does this line perform a collection search/iteration operation?
    pub fn is_collection_op(&self, line: &str) -> bool {
        text::contains_any(line, self.collection_ops)
    }

    /// Does this line perform a bracket-indexed read/write?
    pub fn is_keyed_access(&self, line: &str) -> bool {
        KEYED_ACCESS.is_match(line)
    }
}

/// Best-effort language detection from filename extension, then keyword
/// scoring over the code body. Always returns something; JavaScript is the
/// default when nothing matches.
pub fn detect_language(code: &str, filename: Option<&str>) -> LanguageId {
    if let Some(name) = filename {
        if let Some((_, ext)) = name.rsplit_once('.') {
            let ext = ext.to_ascii_lowercase();
            for spec in SUPPORTED_LANGUAGES {
                if spec.file_extensions.contains(&ext.as_str()) {
                    return spec.id;
                }
            }
        }
    }

    let mut best = LanguageId::JavaScript;
    let mut best_score = 0usize;
    for spec in SUPPORTED_LANGUAGES {
        let score = spec.keywords.iter().filter(|k| code.contains(*k)).count();
        if score > best_score {
            best = spec.id;
            best_score = score;
        }
    }
    best
}
