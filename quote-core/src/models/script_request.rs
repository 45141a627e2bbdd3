use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while turning a raw quote request into a [`ScriptRequest`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    #[error("unknown script language '{0}' (expected one of: python, powershell, bash, nodejs)")]
    UnknownLanguage(String),

    #[error("unknown target operating system '{0}' (expected one of: windows, macos, linux)")]
    UnknownOs(String),

    #[error("at least one target operating system is required")]
    NoTargetOs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Powershell,
    Bash,
    Nodejs,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[
            Language::Python,
            Language::Powershell,
            Language::Bash,
            Language::Nodejs,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Powershell => "powershell",
            Self::Bash => "bash",
            Self::Nodejs => "nodejs",
        }
    }

    /// Parses a wire name, ignoring surrounding whitespace and ASCII case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "python" => Some(Self::Python),
            "powershell" => Some(Self::Powershell),
            "bash" => Some(Self::Bash),
            "nodejs" => Some(Self::Nodejs),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetOs {
    Windows,
    Macos,
    Linux,
}

impl TargetOs {
    pub fn all() -> &'static [TargetOs] {
        &[TargetOs::Windows, TargetOs::Macos, TargetOs::Linux]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Macos => "macos",
            Self::Linux => "linux",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" => Some(Self::Windows),
            "macos" => Some(Self::Macos),
            "linux" => Some(Self::Linux),
            _ => None,
        }
    }
}

impl fmt::Display for TargetOs {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional extras that each add a fixed surcharge to a quote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptFeatures {
    pub needs_packaging: bool,
    pub requires_network: bool,
    pub needs_scheduler: bool,
}

/// A validated custom-script request, ready to be priced.
///
/// The target OS list is a set: naming the same OS twice counts once.
/// Construction guarantees at least one target OS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptRequest {
    language: Language,
    os: BTreeSet<TargetOs>,
    features: ScriptFeatures,
}

impl ScriptRequest {
    pub fn new(
        language: Language,
        os: impl IntoIterator<Item = TargetOs>,
        features: ScriptFeatures,
    ) -> Result<Self, QuoteError> {
        let os: BTreeSet<TargetOs> = os.into_iter().collect();
        if os.is_empty() {
            return Err(QuoteError::NoTargetOs);
        }

        Ok(Self {
            language,
            os,
            features,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn os(&self) -> &BTreeSet<TargetOs> {
        &self.os
    }

    pub fn features(&self) -> ScriptFeatures {
        self.features
    }
}

/// Body of `POST /quotes` exactly as the site's form submits it.
///
/// Enum-like fields stay as strings here so that unrecognized values can be
/// reported by name instead of failing deserialization wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub language: String,
    #[serde(default)]
    pub os: Vec<String>,
    #[serde(default)]
    pub needs_packaging: bool,
    #[serde(default)]
    pub requires_network: bool,
    #[serde(default)]
    pub needs_scheduler: bool,
}

impl QuoteRequest {
    /// Checks the raw request and converts it into a [`ScriptRequest`].
    ///
    /// # Errors
    ///
    /// - [`QuoteError::UnknownLanguage`] for a language outside the supported four
    /// - [`QuoteError::UnknownOs`] for the first unrecognized OS name
    /// - [`QuoteError::NoTargetOs`] when `os` is empty
    pub fn validate(&self) -> Result<ScriptRequest, QuoteError> {
        let language = Language::parse(&self.language)
            .ok_or_else(|| QuoteError::UnknownLanguage(self.language.clone()))?;

        let os = self
            .os
            .iter()
            .map(|name| TargetOs::parse(name).ok_or_else(|| QuoteError::UnknownOs(name.clone())))
            .collect::<Result<Vec<_>, _>>()?;

        ScriptRequest::new(
            language,
            os,
            ScriptFeatures {
                needs_packaging: self.needs_packaging,
                requires_network: self.requires_network,
                needs_scheduler: self.needs_scheduler,
            },
        )
    }
}
