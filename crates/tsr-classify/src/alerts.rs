//! Multilingual alert text.
//!
//! One template per supported language, rendered from a classification's
//! sign name and instruction.  Voice codes are carried for clients that
//! route the text to a speech engine; this crate does no playback.

use std::fmt;

use crate::result::Classification;

/// A supported alert language.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
    Hi,
    Te,
}

impl Language {
    /// All languages, in selector display order.
    pub const ALL: [Language; 6] = [
        Language::En,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::Hi,
        Language::Te,
    ];

    /// Two-letter language code.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Hi => "hi",
            Language::Te => "te",
        }
    }

    /// English display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Spanish",
            Language::Fr => "French",
            Language::De => "German",
            Language::Hi => "Hindi",
            Language::Te => "Telugu",
        }
    }

    /// BCP 47 voice tag for speech synthesis.
    pub fn voice(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Es => "es-ES",
            Language::Fr => "fr-FR",
            Language::De => "de-DE",
            Language::Hi => "hi-IN",
            Language::Te => "te-IN",
        }
    }

    /// Parse a two-letter code.  Unknown codes fall back to English, the
    /// same way the alert panel falls back when handed a code it has no
    /// template for.
    pub fn from_code(code: &str) -> Language {
        match code {
            "es" => Language::Es,
            "fr" => Language::Fr,
            "de" => Language::De,
            "hi" => Language::Hi,
            "te" => Language::Te,
            _ => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.display_name())
    }
}

/// Render the alert sentence for `result` in `language`.
pub fn alert_text(language: Language, result: &Classification) -> String {
    let name = &result.sign_name;
    let instruction = &result.instruction;
    match language {
        Language::En => {
            format!("Warning! {name} detected. {instruction}. Please comply.")
        }
        Language::Es => {
            format!("¡Advertencia! {name} detectado. {instruction}. Por favor cumpla.")
        }
        Language::Fr => {
            format!("Attention! {name} détecté. {instruction}. Veuillez vous conformer.")
        }
        Language::De => {
            format!("Warnung! {name} erkannt. {instruction}. Bitte beachten Sie.")
        }
        Language::Hi => {
            format!("चेतावनी! {name} का पता चला। {instruction}। कृपया अनुपालन करें।")
        }
        Language::Te => {
            format!("హెచ్చరిక! {name} గుర్తించబడింది. {instruction}. దయచేసి పాటించండి.")
        }
    }
}
