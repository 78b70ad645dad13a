//! Shape of the Moodle XML interchange format.
//!
//! Attributes are mapped with the `@` prefix understood by quick-xml's serde support.
//! Every field is defaulted so that documents omitting elements still decode; unknown
//! elements are ignored.

use serde::{Deserialize, Serialize};

pub const MULTICHOICE: &str = "multichoice";
pub const HTML_FORMAT: &str = "html";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "quiz")]
pub struct Quiz {
    #[serde(rename = "question", default)]
    pub questions: Vec<WireQuestion>,
}

/// A `<name>`, `<questiontext>` or feedback element: an optional `format` attribute
/// around a `<text>` child.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireText {
    #[serde(rename = "@format", default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default)]
    pub text: String,
}

impl WireText {
    pub fn html(text: impl Into<String>) -> Self {
        Self {
            format: Some(HTML_FORMAT.to_owned()),
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self { format: None, text: text.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireQuestion {
    #[serde(rename = "@type", default)]
    pub question_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<WireText>,
    #[serde(rename = "questiontext", default)]
    pub question_text: WireText,
    #[serde(rename = "generalfeedback", default)]
    pub general_feedback: WireText,
    #[serde(rename = "defaultgrade", default)]
    pub default_grade: String,
    #[serde(default)]
    pub penalty: String,
    #[serde(default)]
    pub hidden: String,
    #[serde(rename = "idnumber", default)]
    pub id_number: String,
    #[serde(default)]
    pub single: String,
    #[serde(rename = "shuffleanswers", default)]
    pub shuffle_answers: String,
    #[serde(rename = "answernumbering", default)]
    pub answer_numbering: String,
    #[serde(rename = "showstandardinstruction", default)]
    pub show_standard_instruction: String,
    #[serde(rename = "correctfeedback", default)]
    pub correct_feedback: WireText,
    #[serde(rename = "partiallycorrectfeedback", default)]
    pub partially_correct_feedback: WireText,
    #[serde(rename = "incorrectfeedback", default)]
    pub incorrect_feedback: WireText,
    #[serde(rename = "answer", default)]
    pub answers: Vec<WireAnswer>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireAnswer {
    #[serde(rename = "@fraction", default)]
    pub fraction: String,
    #[serde(rename = "@format", default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub feedback: WireText,
}
