use crate::core::models::option::AnswerOption;
use crate::core::models::question::{Question, DEFAULT_GRADE, DEFAULT_PENALTY};
use crate::core::models::wire::{Quiz, WireQuestion, MULTICHOICE};
use crate::core::moodle::text::clean_text;
use crate::error::Error;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::Read;

const ROOT_ELEMENT: &[u8] = b"quiz";

/// Something the parser dropped on the floor instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    UnsupportedQuestion { index: usize, question_type: String, single: String },
    UnparsableFraction { question_index: usize, answer_index: usize, fraction: String },
}

#[derive(Debug, Default)]
pub struct Parsed {
    pub questions: Vec<Question>,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn parse<R: Read>(reader: R) -> Result<Vec<Question>, Error> {
    Ok(parse_with_diagnostics(reader)?.questions)
}

pub fn parse_with_diagnostics<R: Read>(mut reader: R) -> Result<Parsed, Error> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;
    let quiz = decode_quiz(std::str::from_utf8(&raw)?)?;

    let mut parsed = Parsed::default();
    for (index, wq) in quiz.questions.iter().enumerate() {
        if !is_supported(wq) {
            parsed.diagnostics.push(Diagnostic::UnsupportedQuestion {
                index,
                question_type: wq.question_type.clone(),
                single: wq.single.clone(),
            });
            continue;
        }
        for (answer_index, answer) in wq.answers.iter().enumerate() {
            if parse_decimal(&answer.fraction).is_none() {
                parsed.diagnostics.push(Diagnostic::UnparsableFraction {
                    question_index: index,
                    answer_index,
                    fraction: answer.fraction.clone(),
                });
            }
        }
        parsed.questions.push(from_wire_question(wq));
    }
    Ok(parsed)
}

/// Decodes a document into the wire schema, rejecting anything not rooted at `<quiz>`.
pub fn decode_quiz(xml: &str) -> Result<Quiz, Error> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                if e.local_name().as_ref() != ROOT_ELEMENT {
                    let found = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    return Err(Error::DecodeError(format!("expected root element <quiz>, found <{found}>")));
                }
                break;
            }
            Event::Eof => return Err(Error::DecodeError("document has no root element".into())),
            _ => {}
        }
    }
    Ok(quick_xml::de::from_str(xml)?)
}

pub fn is_supported(wq: &WireQuestion) -> bool {
    wq.question_type == MULTICHOICE && wq.single == "true"
}

/// Converts one wire question into the internal model. Answers whose fraction does not
/// parse are skipped and `option_order` counts only the answers that survive.
pub fn from_wire_question(wq: &WireQuestion) -> Question {
    let answer_options = wq
        .answers
        .iter()
        .filter_map(|a| parse_decimal(&a.fraction).map(|fraction| (a, fraction)))
        .enumerate()
        .map(|(i, (a, fraction))| AnswerOption {
            answer_text: clean_text(&a.text),
            is_correct: fraction > 0.0,
            fraction: Some(fraction),
            option_order: i as i32 + 1,
            ..Default::default()
        })
        .collect();

    Question {
        question_text: clean_text(&wq.question_text.text),
        moodle_name: wq.name.as_ref().map(|n| n.text.clone()),
        default_grade: parse_decimal(&wq.default_grade).unwrap_or(DEFAULT_GRADE),
        penalty: parse_decimal(&wq.penalty).unwrap_or(DEFAULT_PENALTY),
        shuffle_answers: !matches!(wq.shuffle_answers.as_str(), "false" | "0"),
        is_approved: false,
        answer_options,
        ..Default::default()
    }
}

/// Finite decimals only; `NaN` and infinities count as unparsable.
fn parse_decimal(s: &str) -> Option<f64> {
    s.parse().ok().filter(|v: &f64| v.is_finite())
}
