use crate::core::models::question::Question;
use crate::core::models::wire::{Quiz, WireAnswer, WireQuestion, WireText, HTML_FORMAT, MULTICHOICE};
use crate::error::Error;
use quick_xml::se::Serializer;
use serde::Serialize;
use std::io::Write;

pub const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

pub fn export(questions: &[Question]) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    export_to(questions, &mut buf)?;
    Ok(buf)
}

/// Writes the XML declaration followed by the `<quiz>` document. Nothing is written
/// when any question fails to convert.
pub fn export_to<W: Write>(questions: &[Question], mut writer: W) -> Result<(), Error> {
    let questions = questions
        .iter()
        .map(|q| {
            to_wire_question(q).map_err(|e| match e {
                e @ Error::ConvertError { .. } => e,
                other => Error::ConvertError {
                    id: q.id,
                    reason: other.to_string(),
                },
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let quiz = Quiz { questions };

    let mut xml = String::from(XML_HEADER);
    let mut ser = Serializer::new(&mut xml);
    ser.indent(' ', 2);
    quiz.serialize(ser)?;
    xml.push('\n');

    writer.write_all(xml.as_bytes())?;
    Ok(())
}

pub fn to_wire_question(q: &Question) -> Result<WireQuestion, Error> {
    let name = match q.moodle_name.as_deref() {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => format!("Question {}", q.id),
    };

    let answers = q
        .answer_options
        .iter()
        .map(|a| WireAnswer {
            fraction: if a.is_correct {
                "100".to_owned()
            } else {
                a.fraction.map_or_else(|| "0".to_owned(), |f| format!("{f:.0}"))
            },
            format: Some(HTML_FORMAT.to_owned()),
            text: a.answer_text.clone(),
            feedback: WireText::html(""),
        })
        .collect();

    Ok(WireQuestion {
        question_type: MULTICHOICE.to_owned(),
        name: Some(WireText::plain(name)),
        question_text: WireText::html(q.question_text.clone()),
        general_feedback: WireText::html(""),
        default_grade: format!("{:.7}", q.default_grade),
        penalty: format!("{:.7}", q.penalty),
        hidden: "0".to_owned(),
        id_number: String::new(),
        single: "true".to_owned(),
        shuffle_answers: q.shuffle_answers.to_string(),
        answer_numbering: "none".to_owned(),
        show_standard_instruction: "1".to_owned(),
        correct_feedback: WireText::html(""),
        partially_correct_feedback: WireText::html(""),
        incorrect_feedback: WireText::html(""),
        answers,
    })
}
