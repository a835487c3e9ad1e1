use super::*;

#[test]
fn every_question_has_an_answer() {
    assert!(!QUESTIONS.is_empty());
    for (question, answer) in QUESTIONS {
        assert!(question.starts_with('¿') && question.ends_with('?'), "{question}");
        assert!(!answer.trim().is_empty(), "{question}");
    }
}

#[test]
fn document_answer_matches_upload_limits() {
    let (_, answer) = QUESTIONS.iter().find(|(q, _)| q.contains("documentos")).copied().unwrap_or_default();
    assert!(answer.contains("5MB"));
    assert!(answer.contains("pdf"));
}
