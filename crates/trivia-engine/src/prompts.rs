//! Prompt construction for the three model calls.
//!
//! The previous-questions list is a "do not repeat" hint to the model, not a
//! hard uniqueness guarantee; real duplicate detection is the embedding
//! lookup in [`crate::similarity`].

use trivia_core::{EvaluationResult, Language, TriviaQuestion};

/// System instruction for the generator, fixed to the target language.
#[must_use]
pub fn generator_system(language: Language) -> String {
    match language {
        Language::En => "You are a trivia question writer. You write one multiple-choice \
                         question at a time, in English, with exactly 4 options, one correct \
                         answer, a brief explanation of the correct answer, and a hint that \
                         narrows the field without giving the answer away."
            .to_string(),
        Language::Es => "Eres un redactor de preguntas de trivia. Escribes una pregunta de \
                         opcion multiple a la vez, en espanol, con exactamente 4 opciones, una \
                         respuesta correcta, una breve explicacion de la respuesta correcta y \
                         una pista que reduzca las opciones sin revelar la respuesta."
            .to_string(),
    }
}

/// User instruction for the generator: the topic plus the full list of
/// previously asked question texts.
#[must_use]
pub fn generator_user(topic: &str, previous_questions: &[String]) -> String {
    let mut prompt = format!(
        "Generate a multiple-choice trivia question about {topic} with 4 options. \
         Provide the correct answer index, a brief explanation, and a hint."
    );
    if !previous_questions.is_empty() {
        prompt.push_str(
            "\nEnsure the question is not too similar to any of these previous questions:\n",
        );
        for question in previous_questions {
            prompt.push_str("- ");
            prompt.push_str(question);
            prompt.push('\n');
        }
    }
    prompt
}

/// System instruction for the evaluator.
#[must_use]
pub fn evaluator_system() -> String {
    "You are a strict trivia question reviewer. Score the given question on five axes, \
     each an integer from 1 to 10: clarity, difficulty, uniqueness, explanationQuality, \
     hintQuality. Score uniqueness below 7 if the question is too similar to any of the \
     previous questions. Then give an overallVerdict of \"pass\" only if every axis is \
     acceptable, otherwise \"fail\"."
        .to_string()
}

/// User instruction for the evaluator: the candidate question and the
/// previous-questions list it must be distinct from.
#[must_use]
pub fn evaluator_user(question: &TriviaQuestion, previous_questions: &[String]) -> String {
    let question_json =
        serde_json::to_string_pretty(question).unwrap_or_else(|_| question.question.clone());
    let mut prompt = format!("Evaluate this trivia question:\n{question_json}\n");
    if previous_questions.is_empty() {
        prompt.push_str("There are no previous questions.\n");
    } else {
        prompt.push_str("Previous questions:\n");
        for q in previous_questions {
            prompt.push_str("- ");
            prompt.push_str(q);
            prompt.push('\n');
        }
    }
    prompt
}

/// System instruction for the optimizer.
#[must_use]
pub fn optimizer_system() -> String {
    "You are a trivia question editor. Revise the given question to fix only the weak \
     areas named, keeping everything that already works. Keep the same topic, exactly 4 \
     options, one correct answer index, an explanation, and a hint."
        .to_string()
}

/// User instruction for the optimizer: the failing question, its scores, and
/// the axes that need work.
#[must_use]
pub fn optimizer_user(question: &TriviaQuestion, evaluation: &EvaluationResult) -> String {
    let question_json =
        serde_json::to_string_pretty(question).unwrap_or_else(|_| question.question.clone());
    let weak = evaluation.weak_axes(7);
    let focus = if weak.is_empty() {
        "overall quality".to_string()
    } else {
        weak.join(", ")
    };
    format!(
        "This question failed review:\n{question_json}\n\
         Scores: clarity {}, difficulty {}, uniqueness {}, explanation quality {}, \
         hint quality {}.\n\
         Revise it, improving: {focus}.",
        evaluation.clarity,
        evaluation.difficulty,
        evaluation.uniqueness,
        evaluation.explanation_quality,
        evaluation.hint_quality,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_core::Verdict;

    fn question() -> TriviaQuestion {
        TriviaQuestion {
            question: "What is the closest star to Earth?".into(),
            options: vec![
                "The Sun".into(),
                "Proxima Centauri".into(),
                "Sirius".into(),
                "Alpha Centauri A".into(),
            ],
            correct_answer: 0,
            explanation: "The Sun is a star, roughly 8 light-minutes away.".into(),
            hint: "You see it every day.".into(),
        }
    }

    #[test]
    fn generator_user_embeds_topic_and_history() {
        let previous = vec!["What is a nebula?".to_string()];
        let prompt = generator_user("astronomy", &previous);
        assert!(prompt.contains("astronomy"));
        assert!(prompt.contains("What is a nebula?"));
    }

    #[test]
    fn generator_user_omits_history_block_when_empty() {
        let prompt = generator_user("astronomy", &[]);
        assert!(!prompt.contains("previous questions"));
    }

    #[test]
    fn generator_system_is_language_specific() {
        assert!(generator_system(Language::En).contains("in English"));
        assert!(generator_system(Language::Es).contains("en espanol"));
    }

    #[test]
    fn optimizer_user_names_weak_axes() {
        let evaluation = EvaluationResult {
            clarity: 9,
            difficulty: 8,
            uniqueness: 4,
            explanation_quality: 9,
            hint_quality: 6,
            overall_verdict: Verdict::Fail,
        };
        let prompt = optimizer_user(&question(), &evaluation);
        assert!(prompt.contains("uniqueness, hint quality"));
    }
}
