use g3_core::model::{Question, QuestionKind, TranslationDirection, WordPair};
use rand::Rng;
use rand::seq::SliceRandom;

use super::parse::PassageDraft;

const OPTION_COUNT: usize = 4;
const WRONG_COUNT: usize = OPTION_COUNT - 1;

const DEFAULT_ENGLISH: [&str; 7] = ["book", "water", "tree", "sun", "moon", "star", "friend"];
const DEFAULT_TELUGU: [&str; 7] = [
    "పుస్తకం",
    "నీరు",
    "చెట్టు",
    "సూర్యుడు",
    "చంద్రుడు",
    "నక్షత్రం",
    "స్నేహితుడు",
];
const EXTRA_WRONG: [&str; 5] = ["pencil", "bag", "shoe", "hat", "ball"];

struct PassageTemplate {
    passage: &'static str,
    question: &'static str,
    correct: &'static str,
    wrong: [&'static str; 3],
}

// `{word}` is replaced with the English word.
const PASSAGES: [PassageTemplate; 4] = [
    PassageTemplate {
        passage: "Emma had a new {word}. She was very excited about it. She showed the {word} to all her friends at school. Everyone thought the {word} was wonderful.",
        question: "What did Emma show to her friends?",
        correct: "{word}",
        wrong: ["book", "toy", "picture"],
    },
    PassageTemplate {
        passage: "Tom went to the park with his {word}. They played games together. The {word} helped Tom climb the big tree. It was a fun day at the park.",
        question: "Where did Tom go with his {word}?",
        correct: "park",
        wrong: ["school", "home", "store"],
    },
    PassageTemplate {
        passage: "The {word} was sitting in the garden. A butterfly came and landed on it. The {word} looked very beautiful in the sunshine. Many people stopped to look at the {word}.",
        question: "What landed on the {word}?",
        correct: "butterfly",
        wrong: ["bird", "bee", "flower"],
    },
    PassageTemplate {
        passage: "Sarah found a {word} on her way home. She picked it up carefully. The {word} was very special. She decided to keep the {word} as her treasure.",
        question: "What did Sarah decide to do with the {word}?",
        correct: "keep it as her treasure",
        wrong: ["throw it away", "give it to her friend", "sell it"],
    },
];

/// Multiple-choice translation question in a random direction.
pub(crate) fn translation_question<R: Rng + ?Sized>(
    word: &WordPair,
    all: &[WordPair],
    rng: &mut R,
) -> Question {
    let direction = if rng.random_bool(0.5) {
        TranslationDirection::TeluguToEnglish
    } else {
        TranslationDirection::EnglishToTelugu
    };

    let english = word.english.trim();
    let telugu = word.telugu.trim();
    let (prompt, correct, pool, defaults): (String, &str, Vec<&str>, &[&str]) = match direction {
        TranslationDirection::TeluguToEnglish => (
            format!("What is the English translation of \"{telugu}\"?"),
            english,
            all.iter().map(|w| w.english.as_str()).collect(),
            DEFAULT_ENGLISH.as_slice(),
        ),
        TranslationDirection::EnglishToTelugu => (
            format!("What is the Telugu translation of \"{english}\"?"),
            telugu,
            all.iter().map(|w| w.telugu.as_str()).collect(),
            DEFAULT_TELUGU.as_slice(),
        ),
    };

    let mut wrong: Vec<String> = Vec::with_capacity(WRONG_COUNT);
    let candidates = pool.into_iter().chain(defaults.iter().copied());
    for candidate in candidates {
        if wrong.len() == WRONG_COUNT {
            break;
        }
        let candidate = candidate.trim();
        if candidate.is_empty() || candidate == correct || wrong.iter().any(|w| w == candidate) {
            continue;
        }
        wrong.push(candidate.to_string());
    }
    wrong.shuffle(rng);

    Question {
        kind: QuestionKind::Translation,
        word: english.to_string(),
        prompt,
        passage: None,
        options: with_correct(wrong, correct, rng),
        correct: correct.to_string(),
        direction: Some(direction),
    }
}

/// Passage question built from one of the fixed story templates.
pub(crate) fn template_passage_question<R: Rng + ?Sized>(word: &WordPair, rng: &mut R) -> Question {
    let template = &PASSAGES[rng.random_range(0..PASSAGES.len())];
    let english = word.english.trim();
    let fill = |text: &str| text.replace("{word}", english);
    let correct = fill(template.correct);

    let mut wrong: Vec<String> = template
        .wrong
        .iter()
        .filter(|opt| !opt.eq_ignore_ascii_case(english))
        .map(|opt| (*opt).to_string())
        .collect();
    for extra in EXTRA_WRONG {
        if wrong.len() >= WRONG_COUNT {
            break;
        }
        if wrong.iter().any(|w| w == extra)
            || extra.eq_ignore_ascii_case(english)
            || extra.eq_ignore_ascii_case(&correct)
        {
            continue;
        }
        wrong.push(extra.to_string());
    }
    wrong.truncate(WRONG_COUNT);

    Question {
        kind: QuestionKind::Passage,
        word: word.english.clone(),
        prompt: fill(template.question),
        passage: Some(fill(template.passage)),
        options: with_correct(wrong, &correct, rng),
        correct,
        direction: None,
    }
}

/// Passage question from a parsed model response.
pub(crate) fn drafted_passage_question<R: Rng + ?Sized>(
    word: &WordPair,
    draft: PassageDraft,
    rng: &mut R,
) -> Question {
    let PassageDraft {
        passage,
        question,
        correct,
        wrong,
    } = draft;
    Question {
        kind: QuestionKind::Passage,
        word: word.english.clone(),
        prompt: question,
        passage: Some(passage),
        options: with_correct(wrong.into(), &correct, rng),
        correct,
        direction: None,
    }
}

fn with_correct<R: Rng + ?Sized>(mut wrong: Vec<String>, correct: &str, rng: &mut R) -> Vec<String> {
    let at = rng.random_range(0..=wrong.len());
    wrong.insert(at, correct.to_string());
    wrong
}
