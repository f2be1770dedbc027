//! Expected-answer records (keywords + concepts) keyed by question text.
//!
//! Lookup order: normalized exact text, then the first four normalized words,
//! then the generic default record.

pub struct ExpectedAnswer {
    pub question: &'static str,
    pub answer: &'static str,
    pub keywords: &'static [&'static str],
    pub concepts: &'static [&'static str],
}

const PREFIX_WORDS: usize = 4;

pub static EXPECTED_ANSWERS: &[ExpectedAnswer] = &[
    ExpectedAnswer {
        question: "Tell me about yourself and your background.",
        answer: "Provide a brief professional summary highlighting your experience, skills, and career goals. Focus on relevant achievements and what makes you a good fit for the role.",
        keywords: &["experience", "skills", "achievements", "professional", "career"],
        concepts: &["background", "qualifications", "goals", "fit"],
    },
    ExpectedAnswer {
        question: "What is your experience with your field?",
        answer: "Discuss your relevant work experience, projects, technologies used, and key accomplishments. Highlight specific examples that demonstrate your expertise.",
        keywords: &["experience", "projects", "technologies", "accomplishments", "expertise"],
        concepts: &["work history", "technical skills", "achievements", "knowledge"],
    },
    ExpectedAnswer {
        question: "How would you approach a challenging project?",
        answer: "Describe your problem-solving methodology, planning process, risk assessment, team collaboration, and how you handle obstacles. Include specific steps and examples.",
        keywords: &["methodology", "planning", "risk assessment", "collaboration", "obstacles"],
        concepts: &["problem-solving", "project management", "teamwork", "strategy"],
    },
];

pub static DEFAULT_EXPECTED: ExpectedAnswer = ExpectedAnswer {
    question: "",
    answer: "Provide a comprehensive answer with specific examples and demonstrate your understanding of the topic.",
    keywords: &["experience", "knowledge", "examples", "understanding"],
    concepts: &["expertise", "application", "problem-solving"],
};

/// Lower-cases, drops sentence punctuation and collapses whitespace.
pub fn normalize_question(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | '?' | '!' | ';' | ':' | '"' | '\''))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn prefix(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().take(PREFIX_WORDS).collect()
}

pub fn lookup_expected(question_text: &str) -> &'static ExpectedAnswer {
    let wanted = normalize_question(question_text);
    if wanted.is_empty() {
        return &DEFAULT_EXPECTED;
    }

    if let Some(exact) = EXPECTED_ANSWERS
        .iter()
        .find(|e| normalize_question(e.question) == wanted)
    {
        return exact;
    }

    let wanted_prefix = prefix(&wanted);
    if wanted_prefix.len() == PREFIX_WORDS {
        if let Some(partial) = EXPECTED_ANSWERS
            .iter()
            .find(|e| prefix(&normalize_question(e.question)) == wanted_prefix)
        {
            return partial;
        }
    }

    &DEFAULT_EXPECTED
}
