//! Skill dictionary and whole-word matching.
//!
//! Category order is significant: it is the priority order used to break ties
//! in the domain classifier.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Category name → matched skills (in dictionary order). Every category is present,
/// possibly with an empty list.
pub type SkillMap = BTreeMap<String, Vec<String>>;

pub struct SkillCategory {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Programming Languages",
        keywords: &[
            "javascript", "js", "python", "java", "c++", "cpp", "c#", "csharp", "php", "ruby",
            "go", "golang", "rust", "swift", "kotlin", "typescript", "ts", "scala",
            "r programming", "matlab", "perl", "shell", "bash", "powershell",
        ],
    },
    SkillCategory {
        name: "Web Technologies",
        keywords: &[
            "html", "html5", "css", "css3", "react", "reactjs", "angular", "angularjs", "vue",
            "vuejs", "node.js", "nodejs", "express", "expressjs", "django", "flask",
            "spring boot", "spring", "laravel", "bootstrap", "tailwind", "sass", "scss",
            "webpack", "vite", "next.js", "nextjs", "nuxt", "svelte",
        ],
    },
    SkillCategory {
        name: "Databases",
        keywords: &[
            "mysql", "postgresql", "postgres", "mongodb", "mongo", "redis", "sqlite", "oracle",
            "sql server", "mssql", "dynamodb", "cassandra", "elasticsearch", "firebase",
            "supabase", "mariadb",
        ],
    },
    SkillCategory {
        name: "Cloud & DevOps",
        keywords: &[
            "aws", "amazon web services", "azure", "microsoft azure", "gcp", "google cloud",
            "docker", "kubernetes", "k8s", "jenkins", "gitlab", "github actions", "terraform",
            "ansible", "puppet", "chef", "ci/cd", "devops",
        ],
    },
    SkillCategory {
        name: "Data Science & AI",
        keywords: &[
            "machine learning", "ml", "deep learning", "dl", "artificial intelligence", "ai",
            "tensorflow", "pytorch", "pandas", "numpy", "scikit-learn", "sklearn", "jupyter",
            "tableau", "power bi", "data analysis", "statistics", "nlp", "computer vision",
        ],
    },
    SkillCategory {
        name: "Mobile Development",
        keywords: &[
            "android", "ios", "react native", "flutter", "ionic", "xamarin", "cordova", "swift",
            "objective-c", "kotlin", "java android", "mobile development",
        ],
    },
    SkillCategory {
        name: "Tools & Software",
        keywords: &[
            "git", "github", "gitlab", "bitbucket", "jira", "confluence", "slack", "teams",
            "figma", "photoshop", "illustrator", "sketch", "vs code", "visual studio",
            "intellij", "eclipse",
        ],
    },
];

struct CompiledCategory {
    name: &'static str,
    matchers: Vec<(&'static str, Regex)>,
}

static COMPILED: LazyLock<Vec<CompiledCategory>> = LazyLock::new(|| {
    SKILL_CATEGORIES
        .iter()
        .map(|category| CompiledCategory {
            name: category.name,
            matchers: category
                .keywords
                .iter()
                .map(|kw| (*kw, whole_word_pattern(kw)))
                .collect(),
        })
        .collect()
});

/// Builds a matcher that accepts `keyword` only when it is not glued to other
/// word characters. Keywords ending in symbols (`c++`, `c#`, `node.js`) still
/// match, which a plain `\b` anchor would miss.
pub fn whole_word_pattern(keyword: &str) -> Regex {
    let pattern = format!(r"(?:^|\W){}(?:$|\W)", regex::escape(&keyword.to_lowercase()));
    Regex::new(&pattern).expect("escaped keyword is always a valid pattern")
}

/// Matches every dictionary keyword against `lower_text` (already lower-cased).
pub fn extract_skills(lower_text: &str) -> SkillMap {
    COMPILED
        .iter()
        .map(|category| {
            let found = category
                .matchers
                .iter()
                .filter(|(_, re)| re.is_match(lower_text))
                .map(|(kw, _)| kw.to_string())
                .collect();
            (category.name.to_string(), found)
        })
        .collect()
}

/// An all-categories, no-skills map.
pub fn empty_skill_map() -> SkillMap {
    SKILL_CATEGORIES
        .iter()
        .map(|c| (c.name.to_string(), Vec::new()))
        .collect()
}

pub fn total_skill_count(skills: &SkillMap) -> usize {
    skills.values().map(Vec::len).sum()
}

pub fn non_empty_categories(skills: &SkillMap) -> usize {
    skills.values().filter(|v| !v.is_empty()).count()
}
