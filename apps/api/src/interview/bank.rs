//! Static per-role question bank. Used directly when no generator is configured
//! and as the fallback for every other provider.

use serde::Serialize;

use crate::interview::models::{Difficulty, Question, QuestionType};

use crate::interview::models::Difficulty::{Easy, Hard, Medium};
use crate::interview::models::QuestionType::{Behavioral, Scenario, Technical};

pub struct BankQuestion {
    pub text: &'static str,
    pub question_type: QuestionType,
    pub difficulty: Difficulty,
}

const fn q(text: &'static str, question_type: QuestionType, difficulty: Difficulty) -> BankQuestion {
    BankQuestion {
        text,
        question_type,
        difficulty,
    }
}

impl From<&BankQuestion> for Question {
    fn from(b: &BankQuestion) -> Self {
        Question::new(b.text, b.question_type, b.difficulty)
    }
}

pub struct Role {
    pub id: &'static str,
    pub title: &'static str,
    pub required_skills: &'static [&'static str],
    pub questions: &'static [BankQuestion],
}

/// Serializable role summary for `GET /api/v1/roles`.
#[derive(Debug, Serialize)]
pub struct RoleSummary {
    pub id: &'static str,
    pub title: &'static str,
    pub required_skills: &'static [&'static str],
    pub question_count: usize,
}

pub const GENERAL_ROLE_ID: &str = "general";

pub static GENERAL_ROLE: Role = Role {
    id: GENERAL_ROLE_ID,
    title: "General Software Engineer",
    required_skills: &["Problem Solving", "Communication", "Git"],
    questions: &[
        q("Tell me about yourself and your background.", Behavioral, Easy),
        q("What is your experience with your field?", Behavioral, Medium),
        q("How would you approach a challenging project?", Scenario, Medium),
        q("Explain the difference between synchronous and asynchronous programming.", Technical, Medium),
        q("How do you handle errors in your code?", Technical, Easy),
        q("Describe a challenging bug you fixed recently.", Behavioral, Medium),
        q("Design a system to handle 1 million concurrent users.", Scenario, Hard),
        q("What are your favorite development tools and why?", Behavioral, Easy),
    ],
};

pub static ROLES: &[Role] = &[
    Role {
        id: "frontend-developer",
        title: "Frontend Developer",
        required_skills: &["HTML", "CSS", "JavaScript", "React", "TypeScript", "Git"],
        questions: &[
            q("Explain the difference between let, const, and var in JavaScript.", Technical, Medium),
            q("How do you optimize React component performance?", Technical, Hard),
            q("What is the CSS box model and how does it work?", Technical, Easy),
            q("Describe your experience with responsive web design.", Behavioral, Medium),
            q("How do you handle cross-browser compatibility issues?", Technical, Medium),
            q("What are React hooks and why are they useful?", Technical, Medium),
            q("Build a component that handles user authentication.", Scenario, Hard),
            q("Describe a challenging frontend project you worked on.", Behavioral, Easy),
            q("How do you manage state in a React application?", Technical, Hard),
            q("What tools do you use for debugging frontend issues?", Technical, Easy),
        ],
    },
    Role {
        id: "backend-developer",
        title: "Backend Developer",
        required_skills: &["Node.js", "Python", "SQL", "REST APIs", "Database Design", "Git"],
        questions: &[
            q("Explain the difference between SQL and NoSQL databases.", Technical, Medium),
            q("How do you design a RESTful API?", Technical, Medium),
            q("What is database indexing and why is it important?", Technical, Hard),
            q("How do you handle authentication and authorization?", Technical, Medium),
            q("Describe your experience with microservices architecture.", Behavioral, Hard),
            q("How do you optimize database queries for performance?", Technical, Hard),
            q("Design an API for a social media platform.", Scenario, Hard),
            q("How do you handle error handling in backend applications?", Technical, Medium),
            q("Describe a complex backend system you built.", Behavioral, Medium),
            q("How do you ensure data security in your applications?", Technical, Medium),
        ],
    },
    Role {
        id: "fullstack-developer",
        title: "Full Stack Developer",
        required_skills: &["JavaScript", "React", "Node.js", "SQL", "Git", "REST APIs"],
        questions: &[
            q("How do you structure a full-stack application?", Technical, Medium),
            q("Explain the communication between frontend and backend.", Technical, Medium),
            q("How do you handle state management across the full stack?", Technical, Hard),
            q("Describe your development workflow for full-stack projects.", Behavioral, Easy),
            q("How do you ensure consistency between frontend and backend?", Technical, Medium),
            q("What challenges have you faced in full-stack development?", Behavioral, Medium),
            q("How do you handle real-time data synchronization?", Technical, Hard),
            q("Explain your approach to testing full-stack applications.", Technical, Medium),
            q("How do you optimize performance across the entire stack?", Technical, Hard),
            q("Describe your experience with deployment and DevOps.", Behavioral, Medium),
        ],
    },
    Role {
        id: "data-scientist",
        title: "Data Scientist",
        required_skills: &["Python", "Machine Learning", "Statistics", "SQL", "Pandas", "NumPy"],
        questions: &[
            q("Explain the difference between supervised and unsupervised learning.", Technical, Medium),
            q("How do you handle missing data in datasets?", Technical, Medium),
            q("What is overfitting and how do you prevent it?", Technical, Medium),
            q("Describe your approach to feature engineering.", Technical, Hard),
            q("How do you evaluate the performance of a machine learning model?", Technical, Medium),
            q("Explain the bias-variance tradeoff.", Technical, Hard),
            q("Describe a data science project you are proud of.", Behavioral, Easy),
            q("How do you communicate technical findings to non-technical stakeholders?", Behavioral, Medium),
            q("Design a recommendation system for an e-commerce platform.", Scenario, Hard),
            q("How do you choose the right algorithm for a problem?", Technical, Hard),
        ],
    },
    Role {
        id: "devops-engineer",
        title: "DevOps Engineer",
        required_skills: &["Docker", "Kubernetes", "AWS", "CI/CD", "Linux", "Git"],
        questions: &[
            q("Explain the concept of Infrastructure as Code.", Technical, Medium),
            q("How do you implement CI/CD pipelines?", Technical, Medium),
            q("What is containerization and why is it useful?", Technical, Medium),
            q("How do you monitor and troubleshoot production systems?", Technical, Medium),
            q("Describe your experience with cloud platforms.", Behavioral, Easy),
            q("How do you ensure security in DevOps practices?", Technical, Medium),
            q("What is the difference between Docker and Kubernetes?", Technical, Medium),
            q("How do you handle deployment rollbacks?", Technical, Medium),
            q("How would you design a highly available system on AWS?", Scenario, Hard),
            q("How do you implement automated testing in CI/CD?", Technical, Hard),
        ],
    },
    Role {
        id: "mobile-developer",
        title: "Mobile Developer",
        required_skills: &["React Native", "Flutter", "iOS", "Android", "JavaScript", "Git"],
        questions: &[
            q("Compare React Native and Flutter for mobile development.", Technical, Medium),
            q("How do you handle different screen sizes in mobile apps?", Technical, Medium),
            q("Explain the mobile app lifecycle.", Technical, Medium),
            q("How do you optimize mobile app performance?", Technical, Hard),
            q("Describe your experience with app store deployment.", Behavioral, Easy),
            q("How do you handle offline functionality in mobile apps?", Technical, Hard),
            q("What are the key differences between iOS and Android development?", Technical, Medium),
            q("How do you implement push notifications?", Technical, Medium),
            q("Describe a challenging mobile project you worked on.", Behavioral, Medium),
            q("How do you ensure mobile app security?", Technical, Medium),
        ],
    },
    Role {
        id: "cloud-architect",
        title: "Cloud Architect",
        required_skills: &["AWS", "Azure", "GCP", "Terraform", "Kubernetes", "Microservices"],
        questions: &[
            q("How do you design a scalable cloud architecture?", Technical, Hard),
            q("Compare different cloud service models (IaaS, PaaS, SaaS).", Technical, Medium),
            q("How do you ensure high availability in cloud systems?", Technical, Medium),
            q("Describe your approach to cloud cost optimization.", Behavioral, Medium),
            q("How do you implement disaster recovery in the cloud?", Technical, Hard),
            q("What are the security considerations for cloud architecture?", Technical, Medium),
            q("How do you migrate legacy systems to the cloud?", Behavioral, Hard),
            q("Explain the concept of serverless architecture.", Technical, Medium),
            q("How do you monitor and troubleshoot cloud applications?", Technical, Medium),
            q("Describe a complex cloud project you architected.", Behavioral, Medium),
        ],
    },
    Role {
        id: "machine-learning-engineer",
        title: "Machine Learning Engineer",
        required_skills: &["Python", "TensorFlow", "PyTorch", "MLOps", "Docker", "Kubernetes"],
        questions: &[
            q("How do you deploy machine learning models to production?", Technical, Hard),
            q("Explain the concept of model versioning and monitoring.", Technical, Medium),
            q("How do you handle data drift in production ML systems?", Technical, Hard),
            q("Describe your approach to A/B testing ML models.", Behavioral, Medium),
            q("How do you optimize model performance and latency?", Technical, Hard),
            q("What is your experience with MLOps and CI/CD for ML?", Behavioral, Medium),
            q("How do you ensure reproducibility in ML experiments?", Technical, Medium),
            q("Explain the challenges of scaling ML systems.", Technical, Hard),
            q("How do you handle model bias and fairness?", Technical, Medium),
            q("Describe a challenging ML deployment you worked on.", Behavioral, Medium),
        ],
    },
];

/// Looks a role up by id (case-insensitive). Unknown ids get the general bank.
pub fn find_role(role_id: &str) -> &'static Role {
    let wanted = role_id.trim().to_lowercase();
    ROLES
        .iter()
        .find(|r| r.id == wanted)
        .unwrap_or(&GENERAL_ROLE)
}

pub fn is_known_role(role_id: &str) -> bool {
    let wanted = role_id.trim().to_lowercase();
    ROLES.iter().any(|r| r.id == wanted)
}

/// The first `count` questions of the role's bank.
pub fn bank_questions(role_id: &str, count: usize) -> Vec<Question> {
    find_role(role_id)
        .questions
        .iter()
        .take(count)
        .map(Question::from)
        .collect()
}

pub fn role_summaries() -> Vec<RoleSummary> {
    ROLES
        .iter()
        .chain(std::iter::once(&GENERAL_ROLE))
        .map(|r| RoleSummary {
            id: r.id,
            title: r.title,
            required_skills: r.required_skills,
            question_count: r.questions.len(),
        })
        .collect()
}
