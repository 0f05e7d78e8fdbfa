//! Built-in survey templates. Declaration order is load-bearing: the selector
//! walks this list front to back and the first qualifying template wins.

use serde::{Deserialize, Serialize};

/// A named bundle of trigger keywords and a canned list of survey questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub keywords: Vec<String>,
    pub questions: Vec<String>,
}

impl Template {
    pub fn new(name: &str, keywords: &[&str], questions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            questions: questions.iter().map(|q| q.to_string()).collect(),
        }
    }
}

/// Questions used when no template qualifies.
pub const DEFAULT_QUESTIONS: [&str; 5] = [
    "What is your name?",
    "What is your email address?",
    "How did you hear about us?",
    "What is your main reason for taking this survey?",
    "Do you have any additional comments or feedback?",
];

pub fn default_questions() -> Vec<String> {
    DEFAULT_QUESTIONS.iter().map(|q| q.to_string()).collect()
}

/// Returns the built-in templates in selection order.
pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template::new(
            "Student",
            &["student", "school", "college", "university", "education"],
            &[
                "What is your full name?",
                "What is your sex?",
                "What is your age?",
                "What is your grade or year?",
                "What is your major or field of study?",
                "What is your student ID?",
                "What is your contact number?",
            ],
        ),
        Template::new(
            "Employee",
            &["employee", "staff", "worker", "personnel"],
            &[
                "What is your full name?",
                "What is your sex?",
                "What is your age?",
                "What is your job title?",
                "What is your department?",
                "What are your key skills?",
                "What is your availability?",
                "What is your employee ID?",
            ],
        ),
        Template::new(
            "Customer Satisfaction",
            &["customer satisfaction", "client happiness", "service feedback"],
            &[
                "How satisfied are you with our product/service? (1-5)",
                "How likely are you to recommend us to others? (1-10)",
                "What did you like most about your experience?",
                "What could we improve?",
                "How would you rate our customer support? (1-5)",
                "Would you use our product/service again?",
            ],
        ),
        Template::new(
            "Market Research",
            &["market research", "market analysis"],
            &[
                "How often do you purchase [product/service]?",
                "What factors influence your purchasing decision?",
                "How much do you typically spend on [product/service]?",
                "Which brands do you prefer and why?",
                "What improvements would you like to see in this market?",
            ],
        ),
        Template::new(
            "Product Feedback",
            &["product feedback", "product review"],
            &[
                "How would you rate this product? (1-5)",
                "What do you like about this product?",
                "What do you dislike about this product?",
                "How does this product compare to similar ones you've used?",
                "Would you recommend this product to others?",
            ],
        ),
        Template::new(
            "Event Feedback",
            &["event feedback", "event survey"],
            &[
                "How would you rate the event overall? (1-5)",
                "What was your favorite part of the event?",
                "How could we improve future events?",
                "Were the event speakers/presentations valuable?",
                "Would you attend this event again?",
            ],
        ),
        Template::new(
            "Training Feedback",
            &["training feedback", "training evaluation"],
            &[
                "How would you rate the training content? (1-5)",
                "How effective was the trainer?",
                "What was the most valuable thing you learned?",
                "How could we improve this training?",
                "Would you recommend this training to others?",
            ],
        ),
        Template::new(
            "Website Feedback",
            &["website feedback", "website survey"],
            &[
                "How easy was it to find what you were looking for? (1-5)",
                "What was your main reason for visiting our website today?",
                "How would you rate the website's design? (1-5)",
                "Did you encounter any technical issues?",
                "How likely are you to return to our website?",
            ],
        ),
        Template::new(
            "Brand Awareness",
            &["brand awareness", "brand survey"],
            &[
                "Have you heard of our brand before?",
                "How did you first hear about us?",
                "What words come to mind when you think of our brand?",
                "How likely are you to purchase from us in the future?",
                "Which of our competitors are you familiar with?",
            ],
        ),
        Template::new(
            "Usability Testing",
            &["usability", "user testing"],
            &[
                "How easy was it to complete your task? (1-5)",
                "What challenges did you encounter?",
                "How would you rate the navigation? (1-5)",
                "What did you like about the interface?",
                "What would you improve about the interface?",
            ],
        ),
        Template::new(
            "Net Promoter Score",
            &["nps", "net promoter"],
            &[
                "On a scale of 0-10, how likely are you to recommend us to a friend or colleague?",
                "What is the primary reason for your score?",
                "What could we do to improve your experience?",
            ],
        ),
        Template::new(
            "Exit Interview",
            &["exit interview", "employee exit"],
            &[
                "What is your primary reason for leaving?",
                "How would you rate your overall experience working here? (1-5)",
                "What did you enjoy most about working here?",
                "What could we have done better?",
                "Would you consider working here again in the future?",
            ],
        ),
        Template::new(
            "Course Evaluation",
            &["course evaluation", "course feedback"],
            &[
                "How would you rate the course content? (1-5)",
                "How effective was the instructor?",
                "What was the most valuable thing you learned?",
                "How could this course be improved?",
                "Would you recommend this course to others?",
            ],
        ),
        Template::new(
            "Health & Wellness",
            &["health", "wellness"],
            &[
                "How would you rate your overall health? (1-5)",
                "How often do you exercise?",
                "How many hours of sleep do you typically get?",
                "What are your main health concerns?",
                "What wellness programs would you be interested in?",
            ],
        ),
        Template::new(
            "Educational Feedback",
            &["educational", "school survey"],
            &[
                "How would you rate the quality of education? (1-5)",
                "What do you like most about this institution?",
                "What areas need improvement?",
                "How effective are the teaching methods?",
                "Would you recommend this institution to others?",
            ],
        ),
        Template::new(
            "Voting / Poll",
            &["voting", "poll", "election"],
            &[
                "Which option do you support?",
                "How strongly do you feel about this issue? (1-5)",
                "What factors influenced your decision?",
                "Would you like to receive updates about this issue?",
            ],
        ),
        Template::new(
            "Demographic",
            &["demographic", "demographics"],
            &[
                "What is your age group?",
                "What is your gender?",
                "What is your highest level of education?",
                "What is your employment status?",
                "What is your household income range?",
            ],
        ),
        Template::new(
            "Political Opinion",
            &["political", "election poll"],
            &[
                "Which political party do you most identify with?",
                "How would you rate the current administration? (1-5)",
                "What are your top policy concerns?",
                "How likely are you to vote in the next election?",
            ],
        ),
        Template::new(
            "Social Research",
            &["social research", "social study"],
            &[
                "How would you describe your social media usage?",
                "What social issues are most important to you?",
                "How do you typically stay informed about current events?",
                "How would you rate your level of social engagement? (1-5)",
            ],
        ),
        Template::new(
            "HR Onboarding",
            &["onboarding", "new hire"],
            &[
                "How would you rate your onboarding experience? (1-5)",
                "Did you receive all the necessary information to start your role?",
                "What could we improve about the onboarding process?",
                "Do you feel welcomed by your team?",
                "Do you have all the tools and access you need?",
            ],
        ),
        Template::new(
            "Public Opinion",
            &["public opinion", "community survey"],
            &[
                "How would you rate your satisfaction with local services? (1-5)",
                "What are the most important issues facing our community?",
                "How could local government better serve residents?",
                "How safe do you feel in your neighborhood? (1-5)",
            ],
        ),
    ]
}
