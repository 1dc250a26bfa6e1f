// Prompt templates for the assistant endpoints.
// Placeholders in `{braces}` are substituted by the builders below before sending.

/// Résumé review prompt used by POST /ai-tools/resume-analyzer.
pub const RESUME_REVIEW_TEMPLATE: &str =
    "Analyze the following resume text and provide recommendations:\n\n{resume_text}";

/// Résumé review prompt used by POST /analyze-resume (uploaded file).
pub const RESUME_ATS_TEMPLATE: &str = "Analyze the following resume text and give improvement \
    suggestions, keyword matches, and ATS tips:\n\n{resume_text}";

/// Learning path prompt used by POST /ai-tools/learning-path-generator.
pub const LEARNING_PATH_TEMPLATE: &str = "Generate a detailed step-by-step learning path for \
    someone interested in {interest}, who knows {known_languages}, and has the goal '{goal}'. \
    Include courses, certifications, and key milestones.";

/// Learning plan prompt used by POST /generate-learning-plan.
pub const LEARNING_PLAN_TEMPLATE: &str = "Create a personalized learning plan for someone \
    wanting to learn {language} at a {level} level. Break it into clear, progressive steps or \
    modules including topics, goals, and example resources.";

pub fn resume_review_prompt(resume_text: &str) -> String {
    RESUME_REVIEW_TEMPLATE.replace("{resume_text}", resume_text)
}

pub fn resume_ats_prompt(resume_text: &str) -> String {
    RESUME_ATS_TEMPLATE.replace("{resume_text}", resume_text)
}

pub fn learning_path_prompt(interest: &str, known_languages: &[String], goal: &str) -> String {
    LEARNING_PATH_TEMPLATE
        .replace("{interest}", interest)
        .replace("{known_languages}", &known_languages.join(", "))
        .replace("{goal}", goal)
}

pub fn learning_plan_prompt(language: &str, level: &str) -> String {
    LEARNING_PLAN_TEMPLATE
        .replace("{language}", language)
        .replace("{level}", level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learning_path_prompt_lists_languages() {
        let prompt = learning_path_prompt(
            "machine learning",
            &["Python".to_string(), "SQL".to_string()],
            "become an ML engineer",
        );
        assert!(prompt.contains("interested in machine learning"));
        assert!(prompt.contains("who knows Python, SQL"));
        assert!(prompt.contains("goal 'become an ML engineer'"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_learning_path_prompt_with_empty_language_list() {
        let prompt = learning_path_prompt("web", &[], "freelance");
        assert!(prompt.contains("interested in web, who knows , and has the goal 'freelance'"));
    }

    #[test]
    fn test_learning_plan_prompt() {
        let prompt = learning_plan_prompt("Rust", "Intermediate");
        assert!(prompt.starts_with("Create a personalized learning plan"));
        assert!(prompt.contains("learn Rust at a Intermediate level"));
    }

    #[test]
    fn test_resume_prompts_embed_text_last() {
        assert!(resume_review_prompt("CV BODY").ends_with("\n\nCV BODY"));
        assert!(resume_ats_prompt("CV BODY").ends_with("\n\nCV BODY"));
        assert!(resume_ats_prompt("x").contains("ATS tips"));
    }
}
