use std::cmp::Ordering;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Meeting times for a course section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Schedule {
    pub days: Vec<String>,
    pub time: String,
    pub location: String,
}

/// One entry of the static course catalog. Loaded once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    pub id: String,
    pub code: String,
    pub title: String,
    pub description: String,
    pub department: String,
    pub credits: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

static CATALOG: Lazy<Vec<Course>> = Lazy::new(|| {
    serde_json::from_str(include_str!("catalog.json")).expect("embedded catalog is valid JSON")
});

/// The built-in sample catalog.
pub fn sample_catalog() -> &'static [Course] {
    &CATALOG
}

/// Minimum score a course must exceed to count as relevant.
pub const MIN_SCORE: f32 = 0.1;
/// How many courses a lookup returns at most.
pub const RESULT_LIMIT: usize = 3;

/// Terms that mark a query as course-related, including the department
/// abbreviations used in course codes.
const COURSE_TERMS: [&str; 30] = [
    "course",
    "class",
    "schedule",
    "register",
    "enroll",
    "credit",
    "department",
    "professor",
    "instructor",
    "teach",
    "study",
    "subject",
    "major",
    "minor",
    "degree",
    "semester",
    "lecture",
    "prerequisite",
    "syllabus",
    "exam",
    "final",
    "midterm",
    "grade",
    "assessment",
    "compsci",
    "bio",
    "math",
    "psy",
    "dance",
    "nutr",
];

/// Case-insensitive multi-field relevance heuristic.
///
/// An exact match on code or title short-circuits to 1.0. Otherwise
/// whole-query containment in title/code/description/department/keywords
/// adds 0.8/0.7/0.6/0.5/0.4, then each query token longer than two
/// characters adds 0.3/0.2/0.1 for title/description/keyword hits.
pub fn relevance_score(query: &str, course: &Course) -> f32 {
    let query = query.to_lowercase();
    if query.trim().is_empty() {
        return 0.0;
    }

    let code = course.code.to_lowercase();
    let title = course.title.to_lowercase();

    if code == query || title == query {
        return 1.0;
    }

    let description = course.description.to_lowercase();
    let department = course.department.to_lowercase();
    let keywords: Vec<String> = course
        .keywords
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|k| k.to_lowercase())
        .collect();

    let mut score = 0.0;

    if title.contains(&query) {
        score += 0.8;
    }
    if code.contains(&query) {
        score += 0.7;
    }
    if description.contains(&query) {
        score += 0.6;
    }
    if department.contains(&query) {
        score += 0.5;
    }
    if keywords.iter().any(|k| k.contains(&query)) {
        score += 0.4;
    }

    for word in query.split_whitespace().filter(|w| w.len() > 2) {
        if title.contains(word) {
            score += 0.3;
        }
        if description.contains(word) {
            score += 0.2;
        }
        if keywords.iter().any(|k| k.contains(word)) {
            score += 0.1;
        }
    }

    score
}

/// Score the whole catalog against the query and return the best matches,
/// highest score first.
pub fn find_relevant_courses<'a>(query: &str, catalog: &'a [Course]) -> Vec<&'a Course> {
    find_relevant_courses_with(query, catalog, MIN_SCORE, RESULT_LIMIT)
}

pub fn find_relevant_courses_with<'a>(
    query: &str,
    catalog: &'a [Course],
    min_score: f32,
    limit: usize,
) -> Vec<&'a Course> {
    let mut scored: Vec<(f32, &Course)> = catalog
        .iter()
        .map(|course| (relevance_score(query, course), course))
        .filter(|(score, _)| *score > min_score)
        .collect();

    // Stable sort: ties keep catalog order.
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    scored.truncate(limit);

    scored.into_iter().map(|(_, course)| course).collect()
}

/// Whether a query looks like it is about courses at all.
pub fn is_course_related_query(query: &str) -> bool {
    let query = query.to_lowercase();
    COURSE_TERMS.iter().any(|term| query.contains(term))
}

/// Render the catalog answer for a query: a fixed fallback when nothing
/// matches, otherwise one templated block per matched course.
pub fn generate_course_response(query: &str, catalog: &[Course]) -> String {
    let relevant = find_relevant_courses(query, catalog);

    if relevant.is_empty() {
        return "I couldn't find any specific courses matching your query. \
                Could you provide more details about what you're looking for?"
            .to_string();
    }

    let mut response = String::from("Here's what I found about the courses you mentioned:\n\n");

    for course in relevant {
        response.push_str(&format!("**{}: {}**\n", course.code, course.title));
        response.push_str(&format!("Department: {}\n", course.department));
        response.push_str(&format!("Credits: {}\n", course.credits));
        response.push_str(&format!("{}\n\n", course.description));

        if let Some(schedule) = &course.schedule {
            response.push_str(&format!(
                "Schedule: {} at {}, {}\n\n",
                schedule.days.join(", "),
                schedule.time,
                schedule.location
            ));
        }

        if let Some(instructors) = &course.instructors {
            if !instructors.is_empty() {
                response.push_str(&format!("Instructors: {}\n\n", instructors.join(", ")));
            }
        }

        if let Some(prerequisites) = &course.prerequisites {
            if !prerequisites.is_empty() {
                response.push_str(&format!(
                    "Prerequisites: {}\n\n",
                    prerequisites.join(", ")
                ));
            }
        }
    }

    response.push_str("Is there anything specific about these courses you'd like to know more about?");

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course_by_id<'a>(id: &str) -> &'a Course {
        sample_catalog()
            .iter()
            .find(|c| c.id == id)
            .expect("course in sample catalog")
    }

    #[test]
    fn test_catalog_has_seven_courses() {
        assert_eq!(sample_catalog().len(), 7);
    }

    #[test]
    fn test_exact_code_match_shortcuts_to_one() {
        let cs101 = course_by_id("cs101");
        assert_eq!(relevance_score("COMPSCI 101", cs101), 1.0);
        assert_eq!(relevance_score("compsci 101", cs101), 1.0);
    }

    #[test]
    fn test_exact_title_match_shortcuts_to_one() {
        let dance = course_by_id("dance101");
        assert_eq!(relevance_score("Introduction to Dance", dance), 1.0);
    }

    #[test]
    fn test_empty_query_scores_zero() {
        let cs101 = course_by_id("cs101");
        assert_eq!(relevance_score("", cs101), 0.0);
        assert_eq!(relevance_score("   ", cs101), 0.0);
    }

    #[test]
    fn test_field_weights_accumulate() {
        let bio = course_by_id("bio101");
        // "biology" hits the title (0.8), description (0.6), department
        // (0.5), and keywords (0.4); the single token repeats the
        // title/description/keyword hits at 0.3/0.2/0.1.
        let score = relevance_score("biology", bio);
        assert!((score - 2.9).abs() < 1e-6);
    }

    #[test]
    fn test_dance_query_matches_only_dance101() {
        let results = find_relevant_courses("dance courses", sample_catalog());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "dance101");
        assert!(relevance_score("dance courses", results[0]) > MIN_SCORE);
    }

    #[test]
    fn test_intro_cs_query_ranks_cs101_over_cs201() {
        let results = find_relevant_courses("intro computer science class", sample_catalog());
        assert!(!results.is_empty());
        assert_eq!(results[0].id, "cs101");

        let cs101 = relevance_score("intro computer science class", course_by_id("cs101"));
        let cs201 = relevance_score("intro computer science class", course_by_id("cs201"));
        assert!(cs101 > cs201);
    }

    #[test]
    fn test_result_limit_is_respected() {
        // "introduction" appears across several titles and descriptions.
        let results = find_relevant_courses_with("introduction", sample_catalog(), 0.0, 2);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_unrelated_query_finds_nothing() {
        let results = find_relevant_courses("quantum basket weaving", sample_catalog());
        assert!(results.is_empty());
    }

    #[test]
    fn test_is_course_related_query() {
        assert!(!is_course_related_query("what's the weather today"));
        assert!(is_course_related_query("tell me about registration schedules"));
        assert!(is_course_related_query("which CLASS should I take"));
        assert!(is_course_related_query("compsci offerings"));
    }

    #[test]
    fn test_response_for_no_match_is_fixed_message() {
        let response = generate_course_response("quantum basket weaving", sample_catalog());
        assert!(response.starts_with("I couldn't find any specific courses"));
    }

    #[test]
    fn test_response_template_fields() {
        let response = generate_course_response("dance", sample_catalog());
        assert!(response.contains("**DANCE 101: Introduction to Dance**"));
        assert!(response.contains("Department: Dance"));
        assert!(response.contains("Credits: 3"));
        assert!(response.contains("Schedule: Monday, Wednesday at 2:30 PM - 3:45 PM"));
        assert!(response.contains("Instructors: Prof. Barbara Dickinson, Prof. Tyler Walters"));
        assert!(response.ends_with(
            "Is there anything specific about these courses you'd like to know more about?"
        ));
    }

    #[test]
    fn test_response_includes_prerequisites_when_present() {
        let response = generate_course_response("COMPSCI 201", sample_catalog());
        assert!(response.contains("Prerequisites: COMPSCI 101"));
    }
}
