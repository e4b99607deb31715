pub mod fixtures {
    use crate::models::dto::request::{
        AnswerRequest, QuestionRequest, QuizRequest, RegistrationRequest,
    };

    pub fn quiz_request(name: &str) -> QuizRequest {
        QuizRequest {
            name: name.to_string(),
            description: None,
        }
    }

    pub fn question_request(text: &str) -> QuestionRequest {
        question_request_with_answers(text, &[])
    }

    /// The first answer is marked correct.
    pub fn question_request_with_answers(text: &str, answers: &[&str]) -> QuestionRequest {
        QuestionRequest {
            text: text.to_string(),
            order: None,
            answers: answers
                .iter()
                .enumerate()
                .map(|(i, a)| AnswerRequest {
                    text: a.to_string(),
                    correct: i == 0,
                })
                .collect(),
        }
    }

    pub fn registration_request(username: &str) -> RegistrationRequest {
        RegistrationRequest {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password: "password123".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use validator::Validate;

    #[test]
    fn test_fixtures_are_valid() {
        assert!(quiz_request("Quiz").validate().is_ok());
        assert!(question_request_with_answers("Q", &["a", "b"]).validate().is_ok());
        assert!(registration_request("johndoe").validate().is_ok());
    }

    #[test]
    fn test_first_answer_is_correct() {
        let request = question_request_with_answers("Q", &["a", "b"]);
        assert!(request.answers[0].correct);
        assert!(!request.answers[1].correct);
    }
}
