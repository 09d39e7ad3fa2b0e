//! Cyber awareness questionnaire and grading.

use serde::Serialize;

use crate::error::{CoreError, Result};

/// A multiple-choice question tagged with the topic it tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub answer: &'static str,
    pub topic: &'static str,
}

impl Question {
    /// Whether `selected` is exactly the right option.
    #[must_use]
    pub fn is_correct(&self, selected: Option<&str>) -> bool {
        selected == Some(self.answer)
    }
}

/// Outcome of grading a questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizReport {
    pub correct: usize,
    pub total: usize,
    /// Topics with at least one miss, most-missed first
    pub suggested_topics: Vec<String>,
}

impl QuizReport {
    /// True when every answer was right.
    #[must_use]
    pub const fn is_perfect(&self) -> bool {
        self.correct == self.total
    }
}

/// Grade answers against questions, position by position.
///
/// An unanswered question (`None`) counts as a miss.
pub fn grade<S: AsRef<str>>(questions: &[Question], answers: &[Option<S>]) -> Result<QuizReport> {
    if questions.len() != answers.len() {
        return Err(CoreError::AnswerCount {
            expected: questions.len(),
            actual: answers.len(),
        });
    }

    let mut correct = 0;
    // (topic, misses) in first-miss order
    let mut misses: Vec<(&str, usize)> = Vec::new();

    for (question, answer) in questions.iter().zip(answers) {
        let selected: Option<&str> = answer.as_ref().map(AsRef::as_ref);
        if question.is_correct(selected) {
            correct += 1;
        } else if let Some(entry) = misses.iter_mut().find(|(t, _)| *t == question.topic) {
            entry.1 += 1;
        } else {
            misses.push((question.topic, 1));
        }
    }

    // Stable sort keeps first-miss order among ties
    misses.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(QuizReport {
        correct,
        total: questions.len(),
        suggested_topics: misses.into_iter().map(|(t, _)| t.to_string()).collect(),
    })
}

/// The built-in awareness questionnaire.
#[must_use]
pub const fn awareness_questions() -> &'static [Question] {
    AWARENESS_QUESTIONS
}

const AWARENESS_QUESTIONS: &[Question] = &[
    // Cyber Hygiene
    Question {
        prompt: "Which of these is a key aspect of cyber hygiene?",
        options: &["Using strong passwords", "Keeping devices always unlocked", "Ignoring security updates", "Connecting to any available Wi-Fi"],
        answer: "Using strong passwords",
        topic: "Cyber Hygiene",
    },
    Question {
        prompt: "What is the benefit of regular software updates?",
        options: &["Improves appearance", "Fixes security vulnerabilities", "Makes device slower", "Increases battery usage"],
        answer: "Fixes security vulnerabilities",
        topic: "Cyber Hygiene",
    },
    Question {
        prompt: "Why should you avoid using the same password for multiple accounts?",
        options: &["Easier to remember", "Increases security risk", "Improves account performance", "Required by law"],
        answer: "Increases security risk",
        topic: "Cyber Hygiene",
    },
    // Public Wi-Fi Safety
    Question {
        prompt: "What is the safest way to access personal data on public Wi-Fi?",
        options: &["Use HTTPS websites", "Turn off device security", "Connect to open networks", "Disable password protection"],
        answer: "Use HTTPS websites",
        topic: "Public Wi-Fi Safety",
    },
    Question {
        prompt: "Which tool can protect your data on public Wi-Fi?",
        options: &["VPN", "Bluetooth", "Cookies", "Data Saver Mode"],
        answer: "VPN",
        topic: "Public Wi-Fi Safety",
    },
    Question {
        prompt: "When using public Wi-Fi, which of these should you avoid?",
        options: &["Accessing banking apps", "Using HTTPS websites", "Updating your antivirus", "Disabling auto-connect"],
        answer: "Accessing banking apps",
        topic: "Public Wi-Fi Safety",
    },
    // Phishing
    Question {
        prompt: "Which of the following is a common sign of a phishing email?",
        options: &["Personalized greeting", "Misspellings and urgent tone", "Email from known address", "Contains only text"],
        answer: "Misspellings and urgent tone",
        topic: "Phishing",
    },
    Question {
        prompt: "What should you do if you suspect an email is phishing?",
        options: &["Reply to confirm details", "Click the link to check", "Report it as spam", "Ignore and keep it"],
        answer: "Report it as spam",
        topic: "Phishing",
    },
    Question {
        prompt: "Which action is most likely to protect you from phishing attacks?",
        options: &["Clicking unfamiliar links", "Ignoring email subjects", "Enabling multi-factor authentication", "Using common passwords"],
        answer: "Enabling multi-factor authentication",
        topic: "Phishing",
    },
    // Secure Browsing
    Question {
        prompt: "Which of these indicates a secure website?",
        options: &["HTTP in the URL", "HTTPS and a lock icon", "No address bar", "Red background"],
        answer: "HTTPS and a lock icon",
        topic: "Secure Browsing",
    },
    Question {
        prompt: "Why is it important to log out of websites on public computers?",
        options: &["Saves time", "Prevents unauthorized access", "Boosts computer speed", "Improves internet connection"],
        answer: "Prevents unauthorized access",
        topic: "Secure Browsing",
    },
    Question {
        prompt: "What should you do if your browser warns you about a suspicious website?",
        options: &["Ignore the warning", "Close the browser", "Proceed with caution", "Leave the site immediately"],
        answer: "Leave the site immediately",
        topic: "Secure Browsing",
    },
    // Authentication and Access Control
    Question {
        prompt: "What does multi-factor authentication (MFA) provide?",
        options: &["Improved battery life", "Stronger account security", "Faster access", "Reduced security"],
        answer: "Stronger account security",
        topic: "Authentication and Access Control",
    },
    Question {
        prompt: "Which is considered a weak password?",
        options: &["123456", "Pass@123", "SecureKey!45", "MyDog@Home4"],
        answer: "123456",
        topic: "Authentication and Access Control",
    },
    Question {
        prompt: "What should you do if you think someone has accessed your account without permission?",
        options: &["Ignore it", "Change your password immediately", "Delete the account", "Report it to friends"],
        answer: "Change your password immediately",
        topic: "Authentication and Access Control",
    },
    // Device Security and Encryption
    Question {
        prompt: "Why is it important to enable encryption on your device?",
        options: &["Improves device speed", "Prevents unauthorized access to data", "Saves battery life", "Increases storage"],
        answer: "Prevents unauthorized access to data",
        topic: "Device Security and Encryption",
    },
    Question {
        prompt: "What is a common way to protect mobile devices from theft?",
        options: &["Leaving it unlocked", "Enabling screen lock", "Sharing password", "Turning off GPS"],
        answer: "Enabling screen lock",
        topic: "Device Security and Encryption",
    },
    Question {
        prompt: "What should you do before disposing of an old device?",
        options: &["Clear storage", "Reset to factory settings", "Delete a few files", "Nothing"],
        answer: "Reset to factory settings",
        topic: "Device Security and Encryption",
    },
    // Data Privacy
    Question {
        prompt: "What information should you avoid sharing on social media?",
        options: &["Vacation plans", "Favorite movie", "Public news", "Hobby"],
        answer: "Vacation plans",
        topic: "Data Privacy",
    },
    Question {
        prompt: "Which is an example of personal data you should protect?",
        options: &["Name of favorite pet", "Credit card details", "Favorite color", "Nickname"],
        answer: "Credit card details",
        topic: "Data Privacy",
    },
    Question {
        prompt: "What is a safe way to store sensitive data?",
        options: &["Cloud storage without encryption", "Encrypted storage", "On a sticky note", "Shared with friends"],
        answer: "Encrypted storage",
        topic: "Data Privacy",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_all_correctly() -> Vec<Option<&'static str>> {
        awareness_questions().iter().map(|q| Some(q.answer)).collect()
    }

    #[test]
    fn bank_is_consistent() {
        let bank = awareness_questions();
        assert_eq!(bank.len(), 21);
        for q in bank {
            assert!(q.options.contains(&q.answer), "{}", q.prompt);
        }
    }

    #[test]
    fn perfect_score_suggests_nothing() {
        let report = grade(awareness_questions(), &answer_all_correctly()).unwrap();
        assert_eq!(report.correct, 21);
        assert!(report.is_perfect());
        assert!(report.suggested_topics.is_empty());
    }

    #[test]
    fn most_missed_topic_comes_first() {
        let bank = awareness_questions();
        let mut answers = answer_all_correctly();
        // One miss on the first question (Cyber Hygiene)
        answers[0] = None;
        // Two misses in Phishing
        for (i, q) in bank.iter().enumerate() {
            if q.topic == "Phishing" && answers[i].is_some() {
                answers[i] = Some("wrong");
                if answers.iter().filter(|a| **a == Some("wrong")).count() == 2 {
                    break;
                }
            }
        }

        let report = grade(bank, &answers).unwrap();
        assert_eq!(report.correct, 18);
        assert_eq!(report.suggested_topics, vec!["Phishing", "Cyber Hygiene"]);
    }

    #[test]
    fn ties_keep_first_miss_order() {
        let bank = awareness_questions();
        let answers: Vec<Option<String>> = bank
            .iter()
            .map(|q| match q.topic {
                "Data Privacy" | "Secure Browsing" => Some("nope".to_string()),
                _ => Some(q.answer.to_string()),
            })
            .collect();
        let report = grade(bank, &answers).unwrap();
        assert_eq!(report.suggested_topics, vec!["Secure Browsing", "Data Privacy"]);
    }

    #[test]
    fn answer_count_must_match() {
        let err = grade(awareness_questions(), &[Some("Using strong passwords")]).unwrap_err();
        assert!(matches!(err, CoreError::AnswerCount { expected: 21, actual: 1 }));
    }
}
