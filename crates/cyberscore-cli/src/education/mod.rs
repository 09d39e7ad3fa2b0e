//! Educational features: explanations, tips, and learning resources.

use colored::Colorize;
use cyberscore_core::lessons::LessonModule;
use cyberscore_core::scoring::weights::{DEVICE_SIGNALS, WEBSITE_SIGNALS};
use cyberscore_core::scoring::RISK_KEYWORDS;
use cyberscore_core::SignalDefinition;

/// Command explanation builder.
pub struct Explain {
    description: String,
    penalties: Vec<String>,
    what_happens: Vec<String>,
    learn_more: Option<LessonModule>,
}

impl Explain {
    fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            penalties: Vec::new(),
            what_happens: Vec::new(),
            learn_more: None,
        }
    }

    fn penalties(mut self, signals: &[SignalDefinition]) -> Self {
        self.penalties = signals
            .iter()
            .map(|s| format!("-{:<3} {}", s.weight, s.finding))
            .collect();
        self
    }

    fn step(mut self, step: &str) -> Self {
        self.what_happens.push(step.to_string());
        self
    }

    fn lesson(mut self, module: LessonModule) -> Self {
        self.learn_more = Some(module);
        self
    }

    /// Print the explanation to stdout.
    pub fn print(&self) {
        println!();
        println!("{}", "=== What This Does ===".bold().cyan());
        println!("{}", self.description);
        println!();

        if !self.what_happens.is_empty() {
            println!("{}", "How it works:".bold());
            for (i, step) in self.what_happens.iter().enumerate() {
                println!("  {}. {}", i + 1, step);
            }
            println!();
        }

        if !self.penalties.is_empty() {
            println!("{}", "Penalties (from a start of 100):".bold());
            for line in &self.penalties {
                println!("  {}", line.dimmed());
            }
            println!();
        }

        if let Some(module) = self.learn_more {
            println!(
                "{} cyberscore lessons {}",
                "Learn more:".bold(),
                module.key().cyan()
            );
        }

        println!();
        println!("{}", "=== Results ===".bold().cyan());
        println!();
    }

    // ========================================================================
    // Factory methods for each command
    // ========================================================================

    pub fn device() -> Self {
        Self::new("Rates how exposed this device is, based on its network, integrity, lock and permissions.")
            .step("Each check that fails subtracts a fixed penalty")
            .step("Checks that could not be made cost nothing")
            .step("80+ is Excellent, 60+ Good, 40+ Average, below 40 Poor")
            .penalties(&DEVICE_SIGNALS)
            .lesson(LessonModule::PublicWifi)
    }

    pub fn website(url: &str) -> Self {
        Self::new(&format!("Rates how risky {url} looks before you trust it."))
            .step("Checks whether the connection is encrypted (HTTPS)")
            .step("Uses the reputation verdict, if one was supplied")
            .step("Young domains are a common sign of throwaway phishing sites")
            .step(&format!(
                "Scans page text for: {}",
                RISK_KEYWORDS.join(", ")
            ))
            .step("A failed lookup is skipped, never counted against the site")
            .penalties(&WEBSITE_SIGNALS)
            .lesson(LessonModule::SecureBrowsing)
    }

    pub fn password_check() -> Self {
        Self::new("Rates a password from the character classes and length it uses.")
            .step("One point each: 8+ characters, uppercase, digit, one of @$!%*?&#")
            .step("0-1 points is Weak, 2 is Medium, 3-4 is Strong")
            .step("The password is never stored or sent anywhere")
            .lesson(LessonModule::AuthAndAccess)
    }

    pub fn password_generate(length: usize) -> Self {
        Self::new(&format!("Generates a random {length}-character password."))
            .step("Guarantees an uppercase letter, a lowercase letter, a digit and a symbol")
            .step("Fills the rest from all four sets and shuffles the result")
            .lesson(LessonModule::AuthAndAccess)
    }

    pub fn quiz() -> Self {
        Self::new("Tests your cyber awareness across seven topics.")
            .step("Each question has exactly one right answer")
            .step("Topics you missed are suggested for review, most-missed first")
            .lesson(LessonModule::IntroToCyber)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_explanation_lists_all_penalties() {
        let explain = Explain::device();
        assert_eq!(explain.penalties.len(), 5);
        assert!(explain.penalties[0].starts_with("-20"));
    }

    #[test]
    fn website_explanation_mentions_keywords() {
        let explain = Explain::website("example.com");
        assert!(explain.what_happens.iter().any(|s| s.contains("phishing")));
        assert_eq!(explain.learn_more, Some(LessonModule::SecureBrowsing));
    }
}
