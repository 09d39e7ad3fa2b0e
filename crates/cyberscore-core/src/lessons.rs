//! Lesson modules: summaries and further reading.

use serde::Serialize;
use std::str::FromStr;

use crate::error::CoreError;

/// An external article recommended for a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: &'static str,
    pub link: &'static str,
}

/// A lesson module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonModule {
    IntroToCyber,
    AuthAndAccess,
    Phishing,
    SecureBrowsing,
    PublicWifi,
}

impl LessonModule {
    /// All modules in catalogue order.
    pub const ALL: [Self; 5] = [
        Self::IntroToCyber,
        Self::AuthAndAccess,
        Self::Phishing,
        Self::SecureBrowsing,
        Self::PublicWifi,
    ];

    /// Stable lookup key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::IntroToCyber => "introtocyber",
            Self::AuthAndAccess => "authandaccess",
            Self::Phishing => "phishing",
            Self::SecureBrowsing => "securebrowsing",
            Self::PublicWifi => "publicwifi",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::IntroToCyber => "Introduction to Cyber Hygiene",
            Self::AuthAndAccess => "Authentication and Access Control",
            Self::Phishing => "Phishing",
            Self::SecureBrowsing => "Secure Browsing",
            Self::PublicWifi => "Public Wi-Fi Safety",
        }
    }

    #[must_use]
    pub const fn summary(self) -> &'static str {
        match self {
            Self::AuthAndAccess => {
                "Authentication and access control ensure that only authorized users can access \
                 systems and data. Strong passwords, multi-factor authentication (MFA), and secure \
                 password management are key to protecting accounts. These measures reduce the risk \
                 of unauthorized access to sensitive information."
            }
            Self::Phishing => {
                "Phishing attacks trick individuals into sharing private information by posing as \
                 trustworthy entities, often through fake emails, texts, or websites. Recognizing \
                 signs like urgent requests or suspicious links can help prevent data theft. Staying \
                 vigilant can significantly reduce the risk of falling for these scams."
            }
            Self::SecureBrowsing => {
                "Secure browsing practices, such as using HTTPS websites, avoiding suspicious links, \
                 and enabling browser security features, help protect data from online threats. \
                 Regularly updating browsers and using reputable antivirus software also add layers \
                 of protection against malware and hackers."
            }
            Self::PublicWifi => {
                "Public Wi-Fi networks are convenient but can expose users to data interception by \
                 hackers. To stay safe, use a VPN, avoid sensitive activities like online banking, \
                 and disable file sharing. Taking precautions when connected to public networks can \
                 help protect your data from unauthorized access."
            }
            Self::IntroToCyber => {
                "Cyber hygiene refers to basic practices that keep devices and data secure, like \
                 using antivirus software, regularly updating systems, and managing passwords. Good \
                 cyber hygiene helps prevent malware infections and data breaches, building a \
                 foundational defense against various cyber threats."
            }
        }
    }

    #[must_use]
    pub const fn articles(self) -> &'static [Article] {
        match self {
            Self::AuthAndAccess => &[
                Article {
                    title: "Why Password Management is Important",
                    link: "https://blog.lastpass.com/posts/2024/08/password-hygiene",
                },
                Article {
                    title: "How to Create a Strong Password",
                    link: "https://www.vic.gov.au/passwords",
                },
                Article {
                    title: "Password Security: Best Practices for 2024",
                    link: "https://novatech.net/blog/password-security-in-2024-a-deep-dive-into-best-practices",
                },
            ],
            Self::Phishing => &[
                Article {
                    title: "What is Phishing?",
                    link: "https://www.fbi.gov/how-we-can-help-you/scams-and-safety/common-frauds-and-scams/spoofing-and-phishing",
                },
                Article {
                    title: "Recognizing Phishing Emails",
                    link: "https://www.cisa.gov/secure-our-world/teach-employees-avoid-phishing",
                },
                Article {
                    title: "Phishing: A Threat You Can Avoid",
                    link: "https://learn.microsoft.com/en-us/microsoft-365/business-premium/m365bp-avoid-phishing-and-attacks",
                },
                Article {
                    title: "How to Spot a Phishing Attack",
                    link: "https://www.ftc.gov/business-guidance/small-businesses/cybersecurity/phishing",
                },
            ],
            Self::SecureBrowsing => &[
                Article {
                    title: "Best Practices for Secure Browsing",
                    link: "https://internetprivacy.com/safe-browsing-practices/",
                },
                Article {
                    title: "The Importance of Using HTTPS",
                    link: "https://www.cloudflare.com/learning/ssl/why-use-https/",
                },
                Article {
                    title: "Is This Website Safe?",
                    link: "https://www.avast.com/c-website-safety-check-guide",
                },
            ],
            Self::PublicWifi => &[
                Article {
                    title: "How to Stay Safe on Public Wi-Fi",
                    link: "https://www.kaspersky.co.uk/resource-center/preemptive-safety/public-wifi",
                },
                Article {
                    title: "The Dangers of Using Public Wi-Fi (and How To Stay Safe)",
                    link: "https://www.aura.com/learn/dangers-of-public-wi-fi",
                },
                Article {
                    title: "Are Public Wi-Fi Networks Safe?",
                    link: "https://consumer.ftc.gov/articles/are-public-wi-fi-networks-safe-what-you-need-know",
                },
                Article {
                    title: "Public Wi-Fi: A guide to the risks and how to stay safe",
                    link: "https://us.norton.com/blog/privacy/public-wifi",
                },
            ],
            Self::IntroToCyber => &[
                Article {
                    title: "The Importance of Using HTTPS",
                    link: "https://www.cloudflare.com/learning/ssl/why-use-https/",
                },
                Article {
                    title: "Cyber Hygiene 101",
                    link: "https://snyk.io/learn/cybersecurity-hygiene/",
                },
                Article {
                    title: "What is Cybersecurity? Everything You Need to Know",
                    link: "https://www.simplilearn.com/introduction-to-cyber-security-article",
                },
                Article {
                    title: "Introduction to Cybersecurity: What Beginners Need to Know",
                    link: "https://digitalskills.engin.umich.edu/cybersecurity/introduction-to-cybersecurity/",
                },
            ],
        }
    }

    /// Look a module up by key. Case-insensitive.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.to_lowercase();
        Self::ALL.into_iter().find(|m| m.key() == key)
    }

    /// Module to review after missing questions on a questionnaire topic.
    #[must_use]
    pub fn for_topic(topic: &str) -> Option<Self> {
        match topic {
            "Cyber Hygiene" => Some(Self::IntroToCyber),
            "Authentication and Access Control" => Some(Self::AuthAndAccess),
            "Phishing" => Some(Self::Phishing),
            "Secure Browsing" => Some(Self::SecureBrowsing),
            "Public Wi-Fi Safety" => Some(Self::PublicWifi),
            _ => None,
        }
    }
}

impl FromStr for LessonModule {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| CoreError::UnknownModule(s.to_string()))
    }
}

impl std::fmt::Display for LessonModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
