//! Built-in catalog content

use super::{
    CatalogParts, Chapter, DailyChallenge, Difficulty, LearningPath, LevelTier, Quest,
    SkillBadgeRequirement, TEN_LEVELS,
};

const LINK_BASE: &str = "https://example.com/";

/// (category, [(course, link slug)])
const CATEGORIES: &[(&str, &[(&str, &str)])] = &[
    (
        "Cybersecurity",
        &[
            ("Intro to Cybersecurity", "intro-cybersecurity"),
            ("CIA Triad", "cia-triad"),
            ("Basic Terminologies", "basic-terminologies"),
            ("Common Types of Attacks", "common-attacks"),
            ("Offensive Security Intro", "offensive-security"),
            ("Defensive Security Intro", "defensive-security"),
            ("Linux Fundamentals - Part 1", "linux-fundamentals-1"),
            ("Linux Fundamentals - Part 2", "linux-fundamentals-2"),
            ("Linux Fundamentals - Part 3", "linux-fundamentals-3"),
            ("Networking Fundamentals", "networking-fundamentals"),
            ("IP Addressing & Subnetting", "ip-addressing"),
            ("Core Networking Protocols", "networking-protocols"),
            ("Network Security Essentials", "network-security"),
            ("Network Analysis with Wireshark & Nmap", "network-analysis"),
            ("Introduction to Cryptography", "intro-cryptography"),
            ("Symmetric Encryption", "symmetric-encryption"),
            ("Asymmetric Encryption & PKI", "asymmetric-encryption"),
            ("Hash Functions & Data Integrity", "hash-functions"),
            ("Cryptographic Attacks & Weaknesses", "crypto-attacks"),
            ("Introduction to Web Applications", "intro-web-apps"),
            ("Information Gathering & Reconnaissance", "info-gathering"),
            ("Common Web Vulnerabilities", "web-vulnerabilities"),
            ("Authentication & Session Attacks", "auth-attacks"),
            ("Exploitation & Post-Exploitation", "exploitation"),
            ("Introduction to Vulnerabilities and CVEs", "intro-vulnerabilities"),
            ("Common Vulnerability Scanning Tools", "vulnerability-scanning"),
            ("Basics of Exploit Development", "exploit-development"),
            ("Patch Management & Remediation Strategies", "patch-management"),
            ("Introduction to Incident Response", "intro-incident-response"),
            ("First Responder Actions", "first-responder"),
            ("Basics of Log Analysis", "log-analysis"),
            ("Digital Forensics Fundamentals", "digital-forensics"),
        ],
    ),
    (
        "Data Science",
        &[
            ("Python for Everybody", "python-for-everybody"),
            ("Intro to Data Science", "intro-to-data-science"),
            ("Machine Learning Basics", "machine-learning-basics"),
        ],
    ),
    (
        "Web Development",
        &[
            ("What is the Web?", "what-is-web"),
            ("How Browsers and Servers Communicate", "browser-server"),
            ("Basic Web Terminologies", "web-terms"),
            ("Introduction to HTML", "intro-html"),
            ("HTML Tags and Elements", "html-tags"),
            ("Building Your First Web Page", "first-webpage"),
            ("Introduction to CSS", "intro-css"),
            ("Selectors and Properties", "css-selectors"),
            ("Basic Page Styling", "page-styling"),
            ("Introduction to JavaScript", "intro-javascript"),
            ("Variables, Functions, and Events", "js-basics"),
            ("Making Websites Interactive", "interactive-websites"),
            ("What is Web Hosting?", "web-hosting"),
            ("How to Buy a Domain", "buying-domains"),
            ("Deploying a Website", "website-deployment"),
        ],
    ),
    (
        "Business Management",
        &[
            ("Introduction to Business", "intro-business"),
            ("Business Structures and Types", "business-structures"),
            ("Key Business Functions", "business-functions"),
            ("Introduction to Management", "intro-management"),
            ("Leadership and Decision-Making", "leadership"),
            ("Planning and Organizational Structure", "organizational-planning"),
            ("Introduction to Business Strategy", "business-strategy"),
            ("Market Analysis Basics", "market-analysis"),
            ("Growth and Innovation Strategies", "growth-strategies"),
        ],
    ),
];

/// (badge, required courses, min xp)
const SKILL_BADGES: &[(&str, &[&str], u64)] = &[
    (
        "Python Beginner",
        &["Python for Everybody", "Intro to Data Science"],
        50,
    ),
    (
        "Cybersecurity Fundamentals",
        &["Intro to Cybersecurity", "CIA Triad", "Basic Terminologies"],
        100,
    ),
    (
        "Web Developer Fundamentals",
        &[
            "Introduction to HTML",
            "Introduction to CSS",
            "Introduction to JavaScript",
        ],
        75,
    ),
    (
        "Business Management Essentials",
        &[
            "Introduction to Business",
            "Introduction to Management",
            "Introduction to Business Strategy",
        ],
        60,
    ),
];

/// (quest, required courses, reward xp, reward badge)
const QUESTS: &[(&str, &[&str], u64, &str)] = &[
    (
        "Data Science Starter",
        &["Python for Everybody", "Intro to Data Science"],
        100,
        "Data Science Starter Badge",
    ),
    (
        "Cybersecurity Beginner",
        &["Intro to Cybersecurity", "CIA Triad", "Common Types of Attacks"],
        120,
        "Cybersecurity Beginner Badge",
    ),
    (
        "Web Developer Starter",
        &["Introduction to HTML", "Introduction to CSS"],
        90,
        "Web Developer Starter Badge",
    ),
    (
        "Network Security Novice",
        &[
            "Networking Fundamentals",
            "IP Addressing & Subnetting",
            "Network Security Essentials",
        ],
        150,
        "Network Security Novice Badge",
    ),
    (
        "Cryptography Explorer",
        &[
            "Introduction to Cryptography",
            "Symmetric Encryption",
            "Hash Functions & Data Integrity",
        ],
        130,
        "Cryptography Explorer Badge",
    ),
    (
        "Web Hacking Initiate",
        &[
            "Introduction to Web Applications",
            "Information Gathering & Reconnaissance",
            "Common Web Vulnerabilities",
        ],
        160,
        "Web Hacking Initiate Badge",
    ),
    (
        "Incident Response Trainee",
        &[
            "Introduction to Incident Response",
            "First Responder Actions",
            "Basics of Log Analysis",
        ],
        140,
        "Incident Response Trainee Badge",
    ),
    (
        "Machine Learning Apprentice",
        &[
            "Python for Everybody",
            "Intro to Data Science",
            "Machine Learning Basics",
        ],
        170,
        "Machine Learning Apprentice Badge",
    ),
    (
        "Full-Stack Web Developer",
        &[
            "Introduction to HTML",
            "Introduction to CSS",
            "Introduction to JavaScript",
        ],
        160,
        "Full-Stack Developer Badge",
    ),
    (
        "Business Management Foundation",
        &[
            "Introduction to Business",
            "Introduction to Management",
            "Introduction to Business Strategy",
        ],
        130,
        "Business Management Foundation Badge",
    ),
];

/// (question, answer, reward xp)
const CHALLENGES: &[(&str, &str, u64)] = &[
    ("What does AI stand for?", "artificial intelligence", 10),
    ("Name a popular cloud platform by IBM?", "ibm cloud", 15),
    (
        "True or False: Python is primarily a snake, not a programming language?",
        "false",
        5,
    ),
];

/// (title, description, courses)
type ChapterDef = (&'static str, &'static str, &'static [&'static str]);

struct PathDef {
    name: &'static str,
    description: &'static str,
    difficulty: Difficulty,
    estimated_hours: u32,
    chapters: &'static [ChapterDef],
    reward_xp: u64,
    reward_badge: &'static str,
}

const PATHS: &[PathDef] = &[
    PathDef {
        name: "Cyber Security 101",
        description: "A comprehensive introduction to the world of cybersecurity.",
        difficulty: Difficulty::Advanced,
        estimated_hours: 28,
        chapters: &[
            (
                "Begin Your Cybersecurity Journey",
                "Learn the fundamental concepts and terminology of cybersecurity.",
                &["Intro to Cybersecurity", "CIA Triad", "Basic Terminologies"],
            ),
            (
                "Threats and Attacks",
                "Explore common cyber threats and attack methodologies.",
                &[
                    "Common Types of Attacks",
                    "Offensive Security Intro",
                    "Defensive Security Intro",
                ],
            ),
            (
                "Linux Fundamentals",
                "Linux is widely used among many servers. Learn how to use the Linux operating system.",
                &[
                    "Linux Fundamentals - Part 1",
                    "Linux Fundamentals - Part 2",
                    "Linux Fundamentals - Part 3",
                ],
            ),
            (
                "Networking",
                "Learn how devices communicate, explore key protocols, and understand how data moves securely across networks.",
                &[
                    "Networking Fundamentals",
                    "IP Addressing & Subnetting",
                    "Core Networking Protocols",
                    "Network Security Essentials",
                    "Network Analysis with Wireshark & Nmap",
                ],
            ),
            (
                "Cryptography",
                "Understand how data is protected using encryption, hashing, and secure communication techniques.",
                &[
                    "Introduction to Cryptography",
                    "Symmetric Encryption",
                    "Asymmetric Encryption & PKI",
                    "Hash Functions & Data Integrity",
                    "Cryptographic Attacks & Weaknesses",
                ],
            ),
            (
                "Web Hacking",
                "Learn how to find, exploit, and secure vulnerabilities in web applications.",
                &[
                    "Introduction to Web Applications",
                    "Information Gathering & Reconnaissance",
                    "Common Web Vulnerabilities",
                    "Authentication & Session Attacks",
                    "Exploitation & Post-Exploitation",
                ],
            ),
            (
                "Vulnerability Management & Exploitation Basics",
                "Discover how to find, assess, and exploit security weaknesses, and learn the basics of patching and mitigation.",
                &[
                    "Introduction to Vulnerabilities and CVEs",
                    "Common Vulnerability Scanning Tools",
                    "Basics of Exploit Development",
                    "Patch Management & Remediation Strategies",
                ],
            ),
            (
                "Incident Response and Digital Forensics",
                "Learn how to detect, contain, and investigate cybersecurity incidents through basic response strategies and digital forensics.",
                &[
                    "Introduction to Incident Response",
                    "First Responder Actions",
                    "Basics of Log Analysis",
                    "Digital Forensics Fundamentals",
                ],
            ),
        ],
        reward_xp: 350,
        reward_badge: "Cybersecurity Foundations Badge",
    },
    PathDef {
        name: "Data Science Fundamentals",
        description: "Master the essentials of data science from basics to machine learning.",
        difficulty: Difficulty::Beginner,
        estimated_hours: 5,
        chapters: &[
            (
                "Foundations of Data Analysis",
                "Learn the core concepts of data analysis and statistics.",
                &["Python for Everybody", "Intro to Data Science"],
            ),
            (
                "Machine Learning Essentials",
                "Understand the principles of machine learning algorithms.",
                &["Machine Learning Basics"],
            ),
        ],
        reward_xp: 100,
        reward_badge: "Data Science Explorer Badge",
    },
    PathDef {
        name: "Web Fundamentals",
        description: "A beginner's guide to understanding how websites work and how the web connects us all.",
        difficulty: Difficulty::Beginner,
        estimated_hours: 10,
        chapters: &[
            (
                "Introduction to the Web",
                "Learn how the web works, including browsers, servers, and how they communicate.",
                &[
                    "What is the Web?",
                    "How Browsers and Servers Communicate",
                    "Basic Web Terminologies",
                ],
            ),
            (
                "HTML Fundamentals",
                "Understand the structure of web pages and start building with HTML.",
                &[
                    "Introduction to HTML",
                    "HTML Tags and Elements",
                    "Building Your First Web Page",
                ],
            ),
            (
                "CSS Fundamentals",
                "Learn how to style web pages with CSS to create visually appealing designs.",
                &[
                    "Introduction to CSS",
                    "Selectors and Properties",
                    "Basic Page Styling",
                ],
            ),
            (
                "JavaScript Basics",
                "Discover how JavaScript brings interactivity and logic to websites.",
                &[
                    "Introduction to JavaScript",
                    "Variables, Functions, and Events",
                    "Making Websites Interactive",
                ],
            ),
            (
                "Web Hosting and Deployment",
                "Learn how to put your website online and understand domain names and hosting services.",
                &[
                    "What is Web Hosting?",
                    "How to Buy a Domain",
                    "Deploying a Website",
                ],
            ),
        ],
        reward_xp: 200,
        reward_badge: "Web Fundamentals Badge",
    },
    PathDef {
        name: "Management 101",
        description: "An essential introduction to core business management principles and practices.",
        difficulty: Difficulty::Intermediate,
        estimated_hours: 14,
        chapters: &[
            (
                "Foundations of Business",
                "Learn the basics of how businesses operate, their structures, and key functional areas.",
                &[
                    "Introduction to Business",
                    "Business Structures and Types",
                    "Key Business Functions",
                ],
            ),
            (
                "Principles of Management",
                "Understand core management functions, leadership styles, and effective organizational planning.",
                &[
                    "Introduction to Management",
                    "Leadership and Decision-Making",
                    "Planning and Organizational Structure",
                ],
            ),
            (
                "Business Strategy and Growth",
                "Explore how businesses develop strategies, adapt to markets, and drive sustainable growth.",
                &[
                    "Introduction to Business Strategy",
                    "Market Analysis Basics",
                    "Growth and Innovation Strategies",
                ],
            ),
        ],
        reward_xp: 150,
        reward_badge: "Business Management Foundations Badge",
    },
];

/// Courses the demo rating seed gives extra ratings
pub const POPULAR_COURSES: &[&str] = &[
    "Intro to Cybersecurity",
    "Python for Everybody",
    "Introduction to HTML",
    "Introduction to Business",
    "Machine Learning Basics",
    "Network Security Essentials",
    "Common Web Vulnerabilities",
];

/// Courses the demo rating seed rates near the top
pub const FOUNDATIONAL_COURSES: &[&str] = &[
    "CIA Triad",
    "Introduction to JavaScript",
    "Introduction to Management",
    "Linux Fundamentals - Part 1",
];

/// Courses the demo rating seed pins to a 3.5 average
pub const CHALLENGING_COURSES: &[&str] = &[
    "Cryptographic Attacks & Weaknesses",
    "Basics of Exploit Development",
    "Hash Functions & Data Integrity",
    "Exploitation & Post-Exploitation",
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn builtin_parts() -> CatalogParts {
    CatalogParts {
        levels: TEN_LEVELS
            .iter()
            .map(|&(code, title, xp)| LevelTier::new(code, title, xp))
            .collect(),
        categories: CATEGORIES
            .iter()
            .map(|&(category, courses)| {
                let entries = courses
                    .iter()
                    .map(|&(name, slug)| (name.to_string(), format!("{}{}", LINK_BASE, slug)))
                    .collect();
                (category.to_string(), entries)
            })
            .collect(),
        skill_badges: SKILL_BADGES
            .iter()
            .map(|&(name, courses, min_xp)| SkillBadgeRequirement {
                name: name.to_string(),
                required_courses: strings(courses),
                min_xp,
            })
            .collect(),
        quests: QUESTS
            .iter()
            .map(|&(name, courses, reward_xp, badge)| Quest {
                name: name.to_string(),
                required_courses: strings(courses),
                reward_xp,
                reward_badge: badge.to_string(),
            })
            .collect(),
        learning_paths: PATHS
            .iter()
            .map(|def| LearningPath {
                name: def.name.to_string(),
                description: def.description.to_string(),
                difficulty: def.difficulty,
                estimated_hours: def.estimated_hours,
                chapters: def
                    .chapters
                    .iter()
                    .map(|&(title, description, courses)| Chapter {
                        title: title.to_string(),
                        description: description.to_string(),
                        required_courses: strings(courses),
                    })
                    .collect(),
                reward_xp: def.reward_xp,
                reward_badge: def.reward_badge.to_string(),
            })
            .collect(),
        challenges: CHALLENGES
            .iter()
            .map(|&(question, answer, reward_xp)| DailyChallenge {
                question: question.to_string(),
                answer: answer.to_string(),
                reward_xp,
            })
            .collect(),
    }
}
