//! Keyword-based course recommendation for free-form messages

struct Interest {
    /// Substrings of the lower-cased message
    phrases: &'static [&'static str],
    /// Whole words, for keywords too short to match as substrings
    words: &'static [&'static str],
    reply: &'static str,
}

impl Interest {
    fn matches(&self, lower: &str) -> bool {
        self.phrases.iter().any(|p| lower.contains(p))
            || lower
                .split(|c: char| !c.is_alphanumeric())
                .any(|token| self.words.contains(&token))
    }
}

const INTERESTS: &[Interest] = &[
    Interest {
        phrases: &["data science", "machine learning"],
        words: &["ai"],
        reply: "I see you're interested in Data Science! 🔢\n\n\
                I'd recommend our 🛤️ 'Data Science Fundamentals' learning path which includes:\n\
                - 'Python for Everybody' - A perfect starting point for data analysis\n\
                - 'Intro to Data Science' - Learn essential data concepts\n\
                - 'Machine Learning Basics' - Explore AI fundamentals\n\n\
                You might also enjoy our 🎯 'Machine Learning Apprentice' quest which rewards you with XP and a special badge upon completion!\n\n\
                Helpful commands:\n\
                - Use 'show learning path details Data Science Fundamentals' for the full curriculum\n\
                - Use 'start learning path Data Science Fundamentals' to begin right away\n\
                - Use 'show quests' to see related data science quests\n\n\
                Would you like to start one of these courses or see more options?",
    },
    Interest {
        phrases: &["cybersecurity", "security", "hacking"],
        words: &[],
        reply: "Great choice! Cybersecurity is an exciting field! 🔐\n\n\
                I recommend our 'Cyber Security 101' learning path which includes:\n\
                - 'Intro to Cybersecurity' - Learn fundamental concepts\n\
                - 'CIA Triad' - Understand the core principles of information security\n\
                - 'Network Security Essentials' - Protect systems from threats\n\n\
                We also have specialized quests like 'Cryptography Explorer' and 'Web Hacking Initiate' that can earn you badges and XP!\n\n\
                Helpful commands:\n\
                - Use 'show learning path details Cyber Security 101' to see all chapters\n\
                - Use 'start learning path Cyber Security 101' to begin your security journey\n\
                - Use 'show cybersecurity courses' for all security-related courses\n\n\
                Would you like to explore any of these options, or would you prefer something more advanced?",
    },
    Interest {
        phrases: &["web", "html", "css", "javascript"],
        words: &[],
        reply: "Web development is a fantastic choice! 💻\n\n\
                Our 'Web Fundamentals' learning path is perfect for you with courses like:\n\
                - 'Introduction to HTML' - Build the structure of websites\n\
                - 'Introduction to CSS' - Create beautiful designs\n\
                - 'Introduction to JavaScript' - Add interactivity to your sites\n\n\
                The 'Web Developer Starter' quest is also great for beginners and rewards you with a special badge!\n\n\
                Helpful commands:\n\
                - Use 'show learning path details Web Fundamentals' to explore the full curriculum\n\
                - Use 'start learning path Web Fundamentals' to begin coding right away\n\
                - Use 'start quest Web Developer Starter' to earn your first web development badge\n\n\
                Ready to start building awesome websites? Which of these interests you most?",
    },
    Interest {
        phrases: &["business", "management", "leadership", "strategy"],
        words: &[],
        reply: "Business and management skills are always valuable! 📊\n\n\
                I recommend our 'Management 101' learning path which covers:\n\
                - 'Introduction to Business' - Understand core business concepts\n\
                - 'Introduction to Management' - Learn effective leadership skills\n\
                - 'Introduction to Business Strategy' - Develop strategic thinking\n\n\
                The 'Business Management Foundation' quest can help you earn extra XP and a professional badge!\n\n\
                Helpful commands:\n\
                - Use 'show learning path details Management 101' to see the full curriculum\n\
                - Use 'start learning path Management 101' to begin your management journey\n\
                - Use 'show business management courses' for all related courses\n\n\
                Would you like to focus on a specific aspect of business management?",
    },
    Interest {
        phrases: &["linux", "operating system"],
        words: &["os"],
        reply: "Linux skills are highly sought after! 🐧\n\n\
                Check out these courses from our 'Cyber Security 101' path:\n\
                - 'Linux Fundamentals - Part 1' - Learn basic commands\n\
                - 'Linux Fundamentals - Part 2' - Explore system management\n\
                - 'Linux Fundamentals - Part 3' - Master advanced techniques\n\n\
                These skills will give you a solid foundation for many tech careers!\n\n\
                Helpful commands:\n\
                - Use 'show learning path details Cyber Security 101' to see the full curriculum\n\
                - Use 'start learning path Cyber Security 101' to begin learning Linux\n\
                - Use 'completed course Linux Fundamentals - Part 1' after finishing a course\n\n\
                Would you like to start with Linux basics or do you have some experience already?",
    },
    Interest {
        phrases: &["network", "cisco", "routing"],
        words: &[],
        reply: "Networking is a critical field in IT! 🌐\n\n\
                From our 'Cyber Security 101' path, I recommend:\n\
                - 'Networking Fundamentals' - Understand how networks function\n\
                - 'IP Addressing & Subnetting' - Master IP management\n\
                - 'Core Networking Protocols' - Learn how devices communicate\n\n\
                The 'Network Security Novice' quest would be perfect for building your skills!\n\n\
                Helpful commands:\n\
                - Use 'show learning path details Cyber Security 101' to explore networking modules\n\
                - Use 'start quest Network Security Novice' to begin the networking quest\n\
                - Use 'show trending courses' to see popular networking courses\n\n\
                Would you like to focus on basic networking or network security aspects?",
    },
    Interest {
        phrases: &["career change", "beginner", "starting out", "new to"],
        words: &[],
        reply: "Exciting to see you starting a new journey in tech! 🤖\n\n\
                For beginners, I recommend:\n\
                - 'Web Fundamentals' learning path - Friendly introduction to web technologies\n\
                - 'Cyber Security 101' - Start with the 'Basic Terminologies' course\n\
                - 'Python for Everybody' - Great first programming language\n\n\
                All these are beginner-friendly and will help you build confidence!\n\n\
                Helpful commands:\n\
                - Use 'list learning paths' to see all available learning journeys\n\
                - Use 'show profile' to track your progress as you learn\n\
                - Use 'daily challenge' for a quick way to earn XP every day\n\n\
                Do any of these areas spark your interest? I can recommend specific starting points.",
    },
];

const DEFAULT_REPLY: &str = "I'd love to help you find the perfect courses! 😊\n\n\
     We have several popular learning paths 🛤️:\n\
     - 'Cyber Security 101' - Explore the world of digital security\n\
     - 'Data Science Fundamentals' - Learn to analyze data and build models\n\
     - 'Web Fundamentals' - Create websites and web applications\n\
     - 'Management 101' - Develop essential business leadership skills\n\n\
     Helpful commands:\n\
     - Use 'list learning paths' to see all learning paths with details\n\
     - Use 'show courses' to browse all available courses\n\
     - Use 'show trending courses' to see what's popular right now\n\
     - Use 'help all' for a list of all available commands for every feature\n\n\
     What topics are you most interested in exploring today?";

/// Suggest a path and quest for the first interest the message mentions.
///
/// Interests are checked in a fixed order, so "network security" lands on
/// cybersecurity rather than networking.
pub fn recommend(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    INTERESTS
        .iter()
        .find(|interest| interest.matches(&lower))
        .map_or(DEFAULT_REPLY, |interest| interest.reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interest_order() {
        assert!(recommend("I like Machine Learning")
            .starts_with("I see you're interested in Data Science!"));
        assert!(recommend("network security please").starts_with("Great choice! Cybersecurity"));
        assert!(recommend("cisco routing").starts_with("Networking is a critical field"));
        assert!(recommend("I'm new to tech").starts_with("Exciting to see you"));
    }

    #[test]
    fn test_short_keywords_match_whole_words() {
        assert!(recommend("tell me about AI").contains("'Data Science Fundamentals'"));
        assert!(recommend("which os should I learn?").starts_with("Linux skills"));
        // "explain" and "costs" only contain the letters
        assert_eq!(recommend("explain the costs"), DEFAULT_REPLY);
    }

    #[test]
    fn test_default_reply() {
        assert!(recommend("hello there")
            .starts_with("I'd love to help you find the perfect courses!"));
        assert!(recommend("").ends_with("exploring today?"));
    }
}
