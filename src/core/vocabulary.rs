use regex::{Regex, RegexBuilder};

/// Domain categories in declaration order. Earlier categories win ties.
const DOMAIN_KEYWORDS: &[(&str, &[&str])] = &[
    ("ecommerce", &["e-commerce", "ecommerce", "shopify", "woocommerce", "magento", "cart", "checkout"]),
    ("finance", &["fintech", "banking", "payments", "ledger", "kYC", "kyc", "aml", "loan", "credit", "debit"]),
    ("marketing", &["seo", "sem", "campaign", "social media", "content marketing", "brand"]),
    ("technology", &["software", "saas", "cloud", "microservices", "api", "devops", "kubernetes", "docker"]),
    ("education", &["edtech", "learning", "course", "student", "teacher", "classroom"]),
    ("healthcare", &["healthcare", "medical", "patient", "clinical", "hospital", "diagnostic"]),
    ("other", &[]),
];

/// Technology tokens recognised in free text. Alternation order matters: the first
/// alternative that completes a word-bounded match wins. Word boundaries are ASCII-only,
/// so a token directly next to a non-ASCII letter still counts.
pub const SKILL_PATTERN: &str = r"(?-u:\b)(java|javascript|typescript|python|react|node(?:\.js)?|express|mongodb|sql|postgres|mysql|html|css|tailwind|next(?:\.js)?|angular|vue|redux|docker|kubernetes|aws|gcp|azure|git|figma|photoshop|illustrator|nlp|ml|ai|data(?:\s*science)?|rest|graphql)(?-u:\b)";

const POSTING_BACHELOR_PATTERN: &str = r"b\.?tech|bachelor|be(?-u:\b)";
const POSTING_MASTER_PATTERN: &str = r"m\.?tech|master|me(?-u:\b)";
const EDUCATION_MASTER_PATTERN: &str = r"master|m\.tech|me(?-u:\b)";
const EDUCATION_BACHELOR_PATTERN: &str = r"bachelor|b\.tech|be(?-u:\b)";

/// Name of the fallback category; it has no keywords and never wins by count.
pub const OTHER_DOMAIN: &str = "other";

/// A domain category and the keywords that vote for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainKeywords {
    pub domain: String,
    pub keywords: Vec<String>,
}

impl DomainKeywords {
    pub fn new<S: Into<String>>(domain: S, keywords: Vec<String>) -> Self {
        Self {
            domain: domain.into(),
            keywords,
        }
    }

    /// Number of distinct keywords that occur as substrings of `text`
    pub fn hits(&self, text: &str) -> usize {
        self.keywords
            .iter()
            .filter(|keyword| text.contains(keyword.as_str()))
            .count()
    }
}

/// Read-only keyword tables shared by both extractors
///
/// Built once and handed to the extractors; cloning is cheap because compiled
/// regexes share their program.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    domains: Vec<DomainKeywords>,
    skills: Regex,
    posting_bachelor: Regex,
    posting_master: Regex,
    education_master: Regex,
    education_bachelor: Regex,
}

impl Vocabulary {
    /// Build a vocabulary from caller-supplied domain tables and skill pattern.
    ///
    /// The skill pattern is compiled case-insensitively.
    pub fn new(domains: Vec<DomainKeywords>, skill_pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            domains,
            skills: case_insensitive(skill_pattern)?,
            posting_bachelor: case_insensitive(POSTING_BACHELOR_PATTERN)?,
            posting_master: case_insensitive(POSTING_MASTER_PATTERN)?,
            education_master: case_insensitive(EDUCATION_MASTER_PATTERN)?,
            education_bachelor: case_insensitive(EDUCATION_BACHELOR_PATTERN)?,
        })
    }

    /// The portal's standard tables
    pub fn standard_domains() -> Vec<DomainKeywords> {
        DOMAIN_KEYWORDS
            .iter()
            .map(|(domain, keywords)| {
                DomainKeywords::new(*domain, keywords.iter().map(|k| k.to_string()).collect())
            })
            .collect()
    }

    pub fn domains(&self) -> &[DomainKeywords] {
        &self.domains
    }

    /// Every skill token in `text`, lower-cased, in order of appearance
    pub fn find_skills<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        self.skills.find_iter(text).map(|m| m.as_str().to_lowercase())
    }

    /// The category with the most keyword hits, or `None` when nothing hits.
    ///
    /// Ties go to the category declared first.
    pub fn best_domain(&self, text: &str) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for category in &self.domains {
            let hits = category.hits(text);
            if hits == 0 {
                continue;
            }
            match best {
                Some((_, top)) if top >= hits => {}
                _ => best = Some((category.domain.as_str(), hits)),
            }
        }
        best.map(|(domain, _)| domain)
    }

    pub fn mentions_bachelor(&self, text: &str) -> bool {
        self.posting_bachelor.is_match(text)
    }

    pub fn mentions_master(&self, text: &str) -> bool {
        self.posting_master.is_match(text)
    }

    pub fn holds_master(&self, education: &str) -> bool {
        self.education_master.is_match(education)
    }

    pub fn holds_bachelor(&self, education: &str) -> bool {
        self.education_bachelor.is_match(education)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(Self::standard_domains(), SKILL_PATTERN)
            .expect("built-in vocabulary patterns are valid")
    }
}

fn case_insensitive(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}
