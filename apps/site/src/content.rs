//! Content Store — the compiled-in portfolio content.
//!
//! Everything the page is built from lives here as literals: profile,
//! education, experience timeline, skill groups, project gallery, and the
//! source tables for the dashboard charts. Construction is infallible; the
//! test suite guards literal correctness (tag vocabulary membership, media
//! reference shapes, chart table validity).

use crate::models::{
    Category, CategoryCount, Education, ExperienceEntry, GalleryEntry, MediaRef, Profile,
    SkillGroup, SkillGrowthPoint,
};

pub const PAGE_TITLE: &str = "Digital CV | Yuxing Liu";

/// Read-only store of all portfolio content. Built once at startup and
/// shared behind an `Arc`; nothing here is mutated afterwards.
#[derive(Debug, Clone)]
pub struct ContentStore {
    profile: Profile,
    education: Education,
    experience: Vec<ExperienceEntry>,
    skills: Vec<SkillGroup>,
    gallery: Vec<GalleryEntry>,
    category_counts: Vec<CategoryCount>,
    growth_points: Vec<SkillGrowthPoint>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self {
            profile: profile(),
            education: education(),
            experience: experience(),
            skills: skills(),
            gallery: gallery(),
            category_counts: category_counts(),
            growth_points: growth_points(),
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn education(&self) -> &Education {
        &self.education
    }

    pub fn experience(&self) -> &[ExperienceEntry] {
        &self.experience
    }

    pub fn skills(&self) -> &[SkillGroup] {
        &self.skills
    }

    pub fn gallery(&self) -> &[GalleryEntry] {
        &self.gallery
    }

    pub fn category_counts(&self) -> &[CategoryCount] {
        &self.category_counts
    }

    pub fn growth_points(&self) -> &[SkillGrowthPoint] {
        &self.growth_points
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Literal content
// ────────────────────────────────────────────────────────────────────────────

fn profile() -> Profile {
    Profile {
        name: "Yuxing Liu".to_string(),
        description: "B.S. in Mathematics-Computer Science (Minor: Data Science) at UC San Diego, \
                      expected June 2027. Research Assistant specializing in web scraping, \
                      quantitative analysis, and machine learning."
            .to_string(),
        email: "yuxingliu0826@gmail.com".to_string(),
        linkedin_url: "https://www.linkedin.com/in/yuxing-liu-profile".to_string(),
        github_url: "https://github.com/yuxing26liu".to_string(),
        profile_image: Some("profile.jpg".to_string()),
        resume_document: Some("resume.pdf".to_string()),
    }
}

fn education() -> Education {
    Education {
        institution: "University of California, San Diego".to_string(),
        degree: "B.S. Mathematics-Computer Science (Minor: Data Science), Jun 2026".to_string(),
    }
}

fn experience() -> Vec<ExperienceEntry> {
    let entry = |role: &str, date_range: &str, bullets: &[&str]| ExperienceEntry {
        role: role.to_string(),
        date_range: date_range.to_string(),
        bullets: bullets.iter().map(|b| b.to_string()).collect(),
    };

    vec![
        entry(
            "Data System Analyst Assistant, CAIDA",
            "Jun 2025 – Present",
            &[
                "Developed a data-cleaning pipeline to normalize and dedupe Yelp API addresses \
                 with fuzzy matching and geolocation checks.",
                "Built backend services for a React front-end to serve repair-site \
                 recommendations and composite quality scores.",
            ],
        ),
        entry(
            "Data Analyst Intern – RunBuggy",
            "Nov 2024 – May 2025",
            &[
                "Applied clustering (KMeans, DBSCAN) and PCA to segment and categorize site data \
                 for recommendation logic.",
                "Constructed an NLP pipeline (tokenization, TF-IDF, LDA) to analyze customer \
                 messages for insights.",
                "Deployed RESTful APIs to compute nearest site recommendations and ratings.",
            ],
        ),
        entry(
            "Machine Learning Engineer, Menolearn Project",
            "Apr 2024 – Oct 2024",
            &[
                "Collaborated on design and development of an AI-driven empathetic chatbot for \
                 menopause support, improving healthcare access.",
                "Partnered with healthcare professionals to integrate medical knowledge into \
                 decision-making algorithms, enhancing response accuracy.",
            ],
        ),
        entry(
            "Research Assistant, School of Global Policy and Strategy, UCSD",
            "Apr 2024 – Jun 2025",
            &[
                "Extended a Python-based web scraper to integrate multiple APIs for global media \
                 data collection.",
                "Performed quantitative analysis on 200+ social media profiles to detect \
                 manipulation patterns and new metrics.",
            ],
        ),
        entry(
            "Software Developer, Association For Computing Machinery",
            "Apr 2024 – Jun 2024",
            &[
                "Developed a custom travel-planner web app using Next.js, Google Maps API, and \
                 MongoDB, enhancing user personalization.",
                "Designed UI/UX prototypes in Figma and refined interfaces based on user \
                 feedback.",
            ],
        ),
        entry(
            "Web Developer, Women In Coding Website Design Project Team",
            "Jan 2024 – Apr 2024",
            &[
                "Built a multi-page 'Study with Me' timer application using HTML and CSS, \
                 prioritizing intuitive, user-friendly navigation.",
                "Implemented a fully responsive website layout across mobile, tablet, and \
                 desktop devices, ensuring 100% screen-size compatibility.",
            ],
        ),
        entry(
            "System Team Member, Triton Racing",
            "Oct 2023 – Jun 2024",
            &[
                "Engineered motor controllers with SolidWorks, optimizing vehicle performance \
                 and safety.",
                "Led high-voltage safety training, improving team compliance in electric \
                 vehicle development.",
            ],
        ),
    ]
}

fn skills() -> Vec<SkillGroup> {
    let group = |name: &str, skills: &[&str]| SkillGroup {
        name: name.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
    };

    vec![
        group(
            "Languages & Tools",
            &["AWS", "Python", "R", "SQL", "Excel", "NumPy", "Pandas"],
        ),
        group(
            "Data & Machine Learning",
            &["Web scraping", "scikit-learn", "Plotly"],
        ),
        group("Workflow", &["Git", "Agile", "Tableau", "SolidWorks"]),
    ]
}

fn gallery() -> Vec<GalleryEntry> {
    vec![
        GalleryEntry {
            title: "RunBuggy Internship Final Poster".to_string(),
            categories: vec![
                Category::MachineLearningModel,
                Category::AnalysisVisualizationReport,
            ],
            media: MediaRef::classify("assets/runbuggy-final-poster.pdf"),
            link: None,
            summary: "Final poster highlighting data integration, clustering, scoring models, \
                      and insights."
                .to_string(),
        },
        GalleryEntry {
            title: "Outage Severity Across the U.S.".to_string(),
            categories: vec![
                Category::MachineLearningModel,
                Category::AnalysisVisualizationReport,
            ],
            media: MediaRef::classify("assets/outage-severity.png"),
            link: Some("https://yuxing26liu.github.io/Power-Outage-Predictor/".to_string()),
            summary: "Interactive comparison of actual vs predicted power outage durations with \
                      error visualization."
                .to_string(),
        },
        GalleryEntry {
            title: "M&A Merger & Acquisition Predictor".to_string(),
            categories: vec![Category::MachineLearningModel],
            media: MediaRef::classify("assets/business-acquisition-prediction.pdf"),
            link: Some("https://github.com/yuxing26liu/Merge-and-Acquisitions".to_string()),
            summary: "AI-driven acquisition likelihood classification and DCF valuation pipeline."
                .to_string(),
        },
    ]
}

/// Projects grouped by discipline — feeds the pie and bar charts.
fn category_counts() -> Vec<CategoryCount> {
    vec![
        CategoryCount::new("Engineering", 2),
        CategoryCount::new("Data", 3),
        CategoryCount::new("ML", 1),
        CategoryCount::new("Software", 1),
    ]
}

/// Cumulative skills learned per year — feeds the growth line chart.
fn growth_points() -> Vec<SkillGrowthPoint> {
    vec![
        SkillGrowthPoint::new(
            2021,
            3,
            "Python fundamentals, HTML, and first statistics coursework.",
        ),
        SkillGrowthPoint::new(
            2022,
            6,
            "R, SQL, and spreadsheet modeling for quantitative analysis.",
        ),
        SkillGrowthPoint::new(
            2023,
            9,
            "SolidWorks, Git workflows, and responsive web layout.",
        ),
        SkillGrowthPoint::new(
            2024,
            12,
            "scikit-learn, NLP pipelines, Figma prototyping, and Next.js.",
        ),
        SkillGrowthPoint::new(
            2025,
            14,
            "AWS cloud services and production data-cleaning pipelines.",
        ),
    ]
}
