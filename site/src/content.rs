//! Static page copy.
//!
//! Kept out of the view code so pages read as layout and tests can assert
//! on the copy without rendering.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const BRAND_TAG: &str = "[AI_FOR_GOOD_INITIATIVE]";
pub const HERO_TITLE: &str = "AI FOR GOOD INITIATIVE";
pub const SITE_DESCRIPTION: &str = "A non-profit initiative building open-source AI solutions for underrepresented communities. We empower volunteers and provide resources to create socially impactful AI.";
pub const HERO_TAGLINE: &str = "A non-profit collective building & deploying open-source AI for social good. Enabling volunteers, providing resources, and serving underrepresented communities globally.";
pub const PURPOSE: &str = "To democratize AI development and access. We build practical, open-source AI tools addressing critical needs in underserved communities globally. We promote a collaborative ecosystem where volunteers learn, build, and deploy AI for tangible social impact. AI for everyone, built by everyone.";

/// Heading plus body text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Anchor {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub roles: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Person {
    pub name: &'static str,
    pub role: &'static str,
}

/// Where a footer link points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    Volunteer,
    Idea,
    GitHub,
    Anchor(&'static str),
}

pub const FOCUS_AREAS: &[Entry] = &[
    Entry {
        title: "//EQUITABLE_ACCESS",
        body: "AI tools enhancing healthcare, education, and essential services in low-resource settings.",
    },
    Entry {
        title: "//COMMUNITY_AI",
        body: "Co-designing AI solutions directly with communities to address their self-identified needs.",
    },
    Entry {
        title: "//OPEN_RESOURCES",
        body: "Providing datasets, models, and educational materials for social good AI development.",
    },
];

pub const GET_INVOLVED: &[Anchor] = &[
    Anchor { label: "VOLUNTEER", href: "#volunteer-execute" },
    Anchor { label: "SUBMIT IDEA", href: "#submit-op" },
    Anchor { label: "DONATE", href: "#fund-relay" },
    Anchor { label: "PARTNER", href: "#partner-req" },
];

pub const VOLUNTEER_PITCH: &str = "Join a global network of developers, designers, researchers, and domain experts building AI for good. Contribute your skills to impactful projects, learn new technologies, and collaborate within independent, community-led teams. Remote and flexible.";

pub const SKILLS_NEEDED: &[&str] = &[
    "AI/ML Engineering (PyTorch, TensorFlow, Scikit-learn)",
    "Data Science & Analysis (Pandas, SQL, Stats)",
    "Full-Stack Development (Python/JS/React/Node)",
    "UX/UI Design (Figma, Accessibility Standards)",
    "Project Management (Agile, Remote Teams)",
    "Technical Writing & Documentation",
    "Community Outreach & Support",
    "Domain Expertise (Healthcare, Education, Climate, etc.)",
    "DevOps & MLOps (Docker, K8s, Cloud Platforms)",
];

pub const IDEA_PITCH: &str = "Have an idea for an AI application that can create positive social change? Propose a project targeting needs in underserved communities. We focus on open-source, ethical, and impactful solutions.";

pub const IDEA_CHECKLIST: &[&str] = &[
    "The specific problem your idea addresses.",
    "How AI could provide a solution.",
    "The target community or beneficiaries.",
    "Potential positive impact.",
    "Any existing resources or data (optional).",
];

pub const ACTIVE_PROJECTS: &[Project] = &[
    Project {
        title: "HEALTH_ACCESS_AI",
        summary: "AI-powered diagnostic assistance for remote clinics.",
        roles: &["ML Engineer (CV)", "Full-Stack Dev (Remix)", "Medical Knowledge"],
    },
    Project {
        title: "ERP_AUTO",
        summary: "AI automation for mundane tasks in ERP settings.",
        roles: &["Data Scientist", "Full-Stack Dev", "ERP Specialist"],
    },
    Project {
        title: "LLM_REASONING",
        summary: "Symbolic reasoning models to solve complex problems.",
        roles: &["NLP Specialist", "AI Researcher", "Mathematician"],
    },
];

pub const DONATION_PITCH: &str = "As a non-profit, we rely on community support to sustain our operations. Your donation directly funds server costs, deployment resources for underserved areas, open-source tool development, and volunteer coordination efforts. Help us build and deploy AI where it's needed most.";

pub const FUND_USES: &[&str] = &[
    "Cloud Infrastructure & Compute Time",
    "Hardware for Edge AI Deployments",
    "Open Dataset Curation & Hosting",
    "Volunteer Tools & Platform Costs",
    "Accessibility & Localization Efforts",
];

/// Donation tiers in whole dollars; `None` is the custom amount tile.
pub const DONATION_TIERS: &[Option<u32>] = &[Some(25), Some(50), Some(100), None];

pub const DONATION_PLATFORMS: &[&str] = &["[OPEN_COLLECTIVE]", "[CRYPTO_ETH]"];

/// Amount and caption shown on a donation tile.
pub fn donation_tile(tier: Option<u32>) -> (String, &'static str) {
    match tier {
        Some(amount) => (format!("${amount}"), "DONATE_NOW"),
        None => ("...".to_owned(), "CUSTOM_AMOUNT"),
    }
}

pub const PARTNER_PITCH: &str = "Collaborate with us to amplify impact. We partner with NGOs, research labs, universities, ethical companies, and community organizations who share our vision of equitable AI. Let's build impactful solutions together.";

pub const PARTNER_WAYS: &[Entry] = &[
    Entry { title: "Project Collaboration:", body: "Co-develop and deploy AI solutions." },
    Entry { title: "Resource Sharing:", body: "Provide data, compute, or tools." },
    Entry { title: "Research Partnerships:", body: "Joint studies on AI ethics and impact." },
    Entry { title: "Community Integration:", body: "Connect us with communities needing AI solutions." },
    Entry { title: "Pro Bono Expertise:", body: "Offer specialized technical or domain support." },
];

pub const COLLABORATORS: &[&str] = &["AVINU_AI", "UNIVERSITY_OF_ISFAHAN", "OPTICORE"];

pub const HOME_FAQ: &[Entry] = &[
    Entry {
        title: "Q: How are projects selected?",
        body: "A: Projects are selected based on alignment with our mission, potential impact, feasibility, community need, and available volunteer resources. Idea submissions are reviewed by the community.",
    },
    Entry {
        title: "Q: Is programming experience required to volunteer?",
        body: "A: No! While technical skills are valuable, we also need project managers, designers, researchers, writers, community organizers, and domain experts. All passionate individuals are welcome.",
    },
    Entry {
        title: "Q: How is the initiative funded?",
        body: "A: Primarily through individual donations, grants, and sponsorships from ethical organizations. We prioritize transparency in our funding and spending.",
    },
    Entry {
        title: "Q: What does 'open-source' mean for your projects?",
        body: "A: All code, models (where feasible), and documentation developed are publicly available under permissive licenses (e.g., MIT, Apache 2.0) on our GitHub. We encourage reuse and collaboration.",
    },
];

pub const FOOTER_LINKS: &[(&str, LinkTarget)] = &[
    ("REGISTER", LinkTarget::Volunteer),
    ("SUBMIT IDEA", LinkTarget::Idea),
    ("GITHUB", LinkTarget::GitHub),
    ("DONATE", LinkTarget::Anchor("#fund-relay")),
];

// =============================================================================
// ABOUT
// =============================================================================

pub const ABOUT_INTRO: &str = "We are a collective of researchers and developers dedicated to leveraging Artificial Intelligence for societal benefit. Our work focuses on creating impactful solutions for global challenges, promoting ethical AI practices, and ensuring equitable access to technology.";

pub const MISSION: &str = "Our mission is to harness the power of AI to address pressing global issues such as climate change, healthcare disparities, poverty, and inequality. We strive to develop innovative and ethical AI solutions that are accessible to all, fostering a more sustainable and equitable future.";

pub const VISION: &str = "We envision a world where AI is a force for good, driving positive change and improving the lives of people everywhere. Our long-term goals include creating a global network of AI for Good initiatives, influencing policy and ethical standards in AI development, and ensuring that AI benefits are shared by all communities, especially those most in need.";

pub const WHAT_WE_DO: &[&str] = &[
    "Research and development of AI solutions for specific global challenges.",
    "Collaborations with organizations and communities to implement and scale AI projects.",
    "Advocacy for ethical AI practices and responsible technology development.",
    "Educational programs and workshops to promote AI literacy and skills.",
    "Open-source initiatives and knowledge sharing to accelerate AI innovation.",
];

pub const IMPACT: &[&str] = &[
    "Development of an AI-powered early warning system for natural disasters, reducing response times by 30%.",
    "Implementation of AI-driven diagnostic tools in underserved communities, improving healthcare access for over 10,000 people.",
    "Creation of an AI platform to optimize resource allocation in humanitarian aid, increasing efficiency by 25%.",
    "Launch of an educational program that has trained 500 individuals from diverse backgrounds in AI skills.",
];

pub const TEAM: &[Person] = &[
    Person { name: "Dr. Anya Sharma", role: "Lead Researcher" },
    Person { name: "Ben Carter", role: "Senior Developer" },
    Person { name: "Maria Rodriguez", role: "Community Outreach" },
];

pub const ADVISORS: &[Person] = &[
    Person { name: "Dr. Kenji Tanaka", role: "AI Ethics Advisor" },
    Person { name: "Dr. Ingrid Dubois", role: "Global Health Advisor" },
    Person { name: "Mr. Javier Hernandez", role: "Sustainable Development Advisor" },
];

pub const PARTNERS: &[Person] = &[
    Person { name: "Global Tech Initiative", role: "Technology partner providing infrastructure and expertise." },
    Person { name: "Health for All Foundation", role: "Collaborator on AI solutions for healthcare access." },
    Person { name: "Climate Action Network", role: "Partner on AI applications for climate change mitigation." },
];

pub const ABOUT_FAQ: &[Entry] = &[
    Entry {
        title: "What is the AI for Good Initiative?",
        body: "The AI for Good Initiative is a collective focused on using Artificial Intelligence to address global challenges and promote ethical technology practices.",
    },
    Entry {
        title: "How can I get involved?",
        body: "We welcome contributions from researchers, developers, and anyone passionate about using AI for positive impact. Please visit our \"Get Involved\" page or contact us for more information.",
    },
    Entry {
        title: "Is the initiative open source?",
        body: "Many of our projects are open source to encourage collaboration and accelerate innovation. Check out our GitHub repository for more details.",
    },
];
