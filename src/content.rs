/// Top-level page sections that can be navigated to with an in-page anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Expertise,
    Services,
    Portfolio,
    Contact,
}

impl SectionId {
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Expertise => "expertise",
            SectionId::Services => "services",
            SectionId::Portfolio => "portfolio",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Expertise => "Expertise",
            SectionId::Services => "Services",
            SectionId::Portfolio => "Portfolio",
            SectionId::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<SectionId> {
        OBSERVED_SECTIONS.iter().copied().find(|s| s.id() == id)
    }
}

pub const NAV_ITEMS: [SectionId; 5] = [
    SectionId::About,
    SectionId::Expertise,
    SectionId::Services,
    SectionId::Portfolio,
    SectionId::Contact,
];

pub const OBSERVED_SECTIONS: [SectionId; 6] = [
    SectionId::Home,
    SectionId::About,
    SectionId::Expertise,
    SectionId::Services,
    SectionId::Portfolio,
    SectionId::Contact,
];

#[derive(Debug, PartialEq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, PartialEq)]
pub struct ServiceOffer {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, PartialEq)]
pub struct CaseStudy {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image_placeholder: &'static str,
    pub video_url: Option<&'static str>,
}

/// A headline figure with a caption, used by the stat strips.
#[derive(Debug, PartialEq)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
    pub sub: Option<&'static str>,
}

pub struct Highlight {
    pub icon: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
}

pub static SKILLS: [SkillCategory; 4] = [
    SkillCategory {
        title: "CRM & System Architecture",
        icon: "🗄️",
        skills: &[
            "Full GoHighLevel Account Setup",
            "CRM Pipeline Architecture",
            "Client Journey Mapping",
            "Data Migration & Snapshot Creation",
            "SaaS Mode Deployment Support",
        ],
    },
    SkillCategory {
        title: "Lead Generation Engines",
        icon: "🧲",
        skills: &[
            "High-Conversion Capture Funnels",
            "Messenger Lead Capture Automation",
            "Qualifying Logic & Lead Routing",
            "Automated Prospect Tagging Systems",
        ],
    },
    SkillCategory {
        title: "Marketing Orchestration",
        icon: "🔀",
        skills: &[
            "Multi-Channel Nurturing Workflows",
            "Behavior-Based Automation",
            "SMS & Email Ecosystem Setup",
            "Follow-up Sequence Engineering",
        ],
    },
    SkillCategory {
        title: "Conversation Automation",
        icon: "💬",
        skills: &[
            "AI Chatbot Integration",
            "FB Messenger & IG Automation",
            "Appointment Booking Engines",
            "Instant Speed-to-Lead Systems",
        ],
    },
];

pub static SERVICES: [ServiceOffer; 3] = [
    ServiceOffer {
        title: "The GHL Core Setup",
        description: "Transformation of your GoHighLevel account into a finely-tuned business machine.",
        features: &[
            "Account optimization",
            "Custom field mapping",
            "Snapshot deployment",
            "Domain & Email SMTP integration",
        ],
    },
    ServiceOffer {
        title: "Lead Flow Systems",
        description: "End-to-end systems that attract, qualify, and route leads without manual intervention.",
        features: &[
            "Funnel architecture",
            "Lead scoring workflows",
            "Automated distribution",
            "Sales notification triggers",
        ],
    },
    ServiceOffer {
        title: "CRM Automation Audit",
        description: "Fixing broken pipelines and optimizing messy workflows for maximum efficiency.",
        features: &[
            "Migration support",
            "Workflow consolidation",
            "Clean data protocols",
            "Process mapping",
        ],
    },
];

const DEMO_VIDEO: &str = "https://www.w3schools.com/html/mov_bbb.mp4";

pub static CASE_STUDIES: [CaseStudy; 4] = [
    CaseStudy {
        title: "High-Ticket Funnel Architecture",
        category: "Funnel Builds",
        description: "Multi-step booking funnel with conditional qualifying logic.",
        image_placeholder: "https://picsum.photos/seed/funnel/800/600",
        video_url: Some(DEMO_VIDEO),
    },
    CaseStudy {
        title: "The 'Invisible' Sales Team",
        category: "Workflow Automations",
        description: "Complex automation handling lead nurturing for 6 months post-optin.",
        image_placeholder: "https://picsum.photos/seed/workflow/800/600",
        video_url: Some(DEMO_VIDEO),
    },
    CaseStudy {
        title: "Real Estate Pipeline Engine",
        category: "CRM Pipelines",
        description: "Customized CRM stages with automated status-triggered follow-ups.",
        image_placeholder: "https://picsum.photos/seed/crm/800/600",
        video_url: Some(DEMO_VIDEO),
    },
    CaseStudy {
        title: "Instant Response Messenger Bot",
        category: "Messenger Bots",
        description: "FB/IG bot that qualifies leads before sending booking links.",
        image_placeholder: "https://picsum.photos/seed/bot/800/600",
        video_url: Some(DEMO_VIDEO),
    },
];

pub static CASE_STUDY_HIGHLIGHTS: [&str; 4] = [
    "System Architecture Mapping",
    "GHL Custom Logic Build",
    "Error-Free Routing",
    "Performance Monitoring",
];

pub static EXPERIENCE_STATS: [Metric; 3] = [
    Metric { value: "100+", label: "Workflows Built", sub: Some("End-to-end logic") },
    Metric { value: "50+", label: "Funnel Pages", sub: Some("Designed for conversion") },
    Metric { value: "24/7", label: "Instant Response", sub: Some("Messenger qualifying") },
];

pub static POSITIONING_METRICS: [Metric; 4] = [
    Metric { value: "0%", label: "Manual Data Entry", sub: None },
    Metric { value: "24/7", label: "Lead Capture Nurture", sub: None },
    Metric { value: "10X", label: "Follow-Up Speed", sub: None },
    Metric { value: "100%", label: "Overall Scalability", sub: None },
];

pub static IDEAL_CLIENT: [&str; 5] = [
    "You use GoHighLevel but know you're barely scratching the surface.",
    "You're tired of manual follow-ups and losing leads in a messy CRM.",
    "You need systems that scale your workload, not increase it.",
    "You value deep strategy and architectural thinking over basic tasks.",
    "You need a partner who executes independently and solves bottlenecks.",
];

pub static CONTACT_HIGHLIGHTS: [Highlight; 3] = [
    Highlight { icon: "📅", text: "Available for 30-min Strategy Calls", accent: "blue" },
    Highlight { icon: "🌐", text: "Serving Clients in US, UK, EU & AU", accent: "purple" },
    Highlight { icon: "🛡️", text: "GDPR Compliant & Secure Operations", accent: "green" },
];

pub static CRM_STATUS_OPTIONS: [&str; 5] = [
    "Already Using GHL",
    "Thinking of Switching",
    "Need Brand New Setup",
    "Complex Migration Need",
    "Snapshot Development",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nav_items_follow_page_order() {
        let labels: Vec<_> = NAV_ITEMS.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["About", "Expertise", "Services", "Portfolio", "Contact"]);
        assert_eq!(OBSERVED_SECTIONS[0], SectionId::Home);
        assert_eq!(&OBSERVED_SECTIONS[1..], &NAV_ITEMS[..]);
    }

    #[test]
    fn every_anchor_resolves_to_a_section() {
        for href in ["#about", "#expertise", "#services", "#portfolio", "#contact", "#home"] {
            let id = href.trim_start_matches('#');
            let section = SectionId::from_id(id).unwrap_or_else(|| panic!("{} has no section", href));
            assert_eq!(section.href(), href);
        }
        assert_eq!(SectionId::from_id("pricing"), None);
    }

    #[test]
    fn section_ids_are_unique() {
        let ids: HashSet<_> = OBSERVED_SECTIONS.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), OBSERVED_SECTIONS.len());
    }

    #[test]
    fn static_tables_are_populated() {
        assert!(SKILLS.iter().all(|c| !c.skills.is_empty()));
        assert!(SERVICES.iter().all(|s| s.features.len() == 4));
        assert!(CASE_STUDIES
            .iter()
            .all(|c| c.image_placeholder.starts_with("https://")));
        assert_eq!(CASE_STUDIES.iter().filter(|c| c.video_url.is_some()).count(), 4);
    }
}
