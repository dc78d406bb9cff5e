//! Static marketing copy shared by the pages

use crate::model::ServiceCategory;

pub const COMPANY_NAME: &str = "Fugo Creative";
pub const HERO_TITLES: [&str; 2] = ["FUGO", "CREATIVE"];

pub const ABOUT_BLURB: &str = "Fugo Creative, established in 2016 in Bandung, provides a one-stop solution for \
various creative services. In 2020, we became PT. Fugo Creative Group and have since expanded our sales \
channels, committed to delivering quality and excellent service in the era of Industry 4.0.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub category: ServiceCategory,
    pub description: &'static str,
}

impl Service {
    pub const fn title(&self) -> &'static str {
        self.category.label()
    }
}

pub const SERVICES: [Service; 5] = [
    Service {
        category: ServiceCategory::DigitalDesign,
        description: "Creative and unique design solutions for branding and marketing.",
    },
    Service {
        category: ServiceCategory::DigitalBranding,
        description: "Strategic branding and digital marketing solutions.",
    },
    Service {
        category: ServiceCategory::MerchandiseProduction,
        description: "High-quality merchandise for marketing and brand identity.",
    },
    Service {
        category: ServiceCategory::ProductionHouse,
        description: "Comprehensive video production services.",
    },
    Service {
        category: ServiceCategory::EventOrganizer,
        description: "Memorable events tailored to your needs.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "FUGO Creative exceeded our expectations. Their attention to detail is top-notch!",
        author: "John Doe",
        role: "CEO of CompanyX",
    },
    Testimonial {
        quote: "An amazing team of professionals who truly care about our success.",
        author: "Sarah Lee",
        role: "Marketing Head",
    },
    Testimonial {
        quote: "Their team is skilled, and their support is exceptional.",
        author: "Emily Clark",
        role: "Project Manager",
    },
];

/// Roles assigned to team page photos, by position
pub const TEAM_ROLES: [&str; 12] = [
    "Marketing Strategist",
    "SEO Specialist",
    "Content Creator",
    "Social Media Manager",
    "Graphic Designer",
    "Brand Manager",
    "Copywriter",
    "Web Developer",
    "PPC Specialist",
    "Email Marketing Specialist",
    "Account Manager",
    "Analytics Expert",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AboutTab {
    #[default]
    History,
    Team,
    Culture,
}

impl AboutTab {
    pub const ALL: [Self; 3] = [Self::History, Self::Team, Self::Culture];

    pub const fn label(self) -> &'static str {
        match self {
            Self::History => "Our History",
            Self::Team => "Our Team",
            Self::Culture => "Our Culture",
        }
    }
}

pub const HISTORY: [&str; 2] = [
    "Founded in 2010, our company has been at the forefront of innovation in the tech industry. We started as \
     a small startup with a big vision: to revolutionize the way people interact with technology.",
    "Over the years, we've grown from a team of 5 to over 200 employees, with offices in major tech hubs around \
     the world. Our commitment to excellence and user-centric design has led us to develop award-winning \
     products used by millions.",
];

pub const OFFICES: [&str; 6] = ["Singapore", "Sydney", "Tokyo", "Dubai", "Bangkok", "Cambodia"];
pub const OFFICE_PLACEHOLDER: &str = "https://placehold.co/400x300/black/white";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Leader {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const LEADERSHIP: [Leader; 12] = [
    Leader { name: "Sona", title: "CEO & Founder", description: "Leads our company with vision and passion.", image: "/img/1. Sona.png" },
    Leader { name: "Sandi", title: "CTO", description: "Technical mastermind behind our innovative products.", image: "/img/2. Sandi.png" },
    Leader { name: "Rahdian", title: "Head of Design", description: "Brings creativity to every project.", image: "/img/3. Rahdian.png" },
    Leader { name: "Melinda", title: "Product Manager", description: "Ensures our products meet user needs.", image: "/img/4. Melinda.png" },
    Leader { name: "Nada", title: "Marketing Director", description: "Crafts our brand strategy and messaging.", image: "/img/5. Nada.png" },
    Leader { name: "Fikri", title: "Lead Developer", description: "Oversees the development of our core products.", image: "/img/6. Fikri.png" },
    Leader { name: "Rayi", title: "UX Researcher", description: "Ensures our products are user-friendly.", image: "/img/7. Rayi.png" },
    Leader { name: "Raihan", title: "Data Scientist", description: "Drives our data-driven decision making.", image: "/img/8. Raihan.png" },
    Leader { name: "Rudi", title: "Operations Manager", description: "Keeps our company running smoothly.", image: "/img/9. Rudi.png" },
    Leader { name: "Afinda", title: "Customer Success Manager", description: "Ensures our clients' satisfaction and growth.", image: "/img/10. Afinda.png" },
    Leader { name: "Rizki", title: "Quality Assurance Lead", description: "Maintains the high quality of our products.", image: "/img/11. Rizki.png" },
    Leader { name: "Danang", title: "Business Development Manager", description: "Explores new opportunities for growth.", image: "/img/12. Danang.png" },
];

pub const CULTURE: &str = "At our core, we believe in fostering a culture of innovation, collaboration, and \
continuous learning. We encourage our team members to think outside the box, take risks, and push the \
boundaries of what's possible.";

pub const VALUES: [&str; 5] = [
    "Passion for excellence",
    "User-centric approach",
    "Embracing diversity and inclusion",
    "Commitment to sustainability",
    "Continuous learning and growth",
];

pub const CULTURE_CLOSING: &str = "We believe that by nurturing a positive and inclusive work environment, we \
can bring out the best in our team and deliver exceptional products and services to our customers.";
