// site content
//
// everything on the site is static, so it is simply compiled in.  pages pull from here rather
// than hard-coding strings in their rsx, which keeps the markup readable

pub const SITE_OWNER: &str = "Tuhin Bhattacharya";
pub const LOGO_TEXT: &str = "TB";
pub const EMAIL: &str = "tuhinbhattacharya9@gmail.com";
pub const LINKEDIN_URL: &str = "https://linkedin.com";
pub const PORTRAIT_SRC: &str = "/assets/portrait.jpg";

pub const HERO_PHRASES: [&str; 4] = ["Designer", "Developer", "Artist", "Photographer"];

pub const HOME_BLURB: &str = "Exploring the intersection of technology and creativity through \
    code, design, and artistic expression.";

pub const ABOUT_TEXT: &str = "I am a creative developer with a passion for blending technology \
    and art. My work spans across web development, design, and digital art, aiming to create \
    immersive and engaging experiences.";

pub const PORTFOLIO_BIO: &str = "I am an enthusiastic student eager to explore the diverse \
    fields of industry related to data, management and engineering. I like working in a \
    challenging and dynamic environment, exploring new opportunities on a daily basis. I love \
    meeting and communicating with diverse people and would emerge as a key team player at \
    workplace.";

pub const ARTIST_TAGLINE: &str =
    "Business Intelligence Developer with expertise in Power BI, SQL, and data analysis";

#[derive(Debug, PartialEq)]
pub struct ResumeItem {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
}

const LOREM_A: &str = "Far far away, behind the word mountains, far from the countries \
    Vokalia and Consonantia, there live the blind texts.";
const LOREM_B: &str = "Far far away, behind the word mountains, they live in Bookmarksgrove \
    right at the coast of the Semantics, a large language ocean.";

pub const EXPERIENCE: &[ResumeItem] = &[
    ResumeItem {
        title: "Senior Developer",
        subtitle: "Company Name - 2018 - Current",
        description: LOREM_A,
    },
    ResumeItem {
        title: "Junior Developer",
        subtitle: "Company Name - 2013 - 2016",
        description: LOREM_B,
    },
    ResumeItem {
        title: "UI/UX Designer",
        subtitle: "Company Name - 2010 - 2012",
        description: LOREM_A,
    },
];

pub const EDUCATION: &[ResumeItem] = &[
    ResumeItem {
        title: "Masters Degree",
        subtitle: "University Name - 2007 - 2009",
        description: LOREM_B,
    },
    ResumeItem {
        title: "Bachelors Degree",
        subtitle: "University Name - 2002 - 2006",
        description: LOREM_A,
    },
    ResumeItem {
        title: "Diploma Course",
        subtitle: "College Name - 1999 - 2001",
        description: LOREM_B,
    },
    ResumeItem {
        title: "Graduation",
        subtitle: "College Name - 1994 - 1998",
        description: LOREM_A,
    },
];

#[derive(Debug, PartialEq)]
pub struct Role {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub highlights: &'static [&'static str],
}

pub const ROLES: &[Role] = &[
    Role {
        title: "Business Intelligence Developer",
        subtitle: "Celebal Technologies | Aug 2023 - Nov 2023",
        highlights: &[
            "Led a team of 4 professionals in developing a 54-page Power BI P&L report",
            "Integrated over 300 measures for financial analysis",
            "Optimized query loading times by 40%",
        ],
    },
    Role {
        title: "Internal Project Lead",
        subtitle: "Pure Storage | Oct 2023 - Dec 2023",
        highlights: &[
            "Led documentation efforts for internal projects",
            "Created KPI sheets for 5 projects",
            "Documented over 200 SQL queries",
        ],
    },
];

#[derive(Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
    pub team_size: u32,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Hydrogen Production Analysis",
        period: "Jun 2022 - Aug 2023",
        summary: "Developed simulation environment on ASPEN-Plus and ASPEN-Hysis for biomass \
            gasification",
        team_size: 5,
    },
    Project {
        title: "Aqueous Retarded Acid Formulation",
        period: "Jun 2022 - Aug 2023",
        summary: "Collaborated on aqueous retarded acid stimulation for limestone reservoirs",
        team_size: 6,
    },
];

pub const SKILLS: &[&str] = &[
    "Power BI",
    "SQL",
    "DAX",
    "Power Query",
    "Python",
    "Data Visualization",
    "Business Intelligence",
    "Data Analysis",
    "Problem Solving",
];

pub const CERTIFICATIONS: &[&str] = &[
    "Microsoft Power BI Desktop for Business Intelligence (2023)",
    "Advanced DAX for Microsoft Power BI Desktop",
    "6 Star on HackerRank SQL",
    "50+ SQL questions solved on LeetCode",
];

#[derive(Debug, PartialEq)]
pub struct Post {
    pub title: &'static str,
    // year, month, day
    pub published: (i32, u32, u32),
    pub preview: &'static str,
}

// the first post is the featured one
pub const POSTS: &[Post] = &[Post {
    title: "Featured Blog Title",
    published: (2024, 1, 1),
    preview: "Preview of the featured blog post content...",
}];
