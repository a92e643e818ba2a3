//! Portfolio content.

use super::model::{
    Availability, BlogPost, BlogPostSummary, ContactInfo, Experience, Location, Profile,
    ProfileStats, Project, Skill, SocialLinks, Testimonial,
};

const OWNER: &str = "Xuân Kiên";
const OWNER_EMAIL: &str = "xuankien.dev@email.com";
const OWNER_PHONE: &str = "+84 (123) 456-7890";

/// Contact card served by `/api/contact-info`.
pub static CONTACT_INFO: ContactInfo = ContactInfo {
    email: OWNER_EMAIL,
    phone: OWNER_PHONE,
    location: Location {
        city: "Ho Chi Minh City",
        country: "Vietnam",
        timezone: "GMT+7",
    },
    availability: Availability {
        status: "Available for projects",
        working_hours: "9:00 AM - 6:00 PM (GMT+7)",
        response_time: "Within 24 hours",
    },
    preferred_contact: "email",
    languages: &["Vietnamese", "English"],
};

/// Profile served by `/api/profile`.
pub static PROFILE: Profile = Profile {
    name: "Xuân Kiên Developer",
    title: "Full Stack Developer & DevOps Engineer",
    email: OWNER_EMAIL,
    phone: OWNER_PHONE,
    location: "Ho Chi Minh City, Vietnam",
    bio: "Passionate Full Stack Developer with expertise in React, Node.js, and DevOps. \
          Experienced in building scalable web applications with modern CI/CD pipelines.",
    avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=300&h=300&fit=crop&crop=face",
    social: SocialLinks {
        github: "https://github.com/xuankientr",
        linkedin: "https://linkedin.com/in/xuankien",
        website: "https://xuankien.dev",
    },
    stats: ProfileStats {
        projects_completed: 25,
        years_experience: 3,
        technologies_used: 15,
        clients_satisfied: 20,
    },
};

const fn skill(
    name: &'static str,
    level: u8,
    icon: &'static str,
    category: &'static str,
) -> Skill {
    Skill {
        name,
        level,
        icon,
        category,
    }
}

/// Skills served by `/api/skills`.
pub static SKILLS: [Skill; 12] = [
    skill("React.js", 95, "⚛️", "Frontend"),
    skill("Node.js", 90, "🟢", "Backend"),
    skill("PostgreSQL", 85, "🐘", "Database"),
    skill("DevOps", 80, "🔧", "Operations"),
    skill("JavaScript", 98, "🟨", "Language"),
    skill("TypeScript", 85, "🔷", "Language"),
    skill("Python", 75, "🐍", "Language"),
    skill("Docker", 85, "🐳", "DevOps"),
    skill("AWS", 80, "☁️", "Cloud"),
    skill("GitHub Actions", 90, "🔄", "CI/CD"),
    skill("Render", 85, "🚀", "Deployment"),
    skill("MongoDB", 80, "🍃", "Database"),
];

/// Projects served by `/api/projects`.
pub static PROJECTS: [Project; 3] = [
    Project {
        id: 1,
        title: "E-Commerce Platform",
        description: "Full-stack e-commerce solution with React, Node.js, and PostgreSQL. \
                      Features include user authentication, payment processing, and admin dashboard.",
        tech: &["React", "Node.js", "PostgreSQL", "Stripe", "Redux"],
        status: "Completed",
        github: "https://github.com/johndeveloper/ecommerce",
        demo: Some("https://ecommerce-demo.com"),
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=400&h=250&fit=crop",
    },
    Project {
        id: 2,
        title: "Task Management App",
        description: "Real-time collaborative task management application with WebSocket \
                      integration for live updates and team collaboration.",
        tech: &["React", "Socket.io", "MongoDB", "Express", "Material-UI"],
        status: "In Progress",
        github: "https://github.com/johndeveloper/taskmanager",
        demo: Some("https://taskmanager-demo.com"),
        image: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=400&h=250&fit=crop",
    },
    Project {
        id: 3,
        title: "DevOps Pipeline",
        description: "Automated CI/CD pipeline with GitHub Actions, Docker containerization, \
                      and AWS deployment infrastructure.",
        tech: &["GitHub Actions", "Docker", "AWS", "Terraform", "Kubernetes"],
        status: "Completed",
        github: "https://github.com/johndeveloper/devops-pipeline",
        demo: None,
        image: "https://images.unsplash.com/photo-1667372393119-3d4c48d07fc9?w=400&h=250&fit=crop",
    },
];

/// Employment history served by `/api/experience`, most recent first.
pub static EXPERIENCE: [Experience; 3] = [
    Experience {
        id: 1,
        title: "Senior Full Stack Developer",
        company: "Tech Innovations Inc.",
        period: "2023 - Present",
        location: "San Francisco, CA",
        description: "Leading development of scalable web applications using React, Node.js, \
                      and cloud technologies. Mentoring junior developers and implementing best practices.",
        achievements: &[
            "Increased application performance by 40%",
            "Led team of 5 developers",
            "Implemented microservices architecture",
        ],
    },
    Experience {
        id: 2,
        title: "Full Stack Developer",
        company: "Digital Solutions Ltd.",
        period: "2022 - 2023",
        location: "San Francisco, CA",
        description: "Developed and maintained multiple client projects using modern web \
                      technologies. Collaborated with design and product teams.",
        achievements: &[
            "Delivered 15+ successful projects",
            "Reduced deployment time by 60%",
            "Implemented automated testing",
        ],
    },
    Experience {
        id: 3,
        title: "Junior Developer",
        company: "StartupXYZ",
        period: "2021 - 2022",
        location: "San Francisco, CA",
        description: "Started career contributing to various web development projects. \
                      Learned modern development practices and agile methodologies.",
        achievements: &[
            "Contributed to 10+ projects",
            "Learned React and Node.js",
            "Participated in code reviews",
        ],
    },
];

/// Post summaries served by `/api/blog`, newest first.
pub static BLOG_SUMMARIES: [BlogPostSummary; 3] = [
    BlogPostSummary {
        id: 1,
        title: "Building Modern Web Apps with React and Node.js",
        excerpt: "Learn how to create scalable full-stack applications using modern technologies.",
        content: "In this comprehensive guide, we will explore the best practices for building \
                  modern web applications...",
        author: OWNER,
        published_date: "2024-08-10",
        tags: &["React", "Node.js", "Full Stack"],
        read_time: "8 min read",
        featured: true,
    },
    BlogPostSummary {
        id: 2,
        title: "DevOps Best Practices with GitHub Actions",
        excerpt: "Automate your deployment pipeline with GitHub Actions and improve your \
                  development workflow.",
        content: "GitHub Actions has revolutionized the way we handle CI/CD pipelines...",
        author: OWNER,
        published_date: "2024-08-05",
        tags: &["DevOps", "GitHub Actions", "CI/CD"],
        read_time: "6 min read",
        featured: false,
    },
    BlogPostSummary {
        id: 3,
        title: "Database Design for Scalable Applications",
        excerpt: "Design efficient database schemas that can handle growth and maintain performance.",
        content: "When building applications that need to scale, database design becomes crucial...",
        author: OWNER,
        published_date: "2024-07-28",
        tags: &["Database", "PostgreSQL", "Performance"],
        read_time: "10 min read",
        featured: false,
    },
];

/// Posts with full content, served by `/api/blog/:id`.
///
/// Only published write-ups appear here; a summary without a full post
/// answers 404.
pub static BLOG_POSTS: [BlogPost; 1] = [BlogPost {
    id: 1,
    title: "Building Modern Web Apps with React and Node.js",
    content: r"# Building Modern Web Apps with React and Node.js

In this comprehensive guide, we will explore the best practices for building modern web applications using React for the frontend and Node.js for the backend.

## Why React and Node.js?

React and Node.js form a powerful combination for full-stack development:

- **React**: Provides a component-based architecture for building interactive UIs
- **Node.js**: Enables JavaScript on the server-side with excellent performance
- **Shared Language**: Use JavaScript across the entire stack

## Getting Started

Let's start by setting up our development environment...",
    author: OWNER,
    published_date: "2024-08-10",
    tags: &["React", "Node.js", "Full Stack"],
    read_time: "8 min read",
}];

/// Testimonials served by `/api/testimonials`.
pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        id: 1,
        name: "Sarah Johnson",
        position: "Product Manager",
        company: "TechCorp Inc.",
        message: "Xuân Kiên delivered an exceptional web application that exceeded our \
                  expectations. His attention to detail and technical expertise are outstanding.",
        rating: 5,
        avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=100&h=100&fit=crop&crop=face",
        date: "2024-07-15",
    },
    Testimonial {
        id: 2,
        name: "Michael Chen",
        position: "CTO",
        company: "StartupXYZ",
        message: "Working with Xuân Kiên was a pleasure. He implemented our complex requirements \
                  with clean, maintainable code and delivered on time.",
        rating: 5,
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face",
        date: "2024-06-20",
    },
    Testimonial {
        id: 3,
        name: "Emily Rodriguez",
        position: "Lead Developer",
        company: "Digital Solutions",
        message: "Excellent collaboration and problem-solving skills. The CI/CD pipeline setup \
                  saved us countless hours of manual deployment.",
        rating: 5,
        avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop&crop=face",
        date: "2024-06-10",
    },
];
