//! Static project catalogue shown alongside the carousel.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectDescriptor {
    pub title: &'static str,
    pub details: &'static str,
    pub description: &'static str,
}

pub const PROJECTS: [ProjectDescriptor; 7] = [
    ProjectDescriptor {
        title: "Creative Vision Project",
        details: "A comprehensive exploration of digital artistry and innovative design solutions.",
        description: "This project represents a deep dive into creative possibilities, showcasing the intersection of technology and artistic expression.",
    },
    ProjectDescriptor {
        title: "Design System Evolution",
        details: "Modernizing user interfaces through systematic design approaches and user-centered methodologies.",
        description: "An extensive project focusing on creating cohesive design languages and scalable interface solutions.",
    },
    ProjectDescriptor {
        title: "Interactive Experience",
        details: "Crafting immersive digital experiences that engage users through innovative interaction patterns.",
        description: "This work explores the boundaries of user interaction, creating memorable and intuitive digital experiences.",
    },
    ProjectDescriptor {
        title: "Brand Identity Refresh",
        details: "Revitalizing brand presence through strategic visual communication and contemporary design principles.",
        description: "A complete brand transformation project, establishing strong visual identity and market presence.",
    },
    ProjectDescriptor {
        title: "Motion Graphics Study",
        details: "Exploring dynamic visual storytelling through advanced animation techniques and motion design.",
        description: "A comprehensive study of motion graphics, pushing the boundaries of animated visual communication.",
    },
    ProjectDescriptor {
        title: "Digital Art Installation",
        details: "Blending traditional artistry with cutting-edge technology to create immersive digital environments.",
        description: "An ambitious project merging physical and digital spaces through innovative artistic expression.",
    },
    ProjectDescriptor {
        title: "User Experience Research",
        details: "Comprehensive user research and testing to optimize digital product experiences and usability.",
        description: "In-depth research project focusing on understanding user behavior and improving digital interactions.",
    },
];

/// Shown when no project is focused.
pub const OVERVIEW: ProjectDescriptor = ProjectDescriptor {
    title: "Portfolio Overview",
    details: "Hover over any project image to explore detailed information about the creative process, technologies used, and design solutions implemented.",
    description: "",
};

#[inline]
pub fn project(index: usize) -> Option<&'static ProjectDescriptor> {
    PROJECTS.get(index)
}
