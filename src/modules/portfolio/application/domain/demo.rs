use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::entities::PortfolioProject;
use crate::shared::domain::ServiceType;

// 2025-01-01T00:00:00Z
const DEMO_CREATED_AT: i64 = 1_735_689_600;

struct DemoProject {
    title: &'static str,
    description: &'static str,
    service_type: ServiceType,
    client_name: &'static str,
    image_url: &'static str,
    technologies: &'static [&'static str],
    is_featured: bool,
}

const DEMO_PROJECTS: [DemoProject; 6] = [
    DemoProject {
        title: "E-Commerce Platform",
        description: "A modern e-commerce platform with payment integration, inventory management, and admin dashboard.",
        service_type: ServiceType::WebDev,
        client_name: "RetailMax",
        image_url: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=600&h=400&fit=crop",
        technologies: &["React", "Node.js", "PostgreSQL", "Stripe"],
        is_featured: true,
    },
    DemoProject {
        title: "SaaS Analytics Dashboard",
        description: "Real-time analytics dashboard for tracking business metrics with custom reporting.",
        service_type: ServiceType::Saas,
        client_name: "DataFlow Inc",
        image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&h=400&fit=crop",
        technologies: &["Next.js", "TypeScript", "Supabase", "Chart.js"],
        is_featured: true,
    },
    DemoProject {
        title: "Fitness Tracking App",
        description: "Mobile app for tracking workouts, nutrition, and fitness goals with social features.",
        service_type: ServiceType::Android,
        client_name: "FitLife",
        image_url: "https://images.unsplash.com/photo-1476480862126-209bfaa8edc8?w=600&h=400&fit=crop",
        technologies: &["React Native", "Firebase", "Node.js"],
        is_featured: true,
    },
    DemoProject {
        title: "Restaurant Booking System",
        description: "Custom booking and reservation system with table management and customer CRM.",
        service_type: ServiceType::Custom,
        client_name: "DineEasy",
        image_url: "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=600&h=400&fit=crop",
        technologies: &["Vue.js", "Laravel", "MySQL"],
        is_featured: false,
    },
    DemoProject {
        title: "Corporate Website",
        description: "Professional corporate website with blog, careers section, and contact forms.",
        service_type: ServiceType::WebDev,
        client_name: "TechCorp Solutions",
        image_url: "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d?w=600&h=400&fit=crop",
        technologies: &["Next.js", "TailwindCSS", "Vercel"],
        is_featured: false,
    },
    DemoProject {
        title: "Task Management SaaS",
        description: "Project and task management platform with team collaboration features.",
        service_type: ServiceType::Saas,
        client_name: "TaskMaster",
        image_url: "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?w=600&h=400&fit=crop",
        technologies: &["React", "Node.js", "MongoDB", "Socket.io"],
        is_featured: false,
    },
];

/// Built-in showcase used while the portfolio table is empty or unreachable.
/// Ids are stable (`00000000-…-000000000001` onwards).
pub fn demo_projects() -> Vec<PortfolioProject> {
    let created_at = DateTime::<Utc>::from_timestamp(DEMO_CREATED_AT, 0).unwrap_or_default();

    DEMO_PROJECTS
        .iter()
        .zip(1..)
        .map(|(demo, order)| PortfolioProject {
            id: Uuid::from_u128(order as u128),
            title: demo.title.to_string(),
            description: Some(demo.description.to_string()),
            service_type: Some(demo.service_type),
            client_name: Some(demo.client_name.to_string()),
            image_url: Some(demo.image_url.to_string()),
            project_url: None,
            technologies: demo.technologies.iter().map(|t| t.to_string()).collect(),
            is_featured: demo.is_featured,
            is_active: true,
            display_order: order,
            created_at,
        })
        .collect()
}
