//! Static project catalog backing the featured-project panel.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageRecord {
    pub src: &'static str,
    pub alt: &'static str,
    /// Short label used as the thumbnail's alt text.
    pub caption: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// First entry is the image shown when the project is selected.
    pub gallery: &'static [ImageRecord],
}

impl ProjectRecord {
    pub fn cover(&self) -> Option<&'static ImageRecord> {
        self.gallery.first()
    }
}

pub const PROJECT_CATALOG: &[ProjectRecord] = &[
    ProjectRecord {
        id: "fan-turntable",
        title: "Remote-Controlled Fan Turntable",
        description: "We built a simple rotating platform that lets someone aim their bedroom fan with just a remote control. Our client needed a way to redirect airflow without getting up due to accessibility reasons, so we designed a custom circular base, set up the motor system, and wired everything together. The clever part? We used airsoft BBs as smooth bearings to make it spin effortlessly. It's a small device that makes a big difference in daily comfort.",
        gallery: &[
            ImageRecord {
                src: "./assets/images/projects/fan-turntable/main.jpg",
                alt: "Remote-Controlled Fan Turntable - Main View",
                caption: "Main view",
            },
            ImageRecord {
                src: "./assets/images/projects/fan-turntable/detail1.jpg",
                alt: "Remote-Controlled Fan Turntable - Motor Detail",
                caption: "Motor detail",
            },
            ImageRecord {
                src: "./assets/images/projects/fan-turntable/detail2.jpg",
                alt: "Remote-Controlled Fan Turntable - Remote Control",
                caption: "Remote control",
            },
            ImageRecord {
                src: "./assets/images/projects/fan-turntable/detail3.jpg",
                alt: "Remote-Controlled Fan Turntable - BB Bearing System",
                caption: "BB bearing system",
            },
        ],
    },
    ProjectRecord {
        id: "signage-1",
        title: "Modern Office Signage",
        description: "Professional dimensional letters designed for corporate environments. These custom 3D printed letters provide a sleek, modern aesthetic for office branding while maintaining durability and professional appearance. Each letter is precisely crafted to company specifications and mounting requirements.",
        gallery: &[
            ImageRecord {
                src: "./assets/images/projects/custom-signage-1.jpg",
                alt: "Modern Office Signage - Main View",
                caption: "Main view",
            },
            ImageRecord {
                src: "./assets/images/projects/custom-signage-1.jpg",
                alt: "Modern Office Signage - Detail",
                caption: "Letter detail",
            },
            ImageRecord {
                src: "./assets/images/projects/custom-signage-1.jpg",
                alt: "Modern Office Signage - Installation",
                caption: "Installation view",
            },
        ],
    },
    ProjectRecord {
        id: "signage-2",
        title: "Decorative Wall Letters",
        description: "Custom typography solutions for interior design projects. These decorative 3D printed letters add personality and branding to residential and commercial spaces. Available in various sizes, fonts, and finishes to match any design aesthetic.",
        gallery: &[
            ImageRecord {
                src: "./assets/images/projects/custom-signage-2.jpg",
                alt: "Decorative Wall Letters - Main View",
                caption: "Main view",
            },
            ImageRecord {
                src: "./assets/images/projects/custom-signage-2.jpg",
                alt: "Decorative Wall Letters - Close-up",
                caption: "Letter detail",
            },
            ImageRecord {
                src: "./assets/images/projects/custom-signage-2.jpg",
                alt: "Decorative Wall Letters - Mounted",
                caption: "Wall mounted",
            },
        ],
    },
    ProjectRecord {
        id: "signage-3",
        title: "Outdoor Business Signs",
        description: "Weather-resistant signage solutions for storefronts and outdoor applications. These durable 3D printed signs are designed to withstand the elements while maintaining their appearance. Perfect for business identification and wayfinding applications.",
        gallery: &[
            ImageRecord {
                src: "./assets/images/projects/custom-signage-3.jpg",
                alt: "Outdoor Business Signs - Main View",
                caption: "Main view",
            },
            ImageRecord {
                src: "./assets/images/projects/custom-signage-3.jpg",
                alt: "Outdoor Business Signs - Weather Detail",
                caption: "Weather resistant",
            },
            ImageRecord {
                src: "./assets/images/projects/custom-signage-3.jpg",
                alt: "Outdoor Business Signs - Installation",
                caption: "Storefront installation",
            },
        ],
    },
    ProjectRecord {
        id: "signage-4",
        title: "Event Branding Elements",
        description: "Temporary displays and branding elements for trade shows, conferences, and special events. These lightweight yet professional 3D printed elements help create memorable brand experiences. Easy to transport, set up, and customize for different events.",
        gallery: &[
            ImageRecord {
                src: "./assets/images/projects/custom-signage-4.jpg",
                alt: "Event Branding Elements - Main View",
                caption: "Main view",
            },
            ImageRecord {
                src: "./assets/images/projects/custom-signage-4.jpg",
                alt: "Event Branding Elements - Setup",
                caption: "Event setup",
            },
            ImageRecord {
                src: "./assets/images/projects/custom-signage-4.jpg",
                alt: "Event Branding Elements - Display",
                caption: "Trade show display",
            },
        ],
    },
];

/// Exact-match lookup; identifiers come straight from `data-project-id`.
pub fn project_by_id(id: &str) -> Option<&'static ProjectRecord> {
    PROJECT_CATALOG.iter().find(|project| project.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = PROJECT_CATALOG.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECT_CATALOG.len());
    }

    #[test]
    fn ids_are_slugs() {
        for project in PROJECT_CATALOG {
            assert!(
                project
                    .id
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "{:?} is not a slug",
                project.id
            );
        }
    }

    #[test]
    fn lookup_finds_known_projects() {
        let project = project_by_id("fan-turntable").expect("fan turntable in catalog");
        assert_eq!(project.title, "Remote-Controlled Fan Turntable");
        assert_eq!(project.gallery.len(), 4);
        assert_eq!(
            project.cover().map(|image| image.src),
            Some("./assets/images/projects/fan-turntable/main.jpg")
        );
    }

    #[test]
    fn lookup_is_exact() {
        assert!(project_by_id("signage-5").is_none());
        assert!(project_by_id("Signage-1").is_none());
        assert!(project_by_id("").is_none());
    }

    #[test]
    fn every_project_has_a_cover() {
        for project in PROJECT_CATALOG {
            assert!(project.cover().is_some(), "{} has no images", project.id);
        }
    }
}
