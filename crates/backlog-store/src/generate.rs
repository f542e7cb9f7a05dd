//! Seed item generation for demos and tests.

use chrono::{Duration, Utc};
use rand::Rng;

use crate::NewItem;

/// Pool of distinct seed titles.
const TITLES: &[&str] = &[
    "Learn Python",
    "Explore JavaScript",
    "Master Java",
    "Dive into C++",
    "Understand React",
    "Discover Angular",
    "Conquer Vue.js",
    "Get to know Node.js",
    "Study Swift",
    "Investigate Kotlin",
    "Uncover Scala",
    "Peruse Perl",
    "Inspect Ruby",
    "Examine PHP",
    "Scrutinize TypeScript",
    "Grasp HTML5",
    "Seize CSS3",
    "Fathom SQL",
    "Probe NoSQL",
    "Master MongoDB",
    "Understand Docker",
    "Learn Kubernetes",
    "Explore Microservices",
    "Study GraphQL",
    "Investigate Redux",
    "Discover WebAssembly",
    "Conquer Electron",
    "Get to know TensorFlow",
    "Study PyTorch",
    "Investigate Flutter",
    "Uncover Xamarin",
    "Peruse AWS",
    "Inspect Azure",
    "Examine Google Cloud",
    "Scrutinize Firebase",
    "Grasp Git",
    "Seize Webpack",
    "Fathom Babel",
    "Probe Jenkins",
    "Master CircleCI",
    "Understand Selenium",
    "Learn Puppeteer",
    "Explore Jest",
    "Study Mocha",
    "Investigate Chai",
    "Discover Sinon",
    "Conquer Cypress",
    "Get to know Postman",
    "Study Swagger",
    "Investigate OAuth",
    "Uncover JWT",
    "Peruse SAML",
    "Inspect OpenID Connect",
    "Examine Apache Kafka",
    "Scrutinize RabbitMQ",
    "Grasp NGINX",
    "Seize Express.js",
    "Fathom FastAPI",
    "Probe Spring Boot",
    "Master Flask",
    "Understand Gatsby",
    "Learn Next.js",
    "Explore VuePress",
    "Study Nuxt.js",
    "Investigate Jekyll",
    "Discover Hugo",
    "Conquer Bootstrap",
    "Get to know Materialize",
    "Study Tailwind CSS",
    "Investigate Foundation",
    "Uncover Bulma",
    "Peruse Svelte",
    "Inspect Elm",
    "Examine PWA",
    "Scrutinize AMP",
    "Grasp WebGL",
    "Seize Three.js",
    "Fathom D3.js",
    "Probe Unity",
    "Master Unreal Engine",
    "Understand Blender",
    "Learn Sketch",
    "Explore Figma",
    "Study Adobe XD",
    "Investigate Photoshop",
    "Discover Illustrator",
    "Conquer InDesign",
    "Get to know Lightroom",
    "Study Premiere Pro",
    "Investigate After Effects",
];

/// Generate `count` seed items with distinct titles, random priority and
/// progress, and due dates within ±72 hours of now.
///
/// Returns `None` when `count` exceeds the title pool.
pub fn seed_items(count: usize) -> Option<Vec<NewItem>> {
    if count > TITLES.len() {
        return None;
    }

    let mut rng = rand::rng();
    let mut titles: Vec<&str> = TITLES.to_vec();

    Some(
        (0..count)
            .map(|_| {
                let title = titles.swap_remove(rng.random_range(0..titles.len()));
                NewItem {
                    title: title.to_string(),
                    priority: rng.random_range(1..=5),
                    progress: rng.random_range(0..=100),
                    due_date: Utc::now() + Duration::hours(rng.random_range(-72..=72)),
                }
            })
            .collect(),
    )
}

/// Generate one item per title in the pool.
pub fn seed_items_full() -> Vec<NewItem> {
    seed_items(TITLES.len()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generates_requested_count_with_distinct_titles() {
        let items = seed_items(40).unwrap();
        assert_eq!(items.len(), 40);

        let titles: HashSet<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles.len(), 40);
    }

    #[test]
    fn generated_fields_stay_in_range() {
        for item in seed_items_full() {
            assert!((1..=5).contains(&item.priority));
            assert!(item.progress <= 100);

            let offset = item.due_date - Utc::now();
            assert!(offset.num_hours().abs() <= 73);
        }
    }

    #[test]
    fn oversized_request_is_rejected() {
        assert!(seed_items(TITLES.len() + 1).is_none());
    }
}
