use crate::models::VideoRecord;

const SAMPLE_VIDEOS: [(u32, &str, &str, u64); 8] = [
    (1, "Learn Vue 3 Composition API in 10 Minutes", "Vue Mastery", 1_250_000),
    (2, "JavaScript ES6+ Features You Need to Know", "Code Academy", 890_000),
    (3, "Building Modern Web Apps with React", "React Pro", 2_100_000),
    (4, "CSS Grid vs Flexbox: When to Use What", "CSS Tricks", 450_000),
    (5, "Node.js Backend Development Tutorial", "Backend Dev", 780_000),
    (6, "TypeScript for Beginners", "TypeScript Hub", 320_000),
    (7, "Docker Containerization Guide", "DevOps Master", 650_000),
    (8, "Git and GitHub Workflow Best Practices", "Git Expert", 420_000),
];

fn thumbnail_url(id: u32) -> String {
    format!("https://picsum.photos/400/225?random={id}")
}

/// Placeholder records served by the simulated fetch, in load order.
pub fn sample_videos() -> Vec<VideoRecord> {
    SAMPLE_VIDEOS
        .iter()
        .map(|&(id, title, channel, views)| VideoRecord {
            id,
            title: title.to_string(),
            channel: channel.to_string(),
            views,
            thumbnail: thumbnail_url(id),
        })
        .collect()
}
