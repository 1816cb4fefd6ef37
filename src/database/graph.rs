//! Eager graphs handed to the eligibility resolver.
//!
//! A graph is loaded once per `/c` with one batched query per level, then
//! stitched together here so the resolver never touches the database.
//! Dangling references (a `youtubeSubject` with no package row, a course with
//! no chapters) simply show up as `None` or an empty `Vec`.

use std::collections::HashMap;

use super::models::{Channel, Chapter, Course, CoursePackage};

#[derive(Debug, Clone)]
pub struct CourseGraph {
    pub course: Course,
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Clone)]
pub struct PackageGraph {
    pub package: CoursePackage,
    pub courses: Vec<CourseGraph>,
}

#[derive(Debug, Clone)]
pub struct ChannelGraph {
    pub channel: Channel,
    pub active_package: Option<PackageGraph>,
}

/// Package ids referenced by the given channels, deduplicated, in first-seen order.
pub fn referenced_packages(channels: &[Channel]) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for package_id in channels.iter().filter_map(|c| c.youtube_subject.as_ref()) {
        if !ids.contains(package_id) {
            ids.push(package_id.clone());
        }
    }
    ids
}

/// Stitches flat rows into one graph per channel, preserving channel order.
pub fn assemble(
    channels: Vec<Channel>,
    packages: Vec<CoursePackage>,
    courses: Vec<Course>,
    chapters: Vec<Chapter>,
) -> Vec<ChannelGraph> {
    let mut chapters_by_course: HashMap<String, Vec<Chapter>> = HashMap::new();
    for chapter in chapters {
        if let Some(course_id) = chapter.course_id.clone() {
            chapters_by_course.entry(course_id).or_default().push(chapter);
        }
    }

    let mut courses_by_package: HashMap<String, Vec<CourseGraph>> = HashMap::new();
    for course in courses {
        if let Some(package_id) = course.package_id.clone() {
            let chapters = chapters_by_course.remove(&course.id).unwrap_or_default();
            courses_by_package
                .entry(package_id)
                .or_default()
                .push(CourseGraph { course, chapters });
        }
    }

    let packages: HashMap<String, CoursePackage> = packages
        .into_iter()
        .map(|package| (package.id.clone(), package))
        .collect();

    channels
        .into_iter()
        .map(|channel| {
            let active_package = channel
                .youtube_subject
                .as_ref()
                .and_then(|package_id| packages.get(package_id))
                .map(|package| PackageGraph {
                    package: package.clone(),
                    courses: courses_by_package
                        .get(&package.id)
                        .cloned()
                        .unwrap_or_default(),
                });

            ChannelGraph {
                channel,
                active_package,
            }
        })
        .collect()
}
