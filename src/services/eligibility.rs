//! Entry-point selection for a student's active package.
//!
//! A channel qualifies when its status is `Active`/`Notyet`, its active package
//! exists and is published, and that package has a course with `order == 1`
//! holding a chapter with `position == 1`. When several courses (or chapters)
//! share the entry value, the one with the lowest id wins, so the pick never
//! depends on the order rows came back from the database.

use tracing::debug;

use crate::database::graph::{ChannelGraph, CourseGraph};
use crate::database::models::Chapter;

/// Shown on the button when a channel has no name.
pub const FALLBACK_DISPLAY_NAME: &str = "ዳሩል-ኩብራ";

const ENTRY_ORDER: i64 = 1;
const ENTRY_POSITION: i64 = 1;

/// The student, course and chapter a link is built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRecord {
    pub student_id: i64,
    pub course_id: String,
    pub chapter_id: String,
    pub display_name: String,
}

/// One record per qualifying channel, in input order.
pub fn resolve(channels: &[ChannelGraph]) -> Vec<ResolutionRecord> {
    channels.iter().filter_map(resolve_channel).collect()
}

/// The record for one channel, or `None` when it does not qualify.
pub fn resolve_channel(graph: &ChannelGraph) -> Option<ResolutionRecord> {
    let channel = &graph.channel;

    if !channel.status().is_eligible() {
        debug!("Channel {} skipped: status {:?}", channel.wdt_id, channel.status);
        return None;
    }

    let package = match &graph.active_package {
        Some(package) => package,
        None => {
            debug!("Channel {} skipped: no active package", channel.wdt_id);
            return None;
        }
    };

    if !package.package.published() {
        debug!(
            "Channel {} skipped: package {} is unpublished",
            channel.wdt_id, package.package.id
        );
        return None;
    }

    let course = match entry_course(&package.courses) {
        Some(course) => course,
        None => {
            debug!(
                "Channel {} skipped: package {} has no entry course",
                channel.wdt_id, package.package.id
            );
            return None;
        }
    };

    let chapter = match entry_chapter(&course.chapters) {
        Some(chapter) => chapter,
        None => {
            debug!(
                "Channel {} skipped: course {} has no entry chapter",
                channel.wdt_id, course.course.id
            );
            return None;
        }
    };

    let display_name = channel
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_DISPLAY_NAME)
        .to_string();

    Some(ResolutionRecord {
        student_id: channel.wdt_id,
        course_id: course.course.id.clone(),
        chapter_id: chapter.id.clone(),
        display_name,
    })
}

fn entry_course(courses: &[CourseGraph]) -> Option<&CourseGraph> {
    courses
        .iter()
        .filter(|c| c.course.order == Some(ENTRY_ORDER))
        .min_by(|a, b| a.course.id.cmp(&b.course.id))
}

fn entry_chapter(chapters: &[Chapter]) -> Option<&Chapter> {
    chapters
        .iter()
        .filter(|c| c.position == Some(ENTRY_POSITION))
        .min_by(|a, b| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::graph::PackageGraph;
    use crate::database::models::{Channel, Course, CoursePackage};

    fn chapter(id: &str, position: i64) -> Chapter {
        Chapter {
            id: id.to_string(),
            title: id.to_string(),
            course_id: None,
            position: Some(position),
        }
    }

    fn course(id: &str, order: i64, chapters: Vec<Chapter>) -> CourseGraph {
        CourseGraph {
            course: Course {
                id: id.to_string(),
                title: id.to_string(),
                package_id: Some("p1".to_string()),
                order: Some(order),
            },
            chapters,
        }
    }

    fn graph(
        status: &str,
        name: Option<&str>,
        published: bool,
        courses: Vec<CourseGraph>,
    ) -> ChannelGraph {
        ChannelGraph {
            channel: Channel {
                wdt_id: 10,
                name: name.map(str::to_string),
                status: Some(status.to_string()),
                subject: Some("Math".to_string()),
                youtube_subject: Some("p1".to_string()),
                chat_id: "42".to_string(),
            },
            active_package: Some(PackageGraph {
                package: CoursePackage {
                    id: "p1".to_string(),
                    name: "Package".to_string(),
                    is_published: Some(published),
                },
                courses,
            }),
        }
    }

    fn single_course() -> Vec<CourseGraph> {
        vec![course("c1", 1, vec![chapter("ch1", 1)])]
    }

    #[test]
    fn test_resolves_entry_course_and_chapter() {
        let record = resolve_channel(&graph("Active", Some("Abebe"), true, single_course()))
            .expect("channel should qualify");

        assert_eq!(
            record,
            ResolutionRecord {
                student_id: 10,
                course_id: "c1".to_string(),
                chapter_id: "ch1".to_string(),
                display_name: "Abebe".to_string(),
            }
        );
    }

    #[test]
    fn test_notyet_status_qualifies() {
        assert!(resolve_channel(&graph("Notyet", None, true, single_course())).is_some());
    }

    #[test]
    fn test_other_status_never_qualifies() {
        for status in ["Inactive", "active", "", "Leave"] {
            assert!(resolve_channel(&graph(status, None, true, single_course())).is_none());
        }
    }

    #[test]
    fn test_unpublished_package_is_skipped() {
        assert!(resolve_channel(&graph("Active", None, false, single_course())).is_none());
    }

    #[test]
    fn test_null_published_flag_is_skipped() {
        let mut g = graph("Active", None, true, single_course());
        if let Some(package) = g.active_package.as_mut() {
            package.package.is_published = None;
        }
        assert!(resolve_channel(&g).is_none());
    }

    #[test]
    fn test_missing_package_is_skipped() {
        let mut g = graph("Active", None, true, single_course());
        g.active_package = None;
        assert!(resolve_channel(&g).is_none());
    }

    #[test]
    fn test_package_without_courses_is_skipped() {
        assert!(resolve_channel(&graph("Active", None, true, vec![])).is_none());
    }

    #[test]
    fn test_package_without_entry_course_is_skipped() {
        let courses = vec![course("c2", 2, vec![chapter("ch1", 1)])];
        assert!(resolve_channel(&graph("Active", None, true, courses)).is_none());
    }

    #[test]
    fn test_course_without_chapters_is_skipped() {
        let courses = vec![course("c1", 1, vec![])];
        assert!(resolve_channel(&graph("Active", None, true, courses)).is_none());
    }

    #[test]
    fn test_course_without_entry_chapter_is_skipped() {
        let courses = vec![course("c1", 1, vec![chapter("ch2", 2), chapter("ch3", 3)])];
        assert!(resolve_channel(&graph("Active", None, true, courses)).is_none());
    }

    #[test]
    fn test_ties_pick_lowest_id() {
        let courses = vec![
            course("c9", 1, vec![chapter("x", 1)]),
            course(
                "c3",
                1,
                vec![chapter("ch7", 1), chapter("ch5", 1), chapter("ch1", 2)],
            ),
        ];
        let record = resolve_channel(&graph("Active", None, true, courses))
            .expect("channel should qualify");

        assert_eq!(record.course_id, "c3");
        assert_eq!(record.chapter_id, "ch5");
    }

    #[test]
    fn test_missing_or_empty_name_uses_fallback() {
        let unnamed = resolve_channel(&graph("Active", None, true, single_course()))
            .expect("qualifies");
        assert_eq!(unnamed.display_name, FALLBACK_DISPLAY_NAME);

        let blank = resolve_channel(&graph("Active", Some(""), true, single_course()))
            .expect("qualifies");
        assert_eq!(blank.display_name, FALLBACK_DISPLAY_NAME);
    }

    #[test]
    fn test_resolve_keeps_input_order_and_drops_ineligible() {
        let mut first = graph("Active", Some("First"), true, single_course());
        first.channel.wdt_id = 2;
        let skipped = graph("Inactive", Some("Skipped"), true, single_course());
        let mut last = graph("Notyet", Some("Last"), true, single_course());
        last.channel.wdt_id = 1;

        let records = resolve(&[first, skipped, last]);
        let names: Vec<&str> = records.iter().map(|r| r.display_name.as_str()).collect();

        assert_eq!(names, vec!["First", "Last"]);
    }
}
