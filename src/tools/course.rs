//! Course search tools backed by an external course store.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::RwLock;

use super::{Source, Tool};

/// One chunk returned by a content search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub document: String,
    pub course_title: String,
    pub lesson_number: Option<u32>,
    pub distance: f32,
}

/// Result of a content search. `error` is set when the store could not
/// resolve the query (e.g. an unknown course name).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub hits: Vec<SearchHit>,
    pub error: Option<String>,
}

impl SearchResults {
    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            hits: Vec::new(),
            error: Some(message.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LessonSummary {
    pub number: u32,
    pub title: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseOutline {
    pub title: String,
    pub instructor: Option<String>,
    pub link: Option<String>,
    pub lessons: Vec<LessonSummary>,
}

/// Vector store holding the course catalog and content chunks.
///
/// Course names given to `search` and `course_outline` may be partial; the
/// store resolves them to a concrete course.
#[async_trait]
pub trait CourseStore: Send + Sync {
    async fn search(
        &self,
        query: &str,
        course_name: Option<&str>,
        lesson_number: Option<u32>,
    ) -> anyhow::Result<SearchResults>;

    async fn lesson_link(
        &self,
        course_title: &str,
        lesson_number: u32,
    ) -> anyhow::Result<Option<String>>;

    async fn course_outline(&self, course_name: &str) -> anyhow::Result<Option<CourseOutline>>;
}

fn optional_lesson(args: &Value) -> anyhow::Result<Option<u32>> {
    match &args["lesson_number"] {
        Value::Null => Ok(None),
        value => value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| anyhow::anyhow!("'lesson_number' must be a non-negative integer")),
    }
}

/// Semantic search over course content.
pub struct CourseSearchTool {
    store: Arc<dyn CourseStore>,
    sources: RwLock<Vec<Source>>,
}

impl CourseSearchTool {
    pub fn new(store: Arc<dyn CourseStore>) -> Self {
        Self {
            store,
            sources: RwLock::new(Vec::new()),
        }
    }

    async fn format_results(&self, results: &SearchResults) -> anyhow::Result<(String, Vec<Source>)> {
        let mut sections = Vec::with_capacity(results.hits.len());
        let mut sources = Vec::with_capacity(results.hits.len());

        for hit in &results.hits {
            let (header, label, url) = match hit.lesson_number {
                Some(n) => (
                    format!("[{} - Lesson {}]", hit.course_title, n),
                    format!("{} - Lesson {}", hit.course_title, n),
                    self.store.lesson_link(&hit.course_title, n).await?,
                ),
                None => (
                    format!("[{}]", hit.course_title),
                    hit.course_title.clone(),
                    None,
                ),
            };
            sections.push(format!("{}\n{}", header, hit.document));
            sources.push(Source { text: label, url });
        }

        Ok((sections.join("\n\n"), sources))
    }
}

#[async_trait]
impl Tool for CourseSearchTool {
    fn name(&self) -> &str {
        "search_course_content"
    }

    fn description(&self) -> &str {
        "Search course materials with smart course name matching and lesson filtering"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "What to search for in the course content"
                },
                "course_name": {
                    "type": "string",
                    "description": "Course title (partial matches work, e.g. 'MCP', 'Introduction')"
                },
                "lesson_number": {
                    "type": "integer",
                    "description": "Specific lesson number to search within (e.g. 1, 2, 3)"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, args: Value) -> anyhow::Result<String> {
        let query = args["query"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Missing 'query' argument"))?;
        let course_name = args["course_name"].as_str();
        let lesson_number = optional_lesson(&args)?;

        let results = self.store.search(query, course_name, lesson_number).await?;

        if let Some(error) = &results.error {
            self.sources.write().await.clear();
            return Ok(error.clone());
        }

        if results.is_empty() {
            self.sources.write().await.clear();
            let mut message = String::from("No relevant content found");
            if let Some(course) = course_name {
                message.push_str(&format!(" in course '{}'", course));
            }
            if let Some(lesson) = lesson_number {
                message.push_str(&format!(" in lesson {}", lesson));
            }
            message.push('.');
            return Ok(message);
        }

        let (formatted, sources) = self.format_results(&results).await?;
        *self.sources.write().await = sources;
        Ok(formatted)
    }

    async fn last_sources(&self) -> Vec<Source> {
        self.sources.read().await.clone()
    }

    async fn reset_sources(&self) {
        self.sources.write().await.clear();
    }
}

/// Course structure lookup: title, link, instructor and lesson list.
pub struct CourseOutlineTool {
    store: Arc<dyn CourseStore>,
    sources: RwLock<Vec<Source>>,
}

impl CourseOutlineTool {
    pub fn new(store: Arc<dyn CourseStore>) -> Self {
        Self {
            store,
            sources: RwLock::new(Vec::new()),
        }
    }
}

fn render_outline(outline: &CourseOutline) -> String {
    let mut out = format!("Course Title: {}\n", outline.title);
    if let Some(link) = &outline.link {
        out.push_str(&format!("Course Link: {}\n", link));
    }
    if let Some(instructor) = &outline.instructor {
        out.push_str(&format!("Instructor: {}\n", instructor));
    }

    if outline.lessons.is_empty() {
        out.push_str("\nNo lessons listed.");
        return out;
    }

    out.push_str(&format!("\nLessons ({} total):\n", outline.lessons.len()));
    let lines: Vec<String> = outline
        .lessons
        .iter()
        .map(|lesson| format!("Lesson {}: {}", lesson.number, lesson.title))
        .collect();
    out.push_str(&lines.join("\n"));
    out
}

#[async_trait]
impl Tool for CourseOutlineTool {
    fn name(&self) -> &str {
        "get_course_outline"
    }

    fn description(&self) -> &str {
        "Get the complete outline of a course: title, link, instructor and every lesson with its number and title"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "course_title": {
                    "type": "string",
                    "description": "Course title (partial matches work, e.g. 'MCP', 'Introduction')"
                }
            },
            "required": ["course_title"]
        })
    }

    async fn execute(&self, args: Value) -> anyhow::Result<String> {
        let course_title = args["course_title"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Missing 'course_title' argument"))?;

        let Some(outline) = self.store.course_outline(course_title).await? else {
            self.sources.write().await.clear();
            return Ok(format!("No course found matching '{}'", course_title));
        };

        *self.sources.write().await = vec![Source {
            text: outline.title.clone(),
            url: outline.link.clone(),
        }];
        Ok(render_outline(&outline))
    }

    async fn last_sources(&self) -> Vec<Source> {
        self.sources.read().await.clone()
    }

    async fn reset_sources(&self) {
        self.sources.write().await.clear();
    }
}
