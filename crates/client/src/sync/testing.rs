//! In-memory gateway used by the sync layer tests.
//!
//! Reads snapshot the state first and then, when gated, park until
//! [`FakeGateway::release`] hands out a permit. That lets a test change the
//! server state between a fetch starting and it resolving.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use studytrack_core::gateway::{
    ActionItemGateway, AuthGateway, CourseGateway, GatewayError, KnowledgePointGateway, Result,
    ReviewLogGateway, TagGateway,
};
use studytrack_core::tracker::{
    ActionItem, ActionItemStats, ActionItemWithCourse, AuthResponse, Course,
    CourseStats, CourseTag, CreateActionItemRequest, CreateCourseRequest,
    CreateKnowledgePointRequest, CreateReviewLogRequest, CreateTagRequest, Id, KnowledgePoint,
    LoginRequest, RegisterRequest, ReviewLog, ReviewLogWithCourse, Tag, UpdateActionItemRequest,
    UpdateCourseRequest, UpdateKnowledgePointRequest, UpdateReviewLogRequest, User,
};
use tokio::sync::Semaphore;

#[derive(Default)]
struct FakeState {
    next_id: Id,
    courses: Vec<Course>,
    knowledge_points: Vec<KnowledgePoint>,
    action_items: Vec<ActionItem>,
    review_logs: Vec<ReviewLog>,
    tags: Vec<Tag>,
    course_tags: Vec<(Id, CourseTag)>,
}

impl FakeState {
    fn next_id(&mut self) -> Id {
        self.next_id += 1;
        self.next_id
    }

    fn course(&self, id: Id) -> Option<Course> {
        self.courses.iter().find(|c| c.id == id).cloned()
    }
}

fn not_found(what: &str) -> GatewayError {
    GatewayError::Rejected {
        status: 404,
        detail: format!("{} not found", what),
    }
}

#[derive(Default)]
pub(crate) struct FakeGateway {
    state: Mutex<FakeState>,
    calls: Mutex<HashMap<&'static str, usize>>,
    failures: Mutex<HashSet<&'static str>>,
    gate: Option<Arc<Semaphore>>,
}

impl FakeGateway {
    pub fn with_courses(courses: Vec<Course>) -> Self {
        let next_id = courses.iter().map(|c| c.id).max().unwrap_or(0) + 100;
        Self {
            state: Mutex::new(FakeState {
                next_id,
                courses,
                ..FakeState::default()
            }),
            ..Self::default()
        }
    }

    /// Makes every read wait for a permit from [`FakeGateway::release`].
    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Semaphore::new(0)));
        self
    }

    pub fn release(&self, reads: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(reads);
        }
    }

    pub fn calls(&self, endpoint: &str) -> usize {
        self.calls.lock().unwrap().get(endpoint).copied().unwrap_or(0)
    }

    /// Fails the next call to `endpoint` with a transport error.
    pub fn fail_next(&self, endpoint: &'static str) {
        self.failures.lock().unwrap().insert(endpoint);
    }

    pub fn insert_course(&self, course: Course) {
        self.state.lock().unwrap().courses.push(course);
    }

    pub fn rename_course(&self, id: Id, title: &str) {
        let mut state = self.state.lock().unwrap();
        if let Some(course) = state.courses.iter_mut().find(|c| c.id == id) {
            course.title = title.to_string();
        }
    }

    pub fn insert_action_item(&self, item: ActionItem) {
        self.state.lock().unwrap().action_items.push(item);
    }

    fn record(&self, endpoint: &'static str) -> Result<()> {
        *self.calls.lock().unwrap().entry(endpoint).or_insert(0) += 1;
        if self.failures.lock().unwrap().remove(endpoint) {
            return Err(GatewayError::Transport("connection reset".to_string()));
        }
        Ok(())
    }

    async fn read<T>(
        &self,
        endpoint: &'static str,
        snapshot: impl FnOnce(&FakeState) -> Result<T>,
    ) -> Result<T> {
        let result = self
            .record(endpoint)
            .and_then(|()| snapshot(&self.state.lock().unwrap()));
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
        result
    }

    fn write<T>(
        &self,
        endpoint: &'static str,
        apply: impl FnOnce(&mut FakeState) -> Result<T>,
    ) -> Result<T> {
        self.record(endpoint)?;
        apply(&mut self.state.lock().unwrap())
    }
}

/// Yields until `endpoint` has been called at least `expected` times.
pub(crate) async fn wait_for_calls(fake: &FakeGateway, endpoint: &str, expected: usize) {
    for _ in 0..1_000 {
        if fake.calls(endpoint) >= expected {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!(
        "{} called {} times, expected {}",
        endpoint,
        fake.calls(endpoint),
        expected
    );
}

#[async_trait]
impl AuthGateway for FakeGateway {
    async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse> {
        self.write("register", |state| {
            Ok(AuthResponse {
                user: User {
                    id: state.next_id(),
                    email: req.email.clone(),
                    name: req.name.clone(),
                },
                token: "fake-token".to_string(),
            })
        })
    }

    async fn login(&self, req: &LoginRequest) -> Result<AuthResponse> {
        self.write("login", |_| {
            Ok(AuthResponse {
                user: User {
                    id: 1,
                    email: req.email.clone(),
                    name: "Learner".to_string(),
                },
                token: "fake-token".to_string(),
            })
        })
    }

    async fn current_user(&self) -> Result<User> {
        self.read("current_user", |_| {
            Ok(User {
                id: 1,
                email: "learner@example.com".to_string(),
                name: "Learner".to_string(),
            })
        })
        .await
    }
}

#[async_trait]
impl CourseGateway for FakeGateway {
    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.read("list_courses", |state| Ok(state.courses.clone()))
            .await
    }

    async fn get_course(&self, id: Id) -> Result<Course> {
        self.read("get_course", |state| {
            state.course(id).ok_or_else(|| not_found("Course"))
        })
        .await
    }

    async fn course_stats(&self) -> Result<CourseStats> {
        self.read("course_stats", |state| {
            Ok(studytrack_core::analytics::course_stats(&state.courses))
        })
        .await
    }

    async fn create_course(&self, req: &CreateCourseRequest) -> Result<Course> {
        self.write("create_course", |state| {
            let mut course = Course::new(state.next_id(), req.title.clone());
            course.platform = req.platform.clone();
            course.instructor = req.instructor.clone();
            course.total_chapters = req.total_chapters.unwrap_or(0);
            state.courses.insert(0, course.clone());
            Ok(course)
        })
    }

    async fn update_course(&self, id: Id, req: &UpdateCourseRequest) -> Result<Course> {
        self.write("update_course", |state| {
            let course = state
                .courses
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(|| not_found("Course"))?;
            if let Some(title) = &req.title {
                course.title = title.clone();
            }
            if let Some(status) = req.status {
                course.status = status;
            }
            if let Some(priority) = req.priority {
                course.priority = priority;
            }
            if let Some(completed) = req.completed_chapters {
                course.completed_chapters = completed;
            }
            if let Some(total) = req.total_chapters {
                course.total_chapters = total;
            }
            if let Some(progress) = req.progress_percentage {
                course.progress_percentage = progress;
            }
            Ok(course.clone())
        })
    }

    async fn delete_course(&self, id: Id) -> Result<()> {
        self.write("delete_course", |state| {
            let before = state.courses.len();
            state.courses.retain(|c| c.id != id);
            if state.courses.len() == before {
                return Err(not_found("Course"));
            }
            Ok(())
        })
    }
}

#[async_trait]
impl KnowledgePointGateway for FakeGateway {
    async fn list_knowledge_points(&self, course_id: Id) -> Result<Vec<KnowledgePoint>> {
        self.read("list_knowledge_points", |state| {
            Ok(state
                .knowledge_points
                .iter()
                .filter(|kp| kp.course_id == course_id)
                .cloned()
                .collect())
        })
        .await
    }

    async fn create_knowledge_point(
        &self,
        req: &CreateKnowledgePointRequest,
    ) -> Result<KnowledgePoint> {
        self.write("create_knowledge_point", |state| {
            let point = KnowledgePoint {
                id: state.next_id(),
                course_id: req.course_id,
                title: req.title.clone(),
                content: req.content.clone(),
                summary: req.summary.clone(),
                personal_notes: req.personal_notes.clone(),
                created_at: None,
                updated_at: None,
            };
            state.knowledge_points.push(point.clone());
            Ok(point)
        })
    }

    async fn update_knowledge_point(
        &self,
        id: Id,
        req: &UpdateKnowledgePointRequest,
    ) -> Result<KnowledgePoint> {
        self.write("update_knowledge_point", |state| {
            let point = state
                .knowledge_points
                .iter_mut()
                .find(|kp| kp.id == id)
                .ok_or_else(|| not_found("Knowledge point"))?;
            if let Some(title) = &req.title {
                point.title = title.clone();
            }
            Ok(point.clone())
        })
    }

    async fn delete_knowledge_point(&self, id: Id) -> Result<()> {
        self.write("delete_knowledge_point", |state| {
            state.knowledge_points.retain(|kp| kp.id != id);
            Ok(())
        })
    }
}

#[async_trait]
impl ActionItemGateway for FakeGateway {
    async fn list_action_items(&self) -> Result<Vec<ActionItemWithCourse>> {
        self.read("list_action_items", |state| {
            Ok(state
                .action_items
                .iter()
                .map(|item| ActionItemWithCourse {
                    action_item: item.clone(),
                    course: state.course(item.course_id),
                })
                .collect())
        })
        .await
    }

    async fn list_course_action_items(&self, course_id: Id) -> Result<Vec<ActionItem>> {
        self.read("list_course_action_items", |state| {
            Ok(state
                .action_items
                .iter()
                .filter(|item| item.course_id == course_id)
                .cloned()
                .collect())
        })
        .await
    }

    async fn action_item_stats(&self) -> Result<ActionItemStats> {
        self.read("action_item_stats", |state| {
            Ok(studytrack_core::analytics::action_item_stats(
                &state.action_items,
            ))
        })
        .await
    }

    async fn create_action_item(&self, req: &CreateActionItemRequest) -> Result<ActionItem> {
        self.write("create_action_item", |state| {
            let mut item = ActionItem::new(state.next_id(), req.course_id, req.title.clone());
            item.priority = req.priority.unwrap_or_default();
            item.due_date = req.due_date;
            state.action_items.push(item.clone());
            Ok(item)
        })
    }

    async fn update_action_item(
        &self,
        id: Id,
        req: &UpdateActionItemRequest,
    ) -> Result<ActionItem> {
        self.write("update_action_item", |state| {
            let item = state
                .action_items
                .iter_mut()
                .find(|item| item.id == id)
                .ok_or_else(|| not_found("Action item"))?;
            if let Some(title) = &req.title {
                item.title = title.clone();
            }
            if let Some(completed) = req.completed {
                item.completed = completed;
            }
            Ok(item.clone())
        })
    }

    async fn delete_action_item(&self, id: Id) -> Result<()> {
        self.write("delete_action_item", |state| {
            state.action_items.retain(|item| item.id != id);
            Ok(())
        })
    }
}

#[async_trait]
impl ReviewLogGateway for FakeGateway {
    async fn list_review_logs(&self) -> Result<Vec<ReviewLogWithCourse>> {
        self.read("list_review_logs", |state| {
            let mut logs: Vec<ReviewLogWithCourse> = state
                .review_logs
                .iter()
                .map(|log| ReviewLogWithCourse {
                    review_log: log.clone(),
                    course: state.course(log.course_id),
                })
                .collect();
            logs.sort_by(|a, b| b.review_log.review_date.cmp(&a.review_log.review_date));
            Ok(logs)
        })
        .await
    }

    async fn list_course_review_logs(&self, course_id: Id) -> Result<Vec<ReviewLog>> {
        self.read("list_course_review_logs", |state| {
            Ok(state
                .review_logs
                .iter()
                .filter(|log| log.course_id == course_id)
                .cloned()
                .collect())
        })
        .await
    }

    async fn create_review_log(&self, req: &CreateReviewLogRequest) -> Result<ReviewLog> {
        self.write("create_review_log", |state| {
            let date = req.review_date.unwrap_or_default();
            let log = ReviewLog::new(
                state.next_id(),
                req.course_id,
                req.title.clone(),
                req.emotional_indicator.unwrap_or(3),
                date,
            );
            state.review_logs.push(log.clone());
            Ok(log)
        })
    }

    async fn update_review_log(&self, id: Id, req: &UpdateReviewLogRequest) -> Result<ReviewLog> {
        self.write("update_review_log", |state| {
            let log = state
                .review_logs
                .iter_mut()
                .find(|log| log.id == id)
                .ok_or_else(|| not_found("Review log"))?;
            if let Some(indicator) = req.emotional_indicator {
                log.emotional_indicator = indicator;
            }
            Ok(log.clone())
        })
    }

    async fn delete_review_log(&self, id: Id) -> Result<()> {
        self.write("delete_review_log", |state| {
            state.review_logs.retain(|log| log.id != id);
            Ok(())
        })
    }
}

#[async_trait]
impl TagGateway for FakeGateway {
    async fn list_tags(&self) -> Result<Vec<Tag>> {
        self.read("list_tags", |state| {
            let mut tags = state.tags.clone();
            tags.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(tags)
        })
        .await
    }

    async fn create_tag(&self, req: &CreateTagRequest) -> Result<Tag> {
        self.write("create_tag", |state| {
            if state.tags.iter().any(|tag| tag.name == req.name) {
                return Err(GatewayError::Rejected {
                    status: 400,
                    detail: "Tag already exists".to_string(),
                });
            }
            let tag = Tag {
                id: state.next_id(),
                user_id: 1,
                name: req.name.clone(),
                color: req.color.clone(),
                category: req.category.clone(),
                created_at: None,
            };
            state.tags.push(tag.clone());
            Ok(tag)
        })
    }

    async fn delete_tag(&self, id: Id) -> Result<()> {
        self.write("delete_tag", |state| {
            state.tags.retain(|tag| tag.id != id);
            Ok(())
        })
    }

    async fn list_course_tags(&self, course_id: Id) -> Result<Vec<CourseTag>> {
        self.read("list_course_tags", |state| {
            Ok(state
                .course_tags
                .iter()
                .filter(|(id, _)| *id == course_id)
                .map(|(_, tag)| tag.clone())
                .collect())
        })
        .await
    }

    async fn add_tag_to_course(&self, course_id: Id, tag_id: Id) -> Result<()> {
        self.write("add_tag_to_course", |state| {
            let tag = state
                .tags
                .iter()
                .find(|tag| tag.id == tag_id)
                .cloned()
                .ok_or_else(|| not_found("Tag"))?;
            let course_tag_id = state.next_id();
            state
                .course_tags
                .push((course_id, CourseTag { course_tag_id, tag }));
            Ok(())
        })
    }

    async fn remove_tag_from_course(&self, course_id: Id, tag_id: Id) -> Result<()> {
        self.write("remove_tag_from_course", |state| {
            state
                .course_tags
                .retain(|(id, course_tag)| !(*id == course_id && course_tag.tag.id == tag_id));
            Ok(())
        })
    }
}

