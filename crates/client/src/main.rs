//! studytrack-client CLI entry point.

use std::process::ExitCode;
use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use clap::Parser;
use serde::Serialize;
use studytrack_client::cli::actions::ActionsAction;
use studytrack_client::cli::analytics::AnalyticsAction;
use studytrack_client::cli::auth::AuthAction;
use studytrack_client::cli::courses::{self, CoursesAction};
use studytrack_client::cli::knowledge::{self, KnowledgeAction};
use studytrack_client::cli::reviews::{self, ReviewsAction};
use studytrack_client::cli::tags::TagsAction;
use studytrack_client::cli::{Cli, Commands, OutputFormat};
use studytrack_client::config::Config;
use studytrack_client::output::{json, pretty, render};
use studytrack_client::{
    ClientError, FileSession, MemorySession, MutationDispatcher, QueryCache, QueryState,
    SessionProvider, StudytrackClient,
};
use studytrack_core::analytics::{AnalyticsSummary, MonthRange, MonthView};
use studytrack_core::cache::{Mutation, QueryKey};
use studytrack_core::gateway::AuthGateway;
use studytrack_core::tracker::{
    filter_action_items, filter_courses, group_action_items_by_priority, CompletionFilter,
    CreateTagRequest, Id, LoginRequest, Priority, RegisterRequest, SuccessResponse,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Everything a command needs: reads go through the cache, writes through the dispatcher.
struct Shell {
    client: Arc<StudytrackClient>,
    session: Arc<dyn SessionProvider>,
    file_session: Arc<FileSession>,
    cache: QueryCache,
    dispatcher: MutationDispatcher,
    config: Config,
    format: OutputFormat,
    quiet: bool,
    now: NaiveDateTime,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studytrack_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> studytrack_client::Result<()> {
    let config = Config::from_env();
    let file_session = Arc::new(FileSession::load(&config.session_file)?);
    let session: Arc<dyn SessionProvider> = match cli.token {
        Some(token) => Arc::new(MemorySession::with_token(token)),
        None => file_session.clone(),
    };

    let client = Arc::new(StudytrackClient::new(&cli.base_url, session.clone()));
    let cache = QueryCache::new(client.clone());
    let dispatcher = MutationDispatcher::new(client.clone(), cache.clone());
    tracing::debug!(base_url = %client.base_url(), "Client ready");

    let shell = Shell {
        client,
        session,
        file_session,
        cache,
        dispatcher,
        config,
        format: cli.format,
        quiet: cli.quiet,
        now: Local::now().naive_local(),
    };

    let command = cli.command;
    if !matches!(command, Commands::Auth(_)) {
        shell.require_login()?;
    }
    match command {
        Commands::Auth(cmd) => shell.auth(cmd.action).await,
        Commands::Courses(cmd) => shell.courses(cmd.action).await,
        Commands::Knowledge(cmd) => shell.knowledge(cmd.action).await,
        Commands::Actions(cmd) => shell.actions(cmd.action).await,
        Commands::Reviews(cmd) => shell.reviews(cmd.action).await,
        Commands::Tags(cmd) => shell.tags(cmd.action).await,
        Commands::Analytics(cmd) => shell.analytics(cmd.action).await,
    }
}

impl Shell {
    fn require_login(&self) -> studytrack_client::Result<()> {
        match self.session.token() {
            Some(_) => Ok(()),
            None => Err(ClientError::NotLoggedIn),
        }
    }

    /// Reads `key` through the cache, surfacing a failed fetch as an error.
    async fn query(&self, key: QueryKey) -> studytrack_client::Result<QueryState> {
        let state = self.cache.read(key).await;
        match state.error {
            Some(error) => Err(error.into()),
            None => Ok(state),
        }
    }

    fn show<T, F>(&self, value: &T, pretty: F)
    where
        T: Serialize + ?Sized,
        F: FnOnce(&T) -> String,
    {
        println!("{}", render(value, self.format, pretty));
    }

    /// Sends `mutation` and prints what the server returned.
    async fn write(&self, verb: &str, mutation: Mutation) -> studytrack_client::Result<()> {
        let outcome = self.dispatcher.dispatch(mutation).await?;
        let now = self.now;
        self.show(&outcome, |outcome| {
            format!("{}:\n{}", verb, pretty::format_outcome(outcome, now))
        });
        Ok(())
    }

    async fn delete(
        &self,
        what: &str,
        id: Id,
        mutation: Mutation,
    ) -> studytrack_client::Result<()> {
        self.dispatcher.dispatch(mutation).await?;
        match self.format {
            OutputFormat::Json => {
                println!("{}", json::format_json(&SuccessResponse { success: true }))
            }
            OutputFormat::Pretty if !self.quiet => println!("Deleted {} {}", what, id),
            OutputFormat::Pretty => {}
        }
        Ok(())
    }

    async fn auth(&self, action: AuthAction) -> studytrack_client::Result<()> {
        match action {
            AuthAction::Register {
                email,
                name,
                password,
            } => {
                let auth = self
                    .client
                    .register(&RegisterRequest {
                        email,
                        password,
                        name,
                    })
                    .await?;
                self.file_session.save(&auth.token)?;
                self.cache.clear().await;
                self.show(&auth.user, |user| {
                    format!("Registered:\n{}", pretty::format_user(user))
                });
            }
            AuthAction::Login { email, password } => {
                let auth = self.client.login(&LoginRequest { email, password }).await?;
                self.file_session.save(&auth.token)?;
                self.cache.clear().await;
                self.show(&auth.user, |user| {
                    format!("Logged in as:\n{}", pretty::format_user(user))
                });
            }
            AuthAction::Me => {
                self.require_login()?;
                let state = self.query(QueryKey::CurrentUser).await?;
                if let Some(user) = state.current_user() {
                    self.show(user, pretty::format_user);
                }
            }
            AuthAction::Logout => {
                self.file_session.clear()?;
                self.cache.clear().await;
                if !self.quiet {
                    println!("Logged out");
                }
            }
        }
        Ok(())
    }

    async fn courses(&self, action: CoursesAction) -> studytrack_client::Result<()> {
        match action {
            CoursesAction::List {
                search,
                status,
                priority,
            } => {
                let state = self.query(QueryKey::CourseList).await?;
                let filter = courses::list_filter(search, status, priority);
                let matching = filter_courses(state.courses(), &filter);
                self.show(&matching, |courses| pretty::format_courses(courses));
            }
            CoursesAction::Get { id } => {
                let state = self.query(QueryKey::Course { id }).await?;
                if let Some(course) = state.course() {
                    self.show(course, pretty::format_course);
                }
            }
            CoursesAction::Create(args) => {
                self.write("Created", Mutation::CreateCourse(args.into()))
                    .await?;
            }
            CoursesAction::Update { id, changes } => {
                let request = changes.into();
                self.write("Updated", Mutation::UpdateCourse { id, request })
                    .await?;
            }
            CoursesAction::Delete { id } => {
                self.delete("course", id, Mutation::DeleteCourse { id })
                    .await?;
            }
            CoursesAction::Stats => {
                let state = self.query(QueryKey::CourseStats).await?;
                if let Some(stats) = state.course_stats() {
                    self.show(&stats, pretty::format_course_stats);
                }
            }
        }
        Ok(())
    }

    async fn knowledge(&self, action: KnowledgeAction) -> studytrack_client::Result<()> {
        match action {
            KnowledgeAction::List { course } => {
                let state = self
                    .query(QueryKey::KnowledgePoints { course_id: course })
                    .await?;
                self.show(state.knowledge_points(), pretty::format_knowledge_points);
            }
            KnowledgeAction::Create {
                course,
                title,
                fields,
            } => {
                let request = knowledge::create_request(course, title, fields);
                self.write("Created", Mutation::CreateKnowledgePoint(request))
                    .await?;
            }
            KnowledgeAction::Update {
                id,
                course,
                title,
                fields,
            } => {
                let mutation = Mutation::UpdateKnowledgePoint {
                    id,
                    course_id: course,
                    request: knowledge::update_request(title, fields),
                };
                self.write("Updated", mutation).await?;
            }
            KnowledgeAction::Delete { id, course } => {
                let mutation = Mutation::DeleteKnowledgePoint {
                    id,
                    course_id: course,
                };
                self.delete("knowledge point", id, mutation).await?;
            }
        }
        Ok(())
    }

    async fn actions(&self, action: ActionsAction) -> studytrack_client::Result<()> {
        let now = self.now;
        match action {
            ActionsAction::List {
                priority,
                status,
                course: Some(course_id),
            } => {
                let state = self
                    .query(QueryKey::CourseActionItems { course_id })
                    .await?;
                let priority: Option<Priority> = priority.map(Into::into);
                let completion = CompletionFilter::from(status);
                let matching: Vec<_> = state
                    .course_action_items()
                    .iter()
                    .filter(|item| {
                        priority.is_none_or(|p| item.priority == p)
                            && completion.matches(item.completed)
                    })
                    .cloned()
                    .collect();
                self.show(&matching, |items| {
                    pretty::format_course_action_items(items, now)
                });
            }
            ActionsAction::List {
                priority,
                status,
                course: None,
            } => {
                let state = self.query(QueryKey::ActionItems).await?;
                let matching = filter_action_items(
                    state.action_items(),
                    priority.map(Into::into),
                    status.into(),
                );
                self.show(&matching, |items| {
                    let groups = group_action_items_by_priority(items.iter().copied());
                    pretty::format_action_groups(&groups, now)
                });
            }
            ActionsAction::Create(args) => {
                self.write("Created", Mutation::CreateActionItem(args.into()))
                    .await?;
            }
            ActionsAction::Update { id, changes } => {
                let request = changes.into();
                self.write("Updated", Mutation::UpdateActionItem { id, request })
                    .await?;
            }
            ActionsAction::Toggle { id } => {
                let state = self.query(QueryKey::ActionItems).await?;
                let completed = state
                    .action_items()
                    .iter()
                    .find(|item| item.action_item.id == id)
                    .map(|item| item.action_item.completed)
                    .ok_or_else(|| ClientError::InvalidInput(format!("No action item {}", id)))?;
                self.write("Toggled", Mutation::ToggleActionItem { id, completed })
                    .await?;
            }
            ActionsAction::Delete { id } => {
                self.delete("action item", id, Mutation::DeleteActionItem { id })
                    .await?;
            }
            ActionsAction::Stats => {
                let state = self.query(QueryKey::ActionItemStats).await?;
                if let Some(stats) = state.action_item_stats() {
                    self.show(&stats, pretty::format_action_item_stats);
                }
            }
        }
        Ok(())
    }

    async fn reviews(&self, action: ReviewsAction) -> studytrack_client::Result<()> {
        match action {
            ReviewsAction::List {
                course: Some(course_id),
            } => {
                let state = self
                    .query(QueryKey::CourseReviewLogs { course_id })
                    .await?;
                self.show(state.course_review_logs(), pretty::format_course_review_logs);
            }
            ReviewsAction::List { course: None } => {
                let state = self.query(QueryKey::ReviewLogs).await?;
                let logs: Vec<_> = state.review_logs().iter().collect();
                self.show(&logs, |logs| pretty::format_review_logs(logs));
            }
            ReviewsAction::Create {
                course,
                title,
                date,
                fields,
            } => {
                let request = reviews::create_request(course, title, date, fields);
                self.write("Created", Mutation::CreateReviewLog(request))
                    .await?;
            }
            ReviewsAction::Update { id, title, fields } => {
                let request = reviews::update_request(title, fields);
                self.write("Updated", Mutation::UpdateReviewLog { id, request })
                    .await?;
            }
            ReviewsAction::Delete { id } => {
                self.delete("review log", id, Mutation::DeleteReviewLog { id })
                    .await?;
            }
            ReviewsAction::Calendar { month } => {
                let today = self.now.date();
                let month = match month {
                    Some(month) => month,
                    None => MonthRange::containing(today).ok_or_else(|| {
                        ClientError::InvalidInput(format!("No calendar month for {}", today))
                    })?,
                };
                let state = self.query(QueryKey::ReviewLogs).await?;
                let logs = state.review_logs().iter().map(|item| &item.review_log);
                let view = MonthView::build(month, logs, today);
                self.show(&view, pretty::format_month);
            }
        }
        Ok(())
    }

    async fn tags(&self, action: TagsAction) -> studytrack_client::Result<()> {
        match action {
            TagsAction::List {
                course: Some(course_id),
            } => {
                let state = self.query(QueryKey::CourseTags { course_id }).await?;
                self.show(state.course_tags(), pretty::format_course_tags);
            }
            TagsAction::List { course: None } => {
                let state = self.query(QueryKey::TagList).await?;
                self.show(state.tags(), pretty::format_tags);
            }
            TagsAction::Create {
                name,
                color,
                category,
            } => {
                let request = CreateTagRequest {
                    color,
                    category,
                    ..CreateTagRequest::new(name)
                };
                self.write("Created", Mutation::CreateTag(request)).await?;
            }
            TagsAction::Delete { id } => {
                self.delete("tag", id, Mutation::DeleteTag { id }).await?;
            }
            TagsAction::Attach { course, tag } => {
                let mutation = Mutation::AddTagToCourse {
                    course_id: course,
                    tag_id: tag,
                };
                self.dispatcher.dispatch(mutation).await?;
                if !self.quiet {
                    println!("Attached tag {} to course {}", tag, course);
                }
            }
            TagsAction::Detach { course, tag } => {
                let mutation = Mutation::RemoveTagFromCourse {
                    course_id: course,
                    tag_id: tag,
                };
                self.dispatcher.dispatch(mutation).await?;
                if !self.quiet {
                    println!("Detached tag {} from course {}", tag, course);
                }
            }
        }
        Ok(())
    }

    async fn analytics(&self, action: AnalyticsAction) -> studytrack_client::Result<()> {
        match action {
            AnalyticsAction::Summary { window } => {
                let (courses, items, logs) = tokio::join!(
                    self.query(QueryKey::CourseList),
                    self.query(QueryKey::ActionItems),
                    self.query(QueryKey::ReviewLogs),
                );
                let (courses, items, logs) = (courses?, items?, logs?);
                let summary = AnalyticsSummary::build(
                    courses.courses(),
                    items.action_items(),
                    logs.review_logs(),
                    window.unwrap_or(self.config.trend_window),
                );
                self.show(&summary, pretty::format_summary);
            }
        }
        Ok(())
    }
}
