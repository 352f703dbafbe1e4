use jira_api::{IssueSelector, JiraApi, Transport};

use crate::output::{Logger, TableRenderer};

/// Terminal-facing layer: one render method per API operation.
///
/// This is the error boundary for the whole pipeline. A failed
/// operation becomes a single log line; render methods never return an
/// error and never retry.
pub struct Presenter<'a, T: Transport> {
    api: JiraApi<T>,
    renderer: &'a dyn TableRenderer,
    logger: &'a dyn Logger,
}

impl<'a, T: Transport> Presenter<'a, T> {
    pub fn new(api: JiraApi<T>, renderer: &'a dyn TableRenderer, logger: &'a dyn Logger) -> Self {
        Self {
            api,
            renderer,
            logger,
        }
    }

    pub fn render_user(&self) {
        match self.api.get_user() {
            Ok(user) => {
                self.renderer.render_title("Current user detail");
                self.renderer.render_vertical(&[
                    ("Key".to_string(), user.key),
                    ("Name".to_string(), user.name),
                    ("Email".to_string(), user.email),
                ]);
            }
            Err(err) => self.logger.error(&err.to_string()),
        }
    }

    pub fn render_issue(&self, key: &str) {
        match self.api.get_issue(key) {
            Ok(issue) => {
                self.renderer.render_title("Issue detail summary");
                self.renderer.render_vertical(&[
                    ("Key".to_string(), issue.key),
                    ("Issue Type".to_string(), issue.issue_type),
                    ("Summary".to_string(), issue.summary),
                    ("Status".to_string(), issue.status),
                    (
                        "Project".to_string(),
                        format!("{} ({})", issue.project_name, issue.project_key),
                    ),
                ]);
            }
            Err(err) => self.logger.error(&err.to_string()),
        }
    }

    pub fn render_issues(&self, project: Option<&str>) {
        match self.api.get_issues(project) {
            Ok(issues) => {
                let rows: Vec<Vec<String>> = issues
                    .into_iter()
                    .map(|issue| vec![issue.key, issue.status, issue.summary])
                    .collect();
                self.renderer
                    .render(&["Issue key", "Status", "Summary"], &rows);
            }
            Err(err) => self.logger.error(&err.to_string()),
        }
    }

    pub fn render_issue_worklogs(&self, selector: &IssueSelector) {
        match self.api.get_issue_worklogs(selector) {
            Ok(worklogs) => {
                let rows: Vec<Vec<String>> = worklogs
                    .into_iter()
                    .map(|w| vec![w.id, w.time_spent, w.comment, w.author, w.created])
                    .collect();
                self.renderer.render(
                    &["Worklog Id", "Timespent", "Comment", "Author", "Created"],
                    &rows,
                );
            }
            Err(err) => self.logger.error(&err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use jira_api::{JiraError, Result};
    use serde_json::{json, Value};

    use super::*;

    struct StubTransport(Result<Value>);

    impl Transport for &StubTransport {
        fn get(&self, _path: &str) -> Result<Value> {
            match &self.0 {
                Ok(body) => Ok(body.clone()),
                Err(JiraError::Api { status, message }) => Err(JiraError::Api {
                    status: *status,
                    message: message.clone(),
                }),
                Err(other) => panic!("stub cannot replay {:?}", other),
            }
        }
    }

    #[derive(Default)]
    struct RecordingRenderer {
        titles: RefCell<Vec<String>>,
        verticals: RefCell<Vec<Vec<(String, String)>>>,
        tables: RefCell<Vec<(Vec<String>, Vec<Vec<String>>)>>,
    }

    impl TableRenderer for RecordingRenderer {
        fn render_title(&self, text: &str) {
            self.titles.borrow_mut().push(text.to_string());
        }

        fn render_vertical(&self, rows: &[(String, String)]) {
            self.verticals.borrow_mut().push(rows.to_vec());
        }

        fn render(&self, headers: &[&str], rows: &[Vec<String>]) {
            let headers = headers.iter().map(|h| h.to_string()).collect();
            self.tables.borrow_mut().push((headers, rows.to_vec()));
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        errors: RefCell<Vec<String>>,
    }

    impl Logger for RecordingLogger {
        fn error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
    }

    fn labeled(rows: &[(&str, &str)]) -> Vec<(String, String)> {
        rows.iter()
            .map(|(label, value)| (label.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn issue_detail_renders_a_title_and_five_labeled_rows() {
        let stub = StubTransport(Ok(json!({
            "key": "some key",
            "fields": {
                "issuetype": {"name": "issue type"},
                "summary": "summary",
                "status": {"name": "status name"},
                "project": {"key": "project key", "name": "project name"}
            }
        })));
        let renderer = RecordingRenderer::default();
        let logger = RecordingLogger::default();
        let presenter = Presenter::new(JiraApi::new(&stub), &renderer, &logger);

        presenter.render_issue("AAABB");

        assert_eq!(*renderer.titles.borrow(), ["Issue detail summary"]);
        assert_eq!(
            *renderer.verticals.borrow(),
            [labeled(&[
                ("Key", "some key"),
                ("Issue Type", "issue type"),
                ("Summary", "summary"),
                ("Status", "status name"),
                ("Project", "project name (project key)"),
            ])]
        );
        assert!(logger.errors.borrow().is_empty());
    }

    #[test]
    fn user_detail_renders_key_name_and_email() {
        let stub = StubTransport(Ok(json!({
            "key": "jdoe",
            "displayName": "John Doe",
            "emailAddress": "jdoe@example.com"
        })));
        let renderer = RecordingRenderer::default();
        let logger = RecordingLogger::default();
        let presenter = Presenter::new(JiraApi::new(&stub), &renderer, &logger);

        presenter.render_user();

        assert_eq!(*renderer.titles.borrow(), ["Current user detail"]);
        assert_eq!(
            *renderer.verticals.borrow(),
            [labeled(&[
                ("Key", "jdoe"),
                ("Name", "John Doe"),
                ("Email", "jdoe@example.com"),
            ])]
        );
    }

    #[test]
    fn issue_list_renders_the_fixed_columns() {
        let issue = |key: &str, status: &str, summary: &str| {
            json!({
                "key": key,
                "fields": {
                    "issuetype": {"name": "Task"},
                    "summary": summary,
                    "status": {"name": status},
                    "project": {"key": "TST", "name": "Test"}
                }
            })
        };
        let stub = StubTransport(Ok(json!({
            "total": 2,
            "issues": [
                issue("KEY_1", "In Progress", "Test issue 1"),
                issue("KEY_2", "Open", "Test issue 2")
            ]
        })));
        let renderer = RecordingRenderer::default();
        let logger = RecordingLogger::default();
        let presenter = Presenter::new(JiraApi::new(&stub), &renderer, &logger);

        presenter.render_issues(None);

        let tables = renderer.tables.borrow();
        let (headers, rows) = &tables[0];
        assert_eq!(headers, &["Issue key", "Status", "Summary"]);
        assert_eq!(
            rows,
            &[
                vec!["KEY_1".to_string(), "In Progress".to_string(), "Test issue 1".to_string()],
                vec!["KEY_2".to_string(), "Open".to_string(), "Test issue 2".to_string()],
            ]
        );
    }

    #[test]
    fn worklogs_render_the_fixed_columns() {
        let stub = StubTransport(Ok(json!({
            "total": 1,
            "worklogs": [{
                "id": "12345",
                "timeSpent": "1h 30m",
                "comment": "worklog comment",
                "author": {"displayName": "logger name"},
                "created": "2015-12-12"
            }]
        })));
        let renderer = RecordingRenderer::default();
        let logger = RecordingLogger::default();
        let presenter = Presenter::new(JiraApi::new(&stub), &renderer, &logger);

        presenter.render_issue_worklogs(&IssueSelector::key("AAABB"));

        let tables = renderer.tables.borrow();
        let (headers, rows) = &tables[0];
        assert_eq!(
            headers,
            &["Worklog Id", "Timespent", "Comment", "Author", "Created"]
        );
        assert_eq!(
            rows,
            &[vec![
                "12345".to_string(),
                "1h 30m".to_string(),
                "worklog comment".to_string(),
                "logger name".to_string(),
                "2015-12-12".to_string(),
            ]]
        );
    }

    #[test]
    fn an_empty_issue_list_is_logged_not_rendered() {
        let stub = StubTransport(Ok(json!({"total": 0, "issues": []})));
        let renderer = RecordingRenderer::default();
        let logger = RecordingLogger::default();
        let presenter = Presenter::new(JiraApi::new(&stub), &renderer, &logger);

        presenter.render_issues(Some("TST"));

        assert!(renderer.tables.borrow().is_empty());
        assert_eq!(
            *logger.errors.borrow(),
            ["There are no issues for current user"]
        );
    }

    #[test]
    fn a_transport_failure_reaches_the_logger_as_text() {
        let stub = StubTransport(Err(JiraError::Api {
            status: 404,
            message: "Issue Does Not Exist".to_string(),
        }));
        let renderer = RecordingRenderer::default();
        let logger = RecordingLogger::default();
        let presenter = Presenter::new(JiraApi::new(&stub), &renderer, &logger);

        presenter.render_issue_worklogs(&IssueSelector::key("AAABB"));

        assert_eq!(
            *logger.errors.borrow(),
            ["API error (404): Issue Does Not Exist"]
        );
    }
}
