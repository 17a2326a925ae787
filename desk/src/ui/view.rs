//! # Headless View Model
//!
//! [`build_view`] turns an [`AppState`] into plain data describing what the
//! window shows: the shell (public or authenticated frame with nav bar), the
//! active page, and any confirmation dialog. The egui screens only paint a
//! [`View`]; everything that decides *what* is shown lives here and is
//! testable without a window.

use std::collections::{BTreeMap, HashMap, HashSet};

use shared::{or_dash, Student, MAX_SEMESTER, MIN_SEMESTER};

use crate::app::{AppState, AuthState, Page, StudentForm};
use crate::core::config::BackendMode;

pub const EMPTY_STUDENTS_TITLE: &str = "No Students Found";
pub const EMPTY_STUDENTS_HINT: &str = "Start by adding a new student to the system.";
pub const DEMO_HINT: &str = "Demo: Use any username/password";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this student?";

/// Everything the window shows for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub shell: ShellView,
    pub page: PageView,
}

impl View {
    /// Page whose nav entry is highlighted, if any
    pub fn active_page(&self) -> Option<Page> {
        match &self.shell {
            ShellView::Public => None,
            ShellView::Authenticated { nav, .. } => nav.iter().find(|e| e.active).map(|e| e.page),
        }
    }
}

/// Outer frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellView {
    /// Login page, no navigation
    Public,
    /// Navigation bar, user label and logout
    Authenticated {
        user_label: String,
        nav: Vec<NavEntry>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub page: Page,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Login(LoginView),
    Dashboard(DashboardView),
    Students(StudentsView),
    AddStudent(AddStudentView),
    Analytics(AnalyticsView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginView {
    /// Login or signup fields as typed
    pub form: AuthState,
    pub pending: bool,
    pub demo_hint: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

impl StatCard {
    fn new(label: &'static str, value: impl ToString) -> Self {
        Self {
            label,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub cards: Vec<StatCard>,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub course: String,
    pub semester: u8,
}

impl From<&Student> for StudentRow {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id,
            name: student.name.clone(),
            email: or_dash(student.email.as_deref()).to_string(),
            course: student.course.clone(),
            semester: student.semester,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirm {
    pub id: i64,
    pub prompt: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentsView {
    pub search: String,
    pub loading: bool,
    pub rows: Vec<StudentRow>,
    /// Shown instead of the table when there are no rows
    pub empty: Option<(&'static str, &'static str)>,
    pub confirm_delete: Option<DeleteConfirm>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddStudentView {
    pub form: StudentForm,
    pub pending: bool,
    pub semester_range: (u8, u8),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountRow {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsView {
    pub cards: Vec<StatCard>,
    pub by_course: Vec<CountRow>,
    pub by_semester: Vec<CountRow>,
    pub loading: bool,
}

/// Build the view for the current state.
pub fn build_view(state: &AppState) -> View {
    // Pages other than Login require a user
    let page = match &state.current_user {
        Some(_) => state.current_page,
        None => Page::Login,
    };

    let shell = match (&state.current_user, page) {
        (Some(user), p) if p != Page::Login => ShellView::Authenticated {
            user_label: user.display_name().to_string(),
            nav: Page::nav_pages()
                .iter()
                .map(|&nav| NavEntry {
                    page: nav,
                    label: nav.title(),
                    active: nav == p,
                })
                .collect(),
        },
        _ => ShellView::Public,
    };

    let page = match page {
        Page::Login => PageView::Login(login_view(state)),
        Page::Dashboard => PageView::Dashboard(DashboardView {
            cards: dashboard_cards(&state.students),
            loading: state.students_loading,
        }),
        Page::Students => PageView::Students(students_view(state)),
        Page::AddStudent => PageView::AddStudent(AddStudentView {
            form: state.student_form.clone(),
            pending: state.student_form_pending,
            semester_range: (MIN_SEMESTER, MAX_SEMESTER),
        }),
        Page::Analytics => PageView::Analytics(analytics_view(state)),
    };

    View { shell, page }
}

fn login_view(state: &AppState) -> LoginView {
    LoginView {
        form: state.auth.clone(),
        pending: state.auth_pending,
        demo_hint: (state.backend_mode == BackendMode::Demo).then_some(DEMO_HINT),
    }
}

fn students_view(state: &AppState) -> StudentsView {
    let rows: Vec<StudentRow> = state.students.iter().map(StudentRow::from).collect();
    let empty = (rows.is_empty() && !state.students_loading)
        .then_some((EMPTY_STUDENTS_TITLE, EMPTY_STUDENTS_HINT));

    StudentsView {
        search: state.search_query.clone(),
        loading: state.students_loading,
        rows,
        empty,
        confirm_delete: state.pending_delete.map(|id| DeleteConfirm {
            id,
            prompt: DELETE_PROMPT,
        }),
    }
}

/// Number of distinct course names
pub fn distinct_courses(students: &[Student]) -> usize {
    students.iter().map(|s| s.course.as_str()).collect::<HashSet<_>>().len()
}

/// Highest semester, 0 when there are no students
pub fn max_semester(students: &[Student]) -> u8 {
    students.iter().map(|s| s.semester).max().unwrap_or(0)
}

pub fn dashboard_cards(students: &[Student]) -> Vec<StatCard> {
    vec![
        StatCard::new("Total Students", students.len()),
        StatCard::new("Active Courses", distinct_courses(students)),
        StatCard::new("Max Semester", max_semester(students)),
    ]
}

/// Students per course, largest first, ties by course name
pub fn students_by_course(students: &[Student]) -> Vec<CountRow> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for student in students {
        *counts.entry(student.course.as_str()).or_default() += 1;
    }

    let mut rows: Vec<CountRow> = counts
        .into_iter()
        .map(|(course, count)| CountRow {
            label: course.to_string(),
            count,
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    rows
}

/// Students per semester as "Sem N", ascending
pub fn students_by_semester(students: &[Student]) -> Vec<CountRow> {
    let mut counts: BTreeMap<u8, usize> = BTreeMap::new();
    for student in students {
        *counts.entry(student.semester).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(semester, count)| CountRow {
            label: format!("Sem {}", semester),
            count,
        })
        .collect()
}

fn analytics_view(state: &AppState) -> AnalyticsView {
    let students = &state.students;
    let courses = distinct_courses(students);
    let average = if courses == 0 {
        "0".to_string()
    } else {
        format!("{:.1}", students.len() as f64 / courses as f64)
    };

    AnalyticsView {
        cards: vec![
            StatCard::new("Total Students", students.len()),
            StatCard::new("Active Courses", courses),
            StatCard::new("Avg Students per Course", average),
        ],
        by_course: students_by_course(students),
        by_semester: students_by_semester(students),
        loading: state.students_loading,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::demo::demo_students;
    use shared::UserInfo;

    fn logged_in(page: Page) -> AppState {
        let mut state = AppState::new(BackendMode::Demo);
        state.current_user = Some(UserInfo {
            full_name: Some("Maria Lopez".to_string()),
            ..UserInfo::new("maria")
        });
        state.current_page = page;
        state.students = demo_students();
        state
    }

    fn card<'a>(cards: &'a [StatCard], label: &str) -> &'a str {
        cards
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.value.as_str())
            .unwrap()
    }

    #[test]
    fn test_logged_out_always_renders_login() {
        let mut state = AppState::new(BackendMode::Remote);
        state.current_page = Page::Students;

        let view = build_view(&state);
        assert_eq!(view.shell, ShellView::Public);
        match view.page {
            PageView::Login(login) => assert_eq!(login.demo_hint, None),
            other => panic!("expected login, got {:?}", other),
        }
    }

    #[test]
    fn test_demo_mode_shows_hint() {
        let view = build_view(&AppState::new(BackendMode::Demo));
        match view.page {
            PageView::Login(login) => assert_eq!(login.demo_hint, Some(DEMO_HINT)),
            other => panic!("expected login, got {:?}", other),
        }
    }

    #[test]
    fn test_nav_highlight_follows_page() {
        for page in Page::nav_pages() {
            let view = build_view(&logged_in(*page));
            assert_eq!(view.active_page(), Some(*page));
            match &view.shell {
                ShellView::Authenticated { user_label, nav } => {
                    assert_eq!(user_label, "Maria Lopez");
                    assert_eq!(nav.iter().filter(|e| e.active).count(), 1);
                }
                ShellView::Public => panic!("expected authenticated shell"),
            }
        }
    }

    #[test]
    fn test_dashboard_stats() {
        let view = build_view(&logged_in(Page::Dashboard));
        let PageView::Dashboard(dashboard) = view.page else {
            panic!("expected dashboard");
        };
        assert_eq!(card(&dashboard.cards, "Total Students"), "3");
        assert_eq!(card(&dashboard.cards, "Active Courses"), "2");
        assert_eq!(card(&dashboard.cards, "Max Semester"), "4");
    }

    #[test]
    fn test_dashboard_stats_when_empty() {
        let mut state = logged_in(Page::Dashboard);
        state.students.clear();
        let PageView::Dashboard(dashboard) = build_view(&state).page else {
            panic!("expected dashboard");
        };
        assert_eq!(card(&dashboard.cards, "Total Students"), "0");
        assert_eq!(card(&dashboard.cards, "Max Semester"), "0");
    }

    #[test]
    fn test_students_rows_and_empty_state() {
        let mut state = logged_in(Page::Students);
        state.students[1].email = None;
        let PageView::Students(students) = build_view(&state).page else {
            panic!("expected students");
        };
        assert_eq!(students.rows.len(), 3);
        assert_eq!(students.rows[1].email, "-");
        assert_eq!(students.empty, None);

        state.students.clear();
        let PageView::Students(students) = build_view(&state).page else {
            panic!("expected students");
        };
        assert_eq!(students.empty.map(|(title, _)| title), Some(EMPTY_STUDENTS_TITLE));

        state.students_loading = true;
        let PageView::Students(students) = build_view(&state).page else {
            panic!("expected students");
        };
        assert!(students.loading);
        assert_eq!(students.empty, None);
    }

    #[test]
    fn test_pending_delete_shows_dialog() {
        let mut state = logged_in(Page::Students);
        state.pending_delete = Some(2);
        let PageView::Students(students) = build_view(&state).page else {
            panic!("expected students");
        };
        assert_eq!(students.confirm_delete.map(|c| c.id), Some(2));
    }

    #[test]
    fn test_analytics_breakdowns() {
        let PageView::Analytics(analytics) = build_view(&logged_in(Page::Analytics)).page else {
            panic!("expected analytics");
        };
        assert_eq!(card(&analytics.cards, "Avg Students per Course"), "1.5");
        assert_eq!(
            analytics.by_course,
            vec![
                CountRow { label: "Computer Science".to_string(), count: 2 },
                CountRow { label: "Electronics".to_string(), count: 1 },
            ]
        );
        let labels: Vec<&str> = analytics.by_semester.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Sem 2", "Sem 3", "Sem 4"]);
    }

    #[test]
    fn test_add_student_view_carries_form() {
        let mut state = logged_in(Page::AddStudent);
        state.student_form.name = "Ana".to_string();
        let PageView::AddStudent(add) = build_view(&state).page else {
            panic!("expected add student");
        };
        assert_eq!(add.form.name, "Ana");
        assert_eq!(add.semester_range, (1, 8));
    }
}
