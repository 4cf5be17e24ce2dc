use crate::domain::JobId;

/// Where the rendering layer should go after a command.
///
/// Controllers never route themselves. They return one of these and the
/// caller (router, CLI, test) decides what to do with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Stay on the current view.
    Stay,
    /// No usable token: show the login view instead.
    RedirectToLogin,
    Home,
    /// The job search view.
    Jobs,
    JobDetails(JobId),
    Back,
}
