use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::brief::Score;
use crate::portfolio::{project, Project, ProjectId};

/// The single overlay currently shown above the page, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "overlay", rename_all = "snake_case")]
pub enum Overlay {
    #[default]
    None,
    ProjectDetail {
        project: ProjectId,
    },
    RecruiterBrief {
        score: Score,
    },
}

/// [`Overlay`] without the brief's score, for deciding what is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    None,
    ProjectDetail(ProjectId),
    RecruiterBrief,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("no project with id {0:?}")]
    UnknownProject(ProjectId),
    #[error("project {0:?} doesn't match the project table")]
    NotInTable(ProjectId),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    overlay: Overlay,
}

impl ViewState {
    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn overlay_kind(&self) -> OverlayKind {
        match self.overlay {
            Overlay::None => OverlayKind::None,
            Overlay::ProjectDetail { project } => OverlayKind::ProjectDetail(project),
            Overlay::RecruiterBrief { .. } => OverlayKind::RecruiterBrief,
        }
    }

    pub fn recruiter_mode(&self) -> bool {
        matches!(self.overlay, Overlay::RecruiterBrief { .. })
    }

    pub fn project_view(&self) -> Option<&'static Project> {
        match self.overlay {
            Overlay::ProjectDetail { project: id } => project(id),
            _ => None,
        }
    }

    /// Score of the open brief.
    pub fn score(&self) -> Option<Score> {
        match self.overlay {
            Overlay::RecruiterBrief { score } => Some(score),
            _ => None,
        }
    }

    /// Opening the brief always starts from the default score.
    pub fn toggle_recruiter(&mut self) {
        self.overlay = if self.recruiter_mode() {
            Overlay::None
        } else {
            Overlay::RecruiterBrief {
                score: Score::default(),
            }
        };
    }

    pub fn close_recruiter(&mut self) {
        if self.recruiter_mode() {
            self.overlay = Overlay::None;
        }
    }

    /// Only records from the static project table can be shown.
    pub fn open_project(&mut self, selected: &Project) -> Result<(), ViewError> {
        match project(selected.id) {
            Some(known) if known == selected => {
                self.overlay = Overlay::ProjectDetail {
                    project: selected.id,
                };
                Ok(())
            }
            Some(_) => Err(ViewError::NotInTable(selected.id)),
            None => Err(ViewError::UnknownProject(selected.id)),
        }
    }

    pub fn open_project_by_id(&mut self, id: ProjectId) -> Result<(), ViewError> {
        let known = project(id).ok_or(ViewError::UnknownProject(id))?;
        self.open_project(known)
    }

    pub fn close_project(&mut self) {
        if matches!(self.overlay, Overlay::ProjectDetail { .. }) {
            self.overlay = Overlay::None;
        }
    }

    /// Returns false when no brief is open.
    pub fn adjust_score(&mut self, new_score: Score) -> bool {
        match &mut self.overlay {
            Overlay::RecruiterBrief { score } => {
                *score = new_score;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::PROJECTS;

    #[test]
    fn test_initial_state() {
        let state = ViewState::default();
        assert!(!state.recruiter_mode());
        assert!(state.project_view().is_none());
        assert_eq!(state.overlay_kind(), OverlayKind::None);
        assert_eq!(state.score(), None);
    }

    #[test]
    fn test_open_and_close_project() {
        for p in PROJECTS {
            let mut state = ViewState::default();
            state.open_project(p).unwrap();
            let shown = state.project_view().expect("project should be shown");
            assert_eq!(shown.title, p.title);
            assert_eq!(shown.description, p.description);
            assert_eq!(shown.tech_list(), p.tech_list());
            assert_eq!(shown.metrics, p.metrics);
            assert_eq!(state.overlay_kind(), OverlayKind::ProjectDetail(p.id));

            state.close_project();
            assert_eq!(state, ViewState::default());
        }
    }

    #[test]
    fn test_open_unknown_project_rejected() {
        let mut state = ViewState::default();
        let res = state.open_project_by_id(ProjectId(404));
        assert_eq!(res, Err(ViewError::UnknownProject(ProjectId(404))));
        assert_eq!(state, ViewState::default());

        state.open_project_by_id(ProjectId(2)).unwrap();
        assert_eq!(state.project_view().map(|p| p.id), Some(ProjectId(2)));
    }

    #[test]
    fn test_open_project_outside_table_rejected() {
        let stray = Project {
            id: ProjectId(99),
            ..PROJECTS[0]
        };
        let mut state = ViewState::default();
        assert_eq!(
            state.open_project(&stray),
            Err(ViewError::UnknownProject(ProjectId(99)))
        );
        assert_eq!(state.overlay_kind(), OverlayKind::None);

        // table id, different record
        let imposter = Project {
            title: "Imposter",
            ..PROJECTS[0]
        };
        assert_eq!(
            state.open_project(&imposter),
            Err(ViewError::NotInTable(PROJECTS[0].id))
        );
        assert!(state.project_view().is_none());

        // a rejected open leaves the current overlay alone
        state.toggle_recruiter();
        assert!(state.open_project(&imposter).is_err());
        assert!(state.recruiter_mode());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut state = ViewState::default();
        state.toggle_recruiter();
        assert!(state.recruiter_mode());
        assert_eq!(state.overlay_kind(), OverlayKind::RecruiterBrief);
        state.toggle_recruiter();
        assert!(!state.recruiter_mode());
        assert_eq!(state, ViewState::default());
    }

    #[test]
    fn test_reopen_resets_score() {
        let mut state = ViewState::default();
        state.toggle_recruiter();
        assert_eq!(state.score(), Some(Score::default()));
        assert!(state.adjust_score(Score::clamped(12)));
        assert_eq!(state.score(), Some(Score::clamped(12)));

        state.close_recruiter();
        assert_eq!(state.score(), None);
        state.toggle_recruiter();
        assert_eq!(state.score().map(|s| s.value()), Some(80));
    }

    #[test]
    fn test_adjust_score_ignored_when_closed() {
        let mut state = ViewState::default();
        assert!(!state.adjust_score(Score::clamped(5)));
        assert_eq!(state, ViewState::default());
    }

    #[test]
    fn test_overlays_exclusive() {
        let mut state = ViewState::default();
        state.open_project(&PROJECTS[0]).unwrap();
        state.toggle_recruiter();
        assert!(state.recruiter_mode());
        assert!(state.project_view().is_none());

        state.open_project(&PROJECTS[1]).unwrap();
        assert!(!state.recruiter_mode());
        assert_eq!(state.project_view(), Some(&PROJECTS[1]));

        // closing the other overlay is a no-op
        state.close_recruiter();
        assert_eq!(state.project_view(), Some(&PROJECTS[1]));
        state.toggle_recruiter();
        state.close_project();
        assert!(state.recruiter_mode());
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut state = ViewState::default();
        state.toggle_recruiter();
        state.adjust_score(Score::clamped(64));
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(
            json,
            r#"{"overlay":{"overlay":"recruiter_brief","score":64}}"#
        );
        let back: ViewState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_project_overlay_serializes_id_only() {
        let mut state = ViewState::default();
        state.open_project_by_id(ProjectId(3)).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"overlay":{"overlay":"project_detail","project":3}}"#);
        let back: ViewState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.project_view(), Some(&PROJECTS[2]));
    }
}
