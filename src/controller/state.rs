use crate::core::MovieId;

/// Whether a submit creates a movie or updates the one being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Editing(MovieId),
}

impl FormMode {
    pub fn editing_id(&self) -> Option<MovieId> {
        match self {
            FormMode::Create => None,
            FormMode::Editing(id) => Some(*id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, FormMode::Editing(_))
    }

    pub fn heading(&self) -> &'static str {
        match self {
            FormMode::Create => "Add movie",
            FormMode::Editing(_) => "Edit movie",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Create",
            FormMode::Editing(_) => "Save changes",
        }
    }

    pub fn reset_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Clear",
            FormMode::Editing(_) => "Cancel",
        }
    }
}
