use crate::backend::{ApiError, RegistryStats, RepositorySummary, TagList};
use crate::description::SaveRequest;
use crate::manifest::ManifestContent;
use crate::session::LoginError;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    Navigate(String),
    SelectNext,
    SelectPrevious,
    OpenSelected,
    Back,

    // Clipboard
    CopySelected,
    CopyText(String),
    CopyPullCommand {
        repository: String,
        tag: Option<String>,
    },

    // Overlays
    CloseModals,
    ShowManifest {
        repository: String,
        tag: String,
    },
    ShowSelectedManifest,
    ToggleHelp,

    // Search box
    FocusSearch,
    SearchInput(char),
    SearchBackspace,
    SubmitSearch,

    // Description editor
    EditDescription,
    DescriptionInput(char),
    DescriptionNewline,
    DescriptionBackspace,
    SaveDescription,
    CancelDescription,

    // Session
    LoginInput(char),
    LoginBackspace,
    LoginNextField,
    SubmitLogin,
    Logout,

    // Data
    RefreshStats,
    StatsLoaded(RegistryStats),
    RepositoriesLoaded(Result<Vec<RepositorySummary>, ApiError>),
    RepositoryLoaded {
        repository: String,
        tags: Result<TagList, ApiError>,
        description: Result<String, ApiError>,
    },
    ManifestLoaded {
        repository: String,
        tag: String,
        content: ManifestContent,
    },
    DescriptionSaved {
        request: SaveRequest,
        result: Result<(), ApiError>,
    },
    LoginFinished(Result<(), LoginError>),

    // App control
    Quit,
    None,
}
